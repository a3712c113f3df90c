//! Golden scenarios: each fixture's profiles run through a full report and are
//! checked against the recorded status, largest dimension, action plan and pair order.

use culture_core::models::GapReport;
use culture_gaps::GapEngine;
use serde_json::Value;
use test_fixtures::{list_fixtures, load_fixture_value, load_profiles};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run(path: &str) -> (GapReport, Value) {
    let profiles = load_profiles(path);
    let expected = load_fixture_value(path)["expected"].clone();
    (GapEngine::new().report(&profiles), expected)
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn check(path: &str) {
    let (report, expected) = run(path);

    assert_eq!(
        serde_json::to_value(report.status).unwrap(),
        expected["status"],
        "{path}: status"
    );
    assert_eq!(
        report.ranked_gaps[0].gap.dimension.as_str(),
        expected["largest_dimension"].as_str().unwrap(),
        "{path}: largest dimension"
    );
    assert!(report.ranked_gaps[0].is_largest);

    let plan = expected["action_plan"].as_array().unwrap();
    assert_eq!(report.action_plan.len(), plan.len(), "{path}: plan length");
    for (item, want) in report.action_plan.iter().zip(plan) {
        assert_eq!(item.dimension.as_str(), want["dimension"].as_str().unwrap());
        assert_eq!(u64::from(item.gap), want["gap"].as_u64().unwrap());
        assert_eq!(item.severity.as_str(), want["severity"].as_str().unwrap());
        assert_eq!(item.min_profiles, strings(&want["min_profiles"]), "{path}: min holders");
        assert_eq!(item.max_profiles, strings(&want["max_profiles"]), "{path}: max holders");
        assert!(!item.recommendations.is_empty());
    }

    if let Some(order) = expected.get("pair_order").and_then(Value::as_array) {
        let actual: Vec<(u64, u64)> = report
            .pairs
            .iter()
            .map(|p| (u64::from(p.profile1.0), u64::from(p.profile2.0)))
            .collect();
        let want: Vec<(u64, u64)> = order
            .iter()
            .map(|pair| (pair[0].as_u64().unwrap(), pair[1].as_u64().unwrap()))
            .collect();
        assert_eq!(actual, want, "{path}: pair order");
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn golden_two_profiles_single_gap() {
    check("golden/gaps/two_profiles_single_gap.json");
}

#[test]
fn golden_three_profiles_ties() {
    check("golden/gaps/three_profiles_ties.json");
}

#[test]
fn golden_aligned_team() {
    check("golden/gaps/aligned_team.json");
}

#[test]
fn golden_five_offices() {
    check("golden/gaps/five_offices.json");
}

#[test]
fn golden_aligned_team_names_unnamed_profile_by_id() {
    let (report, _) = run("golden/gaps/aligned_team.json");
    let names: Vec<&str> = report.ranked_gaps[0]
        .gap
        .all_values
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names[2], "Profile 3");
}

#[test]
fn golden_five_offices_ties_on_maximum() {
    let (report, _) = run("golden/gaps/five_offices.json");
    let leading = report
        .ranked_gaps
        .iter()
        .find(|r| r.gap.dimension.as_str() == "leading")
        .unwrap();
    assert_eq!(leading.gap.gap, 55);
    assert_eq!(leading.gap.max_profiles, vec!["Tokyo", "Lagos"]);
}

#[test]
fn every_golden_file_produces_a_full_report() {
    let files = list_fixtures("golden/gaps");
    assert!(files.len() >= 4);
    for path in files {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let (report, _) = run(&format!("golden/gaps/{name}"));
        assert_eq!(report.ranked_gaps.len(), 8, "{name}");
        let n = report.profile_count;
        assert_eq!(report.pairs.len(), n * (n - 1) / 2, "{name}");
    }
}
