use culture_core::models::{DimensionId, ProfileId};
use culture_gaps::pairwise_comparisons;
use test_fixtures::{profile, profile_from};

#[test]
fn produces_every_unordered_pair() {
    for n in 2..=5u32 {
        let profiles: Vec<_> = (1..=n)
            .map(|id| profile(id, &format!("P{id}"), (id * 10) as u8, &[]))
            .collect();
        let pairs = pairwise_comparisons(&profiles);
        assert_eq!(pairs.len(), (n * (n - 1) / 2) as usize);
        // Pair members keep input order: profile1 precedes profile2.
        assert!(pairs.iter().all(|p| p.profile1.0 < p.profile2.0));
    }
}

#[test]
fn fewer_than_two_profiles_yield_empty() {
    assert!(pairwise_comparisons(&[]).is_empty());
    assert!(pairwise_comparisons(&[profile(1, "Solo", 50, &[])]).is_empty());
}

#[test]
fn ordered_by_average_gap_descending() {
    let profiles = [
        profile(1, "A", 50, &[]),
        profile(2, "B", 60, &[]),
        profile(3, "C", 90, &[]),
    ];
    let pairs = pairwise_comparisons(&profiles);
    let averages: Vec<f64> = pairs.iter().map(|p| p.avg_gap).collect();
    assert_eq!(averages, vec![40.0, 30.0, 10.0]);
    assert_eq!((pairs[0].profile1, pairs[0].profile2), (ProfileId(1), ProfileId(3)));
}

#[test]
fn equal_averages_keep_generation_order() {
    let profiles = [
        profile(1, "A", 50, &[]),
        profile(2, "B", 60, &[]),
        profile(3, "C", 40, &[]),
    ];
    // (1,2) and (1,3) both average 10; (2,3) averages 20.
    let pairs = pairwise_comparisons(&profiles);
    let order: Vec<(u32, u32)> = pairs.iter().map(|p| (p.profile1.0, p.profile2.0)).collect();
    assert_eq!(order, vec![(2, 3), (1, 2), (1, 3)]);
}

#[test]
fn pair_summary_fields() {
    let a = profile_from(1, "A", [10, 20, 30, 40, 50, 60, 70, 80]);
    let b = profile_from(2, "B", [80, 20, 30, 40, 50, 60, 70, 10]);
    let pairs = pairwise_comparisons(&[a, b]);
    let pair = &pairs[0];

    assert_eq!(pair.profile1_name, "A");
    assert_eq!(pair.profile2_name, "B");
    assert_eq!(pair.gaps.len(), 8);
    assert_eq!(pair.total_gap, 140);
    assert!((pair.avg_gap - 17.5).abs() < f64::EPSILON);
    // Communicating and scheduling tie at 70; the earlier dimension wins.
    assert_eq!(pair.largest_gap.dimension, DimensionId::Communicating);
    assert_eq!(pair.largest_gap.gap, 70);
}
