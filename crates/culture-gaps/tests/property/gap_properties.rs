use culture_core::models::{DimensionId, Profile};
use culture_core::traits::IActionPlanner;
use culture_gaps::{
    calculate_gaps, calculate_multi_profile_gaps, gap_color, gap_severity, pairwise_comparisons,
    GapEngine, SEVERITY_BANDS,
};
use proptest::prelude::*;
use test_fixtures::profile_from;

fn arb_scores() -> impl Strategy<Value = [u8; 8]> {
    prop::array::uniform8(0u8..=100)
}

fn arb_profiles(max: usize) -> impl Strategy<Value = Vec<Profile>> {
    prop::collection::vec(arb_scores(), 0..=max).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(i, scores)| profile_from(i as u32 + 1, &format!("P{}", i + 1), scores))
            .collect()
    })
}

// ── Pairwise gaps are bounded and symmetric ──────────────────────────────

proptest! {
    #[test]
    fn pairwise_gap_bounded_and_symmetric(a in arb_scores(), b in arb_scores()) {
        let p1 = profile_from(1, "A", a);
        let p2 = profile_from(2, "B", b);
        let forward = calculate_gaps(Some(&p1), Some(&p2));
        let backward = calculate_gaps(Some(&p2), Some(&p1));

        prop_assert_eq!(forward.len(), 8);
        for (f, r) in forward.iter().zip(&backward) {
            prop_assert!(f.gap <= 100);
            prop_assert_eq!(f.gap, r.gap);
            prop_assert_eq!(u16::from(f.gap), (i16::from(f.value1) - i16::from(f.value2)).unsigned_abs());
        }
    }
}

// ── Multi-gap extremes hold and are attributed ───────────────────────────

proptest! {
    #[test]
    fn multi_gap_extremes_are_consistent(profiles in arb_profiles(5)) {
        let gaps = calculate_multi_profile_gaps(&profiles);
        if profiles.len() < 2 {
            prop_assert!(gaps.is_empty());
            return Ok(());
        }

        prop_assert_eq!(gaps.len(), 8);
        for (gap, dimension) in gaps.iter().zip(DimensionId::ALL) {
            prop_assert_eq!(gap.dimension, dimension);
            prop_assert_eq!(gap.gap, gap.max - gap.min);
            prop_assert!(!gap.min_profiles.is_empty());
            prop_assert!(!gap.max_profiles.is_empty());
            prop_assert_eq!(gap.all_values.len(), profiles.len());
            for (value, profile) in gap.all_values.iter().zip(&profiles) {
                prop_assert_eq!(value.id, profile.id);
                prop_assert!(gap.min <= value.value && value.value <= gap.max);
            }
        }
    }
}

proptest! {
    #[test]
    fn multi_gap_invariant_under_reversal(profiles in arb_profiles(5)) {
        let mut reversed = profiles.clone();
        reversed.reverse();
        let forward = calculate_multi_profile_gaps(&profiles);
        let backward = calculate_multi_profile_gaps(&reversed);
        for (f, b) in forward.iter().zip(&backward) {
            prop_assert_eq!((f.min, f.max, f.gap), (b.min, b.max, b.gap));
        }
    }
}

// ── Severity and colour agree ────────────────────────────────────────────

proptest! {
    #[test]
    fn severity_and_colour_share_a_band(gap in 0u8..=100) {
        let band = SEVERITY_BANDS.iter().find(|b| b.contains(gap)).unwrap();
        prop_assert_eq!(gap_severity(gap), band.severity);
        prop_assert_eq!(gap_color(gap), band.color);
    }
}

// ── Action plan is short, actionable and sorted ──────────────────────────

proptest! {
    #[test]
    fn action_plan_bounded_and_descending(profiles in arb_profiles(5)) {
        let plan = GapEngine::new().action_plan(&profiles);
        prop_assert!(plan.len() <= 3);
        prop_assert!(plan.iter().all(|item| item.gap >= 20));
        prop_assert!(plan.windows(2).all(|w| w[0].gap >= w[1].gap));

        // Nothing actionable was left out.
        let multi = calculate_multi_profile_gaps(&profiles);
        let actionable = multi.iter().filter(|g| g.gap >= 20).count();
        prop_assert_eq!(plan.len(), actionable.min(3));
    }
}

// ── Pair ranking covers every pair once, most divergent first ────────────

proptest! {
    #[test]
    fn pair_ranking_complete_and_descending(profiles in arb_profiles(5)) {
        let pairs = pairwise_comparisons(&profiles);
        let n = profiles.len();
        let expected = if n < 2 { 0 } else { n * (n - 1) / 2 };
        prop_assert_eq!(pairs.len(), expected);
        prop_assert!(pairs.windows(2).all(|w| w[0].avg_gap >= w[1].avg_gap));
        for pair in &pairs {
            let total: u32 = pair.gaps.iter().map(|g| u32::from(g.gap)).sum();
            prop_assert_eq!(pair.total_gap, total);
            prop_assert!(pair.gaps.iter().all(|g| g.gap <= pair.largest_gap.gap));
        }
    }
}
