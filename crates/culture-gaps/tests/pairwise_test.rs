use culture_core::models::DimensionId;
use culture_gaps::{calculate_gaps, largest_gap};
use test_fixtures::{profile, profile_from};

#[test]
fn one_record_per_dimension_in_canonical_order() {
    let a = profile_from(1, "A", [0, 10, 20, 30, 40, 50, 60, 70]);
    let b = profile_from(2, "B", [100, 10, 0, 35, 40, 45, 90, 0]);
    let gaps = calculate_gaps(Some(&a), Some(&b));

    let dims: Vec<DimensionId> = gaps.iter().map(|g| g.dimension).collect();
    assert_eq!(dims, DimensionId::ALL.to_vec());

    let values: Vec<u8> = gaps.iter().map(|g| g.gap).collect();
    assert_eq!(values, vec![100, 0, 20, 5, 0, 5, 30, 70]);
    assert_eq!(gaps[0].value1, 0);
    assert_eq!(gaps[0].value2, 100);
}

#[test]
fn gap_is_symmetric() {
    let a = profile(1, "A", 30, &[(DimensionId::Leading, 90)]);
    let b = profile(2, "B", 60, &[]);
    let forward: Vec<u8> = calculate_gaps(Some(&a), Some(&b)).iter().map(|g| g.gap).collect();
    let backward: Vec<u8> = calculate_gaps(Some(&b), Some(&a)).iter().map(|g| g.gap).collect();
    assert_eq!(forward, backward);
}

#[test]
fn absent_profile_yields_empty() {
    let a = profile(1, "A", 50, &[]);
    assert!(calculate_gaps(Some(&a), None).is_empty());
    assert!(calculate_gaps(None, Some(&a)).is_empty());
    assert!(calculate_gaps(None, None).is_empty());
}

#[test]
fn largest_gap_prefers_first_dimension_on_tie() {
    let a = profile(
        1,
        "A",
        50,
        &[(DimensionId::Persuading, 10), (DimensionId::Trusting, 90)],
    );
    let b = profile(2, "B", 50, &[]);
    let largest = largest_gap(Some(&a), Some(&b)).unwrap();
    assert_eq!(largest.dimension, DimensionId::Persuading);
    assert_eq!(largest.gap, 40);
}

#[test]
fn largest_gap_of_identical_profiles_is_first_dimension() {
    let a = profile(1, "A", 50, &[]);
    let largest = largest_gap(Some(&a), Some(&a)).unwrap();
    assert_eq!(largest.dimension, DimensionId::Communicating);
    assert_eq!(largest.gap, 0);
}

#[test]
fn largest_gap_absent_profile_is_none() {
    let a = profile(1, "A", 50, &[]);
    assert!(largest_gap(Some(&a), None).is_none());
}
