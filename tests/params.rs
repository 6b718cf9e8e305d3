#![cfg(feature = "serde")]

use seedbloom::{BloomFilter, FilterParams, SizingPolicy};

#[test]
fn test_params_from_json() {
    let params: FilterParams = serde_json::from_str(
        r#"{ "expected_items": 20, "false_positive_probability": 0.05, "sizing": "round_up" }"#,
    )
    .expect("must deserialise");

    assert_eq!(params.sizing, SizingPolicy::RoundUp);

    let b = BloomFilter::from_params(params).unwrap();
    assert_eq!(b.bit_array_size(), 125);
    assert_eq!(b.hash_round_count(), 5);
}

#[test]
fn test_params_default_sizing() {
    let params: FilterParams =
        serde_json::from_str(r#"{ "expected_items": 20, "false_positive_probability": 0.05 }"#)
            .expect("must deserialise");

    assert_eq!(params, FilterParams::new(20, 0.05));
}

#[test]
fn test_params_round_trip() {
    let params = FilterParams::new(1000, 0.001);
    let got = serde_json::to_string(&params).expect("must serialise");
    assert_eq!(
        got,
        r#"{"expected_items":1000,"false_positive_probability":0.001,"sizing":"truncate"}"#
    );

    let round_trip: FilterParams = serde_json::from_str(&got).expect("must deserialise");
    assert_eq!(params, round_trip);
}

#[test]
fn test_invalid_params_rejected_at_build() {
    let params: FilterParams =
        serde_json::from_str(r#"{ "expected_items": 0, "false_positive_probability": 0.05 }"#)
            .expect("must deserialise");

    assert!(params.validate().is_err());
    assert!(BloomFilter::from_params(params).is_err());
}
