//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use intpoly::{Polynomial, Term};

#[test]
fn term_roundtrip() {
    let t = Term::new(-7, 3);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "[-7,3]");
    let back: Term = serde_json::from_str(&json).unwrap();
    assert_eq!(t, back);
}

#[test]
fn poly_roundtrip() {
    // x^2 + 2x + 3
    let p = Polynomial::from_coeffs(&[3, 2, 1]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[[3,0],[2,1],[1,2]]");
    let q: Polynomial = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_roundtrip() {
    let p = Polynomial::zero();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let q: Polynomial = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn deserialize_normalizes() {
    // Unsorted, with a repeated power and a zero coefficient
    let json = "[[1,4],[0,2],[5,0],[-1,4],[2,1]]";
    let p: Polynomial = serde_json::from_str(json).unwrap();
    assert!(p.is_normalized());
    assert_eq!(p, Polynomial::linear(5, 2));
}

#[test]
fn negative_power_fails() {
    let json = "[[1,-1]]";
    let result: Result<Polynomial, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn malformed_term_fails() {
    let json = "[[1,2,3]]";
    let result: Result<Polynomial, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
