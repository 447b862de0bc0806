use proptest::prelude::*;

use intpoly::{PolyError, Polynomial, Term};

fn arb_term() -> impl Strategy<Value = Term> {
    (-20i64..=20, 0u32..8).prop_map(|(c, p)| Term::new(c, p))
}

/// Raw term lists, possibly unsorted, with repeated powers and zeros.
fn arb_terms() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(arb_term(), 0..8)
}

fn arb_poly() -> impl Strategy<Value = Polynomial> {
    arb_terms().prop_map(Polynomial::from_terms)
}

fn arb_poly_nonzero() -> impl Strategy<Value = Polynomial> {
    arb_poly().prop_filter("non-zero polynomial", |p| !p.is_zero())
}

/// Divisors with leading coefficient 1, so integer long division always succeeds.
fn arb_monic() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(-9i64..=9, 0..4).prop_map(|mut coeffs| {
        coeffs.push(1);
        Polynomial::from_coeffs(&coeffs)
    })
}

// ===== Normalization =====

proptest! {
    #[test]
    fn construction_is_normalized(terms in arb_terms()) {
        let p = Polynomial::from_terms(terms);
        prop_assert!(p.is_normalized());
    }
}

proptest! {
    #[test]
    fn normalization_idempotent(p in arb_poly()) {
        let again = Polynomial::from_terms(p.terms().to_vec());
        prop_assert_eq!(again, p);
    }
}

proptest! {
    #[test]
    fn normalization_preserves_coefficient_sums(terms in arb_terms()) {
        let p = Polynomial::from_terms(terms.clone());
        for power in 0..8u32 {
            let expected: i64 = terms
                .iter()
                .filter(|t| t.power() == power)
                .map(|t| t.coefficient())
                .sum();
            prop_assert_eq!(p.coeff(power), expected);
        }
    }
}

proptest! {
    #[test]
    fn term_order_does_not_matter(terms in arb_terms()) {
        let mut reversed = terms.clone();
        reversed.reverse();
        prop_assert_eq!(Polynomial::from_terms(terms), Polynomial::from_terms(reversed));
    }
}

// ===== Addition properties =====

proptest! {
    #[test]
    fn addition_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
    }
}

proptest! {
    #[test]
    fn additive_identity(a in arb_poly()) {
        prop_assert_eq!(&a + &Polynomial::zero(), a.clone());
        prop_assert_eq!(Polynomial::zero() + &a, a);
    }
}

proptest! {
    #[test]
    fn additive_inverse(a in arb_poly()) {
        prop_assert!((&a + &(-&a)).is_zero());
    }
}

proptest! {
    #[test]
    fn addition_stays_normalized(a in arb_poly(), b in arb_poly()) {
        prop_assert!((&a + &b).is_normalized());
        prop_assert!((&a - &b).is_normalized());
    }
}

// ===== Subtraction properties =====

proptest! {
    #[test]
    fn subtraction_definition(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }
}

proptest! {
    #[test]
    fn subtraction_self_is_zero(a in arb_poly()) {
        prop_assert!((&a - &a).is_zero());
    }
}

// ===== Multiplication properties =====

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }
}

proptest! {
    #[test]
    fn multiplicative_identity(a in arb_poly()) {
        prop_assert_eq!(&a * &Polynomial::constant(1), a.clone());
        prop_assert_eq!(&a * 1, a);
    }
}

proptest! {
    #[test]
    fn multiplicative_zero(a in arb_poly()) {
        prop_assert!((&a * &Polynomial::zero()).is_zero());
        prop_assert!((&a * 0).is_zero());
    }
}

proptest! {
    #[test]
    fn scalar_commutative(a in arb_poly(), k in -10i64..=10) {
        prop_assert_eq!(&a * k, k * &a);
    }
}

proptest! {
    #[test]
    fn scale_in_place_matches_operator(a in arb_poly(), k in -10i64..=10) {
        let mut scaled = a.clone();
        scaled *= k;
        prop_assert!(scaled.is_normalized());
        prop_assert_eq!(scaled, &a * k);
    }
}

proptest! {
    #[test]
    fn term_product_matches_monomial(a in arb_poly(), t in arb_term()) {
        prop_assert_eq!(&a * t, &a * &Polynomial::from(t));
    }
}

// ===== Distributivity =====

proptest! {
    #[test]
    fn left_distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }
}

proptest! {
    #[test]
    fn right_distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&(&a + &b) * &c, &a * &c + &b * &c);
    }
}

// ===== Degree laws =====

proptest! {
    #[test]
    fn degree_of_sum(a in arb_poly(), b in arb_poly()) {
        let sum = &a + &b;
        prop_assert!(sum.signed_degree() <= a.signed_degree().max(b.signed_degree()));
    }
}

proptest! {
    #[test]
    fn degree_of_product(a in arb_poly_nonzero(), b in arb_poly_nonzero()) {
        let product = &a * &b;
        prop_assert_eq!(product.signed_degree(), a.signed_degree() + b.signed_degree());
    }
}

// ===== Division properties =====

proptest! {
    #[test]
    fn division_reconstructs_dividend(p in arb_poly(), d in arb_poly_nonzero()) {
        if let Ok((q, r)) = p.div_rem(&d) {
            prop_assert_eq!(&q * &d + &r, p);
            prop_assert!(r.signed_degree() < d.signed_degree());
            prop_assert!(q.is_normalized());
            prop_assert!(r.is_normalized());
        }
    }
}

proptest! {
    #[test]
    fn monic_division_always_succeeds(p in arb_poly(), d in arb_monic()) {
        let (q, r) = p.div_rem(&d).unwrap();
        prop_assert_eq!(&q * &d + &r, p);
    }
}

proptest! {
    #[test]
    fn exact_product_divides(a in arb_poly(), d in arb_poly_nonzero()) {
        let product = &a * &d;
        let (q, r) = product.div_rem(&d).unwrap();
        prop_assert_eq!(q, a);
        prop_assert!(r.is_zero());
    }
}

proptest! {
    #[test]
    fn division_by_zero_is_reported(p in arb_poly()) {
        prop_assert_eq!(p.div_rem(&Polynomial::zero()), Err(PolyError::DivisionByZero));
        prop_assert!((&p / &Polynomial::zero()).is_zero());
    }
}

// ===== Equality =====

proptest! {
    #[test]
    fn equality_reflexive(a in arb_poly()) {
        prop_assert_eq!(a.clone(), a);
    }
}

proptest! {
    #[test]
    fn equality_symmetric(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a != b, !(a == b));
    }
}

// ===== Evaluation =====

proptest! {
    #[test]
    fn eval_is_a_ring_homomorphism(a in arb_poly(), b in arb_poly(), x in -3i64..=3) {
        prop_assert_eq!((&a + &b).eval(x), a.eval(x) + b.eval(x));
        prop_assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
    }
}

proptest! {
    #[test]
    fn derivative_product_rule(a in arb_poly(), b in arb_poly()) {
        let lhs = (&a * &b).derivative();
        let rhs = &a.derivative() * &b + &a * &b.derivative();
        prop_assert_eq!(lhs, rhs);
    }
}

// ===== Concrete scenarios =====

#[test]
fn render_linear() {
    let p = Polynomial::from_terms([Term::new(3, 0), Term::new(2, 1)]);
    assert_eq!(p.to_string(), "2x + 3");
}

#[test]
fn sum_cancels_constant() {
    let a = Polynomial::from_terms([Term::new(1, 0), Term::new(1, 1)]);
    let b = Polynomial::from_terms([Term::new(-1, 0), Term::new(1, 1)]);
    assert_eq!((a + b).terms(), &[Term::new(2, 1)]);
}

#[test]
fn difference_of_squares_divides() {
    let p = Polynomial::from_coeffs(&[-1, 0, 1]);
    let (q, r) = p.div_rem(&Polynomial::linear(-1, 1)).unwrap();
    assert_eq!(q, Polynomial::linear(1, 1));
    assert!(r.is_zero());
}

#[test]
fn difference_of_squares_product() {
    let p = Polynomial::linear(1, 1) * Polynomial::linear(-1, 1);
    assert_eq!(p, Polynomial::from_coeffs(&[-1, 0, 1]));
}

#[test]
fn zero_polynomial_degree_and_coeff() {
    let z = Polynomial::zero();
    assert_eq!(z.signed_degree(), -1);
    assert_eq!(z.coeff(5), 0);
}

#[test]
fn divide_by_zero_returns_zero() {
    let p = Polynomial::from_coeffs(&[1, 2, 3]);
    assert!((p / Polynomial::zero()).is_zero());
}
