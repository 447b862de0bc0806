use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use tracing::{debug, trace};

use crate::error::{PolyError, Result};
use crate::structures::term::Term;
use crate::utils::gcd_u64;

/// Univariate polynomial with `i64` coefficients.
///
/// Only non-zero terms are stored, sorted by strictly ascending power.
/// The zero polynomial is represented as an empty term vector.
///
/// Every constructor and operator returns a value in this normal form, so
/// structural equality is polynomial equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Create the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let zero = Polynomial::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), None);
    /// assert_eq!(zero.signed_degree(), -1);
    /// ```
    pub const fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Create a constant polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let c = Polynomial::constant(5);
    /// assert_eq!(c.degree(), Some(0));
    /// assert_eq!(c.eval(10), 5);
    ///
    /// assert!(Polynomial::constant(0).is_zero());
    /// ```
    pub fn constant(c: i64) -> Self {
        Self::monomial(c, 0)
    }

    /// Create the linear polynomial `a*x + b`.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let p = Polynomial::linear(3, 2); // 2x + 3
    /// assert_eq!(p.to_string(), "2x + 3");
    /// ```
    pub fn linear(b: i64, a: i64) -> Self {
        let mut terms = Vec::with_capacity(2);
        if b != 0 {
            terms.push(Term::new(b, 0));
        }
        if a != 0 {
            terms.push(Term::new(a, 1));
        }
        Self { terms }
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(1, 1)
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let m = Polynomial::monomial(3, 2); // 3x^2
    /// assert_eq!(m.degree(), Some(2));
    /// assert_eq!(m.eval(2), 12);
    /// ```
    pub fn monomial(c: i64, n: u32) -> Self {
        if c == 0 {
            return Self::zero();
        }
        Self {
            terms: vec![Term::new(c, n)],
        }
    }

    /// Create a polynomial from arbitrary terms.
    ///
    /// Terms may come in any order, repeat a power, or carry a zero
    /// coefficient; the result is normalized.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::{Polynomial, Term};
    ///
    /// let p = Polynomial::from_terms([Term::new(3, 0), Term::new(2, 1), Term::new(1, 1)]);
    /// assert_eq!(p.to_string(), "3x + 3");
    /// ```
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut poly = Self {
            terms: terms.into_iter().collect(),
        };
        poly.normalize();
        poly
    }

    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`; zero entries are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// // 3 + 0x + x^2
    /// let p = Polynomial::from_coeffs(&[3, 0, 1]);
    /// assert_eq!(p.to_string(), "x^2 + 3");
    /// assert_eq!(p.num_terms(), 2);
    /// ```
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        let terms = coeffs
            .iter()
            .zip(0u32..)
            .filter(|&(&c, _)| c != 0)
            .map(|(&c, power)| Term::new(c, power))
            .collect();
        Self { terms }
    }

    /// Generate a random polynomial of degree at most `max_degree`.
    ///
    /// Each coefficient of `x^0..=x^max_degree` is drawn uniformly from
    /// `-bound..=bound`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R, max_degree: u32, bound: u32) -> Self {
        let bound = i64::from(bound);
        (0..=max_degree)
            .map(|power| Term::new(rng.gen_range(-bound..=bound), power))
            .collect()
    }

    /// Check if this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if this polynomial has no term of positive power.
    pub fn is_constant(&self) -> bool {
        matches!(self.degree(), None | Some(0))
    }

    /// Number of non-zero terms.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.last().map(Term::power)
    }

    /// Get the degree with `-1` standing for the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// assert_eq!(Polynomial::zero().signed_degree(), -1);
    /// assert_eq!(Polynomial::constant(4).signed_degree(), 0);
    /// assert_eq!(Polynomial::from_coeffs(&[0, 0, 0, 9]).signed_degree(), 3);
    /// ```
    pub fn signed_degree(&self) -> i64 {
        self.degree().map_or(-1, i64::from)
    }

    /// Get the term of highest power.
    pub fn leading_term(&self) -> Option<Term> {
        self.terms.last().copied()
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<i64> {
        self.terms.last().map(Term::coefficient)
    }

    /// Get the coefficient of `x^power`.
    ///
    /// Any integer type is accepted. Powers that are negative, too large
    /// for a `u32`, or simply absent all yield `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let p = Polynomial::from_coeffs(&[4, 0, -2]);
    /// assert_eq!(p.coeff(2), -2);
    /// assert_eq!(p.coeff(1), 0);
    /// assert_eq!(p.coeff(-1), 0);
    /// assert_eq!(p.coeff(u64::MAX), 0);
    /// ```
    pub fn coeff<T: TryInto<u32>>(&self, power: T) -> i64 {
        let power = match power.try_into() {
            Ok(p) => p,
            Err(_) => return 0,
        };
        match self.terms.binary_search_by_key(&power, Term::power) {
            Ok(i) => self.terms[i].coefficient(),
            Err(_) => 0,
        }
    }

    /// Get a slice of all terms in ascending order of power.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterate over the terms in ascending order of power.
    pub fn iter(&self) -> core::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Check the normal-form invariant.
    ///
    /// Powers must be strictly ascending and no coefficient may be zero.
    /// Every value handed out by this crate satisfies this; a `false` here
    /// is a bug in the crate, not in the caller.
    pub fn is_normalized(&self) -> bool {
        self.terms.windows(2).all(|w| w[0].power() < w[1].power())
            && self.terms.iter().all(|t| !t.is_zero())
    }

    /// Sort by power, merge equal powers, drop zero coefficients.
    fn normalize(&mut self) {
        self.terms.sort_by_key(Term::power);
        self.terms.dedup_by(|next, kept| {
            if next.power() != kept.power() {
                return false;
            }
            *kept = Term::new(kept.coefficient() + next.coefficient(), kept.power());
            true
        });
        self.terms.retain(|t| !t.is_zero());
        debug_assert!(self.is_normalized());
    }

    /// Merge two normalized term slices, scaling `rhs` by `sign`.
    ///
    /// Both inputs are sorted by power, so a single walk produces a
    /// normalized result without re-sorting.
    fn merge(lhs: &[Term], rhs: &[Term], sign: i64) -> Self {
        let mut terms = Vec::with_capacity(lhs.len() + rhs.len());
        let (mut i, mut j) = (0, 0);

        while i < lhs.len() && j < rhs.len() {
            let (a, b) = (lhs[i], rhs[j] * sign);
            match a.power().cmp(&b.power()) {
                Ordering::Less => {
                    terms.push(a);
                    i += 1;
                }
                Ordering::Greater => {
                    terms.push(b);
                    j += 1;
                }
                Ordering::Equal => {
                    let c = a.coefficient() + b.coefficient();
                    if c != 0 {
                        terms.push(Term::new(c, a.power()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend_from_slice(&lhs[i..]);
        terms.extend(rhs[j..].iter().map(|&t| t * sign));

        Self { terms }
    }

    /// Multiply every term by `t`.
    ///
    /// # Panics
    ///
    /// Panics if a resulting power exceeds `u32::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::{Polynomial, Term};
    ///
    /// let p = Polynomial::linear(1, 1); // x + 1
    /// assert_eq!(p.mul_term(Term::new(3, 2)).to_string(), "3x^3 + 3x^2");
    /// ```
    pub fn mul_term(&self, t: Term) -> Self {
        if t.is_zero() {
            return Self::zero();
        }
        Self::from_terms(self.terms.iter().map(|&s| s * t))
    }

    /// Polynomial product that reports power overflow instead of panicking.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::{PolyError, Polynomial};
    ///
    /// let big = Polynomial::monomial(1, u32::MAX);
    /// assert_eq!(
    ///     big.checked_mul(&Polynomial::x()),
    ///     Err(PolyError::PowerOverflow { lhs: u32::MAX, rhs: 1 })
    /// );
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let mut terms = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for &a in &self.terms {
            for &b in &rhs.terms {
                let t = a.checked_mul(b).ok_or(PolyError::PowerOverflow {
                    lhs: a.power(),
                    rhs: b.power(),
                })?;
                terms.push(t);
            }
        }
        Ok(Self::from(terms))
    }

    /// Euclidean division with integer coefficients.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)`.
    ///
    /// Every step must divide the leading coefficient of the running
    /// remainder exactly by the leading coefficient of `divisor`; when it
    /// does not, the division fails with [`PolyError::NotDivisible`].
    /// Dividing by the zero polynomial fails with
    /// [`PolyError::DivisionByZero`], and `i64::MIN` over `-1` with
    /// [`PolyError::CoefficientOverflow`].
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// // (x^2 - 1) / (x - 1) = (x + 1), remainder 0
    /// let dividend = Polynomial::from_coeffs(&[-1, 0, 1]);
    /// let divisor = Polynomial::linear(-1, 1);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, Polynomial::linear(1, 1));
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let lead = divisor.leading_term().ok_or(PolyError::DivisionByZero)?;

        let mut quotient = Vec::new();
        let mut remainder = self.clone();

        while let Some(top) = remainder.leading_term() {
            if top.power() < lead.power() {
                break;
            }

            let (dividend, lc) = (top.coefficient(), lead.coefficient());
            let coeff = match (dividend.checked_rem(lc), dividend.checked_div(lc)) {
                (Some(0), Some(q)) => Ok(q),
                (Some(_), _) => Err(PolyError::NotDivisible {
                    dividend,
                    divisor: lc,
                    power: top.power(),
                }),
                _ => Err(PolyError::CoefficientOverflow {
                    dividend,
                    divisor: lc,
                    power: top.power(),
                }),
            };
            let coeff = coeff.map_err(|err| {
                debug!(
                    dividend_degree = self.signed_degree(),
                    divisor_degree = divisor.signed_degree(),
                    %err,
                    "polynomial division failed"
                );
                err
            })?;

            let step = Term::new(coeff, top.power() - lead.power());
            trace!(%step, %remainder, "long division step");

            // The subtraction cancels `top` exactly, so the degree drops.
            let product = divisor.mul_term(step);
            remainder = Self::merge(&remainder.terms, &product.terms, -1);
            quotient.push(step);
        }

        Ok((Self::from_terms(quotient), remainder))
    }

    /// Quotient of [`div_rem`](Self::div_rem), discarding the remainder.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of [`div_rem`](Self::div_rem).
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Check whether `divisor` divides `self` exactly over the integers.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let p = Polynomial::from_coeffs(&[-1, 0, 1]); // x^2 - 1
    /// assert!(p.divides_by(&Polynomial::linear(1, 1)));
    /// assert!(!p.divides_by(&Polynomial::linear(2, 1)));
    /// assert!(!p.divides_by(&Polynomial::zero()));
    /// ```
    pub fn divides_by(&self, divisor: &Self) -> bool {
        matches!(self.div_rem(divisor), Ok((_, r)) if r.is_zero())
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// Gaps between stored powers are bridged with `x.pow(gap)`.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// // p(x) = 1 + 2x + 3x^2
    /// let p = Polynomial::from_coeffs(&[1, 2, 3]);
    /// assert_eq!(p.eval(2), 17);
    /// assert_eq!(p.eval(-1), 2);
    /// ```
    pub fn eval(&self, x: i64) -> i64 {
        let mut prev = match self.degree() {
            Some(d) => d,
            None => return 0,
        };

        let mut acc = 0;
        for t in self.terms.iter().rev() {
            acc = acc * x.pow(prev - t.power()) + t.coefficient();
            prev = t.power();
        }
        acc * x.pow(prev)
    }

    /// Compute the formal derivative of this polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// // f(x) = x^3 + 2x^2 + 3x + 4
    /// let f = Polynomial::from_coeffs(&[4, 3, 2, 1]);
    ///
    /// // f'(x) = 3x^2 + 4x + 3
    /// assert_eq!(f.derivative(), Polynomial::from_coeffs(&[3, 4, 3]));
    /// ```
    pub fn derivative(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .filter(|t| t.power() > 0)
            .map(|t| Term::new(t.coefficient() * i64::from(t.power()), t.power() - 1))
            .collect();
        Self { terms }
    }

    /// Raise to a non-negative power by repeated squaring.
    ///
    /// `p.pow(0)` is the constant `1`, including for the zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the resulting degree exceeds `u32::MAX`.
    pub fn pow(&self, exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::constant(1);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Greatest common divisor of the coefficients.
    ///
    /// `0` for the zero polynomial; `2^63` when every coefficient is
    /// `i64::MIN`.
    pub fn content(&self) -> u64 {
        self.terms
            .iter()
            .fold(0, |acc, t| gcd_u64(acc, t.coefficient().unsigned_abs()))
    }

    /// Divide out the content and make the leading coefficient positive.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::Polynomial;
    ///
    /// let p = Polynomial::from_coeffs(&[6, -4, -2]); // -2x^2 - 4x + 6
    /// assert_eq!(p.content(), 2);
    /// assert_eq!(p.primitive_part(), Polynomial::from_coeffs(&[-3, 2, 1]));
    /// ```
    pub fn primitive_part(&self) -> Self {
        let lc = match self.leading_coeff() {
            Some(lc) => lc,
            None => return Self::zero(),
        };
        let content = i128::from(self.content());
        let sign = lc.signum();
        let terms = self
            .terms
            .iter()
            .map(|t| {
                // |q| <= |c|, so the narrowing is exact
                let q = (i128::from(t.coefficient()) / content) as i64;
                Term::new(q * sign, t.power())
            })
            .collect();
        Self { terms }
    }
}

/* ---- Conversions and iteration ---- */

impl From<i64> for Polynomial {
    fn from(c: i64) -> Self {
        Self::constant(c)
    }
}

impl From<Term> for Polynomial {
    fn from(t: Term) -> Self {
        Self::monomial(t.coefficient(), t.power())
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = core::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

/* ---- Arithmetic operators ---- */

/// Implement the owned and mixed-reference forms of a binary operator in
/// terms of the `&Polynomial op &Polynomial` form.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Polynomial> for &Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $imp::$method(self, &rhs)
            }
        }
    };
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::merge(&self.terms, &rhs.terms, 1)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::merge(&self.terms, &rhs.terms, -1)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Distributive product: every pair of terms, then normalize.
    ///
    /// Panics on power overflow; see [`Polynomial::checked_mul`].
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        match self.checked_mul(rhs) {
            Ok(p) => p,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Division that never fails: errors yield the zero polynomial.
///
/// Use [`Polynomial::div_rem`] or [`Polynomial::checked_div`] to observe
/// the error.
impl Div<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: &Polynomial) -> Polynomial {
        self.checked_div(rhs).unwrap_or_else(|err| {
            debug!(%err, "division operator returning zero polynomial");
            Polynomial::zero()
        })
    }
}

/// Remainder that never fails: errors yield the zero polynomial.
impl Rem<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn rem(self, rhs: &Polynomial) -> Polynomial {
        self.checked_rem(rhs).unwrap_or_else(|err| {
            debug!(%err, "remainder operator returning zero polynomial");
            Polynomial::zero()
        })
    }
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);
forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);

impl Neg for Polynomial {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for t in &mut self.terms {
            *t = -*t;
        }
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// In-place scaling by an integer.
impl MulAssign<i64> for Polynomial {
    fn mul_assign(&mut self, rhs: i64) {
        for t in &mut self.terms {
            *t = *t * rhs;
        }
        self.normalize();
    }
}

/// Scalar multiplication: polynomial * integer
impl Mul<i64> for Polynomial {
    type Output = Self;

    fn mul(mut self, rhs: i64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<i64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: i64) -> Self::Output {
        self.clone() * rhs
    }
}

impl Mul<Polynomial> for i64 {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Self::Output {
        rhs * self
    }
}

impl Mul<&Polynomial> for i64 {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        rhs * self
    }
}

impl Mul<Term> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Term) -> Self::Output {
        self.mul_term(rhs)
    }
}

impl Mul<Term> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Term) -> Self::Output {
        self.mul_term(rhs)
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self *= &rhs;
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Polynomial> for Polynomial {
    fn sum<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl Product for Polynomial {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::constant(1), |acc, p| acc * p)
    }
}

impl fmt::Debug for Polynomial {
    /// Highest power first, e.g. `-x^3 + 4x - 7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms.iter().rev();
        let first = match terms.next() {
            Some(t) => t,
            None => return write!(f, "0"),
        };

        write!(f, "{}", first)?;
        for t in terms {
            if t.coefficient() < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            t.fmt_magnitude(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as a sequence of [coefficient, power] pairs
        serde::Serialize::serialize(&self.terms, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let terms: Vec<Term> = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::from(terms))
    }
}
