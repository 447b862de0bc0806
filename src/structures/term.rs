use core::fmt;
use core::ops::{Mul, Neg};

/// A single monomial `coefficient * x^power`.
///
/// Terms are plain values: two terms are equal iff both the coefficient
/// and the power match.
///
/// # Example
///
/// ```
/// use intpoly::Term;
///
/// let t = Term::new(3, 2); // 3x^2
/// assert_eq!(t.coefficient(), 3);
/// assert_eq!(t.power(), 2);
/// assert_eq!(t.to_string(), "3x^2");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    coefficient: i64,
    power: u32,
}

impl Term {
    pub const fn new(coefficient: i64, power: u32) -> Self {
        Self { coefficient, power }
    }

    #[inline]
    pub const fn coefficient(&self) -> i64 {
        self.coefficient
    }

    #[inline]
    pub const fn power(&self) -> u32 {
        self.power
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Multiply two terms, or `None` if the power sum exceeds `u32::MAX`.
    ///
    /// Coefficients use plain `i64` multiplication.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let power = self.power.checked_add(rhs.power)?;
        Some(Self::new(self.coefficient * rhs.coefficient, power))
    }

    /// Write this term without its sign, as it appears after a `+`/`-`
    /// separator.
    pub(crate) fn fmt_magnitude(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coefficient.unsigned_abs();
        match self.power {
            0 => write!(f, "{}", c),
            1 if c == 1 => write!(f, "x"),
            1 => write!(f, "{}x", c),
            _ if c == 1 => write!(f, "x^{}", self.power),
            _ => write!(f, "{}x^{}", c, self.power),
        }
    }
}

impl From<(i64, u32)> for Term {
    fn from((coefficient, power): (i64, u32)) -> Self {
        Self::new(coefficient, power)
    }
}

impl Neg for Term {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.coefficient, self.power)
    }
}

impl Mul<i64> for Term {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::new(self.coefficient * rhs, self.power)
    }
}

/// # Panics
///
/// Panics if the power sum exceeds `u32::MAX`, in release builds as well.
/// Use [`Term::checked_mul`] to handle that case.
impl Mul for Term {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(rhs) {
            Some(t) => t,
            None => panic!("power overflow: x^{} * x^{}", self.power, rhs.power),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient < 0 {
            write!(f, "-")?;
        }
        self.fmt_magnitude(f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Term {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as a (coefficient, power) pair
        serde::Serialize::serialize(&(self.coefficient, self.power), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (coefficient, power): (i64, u32) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(coefficient, power))
    }
}
