/// Greatest common divisor of two integers.
///
/// Returned unsigned so that `gcd(i64::MIN, 0) == 2^63` is representable;
/// `gcd(0, 0) == 0`.
pub const fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// Euclid's algorithm on magnitudes.
pub const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
