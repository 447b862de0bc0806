//! Univariate polynomials with integer coefficients.
//!
//! A [`Polynomial`] is a sparse, always-normalized list of [`Term`]s. All
//! arithmetic returns new values; division is integer-exact long division
//! reporting failures through [`PolyError`].
//!
//! ```
//! use intpoly::Polynomial;
//!
//! let a = Polynomial::linear(1, 1); // x + 1
//! let b = Polynomial::linear(-1, 1); // x - 1
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "x^2 - 1");
//!
//! let (q, r) = product.div_rem(&b).unwrap();
//! assert_eq!(q, a);
//! assert!(r.is_zero());
//! ```

pub mod error;
pub mod structures;
pub mod utils;

pub use error::{PolyError, Result};
pub use structures::poly::Polynomial;
pub use structures::term::Term;
pub use utils::gcd;
