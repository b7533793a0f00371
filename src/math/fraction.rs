//! The fraction value type: normalization, comparators, and metrics.
//!
//! ## Fraction
//!
//! An immutable numerator/denominator pair. Raw pairs are legal
//! everywhere: the denominator may be negative and the pair may be
//! reducible. Canonical form (lowest terms, strictly positive
//! denominator) is only guaranteed for values returned by
//! [`Fraction::simplify`] - no function assumes it on input.
//!
//! ## Equality
//!
//! `==` on `Fraction` is structural: `1/2 != 2/4`. Value equality goes
//! through [`Fraction::same_value`], which canonicalizes both sides and
//! compares integers exactly. Floating comparison is never used for
//! equality; [`Fraction::value`] exists for magnitude work only.

use serde::{Deserialize, Serialize};

use super::gcd::gcd;

/// Failure values produced by the fraction engine.
///
/// These are ordinary values the caller branches on; the engine never
/// panics on game input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FracError {
    /// A denominator of zero: the pair does not represent a rational value.
    ZeroDenominator,
    /// Division by a fraction whose value is zero.
    DivisionByZero,
}

impl std::fmt::Display for FracError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FracError::ZeroDenominator => write!(f, "zero denominator"),
            FracError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for FracError {}

/// Outcome of a fallible fraction operation.
pub type FracResult = Result<Fraction, FracError>;

/// An exact rational value stored as a raw integer pair.
///
/// ## Example
///
/// ```
/// use frac_arcade::math::Fraction;
///
/// let raw = Fraction::new(4, -8);
/// assert_eq!(raw.simplify(), Ok(Fraction::new(-1, 2)));
/// assert!(raw.same_value(Fraction::new(-2, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    /// Numerator. Any integer.
    pub numerator: i64,
    /// Denominator. Zero only in degenerate input, never in produced values.
    pub denominator: i64,
}

impl Fraction {
    /// Create a fraction from a raw pair. No reduction is performed.
    #[must_use]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Reduce to canonical form: lowest terms, strictly positive
    /// denominator, sign carried by the numerator.
    ///
    /// Fails with [`FracError::ZeroDenominator`] when the denominator is
    /// zero (including the degenerate `0/0` pair).
    ///
    /// ```
    /// use frac_arcade::math::Fraction;
    ///
    /// assert_eq!(Fraction::new(4, 8).simplify(), Ok(Fraction::new(1, 2)));
    /// assert_eq!(Fraction::new(-4, 8).simplify(), Ok(Fraction::new(-1, 2)));
    /// assert_eq!(Fraction::new(4, -8).simplify(), Ok(Fraction::new(-1, 2)));
    /// assert!(Fraction::new(0, 0).simplify().is_err());
    /// ```
    pub fn simplify(self) -> FracResult {
        if self.denominator == 0 {
            return Err(FracError::ZeroDenominator);
        }
        let g = gcd(self.numerator, self.denominator);
        Ok(Self {
            numerator: self.numerator / g * self.denominator.signum(),
            denominator: self.denominator.abs() / g,
        })
    }

    /// Whether the pair is reducible: denominator greater than one and a
    /// shared factor between numerator and denominator.
    ///
    /// Pairs with a negative denominator always report `false`, even when
    /// they share a factor. Game hint logic relies on this check only ever
    /// firing for positive denominators.
    #[must_use]
    pub fn can_simplify(self) -> bool {
        self.denominator > 1 && gcd(self.numerator, self.denominator) > 1
    }

    /// Floating decimal approximation of the value.
    ///
    /// For magnitude comparisons and the proximity metric only - exact
    /// equality goes through [`Fraction::same_value`].
    #[must_use]
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Exact value equality: canonicalize both sides and compare the
    /// integer pairs. A degenerate pair compares unequal to everything.
    ///
    /// ```
    /// use frac_arcade::math::Fraction;
    ///
    /// assert!(Fraction::new(1, 2).same_value(Fraction::new(3, 6)));
    /// assert!(!Fraction::new(1, 2).same_value(Fraction::new(2, 3)));
    /// ```
    #[must_use]
    pub fn same_value(self, other: Fraction) -> bool {
        match (self.simplify(), other.simplify()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Structural test for a value of one: numerator equals denominator
    /// and the denominator is positive. Unreduced forms qualify: `2/2`
    /// passes, `2/-2` does not.
    #[must_use]
    pub fn is_one(self) -> bool {
        self.numerator == self.denominator && self.denominator > 0
    }

    /// Exact canonical one: the pair is literally `1/1`.
    #[must_use]
    pub fn is_exact_one(self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    /// Similarity to one in `[0, 1]`: `max(0, 1 - |1 - value|)`.
    ///
    /// Peaks at `1.0` when the value is exactly one and falls off
    /// linearly, clamping to `0.0` at distance one or beyond. Games use
    /// this for partial credit, never for pass/fail decisions.
    #[must_use]
    pub fn proximity_to_one(self) -> f64 {
        (1.0 - (1.0 - self.value()).abs()).max(0.0)
    }

    /// Domain validity rule: strictly positive numerator and denominator.
    ///
    /// Zero and negative values are unplayable in this game family, as
    /// are raw pairs whose sign sits in the denominator.
    #[must_use]
    pub fn is_playable(self) -> bool {
        self.numerator > 0 && self.denominator > 0
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
