//! The arithmetic engine: the four rational operations over raw pairs.
//!
//! | operator | result |
//! |----------|--------|
//! | add      | common denominator `lcm(a.d, b.d)`, numerators scaled and summed |
//! | subtract | as add, with numerator subtraction |
//! | multiply | `a.n * b.n` over `a.d * b.d` |
//! | divide   | `a.n * b.d` over `a.d * b.n`; fails when `b.n == 0` |
//!
//! Every successful result has a non-negative denominator (a negative one
//! is sign normalized by negating both components) and is **not** reduced
//! to lowest terms - callers canonicalize via [`Fraction::simplify`] when
//! they need to.
//!
//! Failures are `Err` values the caller branches on, never panics: the
//! worst outcome of any operation is a rejected game move.

use serde::{Deserialize, Serialize};

use super::fraction::{FracError, FracResult, Fraction};
use super::gcd::lcm;

/// The closed set of operations games can play.
///
/// On the wire each operator is its arithmetic symbol, matching the
/// existing game clients. [`Operator::from_symbol`] additionally accepts
/// the typeset `×` and `÷` forms those clients display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The wire/display symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse an operator symbol. Returns `None` for anything outside the
    /// recognized set; callers reject such moves the same way they reject
    /// failed arithmetic.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply this operation to two raw fractions.
    ///
    /// Inputs need not be canonical; a zero denominator on either side
    /// fails with [`FracError::ZeroDenominator`], and dividing by a
    /// zero-valued fraction fails with [`FracError::DivisionByZero`].
    ///
    /// ```
    /// use frac_arcade::math::{Fraction, Operator};
    ///
    /// let half = Fraction::new(1, 2);
    /// let third = Fraction::new(1, 3);
    /// assert_eq!(Operator::Add.apply(half, third), Ok(Fraction::new(5, 6)));
    /// assert!(Operator::Divide.apply(half, Fraction::new(0, 1)).is_err());
    /// ```
    pub fn apply(self, lhs: Fraction, rhs: Fraction) -> FracResult {
        if lhs.denominator == 0 || rhs.denominator == 0 {
            return Err(FracError::ZeroDenominator);
        }

        let (numerator, denominator) = match self {
            Operator::Add => {
                let cd = lcm(lhs.denominator, rhs.denominator);
                (
                    lhs.numerator * (cd / lhs.denominator)
                        + rhs.numerator * (cd / rhs.denominator),
                    cd,
                )
            }
            Operator::Subtract => {
                let cd = lcm(lhs.denominator, rhs.denominator);
                (
                    lhs.numerator * (cd / lhs.denominator)
                        - rhs.numerator * (cd / rhs.denominator),
                    cd,
                )
            }
            Operator::Multiply => (
                lhs.numerator * rhs.numerator,
                lhs.denominator * rhs.denominator,
            ),
            Operator::Divide => {
                if rhs.numerator == 0 {
                    return Err(FracError::DivisionByZero);
                }
                (
                    lhs.numerator * rhs.denominator,
                    lhs.denominator * rhs.numerator,
                )
            }
        };

        if denominator == 0 {
            return Err(FracError::ZeroDenominator);
        }
        if denominator < 0 {
            return Ok(Fraction::new(-numerator, -denominator));
        }
        Ok(Fraction::new(numerator, denominator))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The validity predicate games gate moves on: the operation succeeded
/// and produced a strictly positive numerator and denominator.
///
/// Zero, negative, and failed results are all rejected by this one check.
#[must_use]
pub fn playable(result: FracResult) -> bool {
    matches!(result, Ok(f) if f.is_playable())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let result = Operator::Add.apply(Fraction::new(1, 2), Fraction::new(1, 3));
        assert_eq!(result, Ok(Fraction::new(5, 6)));
    }

    #[test]
    fn test_add_result_not_reduced() {
        // 1/2 + 1/2 stays 2/2; canonicalization is the caller's call.
        let result = Operator::Add.apply(Fraction::new(1, 2), Fraction::new(1, 2));
        assert_eq!(result, Ok(Fraction::new(2, 2)));
    }

    #[test]
    fn test_subtract() {
        let result = Operator::Subtract.apply(Fraction::new(1, 2), Fraction::new(1, 3));
        assert_eq!(result, Ok(Fraction::new(1, 6)));

        let negative = Operator::Subtract.apply(Fraction::new(1, 3), Fraction::new(1, 2));
        assert_eq!(negative, Ok(Fraction::new(-1, 6)));
    }

    #[test]
    fn test_multiply() {
        let result = Operator::Multiply.apply(Fraction::new(2, 3), Fraction::new(3, 4));
        assert_eq!(result, Ok(Fraction::new(6, 12)));
    }

    #[test]
    fn test_divide() {
        let result = Operator::Divide.apply(Fraction::new(1, 2), Fraction::new(3, 4));
        assert_eq!(result, Ok(Fraction::new(4, 6)));
    }

    #[test]
    fn test_divide_by_zero_value() {
        let result = Operator::Divide.apply(Fraction::new(1, 2), Fraction::new(0, 1));
        assert_eq!(result, Err(FracError::DivisionByZero));
    }

    #[test]
    fn test_zero_denominator_input() {
        for op in Operator::ALL {
            let result = op.apply(Fraction::new(1, 0), Fraction::new(1, 2));
            assert_eq!(result, Err(FracError::ZeroDenominator), "{op}");

            let result = op.apply(Fraction::new(1, 2), Fraction::new(1, 0));
            assert_eq!(result, Err(FracError::ZeroDenominator), "{op}");
        }
    }

    #[test]
    fn test_sign_normalization() {
        // 1/2 ÷ -1/3 crosses to 3 over -2; the sign moves up.
        let result = Operator::Divide.apply(Fraction::new(1, 2), Fraction::new(-1, 3));
        assert_eq!(result, Ok(Fraction::new(-3, 2)));

        let result = Operator::Multiply.apply(Fraction::new(1, 2), Fraction::new(1, -3));
        assert_eq!(result, Ok(Fraction::new(-1, 6)));
    }

    #[test]
    fn test_negative_denominator_inputs_add() {
        // lcm works on absolute values, so the common denominator is
        // positive and the scaled numerator carries the sign.
        let result = Operator::Add.apply(Fraction::new(1, -2), Fraction::new(1, 3));
        assert_eq!(result, Ok(Fraction::new(-1, 6)));
    }

    #[test]
    fn test_add_commutes_after_canonicalization() {
        let a = Fraction::new(3, 4);
        let b = Fraction::new(-2, 6);
        let ab = Operator::Add.apply(a, b).unwrap().simplify();
        let ba = Operator::Add.apply(b, a).unwrap().simplify();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_playable() {
        assert!(playable(Ok(Fraction::new(5, 6))));
        assert!(!playable(Ok(Fraction::new(0, 6))));
        assert!(!playable(Ok(Fraction::new(-1, 6))));
        assert!(!playable(Err(FracError::DivisionByZero)));
        assert!(!playable(Err(FracError::ZeroDenominator)));
    }

    #[test]
    fn test_zero_sum_is_unplayable() {
        let result = Operator::Add.apply(Fraction::new(-1, 1), Fraction::new(1, 1));
        assert_eq!(result, Ok(Fraction::new(0, 1)));
        assert!(!playable(result));
    }

    #[test]
    fn test_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_aliases() {
        assert_eq!(Operator::from_symbol('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('%'), None);
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_operator_serde_symbols() {
        assert_eq!(serde_json::to_string(&Operator::Add).unwrap(), "\"+\"");
        assert_eq!(serde_json::to_string(&Operator::Divide).unwrap(), "\"/\"");

        let op: Operator = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(op, Operator::Multiply);
        assert!(serde_json::from_str::<Operator>("\"%\"").is_err());
    }
}
