use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_traits::FromPrimitive;
use regex::Regex;
use thiserror::Error;

use crate::Notation;

/// Sealed trait module to prevent external implementations.
mod private {
    use bigdecimal::BigDecimal;

    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for i128 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for BigDecimal {}
    impl Sealed for &BigDecimal {}
}

/// Trait for values an [`Interval`] can be compared against.
///
/// This trait is sealed and implemented for the built-in integer and float
/// types and for [`BigDecimal`] (owned or borrowed). Conversion is exact:
/// integers and decimals always convert, while floats convert through their
/// exact binary value and yield `None` for NaN and the infinities. A value
/// that yields `None` is neither above nor below any interval, so every
/// comparison predicate returns `false` for it.
pub trait Scalar: private::Sealed {
    /// The exact decimal form of this value, or `None` if it has none.
    fn to_decimal(self) -> Option<BigDecimal>;
}

macro_rules! impl_scalar_for_int {
    ($($ty:ty),*) => {
        $(impl Scalar for $ty {
            #[inline]
            fn to_decimal(self) -> Option<BigDecimal> {
                Some(BigDecimal::from(self))
            }
        })*
    };
}

impl_scalar_for_int!(i32, i64, i128, u32, u64);

impl Scalar for f32 {
    #[inline]
    fn to_decimal(self) -> Option<BigDecimal> {
        BigDecimal::from_f32(self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn to_decimal(self) -> Option<BigDecimal> {
        BigDecimal::from_f64(self)
    }
}

impl Scalar for BigDecimal {
    #[inline]
    fn to_decimal(self) -> Option<BigDecimal> {
        Some(self)
    }
}

impl Scalar for &BigDecimal {
    #[inline]
    fn to_decimal(self) -> Option<BigDecimal> {
        Some(self.clone())
    }
}

/// Failures producing an [`Interval`], either from the constructor or from
/// parsing the textual notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The input did not match the interval grammar at all: bad or missing
    /// brackets, missing comma, junk characters, or a malformed numeral.
    #[error("Invalid interval: {0}")]
    InvalidSyntax(String),

    /// The left endpoint was greater than the right endpoint.
    #[error("Left must be less than or equal to right. Got {left} and {right}")]
    InvalidEndpoints { left: BigDecimal, right: BigDecimal },

    /// The left endpoint was omitted but the left bracket was `[`.
    #[error("Left endpoint must be defined when left side is closed.")]
    UnboundedClosedLeft,

    /// The right endpoint was omitted but the right bracket was `]`.
    #[error("Right endpoint must be defined when right side is closed.")]
    UnboundedClosedRight,
}

/// The anchored interval grammar. Endpoints are optional; an omitted
/// endpoint captures nothing, which is distinct from the numeral `0`.
/// A single space is tolerated after the comma.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<opening>[\[(])(?<left>-?\d+(?:\.\d+)?)?, ?(?<right>-?\d+(?:\.\d+)?)?(?<closing>[\])])$")
        .unwrap()
});

/// Stand-in for an unbounded left endpoint.
///
/// A parsed endpoint exactly equal to `i64::MIN` is indistinguishable from
/// "unbounded" under this representation.
fn unbounded_left() -> BigDecimal {
    BigDecimal::from(i64::MIN)
}

/// Stand-in for an unbounded right endpoint, with the same caveat as
/// [`unbounded_left`], at `i64::MAX`.
fn unbounded_right() -> BigDecimal {
    BigDecimal::from(i64::MAX)
}

/// A closed, open, or half-open interval between two exact decimal
/// endpoints.
///
/// Intervals are immutable once constructed: every construction path
/// enforces `left <= right`, and no operation mutates an existing value.
/// Unbounded endpoints (`(,3]`, `[1,)`, `(,)`) are stored as the `i64`
/// extremes rather than a distinct sentinel.
///
/// # Examples
/// ```
/// use interval_notation::{Interval, Notation};
///
/// let band: Interval = "[2,5)".parse()?;
/// assert_eq!(band.notation(), Notation::RightOpen);
/// assert!(band.is_greater_than(1));
/// assert!(band.is_less_than(5));
/// assert_eq!(band.to_string(), "[2,5)");
/// # Ok::<(), interval_notation::IntervalError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    left: BigDecimal,
    right: BigDecimal,
    notation: Notation,
}

impl Interval {
    /// Creates a new `Interval` from its two endpoints and notation.
    ///
    /// Returns [`IntervalError::InvalidEndpoints`] if `left > right`. The
    /// endpoints are stored exactly as given, with no normalization.
    pub fn new(
        left: BigDecimal,
        right: BigDecimal,
        notation: Notation,
    ) -> Result<Self, IntervalError> {
        if left > right {
            return Err(IntervalError::InvalidEndpoints { left, right });
        }
        Ok(Self {
            left,
            right,
            notation,
        })
    }

    /// The lower endpoint.
    #[inline]
    pub fn left(&self) -> &BigDecimal {
        &self.left
    }

    /// The upper endpoint.
    #[inline]
    pub fn right(&self) -> &BigDecimal {
        &self.right
    }

    /// The bracket notation of this interval.
    #[inline]
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Returns `true` if every point of the interval lies below `value`.
    ///
    /// An open right boundary is excluded from the interval, so the
    /// interval is already entirely below a value equal to that boundary.
    ///
    /// # Examples
    /// ```
    /// use interval_notation::Interval;
    ///
    /// let closed: Interval = "[2,5]".parse()?;
    /// assert!(!closed.is_less_than(5));
    /// assert!(closed.is_less_than(6));
    ///
    /// let open: Interval = "(2,5)".parse()?;
    /// assert!(open.is_less_than(5));
    /// # Ok::<(), interval_notation::IntervalError>(())
    /// ```
    pub fn is_less_than<V: Scalar>(&self, value: V) -> bool {
        let Some(value) = value.to_decimal() else {
            return false;
        };
        if self.notation.is_right_open() {
            self.right <= value
        } else {
            self.right < value
        }
    }

    /// Returns `true` if no point of the interval lies above `value`.
    ///
    /// Openness does not matter here: the interval never exceeds its right
    /// endpoint, so matching the boundary is sufficient.
    pub fn is_less_than_or_equal_to<V: Scalar>(&self, value: V) -> bool {
        let Some(value) = value.to_decimal() else {
            return false;
        };
        self.right <= value
    }

    /// Returns `true` if every point of the interval lies above `value`.
    ///
    /// Mirror image of [`is_less_than`](Self::is_less_than): an open left
    /// boundary is excluded, so a value equal to it is already below the
    /// whole interval.
    pub fn is_greater_than<V: Scalar>(&self, value: V) -> bool {
        let Some(value) = value.to_decimal() else {
            return false;
        };
        if self.notation.is_left_open() {
            self.left >= value
        } else {
            self.left > value
        }
    }

    /// Returns `true` if no point of the interval lies below `value`.
    pub fn is_greater_than_or_equal_to<V: Scalar>(&self, value: V) -> bool {
        let Some(value) = value.to_decimal() else {
            return false;
        };
        self.left >= value
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    /// Parses an interval from its textual notation, e.g. `[1,5)`, `(,3]`,
    /// `(,)`.
    ///
    /// An omitted endpoint means unbounded and requires an open bracket on
    /// that side. The numeral `0` is a defined endpoint, never treated as
    /// omitted. Endpoints may have a fractional part and are parsed
    /// exactly, with no rounding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = GRAMMAR
            .captures(s)
            .ok_or_else(|| IntervalError::InvalidSyntax(s.to_owned()))?;

        let notation = Notation::from_brackets(&caps["opening"], &caps["closing"]);

        let left = match caps.name("left") {
            Some(m) => parse_endpoint(m.as_str(), s)?,
            None if notation.is_left_open() => unbounded_left(),
            None => return Err(IntervalError::UnboundedClosedLeft),
        };
        let right = match caps.name("right") {
            Some(m) => parse_endpoint(m.as_str(), s)?,
            None if notation.is_right_open() => unbounded_right(),
            None => return Err(IntervalError::UnboundedClosedRight),
        };

        Self::new(left, right, notation)
    }
}

fn parse_endpoint(numeral: &str, original: &str) -> Result<BigDecimal, IntervalError> {
    // The grammar only captures well-formed numerals; a failed numeral
    // parse is still reported against the original input.
    BigDecimal::from_str(numeral).map_err(|_| IntervalError::InvalidSyntax(original.to_owned()))
}

impl fmt::Display for Interval {
    /// Renders the interval in its textual notation with no whitespace,
    /// e.g. `[2,5)`. Exact inverse of parsing for bounded intervals
    /// written without the optional post-comma space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            self.notation.opening_symbol(),
            self.left,
            self.right,
            self.notation.closing_symbol()
        )
    }
}
