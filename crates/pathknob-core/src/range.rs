/// An error returned when constructing a [`ValueRange`] with
/// [`ValueRange::try_new`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("minimum value {minimum} must be less than maximum value {maximum}")]
    NotIncreasing { minimum: i32, maximum: i32 },
}

/// The range of integer values a knob produces, from its first path point to
/// its last.
///
/// A well-formed range has `minimum < maximum`. [`ValueRange::new`] does not
/// enforce this: an empty range maps every position to `minimum`, and an
/// inverted range maps positions in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    minimum: i32,
    maximum: i32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            minimum: Self::DEFAULT_MINIMUM,
            maximum: Self::DEFAULT_MAXIMUM,
        }
    }
}

impl ValueRange {
    pub const DEFAULT_MINIMUM: i32 = 0;
    pub const DEFAULT_MAXIMUM: i32 = 10;

    /// Creates a range without checking that `minimum < maximum`.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        if minimum >= maximum {
            log::warn!(
                "ValueRange minimum {} is not less than maximum {}, values will be constant or inverted",
                minimum,
                maximum
            );
        }

        Self { minimum, maximum }
    }

    /// Creates a range, returning an error if `minimum >= maximum`.
    pub fn try_new(minimum: i32, maximum: i32) -> Result<Self, RangeError> {
        if minimum >= maximum {
            return Err(RangeError::NotIncreasing { minimum, maximum });
        }

        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Returns `maximum - minimum` without overflowing.
    pub fn span(&self) -> i64 {
        i64::from(self.maximum) - i64::from(self.minimum)
    }

    /// Maps a position `index` out of `count` positions into this range.
    ///
    /// The result is `ceil(index * span / count) + minimum`, evaluated in
    /// integer arithmetic so that exact fractions never round up by accident.
    /// A partial step rounds towards `maximum` for an increasing range.
    ///
    /// Returns `minimum` when `count` is zero.
    pub fn value_at(&self, index: usize, count: usize) -> i32 {
        if count == 0 {
            return self.minimum;
        }

        let index = index.min(count - 1) as i64;
        let count = count as i64;

        let scaled = div_ceil(index * self.span(), count) + i64::from(self.minimum);

        // `index < count`, so `scaled` always lies between minimum and maximum.
        scaled as i32
    }
}

/// Ceiling division for a positive divisor and a dividend of either sign.
#[inline]
fn div_ceil(dividend: i64, divisor: i64) -> i64 {
    -((-dividend).div_euclid(divisor))
}
