//! How long a token stays valid.

/// Unit for `(amount, unit)` validity pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Converts `amount` of this unit to milliseconds.
    ///
    /// Finer units truncate toward zero; coarser units saturate at the
    /// `i64` bounds.
    pub fn to_millis(self, amount: i64) -> i64 {
        match self {
            TimeUnit::Nanoseconds => amount / 1_000_000,
            TimeUnit::Microseconds => amount / 1_000,
            TimeUnit::Milliseconds => amount,
            TimeUnit::Seconds => amount.saturating_mul(1_000),
            TimeUnit::Minutes => amount.saturating_mul(60_000),
            TimeUnit::Hours => amount.saturating_mul(3_600_000),
            TimeUnit::Days => amount.saturating_mul(86_400_000),
        }
    }
}

/// Token lifetime in milliseconds. May be zero or negative, which yields a
/// token that is already expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Validity {
    millis: i64,
}

impl Validity {
    pub const ZERO: Validity = Validity { millis: 0 };

    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn new(amount: i64, unit: TimeUnit) -> Self {
        Self::from_millis(unit.to_millis(amount))
    }

    pub fn as_millis(&self) -> i64 {
        self.millis
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }
}

impl From<chrono::Duration> for Validity {
    fn from(duration: chrono::Duration) -> Self {
        Self::from_millis(duration.num_milliseconds())
    }
}

impl From<std::time::Duration> for Validity {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_millis(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }
}

impl From<(i64, TimeUnit)> for Validity {
    fn from((amount, unit): (i64, TimeUnit)) -> Self {
        Self::new(amount, unit)
    }
}
