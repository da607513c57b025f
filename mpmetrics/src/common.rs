use std::borrow::Cow;

/// An allocation-optimized string.
///
/// `SharedString` gives callers the flexibility to provide either a static or
/// a dynamic (owned) string, while letting completely static strings avoid an
/// allocation entirely.
pub type SharedString = Cow<'static, str>;

/// Units for a given metric.
///
/// Units are a closed set: they are part of the metadata contract of a metric
/// name and are rendered verbatim by exporters, so free-form strings are not
/// accepted.  A metric that measures a dimensionless quantity uses
/// [`Unit::None`], which is still a concrete unit and is rendered as `none`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
    /// No unit; a dimensionless value.
    None,
    /// Bits.
    Bits,
    /// Kilobits.
    ///
    /// One kilobit is equal to 1000 bits.
    Kilobits,
    /// Megabits.
    ///
    /// One megabit is equal to 1000 kilobits.
    Megabits,
    /// Gigabits.
    ///
    /// One gigabit is equal to 1000 megabits.
    Gigabits,
    /// Kibibits.
    ///
    /// One kibibit is equal to 1024 bits.
    Kibibits,
    /// Mebibits.
    ///
    /// One mebibit is equal to 1024 kibibits.
    Mebibits,
    /// Gibibits.
    ///
    /// One gibibit is equal to 1024 mebibits.
    Gibibits,
    /// Bytes.
    Bytes,
    /// Kilobytes.
    ///
    /// One kilobyte is equal to 1000 bytes.
    Kilobytes,
    /// Megabytes.
    ///
    /// One megabyte is equal to 1000 kilobytes.
    Megabytes,
    /// Gigabytes.
    ///
    /// One gigabyte is equal to 1000 megabytes.
    Gigabytes,
    /// Nanoseconds.
    Nanoseconds,
    /// Microseconds.
    ///
    /// One microsecond is equal to 1000 nanoseconds.
    Microseconds,
    /// Milliseconds.
    ///
    /// One millisecond is equal to 1000 microseconds.
    Milliseconds,
    /// Seconds.
    ///
    /// One second is equal to 1000 milliseconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days.
    Days,
    /// Percentage.
    Percent,
    /// Rate per second.
    PerSecond,
}

impl Unit {
    /// Gets the string form of this `Unit`.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::None => "none",
            Unit::Bits => "bits",
            Unit::Kilobits => "kilobits",
            Unit::Megabits => "megabits",
            Unit::Gigabits => "gigabits",
            Unit::Kibibits => "kibibits",
            Unit::Mebibits => "mebibits",
            Unit::Gibibits => "gibibits",
            Unit::Bytes => "bytes",
            Unit::Kilobytes => "kilobytes",
            Unit::Megabytes => "megabytes",
            Unit::Gigabytes => "gigabytes",
            Unit::Nanoseconds => "nanoseconds",
            Unit::Microseconds => "microseconds",
            Unit::Milliseconds => "milliseconds",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Percent => "percent",
            Unit::PerSecond => "per_second",
        }
    }

    /// Converts the string representation of a unit back into `Unit` if possible.
    ///
    /// The value passed here should match the output of [`Unit::as_str`].
    pub fn from_string(s: &str) -> Option<Unit> {
        match s {
            "none" => Some(Unit::None),
            "bits" => Some(Unit::Bits),
            "kilobits" => Some(Unit::Kilobits),
            "megabits" => Some(Unit::Megabits),
            "gigabits" => Some(Unit::Gigabits),
            "kibibits" => Some(Unit::Kibibits),
            "mebibits" => Some(Unit::Mebibits),
            "gibibits" => Some(Unit::Gibibits),
            "bytes" => Some(Unit::Bytes),
            "kilobytes" => Some(Unit::Kilobytes),
            "megabytes" => Some(Unit::Megabytes),
            "gigabytes" => Some(Unit::Gigabytes),
            "nanoseconds" => Some(Unit::Nanoseconds),
            "microseconds" => Some(Unit::Microseconds),
            "milliseconds" => Some(Unit::Milliseconds),
            "seconds" => Some(Unit::Seconds),
            "minutes" => Some(Unit::Minutes),
            "hours" => Some(Unit::Hours),
            "days" => Some(Unit::Days),
            "percent" => Some(Unit::Percent),
            "per_second" => Some(Unit::PerSecond),
            _ => None,
        }
    }

    /// Whether or not this unit relates to the measurement of time.
    pub fn is_time_based(&self) -> bool {
        matches!(
            self,
            Unit::Nanoseconds
                | Unit::Microseconds
                | Unit::Milliseconds
                | Unit::Seconds
                | Unit::Minutes
                | Unit::Hours
                | Unit::Days
        )
    }

    /// Whether or not this unit relates to the measurement of data.
    pub fn is_data_based(&self) -> bool {
        matches!(
            self,
            Unit::Bits
                | Unit::Kilobits
                | Unit::Megabits
                | Unit::Gigabits
                | Unit::Kibibits
                | Unit::Mebibits
                | Unit::Gibibits
                | Unit::Bytes
                | Unit::Kilobytes
                | Unit::Megabytes
                | Unit::Gigabytes
        )
    }
}
