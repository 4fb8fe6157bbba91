use core::{fmt, str::FromStr};

use crate::trimmed;

const BINARY_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
const DECIMAL_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Byte unit family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Units {
    /// Powers of 1024: `KiB`, `MiB`, ...
    #[default]
    Binary,
    /// Powers of 1000: `KB`, `MB`, ...
    Decimal,
}

impl Units {
    const fn base(self) -> u64 {
        match self {
            Self::Binary => 1024,
            Self::Decimal => 1000,
        }
    }

    const fn labels(self) -> &'static [&'static str; 6] {
        match self {
            Self::Binary => &BINARY_UNITS,
            Self::Decimal => &DECIMAL_UNITS,
        }
    }

    /// The keyword for this family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a units keyword is neither `binary` nor `decimal`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown units keyword {0:?}: expected \"binary\" or \"decimal\"")]
pub struct ParseUnitsError(pub String);

impl FromStr for Units {
    type Err = ParseUnitsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "binary" | "iec" => Ok(Self::Binary),
            "decimal" | "si" => Ok(Self::Decimal),
            _ => Err(ParseUnitsError(value.into())),
        }
    }
}

/// Formats a byte count: `0 B`, `1 KiB`, `1.5 MB`.
///
/// The largest unit whose base fits is used, capped at peta. Counts below
/// one kilo-unit are printed exactly. A value that rounds up to the base
/// moves to the next unit, so `1024 * 1024 - 1` bytes read `1 MiB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bytes(count: u64, units: Units, precision: usize) -> String {
    let base = units.base();
    let labels = units.labels();

    let mut exponent = 0;
    let mut scale = 1_u64;
    while exponent < labels.len() - 1 && count / scale >= base {
        scale *= base;
        exponent += 1;
    }

    if exponent == 0 {
        return format!("{count} B");
    }
    let value = count as f64 / scale as f64;
    let mut text = trimmed(value, precision);
    if text == base.to_string() && exponent < labels.len() - 1 {
        exponent += 1;
        text = "1".into();
    }
    format!("{text} {}", labels[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_small_counts() {
        assert_eq!(bytes(0, Units::Binary, 1), "0 B");
        assert_eq!(bytes(1023, Units::Binary, 1), "1023 B");
        assert_eq!(bytes(999, Units::Decimal, 1), "999 B");
    }

    #[test]
    fn first_unit_boundaries() {
        assert_eq!(bytes(1024, Units::Binary, 1), "1 KiB");
        assert_eq!(bytes(1000, Units::Decimal, 1), "1 KB");
        assert_eq!(bytes(1536, Units::Binary, 2), "1.5 KiB");
        assert_eq!(bytes(5 * 1024 * 1024, Units::Binary, 1), "5 MiB");
    }

    #[test]
    fn rounding_up_to_the_base_moves_to_the_next_unit() {
        assert_eq!(bytes(1024 * 1024 - 1, Units::Binary, 1), "1 MiB");
        assert_eq!(bytes(999_999, Units::Decimal, 1), "1 MB");
        assert_eq!(bytes(999_949, Units::Decimal, 1), "999.9 KB");
        assert_eq!(bytes(1024 * 1024 - 1, Units::Binary, 3), "1023.999 KiB");
    }

    #[test]
    fn units_never_shrink_as_count_grows() {
        let unit_rank = |text: &str| {
            let label = text.rsplit(' ').next().unwrap_or_default();
            BINARY_UNITS.iter().position(|unit| *unit == label)
        };
        let mut last = 0;
        let mut count = 1_u64;
        while count < u64::MAX / 3 {
            let rank = unit_rank(&bytes(count, Units::Binary, 1)).expect("known unit");
            assert!(rank >= last, "unit shrank at {count}");
            last = rank;
            count = count * 3 + 1;
        }
    }

    #[test]
    fn caps_at_petabytes() {
        assert!(bytes(u64::MAX, Units::Decimal, 0).ends_with(" PB"));
    }

    #[test]
    fn parses_unit_keywords() {
        assert_eq!(" Decimal ".parse::<Units>(), Ok(Units::Decimal));
        assert_eq!("iec".parse::<Units>(), Ok(Units::Binary));
        assert!("metric".parse::<Units>().is_err());
    }
}
