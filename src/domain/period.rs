use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Duration, Months, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::validation::{ValidationError, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ISO-8601 duration as used by the billing endpoints (`P1Y2M3W4D`,
/// `P1MT12H`, ...).
///
/// The original string is kept verbatim and is authoritative for
/// serialization: parsing and re-serializing always reproduces the input
/// bit-for-bit. The decomposed fields are derived views; absolute length in
/// seconds depends on the anchor instant because months and years are not
/// fixed-length, so conversion takes an explicit start point.
pub struct Period {
    raw: String,
    years: u32,
    months: u32,
    weeks: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Period {
    /// Parse an ISO-8601 duration string.
    ///
    /// Accepts the `P[nY][nM][nW][nD][T[nH][nM][nS]]` form with integer
    /// designators in order. At least one designator is required.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = input.into();
        let invalid = || {
            ValidationError::single(Violation::InvalidPeriod {
                input: raw.clone(),
            })
        };

        let rest = raw.strip_prefix('P').ok_or_else(invalid)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let date_values = parse_components(date_part, &['Y', 'M', 'W', 'D']).ok_or_else(invalid)?;
        let time_values = match time_part {
            // "P...T" with nothing after the T is malformed.
            Some("") => return Err(invalid()),
            Some(time) => parse_components(time, &['H', 'M', 'S']).ok_or_else(invalid)?,
            None => vec![None, None, None],
        };

        let mut components = date_values;
        components.extend(time_values);
        if components.iter().all(Option::is_none) {
            return Err(invalid());
        }
        let value = |idx: usize| components[idx].unwrap_or(0);

        Ok(Self {
            years: value(0),
            months: value(1),
            weeks: value(2),
            days: value(3),
            hours: value(4),
            minutes: value(5),
            seconds: value(6),
            raw,
        })
    }

    /// The original duration string, byte-for-byte.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Concrete length of this period when anchored at `start`.
    ///
    /// Calendar components are applied through calendar arithmetic, so
    /// `P1M` anchored in February is shorter than in March.
    pub fn to_duration_from(&self, start: DateTime<Utc>) -> Duration {
        let mut end = start;
        let months = u64::from(self.years) * 12 + u64::from(self.months);
        if months > 0 {
            end = end
                .checked_add_months(Months::new(months.min(u64::from(u32::MAX)) as u32))
                .unwrap_or(end);
        }
        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        if days > 0 {
            end = end.checked_add_days(Days::new(days)).unwrap_or(end);
        }
        end += Duration::hours(i64::from(self.hours))
            + Duration::minutes(i64::from(self.minutes))
            + Duration::seconds(i64::from(self.seconds));
        end - start
    }

    /// Concrete length of this period anchored at the current instant.
    pub fn to_duration(&self) -> Duration {
        self.to_duration_from(Utc::now())
    }
}

/// Parses a designator sequence such as `1Y2M3W4D` against an ordered
/// designator alphabet, returning one slot per designator.
fn parse_components(input: &str, designators: &[char]) -> Option<Vec<Option<u32>>> {
    let mut values = vec![None; designators.len()];
    let mut next_slot = 0;
    let mut digits = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if digits.is_empty() {
            return None;
        }
        // Designators must appear in order, each at most once.
        let slot = designators[next_slot..].iter().position(|&d| d == ch)?;
        let value = digits.parse().ok()?;
        values[next_slot + slot] = Some(value);
        next_slot += slot + 1;
        digits.clear();
    }

    if digits.is_empty() { Some(values) } else { None }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(DeError::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Payment period accepted by the dedicated-server endpoints.
///
/// A closed set of billing intervals, each carrying its fixed ISO-8601 wire
/// string; serialization goes through [`PaymentPeriod::as_str`] only.
pub enum PaymentPeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl PaymentPeriod {
    /// Wire value sent to and received from the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "P1M",
            Self::ThreeMonths => "P3M",
            Self::SixMonths => "P6M",
            Self::OneYear => "P1Y",
        }
    }

    /// The interval as a structured [`Period`].
    pub fn period(self) -> Period {
        let (years, months) = match self {
            Self::OneMonth => (0, 1),
            Self::ThreeMonths => (0, 3),
            Self::SixMonths => (0, 6),
            Self::OneYear => (1, 0),
        };
        Period {
            raw: self.as_str().to_owned(),
            years,
            months,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

impl fmt::Display for PaymentPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "P1M" => Ok(Self::OneMonth),
            "P3M" => Ok(Self::ThreeMonths),
            "P6M" => Ok(Self::SixMonths),
            "P1Y" => Ok(Self::OneYear),
            other => Err(DeError::custom(format!(
                "unknown payment period: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parse_decomposes_full_form() {
        let period = Period::parse("P1Y2M3W4DT5H6M7S").unwrap();
        assert_eq!(period.years(), 1);
        assert_eq!(period.months(), 2);
        assert_eq!(period.weeks(), 3);
        assert_eq!(period.days(), 4);
        assert_eq!(period.hours(), 5);
        assert_eq!(period.minutes(), 6);
        assert_eq!(period.seconds(), 7);
    }

    #[test]
    fn round_trip_reproduces_input_exactly() {
        for input in ["P1Y2M3W4D", "P1M", "P10D", "PT30M", "P1YT1S", "P003D"] {
            let period = Period::parse(input).unwrap();
            assert_eq!(period.as_str(), input);
            assert_eq!(period.to_string(), input);

            let json = serde_json::to_string(&period).unwrap();
            let back: Period = serde_json::from_str(&json).unwrap();
            assert_eq!(back.as_str(), input);
        }
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for input in ["", "P", "PT", "1Y", "P1X", "PY", "P1Y2Y", "P1D2M", "P1M3", "P-1D"] {
            assert!(Period::parse(input).is_err(), "expected {input:?} to fail");
        }
    }

    #[test]
    fn months_are_calendar_aware() {
        let feb = Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap();
        let mar = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let period = Period::parse("P1M").unwrap();
        assert_eq!(period.to_duration_from(feb), Duration::days(28));
        assert_eq!(period.to_duration_from(mar), Duration::days(31));
    }

    #[test]
    fn mixed_components_accumulate() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let period = Period::parse("P1W2DT3H").unwrap();
        assert_eq!(
            period.to_duration_from(start),
            Duration::days(9) + Duration::hours(3)
        );
    }

    #[test]
    fn payment_period_serializes_to_fixed_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentPeriod::SixMonths).unwrap(),
            "\"P6M\""
        );
        let parsed: PaymentPeriod = serde_json::from_str("\"P1Y\"").unwrap();
        assert_eq!(parsed, PaymentPeriod::OneYear);
        assert_eq!(parsed.period().years(), 1);
    }

    #[test]
    fn payment_period_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<PaymentPeriod>("\"P2Y\"").is_err());
        assert!(serde_json::from_str::<PaymentPeriod>("\"monthly\"").is_err());
    }
}
