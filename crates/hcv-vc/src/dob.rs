//! # Date of Birth
//!
//! Certificates may carry a full date of birth, only year and month, only a
//! year, or nothing at all. [`DateOfBirth::parse()`] is the single place
//! that decides which of these a value is. Anything else is rejected.
//!
//! Accepted shape: `^(?:(19|20)\d\d(?:-\d\d(?:-\d\d)?)?)?$`.
//! Month and day are checked for shape only; certificates in circulation
//! use `00` placeholders that a calendar check would reject.

use thiserror::Error;

/// A date of birth at the granularity the issuer provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOfBirth {
    Empty,
    Year {
        year: String,
    },
    YearMonth {
        year: String,
        month: String,
    },
    Full {
        year: String,
        month: String,
        day: String,
    },
}

/// The value does not have an accepted date-of-birth shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("did not conform to YYYY[-MM[-DD]] with a 19xx or 20xx year")]
pub struct DateOfBirthError;

impl DateOfBirth {
    /// Parse a raw `dob` value.
    pub fn parse(value: &str) -> Result<Self, DateOfBirthError> {
        if value.is_empty() {
            return Ok(Self::Empty);
        }

        let mut parts = value.split('-');
        let year = parts.next().filter(|y| is_year(y)).ok_or(DateOfBirthError)?;
        let month = parts.next();
        let day = parts.next();
        if parts.next().is_some() {
            return Err(DateOfBirthError);
        }

        match (month, day) {
            (None, None) => Ok(Self::Year { year: year.to_string() }),
            (Some(m), None) if is_two_digits(m) => Ok(Self::YearMonth {
                year: year.to_string(),
                month: m.to_string(),
            }),
            (Some(m), Some(d)) if is_two_digits(m) && is_two_digits(d) => Ok(Self::Full {
                year: year.to_string(),
                month: m.to_string(),
                day: d.to_string(),
            }),
            _ => Err(DateOfBirthError),
        }
    }

    /// Two-digit month, when present.
    pub fn month(&self) -> Option<&str> {
        match self {
            Self::YearMonth { month, .. } | Self::Full { month, .. } => Some(month),
            Self::Empty | Self::Year { .. } => None,
        }
    }

    /// Two-digit day, when present.
    pub fn day(&self) -> Option<&str> {
        match self {
            Self::Full { day, .. } => Some(day),
            _ => None,
        }
    }
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && (s.starts_with("19") || s.starts_with("20")) && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn full_dates_keep_their_components(
            century in prop::sample::select(vec!["19", "20"]),
            yy in 0u32..100, m in 0u32..100, d in 0u32..100
        ) {
            let raw = format!("{century}{yy:02}-{m:02}-{d:02}");
            let dob = DateOfBirth::parse(&raw).unwrap();
            let month = format!("{m:02}");
            let day = format!("{d:02}");
            prop_assert_eq!(dob.month(), Some(month.as_str()));
            prop_assert_eq!(dob.day(), Some(day.as_str()));
        }

        #[test]
        fn parser_never_panics(raw in "\\PC{0,16}") {
            let _ = DateOfBirth::parse(&raw);
        }

        #[test]
        fn accepted_components_are_two_ascii_digits(raw in "[0-9-]{0,12}") {
            if let Ok(dob) = DateOfBirth::parse(&raw) {
                for part in [dob.month(), dob.day()].into_iter().flatten() {
                    prop_assert_eq!(part.len(), 2);
                    prop_assert!(part.bytes().all(|b| b.is_ascii_digit()));
                }
            }
        }
    }
}
