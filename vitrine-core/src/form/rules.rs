//! Field rules for the contact form.
//!
//! Both validators work on the trimmed value and report why a value was
//! rejected. Whether an error is *displayed* is the controller's business:
//! blank fields never show one.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything outside ASCII letters, Latin-1 accented letters (without `×` and
/// `÷`), whitespace, apostrophes and hyphens.
static NAME_FORBIDDEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-ZÀ-ÖØ-öø-ÿ\s'\-]")
        .expect("name character class should compile")
});

const NAME_MIN_CHARS: usize = 2;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(missing_docs)]
pub enum ValidationError {
    #[error("value is empty")]
    Empty,

    #[error("name must be at least two characters")]
    TooShort,

    #[error("name contains a forbidden character: {0:?}")]
    ForbiddenCharacter(char),

    #[error("date is not in YYYY-MM-DD form")]
    Unparseable,

    #[error("birth year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("date {0} is in the future")]
    InFuture(NaiveDate),
}

/// Check a family or given name.
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some(character) = NAME_FORBIDDEN_REGEX
        .find(trimmed)
        .and_then(|found| found.as_str().chars().next())
    {
        return Err(ValidationError::ForbiddenCharacter(character));
    }

    if trimmed.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::TooShort);
    }

    Ok(())
}

/// Check a birth date given as `YYYY-MM-DD`.
///
/// The year must fall in `min_year..=max_year` and the date must not be
/// after `today`.
pub fn validate_birth_date(
    value: &str,
    today: NaiveDate,
    min_year: i32,
    max_year: i32,
) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let date = NaiveDate::parse_from_str(trimmed, BIRTH_DATE_FORMAT)
        .map_err(|_| ValidationError::Unparseable)?;

    let year = date.year();
    if year < min_year || year > max_year {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: min_year,
            max: max_year,
        });
    }

    if date > today {
        return Err(ValidationError::InFuture(date));
    }

    Ok(date)
}
