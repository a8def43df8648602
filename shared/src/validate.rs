//! Form validation.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. nickname, height and weight must be non-blank,
//! 2. gender and activity level must be selected,
//! 3. height and weight must start with a finite number.
//!
//! No range checks: any finite height or weight and any birthday is accepted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ProfileForm;

/// The error text doubles as the alert title shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("値を入力してください")]
    EmptyRequiredField,

    #[error("値を選択してください")]
    MissingSelection,

    #[error("数値を正しく入力してください")]
    NonNumeric,
}

impl ValidationError {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyRequiredField => "EMPTY_REQUIRED_FIELD",
            Self::MissingSelection => "MISSING_SELECTION",
            Self::NonNumeric => "NON_NUMERIC",
        }
    }
}

/// A form that passed [`validate`], with every field already in its wire type.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedProfile {
    pub nickname: String,
    pub height: f64,
    pub weight: f64,
    pub birthday: NaiveDate,
    pub gender: i32,
    pub active_level: i32,
}

pub fn validate(form: &ProfileForm) -> Result<ValidatedProfile, ValidationError> {
    if is_blank(&form.nickname) || is_blank(&form.height) || is_blank(&form.weight) {
        return Err(ValidationError::EmptyRequiredField);
    }

    // A code that is not an integer cannot have come from the picker, so it
    // counts as no selection.
    let (Some(gender), Some(active_level)) = (
        parse_selection(&form.gender),
        parse_selection(&form.active_level),
    ) else {
        return Err(ValidationError::MissingSelection);
    };

    let (Some(height), Some(weight)) = (
        parse_measurement(&form.height),
        parse_measurement(&form.weight),
    ) else {
        return Err(ValidationError::NonNumeric);
    };

    Ok(ValidatedProfile {
        nickname: form.nickname.clone(),
        height,
        weight,
        birthday: form.birthday,
        gender,
        active_level,
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_selection(code: &str) -> Option<i32> {
    code.trim().parse().ok()
}

/// Reads the leading decimal number and ignores whatever follows it, so
/// `"170cm"` is 170. No leading number, or one that overflows, is `None`.
fn parse_measurement(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if fraction > 0 || whole > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let signed = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + signed);
        if exponent > 0 {
            end += 1 + signed + exponent;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
