//! Value rules applied when a field is set.
//!
//! Strict mode checks every value against its [`FieldKind`]; permissive mode
//! stores whatever was typed. The empty string is accepted in both modes and
//! clears the field.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Field, FieldKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    #[default]
    Strict,
    Permissive,
}

fn invalid(field: Field, value: &str, reason: impl Into<String>) -> Error {
    Error::InvalidFieldValue {
        field,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_number(field: Field, value: &str) -> Result<f64> {
    let number: f64 = value
        .parse()
        .map_err(|_| invalid(field, value, "not a number"))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(invalid(field, value, "must be a finite number"))
    }
}

/// Check `value` for `field`.
///
/// Numeric and enumerated values are judged on their trimmed form. Nothing is
/// rewritten: the caller stores `value` exactly as given.
pub fn check(field: Field, value: &str, mode: Validation) -> Result<()> {
    if mode == Validation::Permissive {
        return Ok(());
    }

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    match field.kind() {
        FieldKind::Text => {}
        FieldKind::SignedNumber => {
            parse_number(field, trimmed)?;
        }
        FieldKind::Number => {
            if parse_number(field, trimmed)? < 0.0 {
                return Err(invalid(field, value, "must not be negative"));
            }
        }
        FieldKind::Percent => {
            let n = parse_number(field, trimmed)?;
            if !(0.0..=100.0).contains(&n) {
                return Err(invalid(field, value, "must be between 0 and 100"));
            }
        }
        FieldKind::Choice(set) => {
            if !set.contains(trimmed) {
                let allowed: Vec<&str> = set.options().iter().map(|o| o.value).collect();
                return Err(invalid(
                    field,
                    value,
                    format!("expected one of: {}", allowed.join(", ")),
                ));
            }
        }
    }

    Ok(())
}
