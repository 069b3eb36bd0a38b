//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every operation enforces the same invariants.

use chrono::NaiveDate;

use crate::{EngineError, Money, ResultEngine};

/// Declares a closed set of values stored as snake_case strings.
///
/// Generates `as_str`, `Display` and `TryFrom<&str>` (unknown values map to
/// [`EngineError::InvalidStatus`]).
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Canonical string stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::EngineError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err($crate::EngineError::InvalidStatus(format!(
                        concat!("invalid ", stringify!($name), ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

pub(crate) use string_enum;

/// Trim and require a non-empty value.
pub(crate) fn normalize_required(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim and drop empty values.
pub(crate) fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

pub(crate) fn require_non_negative(amount: Money, label: &str) -> ResultEngine<()> {
    if amount.is_negative() {
        return Err(EngineError::InvalidAmount(format!("{label} must be >= 0")));
    }
    require_within_limit(amount, label)
}

pub(crate) fn require_positive(amount: Money, label: &str) -> ResultEngine<()> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(format!("{label} must be > 0")));
    }
    require_within_limit(amount, label)
}

fn require_within_limit(amount: Money, label: &str) -> ResultEngine<()> {
    if amount > Money::MAX_INPUT {
        return Err(EngineError::InvalidAmount(format!(
            "{label} must be at most {}",
            Money::MAX_INPUT
        )));
    }
    Ok(())
}

/// Add `amount` to a running total, failing instead of wrapping.
pub(crate) fn add_to_total(total: &mut Money, amount: Money, label: &str) -> ResultEngine<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| EngineError::InvalidAmount(format!("{label} total is out of range")))?;
    Ok(())
}

/// Percentages are expressed in percent units (`5.5` means 5.5%).
pub(crate) fn require_percent(value: f64, label: &str) -> ResultEngine<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(EngineError::InvalidAmount(format!(
            "{label} must be between 0 and 100"
        )));
    }
    Ok(())
}

/// Ensure `end`, when present, is not before `start`.
pub(crate) fn require_date_order(
    start: NaiveDate,
    end: Option<NaiveDate>,
    label: &str,
) -> ResultEngine<()> {
    if let Some(end) = end
        && end < start
    {
        return Err(EngineError::InvalidDate(format!(
            "{label} end {end} is before start {start}"
        )));
    }
    Ok(())
}
