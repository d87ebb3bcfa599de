// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! This module provides validation checking of function or method conditions.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code, for correct behavior of the checked type.
//!
//! Every check returns a [`CorrectnessError`] naming the label of the checked value and
//! the rule it violated. Constructors propagate these errors to the caller unchanged.

use std::fmt::Display;

use rust_decimal::Decimal;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true. It is typically used in conjunction with
/// functions like `expect` to provide a consistent error message.
pub const FAILED: &str = "Condition failed";

/// A validation error raised when a value violates a documented condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CorrectnessError {
    /// The string was empty or consisted solely of whitespace.
    #[error("Condition failed: invalid string for '{label}', {reason}")]
    InvalidString {
        /// The label of the checked value.
        label: String,
        /// Why the string was rejected.
        reason: &'static str,
    },
    /// The value was not greater than zero.
    #[error("Condition failed: invalid {kind} for '{label}' not positive, was {value}")]
    NotPositive {
        /// The label of the checked value.
        label: String,
        /// The numeric kind of the checked value.
        kind: &'static str,
        /// The rendered offending value.
        value: String,
    },
    /// The value was less than zero.
    #[error("Condition failed: invalid {kind} for '{label}' negative, was {value}")]
    Negative {
        /// The label of the checked value.
        label: String,
        /// The numeric kind of the checked value.
        kind: &'static str,
        /// The rendered offending value.
        value: String,
    },
    /// A boolean predicate did not hold.
    #[error("Condition failed: {message}")]
    PredicateViolated {
        /// Describes the violated predicate.
        message: String,
    },
    /// The string did not contain a required pattern.
    #[error("Condition failed: invalid string for '{label}' did not contain '{pattern}', was '{value}'")]
    MissingPattern {
        /// The label of the checked value.
        label: String,
        /// The required pattern.
        pattern: String,
        /// The offending string.
        value: String,
    },
}

impl CorrectnessError {
    /// Returns the label of the value which failed the check, if the check was labelled.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::InvalidString { label, .. }
            | Self::NotPositive { label, .. }
            | Self::Negative { label, .. }
            | Self::MissingPattern { label, .. } => Some(label),
            Self::PredicateViolated { .. } => None,
        }
    }
}

/// The result type for correctness checks and checked constructors.
pub type CorrectnessResult<T> = Result<T, CorrectnessError>;

fn not_positive(label: &str, kind: &'static str, value: impl Display) -> CorrectnessError {
    CorrectnessError::NotPositive {
        label: label.to_string(),
        kind,
        value: value.to_string(),
    }
}

fn negative(label: &str, kind: &'static str, value: impl Display) -> CorrectnessError {
    CorrectnessError::Negative {
        label: label.to_string(),
        kind,
        value: value.to_string(),
    }
}

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> CorrectnessResult<()> {
    if !predicate {
        return Err(CorrectnessError::PredicateViolated {
            message: fail_msg.to_string(),
        });
    }
    Ok(())
}

/// Checks the string `s` has semantic meaning.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` consists solely of whitespace characters.
#[inline(always)]
pub fn check_valid_string<T: AsRef<str>>(s: T, label: &str) -> CorrectnessResult<()> {
    let s = s.as_ref();

    let reason = if s.is_empty() {
        "was empty"
    } else if s.chars().all(char::is_whitespace) {
        "was all whitespace"
    } else {
        return Ok(());
    };

    Err(CorrectnessError::InvalidString {
        label: label.to_string(),
        reason,
    })
}

/// Checks the string `s` contains the pattern `pat`.
///
/// # Errors
///
/// Returns an error if `s` does not contain `pat`.
#[inline(always)]
pub fn check_string_contains<T: AsRef<str>>(
    s: T,
    pat: &str,
    label: &str,
) -> CorrectnessResult<()> {
    let s = s.as_ref();
    if !s.contains(pat) {
        return Err(CorrectnessError::MissingPattern {
            label: label.to_string(),
            pattern: pat.to_string(),
            value: s.to_string(),
        });
    }
    Ok(())
}

/// Checks the `Decimal` value is positive (> 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_positive_decimal(value: Decimal, label: &str) -> CorrectnessResult<()> {
    if value <= Decimal::ZERO {
        return Err(not_positive(label, "Decimal", value));
    }
    Ok(())
}

/// Checks the `Decimal` value is non-negative (>= 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_non_negative_decimal(value: Decimal, label: &str) -> CorrectnessResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(negative(label, "Decimal", value));
    }
    Ok(())
}

/// Checks the `i64` value is positive (> 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_positive_i64(value: i64, label: &str) -> CorrectnessResult<()> {
    if value <= 0 {
        return Err(not_positive(label, "i64", value));
    }
    Ok(())
}

/// Checks the `i64` value is non-negative (>= 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_non_negative_i64(value: i64, label: &str) -> CorrectnessResult<()> {
    if value < 0 {
        return Err(negative(label, "i64", value));
    }
    Ok(())
}
