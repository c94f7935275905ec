// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Record validation
//!
//! A record may only enter the store through creation if:
//! - the name is non-empty
//! - the cooking time is made of decimal digits only
//! - the origin is non-empty (after the "None" substitution)
//! - the description is non-empty
//!
//! Checks run in that order and the first failure is reported. Edits and
//! pasted duplicates bypass validation.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::types::RecipeRecord;

#[allow(clippy::expect_used)]
static COOKING_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").expect("cooking time pattern should be valid regex")
});

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Name field left blank
    #[error("Recipe name must not be empty")]
    EmptyName,

    /// Cooking time is empty or contains something other than digits
    #[error("Invalid cooking time '{0}': expected whole minutes")]
    InvalidCookingTime(String),

    /// Origin is empty
    #[error("Recipe origin must not be empty")]
    EmptyOrigin,

    /// Description field left blank
    #[error("Recipe description must not be empty")]
    EmptyDescription,
}

/// Returns true if `input` is a non-empty run of decimal digits
pub fn is_cooking_time(input: &str) -> bool {
    COOKING_TIME.is_match(input)
}

/// Validates the cooking time field
pub fn validate_cooking_time(input: &str) -> Result<(), ValidationError> {
    if is_cooking_time(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCookingTime(input.to_string()))
    }
}

/// Validates a complete record before it's admitted to the store
pub fn validate_record(record: &RecipeRecord) -> Result<(), ValidationError> {
    if record.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    validate_cooking_time(&record.cooking_time)?;

    if record.origin.is_empty() {
        return Err(ValidationError::EmptyOrigin);
    }

    if record.description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    Ok(())
}
