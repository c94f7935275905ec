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

use crate::core::{
    types::{RecipeDraft, RecipeId, RecipeRecord},
    validator::{validate_record, ValidationError},
};

fn record(name: &str, cooking_time: &str, origin: &str, description: &str) -> RecipeRecord {
    RecipeRecord::from_draft(
        RecipeId(1),
        RecipeDraft::new(name, cooking_time, origin, description),
    )
}

#[test]
fn test_valid_record() {
    assert!(validate_record(&record("Soup", "20", "France", "Hot soup")).is_ok());
}

#[test]
fn test_defaulted_origin_passes() {
    // Blank origin becomes "None" before validation ever sees it
    assert!(validate_record(&record("Soup", "20", "", "Hot soup")).is_ok());
}

#[test]
fn test_empty_name() {
    assert_eq!(
        validate_record(&record("", "20", "France", "Hot soup")),
        Err(ValidationError::EmptyName)
    );
}

#[test]
fn test_non_digit_cooking_time() {
    assert_eq!(
        validate_record(&record("Soup", "20m", "France", "Hot soup")),
        Err(ValidationError::InvalidCookingTime("20m".to_string()))
    );
}

#[test]
fn test_empty_cooking_time() {
    assert!(matches!(
        validate_record(&record("Soup", "", "France", "Hot soup")),
        Err(ValidationError::InvalidCookingTime(_))
    ));
}

#[test]
fn test_empty_description() {
    assert_eq!(
        validate_record(&record("Soup", "20", "France", "")),
        Err(ValidationError::EmptyDescription)
    );
}

#[test]
fn test_empty_origin_on_raw_record() {
    let mut raw = record("Soup", "20", "France", "Hot soup");
    raw.origin.clear();

    assert_eq!(validate_record(&raw), Err(ValidationError::EmptyOrigin));
}

#[test]
fn test_omitting_origin_and_description_fails_on_description() {
    assert_eq!(
        validate_record(&record("Soup", "20", "", "")),
        Err(ValidationError::EmptyDescription)
    );
}

#[test]
fn test_first_failure_wins() {
    assert_eq!(
        validate_record(&record("", "abc", "", "")),
        Err(ValidationError::EmptyName)
    );
}
