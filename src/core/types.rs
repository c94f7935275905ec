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

//! src/core/types.rs
//!
//! Core type definitions for recipe management
//!
//! This module defines the fundamental types used throughout the application:
//! - `RecipeId`: Positive record identifier assigned by the store
//! - `RecipeRecord`: A complete catalog entry
//! - `RecipeDraft`: Field values collected for a record that doesn't exist yet
//! - `RecordFields`: The mutable subset of a record, used for edits
//!
//! All types implement serialisation so a persistence layer can be added
//! without touching the core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Placeholder stored when a record is created without an origin
pub const DEFAULT_ORIGIN: &str = "None";

/// Identifier of a recipe record
///
/// Always positive. The store hands out `max + 1`, starting at 1.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl RecipeId {
    /// The id given to the first record of an empty store
    pub const FIRST: RecipeId = RecipeId(1);

    /// Returns the id that follows this one
    pub fn next(self) -> Self {
        RecipeId(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recipe catalog entry
///
/// # Example
/// ```
/// use recipe_catalog::core::{RecipeDraft, RecordStore};
///
/// let mut store = RecordStore::new();
/// let soup = store.create_record(RecipeDraft::new("Soup", "20", "", "Hot soup"))?;
/// assert_eq!(soup.id.0, 1);
/// assert_eq!(soup.origin, "None");
/// # Ok::<(), recipe_catalog::core::ValidationError>(())
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecipeRecord {
    /// Store-assigned identifier, never edited
    pub id: RecipeId,

    pub name: String,

    /// Minutes, kept as the text the user typed (digits only when valid)
    pub cooking_time: String,

    pub origin: String,

    pub description: String,

    /// Structured ingredient list, kept in sync with the
    /// "Ingredients:" block of the description by the selection flow
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Reference to an image chosen through the file picker
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

impl RecipeRecord {
    /// Builds a record from a draft with the given id
    ///
    /// Applies the blank-origin substitution but performs no validation.
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        let origin = if draft.origin.is_empty() {
            DEFAULT_ORIGIN.to_string()
        } else {
            draft.origin
        };

        Self {
            id,
            name: draft.name,
            cooking_time: draft.cooking_time,
            origin,
            description: draft.description,
            ingredients: Vec::new(),
            image_path: draft.image_path,
        }
    }

    /// Returns a copy of this record under a different id
    pub fn duplicate_as(&self, id: RecipeId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    /// Replaces every editable field with the given values
    pub fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.cooking_time = fields.cooking_time;
        self.origin = fields.origin;
        self.description = fields.description;
        self.image_path = fields.image_path;
    }

    /// Returns the editable fields of this record
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            cooking_time: self.cooking_time.clone(),
            origin: self.origin.clone(),
            description: self.description.clone(),
            image_path: self.image_path.clone(),
        }
    }
}

impl fmt::Display for RecipeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({} min, {})",
            self.id, self.name, self.cooking_time, self.origin
        )
    }
}

/// Field values for a record about to be created
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecipeDraft {
    pub name: String,
    pub cooking_time: String,
    /// Left blank to get [`DEFAULT_ORIGIN`]
    pub origin: String,
    pub description: String,
    pub image_path: Option<PathBuf>,
}

impl RecipeDraft {
    /// Creates a draft without an image
    pub fn new(name: &str, cooking_time: &str, origin: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            cooking_time: cooking_time.to_string(),
            origin: origin.to_string(),
            description: description.to_string(),
            image_path: None,
        }
    }

    /// Attaches an image reference
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

/// Editable fields of an existing record
///
/// Everything except the id; ingredients are changed through the
/// selection flow instead.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordFields {
    pub name: String,
    pub cooking_time: String,
    pub origin: String,
    pub description: String,
    pub image_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_id_next() {
        assert_eq!(RecipeId(1).next(), RecipeId(2));
        assert_eq!(RecipeId(u32::MAX).next(), RecipeId(u32::MAX));
    }

    #[test]
    fn test_from_draft_substitutes_blank_origin() {
        let record = RecipeRecord::from_draft(RecipeId(4), RecipeDraft::new("Soup", "20", "", "Hot"));

        assert_eq!(record.id, RecipeId(4));
        assert_eq!(record.origin, DEFAULT_ORIGIN);
        assert!(record.ingredients.is_empty());
        assert!(record.image_path.is_none());
    }

    #[test]
    fn test_from_draft_keeps_whitespace_origin() {
        // Only the empty string is substituted
        let record = RecipeRecord::from_draft(RecipeId(1), RecipeDraft::new("Soup", "20", " ", "Hot"));
        assert_eq!(record.origin, " ");
    }

    #[test]
    fn test_record_display() {
        let record =
            RecipeRecord::from_draft(RecipeId(3), RecipeDraft::new("Pho", "45", "Vietnam", "Broth"));

        assert_eq!(format!("{}", record), "#3 Pho (45 min, Vietnam)");
    }
}
