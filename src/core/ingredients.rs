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

//! Selectable ingredient vocabulary
//!
//! The catalog starts from a fixed list and only grows. Duplicate names are
//! accepted; only blank names are refused.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors when adding an ingredient
#[derive(Debug, Error, PartialEq)]
pub enum IngredientError {
    /// Name is empty or whitespace only
    #[error("Ingredient name must not be empty")]
    EmptyName,
}

/// Ingredients available at startup, in display order
pub const DEFAULT_INGREDIENTS: &[&str] = &[
    "Salt",
    "Pepper",
    "Sugar",
    "Flour",
    "Butter",
    "Eggs",
    "Milk",
    "Onion",
    "Garlic",
    "Tomato",
    "Basil",
    "Oregano",
    "Parsley",
    "Thyme",
    "Lemon",
    "Lime",
    "Chili",
    "Cinnamon",
    "Vanilla",
    "Honey",
    "Ginger",
    "Soy Sauce",
    "Vinegar",
    "Mustard",
    "Mayonnaise",
    "Paprika",
    "Cumin",
    "Coriander",
    "Sesame Seeds",
    "Coconut Milk",
    "Peanut Butter",
    "Cocoa Powder",
    "Maple Syrup",
    "Worcestershire Sauce",
    "Fish Sauce",
    "Tahini",
    "Red Wine",
    "White Wine",
    "Rice Vinegar",
    "Balsamic Vinegar",
    "Apple Cider Vinegar",
];

/// Ordered list of known ingredient names
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IngredientCatalog {
    names: Vec<String>,
}

impl IngredientCatalog {
    /// Creates a catalog seeded with [`DEFAULT_INGREDIENTS`]
    pub fn new() -> Self {
        Self {
            names: DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates the default catalog followed by `extra` names
    ///
    /// Blank extras are skipped with a warning.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in extra {
            if catalog.add_ingredient(name.as_ref()).is_err() {
                warn!("Skipping blank ingredient name from settings");
            }
        }
        catalog
    }

    /// Appends an ingredient to the end of the catalog
    ///
    /// The name is stored as given. Names already present are appended again.
    ///
    /// # Errors
    ///
    /// Returns [`IngredientError::EmptyName`] for empty or blank names.
    pub fn add_ingredient(&mut self, name: &str) -> Result<(), IngredientError> {
        if name.trim().is_empty() {
            return Err(IngredientError::EmptyName);
        }

        info!("Added ingredient '{}'", name);
        self.names.push(name.to_string());
        Ok(())
    }

    /// Returns every ingredient in catalog order
    pub fn list_ingredients(&self) -> &[String] {
        &self.names
    }

    /// Returns the ingredient at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Lays the catalog out row by row in `columns` columns
    ///
    /// Entry `i` lands at row `i / columns`, column `i % columns`. The last
    /// row may be short. Zero columns is treated as one.
    pub fn grid(&self, columns: usize) -> Vec<Vec<&str>> {
        self.names
            .chunks(columns.max(1))
            .map(|row| row.iter().map(String::as_str).collect())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for IngredientCatalog {
    fn default() -> Self {
        Self::new()
    }
}
