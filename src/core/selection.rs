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

//! Ingredient selection while editing a record
//!
//! A selection is a set of catalog indices toggled on and off, with no tie
//! to any widget toolkit. Applying it writes an "Ingredients:" block at the
//! end of the description:
//!
//! ```text
//! Hot soup
//!
//! Ingredients:
//! Salt
//! Onion
//! ```
//!
//! Re-applying replaces the previous block instead of stacking a new one.

use std::collections::BTreeSet;

use crate::core::ingredients::IngredientCatalog;

/// Marker that starts the ingredient block inside a description
pub const INGREDIENTS_MARKER: &str = "\nIngredients:";

/// Toggle-set of catalog indices
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IngredientSelection {
    selected: BTreeSet<usize>,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the entry at `index` and returns its new state
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.selected.remove(&index) {
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    pub fn select(&mut self, index: usize) {
        self.selected.insert(index);
    }

    pub fn deselect(&mut self, index: usize) {
        self.selected.remove(&index);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Resolves the selection against a catalog
    ///
    /// Names come back in catalog order. Indices past the end of the
    /// catalog are ignored.
    pub fn selected_names(&self, catalog: &IngredientCatalog) -> Vec<String> {
        self.selected
            .iter()
            .filter_map(|&index| catalog.get(index))
            .map(str::to_string)
            .collect()
    }
}

impl FromIterator<usize> for IngredientSelection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// Returns `description` with its ingredient block replaced by `names`
///
/// Anything from the first `"\nIngredients:"` onward is dropped, trailing
/// whitespace is trimmed, then a fresh block is appended. An empty `names`
/// still writes the header.
pub fn render_into_description(description: &str, names: &[String]) -> String {
    let body = match description.find(INGREDIENTS_MARKER) {
        Some(start) => &description[..start],
        None => description,
    };

    format!("{}\n{}\n{}", body.trim_end(), INGREDIENTS_MARKER, names.join("\n"))
}
