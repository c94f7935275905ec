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

//! Recipe Catalog
//!
//! A single-user recipe catalog: validated records, a growing ingredient
//! vocabulary, and multi-select copy/paste.
//!
//! # Features
//!
//! - **CRUD Operations:** Create, read, update, and delete recipes
//! - **Validation:** New recipes need a name, whole-minute cooking time and description
//! - **Stable Ids:** Each record gets the highest stored id plus one
//! - **Copy/Paste:** Duplicate any selection of recipes under fresh ids
//! - **Ingredient Catalog:** 41 common ingredients, extendable at runtime
//! - **Ingredient Selection:** Toggle ingredients and write them into a recipe
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, validation, record store, ingredients)
//! - **`config`:** Settings from a TOML file and environment variables
//! - **`ui`:** MVC controller, image picker seam and the interactive shell
//!
//! The core does no I/O. Images are referenced by path only; choosing the
//! file is the job of an [`ui::ImagePicker`].
//!
//! # Examples
//!
//! ## Managing records
//!
//! ```
//! use recipe_catalog::core::{RecipeDraft, RecordStore};
//!
//! let mut store = RecordStore::new();
//! store.create_record(RecipeDraft::new("Soup", "20", "", "Hot soup"))?;
//! store.create_record(RecipeDraft::new("Tea", "3", "China", "Steep"))?;
//!
//! let copied = store.copy_selection(&store.list_records().iter().map(|r| r.id).collect());
//! let pasted = store.paste_selection(&copied);
//! assert_eq!(pasted[0].id.0, 3);
//! # Ok::<(), recipe_catalog::core::ValidationError>(())
//! ```
//!
//! ## Growing the ingredient catalog
//!
//! ```
//! use recipe_catalog::core::IngredientCatalog;
//!
//! let mut catalog = IngredientCatalog::new();
//! catalog.add_ingredient("Saffron")?;
//! assert!(catalog.add_ingredient("").is_err());
//! # Ok::<(), recipe_catalog::core::IngredientError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{IngredientCatalog, RecipeDraft, RecipeId, RecipeRecord, RecordStore};
