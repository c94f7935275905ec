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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and rules of the catalog:
//! - Type definitions for recipe records and their editable fields
//! - Record validation
//! - The record store (ids, CRUD, copy/paste)
//! - The ingredient catalog and ingredient selection
//!
//! Nothing here touches the terminal, the filesystem or a display server,
//! so every rule can be unit tested directly.

pub mod ingredients;
pub mod selection;
pub mod store;
pub mod types;
pub mod validator;

pub use ingredients::{IngredientCatalog, IngredientError, DEFAULT_INGREDIENTS};
pub use selection::{render_into_description, IngredientSelection};
pub use store::{RecordStore, StoreError};
pub use types::*;
pub use validator::{validate_record, ValidationError};

#[cfg(test)]
mod tests;
