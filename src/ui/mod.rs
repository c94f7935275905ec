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

//! User-facing layer with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: RecordStore, IngredientCatalog (in the `core` module)
//! - **View**: the interactive shell (in `shell.rs`)
//! - **Controller**: Mediates between Model and View (in `controller.rs`)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── controller.rs   // MVC Controller
//! ├── picker.rs       // Image file chooser seam
//! └── shell.rs        // Line-oriented View
//! ```

pub mod controller;
pub mod picker;
pub mod shell;

pub use {controller::Controller, picker::ImagePicker, shell::Shell};

#[cfg(test)]
mod tests;
