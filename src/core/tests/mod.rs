//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Record store tests (ids, CRUD, copy/paste)
//! - Record validation tests
//! - Ingredient catalog and selection tests
//! - Type tests (RecipeRecord, RecipeDraft, etc.)

#[cfg(test)]
mod store_tests;
#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod validator_tests;
