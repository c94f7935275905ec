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

//! In-memory recipe record store
//!
//! The store is the only owner of the record collection. It assigns ids,
//! runs validation on creation and implements delete, delete-all, copy
//! and paste.
//!
//! # Id assignment
//! The next id is the highest id currently stored plus one (1 when empty).
//! Deleting the record with the highest id therefore frees that id for the
//! next creation.
//!
//! # Ordering
//! Records stay in insertion order. Edits never reorder them.

use log::{debug, info};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::core::types::{RecipeDraft, RecipeId, RecipeRecord, RecordFields};
use crate::core::validator::{validate_record, ValidationError};

/// Errors for operations addressing a record by id
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("Recipe #{0} not found")]
    NotFound(RecipeId),
}

/// Ordered collection of recipe records
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<RecipeRecord>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the next created or pasted record will receive
    pub fn next_id(&self) -> RecipeId {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .map(RecipeId::next)
            .unwrap_or(RecipeId::FIRST)
    }

    /// Creates, validates and appends a new record
    ///
    /// A blank origin is replaced with "None" before validation. Invalid
    /// input leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in the record.
    pub fn create_record(&mut self, draft: RecipeDraft) -> Result<RecipeRecord, ValidationError> {
        let record = RecipeRecord::from_draft(self.next_id(), draft);

        if let Err(e) = validate_record(&record) {
            debug!("Rejected recipe '{}': {}", record.name, e);
            return Err(e);
        }

        info!("Created recipe {}", record);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Returns every record in insertion order
    pub fn list_records(&self) -> &[RecipeRecord] {
        &self.records
    }

    /// Looks up a record by id
    pub fn find_by_id(&self, id: RecipeId) -> Option<&RecipeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replaces the editable fields of a record
    ///
    /// No validation is performed; the edit path trusts its caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this id.
    pub fn update_record(
        &mut self,
        id: RecipeId,
        fields: RecordFields,
    ) -> Result<RecipeRecord, StoreError> {
        let record = self.find_mut(id)?;
        record.apply(fields);

        info!("Updated recipe {}", record);
        Ok(record.clone())
    }

    /// Stores the structured ingredient list of a record
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this id.
    pub fn set_ingredients(
        &mut self,
        id: RecipeId,
        ingredients: Vec<String>,
    ) -> Result<RecipeRecord, StoreError> {
        let record = self.find_mut(id)?;
        record.ingredients = ingredients;

        debug!("Recipe #{} now lists {} ingredients", id, record.ingredients.len());
        Ok(record.clone())
    }

    /// Removes the first record with this id
    ///
    /// Returns whether anything was removed. A missing id is not an error.
    pub fn delete_record(&mut self, id: RecipeId) -> bool {
        match self.records.iter().position(|record| record.id == id) {
            Some(index) => {
                let removed = self.records.remove(index);
                info!("Deleted recipe {}", removed);
                true
            }
            None => {
                debug!("Delete ignored, recipe #{} not found", id);
                false
            }
        }
    }

    /// Removes every record
    pub fn delete_all(&mut self) {
        if !self.records.is_empty() {
            info!("Deleted all {} recipes", self.records.len());
        }
        self.records.clear();
    }

    /// Returns copies of the records whose ids are in `ids`
    ///
    /// Output follows store order, not the order of `ids`. Unknown ids are
    /// skipped.
    pub fn copy_selection(&self, ids: &BTreeSet<RecipeId>) -> Vec<RecipeRecord> {
        let copied: Vec<RecipeRecord> = self
            .records
            .iter()
            .filter(|record| ids.contains(&record.id))
            .cloned()
            .collect();

        debug!("Copied {} of {} requested recipes", copied.len(), ids.len());
        copied
    }

    /// Appends a duplicate of each record under a fresh id
    ///
    /// Every field but the id is copied verbatim and no validation runs.
    /// Ids are assigned one after another, so they strictly increase.
    pub fn paste_selection(&mut self, records: &[RecipeRecord]) -> Vec<RecipeRecord> {
        let mut pasted = Vec::with_capacity(records.len());

        for source in records {
            let duplicate = source.duplicate_as(self.next_id());
            debug!("Pasted recipe #{} as #{}", source.id, duplicate.id);
            self.records.push(duplicate.clone());
            pasted.push(duplicate);
        }

        if !pasted.is_empty() {
            info!("Pasted {} recipes", pasted.len());
        }
        pasted
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find_mut(&mut self, id: RecipeId) -> Result<&mut RecipeRecord, StoreError> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
