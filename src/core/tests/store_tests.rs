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

//! Record store tests

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::{
    RecipeDraft, RecipeId, RecordFields, RecordStore, StoreError, ValidationError,
};

/// Helper: Store holding three valid recipes (ids 1, 2, 3)
fn create_test_store() -> RecordStore {
    let mut store = RecordStore::new();
    store
        .create_record(RecipeDraft::new("Soup", "20", "", "Hot soup"))
        .unwrap();
    store
        .create_record(RecipeDraft::new("Pasta", "15", "Italy", "Boil and toss"))
        .unwrap();
    store
        .create_record(
            RecipeDraft::new("Curry", "40", "India", "Simmer slowly").with_image("/img/curry.png"),
        )
        .unwrap();
    store
}

fn ids(store: &RecordStore) -> Vec<u32> {
    store.list_records().iter().map(|r| r.id.0).collect()
}

#[test]
fn test_create_in_empty_store() {
    let mut store = RecordStore::new();
    let soup = store
        .create_record(RecipeDraft::new("Soup", "20", "", "Hot soup"))
        .unwrap();

    assert_eq!(soup.id, RecipeId(1));
    assert_eq!(soup.name, "Soup");
    assert_eq!(soup.cooking_time, "20");
    assert_eq!(soup.origin, "None");
    assert_eq!(soup.description, "Hot soup");
    assert!(soup.ingredients.is_empty());
    assert!(soup.image_path.is_none());
    assert_eq!(store.list_records(), &[soup]);
}

#[test]
fn test_ids_strictly_increase() {
    let store = create_test_store();
    assert_eq!(ids(&store), vec![1, 2, 3]);
}

#[test]
fn test_created_record_listed_once() {
    let mut store = create_test_store();
    let created = store
        .create_record(RecipeDraft::new("Salad", "5", "Greece", "Chop"))
        .unwrap();

    let occurrences = store
        .list_records()
        .iter()
        .filter(|r| r.id == created.id)
        .count();
    assert_eq!(occurrences, 1);
    assert!(store.list_records().iter().all(|r| r.id <= created.id));
}

#[test]
fn test_next_id_after_two_records() {
    let mut store = RecordStore::new();
    store.create_record(RecipeDraft::new("A", "1", "", "a")).unwrap();
    store.create_record(RecipeDraft::new("B", "2", "", "b")).unwrap();

    let third = store.create_record(RecipeDraft::new("C", "3", "", "c")).unwrap();
    assert_eq!(third.id, RecipeId(3));
}

#[test]
fn test_id_not_reused_after_deleting_lower_id() {
    let mut store = create_test_store();
    assert!(store.delete_record(RecipeId(2)));

    let next = store.create_record(RecipeDraft::new("Stew", "90", "", "Slow")).unwrap();
    assert_eq!(next.id, RecipeId(4));
}

#[test]
fn test_id_recomputed_after_deleting_highest() {
    // The next id follows the highest id still stored
    let mut store = create_test_store();
    assert!(store.delete_record(RecipeId(3)));

    assert_eq!(store.next_id(), RecipeId(3));
}

#[test]
fn test_invalid_cooking_time_rejected() {
    let mut store = create_test_store();

    let result = store.create_record(RecipeDraft::new("Bad", "twenty", "", "Nope"));

    assert_eq!(
        result,
        Err(ValidationError::InvalidCookingTime("twenty".to_string()))
    );
    assert_eq!(store.len(), 3, "Rejected record must not be appended");
}

#[test]
fn test_rejection_does_not_consume_id() {
    let mut store = RecordStore::new();
    assert!(store.create_record(RecipeDraft::new("", "1", "", "x")).is_err());

    let ok = store.create_record(RecipeDraft::new("Ok", "1", "", "x")).unwrap();
    assert_eq!(ok.id, RecipeId(1));
}

#[test]
fn test_find_by_id() {
    let store = create_test_store();

    assert_eq!(store.find_by_id(RecipeId(2)).map(|r| r.name.as_str()), Some("Pasta"));
    assert!(store.find_by_id(RecipeId(42)).is_none());
}

#[test]
fn test_update_record_skips_validation() {
    let mut store = create_test_store();

    let updated = store
        .update_record(
            RecipeId(2),
            RecordFields {
                name: "Pasta".to_string(),
                cooking_time: "a while".to_string(),
                origin: String::new(),
                description: String::new(),
                image_path: Some(PathBuf::from("/img/pasta.jpg")),
            },
        )
        .unwrap();

    assert_eq!(updated.id, RecipeId(2));
    assert_eq!(updated.cooking_time, "a while");
    assert_eq!(updated.origin, "");
    assert_eq!(store.find_by_id(RecipeId(2)), Some(&updated));
    assert_eq!(ids(&store), vec![1, 2, 3], "Edits must not reorder records");
}

#[test]
fn test_update_missing_record() {
    let mut store = create_test_store();

    let result = store.update_record(RecipeId(99), RecordFields::default());
    assert_eq!(result, Err(StoreError::NotFound(RecipeId(99))));
}

#[test]
fn test_set_ingredients() {
    let mut store = create_test_store();
    let names = vec!["Salt".to_string(), "Onion".to_string()];

    let updated = store.set_ingredients(RecipeId(1), names.clone()).unwrap();
    assert_eq!(updated.ingredients, names);

    assert_eq!(
        store.set_ingredients(RecipeId(8), Vec::new()),
        Err(StoreError::NotFound(RecipeId(8)))
    );
}

#[test]
fn test_delete_record() {
    let mut store = create_test_store();

    assert!(store.delete_record(RecipeId(1)));
    assert_eq!(ids(&store), vec![2, 3]);
}

#[test]
fn test_delete_missing_record_is_noop() {
    let mut store = create_test_store();
    let before = store.list_records().to_vec();

    assert!(!store.delete_record(RecipeId(77)));
    assert_eq!(store.list_records(), before.as_slice());
}

#[test]
fn test_delete_all() {
    let mut store = create_test_store();

    store.delete_all();
    assert!(store.list_records().is_empty());

    // Idempotent
    store.delete_all();
    assert!(store.is_empty());
    assert_eq!(store.next_id(), RecipeId(1));
}

#[test]
fn test_copy_selection_in_store_order() {
    let store = create_test_store();
    let wanted: BTreeSet<RecipeId> = [RecipeId(3), RecipeId(1)].into_iter().collect();

    let copied = store.copy_selection(&wanted);
    let copied_ids: Vec<u32> = copied.iter().map(|r| r.id.0).collect();

    assert_eq!(copied_ids, vec![1, 3]);
    assert_eq!(store.len(), 3, "Copy must not mutate the store");
}

#[test]
fn test_copy_selection_empty_and_unmatched() {
    let store = create_test_store();

    assert!(store.copy_selection(&BTreeSet::new()).is_empty());

    let unknown: BTreeSet<RecipeId> = [RecipeId(50), RecipeId(51)].into_iter().collect();
    assert!(store.copy_selection(&unknown).is_empty());
}

#[test]
fn test_paste_selection_assigns_fresh_ids() {
    let mut store = create_test_store();
    let wanted: BTreeSet<RecipeId> = [RecipeId(1), RecipeId(3)].into_iter().collect();
    let copied = store.copy_selection(&wanted);

    let pasted = store.paste_selection(&copied);

    assert_eq!(pasted.len(), 2);
    assert_eq!(pasted[0].id, RecipeId(4));
    assert_eq!(pasted[1].id, RecipeId(5));
    assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);

    for (source, duplicate) in copied.iter().zip(&pasted) {
        assert_eq!(duplicate.name, source.name);
        assert_eq!(duplicate.cooking_time, source.cooking_time);
        assert_eq!(duplicate.origin, source.origin);
        assert_eq!(duplicate.description, source.description);
        assert_eq!(duplicate.ingredients, source.ingredients);
        assert_eq!(duplicate.image_path, source.image_path);
    }
}

#[test]
fn test_paste_after_source_deleted() {
    let mut store = create_test_store();
    let wanted: BTreeSet<RecipeId> = [RecipeId(2)].into_iter().collect();
    let copied = store.copy_selection(&wanted);

    store.delete_all();
    let pasted = store.paste_selection(&copied);

    assert_eq!(pasted[0].id, RecipeId(1));
    assert_eq!(pasted[0].name, "Pasta");
}

#[test]
fn test_paste_does_not_validate() {
    let mut store = create_test_store();
    store
        .update_record(
            RecipeId(1),
            RecordFields {
                name: String::new(),
                ..RecordFields::default()
            },
        )
        .unwrap();

    let copied = store.copy_selection(&[RecipeId(1)].into_iter().collect());
    let pasted = store.paste_selection(&copied);

    assert_eq!(pasted.len(), 1);
    assert_eq!(pasted[0].name, "");
}

#[test]
fn test_paste_nothing() {
    let mut store = create_test_store();

    assert!(store.paste_selection(&[]).is_empty());
    assert_eq!(store.len(), 3);
}
