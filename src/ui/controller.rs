//! MVC Controller - Mediates between Model (RecordStore, IngredientCatalog) and View
//!
//! # Responsibilities
//!
//! - Create, edit and delete recipes through the RecordStore
//! - Track the rows selected in the recipe list
//! - Hold the copy/paste clipboard
//! - Remember the image picked for the next new recipe
//! - Apply ingredient selections to a recipe
//! - Provide data to the View in display-ready form
//!
//! # Architecture
//!
//! The Controller owns the Model components but knows nothing about how
//! they're drawn. Interior mutability through `RefCell` lets a single-threaded
//! View share one `Rc<Controller>` between its handlers.

use log::{debug, info};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::Settings;
use crate::core::{
    render_into_description, IngredientCatalog, IngredientError, IngredientSelection,
    RecipeDraft, RecipeId, RecipeRecord, RecordFields, RecordStore, StoreError, ValidationError,
};
use crate::ui::picker::ImagePicker;

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// All recipe records
    store: RefCell<RecordStore>,
    /// Selectable ingredient names
    catalog: RefCell<IngredientCatalog>,
    /// Ids currently selected in the recipe list
    selected: RefCell<BTreeSet<RecipeId>>,
    /// Records captured by the last copy, consumed by paste
    clipboard: RefCell<Vec<RecipeRecord>>,
    /// Image chosen for the recipe being entered in the new-recipe form
    pending_image: RefCell<Option<PathBuf>>,
    /// Column count for the ingredient picker
    ingredient_columns: usize,
}

impl Controller {
    /// Creates a Controller with an empty store and the seeded catalog
    ///
    /// Extra ingredients from the settings are appended to the defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use recipe_catalog::config::Settings;
    /// use recipe_catalog::core::RecipeDraft;
    /// use recipe_catalog::ui::Controller;
    ///
    /// let controller = Controller::new(&Settings::default());
    /// controller.add_recipe(RecipeDraft::new("Soup", "20", "", "Hot soup"))?;
    /// assert_eq!(controller.recipe_count(), 1);
    /// # Ok::<(), recipe_catalog::core::ValidationError>(())
    /// ```
    pub fn new(settings: &Settings) -> Self {
        Self {
            store: RefCell::new(RecordStore::new()),
            catalog: RefCell::new(IngredientCatalog::with_extra(&settings.extra_ingredients)),
            selected: RefCell::new(BTreeSet::new()),
            clipboard: RefCell::new(Vec::new()),
            pending_image: RefCell::new(None),
            ingredient_columns: settings.ingredient_columns,
        }
    }

    /// Returns all recipes in list order
    pub fn recipes(&self) -> Vec<RecipeRecord> {
        self.store.borrow().list_records().to_vec()
    }

    /// Returns the recipe with this id, if any
    pub fn recipe(&self, id: RecipeId) -> Option<RecipeRecord> {
        self.store.borrow().find_by_id(id).cloned()
    }

    pub fn recipe_count(&self) -> usize {
        self.store.borrow().len()
    }

    /// Asks the picker for an image to attach to the next new recipe
    ///
    /// A cancelled pick clears any image chosen earlier.
    pub fn pick_image(&self, picker: &dyn ImagePicker) -> Option<PathBuf> {
        let picked = picker.pick_image();
        debug!("Pending image set to {:?}", picked);
        *self.pending_image.borrow_mut() = picked.clone();
        picked
    }

    /// Returns the image waiting for the next new recipe
    pub fn pending_image(&self) -> Option<PathBuf> {
        self.pending_image.borrow().clone()
    }

    /// Creates a recipe from the new-recipe form
    ///
    /// A draft without its own image takes the pending image. The pending
    /// image is cleared only when the recipe is accepted, so a rejected form
    /// can be corrected and resubmitted.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] that rejected the input.
    pub fn add_recipe(&self, mut draft: RecipeDraft) -> Result<RecipeRecord, ValidationError> {
        if draft.image_path.is_none() {
            draft.image_path = self.pending_image();
        }

        let record = self.store.borrow_mut().create_record(draft)?;
        self.pending_image.borrow_mut().take();
        Ok(record)
    }

    /// Saves the edit form of an existing recipe
    ///
    /// Values are stored as given, without validation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the recipe was deleted meanwhile.
    pub fn save_changes(&self, id: RecipeId, fields: RecordFields) -> Result<RecipeRecord, StoreError> {
        self.store.borrow_mut().update_record(id, fields)
    }

    /// Replaces the image of an existing recipe
    ///
    /// Returns `Ok(None)` and leaves the recipe alone if the pick is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no recipe has this id. The picker
    /// is not shown in that case.
    pub fn change_image(
        &self,
        id: RecipeId,
        picker: &dyn ImagePicker,
    ) -> Result<Option<RecipeRecord>, StoreError> {
        let mut fields = self.recipe(id).ok_or(StoreError::NotFound(id))?.fields();

        let Some(path) = picker.pick_image() else {
            return Ok(None);
        };

        fields.image_path = Some(path);
        self.save_changes(id, fields).map(Some)
    }

    /// Writes the selected ingredients into a recipe
    ///
    /// The chosen names replace the "Ingredients:" block of the description
    /// and become the recipe's structured ingredient list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no recipe has this id.
    pub fn apply_ingredients(
        &self,
        id: RecipeId,
        selection: &IngredientSelection,
    ) -> Result<RecipeRecord, StoreError> {
        let mut fields = self.recipe(id).ok_or(StoreError::NotFound(id))?.fields();
        let names = selection.selected_names(&self.catalog.borrow());

        fields.description = render_into_description(&fields.description, &names);

        let mut store = self.store.borrow_mut();
        store.update_record(id, fields)?;
        store.set_ingredients(id, names)
    }

    /// Adds a recipe to the list selection
    ///
    /// Returns false if no recipe has this id.
    pub fn select(&self, id: RecipeId) -> bool {
        if self.store.borrow().find_by_id(id).is_none() {
            return false;
        }
        self.selected.borrow_mut().insert(id);
        true
    }

    /// Selects every recipe in the list
    pub fn select_all(&self) {
        let ids = self.store.borrow().list_records().iter().map(|r| r.id).collect();
        *self.selected.borrow_mut() = ids;
    }

    pub fn deselect_all(&self) {
        self.selected.borrow_mut().clear();
    }

    /// Returns the selected ids in ascending order
    pub fn selected_ids(&self) -> Vec<RecipeId> {
        self.selected.borrow().iter().copied().collect()
    }

    /// Deletes one recipe
    ///
    /// Returns whether a recipe was removed.
    pub fn delete_recipe(&self, id: RecipeId) -> bool {
        self.selected.borrow_mut().remove(&id);
        self.store.borrow_mut().delete_record(id)
    }

    /// Deletes every recipe and clears the selection
    pub fn delete_all(&self) {
        self.selected.borrow_mut().clear();
        self.store.borrow_mut().delete_all();
    }

    /// Copies the selected recipes into the clipboard
    ///
    /// With nothing selected the clipboard keeps its previous content.
    /// Returns the number of recipes now held by the clipboard.
    pub fn copy_selected(&self) -> usize {
        let selected = self.selected.borrow();
        if selected.is_empty() {
            return self.clipboard.borrow().len();
        }

        let copied = self.store.borrow().copy_selection(&selected);
        info!("Copied {} recipes to clipboard", copied.len());

        let count = copied.len();
        *self.clipboard.borrow_mut() = copied;
        count
    }

    /// Pastes the clipboard as new recipes and empties it
    pub fn paste(&self) -> Vec<RecipeRecord> {
        let records = std::mem::take(&mut *self.clipboard.borrow_mut());
        if records.is_empty() {
            return Vec::new();
        }

        self.store.borrow_mut().paste_selection(&records)
    }

    /// Returns the number of recipes waiting to be pasted
    pub fn clipboard_len(&self) -> usize {
        self.clipboard.borrow().len()
    }

    /// Adds an ingredient to the catalog
    ///
    /// # Errors
    ///
    /// Returns [`IngredientError::EmptyName`] for blank names.
    pub fn add_ingredient(&self, name: &str) -> Result<(), IngredientError> {
        self.catalog.borrow_mut().add_ingredient(name)
    }

    /// Returns the catalog in order
    pub fn ingredients(&self) -> Vec<String> {
        self.catalog.borrow().list_ingredients().to_vec()
    }

    /// Returns the catalog laid out for the ingredient picker
    pub fn ingredient_grid(&self) -> Vec<Vec<String>> {
        self.catalog
            .borrow()
            .grid(self.ingredient_columns)
            .into_iter()
            .map(|row| row.into_iter().map(str::to_string).collect())
            .collect()
    }
}
