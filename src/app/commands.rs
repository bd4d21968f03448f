//! Command handlers - mutations and navigation on the store

use crate::app::ViewStateStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{
    extension_of, DroppedFile, File, FileType, FilterSpec, Folder, ItemKind, ItemRef, SortField,
    SortSpec, ViewMode, ViewTag,
};
use crate::size::format_file_size;

/// Trimmed name, or a validation error when nothing is left
fn validated_name(name: &str) -> StoreResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(StoreError::empty_name())
    } else {
        Ok(trimmed)
    }
}

impl ViewStateStore {
    // ========================
    // Create
    // ========================

    /// Append an empty folder and return its id
    pub fn create_folder(&mut self, name: &str) -> StoreResult<String> {
        let name = validated_name(name)?;
        let id = self.fresh_id(ItemKind::Folder);
        let folder = Folder::new(id.clone(), name, self.now());
        tracing::debug!(id = %id, name = %folder.name, "Folder created");
        self.folders.push(folder);
        Ok(id)
    }

    /// Append a file whose type is derived from `extension`, and return its id
    pub fn add_file(&mut self, name: &str, size: &str, extension: &str) -> StoreResult<String> {
        let name = validated_name(name)?;
        let file_type = FileType::from_extension(extension);
        let id = self.fresh_id(ItemKind::File);
        let file = File::new(id.clone(), name, file_type, size, self.now());
        tracing::debug!(id = %id, name = %file.name, file_type = %file_type, size = %file.size, "File added");
        self.files.push(file);
        Ok(id)
    }

    /// Add every dropped file, skipping ones without a usable name
    pub fn add_dropped_files(&mut self, dropped: &[DroppedFile]) -> Vec<String> {
        dropped
            .iter()
            .filter_map(|file| {
                let size = format_file_size(file.bytes);
                match self.add_file(&file.name, &size, extension_of(&file.name)) {
                    Ok(id) => Some(id),
                    Err(e) => {
                        tracing::warn!(name = %file.name, error = %e, "Skipping dropped file");
                        None
                    }
                }
            })
            .collect()
    }

    // ========================
    // Rename
    // ========================

    pub fn rename_item(&mut self, id: &str, new_name: &str, kind: ItemKind) -> StoreResult<()> {
        if !self.contains(id, kind) {
            return Err(StoreError::not_found(kind, id));
        }
        let new_name = validated_name(new_name)?.to_string();
        let now = self.now();

        match kind {
            ItemKind::Folder => {
                if let Some(folder) = self.folders.iter_mut().find(|f| f.id == id) {
                    folder.name = new_name;
                    folder.last_modified = now;
                }
            }
            ItemKind::File => {
                if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
                    file.name = new_name;
                    file.last_modified = now;
                }
            }
        }
        tracing::debug!(id, %kind, "Item renamed");
        Ok(())
    }

    // ========================
    // Delete
    // ========================

    /// Remove one entry and drop it from the selection
    pub fn delete_item(&mut self, id: &str, kind: ItemKind) -> StoreResult<()> {
        let position = match kind {
            ItemKind::Folder => self.folders.iter().position(|f| f.id == id),
            ItemKind::File => self.files.iter().position(|f| f.id == id),
        };
        let Some(index) = position else {
            return Err(StoreError::not_found(kind, id));
        };

        match kind {
            ItemKind::Folder => {
                self.folders.remove(index);
            }
            ItemKind::File => {
                self.files.remove(index);
            }
        }
        self.selection.remove(id);
        tracing::debug!(id, %kind, "Item deleted");
        Ok(())
    }

    /// Best-effort batch delete; missing entries are skipped. Returns how many were removed.
    pub fn delete_items(&mut self, items: &[ItemRef]) -> usize {
        let mut deleted = 0;
        for item in items {
            match self.delete_item(&item.id, item.kind) {
                Ok(()) => deleted += 1,
                Err(e) => tracing::debug!(error = %e, "Batch delete skipped entry"),
            }
        }
        deleted
    }

    /// Delete everything selected. Stale selected ids are cleared without error.
    pub fn delete_selected(&mut self) -> usize {
        let items: Vec<ItemRef> = self
            .selection
            .iter()
            .filter_map(|id| {
                self.kind_of(id).map(|kind| ItemRef {
                    id: id.clone(),
                    kind,
                })
            })
            .collect();
        let deleted = self.delete_items(&items);
        self.selection.clear();
        deleted
    }

    // ========================
    // Selection
    // ========================

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Select exactly the currently visible folders and files
    pub fn select_all(&mut self) {
        let visible = self.visible();
        self.selection = visible
            .folders
            .into_iter()
            .map(|f| f.id)
            .chain(visible.files.into_iter().map(|f| f.id))
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ========================
    // Sort / filter / search
    // ========================

    /// Same field flips the order; a new field starts ascending
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.order = self.sort.order.flip();
        } else {
            self.sort = SortSpec::new(field, Default::default());
        }
    }

    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // ========================
    // Navigation
    // ========================

    /// Switch the top-level section, resetting the path to its root and the filter to all
    pub fn set_view(&mut self, view: ViewTag) {
        self.view = view;
        self.filter = FilterSpec::All;
        self.path = match view {
            ViewTag::MyDrive => self.home_path.clone(),
            other => vec![other.section_name().to_string()],
        };
    }

    pub fn navigate_into_folder(&mut self, name: &str) {
        self.view = ViewTag::MyDrive;
        self.path.push(name.to_string());
    }

    pub fn navigate_up(&mut self) {
        if self.path.len() > 1 {
            self.path.pop();
        }
    }

    /// Truncate the path so that `index` is its last segment
    pub fn navigate_to_path_index(&mut self, index: usize) {
        self.path.truncate(index.saturating_add(1));
    }
}
