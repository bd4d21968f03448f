//! UI events - messages from the UI layer to the store actor

use crate::models::{DroppedFile, FilterSpec, ItemKind, ItemRef, SortField, ViewMode, ViewTag};

/// Events generated by user interaction in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Sidebar and breadcrumb navigation
    SetView(ViewTag),
    NavigateInto(String),
    NavigateUp,
    NavigateToIndex(usize),

    // Toolbar
    SetViewMode(ViewMode),
    SetSort(SortField),
    SetFilter(FilterSpec),
    /// Keystroke-level search text, debounced before it reaches the store
    SearchInput(String),
    /// Search applied immediately (e.g. the clear button)
    SetSearch(String),

    // Modals
    CreateFolder(String),
    AddFile {
        name: String,
        size: String,
        extension: String,
    },
    Rename {
        id: String,
        new_name: String,
        kind: ItemKind,
    },
    Delete {
        id: String,
        kind: ItemKind,
    },
    DeleteMany(Vec<ItemRef>),
    DeleteSelected,

    // Drag and drop
    FilesDropped(Vec<DroppedFile>),

    // Selection
    ToggleSelection(String),
    SelectAll,
    ClearSelection,

    // System
    Quit,
}

impl UiEvent {
    /// Whether handling this event may change the backing collections
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            UiEvent::CreateFolder(_)
                | UiEvent::AddFile { .. }
                | UiEvent::Rename { .. }
                | UiEvent::Delete { .. }
                | UiEvent::DeleteMany(_)
                | UiEvent::DeleteSelected
                | UiEvent::FilesDropped(_)
        )
    }
}
