//! Render state - snapshot sent from the store to the UI for rendering

use std::collections::BTreeSet;

use crate::config::Config;
use crate::models::{File, FilterSpec, Folder, SortSpec, ViewMode, ViewTag};

/// Complete state needed by the UI to render.
///
/// A snapshot is an owned copy; changing it has no effect on the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Navigation
    pub view: ViewTag,
    pub path: Vec<String>,
    pub view_mode: ViewMode,

    // Toolbar
    pub sort: SortSpec,
    pub filter: FilterSpec,
    /// Query currently applied to the derived lists
    pub search: String,
    /// Text typed into the search field but not yet applied
    pub pending_search: Option<String>,

    // Derived lists
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
    pub selection: BTreeSet<String>,

    /// Message of the last rejected mutation, cleared by the next successful event
    pub last_error: Option<String>,
}

impl RenderState {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        let config = Config::default();
        RenderState {
            view: config.initial_view,
            path: config.home_path,
            view_mode: config.view_mode,
            sort: SortSpec::default(),
            filter: FilterSpec::All,
            search: String::new(),
            pending_search: None,
            folders: Vec::new(),
            files: Vec::new(),
            selection: BTreeSet::new(),
            last_error: None,
        }
    }
}
