//! # CloudDrive
//!
//! View-state and derived-data engine for the CloudDrive file manager UI.
//!
//! ## Features
//! - Folder and file collections seeded from a YAML or JSON fixture
//! - Sections: My Drive, Recent, Shared, Starred, Trash, Settings
//! - Breadcrumb navigation with synthetic per-folder content
//! - Search, type filter and stable sort by name, date, size or type
//! - Selection, create, rename, delete and drag-and-drop add
//! - Debounced search input
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (any renderer) - sends [`UiEvent`]s, renders [`RenderState`]s
//! - App Layer - [`StoreActor`] owning the [`ViewStateStore`]
//! - Derivation - pure functions over the store's raw collections

pub mod config;
pub mod constants;
pub mod content;
pub mod derive;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;
pub mod seed;
pub mod size;
pub mod app;

// Re-export commonly used types
pub use models::{
    DroppedFile, Entry, File, FileType, FilterSpec, Folder, ItemKind, ItemRef, SortField,
    SortOrder, SortSpec, ViewLabel, ViewMode, ViewTag,
};
pub use error::{StoreError, StoreResult};
pub use config::Config;
pub use content::{ContentSet, ContentSource, SyntheticFolders};
pub use seed::Seed;
pub use size::{format_file_size, parse_size};
pub use messages::{UiEvent, RenderState};
pub use app::{start_session, Session, StoreActor, ViewStateStore};
