//! Store state - pure data plus derived reads, no I/O

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashSet};

use crate::config::Config;
use crate::content::{resolve_visible_raw, ContentSet, ContentSource, ResolveContext, SyntheticFolders};
use crate::derive::{derive_visible, DeriveParams};
use crate::messages::RenderState;
use crate::models::{File, FilterSpec, Folder, ItemKind, SortSpec, ViewMode, ViewTag};
use crate::seed::Seed;

/// Source of "now" for new and modified entries
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send>;

/// Owner of every piece of view state for one UI session
pub struct ViewStateStore {
    // Backing collections
    pub(crate) folders: Vec<Folder>,
    pub(crate) files: Vec<File>,
    pub(crate) content: Box<dyn ContentSource>,

    // Selection
    pub(crate) selection: BTreeSet<String>,

    // Navigation
    pub(crate) view: ViewTag,
    pub(crate) path: Vec<String>,
    pub(crate) home_path: Vec<String>,
    pub(crate) view_mode: ViewMode,

    // Derivation parameters
    pub(crate) sort: SortSpec,
    pub(crate) filter: FilterSpec,
    pub(crate) search: String,
    pub(crate) recent_limit: usize,

    // Id generation: every id ever handed out or seeded
    pub(crate) issued_ids: HashSet<String>,
    pub(crate) next_id: u64,
    pub(crate) clock: Clock,
}

impl ViewStateStore {
    /// Build a store from a seed with default settings
    pub fn new(seed: Seed) -> Self {
        Self::with_config(seed, &Config::default())
    }

    pub fn with_config(seed: Seed, config: &Config) -> Self {
        let (folders, files, synthetic) = seed.into_parts();
        Self::from_parts(folders, files, Box::new(synthetic), config)
    }

    /// Build a store from an explicit content source
    pub fn from_parts(
        folders: Vec<Folder>,
        files: Vec<File>,
        content: Box<dyn ContentSource>,
        config: &Config,
    ) -> Self {
        let issued_ids = folders
            .iter()
            .map(|f| f.id.clone())
            .chain(files.iter().map(|f| f.id.clone()))
            .chain(content.ids())
            .collect();

        let mut store = ViewStateStore {
            folders,
            files,
            content,
            selection: BTreeSet::new(),
            view: ViewTag::MyDrive,
            path: config.home_path.clone(),
            home_path: config.home_path.clone(),
            view_mode: config.view_mode,
            sort: SortSpec::default(),
            filter: FilterSpec::All,
            search: String::new(),
            recent_limit: config.recent_limit,
            issued_ids,
            next_id: 1,
            clock: Box::new(Utc::now),
        };
        store.set_view(config.initial_view);
        store
    }

    /// Build the store described by a config: seed file or built-in dataset
    pub fn from_config(config: &Config) -> Result<Self> {
        let seed = match &config.seed_path {
            Some(path) => Seed::load(path)?,
            None => Seed::builtin()?,
        };
        tracing::info!(
            folders = seed.folders.len(),
            files = seed.files.len(),
            synthetic = seed.synthetic.len(),
            "Store seeded"
        );
        Ok(Self::with_config(seed, config))
    }

    /// Empty store, mostly useful in tests
    pub fn empty() -> Self {
        Self::from_parts(
            Vec::new(),
            Vec::new(),
            Box::new(SyntheticFolders::default()),
            &Config::default(),
        )
    }

    /// Replace the clock used for timestamps
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Generate an id that has never been used in this session
    pub(crate) fn fresh_id(&mut self, kind: ItemKind) -> String {
        loop {
            let id = format!("{}-{}", kind.as_str(), self.next_id);
            self.next_id += 1;
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }

    // ========================
    // Raw reads
    // ========================

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn contains(&self, id: &str, kind: ItemKind) -> bool {
        match kind {
            ItemKind::Folder => self.folders.iter().any(|f| f.id == id),
            ItemKind::File => self.files.iter().any(|f| f.id == id),
        }
    }

    /// Kind of the backing entry with this id, if any
    pub fn kind_of(&self, id: &str) -> Option<ItemKind> {
        if self.contains(id, ItemKind::Folder) {
            Some(ItemKind::Folder)
        } else if self.contains(id, ItemKind::File) {
            Some(ItemKind::File)
        } else {
            None
        }
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn view(&self) -> ViewTag {
        self.view
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn filter(&self) -> FilterSpec {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    // ========================
    // Derived reads
    // ========================

    /// Raw lists for the current section and path, before search/filter/sort
    pub fn resolve_visible_raw(&self) -> ContentSet {
        resolve_visible_raw(&ResolveContext {
            view: self.view,
            path: &self.path,
            folders: &self.folders,
            files: &self.files,
            source: self.content.as_ref(),
            recent_limit: self.recent_limit,
        })
    }

    fn derive_params(&self) -> DeriveParams<'_> {
        DeriveParams {
            search: &self.search,
            filter: self.filter,
            sort: self.sort,
        }
    }

    /// Visible folders and files, computed from a single resolution
    pub fn visible(&self) -> ContentSet {
        let raw = self.resolve_visible_raw();
        let params = self.derive_params();
        ContentSet {
            folders: derive_visible(&raw.folders, &params),
            files: derive_visible(&raw.files, &params),
        }
    }

    pub fn visible_folders(&self) -> Vec<Folder> {
        derive_visible(&self.resolve_visible_raw().folders, &self.derive_params())
    }

    pub fn visible_files(&self) -> Vec<File> {
        derive_visible(&self.resolve_visible_raw().files, &self.derive_params())
    }

    /// Convert state to RenderState for the UI
    pub fn to_render_state(&self) -> RenderState {
        let visible = self.visible();
        RenderState {
            view: self.view,
            path: self.path.clone(),
            view_mode: self.view_mode,
            sort: self.sort,
            filter: self.filter,
            search: self.search.clone(),
            pending_search: None,
            folders: visible.folders,
            files: visible.files,
            selection: self.selection.clone(),
            last_error: None,
        }
    }
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileType, SortField, SortOrder};

    #[test]
    fn test_builtin_store_opens_at_home() {
        let store = ViewStateStore::from_config(&Config::default()).unwrap();
        assert_eq!(store.path(), ["Drive", "Projects", "UI"]);
        assert_eq!(store.view(), ViewTag::MyDrive);
        assert_eq!(store.visible_folders().len(), 6);
        assert_eq!(store.visible_files().len(), 10);
        assert_eq!(store.sort(), SortSpec::new(SortField::Name, SortOrder::Asc));
    }

    #[test]
    fn test_fresh_ids_skip_seeded_ids() {
        let now = Utc::now();
        let mut store = ViewStateStore::from_parts(
            vec![Folder::new("folder-1", "Seeded", now)],
            vec![File::new("file-2", "a.pdf", FileType::Pdf, "1 KB", now)],
            Box::new(SyntheticFolders::default()),
            &Config::default(),
        );

        assert_eq!(store.fresh_id(ItemKind::Folder), "folder-2");
        assert_eq!(store.fresh_id(ItemKind::File), "file-3");
        assert_eq!(store.fresh_id(ItemKind::File), "file-4");
    }

    #[test]
    fn test_fresh_ids_skip_synthetic_ids() {
        let now = Utc::now();
        let mut inbox = SyntheticFolders::default();
        inbox.insert(
            "Inbox",
            ContentSet {
                folders: vec![Folder::new("folder-1", "Scans", now)],
                files: vec![File::new("file-1", "scan.pdf", FileType::Pdf, "1 KB", now)],
            },
        );
        let mut store =
            ViewStateStore::from_parts(Vec::new(), Vec::new(), Box::new(inbox), &Config::default());

        let id = store.add_file("real.pdf", "2 KB", "pdf").unwrap();
        assert_eq!(id, "file-2");
        assert_eq!(store.fresh_id(ItemKind::Folder), "folder-3");
    }

    #[test]
    fn test_initial_view_from_config() {
        let config = Config {
            initial_view: ViewTag::Recent,
            ..Config::default()
        };
        let store = ViewStateStore::with_config(Seed::builtin().unwrap(), &config);
        assert_eq!(store.view(), ViewTag::Recent);
        assert_eq!(store.path(), ["Recent"]);
        assert!(store.visible_folders().is_empty());
        assert_eq!(store.visible_files().len(), 8);
    }

    #[test]
    fn test_render_state_is_a_snapshot() {
        let store = ViewStateStore::new(Seed::builtin().unwrap());
        let mut snapshot = store.to_render_state();
        snapshot.folders.clear();
        snapshot.selection.insert(String::from("folder-1"));

        assert_eq!(store.visible_folders().len(), 6);
        assert!(store.selection().is_empty());
    }
}
