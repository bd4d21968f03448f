//! Content resolution: which raw folders and files a section and path show
//! before search, filter and sort are applied.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::derive::sort_entries;
use crate::models::{Entry, File, Folder, SortField, SortOrder, SortSpec, ViewLabel, ViewTag};

/// A pair of raw lists
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSet {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub files: Vec<File>,
}

/// Supplies fixed children for path segments that are not backed by the store
pub trait ContentSource: Send {
    /// Children shown when `segment` is the last path segment, if any
    fn children(&self, segment: &str) -> Option<&ContentSet>;

    /// Every id this source can show; the store never issues one of these
    fn ids(&self) -> Vec<String>;
}

/// Lookup table keyed by path-segment name
#[derive(Clone, Debug, Default)]
pub struct SyntheticFolders {
    entries: HashMap<String, ContentSet>,
}

impl SyntheticFolders {
    pub fn new(entries: HashMap<String, ContentSet>) -> Self {
        SyntheticFolders { entries }
    }

    pub fn insert(&mut self, segment: impl Into<String>, content: ContentSet) {
        self.entries.insert(segment.into(), content);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentSource for SyntheticFolders {
    fn children(&self, segment: &str) -> Option<&ContentSet> {
        self.entries.get(segment)
    }

    fn ids(&self) -> Vec<String> {
        self.entries
            .values()
            .flat_map(|set| {
                set.folders
                    .iter()
                    .map(|f| f.id.clone())
                    .chain(set.files.iter().map(|f| f.id.clone()))
            })
            .collect()
    }
}

/// Everything needed to resolve the raw content of the current location
pub struct ResolveContext<'a> {
    pub view: ViewTag,
    pub path: &'a [String],
    pub folders: &'a [Folder],
    pub files: &'a [File],
    pub source: &'a dyn ContentSource,
    pub recent_limit: usize,
}

/// Resolve the pre-filter lists for the current section and path.
///
/// The returned lists are copies; the backing collections are never touched.
pub fn resolve_visible_raw(ctx: &ResolveContext<'_>) -> ContentSet {
    match ctx.view {
        ViewTag::Recent => ContentSet {
            folders: Vec::new(),
            files: recent_files(ctx.files, ctx.recent_limit),
        },
        ViewTag::Shared => labelled(ctx, 0..2, 0..6, ViewLabel::Shared),
        ViewTag::Starred => labelled(ctx, 1..3, 2..6, ViewLabel::Starred),
        ViewTag::Trash => labelled(ctx, 3..5, 4..8, ViewLabel::Trashed),
        ViewTag::MyDrive | ViewTag::Settings => {
            let synthetic = ctx
                .path
                .last()
                .and_then(|segment| ctx.source.children(segment));
            match synthetic {
                Some(content) => content.clone(),
                None => ContentSet {
                    folders: ctx.folders.to_vec(),
                    files: ctx.files.to_vec(),
                },
            }
        }
    }
}

/// Most recently uploaded files first, at most `limit` of them
fn recent_files(files: &[File], limit: usize) -> Vec<File> {
    let mut recent = files.to_vec();
    sort_entries(&mut recent, SortSpec::new(SortField::Date, SortOrder::Desc));
    recent.truncate(limit);
    recent
}

fn labelled(
    ctx: &ResolveContext<'_>,
    folders: std::ops::Range<usize>,
    files: std::ops::Range<usize>,
    label: ViewLabel,
) -> ContentSet {
    ContentSet {
        folders: clamped(ctx.folders, folders, label),
        files: clamped(ctx.files, files, label),
    }
}

fn clamped<T: Entry + Clone>(items: &[T], range: std::ops::Range<usize>, label: ViewLabel) -> Vec<T> {
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    items[start..end]
        .iter()
        .cloned()
        .map(|item| item.with_label(label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileType;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::days(n)
    }

    fn fixture() -> (Vec<Folder>, Vec<File>) {
        let folders = (0..6)
            .map(|i| Folder::new(format!("folder-{}", i), format!("Folder {}", i), day(i)))
            .collect();
        let files = (0..10)
            .map(|i| File::new(format!("file-{}", i), format!("File {}.pdf", i), FileType::Pdf, "1 MB", day(i)))
            .collect();
        (folders, files)
    }

    fn ids<T: Entry>(items: &[T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    fn resolve(view: ViewTag, path: &[String], source: &dyn ContentSource) -> ContentSet {
        let (folders, files) = fixture();
        resolve_visible_raw(&ResolveContext {
            view,
            path,
            folders: &folders,
            files: &files,
            source,
            recent_limit: 8,
        })
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recent_is_newest_eight_files() {
        let content = resolve(ViewTag::Recent, &path(&["Recent"]), &SyntheticFolders::default());
        assert!(content.folders.is_empty());
        assert_eq!(
            ids(&content.files),
            (2..10).rev().map(|i| format!("file-{}", i)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_section_subsets_are_labelled_copies() {
        let (folders, files) = fixture();
        let source = SyntheticFolders::default();
        let p = path(&["Trash"]);
        let trash = resolve_visible_raw(&ResolveContext {
            view: ViewTag::Trash,
            path: &p,
            folders: &folders,
            files: &files,
            source: &source,
            recent_limit: 8,
        });

        assert_eq!(ids(&trash.folders), vec!["folder-3", "folder-4"]);
        assert_eq!(ids(&trash.files), vec!["file-4", "file-5", "file-6", "file-7"]);
        assert!(trash.files.iter().all(|f| f.label == Some(ViewLabel::Trashed)));
        assert_eq!(trash.files[0].name, "File 4.pdf");
        assert!(files.iter().all(|f| f.label.is_none()));

        let shared = resolve(ViewTag::Shared, &path(&["Shared"]), &source);
        assert_eq!(ids(&shared.folders), vec!["folder-0", "folder-1"]);
        assert_eq!(shared.files.len(), 6);

        let starred = resolve(ViewTag::Starred, &path(&["Starred"]), &source);
        assert_eq!(ids(&starred.folders), vec!["folder-1", "folder-2"]);
        assert_eq!(ids(&starred.files), vec!["file-2", "file-3", "file-4", "file-5"]);
    }

    #[test]
    fn test_short_collections_are_clamped() {
        let folders = vec![Folder::new("only", "Only", day(0))];
        let source = SyntheticFolders::default();
        let p = path(&["Trash"]);
        let trash = resolve_visible_raw(&ResolveContext {
            view: ViewTag::Trash,
            path: &p,
            folders: &folders,
            files: &[],
            source: &source,
            recent_limit: 8,
        });
        assert!(trash.folders.is_empty());
        assert!(trash.files.is_empty());
    }

    #[test]
    fn test_synthetic_lookup_with_fallback() {
        let mut source = SyntheticFolders::default();
        source.insert(
            "Projects",
            ContentSet {
                folders: vec![Folder::new("subfolder-1", "Frontend", day(0))],
                files: Vec::new(),
            },
        );

        let inside = resolve(ViewTag::MyDrive, &path(&["Drive", "Projects"]), &source);
        assert_eq!(ids(&inside.folders), vec!["subfolder-1"]);
        assert!(inside.files.is_empty());

        let elsewhere = resolve(ViewTag::MyDrive, &path(&["Drive", "Projects", "UI"]), &source);
        assert_eq!(elsewhere.folders.len(), 6);
        assert_eq!(elsewhere.files.len(), 10);
    }
}
