use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::EMPTY_FOLDER_SIZE;
use crate::error::StoreError;

/// File category derived from the extension at creation time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Doc,
    Excel,
    Ppt,
    Image,
    Video,
    Audio,
    Zip,
    Figma,
    Ai,
    #[default]
    File,
}

impl FileType {
    pub const ALL: [FileType; 11] = [
        FileType::Pdf,
        FileType::Doc,
        FileType::Excel,
        FileType::Ppt,
        FileType::Image,
        FileType::Video,
        FileType::Audio,
        FileType::Zip,
        FileType::Figma,
        FileType::Ai,
        FileType::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Excel => "excel",
            FileType::Ppt => "ppt",
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Audio => "audio",
            FileType::Zip => "zip",
            FileType::Figma => "figma",
            FileType::Ai => "ai",
            FileType::File => "file",
        }
    }

    /// Map an extension (with or without the leading dot) to its type.
    /// Unknown extensions map to [`FileType::File`].
    pub fn from_extension(extension: &str) -> FileType {
        let ext = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => FileType::Pdf,
            "doc" | "docx" => FileType::Doc,
            "xls" | "xlsx" => FileType::Excel,
            "ppt" | "pptx" => FileType::Ppt,
            "jpg" | "jpeg" | "png" | "gif" => FileType::Image,
            "mp4" | "mov" => FileType::Video,
            "mp3" | "wav" => FileType::Audio,
            "zip" | "rar" => FileType::Zip,
            "fig" => FileType::Figma,
            "ai" => FileType::Ai,
            _ => FileType::File,
        }
    }

    pub fn from_file_name(name: &str) -> FileType {
        FileType::from_extension(extension_of(name))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StoreError::Validation(format!("unknown file type: {}", s)))
    }
}

/// Text after the last `.` of a file name, or the whole name when it has none.
pub fn extension_of(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Which collection an id lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    File,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Folder => "folder",
            ItemKind::File => "file",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to one entry, used by batch operations
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub id: String,
    pub kind: ItemKind,
}

impl ItemRef {
    pub fn folder(id: impl Into<String>) -> Self {
        ItemRef {
            id: id.into(),
            kind: ItemKind::Folder,
        }
    }

    pub fn file(id: impl Into<String>) -> Self {
        ItemRef {
            id: id.into(),
            kind: ItemKind::File,
        }
    }
}

/// Marker attached to entries shown through the Shared, Starred and Trash sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewLabel {
    Shared,
    Starred,
    Trashed,
}

/// Behaviour shared by folders and files
pub trait Entry {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn last_modified(&self) -> DateTime<Utc>;
    fn size_label(&self) -> &str;
    fn kind(&self) -> ItemKind;

    /// Timestamp used by the `date` sort key
    fn sort_date(&self) -> DateTime<Utc> {
        self.last_modified()
    }

    /// Key used by the `type` sort, `None` when the entry has no type
    fn type_key(&self) -> Option<&'static str> {
        None
    }

    fn passes_filter(&self, filter: &FilterSpec) -> bool;

    fn with_label(self, label: ViewLabel) -> Self
    where
        Self: Sized;
}

fn default_folder_size() -> String {
    String::from(EMPTY_FOLDER_SIZE)
}

/// A folder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub last_modified: DateTime<Utc>,
    #[serde(default, alias = "items")]
    pub item_count: u32,
    #[serde(default = "default_folder_size")]
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<ViewLabel>,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Folder {
            id: id.into(),
            name: name.into(),
            last_modified: now,
            item_count: 0,
            size: default_folder_size(),
            color: None,
            label: None,
        }
    }
}

impl Entry for Folder {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    fn size_label(&self) -> &str {
        &self.size
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Folder
    }

    fn passes_filter(&self, filter: &FilterSpec) -> bool {
        matches!(filter, FilterSpec::All | FilterSpec::Folders)
    }

    fn with_label(mut self, label: ViewLabel) -> Self {
        self.label = Some(label);
        self
    }
}

/// A file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub file_type: FileType,
    pub size: String,
    /// Set once at creation; seed entries may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<DateTime<Utc>>,
    pub last_modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<ViewLabel>,
}

impl File {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        file_type: FileType,
        size: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        File {
            id: id.into(),
            name: name.into(),
            file_type,
            size: size.into(),
            uploaded: Some(now),
            last_modified: now,
            label: None,
        }
    }
}

impl Entry for File {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    fn size_label(&self) -> &str {
        &self.size
    }

    fn kind(&self) -> ItemKind {
        ItemKind::File
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.uploaded.unwrap_or(self.last_modified)
    }

    fn type_key(&self) -> Option<&'static str> {
        Some(self.file_type.as_str())
    }

    fn passes_filter(&self, filter: &FilterSpec) -> bool {
        match filter {
            FilterSpec::All | FilterSpec::Files => true,
            FilterSpec::Folders => false,
            FilterSpec::Type(t) => self.file_type == *t,
        }
    }

    fn with_label(mut self, label: ViewLabel) -> Self {
        self.label = Some(label);
        self
    }
}

/// A file handed over by the drag-and-drop adapter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub bytes: u64,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, bytes: u64) -> Self {
        DroppedFile {
            name: name.into(),
            bytes,
        }
    }
}

/// Grid or list layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Top-level section selected in the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewTag {
    #[default]
    MyDrive,
    Recent,
    Shared,
    Starred,
    Trash,
    Settings,
}

impl ViewTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewTag::MyDrive => "my-drive",
            ViewTag::Recent => "recent",
            ViewTag::Shared => "shared",
            ViewTag::Starred => "starred",
            ViewTag::Trash => "trash",
            ViewTag::Settings => "settings",
        }
    }

    /// Breadcrumb root shown when the section is opened
    pub fn section_name(&self) -> &'static str {
        match self {
            ViewTag::MyDrive => "Drive",
            ViewTag::Recent => "Recent",
            ViewTag::Shared => "Shared",
            ViewTag::Starred => "Starred",
            ViewTag::Trash => "Trash",
            ViewTag::Settings => "Settings",
        }
    }
}

impl fmt::Display for ViewTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Date,
    Size,
    Type,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Date => "date",
            SortField::Size => "size",
            SortField::Type => "type",
        }
    }
}

impl FromStr for SortField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "date" => Ok(SortField::Date),
            "size" => Ok(SortField::Size),
            "type" => Ok(SortField::Type),
            other => Err(StoreError::Validation(format!("unknown sort field: {}", other))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flip(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        SortSpec { field, order }
    }
}

/// Which entries survive the type filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterSpec {
    #[default]
    All,
    Folders,
    Files,
    Type(FileType),
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::All => f.write_str("all"),
            FilterSpec::Folders => f.write_str("folders"),
            FilterSpec::Files => f.write_str("files"),
            FilterSpec::Type(t) => f.write_str(t.as_str()),
        }
    }
}

impl FromStr for FilterSpec {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterSpec::All),
            "folders" => Ok(FilterSpec::Folders),
            "files" => Ok(FilterSpec::Files),
            other => other.parse::<FileType>().map(FilterSpec::Type),
        }
    }
}
