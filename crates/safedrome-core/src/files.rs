//! File catalog types.
//!
//! The Open and File Manager pages operate on a static in-memory catalog;
//! there is no real filesystem backing (see the product's mockup scope).

use serde::{Deserialize, Serialize};

/// File type as shown in catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Xlsx,
    Pptx,
    Txt,
    Other,
}

impl FileKind {
    /// Derive the kind from a file name's extension
    pub fn from_name(name: &str) -> Self {
        match name.rsplit('.').next().map(str::to_ascii_lowercase) {
            Some(ext) if ext == "pdf" => FileKind::Pdf,
            Some(ext) if ext == "xlsx" => FileKind::Xlsx,
            Some(ext) if ext == "pptx" => FileKind::Pptx,
            Some(ext) if ext == "txt" => FileKind::Txt,
            _ => FileKind::Other,
        }
    }

    /// Icon shown next to entries of this kind
    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Xlsx => "📊",
            FileKind::Pptx => "📽️",
            FileKind::Txt => "📝",
            FileKind::Other => "📁",
        }
    }

    /// Short type label for table columns
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Xlsx => "xlsx",
            FileKind::Pptx => "pptx",
            FileKind::Txt => "txt",
            FileKind::Other => "other",
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub id: u32,
    pub name: String,
    pub kind: FileKind,
    /// Human-readable size, e.g. "2.5 MB"
    pub size: String,
    /// Last modified date, e.g. "2024-01-15"
    pub modified: String,
}

impl FileEntry {
    pub fn new(id: u32, name: impl Into<String>, size: impl Into<String>, modified: impl Into<String>) -> Self {
        let name = name.into();
        let kind = FileKind::from_name(&name);
        Self {
            id,
            name,
            kind,
            size: size.into(),
            modified: modified.into(),
        }
    }
}

/// The demo catalog shown by the Open and File Manager pages
pub fn sample_files() -> Vec<FileEntry> {
    vec![
        FileEntry::new(1, "document.pdf", "2.5 MB", "2024-01-15"),
        FileEntry::new(2, "spreadsheet.xlsx", "1.8 MB", "2024-01-14"),
        FileEntry::new(3, "presentation.pptx", "5.2 MB", "2024-01-13"),
        FileEntry::new(4, "notes.txt", "15 KB", "2024-01-12"),
    ]
}
