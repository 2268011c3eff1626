//! Media gallery state.
//!
//! The gallery lives entirely in the browser session: items start from a small
//! seed, uploads are acknowledged but never sent anywhere, and deletes only
//! touch the local list.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::list::{self, CategoryFilter, ListConfig, ListQuery, ListView, Listable, SortOrder};
use crate::net::types::{MediaItem, MediaKind};

pub const GALLERY_LIST: ListConfig = ListConfig { page_size: None };

pub const MEDIA_TABS: [(&str, CategoryFilter<MediaKind>); 3] = [
    ("All", CategoryFilter::All),
    ("Images", CategoryFilter::Only(MediaKind::Image)),
    ("Videos", CategoryFilter::Only(MediaKind::Video)),
];

pub const SORT_OPTIONS: [(&str, SortOrder); 2] = [("Newest", SortOrder::Descending), ("Oldest", SortOrder::Ascending)];

impl Listable for MediaItem {
    type Category = MediaKind;

    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    fn category(&self) -> MediaKind {
        self.kind
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.uploaded_at)
    }
}

/// A locally selected file waiting for the simulated upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub mime: String,
    pub kind: MediaKind,
    /// Object URL for the preview tile.
    pub preview_url: String,
}

#[derive(Clone, Debug)]
pub struct GalleryState {
    pub items: Vec<MediaItem>,
    pub query: ListQuery<MediaKind>,
    pub selection: Vec<PendingFile>,
    pub notice: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            items: seed_media(),
            query: ListQuery::sorted(SortOrder::Descending),
            selection: Vec::new(),
            notice: None,
        }
    }
}

fn seed_media() -> Vec<MediaItem> {
    vec![
        MediaItem { id: 1, url: "/sample1.jpg".to_owned(), kind: MediaKind::Image, uploaded_at: "2025-04-10".to_owned() },
        MediaItem { id: 2, url: "/sample2.mp4".to_owned(), kind: MediaKind::Video, uploaded_at: "2025-04-09".to_owned() },
    ]
}

impl GalleryState {
    pub fn visible(&self) -> ListView<MediaItem> {
        list::derive(&self.items, &self.query, GALLERY_LIST)
    }

    /// Replace the selection with the image/video files among `files`
    /// (`(name, mime, preview_url)`). Returns the preview URLs that were not
    /// kept so the caller can revoke them.
    pub fn select_files(&mut self, files: Vec<(String, String, String)>) -> Vec<String> {
        let mut rejected = self.clear_selection();
        for (name, mime, preview_url) in files {
            match MediaKind::from_mime(&mime) {
                Some(kind) => self.selection.push(PendingFile { name, mime, kind, preview_url }),
                None => rejected.push(preview_url),
            }
        }
        self.notice = None;
        rejected
    }

    /// Drop the selection. Returns its preview URLs for revocation.
    pub fn clear_selection(&mut self) -> Vec<String> {
        self.selection.drain(..).map(|f| f.preview_url).collect()
    }

    /// Acknowledge the selected files without sending them anywhere.
    /// Returns the released preview URLs; does nothing when nothing is selected.
    pub fn simulate_upload(&mut self) -> Vec<String> {
        let count = self.selection.len();
        if count == 0 {
            return Vec::new();
        }
        self.notice = Some(upload_notice(count));
        self.clear_selection()
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

pub fn upload_notice(count: usize) -> String {
    if count == 1 { "1 file ready for upload".to_owned() } else { format!("{count} files ready for upload") }
}
