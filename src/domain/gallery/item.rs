// SPDX-License-Identifier: MPL-2.0
//! A single photo record from the gallery.

/// One photo record.
///
/// Built only by the response decoder and never mutated afterwards. The
/// whole list is dropped when a new page replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    content_id: String,
    title: String,
    image_url: String,
    details: ItemDetails,
}

/// Optional descriptive fields. Each one is either present or absent; the
/// API omits them freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetails {
    pub content_type_id: Option<String>,
    /// Creation timestamp as sent by the API (`YYYYMMDDhhmmss`).
    pub created_time: Option<String>,
    /// Modification timestamp as sent by the API (`YYYYMMDDhhmmss`).
    pub modified_time: Option<String>,
    /// Month the photo was taken (`YYYYMM`).
    pub photography_month: Option<String>,
    pub photography_location: Option<String>,
    pub photographer: Option<String>,
    /// Comma separated search keywords.
    pub search_keyword: Option<String>,
}

impl GalleryItem {
    #[must_use]
    pub fn new(
        content_id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        details: ItemDetails,
    ) -> Self {
        Self {
            content_id: content_id.into(),
            title: title.into(),
            image_url: image_url.into(),
            details,
        }
    }

    /// Unique key of the record.
    #[must_use]
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    /// Search keywords split on commas, trimmed, empty entries dropped.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.details
            .search_keyword
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }
}
