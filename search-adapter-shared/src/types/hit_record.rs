//! Record types returned by an index library for a single hit.
//!
//! Index libraries return lazy hits; resolving a hit yields a `HitRecord`.
//! Every field except `url` is optional and defaults are applied when the
//! record is normalized, not here.

use serde::{Deserialize, Serialize};

/// The full record behind a single search hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HitRecord {
    /// The page URL, relative to the site root.
    #[serde(default)]
    pub url: String,

    /// Page metadata captured at index time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HitMeta>,

    /// Highlighted excerpt around the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Full page body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Metadata attached to a hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HitMeta {
    /// Page title, possibly containing highlight markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Tags as stored by the index library.
///
/// Pagefind stores every meta value as a string, so tags usually arrive as a
/// single comma-separated value. Other libraries emit a proper list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Tags {
    /// Tags already split into a list.
    List(Vec<String>),
    /// Tags joined into one comma-separated string.
    Joined(String),
}

impl Tags {
    /// Flatten into trimmed, non-empty tags.
    pub fn into_vec(self) -> Vec<String> {
        let raw = match self {
            Tags::List(tags) => tags,
            Tags::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };

        raw.into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

impl HitRecord {
    /// Create a record for the given URL with no metadata or body.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(HitMeta::default).title = Some(title.into());
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.meta.get_or_insert_with(HitMeta::default).tags = Some(Tags::List(tags));
        self
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the body content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The title, or an empty string when the record has none.
    pub fn title(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.title.as_deref())
            .unwrap_or("")
    }

    /// The first non-empty of `excerpt` and `content`, or an empty string.
    pub fn body(&self) -> &str {
        [self.excerpt.as_deref(), self.content.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }

    /// The record's tags, empty when absent.
    pub fn tags(&self) -> Vec<String> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.tags.clone())
            .map(Tags::into_vec)
            .unwrap_or_default()
    }
}
