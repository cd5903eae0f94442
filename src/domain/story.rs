//! The story record: raw input, normalization, and the mandatory-field gate.
//!
//! A [`StoryDraft`] carries the fields exactly as the collector supplied
//! them. [`StoryDraft::validate`] consumes the draft together with the
//! already-rendered body fragment and produces a normalized [`Story`], or a
//! [`ValidationIssues`] naming the mandatory fields that were empty. The
//! `markdown` flag lives only on the draft: rendering is a one-time
//! transition, and a validated `Story` can no longer be re-rendered.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Link value meaning "no real link provided; point at the page itself".
pub const SELF_REFERENCE: &str = "#";

/// Category applied when the collector left the field blank.
pub const DEFAULT_CATEGORY: &str = "General";

/// Raw story fields as collected, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryDraft {
    pub title: String,
    pub description: String,
    pub author: String,
    pub publisher: String,
    pub category: String,
    pub story_link: String,
    pub author_profile_link: String,
    pub category_link: String,
    pub body: String,
    pub markdown: bool,
}

/// A normalized story that passed the mandatory-field gate.
///
/// Every string field is trimmed; link fields hold either the provided link
/// or [`SELF_REFERENCE`]; `category` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub title: String,
    pub description: String,
    pub author: String,
    pub publisher: String,
    pub category: String,
    pub story_link: String,
    pub author_profile_link: String,
    pub category_link: String,
    pub body: String,
    pub rendered_html: String,
}

/// Mandatory fields found empty after trimming.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("mandatory fields missing: {}", .missing.join(", "))]
pub struct ValidationIssues {
    pub missing: Vec<&'static str>,
}

impl StoryDraft {
    /// Normalize the draft and gate on the mandatory fields.
    ///
    /// `rendered_html` must be the fragment rendered from this draft's
    /// `body`; it is trimmed along with everything else. Normalization is a
    /// fixed point: validating the fields of an already-validated story
    /// changes nothing.
    pub fn validate(self, rendered_html: String) -> Result<Story, ValidationIssues> {
        let story = Story {
            title: trimmed(self.title),
            description: trimmed(self.description),
            author: trimmed(self.author),
            publisher: trimmed(self.publisher),
            category: defaulted(trimmed(self.category), DEFAULT_CATEGORY),
            story_link: normalize_link(trimmed(self.story_link), "story_link"),
            author_profile_link: normalize_link(
                trimmed(self.author_profile_link),
                "author_profile_link",
            ),
            category_link: normalize_link(trimmed(self.category_link), "category_link"),
            body: trimmed(self.body),
            rendered_html: trimmed(rendered_html),
        };

        let mut missing = Vec::new();
        if story.title.is_empty() {
            missing.push("title");
        }
        if story.author.is_empty() {
            missing.push("author");
        }
        if story.publisher.is_empty() {
            missing.push("publisher");
        }
        if story.body.is_empty() {
            missing.push("body");
        }

        if missing.is_empty() {
            Ok(story)
        } else {
            Err(ValidationIssues { missing })
        }
    }
}

impl Story {
    /// Rebuild a draft from the validated fields.
    pub fn redraft(&self) -> StoryDraft {
        StoryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            category: self.category.clone(),
            story_link: self.story_link.clone(),
            author_profile_link: self.author_profile_link.clone(),
            category_link: self.category_link.clone(),
            body: self.body.clone(),
            markdown: false,
        }
    }
}

fn trimmed(value: String) -> String {
    let cut = value.trim();
    if cut.len() == value.len() {
        value
    } else {
        cut.to_string()
    }
}

fn defaulted(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn normalize_link(value: String, field: &'static str) -> String {
    if value.is_empty() {
        return SELF_REFERENCE.to_string();
    }

    if value != SELF_REFERENCE && Url::parse(&value).is_err() {
        // Accepted as provided; the document will carry it verbatim.
        warn!(field, link = %value, "link is not an absolute URL");
    }

    value
}
