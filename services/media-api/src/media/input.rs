use serde::{Deserialize, Serialize};

use crate::storage::NewMediaAsset;

use super::{
    MediaError, MAX_DESCRIPTION_CHARS, MAX_MIME_TYPE_CHARS, MAX_TAGS_PER_ASSET, MAX_TAG_CHARS,
    MAX_TITLE_CHARS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMediaInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub mime_type: String,
    pub size_bytes: i64,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl CreateMediaInput {
    /// Checks field constraints and normalizes tags.
    pub fn validate(self) -> Result<NewMediaAsset, MediaError> {
        check_length("title", &self.title, 1, MAX_TITLE_CHARS)?;
        if let Some(description) = &self.description {
            check_length("description", description, 0, MAX_DESCRIPTION_CHARS)?;
        }
        check_length("mime_type", &self.mime_type, 1, MAX_MIME_TYPE_CHARS)?;
        if self.size_bytes < 1 {
            return Err(MediaError::invalid(
                "size_bytes",
                "size must be at least 1 byte",
            ));
        }

        let raw_tags = self.tags.unwrap_or_default();
        if raw_tags.len() > MAX_TAGS_PER_ASSET {
            return Err(MediaError::invalid(
                "tags",
                format!("at most {MAX_TAGS_PER_ASSET} tags are allowed"),
            ));
        }
        for tag in &raw_tags {
            check_length("tags", tag, 1, MAX_TAG_CHARS)?;
        }

        Ok(NewMediaAsset {
            title: self.title,
            description: self.description,
            mime_type: self.mime_type,
            size_bytes: self.size_bytes,
            is_public: self.is_public.unwrap_or(false),
            tags: normalize_tags(&raw_tags),
        })
    }
}

/// Trims and lowercases tags, dropping blanks and later duplicates.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

fn check_length(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), MediaError> {
    let len = value.chars().count();
    if len < min {
        return Err(MediaError::invalid(field, format!("{field} is required")));
    }
    if len > max {
        return Err(MediaError::invalid(
            field,
            format!("{field} must be at most {max} characters"),
        ));
    }
    Ok(())
}
