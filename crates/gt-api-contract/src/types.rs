//! API contract types for the Git Tags REST resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Kind of Git object a tag points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaggedType {
    #[default]
    Commit,
    Blob,
    Tree,
    Tag,
}

impl std::fmt::Display for TaggedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaggedType::Commit => write!(f, "commit"),
            TaggedType::Blob => write!(f, "blob"),
            TaggedType::Tree => write!(f, "tree"),
            TaggedType::Tag => write!(f, "tag"),
        }
    }
}

impl std::str::FromStr for TaggedType {
    type Err = crate::ApiContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commit" => Ok(TaggedType::Commit),
            "blob" => Ok(TaggedType::Blob),
            "tree" => Ok(TaggedType::Tree),
            "tag" => Ok(TaggedType::Tag),
            _ => Err(crate::ApiContractError::InvalidTaggedType(s.to_string())),
        }
    }
}

/// Author identity attached to a tag object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Committer {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "Tagger email must be a valid address"))]
    pub email: String,
    pub date: DateTime<Utc>,
}

/// The object a tag references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagObject {
    #[serde(rename = "type")]
    pub object_type: TaggedType,
    pub sha: String,
    #[serde(default)]
    pub url: String,
}

/// Signature verification details reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
}

/// Annotated tag object as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitTag {
    #[serde(default)]
    pub node_id: String,
    #[serde(default)]
    pub url: String,
    pub sha: String,
    /// Tag label, e.g. `v1.0`
    pub tag: String,
    #[serde(default)]
    pub message: String,
    pub tagger: Committer,
    pub object: TagObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

/// Payload for creating a tag object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewTag {
    #[validate(custom(function = "not_blank"))]
    pub tag: String,
    #[serde(default)]
    pub message: String,
    /// SHA of the object being tagged
    #[validate(custom(function = "not_blank"))]
    pub object: String,
    #[serde(rename = "type")]
    pub object_type: TaggedType,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub tagger: Option<Committer>,
}

/// Rejects empty and whitespace-only strings
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be empty or whitespace".into());
        return Err(error);
    }
    Ok(())
}

impl NewTag {
    /// Tag pointing at a commit with no message and no explicit tagger
    pub fn for_commit(tag: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            message: String::new(),
            object: object.into(),
            object_type: TaggedType::Commit,
            tagger: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_tagger(mut self, tagger: Committer) -> Self {
        self.tagger = Some(tagger);
        self
    }
}
