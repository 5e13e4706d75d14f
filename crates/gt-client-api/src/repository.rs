// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Repository addressing and resource path construction

use crate::error::{ClientApiError, ClientApiResult};

/// Identifies the repository an operation targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepositoryRef {
    /// Addressed by owner login and repository name
    Name { owner: String, name: String },
    /// Addressed by the stable numeric repository id
    Id(u64),
}

impl RepositoryRef {
    pub fn by_name(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Name {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn by_id(repository_id: u64) -> Self {
        Self::Id(repository_id)
    }

    /// Check the addressing arguments without touching the network
    pub fn validate(&self) -> ClientApiResult<()> {
        match self {
            Self::Name { owner, name } => {
                require_segment("owner", owner)?;
                require_segment("name", name)
            }
            Self::Id(0) => Err(ClientApiError::argument(
                "repository_id",
                "must be a positive integer",
            )),
            Self::Id(_) => Ok(()),
        }
    }

    /// Base path of the repository resource, e.g. `/repos/octokit/octokit.net`
    pub fn base_path(&self) -> String {
        match self {
            Self::Name { owner, name } => format!(
                "/repos/{}/{}",
                urlencoding::encode(owner),
                urlencoding::encode(name)
            ),
            Self::Id(id) => format!("/repositories/{}", id),
        }
    }

    /// Collection path for tag objects of this repository
    pub fn tags_path(&self) -> String {
        format!("{}/git/tags", self.base_path())
    }

    /// Path of a single tag object
    pub fn tag_path(&self, reference: &str) -> String {
        format!("{}/{}", self.tags_path(), urlencoding::encode(reference))
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name { owner, name } => write!(f, "{}/{}", owner, name),
            Self::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl std::str::FromStr for RepositoryRef {
    type Err = ClientApiError;

    /// Accepts `owner/name` or a bare numeric id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u64>() {
            let repo = Self::Id(id);
            repo.validate()?;
            return Ok(repo);
        }

        match s.split_once('/') {
            Some((owner, name)) if !name.contains('/') => {
                let repo = Self::by_name(owner, name);
                repo.validate()?;
                Ok(repo)
            }
            _ => Err(ClientApiError::argument(
                "repository",
                format!("expected 'owner/name' or a numeric id, got '{}'", s),
            )),
        }
    }
}

/// A single path segment: non-empty and never `.` or `..`, which URL
/// normalization would collapse into a different resource path
pub(crate) fn require_segment(argument: &'static str, value: &str) -> ClientApiResult<()> {
    if value.trim().is_empty() {
        return Err(ClientApiError::argument(argument, "must not be empty"));
    }
    if matches!(value, "." | "..") {
        return Err(ClientApiError::argument(argument, "must not be '.' or '..'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_paths() {
        let repo = RepositoryRef::by_name("octokit", "octokit.net");
        assert_eq!(repo.tags_path(), "/repos/octokit/octokit.net/git/tags");
        assert_eq!(
            repo.tag_path("abc123"),
            "/repos/octokit/octokit.net/git/tags/abc123"
        );
    }

    #[test]
    fn test_id_paths() {
        let repo = RepositoryRef::by_id(12345);
        assert_eq!(repo.tags_path(), "/repositories/12345/git/tags");
        assert_eq!(repo.tag_path("abc123"), "/repositories/12345/git/tags/abc123");
    }

    #[test]
    fn test_segments_are_encoded() {
        let repo = RepositoryRef::by_name("own er", "na/me");
        assert_eq!(repo.tag_path("a?b"), "/repos/own%20er/na%2Fme/git/tags/a%3Fb");
    }

    #[test]
    fn test_validate_rejects_empty_and_zero() {
        assert!(RepositoryRef::by_name("", "x").validate().is_err());
        assert!(RepositoryRef::by_name("x", "  ").validate().is_err());
        assert!(RepositoryRef::by_id(0).validate().is_err());
        assert!(RepositoryRef::by_id(1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dot_segments() {
        for (owner, name) in [("..", "admin"), ("octokit", "."), (".", "x"), ("x", "..")] {
            assert!(matches!(
                RepositoryRef::by_name(owner, name).validate(),
                Err(ClientApiError::ArgumentInvalid { .. })
            ));
        }
        assert!(RepositoryRef::by_name("octokit", "octokit.net").validate().is_ok());
        assert!(RepositoryRef::by_name("octokit", "..hidden").validate().is_ok());
    }

    #[test]
    fn test_parse_repository_ref() {
        assert_eq!(
            "octokit/octokit.net".parse::<RepositoryRef>().unwrap(),
            RepositoryRef::by_name("octokit", "octokit.net")
        );
        assert_eq!("12345".parse::<RepositoryRef>().unwrap(), RepositoryRef::by_id(12345));
        assert!("octokit".parse::<RepositoryRef>().is_err());
        assert!("a/b/c".parse::<RepositoryRef>().is_err());
        assert!("/name".parse::<RepositoryRef>().is_err());
        assert!("0".parse::<RepositoryRef>().is_err());
    }
}
