// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Client for the Git Tags API
//!
//! See <https://docs.github.com/rest/git/tags> for the remote contract.

use std::sync::Arc;

use async_trait::async_trait;
use gt_api_contract::validation::{invalid_fields, validate_new_tag};
use gt_api_contract::{ApiContractError, GitTag, NewTag};

use crate::connection::ApiConnection;
use crate::error::{ClientApiError, ClientApiResult};
use crate::repository::{RepositoryRef, require_segment};

/// Tag object operations, addressed through a [`RepositoryRef`]
#[async_trait]
pub trait TagsApi: Send + Sync {
    /// Get a tag object by its SHA reference
    async fn get(&self, repository: &RepositoryRef, reference: &str) -> ClientApiResult<GitTag>;

    /// Create a tag object; the returned tag carries the service-assigned SHA
    async fn create(&self, repository: &RepositoryRef, new_tag: &NewTag)
    -> ClientApiResult<GitTag>;
}

/// Stateless tags client wrapping a shared connection
///
/// Cloning is cheap and every clone can be used from any task. Each call
/// performs exactly one request; dropping the returned future cancels it.
#[derive(Debug)]
pub struct TagsClient<C> {
    connection: Arc<C>,
}

impl<C> Clone for TagsClient<C> {
    fn clone(&self) -> Self {
        Self {
            connection: Arc::clone(&self.connection),
        }
    }
}

impl<C: ApiConnection> TagsClient<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// `GET /repos/{owner}/{name}/git/tags/{reference}`
    pub async fn get_by_name(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
    ) -> ClientApiResult<GitTag> {
        self.get(&RepositoryRef::by_name(owner, name), reference).await
    }

    /// `GET /repositories/{repository_id}/git/tags/{reference}`
    pub async fn get_by_id(&self, repository_id: u64, reference: &str) -> ClientApiResult<GitTag> {
        self.get(&RepositoryRef::by_id(repository_id), reference).await
    }

    /// `POST /repos/{owner}/{name}/git/tags`
    pub async fn create_by_name(
        &self,
        owner: &str,
        name: &str,
        new_tag: &NewTag,
    ) -> ClientApiResult<GitTag> {
        self.create(&RepositoryRef::by_name(owner, name), new_tag).await
    }

    /// `POST /repositories/{repository_id}/git/tags`
    pub async fn create_by_id(
        &self,
        repository_id: u64,
        new_tag: &NewTag,
    ) -> ClientApiResult<GitTag> {
        self.create(&RepositoryRef::by_id(repository_id), new_tag).await
    }
}

#[async_trait]
impl<C: ApiConnection> TagsApi for TagsClient<C> {
    async fn get(&self, repository: &RepositoryRef, reference: &str) -> ClientApiResult<GitTag> {
        repository.validate()?;
        require_segment("reference", reference)?;

        let path = repository.tag_path(reference);
        tracing::debug!(%repository, reference, %path, "getting tag object");
        self.connection.get(&path).await
    }

    async fn create(
        &self,
        repository: &RepositoryRef,
        new_tag: &NewTag,
    ) -> ClientApiResult<GitTag> {
        repository.validate()?;
        validate_new_tag(new_tag).map_err(to_argument_error)?;

        let path = repository.tags_path();
        tracing::debug!(%repository, tag = %new_tag.tag, object = %new_tag.object, %path, "creating tag object");
        self.connection.post(&path, new_tag).await
    }
}

fn to_argument_error(err: ApiContractError) -> ClientApiError {
    let reason = match &err {
        ApiContractError::Validation(errors) => {
            format!("invalid fields: {}", invalid_fields(errors).join(", "))
        }
        other => other.to_string(),
    };
    ClientApiError::argument("new_tag", reason)
}
