// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Transport-agnostic client interface for the Git Tags API
//!
//! [`TagsClient`] turns tag operations into resource paths and hands them to
//! an [`ApiConnection`]. The REST implementation lives in `gt-rest-client`;
//! `gt-rest-client-mock` provides an in-memory connection for tests.

pub mod connection;
pub mod error;
pub mod repository;
pub mod tags;

pub use connection::ApiConnection;
pub use error::{ClientApiError, ClientApiResult};
pub use repository::RepositoryRef;
pub use tags::{TagsApi, TagsClient};
