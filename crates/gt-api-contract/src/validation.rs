// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Validation helpers for API contract types

use crate::error::ApiContractError;
use crate::types::*;
use validator::Validate;

/// Validate a tag creation payload before it is sent
pub fn validate_new_tag(new_tag: &NewTag) -> Result<(), ApiContractError> {
    new_tag.validate()?;
    Ok(())
}

/// Names of the fields that failed validation, sorted for stable messages
pub fn invalid_fields(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> =
        errors.errors().keys().map(|field| field.to_string()).collect();
    fields.sort();
    fields
}
