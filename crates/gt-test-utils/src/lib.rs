// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Test utilities shared across the workspace
//!
//! - Each integration test creates its own log file via [`TestLogger`]
//! - Passing tests print a single line; failing tests print the log location
//! - [`logged_assert!`] and [`logged_assert_eq!`] record every check in that log

pub mod logging;
pub mod macros;

pub use logging::{TestLogError, TestLogger, create_unique_test_log};
