// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Per-test log files
//!
//! Every test that uses [`TestLogger`] writes its diagnostics to a unique file
//! under `target/test-logs/<date>/`. A passing test prints one line; a failing
//! test prints the log path and size so the full output can be opened directly.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TestLogError {
    #[error("Failed to create test log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write to test log file: {path}")]
    WriteError { path: PathBuf },

    #[error("Invalid test name: {name}")]
    InvalidTestName { name: String },
}

/// Writes timestamped lines to a test's own log file
pub struct TestLogger {
    log_path: PathBuf,
    writer: BufWriter<File>,
    test_name: String,
    start_time: DateTime<Utc>,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Result<Self, TestLogError> {
        if test_name.is_empty() || test_name.len() > 200 {
            return Err(TestLogError::InvalidTestName {
                name: test_name.to_string(),
            });
        }

        let log_path = create_unique_test_log(test_name)?;
        let file = OpenOptions::new().create(true).write(true).truncate(true).open(&log_path)?;

        let mut logger = Self {
            log_path,
            writer: BufWriter::new(file),
            test_name: test_name.to_string(),
            start_time: Utc::now(),
        };
        writeln!(logger.writer, "=== gt test log: {} ===", logger.test_name)?;
        writeln!(
            logger.writer,
            "Started: {}",
            logger.start_time.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(logger)
    }

    pub fn log(&mut self, message: &str) -> Result<(), TestLogError> {
        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        writeln!(self.writer, "[{}] {}", timestamp, message)
            .and_then(|_| self.writer.flush())
            .map_err(|_| TestLogError::WriteError {
                path: self.log_path.clone(),
            })
    }

    /// Log a serializable value as pretty JSON under `label`
    pub fn log_json<T: serde::Serialize>(
        &mut self,
        label: &str,
        data: &T,
    ) -> Result<(), TestLogError> {
        let json = serde_json::to_string_pretty(data).map_err(|_| TestLogError::WriteError {
            path: self.log_path.clone(),
        })?;
        self.log(&format!("{}: {}", label, json))
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn finish_success(mut self) -> Result<PathBuf, TestLogError> {
        let elapsed = self.elapsed_secs();
        self.log(&format!("Test completed successfully in {:.3}s", elapsed))?;
        println!("✅ {} passed", self.test_name);
        Ok(self.log_path)
    }

    pub fn finish_failure(mut self, error_message: &str) -> Result<PathBuf, TestLogError> {
        let elapsed = self.elapsed_secs();
        self.log(&format!("Test failed after {:.3}s: {}", elapsed, error_message))?;

        match fs::metadata(&self.log_path) {
            Ok(metadata) => println!(
                "❌ {} failed - Log: {} ({} bytes)",
                self.test_name,
                self.log_path.display(),
                metadata.len()
            ),
            Err(_) => println!("❌ {} failed - Log: {}", self.test_name, self.log_path.display()),
        }
        Ok(self.log_path)
    }

    fn elapsed_secs(&self) -> f64 {
        Utc::now().signed_duration_since(self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

/// Unique log path `target/test-logs/<date>/<name>-<time>-<uuid>.log`
pub fn create_unique_test_log(test_name: &str) -> Result<PathBuf, TestLogError> {
    let now = Utc::now();
    let log_dir = find_workspace_root()
        .join("target")
        .join("test-logs")
        .join(now.format("%Y-%m-%d").to_string());
    fs::create_dir_all(&log_dir)?;

    let filename = format!(
        "{}-{}-{}.log",
        sanitize_filename(test_name),
        now.format("%H-%M-%S"),
        Uuid::new_v4()
    );
    Ok(log_dir.join(filename))
}

fn find_workspace_root() -> PathBuf {
    let current_dir = env::current_dir().unwrap_or_else(|_| env::temp_dir());

    for dir in current_dir.ancestors() {
        let manifest = dir.join("Cargo.toml");
        if let Ok(content) = fs::read_to_string(&manifest) {
            if content.contains("[workspace]") {
                return dir.to_path_buf();
            }
        }
    }
    current_dir
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}
