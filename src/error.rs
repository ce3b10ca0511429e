// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error and warning types.
//!
//! Two tiers. [`BuildError`] aborts the run before anything is written: a
//! catalog we cannot parse is history we would otherwise silently drop.
//! [`BuildWarning`] is per-item and recoverable: the item is skipped (or, for a
//! dangling category parent, promoted to a root) and the run carries on.
//!
//! Legacy paths that match nothing are neither. They are an expected outcome
//! for deleted content and never show up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Invalid site manifest: {0}")]
    Manifest(String),
    #[error("Catalog {path} is unreadable or malformed: {message}")]
    Catalog { path: PathBuf, message: String },
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl BuildError {
    pub fn catalog(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        BuildError::Catalog {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<io::Error> for BuildError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => BuildError::NotFound(format!("{x}")),
            _ => BuildError::Io(format!("IOError: {x}")),
        }
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(src: serde_json::Error) -> Self {
        BuildError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<serde_yaml::Error> for BuildError {
    fn from(src: serde_yaml::Error) -> Self {
        BuildError::Serialization(format!("YAML deserialization error: {src}"))
    }
}

impl From<walkdir::Error> for BuildError {
    fn from(src: walkdir::Error) -> Self {
        BuildError::Io(format!("Directory walk failed: {src}"))
    }
}

/// A recoverable, per-item problem. Accumulated into the build report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildWarning {
    #[error("{origin}: no identifier and no title, skipped")]
    MissingIdentifier { origin: String },
    #[error("{origin}: missing or unparseable publish date {value:?}, skipped")]
    InvalidDate { origin: String, value: Option<String> },
    #[error("{origin}: could not be read: {message}")]
    UnreadableDocument { origin: String, message: String },
    #[error("category {source_id} names missing parent {parent_id}, treated as a root")]
    DanglingParent { source_id: String, parent_id: String },
    #[error("category {source_id} is not reachable from any root")]
    UnreachableCategory { source_id: String },
    #[error("category {source_id} is declared more than once, later entry ignored")]
    DuplicateCategory { source_id: String },
    #[error("legacy path {path} is malformed: {reason}")]
    MalformedLegacyPath { path: String, reason: String },
}
