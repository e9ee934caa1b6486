//! Durable snapshot encoding.
//!
//! Snapshots are stored as a self-describing JSON envelope:
//!
//! ```json
//! { "format": "api-compat-snapshot", "schema_version": 1, "snapshot": { ... } }
//! ```
//!
//! Decoding checks the format marker and schema version before touching the
//! body, so a foreign or future file is reported as unreadable rather than
//! being misread. Round-tripping a [`Snapshot`] is lossless.

use crate::error::{ApiCompatError, DecodeErrorKind, ReportErrorKind, Result};
use crate::model::Snapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Format marker written into every envelope.
pub const FORMAT_MARKER: &str = "api-compat-snapshot";

/// Current envelope schema version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    format: &'a str,
    schema_version: u32,
    snapshot: &'a Snapshot,
}

#[derive(Deserialize)]
struct Header {
    format: Option<String>,
    schema_version: Option<u32>,
    snapshot: Option<serde_json::Value>,
}

/// Encode a snapshot into its envelope.
pub fn encode(snapshot: &Snapshot) -> Result<String> {
    let envelope = EnvelopeRef {
        format: FORMAT_MARKER,
        schema_version: SCHEMA_VERSION,
        snapshot,
    };
    serde_json::to_string_pretty(&envelope).map_err(|e| {
        ApiCompatError::report(
            "encoding snapshot",
            ReportErrorKind::JsonSerializationError(e.to_string()),
        )
    })
}

/// Decode an envelope produced by [`encode`].
pub fn decode(data: &str) -> Result<Snapshot> {
    let header: Header = serde_json::from_str(data).map_err(|e| {
        ApiCompatError::unreadable("parsing envelope", DecodeErrorKind::InvalidJson(e.to_string()))
    })?;

    let format = header.format.unwrap_or_default();
    if format != FORMAT_MARKER {
        return Err(ApiCompatError::unreadable(
            "checking format marker",
            DecodeErrorKind::WrongFormat(format),
        ));
    }

    match header.schema_version {
        Some(SCHEMA_VERSION) => {}
        found => {
            return Err(ApiCompatError::unreadable(
                "checking schema version",
                DecodeErrorKind::UnsupportedSchema {
                    found: found.unwrap_or(0),
                    supported: SCHEMA_VERSION,
                },
            ))
        }
    }

    let body = header.snapshot.ok_or_else(|| {
        ApiCompatError::unreadable(
            "reading snapshot body",
            DecodeErrorKind::InvalidJson("missing field `snapshot`".to_string()),
        )
    })?;
    serde_json::from_value(body).map_err(|e| {
        ApiCompatError::unreadable("decoding snapshot body", DecodeErrorKind::InvalidJson(e.to_string()))
    })
}

/// Load a snapshot file.
///
/// A missing file is an IO error; a present but undecodable one is
/// [`ApiCompatError::SnapshotUnreadable`].
pub fn load(path: &Path) -> Result<Snapshot> {
    let data = fs::read_to_string(path).map_err(|e| ApiCompatError::io(path, e))?;
    let snapshot = decode(&data).map_err(|e| e.at_path(path))?;
    tracing::debug!(
        "Loaded snapshot {} ({} types) from {}",
        snapshot.version,
        snapshot.type_count(),
        path.display()
    );
    Ok(snapshot)
}

/// Load a snapshot file if it exists.
pub fn load_optional(path: &Path) -> Result<Option<Snapshot>> {
    if path.exists() {
        load(path).map(Some)
    } else {
        tracing::debug!("No snapshot at {}", path.display());
        Ok(None)
    }
}

/// Write a snapshot file, replacing any previous one.
///
/// The envelope is written to a sibling temporary file first and renamed into
/// place, so readers never observe a half-written snapshot.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let data = encode(snapshot)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ApiCompatError::io(parent, e))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));
    fs::write(&tmp, data).map_err(|e| ApiCompatError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ApiCompatError::io(path, e));
    }

    tracing::debug!("Saved snapshot {} to {}", snapshot.version, path.display());
    Ok(())
}
