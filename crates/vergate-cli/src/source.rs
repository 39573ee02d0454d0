//! Where the candidate and reference version strings come from.
//!
//! Both sides are read from a Cargo manifest: the candidate from the working
//! copy, the reference either from the same manifest at a git revision or
//! from another manifest file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use vergate_core::emit_source_read;

use crate::git;

/// Failures to obtain a version string. Distinct from a failing gate.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not a valid manifest: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{origin} has no package.version or workspace.package.version")]
    MissingVersion { origin: String },

    #[error("invalid manifest path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("git error: {0}")]
    Git(String),
}

// ---------------------------------------------------------------------------
// Manifest model
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>,
    workspace: Option<Workspace>,
}

#[derive(Debug, Deserialize)]
struct Package {
    version: Option<VersionField>,
}

/// `version = "1.2.3"` or `version.workspace = true`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionField {
    Literal(String),
    Inherited {
        #[allow(dead_code)]
        workspace: bool,
    },
}

#[derive(Debug, Deserialize)]
struct Workspace {
    package: Option<WorkspacePackage>,
}

#[derive(Debug, Deserialize)]
struct WorkspacePackage {
    version: Option<String>,
}

/// Extract the version string from manifest `contents`.
///
/// Uses `package.version` when it is a literal, otherwise falls back to
/// `workspace.package.version`. `origin` only labels errors.
pub fn manifest_version(contents: &str, origin: &str) -> Result<String, SourceError> {
    let manifest: Manifest = toml::from_str(contents).map_err(|source| SourceError::Toml {
        origin: origin.to_string(),
        source,
    })?;

    if let Some(Package {
        version: Some(VersionField::Literal(version)),
    }) = manifest.package
    {
        return Ok(version);
    }

    manifest
        .workspace
        .and_then(|ws| ws.package)
        .and_then(|pkg| pkg.version)
        .ok_or_else(|| SourceError::MissingVersion {
            origin: origin.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Where to read the reference version from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    /// The candidate manifest as committed at a git revision.
    GitRevision { rev: String, manifest: PathBuf },
    /// A separate manifest file.
    File(PathBuf),
}

/// A version string plus a label describing where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedVersion {
    pub version: String,
    pub origin: String,
}

/// Read the candidate version from the manifest at `path`.
pub fn read_candidate(path: &Path) -> Result<SourcedVersion, SourceError> {
    let sourced = read_file(path)?;
    emit_source_read("candidate", &sourced.origin, &sourced.version);
    Ok(sourced)
}

/// Read the reference version from `source`.
pub fn read_reference(source: &ReferenceSource) -> Result<SourcedVersion, SourceError> {
    let sourced = match source {
        ReferenceSource::File(path) => read_file(path)?,
        ReferenceSource::GitRevision { rev, manifest } => {
            let file_name = manifest
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| SourceError::InvalidPath(manifest.clone()))?;
            let dir = match manifest.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let origin = format!("{rev}:{}", manifest.display());
            let contents = git::show_file_at(dir, rev, file_name)?;
            SourcedVersion {
                version: manifest_version(&contents, &origin)?,
                origin,
            }
        }
    };
    emit_source_read("reference", &sourced.origin, &sourced.version);
    Ok(sourced)
}

fn read_file(path: &Path) -> Result<SourcedVersion, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    Ok(SourcedVersion {
        version: manifest_version(&contents, &origin)?,
        origin,
    })
}
