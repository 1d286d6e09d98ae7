//! Input precondition checks and their typed errors.
//!
//! Every input file must exist, be a regular readable file, and carry the
//! extension the command expects. These checks run before any document is
//! processed; a failure here is fatal and maps to a dedicated exit code,
//! unlike rule failures which are recorded and never abort the scan.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::ExitCode;

/// A fatal input precondition failure.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("{}: file not found", .0.display())]
    NotFound(PathBuf),

    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    #[error("{}: unexpected file extension (expected {})", .0.display(), .1)]
    UnexpectedExtension(PathBuf, String),
}

impl PreflightError {
    /// The exit code this precondition failure maps to.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PreflightError::NotFound(_) => ExitCode::NotFound,
            PreflightError::PermissionDenied(_) => ExitCode::PermissionDenied,
            PreflightError::NotRegularFile(_) => ExitCode::NotRegularFile,
            PreflightError::UnexpectedExtension(..) => ExitCode::InvalidArgument,
        }
    }
}

/// Verify that `path` is an existing, readable regular file with one of
/// the `allowed_extensions` (given without the leading dot).
pub fn preflight(path: &Path, allowed_extensions: &[&str]) -> Result<(), PreflightError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PreflightError::NotFound(path.to_path_buf()));
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(PreflightError::PermissionDenied(path.to_path_buf()));
        }
        Err(_) => return Err(PreflightError::NotFound(path.to_path_buf())),
    };

    if !metadata.is_file() {
        return Err(PreflightError::NotRegularFile(path.to_path_buf()));
    }

    if let Err(e) = File::open(path) {
        if e.kind() == io::ErrorKind::PermissionDenied {
            return Err(PreflightError::PermissionDenied(path.to_path_buf()));
        }
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !allowed_extensions.contains(&extension) {
        let expected = allowed_extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(PreflightError::UnexpectedExtension(
            path.to_path_buf(),
            expected,
        ));
    }

    Ok(())
}
