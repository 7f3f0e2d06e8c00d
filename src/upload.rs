//! Upload collaborator seam.
//!
//! The [`Uploader`] trait defines the single operation the rest of the
//! codebase needs: hand a fully prepared [`UploadRequest`] to something that
//! knows how to get the file onto the remote media repository.
//!
//! The production implementation is [`PwbUploader`], which invokes the
//! external pywikibot CLI (`pwb upload`). Network transport, authentication,
//! chunked transfer, and remote warning handling all live in that client —
//! this crate never speaks the wire protocol itself. The client inherits the
//! terminal, so its own prompts and error output reach the user unmodified.

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("upload client exited with {0}")]
    ClientFailed(std::process::ExitStatus),
}

/// Default upload chunk size passed to the client: 1 MiB.
pub const DEFAULT_CHUNK_SIZE: u64 = 1_048_576;

/// Everything the collaborator needs for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Local path of the photo.
    pub file_path: PathBuf,
    /// Filename on the remote site.
    pub target_filename: String,
    /// Fully rendered description page markup.
    pub description: String,
    /// Suppress warning-based aborts on the remote side.
    pub ignore_warnings: bool,
}

/// Trait for upload collaborators.
///
/// Implementations own transport and session handling; callers own metadata
/// preparation. Failures are surfaced as-is — no retry, no translation.
pub trait Uploader {
    /// Perform one upload. Blocks until the client finishes.
    fn upload(&self, request: &UploadRequest) -> Result<(), UploadError>;
}

/// Uploader backed by the external pywikibot CLI.
pub struct PwbUploader {
    /// Client executable, `pwb` unless overridden.
    pub program: String,
    /// Chunk size in bytes for the client's chunked transfer.
    pub chunk_size: u64,
}

impl Default for PwbUploader {
    fn default() -> Self {
        Self {
            program: "pwb".to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl PwbUploader {
    /// Build the client invocation for `request`.
    ///
    /// `-keepfilename` and `-noverify` skip the client's own interactive
    /// renaming and description review — both already happened here, at the
    /// preview step.
    fn command(&self, request: &UploadRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("upload")
            .arg(&request.file_path)
            .arg(format!("-filename:{}", request.target_filename))
            .arg(format!("-description:{}", request.description))
            .arg("-keepfilename")
            .arg(format!("-chunked:{}", self.chunk_size))
            .arg("-noverify");
        if request.ignore_warnings {
            cmd.arg("-ignorewarn");
        }
        cmd
    }

    /// Human-readable form of the invocation, for the preview output.
    pub fn command_line(&self, request: &UploadRequest) -> String {
        let cmd = self.command(request);
        std::iter::once(cmd.get_program())
            .chain(cmd.get_args())
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Uploader for PwbUploader {
    fn upload(&self, request: &UploadRequest) -> Result<(), UploadError> {
        let status = self.command(request).status()?;
        if !status.success() {
            return Err(UploadError::ClientFailed(status));
        }
        Ok(())
    }
}
