//! Output-file writing with overwrite confirmation.

use std::path::{Path, PathBuf};

use crate::error::{AppError, PromptError};

/// What to do when the destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Ask before replacing an existing file.
    #[default]
    Ask,
    /// Replace without asking (`--force`).
    Force,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Created { path: PathBuf },
    Overwritten { path: PathBuf },
    /// The user declined to replace an existing file; nothing was written.
    Declined { path: PathBuf },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path } | Self::Overwritten { path } | Self::Declined { path } => path,
        }
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// `confirm` is only called when the file exists and `policy` is `Ask`.
pub fn write_output<F>(
    path: &Path,
    content: &str,
    policy: OverwritePolicy,
    confirm: F,
) -> Result<WriteOutcome, AppError>
where
    F: FnOnce(&Path) -> Result<bool, PromptError>,
{
    let existed = path.exists();
    if existed && policy == OverwritePolicy::Ask && !confirm(path)? {
        tracing::info!(path = %path.display(), "overwrite declined");
        return Ok(WriteOutcome::Declined {
            path: path.to_path_buf(),
        });
    }

    let write_err = |source| AppError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)?;
    tracing::info!(path = %path.display(), bytes = content.len(), existed, "wrote output");

    let path = path.to_path_buf();
    Ok(if existed {
        WriteOutcome::Overwritten { path }
    } else {
        WriteOutcome::Created { path }
    })
}
