//! Asset path resolution with a single fallback location.
//!
//! A relative name is tried as given (against the working directory) and then
//! under the fallback directory. There is no further searching.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset {name:?} not found (tried {tried:?})")]
    NotFound { name: PathBuf, tried: Vec<PathBuf> },
}

/// Resolve `name` to an existing file.
pub fn resolve(name: impl AsRef<Path>, fallback_dir: Option<&Path>) -> Result<PathBuf, AssetError> {
    let name = name.as_ref();
    let mut tried = vec![name.to_path_buf()];

    if name.is_file() {
        return Ok(name.to_path_buf());
    }

    if let Some(dir) = fallback_dir.filter(|_| name.is_relative()) {
        let candidate = dir.join(name);
        log::debug!("{:?} not found, trying {:?}", name, candidate);

        if candidate.is_file() {
            return Ok(candidate);
        }
        tried.push(candidate);
    }

    Err(AssetError::NotFound {
        name: name.to_path_buf(),
        tried,
    })
}

/// Two directories above the running executable, where a build tree keeps
/// its shared assets relative to `target/<profile>/`.
pub fn default_fallback_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent()?.parent()?.parent().map(Path::to_path_buf)
}
