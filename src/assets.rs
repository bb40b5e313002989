//! Build-stamped asset names.
//!
//! DESIGN
//! ======
//! The client bundle is compiled to `pkg/<output>.js`, `pkg/<output>_bg.wasm`
//! or `pkg/<output>.wasm`, and `pkg/<output>.css`. Before serving, each file is
//! copied to `<output><stamp><rest>` and the Leptos `output_name` is switched
//! to `<output><stamp>`, so the rendered shell only references stamped URLs and
//! a new deployment never collides with a cached bundle. Copies from earlier
//! stamps are removed.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read asset dir {}: {source}", dir.display())]
    ReadDir { dir: PathBuf, source: io::Error },
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy { from: PathBuf, to: PathBuf, source: io::Error },
    #[error("no assets named `{output_name}` under {}", dir.display())]
    Missing { output_name: String, dir: PathBuf },
}

/// Seconds since the UNIX epoch; zero if the clock is before 1970.
pub fn current_stamp() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

pub fn stamped_output_name(output_name: &str, stamp: u64) -> String {
    format!("{output_name}{stamp}")
}

/// The part of `file_name` after `output_name`, if the file is an unstamped
/// bundle artifact (`.js`, `_bg.wasm`, ...).
fn unstamped_suffix<'a>(file_name: &'a str, output_name: &str) -> Option<&'a str> {
    let rest = file_name.strip_prefix(output_name)?;
    (rest.starts_with('.') || rest.starts_with('_')).then_some(rest)
}

/// `[name][stamp].[ext]` for an unstamped bundle artifact.
pub fn stamped_file_name(file_name: &str, output_name: &str, stamp: u64) -> Option<String> {
    unstamped_suffix(file_name, output_name).map(|rest| format!("{output_name}{stamp}{rest}"))
}

/// The stamp embedded in a previously stamped file name.
pub fn parse_stamp(file_name: &str, output_name: &str) -> Option<u64> {
    let rest = file_name.strip_prefix(output_name)?;
    let digits = rest.find(|c: char| !c.is_ascii_digit()).map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Copy every bundle artifact in `pkg_dir` to its stamped name and remove
/// copies carrying any other stamp. Returns the stamped paths.
pub fn stamp_pkg_dir(pkg_dir: &Path, output_name: &str, stamp: u64) -> Result<Vec<PathBuf>, AssetError> {
    let read_dir = |dir: &Path| fs::read_dir(dir).map_err(|source| AssetError::ReadDir { dir: dir.to_path_buf(), source });

    let mut stamped = Vec::new();
    let mut stale = Vec::new();
    for entry in read_dir(pkg_dir)?.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(target_name) = stamped_file_name(file_name, output_name, stamp) {
            let target = pkg_dir.join(target_name);
            fs::copy(&path, &target).map_err(|source| AssetError::Copy { from: path.clone(), to: target.clone(), source })?;
            stamped.push(target);
        } else if parse_stamp(file_name, output_name).is_some_and(|s| s != stamp) {
            stale.push(path);
        }
    }

    if stamped.is_empty() {
        return Err(AssetError::Missing { output_name: output_name.to_owned(), dir: pkg_dir.to_path_buf() });
    }

    for path in stale {
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove stale stamped asset");
        }
    }

    stamped.sort();
    Ok(stamped)
}
