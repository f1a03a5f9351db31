// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> PathBuf {
    app_dir_in(&base_dir())
}

/// `base/pujaseva`, created if missing.
pub fn app_dir_in(base: &Path) -> PathBuf {
    let dir = base.join("pujaseva");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data directory");
    }
    dir
}

fn base_dir() -> PathBuf {
    base_dir_from(std::env::var_os("XDG_DATA_HOME"), std::env::var_os("HOME"))
}

/// `$XDG_DATA_HOME`, else `$HOME/.local/share`, else the system temp dir.
/// Empty values count as unset.
fn base_dir_from(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let set = |v: Option<OsString>| v.filter(|v| !v.is_empty()).map(PathBuf::from);
    set(xdg_data_home)
        .or_else(|| set(home).map(|h| h.join(".local").join("share")))
        .unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dir_is_created_under_base() {
        let base = tempfile::tempdir().unwrap();
        let dir = app_dir_in(base.path());
        assert!(dir.is_dir());
        assert!(dir.ends_with("pujaseva"));
    }

    #[test]
    fn xdg_data_home_takes_precedence() {
        let base = base_dir_from(Some("/data".into()), Some("/home/asha".into()));
        assert_eq!(base, PathBuf::from("/data"));
    }

    #[test]
    fn home_is_used_when_xdg_is_unset_or_empty() {
        let expected = PathBuf::from("/home/asha/.local/share");
        assert_eq!(base_dir_from(None, Some("/home/asha".into())), expected);
        assert_eq!(base_dir_from(Some("".into()), Some("/home/asha".into())), expected);
    }

    #[test]
    fn temp_dir_is_the_last_fallback() {
        assert_eq!(base_dir_from(None, None), std::env::temp_dir());
    }
}
