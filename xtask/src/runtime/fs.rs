//! Shared filesystem helpers for xtask workflows.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Recursively collects files under `root` whose name ends with `suffix`, sorted by path.
///
/// A missing `root` yields an empty list.
pub fn collect_files_with_suffix(root: &Path, suffix: &str) -> XtaskResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    if !root.exists() {
        return Ok(out);
    }
    collect_files_with_suffix_inner(root, suffix, &mut out)?;
    Ok(out)
}

fn collect_files_with_suffix_inner(
    root: &Path,
    suffix: &str,
    out: &mut Vec<PathBuf>,
) -> XtaskResult<()> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .map_err(|err| read_error(root, err))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| read_error(root, err))?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_files_with_suffix_inner(&path, suffix, out)?;
        } else if path.is_file() && path.to_string_lossy().ends_with(suffix) {
            out.push(path);
        }
    }

    Ok(())
}

fn read_error(path: &Path, err: std::io::Error) -> XtaskError {
    XtaskError::io(format!("failed to read {}: {err}", path.display())).with_path(path)
}

/// `path` relative to `root`, joined with `/` regardless of platform.
pub fn rel_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::CurDir => Some(".".to_string()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Writes `contents` to `path`, creating parent directories first.
pub fn write_text(path: &Path, contents: &str) -> XtaskResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            XtaskError::io(format!("failed to create {}: {err}", parent.display()))
                .with_path(parent)
        })?;
    }
    fs::write(path, contents).map_err(|err| {
        XtaskError::io(format!("failed to write {}: {err}", path.display())).with_path(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-fs-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn collects_matching_files_recursively_in_order() {
        let root = unique_temp_dir();
        write_text(&root.join("b/inner.rs"), "").expect("write inner");
        write_text(&root.join("a.rs"), "").expect("write a");
        write_text(&root.join("notes.md"), "").expect("write md");

        let files = collect_files_with_suffix(&root, ".rs").expect("collect");
        let rel: Vec<_> = files.iter().map(|path| rel_posix(&root, path)).collect();
        assert_eq!(rel, vec!["a.rs".to_string(), "b/inner.rs".to_string()]);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_root_collects_nothing() {
        let root = unique_temp_dir().join("absent");
        assert!(collect_files_with_suffix(&root, ".rs")
            .expect("collect")
            .is_empty());
    }

    #[test]
    fn write_text_creates_parent_directories() {
        let root = unique_temp_dir();
        let target = root.join("nested/dir/out.txt");
        write_text(&target, "hello").expect("write");
        assert_eq!(fs::read_to_string(&target).expect("read"), "hello");
        let _ = fs::remove_dir_all(root);
    }
}
