//! Content-root detection.
//!
//! A directory qualifies as the content root when any of its immediate
//! subdirectories has a known content-folder name. The search checks the tree
//! root first, then walks breadth-first with children visited in
//! lexicographic file-name order, so the shallowest match wins and ties break
//! deterministically on every platform. This is a heuristic: a tree with
//! several plausible roots yields the first one in traversal order.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::content::is_content_folder;

/// Finds the content root within `root`, or `None` if the tree contains no
/// directory with recognizable content folders.
pub fn find_content_root(root: &Path) -> Result<Option<PathBuf>> {
    if has_content_child(root)? {
        return Ok(Some(root.to_path_buf()));
    }

    let mut queue = VecDeque::from([root.to_path_buf()]);
    while let Some(dir) = queue.pop_front() {
        for child in sorted_subdirs(&dir)? {
            if has_content_child(&child)? {
                return Ok(Some(child));
            }
            queue.push_back(child);
        }
    }

    Ok(None)
}

/// Returns `true` if any immediate subdirectory of `dir` has a known
/// content-folder name.
fn has_content_child(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() && is_content_folder(&entry.file_name()) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Immediate subdirectories of `dir`, sorted by file name.
fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}
