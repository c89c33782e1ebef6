//! Fixed classification sets for asset content.
//!
//! Two process-wide, immutable sets drive the pipeline: the folder names that
//! mark a directory as a content root, and the file extensions that mark
//! top-level files as promotional material. Both are matched ASCII
//! case-insensitively.

use std::ffi::OsStr;
use std::path::Path;

/// Folder names whose presence identifies a content root.
pub const CONTENT_FOLDERS: [&str; 6] = [
    "data",
    "People",
    "Props",
    "Runtime",
    "Environments",
    "Scenes",
];

/// File extensions identifying promotional material (preview images,
/// documentation) rather than content.
pub const PROMO_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "pdf", "txt", "doc", "docx", "rtf",
];

/// Returns `true` if `name` matches a known content-folder name,
/// case-insensitively.
#[must_use]
pub fn is_content_folder(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| {
        CONTENT_FOLDERS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name))
    })
}

/// Returns `true` if `path` has a promotional-material extension.
#[must_use]
pub fn is_promo_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            PROMO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_content_folder_exact() {
        assert!(is_content_folder(OsStr::new("Runtime")));
        assert!(is_content_folder(OsStr::new("People")));
        assert!(is_content_folder(OsStr::new("data")));
    }

    #[test]
    fn test_content_folder_case_insensitive() {
        assert!(is_content_folder(OsStr::new("runtime")));
        assert!(is_content_folder(OsStr::new("RUNTIME")));
        assert!(is_content_folder(OsStr::new("Data")));
        assert!(is_content_folder(OsStr::new("sCeNeS")));
    }

    #[test]
    fn test_content_folder_rejects_others() {
        assert!(!is_content_folder(OsStr::new("Documentation")));
        assert!(!is_content_folder(OsStr::new("Runtime2")));
        assert!(!is_content_folder(OsStr::new("")));
    }

    #[test]
    fn test_promo_file_matches() {
        assert!(is_promo_file(&PathBuf::from("promo.jpg")));
        assert!(is_promo_file(&PathBuf::from("ReadMe.TXT")));
        assert!(is_promo_file(&PathBuf::from("manual.PDF")));
    }

    #[test]
    fn test_promo_file_rejects_content() {
        assert!(!is_promo_file(&PathBuf::from("figure.duf")));
        assert!(!is_promo_file(&PathBuf::from("texture.tif")));
        assert!(!is_promo_file(&PathBuf::from("noextension")));
    }
}
