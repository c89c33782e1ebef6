//! Archive format detection.

use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// ZIP archive.
    Zip,
    /// RAR archive.
    Rar,
    /// 7z archive.
    SevenZ,
}

impl ArchiveKind {
    /// Short format name for log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Rar => "rar",
            Self::SevenZ => "7z",
        }
    }
}

/// Detects the archive kind from a file path.
///
/// Determination is strictly by lowercase file extension among
/// {zip, rar, 7z}.
///
/// # Errors
///
/// Returns [`NormalizeError::UnsupportedFormat`] for anything else.
pub fn detect_format(path: &Path) -> Result<ArchiveKind> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(NormalizeError::UnsupportedFormat)?;

    match extension.to_ascii_lowercase().as_str() {
        "zip" => Ok(ArchiveKind::Zip),
        "rar" => Ok(ArchiveKind::Rar),
        "7z" => Ok(ArchiveKind::SevenZ),
        _ => Err(NormalizeError::UnsupportedFormat),
    }
}

/// Returns `true` if `path` carries a supported archive extension.
///
/// Used by the directory scans that discover archives; files rejected here
/// are never handed to a codec.
#[must_use]
pub fn is_archive_path(path: &Path) -> bool {
    detect_format(path).is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_zip() {
        let path = PathBuf::from("pack.zip");
        assert_eq!(detect_format(&path).unwrap(), ArchiveKind::Zip);
    }

    #[test]
    fn test_detect_rar() {
        let path = PathBuf::from("pack.rar");
        assert_eq!(detect_format(&path).unwrap(), ArchiveKind::Rar);
    }

    #[test]
    fn test_detect_7z() {
        let path = PathBuf::from("pack.7z");
        assert_eq!(detect_format(&path).unwrap(), ArchiveKind::SevenZ);
    }

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(
            detect_format(&PathBuf::from("PACK.ZIP")).unwrap(),
            ArchiveKind::Zip
        );
        assert_eq!(
            detect_format(&PathBuf::from("Pack.RaR")).unwrap(),
            ArchiveKind::Rar
        );
        assert_eq!(
            detect_format(&PathBuf::from("pack.7Z")).unwrap(),
            ArchiveKind::SevenZ
        );
    }

    #[test]
    fn test_detect_unsupported() {
        assert!(matches!(
            detect_format(&PathBuf::from("pack.tar.gz")),
            Err(NormalizeError::UnsupportedFormat)
        ));
        assert!(matches!(
            detect_format(&PathBuf::from("no_extension")),
            Err(NormalizeError::UnsupportedFormat)
        ));
    }

    #[test]
    fn test_is_archive_path() {
        assert!(is_archive_path(&PathBuf::from("a.zip")));
        assert!(is_archive_path(&PathBuf::from("b.RAR")));
        assert!(!is_archive_path(&PathBuf::from("c.txt")));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ArchiveKind::Zip.name(), "zip");
        assert_eq!(ArchiveKind::Rar.name(), "rar");
        assert_eq!(ArchiveKind::SevenZ.name(), "7z");
    }
}
