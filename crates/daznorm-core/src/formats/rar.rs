//! RAR archive extraction.

use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Extracts a RAR archive into `dest_dir`.
///
/// Extraction is read-only and unencrypted; archives requiring a password
/// fail like any other decode error.
///
/// # Errors
///
/// Returns [`NormalizeError::Codec`] if the decoder rejects the archive, and
/// [`NormalizeError::Io`] when either path is not valid UTF-8 (a restriction
/// of the underlying unrar bindings).
pub fn extract_rar(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let path_str = archive_path
        .to_str()
        .ok_or_else(|| non_utf8_path(archive_path))?;
    let dest_str = dest_dir.to_str().ok_or_else(|| non_utf8_path(dest_dir))?;

    rar::Archive::extract_all(path_str, dest_str, "")
        .map_err(|e| NormalizeError::codec(archive_path, format!("{e:?}")))?;

    Ok(())
}

fn non_utf8_path(path: &Path) -> NormalizeError {
    NormalizeError::Io(std::io::Error::other(format!(
        "path is not valid UTF-8: {}",
        path.display()
    )))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_rar_corrupt_input() {
        let temp = TempDir::new().expect("temp dir");
        let archive = temp.path().join("broken.rar");
        fs::write(&archive, b"not a rar archive").expect("write fixture");

        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).expect("dest dir");

        let result = extract_rar(&archive, &dest);
        assert!(matches!(result, Err(NormalizeError::Codec { .. })));
    }
}
