//! Property-based tests for the extension classifiers.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use daznorm_core::content::is_promo_file;
use daznorm_core::formats::is_archive_path;
use proptest::prelude::*;

/// Mixes the case of an ASCII string according to a bit mask.
fn mix_case(s: &str, mask: u32) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 32)) == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

proptest! {
    /// Any case variant of a supported archive extension is detected.
    #[test]
    fn archive_detection_ignores_case(
        stem in "[a-z0-9_]{1,16}",
        ext_idx in 0usize..3,
        mask in any::<u32>(),
    ) {
        let ext = ["zip", "rar", "7z"][ext_idx];
        let path = PathBuf::from(format!("{stem}.{}", mix_case(ext, mask)));
        prop_assert!(is_archive_path(&path));
    }

    /// Extensions outside the supported set are never detected as archives.
    #[test]
    fn non_archive_extensions_rejected(
        stem in "[a-z0-9_]{1,16}",
        ext in "[a-z]{1,6}",
    ) {
        prop_assume!(!matches!(ext.as_str(), "zip" | "rar" | "7z"));
        let path = PathBuf::from(format!("{stem}.{ext}"));
        prop_assert!(!is_archive_path(&path));
    }

    /// Any case variant of a promotional extension is classified as promo.
    #[test]
    fn promo_detection_ignores_case(
        stem in "[a-z0-9_]{1,16}",
        ext_idx in 0usize..9,
        mask in any::<u32>(),
    ) {
        let ext = ["jpg", "jpeg", "png", "gif", "pdf", "txt", "doc", "docx", "rtf"][ext_idx];
        let path = PathBuf::from(format!("{stem}.{}", mix_case(ext, mask)));
        prop_assert!(is_promo_file(&path));
    }

    /// Files without an extension are never promotional.
    #[test]
    fn extensionless_files_are_not_promo(stem in "[a-z0-9_]{1,16}") {
        prop_assert!(!is_promo_file(&PathBuf::from(stem)));
    }
}
