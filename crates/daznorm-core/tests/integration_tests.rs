//! End-to-end pipeline tests over generated zip fixtures.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use daznorm_core::ArchiveOutcome;
use daznorm_core::NormalizeOptions;
use daznorm_core::run;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds a zip archive in memory. Entry names ending in '/' become
/// directories.
fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content).unwrap();
        }
    }
    zip.finish().unwrap().into_inner()
}

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    fs::write(path, zip_bytes(entries)).unwrap();
}

/// A typical vendor zip: content wrapped in a product folder, with a promo
/// image and readme alongside the content folders.
fn write_product_zip(path: &Path) {
    write_zip(
        path,
        &[
            ("Fantasy Pack/Runtime/textures/skin.tif", b"texture bytes"),
            ("Fantasy Pack/People/hero.duf", b"figure"),
            ("Fantasy Pack/promo.jpg", b"shiny render"),
            ("Fantasy Pack/readme.txt", b"thanks for buying"),
        ],
    );
}

fn sorted_relative_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

#[test]
fn test_per_archive_mode_produces_dir_and_zip() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_product_zip(&input.path().join("fantasy.zip"));

    let report = run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    assert_eq!(report.succeeded(), 1);
    let normalized = output.path().join("fantasy_normalized");
    assert!(normalized.join("Runtime/textures/skin.tif").exists());
    assert!(normalized.join("People/hero.duf").exists());
    assert!(output.path().join("fantasy_normalized.zip").exists());
    // promo material is filtered by default
    assert!(!normalized.join("promo.jpg").exists());
    assert!(!normalized.join("readme.txt").exists());
}

#[test]
fn test_include_promos_keeps_promo_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_product_zip(&input.path().join("fantasy.zip"));

    let options = NormalizeOptions {
        include_promos: true,
        ..NormalizeOptions::default()
    };
    run(input.path(), output.path(), &options).unwrap();

    let normalized = output.path().join("fantasy_normalized");
    assert!(normalized.join("promo.jpg").exists());
    assert!(normalized.join("readme.txt").exists());
}

#[test]
fn test_root_level_content_needs_no_wrapper() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_zip(
        &input.path().join("flat.zip"),
        &[("Runtime/libraries/pose.duf", b"pose")],
    );

    let report = run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    assert_eq!(report.succeeded(), 1);
    assert!(
        output
            .path()
            .join("flat_normalized/Runtime/libraries/pose.duf")
            .exists()
    );
}

#[test]
fn test_nested_archives_are_flattened() {
    let inner = zip_bytes(&[("Props/crate.duf", b"prop")]);
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_zip(
        &input.path().join("bundle.zip"),
        &[("product/inner.zip", &inner)],
    );

    let report = run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    assert_eq!(report.succeeded(), 1);
    assert!(
        output
            .path()
            .join("bundle_normalized/Props/crate.duf")
            .exists()
    );
}

#[test]
fn test_merge_mode_accumulates_into_content() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_zip(
        &input.path().join("one.zip"),
        &[("packA/Runtime/textures/a.tif", b"a")],
    );
    write_zip(
        &input.path().join("two.zip"),
        &[("packB/People/b.duf", b"b")],
    );

    let options = NormalizeOptions {
        merge_into_content: true,
        ..NormalizeOptions::default()
    };
    let report = run(input.path(), output.path(), &options).unwrap();

    assert_eq!(report.succeeded(), 2);
    let content = output.path().join("Content");
    assert!(content.join("Runtime/textures/a.tif").exists());
    assert!(content.join("People/b.duf").exists());
    // merge mode produces no per-archive zips
    assert!(!output.path().join("one_normalized.zip").exists());
}

#[test]
fn test_merge_mode_is_idempotent() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_product_zip(&input.path().join("fantasy.zip"));

    let options = NormalizeOptions {
        merge_into_content: true,
        ..NormalizeOptions::default()
    };
    run(input.path(), output.path(), &options).unwrap();
    let first = sorted_relative_files(&output.path().join("Content"));

    run(input.path(), output.path(), &options).unwrap();
    let second = sorted_relative_files(&output.path().join("Content"));

    assert_eq!(first, second);
}

#[test]
fn test_archive_without_content_root_is_skipped() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_zip(
        &input.path().join("aaa_junk.zip"),
        &[("docs/manual.pdf", b"pages"), ("license.txt", b"MIT")],
    );
    write_product_zip(&input.path().join("fantasy.zip"));

    let report = run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    // the rootless archive produced nothing and did not halt the batch
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.succeeded(), 1);
    assert!(matches!(
        report.results[0].outcome,
        ArchiveOutcome::NoContentRoot
    ));
    assert!(!output.path().join("aaa_junk_normalized").exists());
    assert!(!output.path().join("aaa_junk_normalized.zip").exists());
    assert!(output.path().join("fantasy_normalized.zip").exists());
}

#[test]
fn test_corrupt_archive_fails_without_halting_batch() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("aaa_broken.zip"), b"not a zip").unwrap();
    write_product_zip(&input.path().join("fantasy.zip"));

    let report = run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.succeeded(), 1);
    assert!(matches!(
        report.results[0].outcome,
        ArchiveOutcome::Failed { .. }
    ));
}

#[test]
fn test_empty_input_directory_yields_empty_report() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let report = run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    assert!(report.results.is_empty());
}

#[test]
fn test_output_directory_is_created() {
    let input = TempDir::new().unwrap();
    let parent = TempDir::new().unwrap();
    let output = parent.path().join("brand/new/output");
    write_product_zip(&input.path().join("fantasy.zip"));

    run(input.path(), &output, &NormalizeOptions::default()).unwrap();

    assert!(output.join("fantasy_normalized.zip").exists());
}

#[test]
fn test_normalized_zip_contains_content_layout() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_product_zip(&input.path().join("fantasy.zip"));

    run(input.path(), output.path(), &NormalizeOptions::default()).unwrap();

    let file = fs::File::open(output.path().join("fantasy_normalized.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert!(names.contains(&"Runtime/textures/skin.tif".to_string()));
    assert!(names.contains(&"People/hero.duf".to_string()));
    assert!(!names.iter().any(|n| n.contains("Fantasy Pack")));
}
