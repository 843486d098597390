use capsula::diff::{compare_trees, make_diff};
use capsula::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_identical_trees_pass() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let generated = temp_dir.path().join("generated");

    for root in [&original, &generated] {
        write(root, "a.txt", "same");
        write(root, "sub/b.txt", "also same");
    }

    let report = compare_trees(&original, &generated).unwrap();
    assert!(report.passed());
    assert_eq!(report.identical.len(), 2);
    assert_eq!(report.total_compared, 2);
    assert!(report.different.is_empty());
    assert!(report.missing.is_empty());
}

#[test]
fn test_content_mismatch_is_recorded_with_hashes_and_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let generated = temp_dir.path().join("generated");

    write(&original, "a.txt", "original content");
    write(&generated, "a.txt", "changed");

    let report = compare_trees(&original, &generated).unwrap();
    assert!(!report.passed());
    assert_eq!(report.different.len(), 1);

    let diff = &report.different[0];
    assert_eq!(diff.path, "a.txt");
    assert_eq!(diff.original_hash.len(), 8);
    assert_eq!(diff.generated_hash.len(), 8);
    assert_ne!(diff.original_hash, diff.generated_hash);
    assert_eq!(diff.original_size, 16);
    assert_eq!(diff.generated_size, 7);
}

#[test]
fn test_extra_generated_file_is_missing_from_original() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let generated = temp_dir.path().join("generated");

    write(&original, "a.txt", "same");
    write(&generated, "a.txt", "same");
    write(&generated, "extra.txt", "only generated");

    let report = compare_trees(&original, &generated).unwrap();
    assert_eq!(report.identical, vec!["a.txt".to_string()]);
    assert_eq!(report.missing, vec!["extra.txt".to_string()]);
    assert_eq!(report.total_compared, 2);
}

#[test]
fn test_comparison_is_one_directional() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let generated = temp_dir.path().join("generated");

    // The generated tree is a strict subset of the original
    write(&original, "a.txt", "same");
    write(&original, "only-in-original.txt", "never compared");
    write(&original, "sub/c.txt", "never compared either");
    write(&generated, "a.txt", "same");

    let report = compare_trees(&original, &generated).unwrap();
    assert!(report.passed());
    assert_eq!(report.total_compared, 1);
    assert!(report.missing.is_empty());
    assert!(report.different.is_empty());
}

#[test]
fn test_make_diff_fails_with_full_lists() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let generated = temp_dir.path().join("generated");

    write(&original, "a.txt", "one");
    write(&generated, "a.txt", "two");
    write(&generated, "extra.txt", "surplus");

    let err = make_diff(&original, &generated).unwrap_err();
    match err {
        Error::ComparisonFailed { different, missing } => {
            assert_eq!(different, vec!["a.txt".to_string()]);
            assert_eq!(missing, vec!["extra.txt".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unreadable_generated_tree_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    write(&original, "a.txt", "content");

    let missing_generated = temp_dir.path().join("nope");
    assert!(compare_trees(&original, &missing_generated).is_err());
}
