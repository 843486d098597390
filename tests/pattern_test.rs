use capsula::pattern::ExcludeSet;

#[test]
fn test_exact_name_excludes_by_segment() {
    let set = ExcludeSet::compile(&["node_modules"]).unwrap();

    // Matched via the bare entry name
    assert!(set.is_excluded("node_modules", "node_modules"));
    // Matched via a path segment, not the entry name
    assert!(set.is_excluded("x.js", "node_modules/x.js"));
    assert!(set.is_excluded("y.js", "sub/node_modules/pkg/y.js"));
    // A superstring segment must not match
    assert!(!set.is_excluded("x.js", "my_node_modules_dir/x.js"));
}

#[test]
fn test_prefix_wildcard() {
    let set = ExcludeSet::compile(&["__*"]).unwrap();

    assert!(set.is_excluded("__pycache__", "__pycache__"));
    assert!(set.is_excluded("__snapshots__", "tests/__snapshots__"));
    assert!(!set.is_excluded("file__", "file__"));
}

#[test]
fn test_suffix_wildcard() {
    let set = ExcludeSet::compile(&["*.pyc"]).unwrap();

    assert!(set.is_excluded("module.pyc", "module.pyc"));
    assert!(set.is_excluded("module.pyc", "deep/nested/module.pyc"));
    assert!(!set.is_excluded("module.py", "module.py"));
    // The dot is literal, not a regex metacharacter
    assert!(!set.is_excluded("modulexpyc", "modulexpyc"));
}

#[test]
fn test_full_relative_path_match() {
    let set = ExcludeSet::compile(&["docs/*"]).unwrap();

    assert!(set.is_excluded("guide.md", "docs/guide.md"));
    // Anchored: must cover the whole candidate
    assert!(!set.is_excluded("guide.md", "project/docs/guide.md"));
}

#[test]
fn test_no_match_without_rules() {
    let set = ExcludeSet::compile::<&str>(&[]).unwrap();
    assert!(set.is_empty());
    assert!(!set.is_excluded("anything", "any/path/anything"));
}

#[test]
fn test_invalid_rule_is_impossible_after_escaping() {
    // Regex metacharacters are escaped, so rules that would be invalid
    // regular expressions still compile as literals.
    let set = ExcludeSet::compile(&["weird(name", "a[b"]).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.is_excluded("weird(name", "weird(name"));
    assert!(set.is_excluded("a[b", "sub/a[b"));
}
