use capsula::cli::{Args, Command};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("capsula")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_subcommand_defaults_to_interactive() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert!(parsed.command.is_none());
    assert!(!parsed.verbose);
    assert!(parsed.config.is_none());
}

#[test]
fn test_bundle_args() {
    let parsed = Args::try_parse_from(make_args(&[
        "bundle",
        "./templates/capsula-simple",
        "./pack/bundle.simple.rs",
        "-e",
        "node_modules",
        "-e",
        "*.lock",
    ]))
    .unwrap();

    match parsed.command {
        Some(Command::Bundle { template_dir, output_file, exclude }) => {
            assert_eq!(template_dir, PathBuf::from("./templates/capsula-simple"));
            assert_eq!(output_file, PathBuf::from("./pack/bundle.simple.rs"));
            assert_eq!(exclude, vec!["node_modules".to_string(), "*.lock".to_string()]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_bundle_requires_both_paths() {
    assert!(Args::try_parse_from(make_args(&["bundle", "./template"])).is_err());
}

#[test]
fn test_diff_args() {
    let parsed =
        Args::try_parse_from(make_args(&["diff", "./original", "./generated"])).unwrap();

    match parsed.command {
        Some(Command::Diff { original, generated }) => {
            assert_eq!(original, PathBuf::from("./original"));
            assert_eq!(generated, PathBuf::from("./generated"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_verify_keep_flag() {
    let parsed = Args::try_parse_from(make_args(&["verify", "--keep"])).unwrap();
    assert!(matches!(parsed.command, Some(Command::Verify { keep: true })));

    let parsed = Args::try_parse_from(make_args(&["verify"])).unwrap();
    assert!(matches!(parsed.command, Some(Command::Verify { keep: false })));
}

#[test]
fn test_global_flags_after_subcommand() {
    let parsed =
        Args::try_parse_from(make_args(&["verify", "-v", "-c", "other/capsula.yaml"])).unwrap();
    assert!(parsed.verbose);
    assert_eq!(parsed.config, Some(PathBuf::from("other/capsula.yaml")));
}
