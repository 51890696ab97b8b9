use std::path::PathBuf;

use tined::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".tinedrc");
    let content = r#"
# comment
--write

   
--log-file=session.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.write);
    assert_eq!(flags.log_file, Some(PathBuf::from("session.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".tinedrc");
    std::fs::write(&path, "--write\n--log-file file.log\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_flags = parse_flag_tokens(&[
        "tined".to_string(),
        "--log-file".to_string(),
        "cli.log".to_string(),
    ]);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.write, "file flags should remain enabled");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("cli.log")),
        "cli should override log file"
    );
}

#[test]
fn test_file_option_preserved_when_cli_is_silent() {
    let file = ConfigFlags {
        log_file: Some(PathBuf::from("file.log")),
        ..ConfigFlags::default()
    };
    let merged = file.union(&parse_flag_tokens(&["tined".to_string(), "notes.txt".to_string()]));
    assert_eq!(merged.log_file, Some(PathBuf::from("file.log")));
    assert!(!merged.write);
}

#[test]
fn test_global_and_local_files_merge() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("global");
    let local = dir.path().join(".tinedrc");
    save_config_flags(
        &global,
        &ConfigFlags {
            log_file: Some(PathBuf::from("global.log")),
            ..ConfigFlags::default()
        },
    )
    .unwrap();
    std::fs::write(&local, "--write\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert!(merged.write);
    assert_eq!(merged.log_file, Some(PathBuf::from("global.log")));
}

#[test]
fn test_saved_file_is_commented_and_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");
    save_config_flags(
        &path,
        &ConfigFlags {
            write: true,
            log_file: None,
        },
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# tined defaults"));
    assert!(content.contains("--write"));
}
