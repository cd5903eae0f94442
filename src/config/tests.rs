use super::*;

#[test]
fn defaults_apply_when_nothing_is_provided() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.output.directory, PathBuf::from("exported"));
    assert_eq!(settings.assets.stylesheet, PathBuf::from("styles.css"));
    assert_eq!(settings.assets.script, PathBuf::from("script.js"));
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.output.directory = Some(PathBuf::from("from-file"));
    raw.logging.level = Some("info".to_string());

    let overrides = SaveOverrides {
        export_dir: Some(PathBuf::from("from-cli")),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_save_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.output.directory, PathBuf::from("from-cli"));
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = SaveOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_save_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn empty_export_directory_is_rejected() {
    let mut raw = RawSettings::default();
    raw.output.directory = Some(PathBuf::new());

    let err = Settings::from_raw(raw).expect_err("must reject");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "output.directory",
            ..
        }
    ));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("must reject");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn parse_save_arguments() {
    let args = CliArgs::parse_from([
        "rilega",
        "save",
        "--title",
        "My Tale",
        "--author",
        "Jane",
        "--publisher",
        "Blog",
        "--body",
        "Hello.",
        "--markdown",
        "true",
        "--export-dir",
        "/tmp/out",
    ]);

    match args.command.expect("save command") {
        Command::Save(save) => {
            assert_eq!(save.story.title.as_deref(), Some("My Tale"));
            assert_eq!(save.story.author.as_deref(), Some("Jane"));
            assert_eq!(save.story.publisher.as_deref(), Some("Blog"));
            assert_eq!(save.story.body.as_deref(), Some("Hello."));
            assert_eq!(save.story.markdown, Some(true));
            assert_eq!(
                save.overrides.export_dir.as_deref(),
                Some(std::path::Path::new("/tmp/out"))
            );
        }
    }
}

#[test]
fn parse_save_input_file_and_links() {
    let args = CliArgs::parse_from([
        "rilega",
        "save",
        "--input",
        "story.json",
        "--story-link",
        "https://example.com/story",
        "--body-file",
        "body.md",
    ]);

    match args.command.expect("save command") {
        Command::Save(save) => {
            assert_eq!(save.input.as_deref(), Some(std::path::Path::new("story.json")));
            assert_eq!(
                save.story.story_link.as_deref(),
                Some("https://example.com/story")
            );
            assert_eq!(
                save.story.body_file.as_deref(),
                Some(std::path::Path::new("body.md"))
            );
        }
    }
}

#[test]
fn no_subcommand_parses_cleanly() {
    let args = CliArgs::parse_from(["rilega"]);
    assert!(args.command.is_none());
}
