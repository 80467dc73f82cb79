use std::fs;

use status::{config::MAX_INTERVAL, CollectorConfig, ConfigFile, Error};
use tempfile::tempdir;

const CONFIG: &str = r#"
[DEFAULT]
interval = 5

[mailstatus]
mailboxes = ~/Mail/inbox "/var/mail/mailing lists" /tmp/with\ space
Title = MAIL>
order = 2
interval = 30

[taskstatus]

[broken]
order = first
mailboxes = "unterminated
"#;

#[test_log::test]
fn test_collector_options() {
    let config = ConfigFile::from_contents(CONFIG, "modules.ini").unwrap();

    let mail = config.section("mailstatus").unwrap();
    assert_eq!(
        mail.collector("MAIL:").unwrap(),
        CollectorConfig {
            title: "MAIL>".into(),
            order: 2,
            interval: 30,
        }
    );

    let task = config.section("taskstatus").unwrap();
    assert_eq!(
        task.collector("TASK:").unwrap(),
        CollectorConfig {
            title: "TASK:".into(),
            order: 0,
            interval: 5,
        }
    );
}

#[test_log::test]
fn test_words() {
    let config = ConfigFile::from_contents(CONFIG, "modules.ini").unwrap();
    let mail = config.section("mailstatus").unwrap();

    assert_eq!(
        mail.words("mailboxes").unwrap(),
        vec!["~/Mail/inbox", "/var/mail/mailing lists", "/tmp/with space"]
    );
    assert!(matches!(
        mail.words("missing").unwrap_err(),
        Error::ConfigOptionMissing(..)
    ));

    let broken = config.section("broken").unwrap();
    assert!(matches!(
        broken.words("mailboxes").unwrap_err(),
        Error::ParseConfigOptionError(section, option, _) if section == "broken" && option == "mailboxes"
    ));
}

#[test_log::test]
fn test_missing_section_and_option() {
    let config = ConfigFile::from_contents(CONFIG, "modules.ini").unwrap();

    match config.section("weather").unwrap_err() {
        Error::ConfigSectionMissing(section, path) => {
            assert_eq!(section, "weather");
            assert_eq!(path.to_str(), Some("modules.ini"));
        }
        err => panic!("unexpected error: {err:?}"),
    }

    let task = config.section("taskstatus").unwrap();
    assert!(matches!(
        task.require("mailboxes").unwrap_err(),
        Error::ConfigOptionMissing(section, option) if section == "taskstatus" && option == "mailboxes"
    ));
}

#[test_log::test]
fn test_invalid_integer() {
    let config = ConfigFile::from_contents(CONFIG, "modules.ini").unwrap();
    let broken = config.section("broken").unwrap();

    assert!(matches!(
        broken.collector("X:").unwrap_err(),
        Error::ParseConfigOptionError(_, option, _) if option == "order"
    ));
}

#[test_log::test]
fn test_from_path() {
    let tmp = tempdir().unwrap();

    let missing = ConfigFile::from_path(tmp.path().join("missing.ini")).unwrap();
    assert!(matches!(
        missing.section("mailstatus").unwrap_err(),
        Error::ConfigSectionMissing(..)
    ));

    let path = tmp.path().join("modules.ini");
    fs::write(&path, "[taskstatus]\ntitle = T\n").unwrap();
    let config = ConfigFile::from_path(&path).unwrap();
    assert_eq!(config.path(), path);
    assert_eq!(
        config.section("taskstatus").unwrap().collector("TASK:").unwrap().title,
        "T"
    );
}

#[test_log::test]
fn test_interval_out_of_range() {
    let contents = format!(
        "[ok]\ninterval = {MAX_INTERVAL}\n[huge]\ninterval = {}\n",
        u64::MAX
    );
    let config = ConfigFile::from_contents(&contents, "modules.ini").unwrap();

    let ok = config.section("ok").unwrap().collector("OK:").unwrap();
    assert_eq!(ok.interval, MAX_INTERVAL);

    assert!(matches!(
        config.section("huge").unwrap().collector("X:").unwrap_err(),
        Error::ParseConfigOptionError(section, option, _) if section == "huge" && option == "interval"
    ));
}

#[test_log::test]
fn test_indented_multiline_value() {
    let contents = "[mailstatus]\nmailboxes = ~/Mail/inbox\n  '/var/mail/mailing lists'\n  /tmp/archive\norder = 1\n";
    let config = ConfigFile::from_contents(contents, "modules.ini").unwrap();
    let mail = config.section("mailstatus").unwrap();

    assert_eq!(
        mail.words("mailboxes").unwrap(),
        vec!["~/Mail/inbox", "/var/mail/mailing lists", "/tmp/archive"]
    );
    assert_eq!(mail.collector("MAIL:").unwrap().order, 1);
}
