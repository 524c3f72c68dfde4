//! Tests for runtime settings

use std::path::PathBuf;

use wipguard::config::{Settings, SettingsInput, parse_repository};

fn input() -> SettingsInput {
    SettingsInput {
        token: Some("ghs_token".to_string()),
        repository: Some("octo/app".to_string()),
        event_path: Some(PathBuf::from("event.json")),
        ..SettingsInput::default()
    }
}

#[test]
fn api_url_trailing_slash_is_trimmed() {
    let settings = Settings::from_input(SettingsInput {
        api_url: Some("https://ghe.example.com/api/v3/".to_string()),
        ..input()
    })
    .unwrap();
    assert_eq!(settings.api_url, "https://ghe.example.com/api/v3");
}

#[test]
fn blank_optional_values_use_defaults() {
    let settings = Settings::from_input(SettingsInput {
        config_path: Some(String::new()),
        check_name: Some(" ".to_string()),
        ready_desc: Some(String::new()),
        event_name: Some(String::new()),
        ..input()
    })
    .unwrap();
    assert_eq!(settings.config_path, None);
    assert_eq!(settings.check_name, "WIP");
    assert_eq!(settings.ready_desc, "ready for review");
    assert_eq!(settings.event_name, "pull_request");
}

#[test]
fn other_events_are_recognised() {
    let settings = Settings::from_input(SettingsInput {
        event_name: Some("push".to_string()),
        ..input()
    })
    .unwrap();
    assert!(!settings.is_pull_request_event());
}

#[test]
fn missing_repository_is_rejected() {
    let err = Settings::from_input(SettingsInput {
        repository: None,
        ..input()
    })
    .unwrap_err();
    assert!(err.to_string().contains("GITHUB_REPOSITORY"));
}

#[test]
fn missing_event_path_is_rejected() {
    let err = Settings::from_input(SettingsInput {
        event_path: None,
        ..input()
    })
    .unwrap_err();
    assert!(err.to_string().contains("GITHUB_EVENT_PATH"));
}

#[test]
fn repository_slug_is_split() {
    assert_eq!(
        parse_repository("octo/app").unwrap(),
        ("octo".to_string(), "app".to_string())
    );
}

#[test]
fn ready_desc_flows_into_render_options() {
    let settings = Settings::from_input(SettingsInput {
        ready_desc: Some("no WIP markers".to_string()),
        ..input()
    })
    .unwrap();
    let options = settings.pass_options(false);
    assert_eq!(options.render.ready_desc, "no WIP markers");
    assert_eq!(options.retry.retries, 3);
    assert!(!options.dry_run);
}
