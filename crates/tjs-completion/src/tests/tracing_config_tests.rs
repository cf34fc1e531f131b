use crate::tracing_config::*;
use rustc_hash::FxHashMap;
use tracing::level_filters::LevelFilter;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: FxHashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |var| vars.get(var).cloned()
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("TREE"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" json "), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}

#[test]
fn test_no_filter_variable_means_no_subscriber() {
    assert_eq!(TracingSettings::from_lookup(env(&[])), None);
    assert_eq!(
        TracingSettings::from_lookup(env(&[(LOG_FORMAT_ENV, "json")])),
        None,
        "a format alone does not enable logging"
    );
}

#[test]
fn test_tjs_log_wins_over_rust_log() {
    let settings = TracingSettings::from_lookup(env(&[
        (LOG_ENV, "tjs_completion=debug"),
        (FALLBACK_LOG_ENV, "warn"),
    ]))
    .expect("settings");
    assert_eq!(settings.directives, "tjs_completion=debug");
    assert_eq!(settings.format, LogFormat::Text);
    assert_eq!(settings.filter().max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn test_rust_log_fallback_and_format() {
    let settings = TracingSettings::from_lookup(env(&[
        (FALLBACK_LOG_ENV, "trace"),
        (LOG_FORMAT_ENV, "Tree"),
    ]))
    .expect("settings");
    assert_eq!(
        settings,
        TracingSettings {
            directives: "trace".to_string(),
            format: LogFormat::Tree,
        }
    );
    assert_eq!(settings.filter().max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn test_second_install_keeps_existing_subscriber() {
    let settings = TracingSettings {
        directives: "off".to_string(),
        format: LogFormat::Json,
    };
    // The first call may or may not win against other tests in this binary.
    let _ = settings.install();
    assert!(!settings.install());
}
