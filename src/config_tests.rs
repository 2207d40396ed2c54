#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::PathBuf;

use super::*;

fn dirs() -> PlatformDirs {
    PlatformDirs {
        data: Some(PathBuf::from("/data/pocketbudget")),
        download: Some(PathBuf::from("/home/u/Downloads")),
        home: Some(PathBuf::from("/home/u")),
    }
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_from_platform_dirs() {
    let config = Config::resolve(lookup(&[]), &dirs()).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/data/pocketbudget"));
    assert_eq!(config.export_dir, PathBuf::from("/home/u/Downloads"));
    assert_eq!(config.currency, DEFAULT_CURRENCY);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(
        config.log_path(),
        PathBuf::from("/data/pocketbudget/pocketbudget.log")
    );
}

#[test]
fn test_env_overrides() {
    let config = Config::resolve(
        lookup(&[
            ("POCKETBUDGET_DATA_DIR", "/tmp/pb"),
            ("POCKETBUDGET_EXPORT_DIR", "~/exports"),
            ("POCKETBUDGET_CURRENCY", " EUR "),
            ("POCKETBUDGET_LOG", "pocketbudget=debug"),
        ]),
        &dirs(),
    )
    .unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/pb"));
    assert_eq!(config.export_dir, PathBuf::from("/home/u/exports"));
    assert_eq!(config.currency, "EUR");
    assert_eq!(config.log_filter, "pocketbudget=debug");
}

#[test]
fn test_blank_env_values_are_ignored() {
    let config = Config::resolve(lookup(&[("POCKETBUDGET_CURRENCY", "  ")]), &dirs()).unwrap();
    assert_eq!(config.currency, DEFAULT_CURRENCY);
}

#[test]
fn test_export_dir_falls_back_to_home_then_cwd() {
    let mut d = dirs();
    d.download = None;
    let config = Config::resolve(lookup(&[]), &d).unwrap();
    assert_eq!(config.export_dir, PathBuf::from("/home/u"));

    d.home = None;
    let config = Config::resolve(lookup(&[]), &d).unwrap();
    assert_eq!(config.export_dir, PathBuf::from("."));
}

#[test]
fn test_missing_data_dir_is_an_error() {
    let d = PlatformDirs::default();
    assert!(Config::resolve(lookup(&[]), &d).is_err());
    assert!(Config::resolve(lookup(&[("POCKETBUDGET_DATA_DIR", "/x")]), &d).is_ok());
}

#[test]
fn test_expand_home() {
    assert_eq!(expand_home("~/a/b", &dirs()), "/home/u/a/b");
    assert_eq!(expand_home("/abs", &dirs()), "/abs");
    assert_eq!(expand_home("~/a", &PlatformDirs::default()), "~/a");
}
