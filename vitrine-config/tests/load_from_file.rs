use std::fs;

use tempfile::TempDir;
use vitrine_config::PageConfig;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write config fixture");
    path
}

#[test]
fn toml_file_is_loaded_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "page.toml",
        r#"
log_filter = "vitrine=debug"

[carousel]
autoplay_interval_ms = 7000
autoplay_on_mount = false

[copy]
pause_label = "Pause"
"#,
    );

    let config = PageConfig::load_from_file(&path).unwrap();
    assert_eq!(config.carousel.autoplay_interval_ms, 7_000);
    assert!(!config.carousel.autoplay_on_mount);
    assert_eq!(config.copy.pause_label, "Pause");
    assert_eq!(config.copy.resume_label, "▶ Lecture");
    assert_eq!(config.log_filter, "vitrine=debug");
}

#[test]
fn json_file_is_loaded_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "page.json",
        r#"{ "form": { "min_birth_year": 1920, "max_birth_year": 2010 } }"#,
    );

    let config = PageConfig::load_from_file(&path).unwrap();
    assert_eq!(config.form.min_birth_year, 1920);
    assert_eq!(config.form.max_birth_year, 2010);
}

#[test]
fn unknown_extension_falls_back_to_sniffing() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "page.conf", r#"{ "form": { "reset_delay_ms": 10 } }"#);

    let config = PageConfig::load_from_file(&path).unwrap();
    assert_eq!(config.form.reset_delay_ms, 10);
}

#[test]
fn missing_file_mentions_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = PageConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn guard_rail_violations_fail_the_load() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "page.toml", "[carousel]\nautoplay_interval_ms = 0\n");

    let err = PageConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("autoplay_interval_ms"));
}

#[test]
fn defaults_survive_a_toml_round_trip() {
    let rendered = toml::to_string(&PageConfig::default()).unwrap();
    let parsed = PageConfig::parse_from_str(&rendered, "round-trip").unwrap();
    assert_eq!(parsed, PageConfig::default());
}
