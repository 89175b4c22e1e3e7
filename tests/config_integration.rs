use quarry_ui::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("QUARRY_SERVER__PORT");
        env::remove_var("QUARRY_SERVER__HOST");
        env::remove_var("QUARRY_UI__TITLE");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("STATIC_DIR");
    }
}

fn load(args: &[&str]) -> AppConfig {
    let mut argv = vec!["quarry-ui"];
    argv.extend_from_slice(args);
    AppConfig::load_from_args(argv).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.ui.static_dir, "static");
    assert_eq!(config.ui.title, "Quarry UI");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("QUARRY_SERVER__PORT", "9090");
        env::set_var("QUARRY_UI__TITLE", "Storefront");
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.title, "Storefront");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("quarry.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
ui:
  static_dir: "public"
"#,
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.static_dir, "public");
    // Keys missing from the file keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["quarry-ui", "--config", "/nonexistent/quarry.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_beats_env_and_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("quarry.yaml");
    fs::write(&file_path, "server:\n  port: 7070\n").expect("Failed to write temp config");
    unsafe {
        env::set_var("QUARRY_SERVER__PORT", "9090");
    }

    let path = file_path.to_string_lossy().into_owned();
    let config = load(&["--config", &path, "--port", "8181", "--static-dir", "assets"]);
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.ui.static_dir, "assets");

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("quarry.yaml");
    fs::write(&file_path, "server:\n  port: 7070\n").expect("Failed to write temp config");
    unsafe {
        env::set_var("QUARRY_SERVER__PORT", "9090");
    }

    let path = file_path.to_string_lossy().into_owned();
    let config = load(&["--config", &path]);
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}
