//! Tests for the configuration system

use tvshows::config::Config;

#[test]
fn test_config_loads_defaults() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.database.port, 3306);
    assert_eq!(config.database.max_connections, 4);
    assert_eq!(config.database.timezone, "+08:00");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_has_all_required_fields() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert!(!config.database.host.is_empty());
    assert!(!config.database.name.is_empty());
    assert!(config.database.max_connections >= 1);
}
