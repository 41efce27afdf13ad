#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigLoader};
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    fn load_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ConfigLoader::load_with_env(None, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.flume_address(), "localhost:44444");
        assert_eq!(config.flume_url(), "http://localhost:44444");
        assert_eq!(config.listen_address(), "0.0.0.0:3000");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_env_overrides() {
        let config = load_with(&[
            ("FLUME_HOST", "flume.internal"),
            ("FLUME_PORT", "5140"),
            ("PORT", "8080"),
            ("REQUEST_TIMEOUT_MS", "2500"),
            ("LOG_DIR", "/var/log/relay"),
        ])
        .unwrap();

        assert_eq!(config.flume_address(), "flume.internal:5140");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/relay")));
    }

    #[test]
    fn test_empty_env_value_keeps_default() {
        let config = load_with(&[("FLUME_HOST", ""), ("FLUME_PORT", "  ")]).unwrap();
        assert_eq!(config.flume_address(), "localhost:44444");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = load_with(&[("FLUME_PORT", "not-a-port")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_is_layered_under_env() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "flume_host = \"collector\"\nflume_port = 41414\nport = 4000\npublic_dir = \"/srv/www\""
        )
        .unwrap();

        let config = ConfigLoader::load_with_env(Some(file.path()), |key| match key {
            "PORT" => Some("4100".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.flume_address(), "collector:41414");
        assert_eq!(config.port, 4100);
        assert_eq!(config.public_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("relay.toml");
        assert!(ConfigLoader::load_with_env(Some(missing.as_path()), |_| None).is_err());
    }

    #[test]
    #[serial]
    fn test_load_reads_process_environment() {
        std::env::set_var("FLUME_HOST", "env-collector");
        std::env::set_var("FLUME_PORT", "45454");
        let config = ConfigLoader::load(None);
        std::env::remove_var("FLUME_HOST");
        std::env::remove_var("FLUME_PORT");

        assert_eq!(config.unwrap().flume_address(), "env-collector:45454");
    }
}
