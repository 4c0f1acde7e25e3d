use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}

#[test]
fn from_env_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("SITE_ROOT", "/srv/shop");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root.as_deref(), Some("/srv/shop"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_invalid_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().contains("eighty"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_blank_site_root() {
    unsafe {
        clear_server_env();
        std::env::set_var("SITE_ROOT", "  ");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ConfigError::EmptySiteRoot)));

    unsafe { clear_server_env() };
}
