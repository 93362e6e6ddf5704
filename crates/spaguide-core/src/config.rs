use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SPAGUIDE_ENV", "development"));

    let bind_addr = parse_addr("SPAGUIDE_BIND_ADDR", "0.0.0.0:4000")?;
    let log_level = or_default("SPAGUIDE_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("SPAGUIDE_CATALOG_PATH", "./config/spas.yaml"));

    let default_page_size = parse_u32("SPAGUIDE_DEFAULT_PAGE_SIZE", "20")?;
    let max_page_size = parse_u32("SPAGUIDE_MAX_PAGE_SIZE", "100")?;

    if default_page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SPAGUIDE_DEFAULT_PAGE_SIZE".to_string(),
            reason: "page size must be positive".to_string(),
        });
    }
    if max_page_size < default_page_size {
        return Err(ConfigError::InvalidEnvVar {
            var: "SPAGUIDE_MAX_PAGE_SIZE".to_string(),
            reason: format!("must be at least the default page size ({default_page_size})"),
        });
    }

    let booking_fallback_email = or_default(
        "SPAGUIDE_BOOKING_FALLBACK_EMAIL",
        "bookings@balispaguide.example",
    );

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        default_page_size,
        max_page_size,
        booking_fallback_email,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_development() {
        assert_eq!(parse_environment("development"), Environment::Development);
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:4000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.catalog_path.to_string_lossy(), "./config/spas.yaml");
        assert_eq!(cfg.default_page_size, 20);
        assert_eq!(cfg.max_page_size, 100);
        assert_eq!(cfg.booking_fallback_email, "bookings@balispaguide.example");
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SPAGUIDE_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SPAGUIDE_BIND_ADDR"),
            "expected InvalidEnvVar(SPAGUIDE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_non_numeric_page_size() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SPAGUIDE_DEFAULT_PAGE_SIZE", "lots");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SPAGUIDE_DEFAULT_PAGE_SIZE"),
            "expected InvalidEnvVar(SPAGUIDE_DEFAULT_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_zero_page_size() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SPAGUIDE_DEFAULT_PAGE_SIZE", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SPAGUIDE_DEFAULT_PAGE_SIZE"),
            "expected InvalidEnvVar(SPAGUIDE_DEFAULT_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_when_max_below_default() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SPAGUIDE_MAX_PAGE_SIZE", "10");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SPAGUIDE_MAX_PAGE_SIZE"),
            "expected InvalidEnvVar(SPAGUIDE_MAX_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SPAGUIDE_ENV", "production");
        map.insert("SPAGUIDE_BIND_ADDR", "127.0.0.1:8080");
        map.insert("SPAGUIDE_DEFAULT_PAGE_SIZE", "10");
        map.insert("SPAGUIDE_MAX_PAGE_SIZE", "50");
        map.insert("SPAGUIDE_BOOKING_FALLBACK_EMAIL", "desk@example.com");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.max_page_size, 50);
        assert_eq!(cfg.booking_fallback_email, "desk@example.com");
    }
}
