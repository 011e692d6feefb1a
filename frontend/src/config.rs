use anyhow::{anyhow, bail};

/// Id of the element the app is mounted into
const DEF_MOUNT_ID: &str = "app";
/// History base, app paths are relative to it
const DEF_BASE: &str = "/";
const DEF_LOG_LEVEL: &str = "info";

/// Startup config, baked in at build time
#[derive(Debug, PartialEq)]
pub struct Config {
    pub mount_id: String,
    pub base: String,
    pub log_level: log::Level,
}

impl Config {
    /// Read `COINVIEW_MOUNT_ID`, `COINVIEW_BASE` and `COINVIEW_LOG_LEVEL`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            option_env!("COINVIEW_MOUNT_ID"),
            option_env!("COINVIEW_BASE"),
            option_env!("COINVIEW_LOG_LEVEL"),
        )
    }

    pub fn from_vars(
        mount_id: Option<&str>,
        base: Option<&str>,
        log_level: Option<&str>,
    ) -> anyhow::Result<Self> {
        // Accept selector form too: `#app`
        let mount_id = mount_id.unwrap_or(DEF_MOUNT_ID).trim_start_matches('#');
        if mount_id.is_empty() {
            bail!("mount id is empty");
        }

        let base = base.unwrap_or(DEF_BASE);
        if !base.starts_with('/') {
            bail!("history base `{base}` must start with `/`");
        }

        let level = log_level.unwrap_or(DEF_LOG_LEVEL);
        let log_level = level
            .parse()
            .map_err(|_| anyhow!("invalid log level `{level}`"))?;

        Ok(Self {
            mount_id: mount_id.to_string(),
            base: base.to_string(),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None, None).unwrap();
        assert_eq!(
            config,
            Config {
                mount_id: "app".into(),
                base: "/".into(),
                log_level: log::Level::Info,
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(Some("#root"), Some("/coins"), Some("debug")).unwrap();
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.base, "/coins");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_invalid() {
        assert!(Config::from_vars(Some("#"), None, None).is_err());
        assert!(Config::from_vars(None, Some("coins"), None).is_err());
        assert!(Config::from_vars(None, None, Some("loud")).is_err());
    }
}
