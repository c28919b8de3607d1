use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub defaults: Option<DefaultsCfg>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<String>,
    pub json: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultsCfg {
    /// Site/project id used when `MULTIBLAST_SITE` is not set.
    pub site: Option<String>,
}

impl UserConfig {
    pub fn default_site(&self) -> Option<&str> {
        self.defaults
            .as_ref()
            .and_then(|d| d.site.as_deref())
            .filter(|s| !s.is_empty())
    }
}

pub fn load_user_config(home: &Path) -> anyhow::Result<Option<UserConfig>> {
    let path = home.join("config.toml");
    if !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)?;
    let cfg: UserConfig = toml::from_str(&s)?;
    Ok(Some(cfg))
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_user_config(dir.path()).expect("load").is_none());
    }

    #[test]
    fn reads_logging_and_default_site() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
[logging]
level = "debug"
json = true

[defaults]
site = "PlasmoDB"
"#,
        )
        .expect("write");
        let cfg = load_user_config(dir.path()).expect("load").expect("some");
        let logging = cfg.logging.as_ref().expect("logging");
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.json, Some(true));
        assert_eq!(logging.to_file, None);
        assert_eq!(cfg.default_site(), Some("PlasmoDB"));
    }

    #[test]
    fn empty_default_site_is_ignored() {
        let cfg: UserConfig = toml::from_str("[defaults]\nsite = \"\"\n").expect("parse");
        assert_eq!(cfg.default_site(), None);
    }

    #[test]
    fn expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/tmp/x"), PathBuf::from("/tmp/x"));
    }
}
