use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Reads `HUNT_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match get("HUNT_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HUNT_PORT is not a valid port: {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: get("HUNT_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist_dir: get("HUNT_DIST_DIR").unwrap_or_else(|| "dist".to_owned()).into(),
            assets_dir: get("HUNT_ASSETS_DIR").unwrap_or_else(|| "assets".to_owned()).into(),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.dist_dir, PathBuf::from("dist"));
        assert_eq!(cfg.assets_dir, PathBuf::from("assets"));
        assert_eq!(cfg.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("HUNT_HOST", "0.0.0.0"),
            ("HUNT_PORT", " 8080 "),
            ("HUNT_DIST_DIR", "/srv/hunt"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/hunt"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("HUNT_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("HUNT_PORT"));

        assert!(ServerConfig::from_lookup(lookup(&[("HUNT_PORT", "70000")])).is_err());
    }
}
