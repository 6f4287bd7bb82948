use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output with `index.html`.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `SITE_*` variables, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match get("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: get("SITE_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            dist_dir: get("SITE_DIST").unwrap_or_else(|| "../dist".into()).into(),
            assets_dir: get("SITE_ASSETS").unwrap_or_else(|| "../assets".into()).into(),
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

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.index_file(), PathBuf::from("../dist/index.html"));
        assert_eq!(cfg.assets_dir, PathBuf::from("../assets"));
    }

    #[test]
    fn overrides() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST", "/srv/pizza"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/pizza/index.html"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
