use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;

use confik::{Configuration, EnvSource, Source};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct ServerConfig {
    #[confik(default = default_host())]
    pub host: String,
    #[confik(default = 8080_u16)]
    pub port: u16,
    #[confik(default = 256_usize)]
    pub max_payload_kb: usize,
    #[confik(default = default_cors_origins())]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_kb.saturating_mul(1024)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 8080,
            max_payload_kb: 256,
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize, Configuration)]
pub struct AppConfig {
    /// Prefix for `/emoji/<file>.svg` asset URLs, e.g. a CDN origin.
    #[confik(default = String::new())]
    pub cdn_host: String,
    /// Run the catch-phrase image rewrites after the emoji scan.
    #[confik(default = true)]
    pub literal_replacements: bool,
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cdn_host: String::new(),
            literal_replacements: true,
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `config.yml` next to the manifest, then the environment
    /// (`CDN_HOST`, `SERVER__PORT`, ...). A broken layer means defaults throughout.
    pub fn load() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            debug!("no .env loaded: {err}");
        }

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE);
        let yaml = match fs::read_to_string(&path) {
            Ok(doc) => Some(doc),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("ignoring {}: {err}", path.display());
                None
            }
        };

        Self::build(yaml.as_deref()).unwrap_or_else(|err| {
            warn!("invalid emoji service configuration ({err}); using defaults");
            Self::default()
        })
    }

    /// Layer an optional YAML document and the process environment over the defaults.
    pub fn build(yaml: Option<&str>) -> Result<Self, confik::Error> {
        let mut builder = Self::builder();
        if let Some(doc) = yaml {
            builder.override_with(YamlSource(doc.to_owned()));
        }
        builder.override_with(EnvSource::new());
        builder.try_build()
    }

    /// Asset host without a trailing slash, ready to prefix `/emoji/...`.
    pub fn asset_host(&self) -> &str {
        self.cdn_host.trim_end_matches('/')
    }
}

const CONFIG_FILE: &str = "config.yml";

/// An in-memory YAML document. The service keeps no secrets in it.
#[derive(Debug)]
struct YamlSource(String);

impl<T> Source<T> for YamlSource
where
    T: DeserializeOwned + confik::ConfigurationBuilder,
{
    fn allows_secrets(&self) -> bool {
        false
    }

    fn provide(&self) -> Result<T, Box<dyn Error + Sync + Send>> {
        Ok(serde_yaml::from_str(&self.0)?)
    }
}
