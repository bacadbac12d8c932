use serde::Deserialize;

/// Which connection-acceptance model the server runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptorKind {
    /// Async accept loop, one detached task per connection.
    Spawn,
    /// Single-threaded edge-triggered readiness loop (mio).
    Poll,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub acceptor: AcceptorKind,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4001".to_string(),
            acceptor: AcceptorKind::Spawn,
        }
    }
}

/// Where documents live and what a directory request resolves to.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub root: String,
    pub index: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: "htdocs".to_string(),
            index: "index.html".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

impl Config {
    /// Loads configuration from the YAML file named by `EMBERD_CONFIG`
    /// (default `emberd.yaml`), falling back to built-in defaults when the
    /// file is absent. `LISTEN` and `DOCUMENT_ROOT` override the file.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("EMBERD_CONFIG").unwrap_or_else(|_| "emberd.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => serde_yaml::from_str(&text)?,
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOCUMENT_ROOT") {
            cfg.content.root = root;
        }

        Ok(cfg)
    }
}
