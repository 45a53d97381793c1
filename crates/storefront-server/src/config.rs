//! Server Configuration
//!
//! Read from environment variables (a `.env` file is loaded first).

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Postgres connection string; `None` runs on the in-memory store
    pub database_url: Option<String>,

    /// Postgres pool size
    pub max_connections: u32,

    /// Seed the in-memory store with demo products
    pub seed_demo_products: bool,

    /// Directory holding the compiled web frontend
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            database_url: None,
            max_connections: 5,
            seed_demo_products: false,
            static_dir: "static".into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            seed_demo_products: lookup("SEED_DEMO_PRODUCTS")
                .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes")),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}
