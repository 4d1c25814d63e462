use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Origin of the form front-end allowed by CORS
    pub cors_allowed_origin: String,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
            cors_allowed_origin: "http://localhost:3000".to_string(),
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?,
            None => 8080,
        };

        let mut config = Self::new(host, port);
        if let Some(raw) = lookup("SERVER_WORKERS") {
            config.workers = raw
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?;
        }
        if let Some(origin) = lookup("CORS_ALLOWED_ORIGIN") {
            config.cors_allowed_origin = origin;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
