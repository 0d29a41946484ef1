//! Distributed in-memory cache

use plinth_core::{Backend, PlatformConfig, PlatformService};
use std::any::Any;

/// Redis-backed cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisCacheServices {
    host: String,
    port: u16,
    db: u8,
}

impl RedisCacheServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            host: config.cache.host.clone(),
            port: config.cache.port,
            db: config.cache.db,
        }
    }

    /// Connection URL for the Redis client
    pub fn connection_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

impl PlatformService for RedisCacheServices {
    fn backend(&self) -> Backend {
        Backend::RedisCache
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
