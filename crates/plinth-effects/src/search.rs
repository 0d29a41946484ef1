//! Full-text search

use plinth_core::{Backend, PlatformConfig, PlatformService};
use std::any::Any;

/// Elasticsearch-backed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElasticSearchServices {
    host: String,
    port: u16,
}

impl ElasticSearchServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            host: config.search.host.clone(),
            port: config.search.port,
        }
    }

    /// HTTP endpoint of the cluster
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Endpoint for searching one index
    pub fn search_url(&self, index: &str) -> String {
        format!("{}/{index}/_search", self.endpoint())
    }
}

impl PlatformService for ElasticSearchServices {
    fn backend(&self) -> Backend {
        Backend::ElasticSearch
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let search = ElasticSearchServices::from_config(&PlatformConfig::default());
        assert_eq!(search.endpoint(), "http://localhost:9200");
        assert_eq!(search.search_url("explorations"), "http://localhost:9200/explorations/_search");
    }
}
