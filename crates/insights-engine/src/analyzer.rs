//! Batch driver with per-email failure isolation

use crate::error::EngineError;
use crate::generator::generate_insights;
use crate::resolver::resolve_role;
use insights_domain::{ChatClient, ResultRecord, RoleContext};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{info, warn};

/// Drives the batch: one record per input email, in input order.
///
/// Holds the single configured client handle, which is read-only after
/// construction and shared by every request in the run.
pub struct Analyzer<C> {
    client: Arc<C>,
}

impl<C> Analyzer<C>
where
    C: ChatClient + Send + Sync,
    C::Error: Display,
{
    /// Create an analyzer around an injected chat client.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Borrow the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Analyze a list of emails, producing exactly one record per input
    /// email in input order.
    ///
    /// Failures are caught at this iteration boundary only: any error while
    /// resolving or generating for one email becomes that email's
    /// error-shaped record and the batch continues.
    pub async fn analyze(
        &self,
        emails: &[String],
        context: Option<&RoleContext>,
    ) -> Vec<ResultRecord> {
        let mut records = Vec::with_capacity(emails.len());

        for email in emails {
            match self.analyze_one(email, context).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Error processing email {}: {}", email, e);
                    records.push(ResultRecord::failure(email.as_str(), e.to_string()));
                }
            }
        }

        info!(
            "Batch complete: {} of {} email(s) succeeded",
            records.iter().filter(|r| !r.is_failure()).count(),
            records.len()
        );

        records
    }

    async fn analyze_one(
        &self,
        email: &str,
        context: Option<&RoleContext>,
    ) -> Result<ResultRecord, EngineError> {
        let role = resolve_role(self.client.as_ref(), email, context).await?;
        let insights = generate_insights(self.client.as_ref(), email, &role).await?;
        Ok(ResultRecord::success(email, role, insights))
    }
}
