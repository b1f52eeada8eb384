//! Role resolution for one email address

use crate::error::EngineError;
use crate::prompt;
use insights_domain::{ChatClient, RoleContext};
use std::fmt::Display;
use tracing::info;

/// Resolve the professional role for an email.
///
/// A context hit returns the mapped role directly with no network call.
/// Otherwise one inference request is issued and the trimmed content of the
/// first response choice is returned. Failures propagate to the caller; the
/// batch driver is responsible for isolation.
pub async fn resolve_role<C>(
    client: &C,
    email: &str,
    context: Option<&RoleContext>,
) -> Result<String, EngineError>
where
    C: ChatClient + Sync,
    C::Error: Display,
{
    if let Some(role) = context.and_then(|ctx| ctx.role_for(email)) {
        info!("Using provided role context for {}: {}", email, role);
        return Ok(role.to_string());
    }

    info!("Inferring role for email: {}", email);

    let request = prompt::role_inference(email);
    let content = client
        .complete(&request)
        .await
        .map_err(|e| EngineError::Llm(e.to_string()))?;

    let role = content.trim().to_string();
    info!("Inferred role for {}: {}", email, role);
    Ok(role)
}
