//! Insight generation for one (email, role) pair

use crate::error::EngineError;
use crate::parser::parse_json_object;
use crate::prompt;
use insights_domain::{ChatClient, ChatRequest, InsightBundle};
use std::fmt::Display;
use tracing::info;

/// Generate the insight bundle for an email and its resolved role.
///
/// Issues three completion requests (use cases, example queries,
/// visualizations), each required to return a single JSON object. The three
/// requests have no ordering dependency on each other; they are issued
/// sequentially, matching the single configured client handle's blocking
/// request model.
pub async fn generate_insights<C>(
    client: &C,
    email: &str,
    role: &str,
) -> Result<InsightBundle, EngineError>
where
    C: ChatClient + Sync,
    C::Error: Display,
{
    info!("Generating PromptQL insights for {} with role {}", email, role);

    let use_cases = complete_json(client, prompt::use_cases(role)).await?;
    let example_queries = complete_json(client, prompt::example_queries(role)).await?;
    let visualizations = complete_json(client, prompt::visualizations(role)).await?;

    Ok(InsightBundle {
        use_cases,
        example_queries,
        visualizations,
    })
}

async fn complete_json<C>(client: &C, request: ChatRequest) -> Result<serde_json::Value, EngineError>
where
    C: ChatClient + Sync,
    C::Error: Display,
{
    let content = client
        .complete(&request)
        .await
        .map_err(|e| EngineError::Llm(e.to_string()))?;
    parse_json_object(&content)
}
