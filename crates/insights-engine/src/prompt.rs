//! Prompt construction for the four completion request kinds
//!
//! Role inference is classification-like and uses a low temperature; the
//! three insight requests favor some variety across runs and require a
//! JSON-object response body.

use insights_domain::ChatRequest;

/// Sampling temperature for role inference
pub const ROLE_TEMPERATURE: f32 = 0.3;

/// Sampling temperature for insight generation
pub const INSIGHT_TEMPERATURE: f32 = 0.7;

const ROLE_SYSTEM: &str = "You are an expert at inferring professional roles from email \
addresses. Provide concise, specific role descriptions.";

const USE_CASES_SYSTEM: &str = "You are an expert in PromptQL, an AI tool that provides \
AI-powered insights from internal company structured data (e.g. databases, and APIs). \
Provide specific, practical use cases relevant to the role of the user.";

const QUERIES_SYSTEM: &str = "You are an expert in PromptQL, a query language for large \
language models. Create specific, well-structured example queries.";

const VISUALIZATIONS_SYSTEM: &str = "You are an expert in data visualization and PromptQL. \
Suggest innovative but practical visualization approaches.";

/// Request asking the model to infer a role from an email address.
pub fn role_inference(email: &str) -> ChatRequest {
    ChatRequest::new(
        ROLE_SYSTEM,
        format!(
            "Based on this email address, what professional role might this person have? \
             Email: {}. Respond with just the role or job title, no explanation.",
            email
        ),
        ROLE_TEMPERATURE,
    )
}

/// Request for 3 role-specific PromptQL use cases.
pub fn use_cases(role: &str) -> ChatRequest {
    ChatRequest::new(
        USE_CASES_SYSTEM,
        format!(
            "For someone in the role of '{}', what are 3 specific use cases where PromptQL \
             could be valuable to discover insights from internal company structured data? \
             Respond in JSON format with an array of use case objects, each with 'title' \
             and 'description' fields.",
            role
        ),
        INSIGHT_TEMPERATURE,
    )
    .expect_json()
}

/// Request for 3 role-specific example PromptQL queries.
pub fn example_queries(role: &str) -> ChatRequest {
    ChatRequest::new(
        QUERIES_SYSTEM,
        format!(
            "Create 3 example PromptQL queries for someone in the role of '{}' that would \
             help them in their daily work. Each query should demonstrate a different \
             PromptQL feature or capability. Respond in JSON format with an array of query \
             objects, each with 'title', 'description', and 'query' fields.",
            role
        ),
        INSIGHT_TEMPERATURE,
    )
    .expect_json()
}

/// Request for 3 role-specific visualization suggestions.
pub fn visualizations(role: &str) -> ChatRequest {
    ChatRequest::new(
        VISUALIZATIONS_SYSTEM,
        format!(
            "For a '{}' using PromptQL queries, suggest 3 data visualizations that would \
             effectively showcase the results and capabilities of PromptQL. These should be \
             specific to their role and responsibilities. Respond in JSON format with an \
             array of visualization objects, each with 'title', 'description', and \
             'visualization_type' fields.",
            role
        ),
        INSIGHT_TEMPERATURE,
    )
    .expect_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_inference_includes_email() {
        let request = role_inference("datascientist@example.com");
        assert!(request.user_content().contains("datascientist@example.com"));
        assert_eq!(request.temperature, ROLE_TEMPERATURE);
        assert!(!request.json_response);
    }

    #[test]
    fn test_insight_requests_include_role() {
        for request in [
            use_cases("Data Scientist"),
            example_queries("Data Scientist"),
            visualizations("Data Scientist"),
        ] {
            assert!(request.user_content().contains("Data Scientist"));
            assert_eq!(request.temperature, INSIGHT_TEMPERATURE);
            assert!(request.json_response);
        }
    }

    #[test]
    fn test_insight_requests_ask_for_json() {
        assert!(use_cases("x").user_content().contains("JSON format"));
        assert!(example_queries("x").user_content().contains("JSON format"));
        assert!(visualizations("x").user_content().contains("JSON format"));
    }

    #[test]
    fn test_requests_are_distinct() {
        let a = use_cases("Engineer");
        let b = example_queries("Engineer");
        let c = visualizations("Engineer");
        assert_ne!(a.user_content(), b.user_content());
        assert_ne!(b.user_content(), c.user_content());
    }
}
