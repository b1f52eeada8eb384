//! Result records produced for each analyzed email
//!
//! A record is either success-shaped (role plus the three insight structures)
//! or error-shaped (email plus the failure message). The two shapes are
//! distinguished by the presence of the `error` key, so the enum serializes
//! untagged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three model-generated JSON structures for one (email, role) pair.
///
/// Each field is required to be a JSON object when generated, but is
/// otherwise schema-free: the nested shape is whatever the model returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBundle {
    /// Use cases relevant to the role
    pub use_cases: Value,
    /// Example queries for the role's daily work
    pub example_queries: Value,
    /// Visualization suggestions for query results
    pub visualizations: Value,
}

/// One analysis result per input email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultRecord {
    /// The email was analyzed end to end
    Success {
        /// Input email address
        email: String,
        /// Role from context or inference
        inferred_role: String,
        /// Use cases relevant to the role
        use_cases: Value,
        /// Example queries for the role's daily work
        example_queries: Value,
        /// Visualization suggestions for query results
        visualizations: Value,
    },
    /// Processing this email failed; the batch continued
    Failure {
        /// Input email address
        email: String,
        /// Message of the failure encountered for this email
        error: String,
    },
}

impl ResultRecord {
    /// Build a success-shaped record from an insight bundle.
    pub fn success(
        email: impl Into<String>,
        inferred_role: impl Into<String>,
        insights: InsightBundle,
    ) -> Self {
        Self::Success {
            email: email.into(),
            inferred_role: inferred_role.into(),
            use_cases: insights.use_cases,
            example_queries: insights.example_queries,
            visualizations: insights.visualizations,
        }
    }

    /// Build an error-shaped record.
    pub fn failure(email: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failure {
            email: email.into(),
            error: error.into(),
        }
    }

    /// The input email this record belongs to.
    pub fn email(&self) -> &str {
        match self {
            Self::Success { email, .. } | Self::Failure { email, .. } => email,
        }
    }

    /// Whether this record is error-shaped.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_bundle() -> InsightBundle {
        InsightBundle {
            use_cases: json!({"use_cases": [{"title": "t", "description": "d"}]}),
            example_queries: json!({"queries": []}),
            visualizations: json!({"visualizations": []}),
        }
    }

    #[test]
    fn test_success_shape() {
        let record = ResultRecord::success("a@x.com", "Engineer", sample_bundle());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["inferred_role"], "Engineer");
        assert!(value.get("use_cases").is_some());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_shape() {
        let record = ResultRecord::failure("a@x.com", "connection refused");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["error"], "connection refused");
        assert!(value.get("inferred_role").is_none());
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            ResultRecord::success("a@x.com", "Engineer", sample_bundle()),
            ResultRecord::failure("b@x.com", "timeout"),
        ];

        let json = serde_json::to_string_pretty(&records).unwrap();
        let parsed: Vec<ResultRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_accessors() {
        let record = ResultRecord::failure("b@x.com", "timeout");
        assert_eq!(record.email(), "b@x.com");
        assert!(record.is_failure());

        let record = ResultRecord::success("a@x.com", "Engineer", sample_bundle());
        assert!(!record.is_failure());
    }
}
