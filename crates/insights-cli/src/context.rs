//! Role-context file loading.

use crate::error::{CliError, Result};
use insights_domain::RoleContext;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load and validate a role-context file.
///
/// The file must hold a JSON object mapping email strings to role strings.
/// A missing file, invalid JSON, a non-object top level, and non-string
/// values are each rejected with a distinct error kind, before any email
/// is processed.
pub fn load_role_context(path: &Path) -> Result<RoleContext> {
    if !path.exists() {
        return Err(CliError::ContextNotFound(path.to_path_buf()));
    }

    info!("Loading role context from {}", path.display());

    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let context = RoleContext::from_value(value)?;

    info!("Loaded context for {} email(s)", context.len());
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_domain::RoleContextError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_context_file() {
        let file = file_with(r#"{"a@x.com": "Engineer", "b@x.com": "Analyst"}"#);
        let context = load_role_context(file.path()).unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context.role_for("a@x.com"), Some("Engineer"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_role_context(Path::new("/nonexistent/roles.json"));
        assert!(matches!(result, Err(CliError::ContextNotFound(_))));
    }

    #[test]
    fn test_invalid_json() {
        let file = file_with("{not json");
        let result = load_role_context(file.path());
        assert!(matches!(result, Err(CliError::Serialization(_))));
    }

    #[test]
    fn test_top_level_array() {
        let file = file_with(r#"["a@x.com"]"#);
        let result = load_role_context(file.path());
        assert!(matches!(
            result,
            Err(CliError::Context(RoleContextError::NotAnObject))
        ));
    }

    #[test]
    fn test_non_string_value() {
        let file = file_with(r#"{"a@x.com": {"role": "Engineer"}}"#);
        let result = load_role_context(file.path());
        assert!(matches!(
            result,
            Err(CliError::Context(RoleContextError::NonStringRoles(_)))
        ));
    }
}
