//! Result serialization to JSON and Markdown.

use crate::cli::OutputFormat;
use crate::error::Result;
use insights_domain::ResultRecord;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Render the records and write them to the named file.
///
/// The base name gains the format's extension when it lacks it. Returns the
/// path actually written.
pub fn write_report(
    records: &[ResultRecord],
    format: OutputFormat,
    base_name: &str,
) -> Result<PathBuf> {
    let path = normalized_path(base_name, format);
    let document = render(records, format)?;
    fs::write(&path, document)?;
    info!("Results saved to {}", path.display());
    Ok(path)
}

/// Output path for a base name, normalized to carry the format's extension.
pub fn normalized_path(base_name: &str, format: OutputFormat) -> PathBuf {
    let suffix = format!(".{}", format.extension());
    if base_name.ends_with(&suffix) {
        PathBuf::from(base_name)
    } else {
        PathBuf::from(format!("{}{}", base_name, suffix))
    }
}

/// Render the full record list in the selected format.
pub fn render(records: &[ResultRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Markdown => Ok(render_markdown(records)),
    }
}

fn render_markdown(records: &[ResultRecord]) -> String {
    let mut doc = String::from("# PromptQL Analysis Results\n\n");

    for record in records {
        match record {
            ResultRecord::Failure { email, error } => {
                doc.push_str(&format!("## {}\n\n", email));
                doc.push_str(&format!("**Error:** {}\n\n", error));
            }
            ResultRecord::Success {
                email,
                inferred_role,
                use_cases,
                example_queries,
                visualizations,
            } => {
                doc.push_str(&format!("## {}\n\n", email));
                doc.push_str(&format!("**Inferred Role:** {}\n\n", inferred_role));

                doc.push_str("### Use Cases\n\n");
                for item in section_items(use_cases, "use_cases") {
                    doc.push_str(&format!("#### {}\n", field(item, "title")));
                    doc.push_str(&format!("{}\n\n", field(item, "description")));
                }

                doc.push_str("### Example Queries\n\n");
                for item in section_items(example_queries, "queries") {
                    doc.push_str(&format!("#### {}\n", field(item, "title")));
                    doc.push_str(&format!("{}\n\n", field(item, "description")));
                    doc.push_str("```\n");
                    doc.push_str(&format!("{}\n", field(item, "query")));
                    doc.push_str("```\n\n");
                }

                doc.push_str("### Visualization Ideas\n\n");
                for item in section_items(visualizations, "visualizations") {
                    doc.push_str(&format!("#### {}\n", field(item, "title")));
                    doc.push_str(&format!("{}\n\n", field(item, "description")));
                    doc.push_str(&format!(
                        "**Visualization Type:** {}\n\n",
                        field(item, "visualization_type")
                    ));
                }
            }
        }

        doc.push_str("---\n\n");
    }

    doc
}

/// Items of one insight section.
///
/// The model is asked for an object holding an array under a conventional
/// key; a bare array is accepted too, and any other shape degrades to an
/// empty section rather than failing the record.
fn section_items<'a>(section: &'a Value, key: &str) -> &'a [Value] {
    match section {
        Value::Array(items) => items,
        Value::Object(_) => section
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// String field of an item, empty when absent or non-string.
fn field<'a>(item: &'a Value, name: &str) -> &'a str {
    item.get(name).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_domain::InsightBundle;
    use serde_json::json;

    fn success_record() -> ResultRecord {
        ResultRecord::success(
            "test@example.com",
            "Data Scientist",
            InsightBundle {
                use_cases: json!({"use_cases": [
                    {"title": "Case A", "description": "Desc A"},
                    {"title": "Case B", "description": "Desc B"}
                ]}),
                example_queries: json!({"queries": [
                    {"title": "Query", "description": "Desc", "query": "SELECT * FROM data"}
                ]}),
                visualizations: json!({"visualizations": [
                    {"title": "Viz", "description": "Desc", "visualization_type": "Bar Chart"},
                    {"title": "Viz2", "description": "Desc", "visualization_type": "Line"},
                    {"title": "Viz3", "description": "Desc", "visualization_type": "Map"}
                ]}),
            },
        )
    }

    #[test]
    fn test_markdown_structure() {
        let doc = render(&[success_record()], OutputFormat::Markdown).unwrap();

        assert!(doc.contains("# PromptQL Analysis Results"));
        assert!(doc.contains("## test@example.com"));
        assert!(doc.contains("**Inferred Role:** Data Scientist"));
        assert!(doc.contains("### Use Cases"));
        assert!(doc.contains("### Example Queries"));
        assert!(doc.contains("### Visualization Ideas"));
        assert!(doc.contains("---"));
    }

    #[test]
    fn test_markdown_item_counts() {
        let doc = render(&[success_record()], OutputFormat::Markdown).unwrap();

        // 2 use cases + 1 query + 3 visualizations
        assert_eq!(doc.matches("#### ").count(), 6);
        assert_eq!(doc.matches("**Visualization Type:**").count(), 3);
    }

    #[test]
    fn test_markdown_query_is_fenced() {
        let doc = render(&[success_record()], OutputFormat::Markdown).unwrap();
        assert!(doc.contains("```\nSELECT * FROM data\n```"));
    }

    #[test]
    fn test_markdown_error_record() {
        let record = ResultRecord::failure("bad@example.com", "connection refused");
        let doc = render(&[record], OutputFormat::Markdown).unwrap();

        assert!(doc.contains("## bad@example.com"));
        assert!(doc.contains("**Error:** connection refused"));
        assert!(!doc.contains("### Use Cases"));
    }

    #[test]
    fn test_markdown_degrades_on_unexpected_shapes() {
        let record = ResultRecord::success(
            "odd@example.com",
            "Engineer",
            InsightBundle {
                // Bare array instead of the keyed object
                use_cases: json!([{"title": "Direct", "description": "works"}]),
                // Object under an unexpected key
                example_queries: json!({"items": []}),
                // Not a container at all
                visualizations: json!("nothing here"),
            },
        );

        let doc = render(&[record], OutputFormat::Markdown).unwrap();
        assert!(doc.contains("#### Direct"));
        assert!(doc.contains("### Example Queries"));
        assert!(doc.contains("### Visualization Ideas"));
        // Only the bare-array section produced items
        assert_eq!(doc.matches("#### ").count(), 1);
    }

    #[test]
    fn test_markdown_missing_fields_render_empty() {
        let record = ResultRecord::success(
            "partial@example.com",
            "Engineer",
            InsightBundle {
                use_cases: json!({"use_cases": [{"title": "Only title"}]}),
                example_queries: json!({"queries": [{}]}),
                visualizations: json!({"visualizations": []}),
            },
        );

        let doc = render(&[record], OutputFormat::Markdown).unwrap();
        assert!(doc.contains("#### Only title"));
        // The query item still renders a fenced block, just empty
        assert!(doc.contains("```\n\n```"));
    }

    #[test]
    fn test_json_round_trip() {
        let records = vec![
            success_record(),
            ResultRecord::failure("bad@example.com", "timeout"),
        ];

        let doc = render(&records, OutputFormat::Json).unwrap();
        let parsed: Vec<ResultRecord> = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_extension_normalization() {
        assert_eq!(
            normalized_path("results", OutputFormat::Json),
            PathBuf::from("results.json")
        );
        assert_eq!(
            normalized_path("results.json", OutputFormat::Json),
            PathBuf::from("results.json")
        );
        assert_eq!(
            normalized_path("results", OutputFormat::Markdown),
            PathBuf::from("results.markdown")
        );
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("out").to_string_lossy().into_owned();

        let path = write_report(&[success_record()], OutputFormat::Json, &base).unwrap();

        assert!(path.to_string_lossy().ends_with("out.json"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("test@example.com"));
    }
}
