use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Responses are single records, so the table is one `field | value` row per
/// leaf. Nested records such as `identity` and `subscription` become dotted
/// field names.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let mut rows = Vec::new();
    flatten("", &serde_json::to_value(value)?, &mut rows);
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(table::render_field_table(
        &rows,
        table::TableOptions {
            max_width: prefs.term_width,
            color: prefs.table_color,
        },
    ))
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let field = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&field, child, rows);
            }
        }
        leaf => {
            let field = if prefix.is_empty() { "value" } else { prefix };
            rows.push((field.to_string(), leaf_to_cell(leaf)));
        }
    }
}

fn leaf_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) if v.is_empty() => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use anatomy_core::subscription::SubscriptionDisplay;
    use anatomy_core::enums::SubscriptionStatus;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{flatten, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct StatusLike {
        authenticated: bool,
        identity: Option<IdentityLike>,
        trial_days_remaining: u32,
    }

    #[derive(Serialize)]
    struct IdentityLike {
        email: &'static str,
        bio: &'static str,
    }

    fn signed_in() -> StatusLike {
        StatusLike {
            authenticated: true,
            identity: Some(IdentityLike {
                email: "jane@example.com",
                bio: "",
            }),
            trial_days_remaining: 12,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&signed_in(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["identity"]["email"], "jane@example.com");
        assert_eq!(parsed["trial_days_remaining"], 12);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&signed_in(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn nested_records_become_dotted_fields() {
        let mut rows = Vec::new();
        flatten("", &serde_json::to_value(signed_in()).unwrap(), &mut rows);
        rows.sort();
        assert_eq!(
            rows,
            vec![
                ("authenticated".to_string(), "true".to_string()),
                ("identity.bio".to_string(), "-".to_string()),
                ("identity.email".to_string(), "jane@example.com".to_string()),
                ("trial_days_remaining".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn signed_out_identity_renders_as_dash() {
        let status = StatusLike {
            authenticated: false,
            identity: None,
            trial_days_remaining: 0,
        };
        let out = render(&status, OutputFormat::Table).expect("table render should work");
        let identity_line = out
            .lines()
            .find(|line| line.starts_with("identity"))
            .expect("identity row");
        assert!(identity_line.trim_end().ends_with('-'));
    }

    #[test]
    fn table_lists_fields_in_order() {
        let display = SubscriptionDisplay {
            plan: "Trial".into(),
            status: SubscriptionStatus::Active,
            auto_renew: false,
            start_date: "2026-01-01T00:00:00+00:00".into(),
            expires_at: String::new(),
        };
        let out = render(&display, OutputFormat::Table).expect("table render should work");
        let fields: Vec<&str> = out
            .lines()
            .skip(2)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(
            fields,
            vec!["auto_renew", "expires_at", "plan", "start_date", "status"]
        );
    }
}
