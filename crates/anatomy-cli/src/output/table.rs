const FIELD_HEADER: &str = "field";
const VALUE_HEADER: &str = "value";
const SEPARATOR: &str = "  ";
const MIN_VALUE_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `field  value` rows. The field column is never truncated; the value
/// column shrinks to fit `max_width` but never below a few characters.
#[must_use]
pub fn render_field_table(rows: &[(String, String)], options: TableOptions) -> String {
    let field_width = rows
        .iter()
        .map(|(field, _)| field.chars().count())
        .chain(std::iter::once(FIELD_HEADER.len()))
        .max()
        .unwrap_or(0);

    let natural_value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = options.max_width.map_or(natural_value_width, |max| {
        let budget = max.saturating_sub(field_width + SEPARATOR.len());
        natural_value_width.min(budget.max(MIN_VALUE_WIDTH))
    });

    let header = format!("{}{SEPARATOR}{VALUE_HEADER}", pad(FIELD_HEADER, field_width));
    let divider = "-".repeat(field_width + SEPARATOR.len() + value_width);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header);
    lines.push(divider);
    for (field, value) in rows {
        let value = truncate_text(value, value_width);
        let value = if options.color {
            colorize_status(&value)
        } else {
            value
        };
        lines.push(format!("{}{SEPARATOR}{value}", pad(field, field_width)));
    }
    lines.join("\n")
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn colorize_status(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "active" | "true" | "premium" | "professional" => Some("32"),
        "trial" | "basic" => Some("33"),
        "inactive" | "false" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(field, value)| ((*field).to_string(), (*value).to_string()))
            .collect()
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn values_line_up_after_the_longest_field() {
        let out = render_field_table(
            &rows(&[("plan", "Basic"), ("trial_days_remaining", "11")]),
            PLAIN,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "field                 value");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "plan                  Basic");
        assert_eq!(lines[3], "trial_days_remaining  11");
    }

    #[test]
    fn long_values_are_truncated_to_fit() {
        let long_bio = "x".repeat(80);
        let out = render_field_table(
            &rows(&[("identity.bio", &long_bio)]),
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(out.lines().all(|line| line.chars().count() <= 40));
        assert!(out.contains('…'));
    }

    #[test]
    fn narrow_terminals_keep_a_minimum_value_width() {
        let out = render_field_table(
            &rows(&[("identity.created_at", "2026-06-15T10:00:00+00:00")]),
            TableOptions {
                max_width: Some(10),
                color: false,
            },
        );
        let value = out.lines().nth(2).unwrap().split_whitespace().nth(1).unwrap();
        assert_eq!(value.chars().count(), MIN_VALUE_WIDTH);
    }

    #[test]
    fn status_words_are_colored() {
        assert_eq!(colorize_status("active"), "\u{1b}[32mactive\u{1b}[0m");
        assert_eq!(colorize_status("Trial"), "\u{1b}[33mTrial\u{1b}[0m");
        assert_eq!(colorize_status("jane"), "jane");

        let out = render_field_table(
            &rows(&[("status", "inactive")]),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.ends_with("\u{1b}[31minactive\u{1b}[0m"));
    }
}
