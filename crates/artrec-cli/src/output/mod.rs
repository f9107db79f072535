use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod text;

pub use text::Render;

/// Render a response to a string in the requested format.
pub fn render<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&value.table_value()?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Serialize for table rendering.
pub fn to_table_value<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> String {
    let options = table_options();

    match value {
        Value::Array(items) => render_array_table(items),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            table::render_entity_table(&headers, &rows, options)
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(scalar)]];
            table::render_entity_table(&headers, &rows, options)
        }
    }
}

/// Columns are the union of all row keys.
fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v
            .as_f64()
            .filter(|_| v.is_f64())
            .map_or_else(|| v.to_string(), |f| format!("{f:.4}")),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use artrec_core::enums::Strategy;
    use artrec_core::ids::ArticleId;
    use artrec_core::responses::{DatasetStats, RecommendationResponse, ScoredArticle};

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    fn response() -> RecommendationResponse {
        RecommendationResponse::new(
            Strategy::TopRanked,
            vec![
                ScoredArticle {
                    article_id: ArticleId(1430),
                    title: "using pixiedust for fast, flexible, and easier data analysis"
                        .to_string(),
                    score: 937.0,
                },
                ScoredArticle {
                    article_id: ArticleId(1314),
                    title: "healthcare python streaming application demo".to_string(),
                    score: 614.0,
                },
            ],
        )
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&response(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["strategy"], "top_ranked");
        assert_eq!(parsed["articles"][0]["article_id"], 1430);
        assert_eq!(parsed["total_results"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&response(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["articles"][1]["article_id"], 1314);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_lists_articles() {
        let out = render(&response(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("article_id"));
        assert!(lines[0].contains("title"));
        assert!(lines[2].contains("1430"));
        assert!(lines[2].contains("937.0000"));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&DatasetStats::default(), OutputFormat::Table)
            .expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("catalog_articles"));
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["article_id", "title", "score"];
        let rows = vec![
            vec!["1".to_string(), "short".to_string(), "1.0".to_string()],
            vec![
                "1430".to_string(),
                "a much longer title".to_string(),
                "937.0".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("article_id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].len(), lines[3].len());
    }
}
