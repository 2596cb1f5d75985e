//! Output rendering for command responses.
//!
//! Every handler ends by serializing a response struct through [`output`].
//! `json` pretty-prints, `raw` emits one compact line for scripting, and
//! `table` lays the value out as aligned columns.

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a response in the chosen format and print it.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Render a serializable response to a string.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(tabulate(&serde_json::to_value(value)?, options))
        }
    }
}

fn tabulate(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => tabulate_list(items, options),
        Value::Object(fields) => {
            let rows = fields
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::draw(&["field", "value"], &rows, options)
        }
        scalar => table::draw(&["value"], &[vec![cell(scalar)]], options),
    }
}

fn tabulate_list(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    // Lists of plain values get a single column; lists of objects get one
    // column per key, in first-seen order.
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![cell(item)])
            .collect::<Vec<_>>();
        return table::draw(&["value"], &rows, options);
    }

    let mut columns = Vec::<String>::new();
    for item in items {
        if let Some(fields) = item.as_object() {
            for key in fields.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let headers = columns.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|fields| {
            columns
                .iter()
                .map(|column| fields.get(column).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::draw(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| String::from("?")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        status: &'static str,
        unread: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let row = Row {
            id: "alr-1",
            status: "pending",
            unread: 4,
        };
        let out = render(&row, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "alr-1");
        assert_eq!(parsed["unread"], 4);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let row = Row {
            id: "alr-1",
            status: "pending",
            unread: 4,
        };
        let out = render(&row, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["status"], "pending");
    }

    #[test]
    fn table_render_for_object_lists_fields() {
        let row = Row {
            id: "alr-1",
            status: "pending",
            unread: 4,
        };
        let out = render(&row, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("status"));
        assert!(out.contains("pending"));
    }

    #[test]
    fn table_render_for_list_uses_one_column_per_key() {
        let rows = vec![
            Row {
                id: "cmp-1",
                status: "compliant",
                unread: 0,
            },
            Row {
                id: "cmp-2",
                status: "pending",
                unread: 2,
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("table should have a header");
        assert!(header.contains("id"));
        assert!(header.contains("status"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn null_fields_render_as_dash() {
        #[derive(Serialize)]
        struct Sparse {
            id: &'static str,
            download_url: Option<&'static str>,
        }

        let out = render(
            &Sparse {
                id: "rpt-1",
                download_url: None,
            },
            OutputFormat::Table,
        )
        .expect("table render should work");
        let url_line = out
            .lines()
            .find(|line| line.contains("download_url"))
            .expect("field should be listed");
        assert!(url_line.contains('-'));
    }

    #[test]
    fn uneven_rows_pad_missing_cells() {
        let rows = vec![
            vec!["rpt-1".to_string(), "generated".to_string()],
            vec!["rpt-2".to_string()],
        ];
        let out = table::draw(
            &["id", "status"],
            &rows,
            table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let last = out.lines().last().expect("row line");
        assert!(last.contains("rpt-2"));
        assert!(last.contains('-'));
    }
}
