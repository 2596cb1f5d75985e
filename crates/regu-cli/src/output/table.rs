//! Plain-text table layout with status coloring.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;

/// Draw an aligned table with a header row and a dashed divider.
#[must_use]
pub fn draw(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let widths = column_widths(headers, rows, options.max_width);

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(title, width)| pad(&clip(title, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(visible_len(&header));

    let mut lines = vec![header, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let raw = row.get(index).map_or("-", String::as_str);
                let clipped = clip(raw, *width);
                let right_align = is_numeric(&clipped);
                let text = if options.color {
                    paint(&clipped)
                } else {
                    clipped
                };
                pad(&text, *width, right_align)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }

    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> Vec<usize> {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or(MIN_COLUMN)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }
    widths
}

/// Narrow the widest shrinkable column one step at a time until the table
/// fits, or no column can give up another character.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * 2;
    loop {
        let total = widths.iter().sum::<usize>() + gaps;
        if total <= max_width {
            return;
        }

        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else { return };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return String::from("…");
    }
    let mut clipped: String = value.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

/// Status words get traffic-light colors in table mode.
fn paint(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "compliant" | "generated" | "low" | "true" => Some("32"),
        "pending" | "medium" => Some("33"),
        "non_compliant" | "failed" | "high" | "false" => Some("31"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn visible_len(value: &str) -> usize {
    let mut length = 0;
    let mut in_escape = false;
    for ch in value.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == '\u{1b}' {
            in_escape = true;
        } else {
            length += 1;
        }
    }
    length
}
