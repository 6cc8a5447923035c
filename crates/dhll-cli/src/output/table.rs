//! Plain aligned tables for `--format table`.

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, shrinking the widest columns first when
/// the table would overflow `max_width`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().copied(), &widths, false);
    let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push("-".repeat(total));
    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).map_or("-", String::as_str));
        lines.push(join_cells(cells, &widths, options.color));
    }
    lines.join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], color: bool) -> String {
    let mut line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(cell, *width);
            let pad = width.saturating_sub(text.chars().count());
            let painted = if color { paint(&text) } else { text };
            format!("{painted}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(GAP);
    line.truncate(line.trim_end().len());
    line
}

fn shrink_to(widths: &mut [usize], max_width: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN)
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    let single_line = value.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut out: String = single_line.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Colour decision words: green for allow, red for block and locked.
fn paint(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "allow" | "allowed" | "true" | "active" => "32",
        "block" | "blocked" | "locked" | "false" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
