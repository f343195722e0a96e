//! Terminal rendering of a [`CatalogView`].

use super::{CatalogView, TableBody, UserTone, NO_MATCHES_MESSAGE};
use std::fmt::Write;

const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Colour the user column by tone
    pub color: bool,
}

pub fn render_text(view: &CatalogView, options: &TextOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));

    let tabs: Vec<String> = view
        .user_tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                tab.label.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "Users:      {}", tabs.join("  "));

    let clear = if view.search.clear_button { "  [x]" } else { "" };
    let _ = writeln!(out, "Search:     \"{}\"{}", view.search.value, clear);

    let categories: Vec<&str> = view.categories.iter().map(|c| c.title.as_str()).collect();
    let _ = writeln!(out, "Categories: (All)  {}", categories.join("  "));
    let _ = writeln!(out);

    match &view.body {
        TableBody::NoMatches => {
            let _ = writeln!(out, "{}", NO_MATCHES_MESSAGE);
        }
        TableBody::Rows(rows) => {
            let cells: Vec<[String; 4]> = rows
                .iter()
                .map(|r| {
                    [
                        r.id.to_string(),
                        r.name.clone(),
                        r.category_label.clone(),
                        r.user_name.clone(),
                    ]
                })
                .collect();

            let mut widths = view.columns.map(|c| c.title.chars().count());
            for row in &cells {
                for (width, cell) in widths.iter_mut().zip(row.iter()) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let header: Vec<String> = view
                .columns
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| pad(c.title, *w))
                .collect();
            let _ = writeln!(out, "{}", header.join("  ").trim_end());
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            let _ = writeln!(out, "{}", rule.join("  "));

            for (row, product) in cells.iter().zip(rows.iter()) {
                let mut line = String::new();
                for (i, (cell, width)) in row.iter().zip(widths.iter()).enumerate() {
                    if i > 0 {
                        line.push_str("  ");
                    }
                    if i == 3 {
                        line.push_str(&tone(cell, product.user_tone, options.color));
                    } else {
                        line.push_str(&pad(cell, *width));
                    }
                }
                let _ = writeln!(out, "{}", line.trim_end());
            }
        }
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn tone(text: &str, tone: UserTone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        UserTone::Male => format!("{}{}{}", ANSI_BLUE, text, ANSI_RESET),
        UserTone::Female => format!("{}{}{}", ANSI_RED, text, ANSI_RESET),
        UserTone::None => text.to_string(),
    }
}
