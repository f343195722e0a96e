//! Static HTML rendering of a [`CatalogView`].
//!
//! Produces the Bulma markup and `data-cy` hooks of the browser page so
//! existing selectors keep working against an exported snapshot.

use super::{CatalogView, TableBody, NO_MATCHES_MESSAGE};
use std::fmt::Write;

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css";

pub fn render_html(view: &CatalogView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "  <meta charset=\"utf-8\">");
    let _ = writeln!(out, "  <title>{}</title>", escape(view.title));
    let _ = writeln!(out, "  <link rel=\"stylesheet\" href=\"{}\">", BULMA_CSS);
    let _ = writeln!(out, "  <link rel=\"stylesheet\" href=\"{}\">", FONT_AWESOME_CSS);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<div class=\"section\">");
    let _ = writeln!(out, "<div class=\"container\">");
    let _ = writeln!(out, "<h1 class=\"title\">{}</h1>", escape(view.title));

    write_filters(&mut out, view);
    write_table(&mut out, view);

    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    out
}

fn write_filters(out: &mut String, view: &CatalogView) {
    let _ = writeln!(out, "<div class=\"block\">");
    let _ = writeln!(out, "<nav class=\"panel\">");
    let _ = writeln!(out, "<p class=\"panel-heading\">Filters</p>");

    let _ = writeln!(out, "<p class=\"panel-tabs has-text-weight-bold\">");
    for tab in &view.user_tabs {
        let data_cy = if tab.name.is_empty() {
            " data-cy=\"FilterAllUsers\""
        } else {
            ""
        };
        let class = if tab.active { " class=\"is-active\"" } else { "" };
        let _ = writeln!(
            out,
            "  <a href=\"#/\"{}{}>{}</a>",
            data_cy,
            class,
            escape(&tab.label)
        );
    }
    let _ = writeln!(out, "</p>");

    let _ = writeln!(out, "<div class=\"panel-block\">");
    let _ = writeln!(out, "<p class=\"control has-icons-left has-icons-right\">");
    let _ = writeln!(
        out,
        "  <input data-cy=\"SearchField\" type=\"text\" class=\"input\" placeholder=\"Search\" value=\"{}\">",
        escape(&view.search.value)
    );
    let _ = writeln!(
        out,
        "  <span class=\"icon is-left\"><i class=\"fas fa-search\" aria-hidden=\"true\"></i></span>"
    );
    let _ = write!(out, "  <span class=\"icon is-right\">");
    if view.search.clear_button {
        let _ = write!(
            out,
            "<button data-cy=\"ClearButton\" type=\"button\" class=\"delete\" aria-label=\"Clear\"></button>"
        );
    }
    let _ = writeln!(out, "</span>");
    let _ = writeln!(out, "</p>");
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "<div class=\"panel-block is-flex-wrap-wrap\">");
    let _ = writeln!(
        out,
        "  <a href=\"#/\" data-cy=\"AllCategories\" class=\"button is-success mr-6 is-outlined\">All</a>"
    );
    for category in &view.categories {
        let _ = writeln!(
            out,
            "  <a href=\"#/\" class=\"button mr-2 my-1\">{}</a>",
            escape(&category.title)
        );
    }
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "<div class=\"panel-block\">");
    let _ = writeln!(
        out,
        "  <a data-cy=\"ResetAllButton\" href=\"#/\" class=\"button is-link is-outlined is-fullwidth\">Reset all filters</a>"
    );
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "</nav>");
    let _ = writeln!(out, "</div>");
}

fn write_table(out: &mut String, view: &CatalogView) {
    let _ = writeln!(out, "<div class=\"box table-container\">");

    match &view.body {
        TableBody::NoMatches => {
            let _ = writeln!(
                out,
                "<p data-cy=\"NoMatchingMessage\">{}</p>",
                NO_MATCHES_MESSAGE
            );
        }
        TableBody::Rows(rows) => {
            let _ = writeln!(
                out,
                "<table data-cy=\"ProductTable\" class=\"table is-striped is-narrow is-fullwidth\">"
            );
            let _ = writeln!(out, "<thead>");
            let _ = writeln!(out, "<tr>");
            for column in &view.columns {
                let _ = writeln!(
                    out,
                    "  <th><span class=\"is-flex is-flex-wrap-nowrap\">{}<a href=\"#/\"><span class=\"icon\"><i data-cy=\"SortIcon\" class=\"fas {}\"></i></span></a></span></th>",
                    column.title, column.sort_icon
                );
            }
            let _ = writeln!(out, "</tr>");
            let _ = writeln!(out, "</thead>");

            let _ = writeln!(out, "<tbody>");
            for row in rows {
                let _ = writeln!(out, "<tr data-cy=\"Product\">");
                let _ = writeln!(
                    out,
                    "  <td class=\"has-text-weight-bold\" data-cy=\"ProductId\">{}</td>",
                    row.id
                );
                let _ = writeln!(
                    out,
                    "  <td data-cy=\"ProductName\">{}</td>",
                    escape(&row.name)
                );
                let _ = writeln!(
                    out,
                    "  <td data-cy=\"ProductCategory\">{}</td>",
                    escape(&row.category_label)
                );
                let class = row
                    .user_tone
                    .css_class()
                    .map(|c| format!(" class=\"{}\"", c))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  <td data-cy=\"ProductUser\"{}>{}</td>",
                    class,
                    escape(&row.user_name)
                );
                let _ = writeln!(out, "</tr>");
            }
            let _ = writeln!(out, "</tbody>");
            let _ = writeln!(out, "</table>");
        }
    }

    let _ = writeln!(out, "</div>");
}

/// Minimal HTML escaping for text nodes and quoted attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
