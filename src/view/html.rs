// File: ./src/view/html.rs
use super::{Renderer, escape_html};
use crate::action::ActionId;
use crate::model::Item;
use crate::stats::Stats;

/// Renders the list as an HTML fragment.
///
/// Rows carry `data-id`, affordances carry `data-action`, so a page can route
/// any click or submit back through [`ActionId`] without knowing the data.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragment produced by the last `render` call.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, items: &[Item], stats: &Stats) {
        self.output = render_page(items, stats);
    }
}

fn render_row(item: &Item) -> String {
    let mut class = String::from("todo-item");
    if item.completed {
        class.push_str(" completed");
    }
    if item.editing {
        class.push_str(" editing");
    }
    let checked = if item.completed { " checked" } else { "" };
    let text = escape_html(&item.text);

    let mut row = format!(
        "<li class=\"{}\" data-id=\"{}\">\n  <input type=\"checkbox\"{} data-action=\"{}\">\n",
        class,
        escape_html(item.id.as_str()),
        checked,
        ActionId::Toggle
    );

    if item.editing {
        row.push_str(&format!(
            concat!(
                "  <form class=\"edit-form\" data-action=\"{}\">\n",
                "    <input type=\"text\" value=\"{}\" class=\"edit-input\" autofocus>\n",
                "    <button type=\"submit\" class=\"save-edit-btn\">Save</button>\n",
                "  </form>\n",
            ),
            ActionId::Save,
            text
        ));
    } else {
        row.push_str(&format!(
            concat!(
                "  <span class=\"todo-text\">{}</span>\n",
                "  <div class=\"todo-actions\">\n",
                "    <button type=\"button\" class=\"edit-btn\" data-action=\"{}\">Edit</button>\n",
                "    <button type=\"button\" class=\"delete-btn\" data-action=\"{}\">Delete</button>\n",
                "  </div>\n",
            ),
            text,
            ActionId::Edit,
            ActionId::Delete
        ));
    }

    row.push_str("</li>\n");
    row
}

pub fn render_page(items: &[Item], stats: &Stats) -> String {
    let mut out = String::from("<ul id=\"todo-list\">\n");
    for item in items {
        out.push_str(&render_row(item));
    }
    out.push_str("</ul>\n");
    out.push_str(&format!(
        concat!(
            "<p class=\"stats\">",
            "All: <span id=\"total-count\">{}</span> ",
            "Done: <span id=\"completed-count\">{}</span> ",
            "Open: <span id=\"incomplete-count\">{}</span>",
            "</p>\n",
        ),
        stats.total, stats.completed, stats.incomplete
    ));
    out
}
