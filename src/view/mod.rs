// File: ./src/view/mod.rs
//! Renderers for the item list.
//!
//! A renderer is handed the whole collection and its stats after every
//! mutation and rebuilds its output from scratch. No renderer keeps state
//! between calls beyond the last output it produced.
pub mod html;
pub mod text;

use crate::model::Item;
use crate::stats::Stats;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

pub trait Renderer {
    fn render(&mut self, items: &[Item], stats: &Stats);
}

/// Renderer that draws nothing, for headless use of the controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _items: &[Item], _stats: &Stats) {}
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b onclick="x('y')">&</b>"#),
            "&lt;b onclick=&quot;x(&#39;y&#39;)&quot;&gt;&amp;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
