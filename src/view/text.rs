// File: ./src/view/text.rs
use super::Renderer;
use crate::model::Item;
use crate::stats::Stats;
use std::io::Write;

/// Plain-text listing, one line per item followed by the stats line.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_list(&mut self, items: &[Item], stats: &Stats) -> std::io::Result<()> {
        for item in items {
            let marker = if item.editing { "*" } else { " " };
            writeln!(
                self.out,
                "{}{} {}  {}",
                marker,
                item.checkbox_symbol(),
                item.id,
                item.text
            )?;
        }
        if !items.is_empty() {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", stats)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, items: &[Item], stats: &Stats) {
        if let Err(e) = self.write_list(items, stats) {
            log::warn!("Failed to write listing: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    #[test]
    fn test_listing() {
        let mut a = Item::new(ItemId::from("1"), "buy milk");
        a.completed = true;
        let mut b = Item::new(ItemId::from("2"), "walk dog");
        b.editing = true;
        let items = vec![a, b];

        let mut r = TextRenderer::new(Vec::new());
        r.render(&items, &Stats::from_items(&items));
        let out = String::from_utf8(r.into_inner()).unwrap();

        assert_eq!(
            out,
            " [x] 1  buy milk\n*[ ] 2  walk dog\n\nAll: 2  Done: 1  Open: 1\n"
        );
    }

    #[test]
    fn test_empty_listing() {
        let mut r = TextRenderer::new(Vec::new());
        r.render(&[], &Stats::default());
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(out, "All: 0  Done: 0  Open: 0\n");
    }
}
