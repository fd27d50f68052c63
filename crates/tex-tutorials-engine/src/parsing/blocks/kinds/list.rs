use crate::{
    models::{Code, List, ListItem, Math},
    parsing::{inline::InlineTransformer, source::join_lines},
};

/// Accumulates one `\item` while its list is being parsed.
///
/// Item text ends at its first nested block. The text is transformed before
/// the block is attached, so citations are numbered in source order.
#[derive(Debug, Default)]
pub struct ListItemBuilder {
    item: ListItem,
    pending: String,
    /// Set once a nested block is attached.
    text_closed: bool,
}

impl ListItemBuilder {
    /// Starts an item; a description label is rendered bold ahead of the text.
    pub fn new(label_html: Option<String>) -> Self {
        let content = match label_html {
            Some(label) if !label.is_empty() => format!("<strong>{label}</strong>"),
            _ => String::new(),
        };
        Self {
            item: ListItem {
                content,
                ..Default::default()
            },
            pending: String::new(),
            text_closed: false,
        }
    }

    pub fn push_text(&mut self, text: &str) {
        if self.text_closed {
            log::debug!("dropping item text after nested block: {:?}", text.trim());
            return;
        }
        self.pending.push_str(text);
    }

    pub fn push_break(&mut self) {
        if !self.text_closed {
            self.pending.push('\n');
        }
    }

    /// Transforms pending text and appends it to the item content.
    pub fn flush(&mut self, inline: &mut InlineTransformer) {
        let html = inline.transform(&join_lines(&self.pending));
        self.pending.clear();
        if html.is_empty() {
            return;
        }
        if !self.item.content.is_empty() {
            self.item.content.push(' ');
        }
        self.item.content.push_str(&html);
    }

    pub fn set_nested_list(&mut self, list: List) {
        self.item.nested_list = Some(list);
        self.text_closed = true;
    }

    pub fn set_nested_code(&mut self, code: Code) {
        self.item.nested_code = Some(code);
        self.text_closed = true;
    }

    pub fn set_nested_math(&mut self, math: Math) {
        self.item.nested_math = Some(math);
        self.text_closed = true;
    }

    pub fn finish(mut self, inline: &mut InlineTransformer) -> ListItem {
        self.flush(inline);
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_lines_and_transforms() {
        let mut inline = InlineTransformer::default();
        let mut item = ListItemBuilder::new(None);
        item.push_text(" first \\emph{line}\n   second\n");
        let item = item.finish(&mut inline);
        assert_eq!(item.content, "first <em>line</em> second");
    }

    #[test]
    fn label_is_bold_prefix() {
        let mut inline = InlineTransformer::default();
        let mut item = ListItemBuilder::new(Some("Term".into()));
        item.push_text("meaning");
        assert_eq!(item.finish(&mut inline).content, "<strong>Term</strong> meaning");
    }

    #[test]
    fn text_after_nested_block_is_dropped() {
        let mut inline = InlineTransformer::default();
        let mut item = ListItemBuilder::new(None);
        item.push_text("before");
        item.flush(&mut inline);
        item.set_nested_math(Math {
            formula: "x".into(),
        });
        item.push_text("after");
        let item = item.finish(&mut inline);
        assert_eq!(item.content, "before");
        assert_eq!(item.nested_math.map(|m| m.formula), Some("x".to_string()));
    }

    #[test]
    fn later_nested_code_wins() {
        let mut item = ListItemBuilder::new(None);
        for text in ["one", "two"] {
            item.set_nested_code(Code {
                language: "text".into(),
                text: text.into(),
                cheat_text: None,
                hide_execution: false,
            });
        }
        let item = item.finish(&mut InlineTransformer::default());
        assert_eq!(item.nested_code.map(|c| c.text), Some("two".to_string()));
    }
}
