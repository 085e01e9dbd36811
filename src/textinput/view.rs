//! Rendering for the input buffer.

use super::model::Model;

impl Model {
    /// Renders the prompt, the visible part of the value and the caret.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let visible = &self.value[self.offset.min(end)..end];
        let pos = self.pos.saturating_sub(self.offset).min(visible.len());

        let mut v = String::new();
        let before: String = visible[..pos].iter().collect();
        v.push_str(&self.text_style.render(&before));

        let mut cur = self.cursor.clone();
        if pos < visible.len() {
            cur.set_char(&visible[pos].to_string());
            v.push_str(&cur.view());
            let after: String = visible[pos + 1..].iter().collect();
            v.push_str(&self.text_style.render(&after));
        } else {
            cur.set_char(" ");
            v.push_str(&cur.view());
        }

        if self.width > visible.len() {
            let padding = self.width - visible.len();
            v.push_str(&self.text_style.render(&" ".repeat(padding)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let mut v = String::new();

        if let Some(first) = chars.next() {
            let mut cur = self.cursor.clone();
            cur.set_char(&first.to_string());
            v.push_str(&cur.view());
        }
        let rest: String = chars.collect();
        if !rest.is_empty() {
            v.push_str(&self.placeholder_style.render(&rest));
        }

        let used = self.placeholder.chars().count();
        if self.width > used {
            v.push_str(&self.placeholder_style.render(&" ".repeat(self.width - used)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }
}
