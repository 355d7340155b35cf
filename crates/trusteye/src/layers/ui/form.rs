/// Single editable input. The cursor is a char index, not a byte offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    #[allow(dead_code)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub(crate) fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.len();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub(crate) fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Splits the value around the cursor for rendering.
    pub(crate) fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_index(self.cursor);
        let (before, rest) = self.value.split_at(at);
        let mut chars = rest.chars();
        match chars.next() {
            Some(ch) => (before, Some(ch), chars.as_str()),
            None => (before, None, ""),
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SubmitButton {
    idle_label: &'static str,
    busy_label: &'static str,
    enabled: bool,
    busy: bool,
}

impl SubmitButton {
    pub(crate) fn new(idle_label: &'static str, busy_label: &'static str, enabled: bool) -> Self {
        Self {
            idle_label,
            busy_label,
            enabled,
            busy: false,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        if self.busy {
            self.busy_label
        } else {
            self.idle_label
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled && !self.busy
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn start(&mut self) {
        self.busy = true;
        self.enabled = false;
    }

    pub(crate) fn finish(&mut self) {
        self.busy = false;
        self.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_around_multibyte_chars() {
        let mut field = TextField::default();
        for ch in "héllo".chars() {
            field.insert(ch);
        }
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "hélo");
        assert_eq!(field.cursor(), 2);
        field.delete();
        assert_eq!(field.value(), "héo");
        let (before, at, after) = field.split_at_cursor();
        assert_eq!((before, at, after), ("hé", Some('o'), ""));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = TextField::default();
        field.backspace();
        field.delete();
        field.move_right();
        assert_eq!(field.cursor(), 0);
        field.set("abc");
        assert_eq!(field.cursor(), 3);
        field.move_home();
        assert_eq!(field.cursor(), 0);
        field.move_end();
        assert_eq!(field.split_at_cursor(), ("abc", None, ""));
    }

    #[test]
    fn whitespace_is_blank() {
        let mut field = TextField::default();
        field.set("  \t ");
        assert!(field.is_blank());
        field.set(" a ");
        assert!(!field.is_blank());
    }

    #[test]
    fn busy_button_swaps_label_and_disables() {
        let mut button = SubmitButton::new("🔍 Analyze Text", "🔄 Analyzing...", true);
        button.start();
        assert!(!button.is_enabled());
        assert!(button.is_busy());
        assert_eq!(button.label(), "🔄 Analyzing...");
        button.finish();
        assert!(button.is_enabled());
        assert_eq!(button.label(), "🔍 Analyze Text");
    }
}
