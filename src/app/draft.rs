use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The uncommitted text in the entry field.
///
/// The cursor is tracked in grapheme clusters so that editing never splits a
/// combined character (for example an emoji with a skin-tone modifier).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    cursor: usize,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the draft holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Cursor position in grapheme clusters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    // Byte offset of the grapheme at `idx` (or the end of the text).
    fn byte_offset(&self, idx: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        self.insert_str(c.encode_utf8(&mut [0; 4]));
    }

    /// Insert `s` at the cursor and place the cursor after it.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        // Recount the prefix: a leading combining mark joins the previous
        // cluster instead of adding one.
        self.cursor = self.text[..at + s.len()].graphemes(true).count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Take the text out, leaving the draft empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Return the slice of the draft that fits in `width` terminal columns
    /// while keeping the cursor visible, and the cursor column within that
    /// slice. Wide characters (CJK, most emoji) count as two columns.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let clusters: Vec<(&str, usize)> = self
            .text
            .graphemes(true)
            .map(|g| (g, g.width()))
            .collect();
        let cursor = self.cursor.min(clusters.len());

        // Walk back from the cursor, leaving one column for the cursor itself.
        let mut skip = cursor;
        let mut used = 1;
        while skip > 0 && used + clusters[skip - 1].1 <= width {
            used += clusters[skip - 1].1;
            skip -= 1;
        }

        let mut shown = String::new();
        let mut cols = 0;
        for &(g, w) in &clusters[skip..] {
            if cols + w > width {
                break;
            }
            shown.push_str(g);
            cols += w;
        }
        let cursor_col = clusters[skip..cursor].iter().map(|&(_, w)| w).sum();
        (shown, cursor_col)
    }
}

impl From<&str> for Draft {
    fn from(s: &str) -> Self {
        let mut d = Draft::new();
        d.insert_str(s);
        d
    }
}
