//! Free-text input areas and their layout metrics.

use unicode_width::UnicodeWidthStr;

const DEFAULT_LINE_HEIGHT_PX: u32 = 24;
const DEFAULT_PADDING_PX: u32 = 8;

/// Identifier of a text area element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextAreaId(String);

impl TextAreaId {
    /// Wraps an element identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Inline height of a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAreaHeight {
    /// Height follows the browser's intrinsic sizing.
    Auto,
    /// Fixed height in pixels.
    Pixels(u32),
}

/// A multi-line text input.
///
/// The content height is derived from the number of visual lines: every
/// logical line occupies at least one row and wraps once its display width
/// exceeds the column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    id: TextAreaId,
    value: String,
    columns: usize,
    rows: usize,
    line_height_px: u32,
    padding_px: u32,
    height: TextAreaHeight,
}

impl TextArea {
    /// Creates an empty text area sized to `rows` visible rows.
    #[must_use]
    pub fn new(id: impl Into<String>, columns: usize, rows: usize) -> Self {
        let mut area = Self {
            id: TextAreaId::new(id),
            value: String::new(),
            columns: columns.max(1),
            rows: rows.max(1),
            line_height_px: DEFAULT_LINE_HEIGHT_PX,
            padding_px: DEFAULT_PADDING_PX,
            height: TextAreaHeight::Auto,
        };
        area.height = TextAreaHeight::Pixels(area.rows_height());
        area
    }

    /// Overrides the line height and vertical padding.
    #[must_use]
    pub fn with_metrics(mut self, line_height_px: u32, padding_px: u32) -> Self {
        self.line_height_px = line_height_px;
        self.padding_px = padding_px;
        self.height = TextAreaHeight::Pixels(self.rows_height());
        self
    }

    /// Element identifier.
    #[must_use]
    pub const fn id(&self) -> &TextAreaId {
        &self.id
    }

    /// Current content.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Inline height.
    #[must_use]
    pub const fn height(&self) -> TextAreaHeight {
        self.height
    }

    /// Height needed to show the whole content without scrolling.
    #[must_use]
    pub fn scroll_height(&self) -> u32 {
        let lines = u32::try_from(visual_lines(&self.value, self.columns)).unwrap_or(u32::MAX);
        self.line_height_px
            .saturating_mul(lines)
            .saturating_add(self.padding_px.saturating_mul(2))
    }

    /// Whether the content overflows the fixed height.
    #[must_use]
    pub fn has_vertical_scrollbar(&self) -> bool {
        match self.height {
            TextAreaHeight::Auto => false,
            TextAreaHeight::Pixels(height) => self.scroll_height() > height,
        }
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }

    pub(crate) const fn set_height(&mut self, height: TextAreaHeight) {
        self.height = height;
    }

    fn rows_height(&self) -> u32 {
        let rows = u32::try_from(self.rows).unwrap_or(u32::MAX);
        self.line_height_px
            .saturating_mul(rows)
            .saturating_add(self.padding_px.saturating_mul(2))
    }
}

fn visual_lines(value: &str, columns: usize) -> usize {
    value
        .split('\n')
        .map(|line| UnicodeWidthStr::width(line).div_ceil(columns).max(1))
        .sum()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{TextArea, TextAreaHeight, visual_lines};

    #[rstest]
    #[case::empty("", 1)]
    #[case::short("hello", 1)]
    #[case::exact_width("abcdefghij", 1)]
    #[case::wraps_once("abcdefghijk", 2)]
    #[case::blank_lines("a\n\nb", 3)]
    #[case::wide_glyphs("日本語日本語", 2)]
    fn counts_visual_lines(#[case] value: &str, #[case] expected: usize) {
        assert_eq!(visual_lines(value, 10), expected, "line count for {value:?}");
    }

    #[test]
    fn new_area_is_sized_to_rows() {
        let area = TextArea::new("commentaire", 40, 3).with_metrics(20, 5);

        assert_eq!(area.height(), TextAreaHeight::Pixels(70));
        assert!(!area.has_vertical_scrollbar());
    }

    #[test]
    fn overflowing_content_shows_scrollbar() {
        let mut area = TextArea::new("commentaire", 10, 1);
        area.set_value("line one\nline two\nline three");

        assert!(area.has_vertical_scrollbar());
    }
}
