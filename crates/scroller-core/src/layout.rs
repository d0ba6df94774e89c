/// Approximate advance of one glyph, in ems.
const GLYPH_WIDTH_EM: f32 = 0.6;
/// Distance between baselines, in ems.
const LINE_HEIGHT_EM: f32 = 1.3;

/// How much text fits in the visible area.
///
/// `columns` is the number of characters on one display line; zero disables
/// soft wrapping. `rows` is the number of display lines shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: usize,
    pub rows: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 20,
        }
    }
}

impl Viewport {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Derives the viewport from the pixel size of the text area and the font size.
    pub fn from_pixels(width: f32, height: f32, font_size: f32) -> Self {
        let font_size = font_size.max(1.0);
        let glyph = font_size * GLYPH_WIDTH_EM;
        let line = font_size * LINE_HEIGHT_EM;

        let columns = if width.is_finite() && width > glyph {
            (width / glyph).floor() as usize
        } else {
            1
        };
        let rows = if height.is_finite() && height > line {
            (height / line).floor() as usize
        } else {
            1
        };

        Self { columns, rows }
    }

    pub fn line_height(font_size: f32) -> f32 {
        font_size * LINE_HEIGHT_EM
    }

    fn visible_rows(&self) -> usize {
        self.rows.max(1)
    }
}

/// Where a display line starts in the source text: the logical line it was
/// wrapped from and the char offset inside that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineAnchor {
    pub logical: usize,
    pub offset: usize,
}

/// Text broken into display lines for a given viewport width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedText {
    lines: Vec<String>,
    anchors: Vec<LineAnchor>,
}

impl RenderedText {
    pub fn layout(text: &str, viewport: Viewport) -> Self {
        let mut rendered = Self::default();
        for (logical, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            rendered.wrap(logical, line, viewport.columns);
        }
        rendered
    }

    /// Source position of the first character on display line `index`.
    pub fn anchor(&self, index: usize) -> Option<LineAnchor> {
        self.anchors.get(index).copied()
    }

    /// Display line holding the character at `anchor`.
    pub fn locate(&self, anchor: LineAnchor) -> usize {
        self.anchors
            .partition_point(|start| *start <= anchor)
            .saturating_sub(1)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn scroll_max(&self, viewport: Viewport) -> usize {
        self.lines.len().saturating_sub(viewport.visible_rows())
    }

    /// Display lines visible when scrolled to `offset`.
    pub fn window(&self, offset: usize, viewport: Viewport) -> &[String] {
        let start = offset.min(self.lines.len());
        let end = start
            .saturating_add(viewport.visible_rows())
            .min(self.lines.len());
        &self.lines[start..end]
    }

    fn push(&mut self, text: &str, logical: usize, offset: usize) {
        self.lines.push(text.to_string());
        self.anchors.push(LineAnchor { logical, offset });
    }

    fn wrap(&mut self, logical: usize, line: &str, columns: usize) {
        if columns == 0 {
            self.push(line, logical, 0);
            return;
        }

        let mut rest = line;
        let mut offset = 0;
        loop {
            let Some((cut, _)) = rest.char_indices().nth(columns) else {
                self.push(rest, logical, offset);
                return;
            };

            let head = &rest[..cut];
            let (line_end, next_start) = if rest[cut..].starts_with(char::is_whitespace) {
                (cut, cut + first_char_len(&rest[cut..]))
            } else if let Some(space) = head.rfind(char::is_whitespace).filter(|&at| at > 0) {
                (space, space + first_char_len(&rest[space..]))
            } else {
                (cut, cut)
            };

            self.push(&rest[..line_end], logical, offset);
            offset += rest[..next_start].chars().count();
            rest = &rest[next_start..];
            if rest.is_empty() {
                return;
            }
        }
    }
}

fn first_char_len(text: &str) -> usize {
    text.chars().next().map_or(0, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str, columns: usize) -> Vec<String> {
        RenderedText::layout(text, Viewport::new(columns, 10))
            .lines()
            .to_vec()
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        let rendered = RenderedText::layout("", Viewport::default());
        assert_eq!(rendered.line_count(), 1);
        assert_eq!(rendered.scroll_max(Viewport::default()), 0);
    }

    #[test]
    fn splits_on_newlines_and_strips_carriage_returns() {
        assert_eq!(lines("one\r\ntwo\nthree", 0), vec!["one", "two", "three"]);
    }

    #[test]
    fn wraps_at_last_whitespace_before_limit() {
        assert_eq!(lines("hello world foo", 8), vec!["hello", "world", "foo"]);
        assert_eq!(lines("hello world foo", 11), vec!["hello world", "foo"]);
    }

    #[test]
    fn anchors_follow_content_across_widths() {
        let text = "alpha beta gamma delta\nepsilon zeta";
        let narrow = RenderedText::layout(text, Viewport::new(7, 10));
        assert_eq!(
            narrow.lines(),
            ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]
        );
        let delta = narrow.anchor(3).unwrap();
        assert_eq!(delta, LineAnchor { logical: 0, offset: 17 });

        let wide = RenderedText::layout(text, Viewport::new(12, 10));
        assert_eq!(wide.lines(), ["alpha beta", "gamma delta", "epsilon zeta"]);
        assert_eq!(wide.locate(delta), 1);
        assert_eq!(wide.locate(narrow.anchor(5).unwrap()), 2);
        assert_eq!(narrow.locate(wide.anchor(1).unwrap()), 2);
        assert_eq!(narrow.anchor(6), None);
    }

    #[test]
    fn hard_breaks_words_longer_than_the_line() {
        assert_eq!(lines("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrapping_counts_characters_not_bytes() {
        assert_eq!(lines("ääää öö", 4), vec!["ääää", "öö"]);
    }

    #[test]
    fn scroll_max_leaves_last_page_visible() {
        let text = (0..500).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let viewport = Viewport::new(0, 20);
        let rendered = RenderedText::layout(&text, viewport);

        assert_eq!(rendered.line_count(), 500);
        assert_eq!(rendered.scroll_max(viewport), 480);
        assert_eq!(rendered.window(480, viewport).len(), 20);
        assert_eq!(rendered.window(480, viewport)[19], "499");
    }

    #[test]
    fn viewport_from_pixels_never_collapses_to_zero_rows() {
        let viewport = Viewport::from_pixels(600.0, 400.0, 16.0);
        assert_eq!(viewport.columns, 62);
        assert_eq!(viewport.rows, 19);

        let tiny = Viewport::from_pixels(1.0, 1.0, 16.0);
        assert_eq!(tiny, Viewport::new(1, 1));
    }
}
