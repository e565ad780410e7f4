use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};

/// Visual attribute for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attr {
    #[default]
    Normal,
    Reversed,
    Underlined,
}

impl Attr {
    /// Full style for this attribute. Every variant starts from
    /// [`Style::reset`] so text never inherits what was drawn beneath it.
    pub fn style(self) -> Style {
        match self {
            Attr::Normal => Style::reset(),
            Attr::Reversed => Style::reset().add_modifier(Modifier::REVERSED),
            Attr::Underlined => Style::reset().add_modifier(Modifier::UNDERLINED),
        }
    }
}

/// Character-cell drawing surface addressed by `(row, col)`, relative to the
/// top-left of the underlying buffer.
///
/// Writes that start outside the buffer are dropped and writes that run past
/// the right edge are truncated, so a small terminal never panics the game.
pub struct Surface<'a> {
    buf: &'a mut Buffer,
}

impl<'a> Surface<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    pub fn clear(&mut self) {
        self.buf.reset();
    }

    pub fn cols(&self) -> u16 {
        self.buf.area.width
    }

    pub fn rows(&self) -> u16 {
        self.buf.area.height
    }

    pub fn put_str(&mut self, row: u16, col: u16, text: &str, attr: Attr) {
        let area = self.buf.area;
        if row >= area.height || col >= area.width {
            return;
        }
        let max_width = usize::from(area.width - col);
        self.buf
            .set_stringn(area.x + col, area.y + row, text, max_width, attr.style());
    }
}
