use tictac_config::LayoutConfig;
use tictac_core::board::Square;

use crate::surface::{Attr, Surface};

/// Size of one cell box in terminal cells, borders included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: u16,
    pub height: u16,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for CellGeometry {
    fn from(layout: &LayoutConfig) -> Self {
        Self {
            width: layout.cell_width,
            height: layout.cell_height,
        }
    }
}

/// One bordered board cell with its mark centred inside.
///
/// ```text
/// +-------+
/// |       |
/// |   X   |
/// |       |
/// +-------+
/// ```
///
/// The widget holds no game logic: the view pushes the mark and highlight in
/// before each draw.
#[derive(Debug, Clone)]
pub struct CellWidget {
    row: u16,
    col: u16,
    geometry: CellGeometry,
    glyph: char,
    attr: Attr,
}

impl CellWidget {
    pub fn new(row: u16, col: u16, geometry: CellGeometry) -> Self {
        Self {
            row,
            col,
            geometry,
            glyph: Square::Empty.glyph(),
            attr: Attr::Normal,
        }
    }

    pub fn set_mark(&mut self, square: Square) {
        self.glyph = square.glyph();
    }

    pub fn set_highlight(&mut self, on: bool) {
        self.attr = if on { Attr::Reversed } else { Attr::Normal };
    }

    pub fn is_highlighted(&self) -> bool {
        self.attr == Attr::Reversed
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Screen position of the top-left corner.
    pub fn origin(&self) -> (u16, u16) {
        (self.row, self.col)
    }

    pub fn draw(&self, surface: &mut Surface<'_>) {
        for (offset, line) in self.lines().iter().enumerate() {
            // lines() yields exactly `height` rows, which is a u16.
            let row = self.row.saturating_add(offset as u16);
            surface.put_str(row, self.col, line, self.attr);
        }
    }

    fn lines(&self) -> Vec<String> {
        let inner = usize::from(self.geometry.width.saturating_sub(2));
        let pad = (usize::from(self.geometry.height.saturating_sub(2))) / 2;
        let half = " ".repeat(inner / 2);

        let border = format!("+{}+", "-".repeat(inner));
        let blank = format!("|{}|", " ".repeat(inner));
        let centre = format!("|{half}{}{half}|", self.glyph);

        let mut lines = Vec::with_capacity(2 * pad + 3);
        lines.push(border.clone());
        lines.extend(std::iter::repeat(blank.clone()).take(pad));
        lines.push(centre);
        lines.extend(std::iter::repeat(blank).take(pad));
        lines.push(border);
        lines
    }
}
