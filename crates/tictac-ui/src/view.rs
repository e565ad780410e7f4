use tictac_config::LayoutConfig;
use tictac_core::{
    board::{Board, Status, SIZE},
    session::Session,
};
use unicode_width::UnicodeWidthStr;

use crate::cell::{CellGeometry, CellWidget};
use crate::surface::{Attr, Surface};

const TITLE: &str = "TIC TAC TOE";
const TITLE_ROW: u16 = 2;
const TEXT_COL: u16 = 10;
const TURN_ROW: u16 = 4;
const OUTCOME_ROW: u16 = 5;
const HELP_ROW: u16 = 7;
const HELP_LABEL: &str = "HELP:";
const HELP_TEXT: &str = "r - RESTART, q - QUIT, space - PUSH";

/// Full-screen game view: the 3x3 grid of cell widgets plus the title and
/// status lines around it.
#[derive(Debug, Clone)]
pub struct GameView {
    cells: [[CellWidget; SIZE]; SIZE],
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl GameView {
    /// Lay the cells out edge to edge starting at the configured origin.
    ///
    /// Positions saturate at the last screen coordinate for layouts that
    /// skipped [`Settings::validate`](tictac_config::Settings::validate).
    pub fn new(layout: &LayoutConfig) -> Self {
        let geometry = CellGeometry::from(layout);
        let cells = std::array::from_fn(|i| {
            std::array::from_fn(|j| {
                CellWidget::new(
                    layout
                        .origin_row
                        .saturating_add((i as u16).saturating_mul(geometry.height)),
                    layout
                        .origin_col
                        .saturating_add((j as u16).saturating_mul(geometry.width)),
                    geometry,
                )
            })
        });
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellWidget> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Copy marks from the board and move the highlight to the cursor.
    pub fn sync(&mut self, session: &Session) {
        let board = session.board();
        let cursor = session.cursor();
        for (i, row) in self.cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                cell.set_mark(board.cell(i, j));
                cell.set_highlight(i == cursor.row && j == cursor.col);
            }
        }
    }

    pub fn draw(&self, session: &Session, surface: &mut Surface<'_>) {
        for cell in self.cells.iter().flatten() {
            cell.draw(surface);
        }

        let board = session.board();
        let title_col = (surface.cols() / 2).saturating_sub(TITLE.width() as u16 / 2);
        surface.put_str(TITLE_ROW, title_col, TITLE, Attr::Underlined);
        surface.put_str(
            TURN_ROW,
            TEXT_COL,
            &format!("CURRENT MOVE: {}", board.current_turn()),
            Attr::Normal,
        );
        surface.put_str(OUTCOME_ROW, TEXT_COL, &outcome_label(board), Attr::Normal);
        surface.put_str(HELP_ROW, TEXT_COL, HELP_LABEL, Attr::Underlined);
        surface.put_str(
            HELP_ROW,
            TEXT_COL + HELP_LABEL.width() as u16 + 1,
            HELP_TEXT,
            Attr::Normal,
        );
    }

    pub fn redraw(&mut self, session: &Session, surface: &mut Surface<'_>) {
        self.sync(session);
        self.draw(session, surface);
    }
}

/// Status line text for the current board.
pub fn outcome_label(board: &Board) -> String {
    match board.status() {
        Status::Won(mark) => format!("WINNER: {mark}"),
        Status::Draw => "WINNER: none (draw)".to_string(),
        Status::InProgress => "WINNER: none".to_string(),
    }
}
