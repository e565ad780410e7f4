use anyhow::Result;

use crate::board::{Board, Status, SIZE};
use crate::event::{InputSource, Key};

/// Highlighted board position, always within the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row: row.min(SIZE - 1),
            col: col.min(SIZE - 1),
        }
    }

    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.row = (self.row + 1).min(SIZE - 1);
    }

    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.col = (self.col + 1).min(SIZE - 1);
    }
}

/// Input-side controller state: the board, the cursor, and the running flag.
///
/// Every key goes through [`handle_key`](Session::handle_key); rendering reads
/// the state back through the accessors.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    cursor: Cursor,
    active: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            cursor: Cursor::new(0, 0),
            active: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// False once the player has asked to quit.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Block for one input token and apply it.
    pub fn handle_input(&mut self, input: &mut impl InputSource) -> Result<()> {
        let key = input.next_key()?;
        self.handle_key(key);
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Up => self.cursor.up(),
            Key::Down => self.cursor.down(),
            Key::Left => self.cursor.left(),
            Key::Right => self.cursor.right(),
            Key::Restart => {
                self.board = Board::new();
                tracing::info!("game restarted");
            }
            Key::Quit => {
                self.active = false;
                tracing::info!("quit requested");
            }
            Key::Confirm => self.confirm(),
            Key::Other => tracing::debug!("ignored key"),
        }
    }

    fn confirm(&mut self) {
        let Cursor { row, col } = self.cursor;
        let mark = self.board.current_turn();
        if !self.board.apply_move(row, col) {
            tracing::debug!(row, col, "move rejected");
            return;
        }
        tracing::info!(row, col, mark = %mark, "move accepted");
        match self.board.status() {
            Status::Won(winner) => tracing::info!(winner = %winner, "game won"),
            Status::Draw => tracing::info!("game drawn"),
            Status::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Mark, Square};
    use crate::event::ScriptedInput;

    fn session_with(keys: &[Key]) -> Session {
        let mut session = Session::new();
        for &key in keys {
            session.handle_key(key);
        }
        session
    }

    #[test]
    fn new_session_is_active_with_cursor_at_origin() {
        let session = Session::new();
        assert!(session.is_active());
        assert_eq!(session.cursor(), Cursor::new(0, 0));
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn cursor_clamps_at_top_left() {
        let session = session_with(&[Key::Up, Key::Left]);
        assert_eq!(session.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn cursor_clamps_at_bottom_right() {
        let session = session_with(&[
            Key::Down,
            Key::Down,
            Key::Down,
            Key::Right,
            Key::Right,
            Key::Right,
        ]);
        assert_eq!(session.cursor(), Cursor::new(2, 2));
    }

    #[test]
    fn cursor_moves_one_step_per_key() {
        let session = session_with(&[Key::Down, Key::Right, Key::Right, Key::Up]);
        assert_eq!(session.cursor(), Cursor::new(0, 2));
    }

    #[test]
    fn cursor_new_clamps_into_grid() {
        assert_eq!(Cursor::new(7, 9), Cursor { row: 2, col: 2 });
    }

    #[test]
    fn confirm_places_mark_under_cursor() {
        let session = session_with(&[Key::Down, Key::Right, Key::Confirm]);
        assert_eq!(session.board().cell(1, 1), Square::Taken(Mark::X));
        assert_eq!(session.board().current_turn(), Mark::O);
    }

    #[test]
    fn confirm_on_occupied_square_is_ignored() {
        let session = session_with(&[Key::Confirm, Key::Confirm]);
        assert_eq!(session.board().cell(0, 0), Square::Taken(Mark::X));
        assert_eq!(session.board().current_turn(), Mark::O);
    }

    #[test]
    fn restart_clears_board_but_keeps_cursor() {
        let mut session = session_with(&[Key::Confirm, Key::Right, Key::Confirm, Key::Down]);
        let cursor = session.cursor();
        session.handle_key(Key::Restart);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.board().current_turn(), Mark::X);
        assert_eq!(session.cursor(), cursor);
        assert!(session.is_active());
    }

    #[test]
    fn quit_clears_active_flag() {
        let session = session_with(&[Key::Quit]);
        assert!(!session.is_active());
    }

    #[test]
    fn other_key_changes_nothing() {
        let before = Session::new();
        let after = session_with(&[Key::Other]);
        assert_eq!(after.board(), before.board());
        assert_eq!(after.cursor(), before.cursor());
        assert!(after.is_active());
    }

    #[test]
    fn top_row_win_through_keys() {
        // X (0,0), O (1,1), X (0,1), O (2,2), X (0,2)
        let session = session_with(&[
            Key::Confirm,
            Key::Down,
            Key::Right,
            Key::Confirm,
            Key::Up,
            Key::Confirm,
            Key::Down,
            Key::Down,
            Key::Right,
            Key::Confirm,
            Key::Up,
            Key::Up,
            Key::Confirm,
        ]);
        assert_eq!(session.board().outcome(), Some(Mark::X));
        assert!(session.board().is_finished());
    }

    #[test]
    fn handle_input_reads_one_key() {
        let mut input = ScriptedInput::new([Key::Right, Key::Confirm]);
        let mut session = Session::new();
        session.handle_input(&mut input).unwrap();
        assert_eq!(session.cursor(), Cursor::new(0, 1));
        assert_eq!(input.remaining(), 1);
        assert_eq!(session.board(), &Board::new());
    }
}
