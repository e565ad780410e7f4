//! Game core for tictac.
//!
//! Holds the board model, the input tokens and sources that drive it, the
//! controller session that ties them together, and the logging setup. No
//! rendering lives here; see `tictac-ui`.

pub mod board;
pub mod event;
pub mod logging;
pub mod session;
