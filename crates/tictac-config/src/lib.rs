//! Configuration types and loaders for tictac.
//!
//! Only screen layout is configurable; the board itself is always 3x3.

pub mod settings;

pub use settings::{LayoutConfig, Settings, MAX_CELL_DIMENSION};
