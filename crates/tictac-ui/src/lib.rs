//! TUI rendering layer for tictac.
//!
//! Draws the game onto a ratatui [`Buffer`](ratatui::buffer::Buffer) through a
//! small character-cell [`surface::Surface`]. This crate owns the visual
//! presentation while [`tictac_core`] owns the state.

pub mod cell;
pub mod surface;
pub mod view;
