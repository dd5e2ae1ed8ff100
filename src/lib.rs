//! # Connect Four
//!
//! Four-in-a-row for two or more players, each holding their own piece
//! symbol, on a grid of any size.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: pieces, grid, win detection, players, session
//! - [`console`] — Line-based terminal driver for setup, turns and replays
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
