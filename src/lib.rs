//! Core simulation and terminal front end for a grid-based snake game.
//!
//! The simulation modules ([`grid`], [`snake`], [`food`], [`game`]) carry all
//! the game logic and are free of terminal concerns; [`runtime`] drives them
//! at a fixed tick cadence and [`renderer`] draws the resulting state.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod runtime;
pub mod snake;
pub mod ui;
