//! Core types and definitions for the ROADGUARD simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometric types, constants, configuration, viewport geometry, player
//! commands, game events, snapshot views, and the draw-surface seam.
//! It has no dependency on any windowing or runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod draw;
pub mod events;
pub mod state;
pub mod types;
pub mod viewport;
