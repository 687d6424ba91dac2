//! Classic single-player snake for the terminal.
//!
//! This library provides:
//! - Core simulation: movement, collisions, apples and phase transitions (game module)
//! - Keyboard mapping (input module)
//! - Ratatui drawing (render module)
//! - Session stats for the HUD (metrics module)
//! - The interactive event loop and tick scheduling (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
