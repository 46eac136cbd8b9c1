//! Procedural badge icon generator.
//!
//! Renders the circular project badge (dark canvas, gold rings, stars, and a
//! centered letter) entirely on the CPU from signed-distance coverage, then
//! exports it as a 256x256 PNG and a 128x128 ICO.

pub mod badge;
pub mod export;
pub mod glyph;
pub mod paint;
pub mod sdf;
pub mod star;

// Curated re-exports
pub use badge::{Badge, BADGE_SIZE};
pub use export::ICO_SIZE;
