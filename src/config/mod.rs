//! Configuration module for the signal board.

// Can all be private now because we have a public re-export.
mod assets;
mod board;
mod debug;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use assets::ASSETS;
pub use board::{BOARD, BoardConfig, MixtureConfig, ProjectionBand};
pub use debug::DF;
pub use persistence::PERSISTENCE;
