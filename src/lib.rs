pub mod api;
pub mod error;
pub mod loader;
pub mod model;
pub mod selection;
pub mod shaper;
// cmd and reports are binary modules (in main.rs); the library stays
// free of terminal rendering.
