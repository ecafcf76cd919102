//! Brutalita
pub mod core;
pub mod data;
pub mod document;
pub mod export;
pub mod font_source;
pub mod geometry;
pub mod logging;
pub mod outline;
