//! Scene layers, drawn back to front.

pub mod rose;
pub mod sky;
pub mod wind;
