// src/config/mod.rs
pub mod tone;

pub use tone::ToneConfig;
