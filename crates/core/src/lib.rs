#![deny(warnings)]

pub mod classify;
pub mod config;
pub mod extract;
pub mod format;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod score;
pub mod transcribe;
