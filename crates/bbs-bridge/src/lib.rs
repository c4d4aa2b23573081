#![deny(clippy::all)]

pub mod app;
pub mod commands;
pub mod error;
pub mod telemetry;

pub use error::AppError;
