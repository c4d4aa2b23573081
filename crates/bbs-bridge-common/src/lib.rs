#![deny(clippy::all)]

pub mod error_codes;
mod sync;

pub use sync::mutex_lock_or_recover;
