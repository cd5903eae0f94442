//! Infrastructure adapters and runtime bootstrap.

pub mod assets;
pub mod output;
pub mod telemetry;
