#![warn(clippy::all, rust_2018_idioms)]

mod config;
pub mod prelude;
mod report;
mod session;
mod smoke;

pub use config::{CONFIG_ENV_VAR, SubmitConfig};
pub use report::Report;
pub use session::Session;
pub use smoke::{PresetOutcome, run_presets};
