//! Command Line Interface (CLI) layer for FAVGEN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) wiring user-provided policy
//! options to the underlying library functionality exposed via `favgen::api`.
//!
//! If you are embedding FAVGEN into another application, prefer using
//! the high-level `favgen::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
