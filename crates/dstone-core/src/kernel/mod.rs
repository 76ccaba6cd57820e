//! # DStone Core Kernel
//!
//! The `kernel` module forms the heart of the engine. It is responsible for
//! bootstrapping the orchestrator, loading configuration, and defining the
//! top-level error type.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Orchestration**: The [`DStone`](bootstrap::DStone) composition root
//!   drives discover → initialize → execute → serve.
//! - **Configuration**: [`DStoneConfig`](config::DStoneConfig) loaded from
//!   `config.yml`, including per-plugin configuration sections.
//! - **Core Constants**: System-wide constants via the `constants`
//!   submodule.
//! - **Error Handling**: Kernel-specific error types ([`Error`](error::Error))
//!   and a `Result` type alias in the `error` submodule.
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error;

pub use bootstrap::DStone;
pub use config::DStoneConfig;
pub use error::{Error, Result};
