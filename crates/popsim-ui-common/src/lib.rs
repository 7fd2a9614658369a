//! # popsim UI Common
//!
//! Shared pieces for popsim front-ends: the [`Session`] that owns both
//! scenario stores and drives a [`popsim_core::Presenter`], and the
//! [`SimConfig`] loaded from `~/.popsim/config.toml`.
//!
//! ## Architecture
//!
//! ```text
//! popsim-cli ──► Session ──► popsim-core (stores, sampler, statistics)
//!                   │
//!                   └──► Presenter (table, JSON, report, ...)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use popsim_ui_common::{Session, SimConfig};
//!
//! let config = SimConfig::load()?;
//! let mut session = Session::new(&config);
//! session.add_logistic(config.logistic.params(None, None, None, None), &mut presenter)?;
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use config::{CoreConfig, DisplayConfig, ExponentialDefaults, LogisticDefaults, SimConfig};
pub use error::{Error, Result};
pub use session::Session;
