//! # popsim-core: Population Growth Scenario Engine
//!
//! Evaluates logistic and exponential growth models, keeps the ordered,
//! colored collection of scenarios for each model, samples their curves on a
//! shared time axis and derives closed-form statistics.
//!
//! ## Pipelines
//!
//! The two models run through identical, independent pipelines:
//!
//! ```text
//! add/remove/clear ──► ScenarioStore<M> ──► sample_curves ──┐
//!                                       └─► stat_blocks ────┴─► Frame ──► Presenter
//! ```
//!
//! Every mutation rebuilds the [`Frame`] from scratch; nothing is cached.
//!
//! ## Quick Start
//!
//! ```
//! use popsim_core::*;
//!
//! let palette = Palette::default();
//! let mut store = ScenarioStore::new();
//! store.add(LogisticParams::new(10.0, 0.5, 1000.0, 20));
//!
//! let frame = build_frame(&store, &palette);
//! assert_eq!(frame.chart.axis.len(), 21);
//! assert_eq!(frame.stats[0].title, "Scenario 1");
//! ```
//!
//! ## Failure policy
//!
//! Inputs are not range-checked. A zero `P0` or `r` yields NaN or infinite
//! values in curves and statistics rather than an error.

pub mod error;
pub mod model;
pub mod palette;
pub mod render;
pub mod sampler;
pub mod scenario;
pub mod stats;

pub use error::{PopError, PopResult};
pub use model::{
    exponential_model, logistic_model, ExponentialParams, GrowthModel, LogisticParams, ModelKind,
    TimeUnit,
};
pub use palette::{Palette, COMPARISON_STYLE, DEFAULT_PALETTE};
pub use render::{
    build_frame, list_entries, stat_blocks, Frame, Interpretation, ListEntry, Presenter, StatBlock,
};
pub use sampler::{sample_curves, time_axis, Chart, Series};
pub use scenario::{Scenario, ScenarioId, ScenarioStore};
pub use stats::{
    DerivedStatistics, ExponentialComparison, ExponentialStats, LogisticBehavior,
    LogisticComparison, LogisticStats, RankedScenario, ThresholdTime,
};
