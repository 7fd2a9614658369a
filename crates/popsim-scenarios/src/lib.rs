pub mod apply;
pub mod report;
pub mod spec;

pub use apply::{apply_scenarios_to_session, ScenarioApplyOptions};
pub use report::{load_report, write_report, Report};
pub use spec::{
    load_spec_from_path, resolve_scenarios, validate, ExponentialSpec, LogisticSpec,
    ResolvedScenario, ResolvedScenarios, ScenarioDefaults, ScenarioSet,
};
