pub mod cli;
pub mod common;
pub mod present;

pub use cli::{build_cli_command, Cli, Commands, ScenariosCommands};
pub use common::OutputFormat;
pub use present::{write_frames_csv, TablePresenter};
