use anyhow::Result;
use popsim_cli::cli::ScenariosCommands;

pub mod list;
pub mod validate;

pub fn handle(command: &ScenariosCommands) -> Result<()> {
    match command {
        ScenariosCommands::Validate { spec } => validate::handle(spec),
        ScenariosCommands::List { spec, format } => list::handle(spec, *format),
    }
}
