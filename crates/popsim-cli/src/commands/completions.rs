use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap_complete::{generate, Shell};
use tracing::info;

use popsim_cli::cli::build_cli_command;

const BIN_NAME: &str = "popsim";

/// Completion script for `shell`, written to `writer`.
fn write_completions<W: Write>(shell: Shell, writer: &mut W) {
    let mut cmd = build_cli_command();
    generate(shell, &mut cmd, BIN_NAME, writer);
}

pub fn handle(shell: Shell, out: Option<&Path>) -> Result<()> {
    let Some(path) = out else {
        write_completions(shell, &mut io::stdout().lock());
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating completion directory '{}'", parent.display()))?;
    }
    let mut file = fs::File::create(path)
        .with_context(|| format!("creating completion file '{}'", path.display()))?;
    write_completions(shell, &mut file);
    info!("Wrote {shell:?} completion to {}", path.display());
    println!("Wrote {shell:?} completion to {}", path.display());
    Ok(())
}
