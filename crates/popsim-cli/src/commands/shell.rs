use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use popsim_cli::present::TablePresenter;
use popsim_core::{ExponentialParams, LogisticParams, ModelKind, ScenarioId};
use popsim_ui_common::{Session, SimConfig};
use tracing::{info, warn};

const HELP: &str = "\
commands:
  add logistic [P0 [r [K [T]]]]     add a logistic scenario (T in years)
  add exponential [P0 [r [T]]]      add an exponential scenario (T in hours)
  remove <logistic|exponential> ID  remove a scenario by id
  clear [logistic|exponential]      remove all scenarios (of one model)
  list                              show both models again
  help                              show this message
  quit                              leave the shell
missing values are taken from the configured defaults";

#[derive(Debug, Clone, PartialEq)]
enum ShellCommand {
    AddLogistic(LogisticParams),
    AddExponential(ExponentialParams),
    Remove(ModelKind, ScenarioId),
    Clear(Option<ModelKind>),
    List,
    Help,
    Nothing,
    Quit,
}

pub fn handle(config: &SimConfig, series: bool) -> Result<()> {
    let stdin = io::stdin();
    run_shell(stdin.lock(), io::stdout().lock(), config, series)
}

pub fn run_shell<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    config: &SimConfig,
    series: bool,
) -> Result<()> {
    let mut session = Session::new(config);
    let mut presenter = TablePresenter::new(output, series, config.display.decimal_places);
    info!("Starting interactive session");

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("reading shell input")?;
        if read == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                warn!("rejected shell input: {err}");
                eprintln!("error: input is not valid UTF-8 ({err})");
                continue;
            }
        };
        let command = match parse_command(line, config) {
            Ok(command) => command,
            Err(err) => {
                warn!("rejected shell input '{}': {err}", line.trim());
                eprintln!("error: {err}");
                continue;
            }
        };
        match command {
            ShellCommand::Quit => break,
            ShellCommand::Nothing => {}
            ShellCommand::Help => writeln!(presenter.writer(), "{HELP}")?,
            ShellCommand::List => {
                session.refresh(ModelKind::Logistic, &mut presenter)?;
                session.refresh(ModelKind::Exponential, &mut presenter)?;
            }
            ShellCommand::AddLogistic(params) => {
                let scenario = session.add_logistic(params, &mut presenter)?;
                writeln!(presenter.writer(), "added logistic scenario {}", scenario.id)?;
            }
            ShellCommand::AddExponential(params) => {
                let scenario = session.add_exponential(params, &mut presenter)?;
                writeln!(presenter.writer(), "added exponential scenario {}", scenario.id)?;
            }
            ShellCommand::Remove(model, id) => {
                if !session.remove(model, id, &mut presenter)? {
                    writeln!(presenter.writer(), "no {model} scenario with id {id}")?;
                }
            }
            ShellCommand::Clear(Some(model)) => session.clear(model, &mut presenter)?,
            ShellCommand::Clear(None) => session.clear_all(&mut presenter)?,
        }
    }
    presenter.writer().flush()?;
    Ok(())
}

fn parse_command(line: &str, config: &SimConfig) -> Result<ShellCommand> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(ShellCommand::Nothing);
    };
    let args: Vec<&str> = words.collect();
    match verb.to_ascii_lowercase().as_str() {
        "add" => {
            let (model, values) = args
                .split_first()
                .ok_or_else(|| anyhow!("add needs a model (logistic or exponential)"))?;
            match model.parse::<ModelKind>()? {
                ModelKind::Logistic => {
                    let values = numbers::<4>(values)?;
                    let time_max = values[3].map(to_time).transpose()?;
                    Ok(ShellCommand::AddLogistic(config.logistic.params(
                        values[0], values[1], values[2], time_max,
                    )))
                }
                ModelKind::Exponential => {
                    let values = numbers::<3>(values)?;
                    let time_max = values[2].map(to_time).transpose()?;
                    Ok(ShellCommand::AddExponential(
                        config.exponential.params(values[0], values[1], time_max),
                    ))
                }
            }
        }
        "remove" | "rm" => {
            let [model, id] = args.as_slice() else {
                bail!("usage: remove <logistic|exponential> ID");
            };
            let id = id
                .parse::<u64>()
                .with_context(|| format!("invalid scenario id '{id}'"))?;
            Ok(ShellCommand::Remove(model.parse()?, ScenarioId::new(id)))
        }
        "clear" => match args.as_slice() {
            [] => Ok(ShellCommand::Clear(None)),
            [model] => Ok(ShellCommand::Clear(Some(model.parse()?))),
            _ => bail!("usage: clear [logistic|exponential]"),
        },
        "list" | "ls" => Ok(ShellCommand::List),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => bail!("unknown command '{other}' (try 'help')"),
    }
}

/// Parse up to `N` positional numbers; absent trailing values stay `None`.
fn numbers<const N: usize>(values: &[&str]) -> Result<[Option<f64>; N]> {
    if values.len() > N {
        bail!("expected at most {N} values, got {}", values.len());
    }
    let mut parsed = [None; N];
    for (slot, raw) in parsed.iter_mut().zip(values) {
        let value = raw
            .parse::<f64>()
            .with_context(|| format!("invalid number '{raw}'"))?;
        *slot = Some(value);
    }
    Ok(parsed)
}

fn to_time(value: f64) -> Result<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        bail!("simulation length must be a whole number, got {value}");
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_bytes(input: &[u8]) -> String {
        let mut out = Vec::new();
        run_shell(input, &mut out, &SimConfig::default(), false).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run(input: &str) -> String {
        run_bytes(input.as_bytes())
    }

    #[test]
    fn parses_add_with_defaults() {
        let config = SimConfig::default();
        assert_eq!(
            parse_command("add logistic 10 0.5 1000 20", &config).unwrap(),
            ShellCommand::AddLogistic(LogisticParams::new(10.0, 0.5, 1000.0, 20))
        );
        assert_eq!(
            parse_command("add exp 5", &config).unwrap(),
            ShellCommand::AddExponential(ExponentialParams::new(5.0, 0.3, 24))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        let config = SimConfig::default();
        assert!(parse_command("add logistic ten", &config).is_err());
        assert!(parse_command("add exponential 1 2 3 4", &config).is_err());
        assert!(parse_command("add exponential 1 2 2.5", &config).is_err());
        assert!(parse_command("remove logistic", &config).is_err());
        assert!(parse_command("remove gompertz 1", &config).is_err());
        assert!(parse_command("grow", &config).is_err());
        assert_eq!(parse_command("   ", &config).unwrap(), ShellCommand::Nothing);
    }

    #[test]
    fn session_round_trip() {
        let text = run("add logistic 10 0.5 1000 20\n\
                        add logistic 20 0.5 1000 20\n\
                        remove logistic 1\n\
                        remove logistic 1\n\
                        quit\n\
                        add logistic\n");
        assert!(text.contains("added logistic scenario 1"));
        assert!(text.contains("added logistic scenario 2"));
        assert!(text.contains("no logistic scenario with id 1"));
        // nothing after quit is executed
        assert!(!text.contains("added logistic scenario 3"));
    }

    #[test]
    fn bad_lines_do_not_stop_the_shell() {
        let text = run("add exponential x\nadd exponential 100 0.2 10\n");
        assert!(text.contains("added exponential scenario 1"));
        assert!(text.contains("Growth factor: 7.39x"));
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let text = run_bytes(b"\xff\xfe\nadd exponential 100 0.2 10\n");
        assert!(text.contains("added exponential scenario 1"));
    }

    #[test]
    fn last_line_without_newline_is_executed() {
        let text = run("add logistic 10 0.5 1000 20");
        assert!(text.contains("added logistic scenario 1"));
    }
}
