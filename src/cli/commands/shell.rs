use crate::cli::shell::{ShellAction, ShellLine, split_line};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::forecast::GeminiClient;
use crate::ui::messages::{error, info};
use clap::Parser;
use log::debug;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "envwatch> ";

/// Interactive session. Commands run one at a time until `quit` or EOF;
/// an error is reported and the shell keeps going.
pub fn handle(session: &mut Session, cfg: &Config) -> AppResult<()> {
    info("Interactive session started. Type 'help' for commands, 'quit' to leave.");
    session.ensure_seeded();

    let stdin = io::stdin();
    let mut client: Option<GeminiClient> = None;
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        io::stdout().flush().ok();

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let words = match split_line(&line) {
            Ok(w) if w.is_empty() => continue,
            Ok(w) => w,
            Err(e) => {
                error(e);
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(p) => p,
            Err(e) => {
                // help and usage errors are rendered by clap
                e.print().ok();
                continue;
            }
        };

        debug!("shell: {:?}", parsed.action);
        match run_action(session, cfg, &mut client, &parsed.action) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => error(e),
        }
    }

    info(format!(
        "Session closed ({} readings discarded).",
        session.series().len()
    ));
    Ok(())
}

/// Returns `Ok(false)` when the shell should stop.
fn run_action(
    session: &mut Session,
    cfg: &Config,
    client: &mut Option<GeminiClient>,
    action: &ShellAction,
) -> AppResult<bool> {
    match action {
        ShellAction::Add(args) => super::add::handle(session, args)?,
        ShellAction::Status => super::status::handle(session)?,
        ShellAction::List(args) => super::list::handle(session, args)?,
        ShellAction::Export(args) => super::export::handle(session, args)?,
        ShellAction::Forecast(args) => {
            let model = model_client(client, cfg)?;
            super::forecast::handle(session, cfg, model, args)?
        }
        ShellAction::Ask(args) => {
            let model = model_client(client, cfg)?;
            super::ask::handle(session, cfg, model, args)?
        }
        ShellAction::Location { name } => {
            if !name.is_empty() {
                session.set_location(name.join(" "));
            }
            info(format!("Location: {}", session.location()));
        }
        ShellAction::Log => print!("{}", session.activity().render()),
        ShellAction::Quit => return Ok(false),
    }
    Ok(true)
}

/// The Gemini client is built on first use so the shell works without a key.
fn model_client<'a>(
    slot: &'a mut Option<GeminiClient>,
    cfg: &Config,
) -> AppResult<&'a GeminiClient> {
    if slot.is_none() {
        *slot = Some(GeminiClient::from_config(cfg)?);
    }
    slot.as_ref()
        .ok_or_else(|| AppError::Shell("model client unavailable".to_string()))
}
