use crate::cli::parser::AskArgs;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::forecast::{AnswerOutcome, GenerativeModel, ask};
use crate::ui::messages::{info, warning};
use crate::utils::wrap_text;

const ANSWER_WIDTH: usize = 80;

pub fn handle(
    session: &mut Session,
    cfg: &Config,
    model: &dyn GenerativeModel,
    args: &AskArgs,
) -> AppResult<()> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        return Err(AppError::InvalidReading("the question is empty".to_string()));
    }

    let location = args
        .location
        .clone()
        .unwrap_or_else(|| session.location().to_string());
    let latest = session.latest()?;

    info("Asking Gemini…");
    match ask(model, &question, &latest, &location, &cfg.advice_language) {
        AnswerOutcome::Answer(text) => {
            session.record("ask", &location, question);
            println!("{}", wrap_text(&text, ANSWER_WIDTH));
        }
        AnswerOutcome::Unavailable(e) => {
            session.record("ask", &location, format!("failed: {e}"));
            warning(format!("Gemini is not available: {e}"));
        }
    }
    Ok(())
}
