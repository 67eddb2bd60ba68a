//! Language-model collaborator: forecast and free-text questions about the
//! latest reading.
//!
//! Everything past the [`GenerativeModel`] seam is opaque text. Failures never
//! escape these functions: a reply that is not the expected JSON is surfaced
//! as raw text, a failed request as [`ForecastOutcome::Unavailable`].

pub mod gemini;
pub mod parse;
pub mod prompt;

pub use gemini::GeminiClient;
pub use parse::{Forecast, ForecastPoint};

use crate::errors::AppResult;
use crate::models::reading::Reading;
use log::{debug, warn};

/// Anything that turns a prompt into generated text.
pub trait GenerativeModel {
    fn generate_content(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    /// The reply parsed as a forecast; `raw` is the reply text as received.
    Structured { forecast: Forecast, raw: String },
    /// The reply did not parse; shown unmodified.
    Raw(String),
    /// The request itself failed.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    Answer(String),
    Unavailable(String),
}

/// Ask the model for a 6/12/24 h forecast from the latest reading.
pub fn request_forecast<M: GenerativeModel + ?Sized>(
    model: &M,
    reading: &Reading,
    location: &str,
    language: &str,
) -> ForecastOutcome {
    let prompt = prompt::build_forecast_prompt(reading, location, language);
    debug!("forecast prompt: {} chars", prompt.len());

    let text = match model.generate_content(&prompt) {
        Ok(text) => text,
        Err(e) => {
            warn!("forecast request failed: {e}");
            return ForecastOutcome::Unavailable(e.to_string());
        }
    };

    match parse::parse_forecast(&text) {
        Ok(forecast) => ForecastOutcome::Structured {
            forecast,
            raw: text,
        },
        Err(e) => {
            warn!("forecast reply is not valid JSON ({e}), showing raw text");
            ForecastOutcome::Raw(text)
        }
    }
}

/// Free-text question, answered with the latest reading as context.
pub fn ask<M: GenerativeModel + ?Sized>(
    model: &M,
    question: &str,
    reading: &Reading,
    location: &str,
    language: &str,
) -> AnswerOutcome {
    let prompt = prompt::build_question_prompt(question, reading, location, language);

    match model.generate_content(&prompt) {
        Ok(text) => AnswerOutcome::Answer(text),
        Err(e) => {
            warn!("question request failed: {e}");
            AnswerOutcome::Unavailable(e.to_string())
        }
    }
}
