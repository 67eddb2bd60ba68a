use crate::cli::parser::ForecastArgs;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::forecast::{ForecastOutcome, GenerativeModel, request_forecast};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};

/// Ask the model for a forecast and print it. Model failures are shown,
/// not returned.
pub fn handle(
    session: &mut Session,
    cfg: &Config,
    model: &dyn GenerativeModel,
    args: &ForecastArgs,
) -> AppResult<()> {
    let location = args
        .location
        .clone()
        .unwrap_or_else(|| session.location().to_string());
    let latest = session.latest()?;

    info("Asking Gemini for a forecast…");
    let outcome = request_forecast(model, &latest, &location, &cfg.advice_language);

    let summary = match &outcome {
        ForecastOutcome::Structured { forecast, .. } => {
            format!("{} forecast points", forecast.forecast.len())
        }
        ForecastOutcome::Raw(_) => "unstructured reply".to_string(),
        ForecastOutcome::Unavailable(e) => format!("failed: {e}"),
    };
    session.record("forecast", &location, summary);

    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &ForecastOutcome) {
    match outcome {
        ForecastOutcome::Structured { forecast, .. } => {
            success("Gemini forecast ready!");
            header("Forecast");
            print!("{}", render_points(outcome));
            if let Some(alert) = &forecast.alert {
                warning(alert);
            }
            if let Some(rec) = &forecast.recommend {
                info(rec);
            }
        }
        ForecastOutcome::Raw(text) => println!("{text}"),
        ForecastOutcome::Unavailable(e) => warning(format!("Gemini is not available: {e}")),
    }
}

/// Table of forecast points; empty for anything but a structured forecast.
pub fn render_points(outcome: &ForecastOutcome) -> String {
    let ForecastOutcome::Structured { forecast, .. } = outcome else {
        return String::new();
    };

    let mut table = Table::new(vec![
        Column::right("hours"),
        Column::right("PM2.5"),
        Column::right("hardness"),
    ]);
    for p in &forecast.forecast {
        table.add_row(vec![
            format!("+{}", p.hours),
            format!("{:.1}", p.pm25),
            format!("{:.0}", p.hardness),
        ]);
    }
    table.render()
}
