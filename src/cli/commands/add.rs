use crate::cli::parser::ReadingArgs;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::reading::Reading;
use crate::ui::messages::success;
use crate::utils::render_status;
use chrono::Local;

/// Validate the input and append a new reading to the session.
pub fn handle(session: &mut Session, args: &ReadingArgs) -> AppResult<()> {
    let location = args
        .location
        .clone()
        .unwrap_or_else(|| session.location().to_string());

    let reading = Reading::validated(
        Local::now().naive_local(),
        &location,
        args.pm25,
        args.hardness,
        args.temperature,
        args.ph,
    )?;

    let report = session.add(reading)?;
    success("Reading saved!");
    print!("{}", render_status(&report));
    Ok(())
}
