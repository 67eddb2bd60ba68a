use crate::cli::parser::ExportArgs;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(session: &mut Session, args: &ExportArgs) -> AppResult<()> {
    let count = session.series().len();
    let path = ExportLogic::export(session.series(), &args.format, &args.file, args.force)?;
    session.record(
        "export",
        &path.display().to_string(),
        format!("{count} readings as {}", args.format.as_str()),
    );
    Ok(())
}
