use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::render_status;

pub fn handle(session: &mut Session) -> AppResult<()> {
    let report = session.status()?;
    print!("{}", render_status(&report));
    Ok(())
}
