pub mod activity;
pub mod classify;
pub mod samples;
pub mod series;
pub mod session;
pub mod status;

pub use classify::{classify_hardness, classify_pm25, delta};
pub use series::ReadingSeries;
pub use session::Session;
pub use status::StatusReport;
