use crate::cli::parser::ListArgs;
use crate::core::classify::{classify_hardness, classify_pm25};
use crate::core::series::ReadingSeries;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(session: &mut Session, args: &ListArgs) -> AppResult<()> {
    let series = session.series();
    print!("{}", render(series, args.last));
    println!("{} readings in session", series.len());
    Ok(())
}

/// Table of readings (oldest first), optionally only the last `last` ones.
pub fn render(series: &ReadingSeries, last: Option<usize>) -> String {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("recorded_at"),
        Column::left("location"),
        Column::right("PM2.5"),
        Column::left("air"),
        Column::right("hardness"),
        Column::left("water"),
        Column::right("temp"),
        Column::right("pH"),
    ]);

    let skip = last.map(|n| series.len().saturating_sub(n)).unwrap_or(0);

    for (i, r) in series.iter().enumerate().skip(skip) {
        table.add_row(vec![
            (i + 1).to_string(),
            r.timestamp_str(),
            r.location.clone(),
            format!("{:.1}", r.pm25),
            classify_pm25(r.pm25).label().to_string(),
            format!("{:.0}", r.hardness),
            classify_hardness(r.hardness).label().to_string(),
            format!("{:.1}", r.temperature),
            format!("{:.1}", r.ph),
        ]);
    }

    table.render()
}
