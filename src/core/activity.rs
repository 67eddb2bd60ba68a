//! In-memory activity log of the current session.
//! Mirrors what happens to the series (seed, add, import, export) and to
//! the language model (forecast, ask) so the shell can replay it.

use ansi_term::Colour;
use chrono::{Local, NaiveDateTime};

const MAX_OP_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub at: NaiveDateTime,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

/// Colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "seed" => Colour::Purple,
        "import" => Colour::Purple,
        "add" => Colour::Green,
        "export" => Colour::Blue,
        "forecast" => Colour::Cyan,
        "ask" => Colour::Cyan,
        _ => Colour::White,
    }
}

impl ActivityLog {
    pub fn record(&mut self, operation: &str, target: &str, message: impl Into<String>) {
        self.entries.push(ActivityEntry {
            at: Local::now().naive_local(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the log, one line per entry, with the operation coloured.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "No activity recorded in this session.\n".to_string();
        }

        let id_w = self.entries.len().to_string().len();
        let op_w = self
            .entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        let mut out = String::new();
        for (i, e) in self.entries.iter().enumerate() {
            let plain = truncate(&op_target(e), MAX_OP_WIDTH);
            let padding = " ".repeat(op_w.saturating_sub(plain.chars().count()));

            // only the operation word is coloured
            let colored = match plain.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&e.operation).paint(op), rest),
                None => color_for_operation(&e.operation).paint(plain.as_str()).to_string(),
            };

            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                i + 1,
                e.at.format("%Y-%m-%d %H:%M:%S"),
                colored,
                padding,
                e.message,
                id_w = id_w
            ));
        }
        out
    }
}

fn op_target(e: &ActivityEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
