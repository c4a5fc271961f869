use std::fmt;

use crate::preview::RESERVED_COLUMNS;

const FALLBACK: TerminalDimensions = TerminalDimensions {
    columns: 80,
    rows: 24,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalDimensions {
    pub columns: usize,
    pub rows: usize,
}

impl TerminalDimensions {
    /// `COLUMNS`/`LINES` first, then the attached terminal, then 80x24.
    pub fn detect() -> Self {
        let env = |var: &str| std::env::var(var).ok();
        let queried = crossterm::terminal::size()
            .ok()
            .map(|(c, r)| (c as usize, r as usize));
        Self::resolve(env("COLUMNS").as_deref(), env("LINES").as_deref(), queried)
    }

    fn resolve(
        columns: Option<&str>,
        rows: Option<&str>,
        queried: Option<(usize, usize)>,
    ) -> Self {
        let positive = |v: Option<&str>| {
            v.and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
        };
        let (q_cols, q_rows) = queried
            .filter(|(c, r)| *c > 0 && *r > 0)
            .unwrap_or((FALLBACK.columns, FALLBACK.rows));
        Self {
            columns: positive(columns).unwrap_or(q_cols),
            rows: positive(rows).unwrap_or(q_rows),
        }
    }

    /// Columns left for preview text once indent and ellipsis are accounted for.
    pub fn preview_budget(&self) -> usize {
        self.columns.saturating_sub(RESERVED_COLUMNS)
    }
}

impl fmt::Display for TerminalDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "columns={}, rows={}", self.columns, self.rows)
    }
}
