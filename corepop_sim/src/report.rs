//! Human-readable report of a finished run.

use corepop_core::{PopulationSummary, DAYS_PER_YEAR};
use std::fmt;

/// Text report over a [`PopulationSummary`].
///
/// Lists every level that still has cores, the number of Ancients left, then
/// the rank rollup up to the first rank nobody reached.
pub struct TextReport<'a>(pub &'a PopulationSummary);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        for row in summary.levels.iter().filter(|row| row.surviving > 0) {
            writeln!(f, "LVL: {}  \tRank: {}", row.level, row.rank)?;
            writeln!(f, "\tpassed:{}", row.passed)?;
            writeln!(f, "\tdied:{}", row.died)?;
            writeln!(f, "\t%died:{}", format_percent(row.died_percent()))?;
            match row.average_age_days {
                Some(age) => writeln!(
                    f,
                    "\taverage_age:{} days | Year {}",
                    age,
                    age / DAYS_PER_YEAR
                )?,
                None => writeln!(f, "\taverage_age:-")?,
            }
            writeln!(f, "\tancients alive:{}", row.ancients)?;
            writeln!(f, "\tfinal:{}", row.surviving)?;
        }

        write!(f, "\nTotal ancients still alive {}", summary.total_ancients)?;

        for band in summary.ranks.iter().take_while(|band| band.passed > 0) {
            write!(f, "\nRank: {}", band.rank)?;
            write!(f, "\n\tpassed:{}", band.passed)?;
            write!(f, "\n\tdied:{}", band.died)?;
            write!(f, "\n\tfinal:{}", band.surviving)?;
            write!(f, "\n\t%died:{}", format_percent(band.died_percent()))?;
        }

        writeln!(f)
    }
}

fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(value) => format!("{:.3}", value),
        None => "-".to_string(),
    }
}
