//! Rule-based reading of GDP and inflation trends.
//!
//! Each rule looks at one series only and needs at least two observations.
//! The GDP rule compares the earliest and most recent values; intermediate
//! reversals are not considered.

use crate::models::IndicatorSeries;
use std::fmt;

/// Latest inflation above this is "high".
pub const HIGH_INFLATION_PCT: f64 = 6.0;
/// Latest inflation below this is "very low".
pub const LOW_INFLATION_PCT: f64 = 2.0;

/// Minimum observations before a series is interpreted.
const MIN_OBSERVATIONS: usize = 2;

/// One interpretation sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement {
    GdpGrowing,
    GdpDeclining,
    InflationHigh(f64),
    InflationVeryLow(f64),
    InflationStable(f64),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::GdpGrowing => {
                write!(f, "GDP is growing overall, indicating economic expansion.")
            }
            Statement::GdpDeclining => {
                write!(f, "GDP is declining, suggesting slower economic activity.")
            }
            Statement::InflationHigh(v) => {
                write!(f, "Inflation is high ({v:.2}%), risk of rapid price increases.")
            }
            Statement::InflationVeryLow(v) => {
                write!(f, "Inflation is very low ({v:.2}%), may indicate weak demand.")
            }
            Statement::InflationStable(v) => {
                write!(f, "Inflation is stable ({v:.2}%), which is healthy.")
            }
        }
    }
}

/// Interpret the two series. A `None` series (unavailable) or one with fewer than
/// two observations contributes no statement. GDP comes before inflation.
pub fn interpret(
    gdp: Option<&IndicatorSeries>,
    inflation: Option<&IndicatorSeries>,
) -> Vec<Statement> {
    let mut out = Vec::with_capacity(2);
    if let Some(s) = gdp.and_then(gdp_trend) {
        out.push(s);
    }
    if let Some(s) = inflation.and_then(inflation_level) {
        out.push(s);
    }
    out
}

fn endpoints(series: &IndicatorSeries) -> Option<(f64, f64)> {
    if series.len() < MIN_OBSERVATIONS {
        return None;
    }
    Some((series.first()?.value, series.last()?.value))
}

fn gdp_trend(series: &IndicatorSeries) -> Option<Statement> {
    let (first, last) = endpoints(series)?;
    Some(if last > first {
        Statement::GdpGrowing
    } else {
        Statement::GdpDeclining
    })
}

fn inflation_level(series: &IndicatorSeries) -> Option<Statement> {
    let (_, latest) = endpoints(series)?;
    Some(if latest > HIGH_INFLATION_PCT {
        Statement::InflationHigh(latest)
    } else if latest < LOW_INFLATION_PCT {
        Statement::InflationVeryLow(latest)
    } else {
        Statement::InflationStable(latest)
    })
}

/// Render statements as markdown-style bullet lines, one per statement.
pub fn to_bullets(statements: &[Statement]) -> String {
    statements.iter().map(|s| format!("- {s}\n")).collect()
}
