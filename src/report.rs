//! Per-country report: both fetches, the all-or-nothing outcome, and text tables.

use crate::api::{Client, Fetched};
use crate::countries::Country;
use crate::interpret::{Statement, interpret};
use crate::models::{Indicator, IndicatorSeries, TableRow};
use log::info;
use num_format::{Locale, ToFormattedString};
use std::fmt::Write as _;

/// Shown instead of any output when either series is unavailable.
pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to fetch data. Please try another country or check your internet connection.";

/// Raw fetch results for one country.
#[derive(Debug)]
pub struct CountryReport {
    pub country: Country,
    pub gdp: Fetched,
    pub inflation: Fetched,
}

/// What the shell should render.
#[derive(Debug, PartialEq)]
pub enum Outcome<'a> {
    Ready {
        gdp: &'a IndicatorSeries,
        inflation: &'a IndicatorSeries,
        statements: Vec<Statement>,
    },
    Unavailable,
}

/// Fetch GDP then inflation for `country`.
pub fn build(client: &Client, country: &Country) -> CountryReport {
    info!("fetching indicators for {} ({})", country.name, country.code);
    let gdp = client.fetch_series(country.code, Indicator::Gdp.code());
    let inflation = client.fetch_series(country.code, Indicator::Inflation.code());
    CountryReport {
        country: *country,
        gdp,
        inflation,
    }
}

impl CountryReport {
    /// Either everything is renderable, or nothing is.
    pub fn outcome(&self) -> Outcome<'_> {
        match (&self.gdp, &self.inflation) {
            (Ok(gdp), Ok(inflation)) => Outcome::Ready {
                gdp,
                inflation,
                statements: interpret(Some(gdp), Some(inflation)),
            },
            _ => Outcome::Unavailable,
        }
    }

    /// Tidy rows for export; empty unless both series are available.
    pub fn rows(&self) -> Vec<TableRow> {
        let Outcome::Ready { gdp, inflation, .. } = self.outcome() else {
            return Vec::new();
        };
        [(Indicator::Gdp, gdp), (Indicator::Inflation, inflation)]
            .into_iter()
            .flat_map(|(ind, series)| {
                series.iter().map(move |o| TableRow {
                    country_code: self.country.code.to_string(),
                    indicator_id: ind.code().to_string(),
                    year: o.year,
                    value: o.value,
                })
            })
            .collect()
    }
}

/// Map a user-provided locale tag to a num-format Locale and decimal separator.
/// Supported tags (case-insensitive): "en", "us", "en_US", "de", "de_DE", "german", "fr", "es", "it", "pt", "nl"
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Format with locale grouping and two decimals, e.g. `1,234.50` / `1.234,50`.
pub fn format_value(v: f64, locale: &Locale, dec_sep: char) -> String {
    if !v.is_finite() {
        return "NA".into();
    }
    let cents = (v.abs() * 100.0).round() as u64;
    let sign = if v < 0.0 && cents != 0 { "-" } else { "" };
    format!(
        "{}{}{}{:02}",
        sign,
        (cents / 100).to_formatted_string(locale),
        dec_sep,
        cents % 100
    )
}

/// Two-column text table (Year, Value) for one series.
pub fn render_table(series: &IndicatorSeries, indicator: Indicator, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    let cells: Vec<(String, String)> = series
        .iter()
        .map(|o| (o.year.to_string(), format_value(o.value, locale, dec_sep)))
        .collect();
    let value_header = format!("Value ({})", indicator.unit());
    let year_w = cells.iter().map(|(y, _)| y.len()).max().unwrap_or(0).max(4);
    let val_w = cells
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(value_header.chars().count());

    let mut out = String::new();
    let _ = writeln!(out, "{:<year_w$}  {:>val_w$}", "Year", value_header);
    let _ = writeln!(out, "{}  {}", "-".repeat(year_w), "-".repeat(val_w));
    for (y, v) in &cells {
        let _ = writeln!(out, "{:<year_w$}  {:>val_w$}", y, v);
    }
    if cells.is_empty() {
        let _ = writeln!(out, "(no observations)");
    }
    out
}
