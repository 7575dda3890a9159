use serde::{Deserialize, Serialize};
use std::fmt;

/// The two indicators this crate knows how to fetch and interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// GDP in current US dollars (`NY.GDP.MKTP.CD`).
    Gdp,
    /// Consumer price inflation, annual percent (`FP.CPI.TOTL.ZG`).
    Inflation,
}

impl Indicator {
    /// World Bank indicator id.
    pub fn code(&self) -> &'static str {
        match self {
            Indicator::Gdp => "NY.GDP.MKTP.CD",
            Indicator::Inflation => "FP.CPI.TOTL.ZG",
        }
    }

    /// Section heading used by tables.
    pub fn title(&self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP (Current US$)",
            Indicator::Inflation => "Inflation Rate (%)",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP",
            Indicator::Inflation => "Inflation",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Indicator::Gdp => "current US$",
            Indicator::Inflation => "annual %",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Metadata section returned by the API (position 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub pages: u32,
    /// Some responses encode `per_page` as a string, others as a number.
    /// Accept both and normalize to `u32`.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    pub total: u32,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl Visitor<'_> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v).map_err(|_| E::custom("value out of range for u32"))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

/// Placeholder reported as the offending date when a non-null row has none.
pub const MISSING_DATE: &str = "<missing>";

/// Raw entry from the API (position 1 array). Other fields of the record are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One year of one indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

/// A year-ordered indicator series. Always sorted ascending by year; may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct IndicatorSeries(Vec<Observation>);

impl IndicatorSeries {
    /// Build from arbitrary observations, sorting by year.
    pub fn from_observations(mut obs: Vec<Observation>) -> Self {
        // Stable: duplicate years keep their source order.
        obs.sort_by_key(|o| o.year);
        Self(obs)
    }

    /// Normalize raw API entries: drop null values, parse years, sort.
    ///
    /// Fails on the first non-null row whose `date` is missing or not an integer
    /// year; a partially converted series is never returned. Null rows are dropped
    /// before their dates are looked at.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, String> {
        let obs = entries
            .into_iter()
            .filter_map(|e| e.value.map(|v| (e.date, v)))
            .map(|(date, value)| match date {
                Some(d) => match d.trim().parse::<i32>() {
                    Ok(year) => Ok(Observation { year, value }),
                    Err(_) => Err(d),
                },
                None => Err(MISSING_DATE.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_observations(obs))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Earliest observation.
    pub fn first(&self) -> Option<&Observation> {
        self.0.first()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<&Observation> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<&[(i32, f64)]> for IndicatorSeries {
    fn from(pairs: &[(i32, f64)]) -> Self {
        Self::from_observations(
            pairs
                .iter()
                .map(|&(year, value)| Observation { year, value })
                .collect(),
        )
    }
}

impl<const N: usize> From<[(i32, f64); N]> for IndicatorSeries {
    fn from(pairs: [(i32, f64); N]) -> Self {
        Self::from(&pairs[..])
    }
}

/// Tidy export row (one row = one observation of one indicator for one country).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    pub country_code: String,
    pub indicator_id: String,
    pub year: i32,
    pub value: f64,
}
