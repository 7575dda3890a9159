//! Fixed table of countries offered for selection, with their World Bank ISO2 codes.

/// A selectable country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
}

pub const COUNTRIES: [Country; 11] = [
    Country { name: "India", code: "IN" },
    Country { name: "United States", code: "US" },
    Country { name: "United Kingdom", code: "GB" },
    Country { name: "China", code: "CN" },
    Country { name: "Japan", code: "JP" },
    Country { name: "Germany", code: "DE" },
    Country { name: "France", code: "FR" },
    Country { name: "Canada", code: "CA" },
    Country { name: "Australia", code: "AU" },
    Country { name: "Brazil", code: "BR" },
    Country { name: "Russia", code: "RU" },
];

/// Find a country by display name or code (case-insensitive, surrounding whitespace ignored).
pub fn lookup(query: &str) -> Option<&'static Country> {
    let q = query.trim();
    if q.is_empty() {
        return None;
    }
    COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(q) || c.code.eq_ignore_ascii_case(q))
}
