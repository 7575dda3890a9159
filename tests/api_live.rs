//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use wbi_econ::{Client, Indicator, countries, report};

#[test]
fn fetch_gdp_for_india() {
    let cli = Client::default();
    let series = cli.fetch_series("IN", Indicator::Gdp.code()).unwrap();
    assert!(series.len() > 10);
    let years: Vec<i32> = series.iter().map(|o| o.year).collect();
    assert!(years.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn report_for_every_country_is_ready() {
    let cli = Client::default();
    for c in countries::COUNTRIES.iter() {
        let rep = report::build(&cli, c);
        assert!(
            matches!(rep.outcome(), report::Outcome::Ready { .. }),
            "{} unavailable",
            c.name
        );
    }
}
