use std::fs;
use std::path::PathBuf;
use wbi_econ::viz::{self, chart_title};
use wbi_econ::{Indicator, IndicatorSeries};

fn gdp() -> IndicatorSeries {
    IndicatorSeries::from([
        (2018, 2.70e12),
        (2019, 2.83e12),
        (2020, 2.67e12),
        (2021, 3.15e12),
    ])
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join(format!("wbi_econ_{}.svg", name));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
    fs::read_to_string(&path).unwrap()
}

#[test]
fn gdp_chart_has_title_and_scaled_axis() {
    let svg = write_and_check(
        |p| viz::plot_series(&gdp(), Indicator::Gdp, "India", p, 800, 480, "en").unwrap(),
        "gdp",
    );
    assert!(svg.contains("GDP Trend - India"));
    assert!(svg.contains("trillions"));
}

#[test]
fn single_point_series_still_renders() {
    let s = IndicatorSeries::from([(2020, 4.5)]);
    let svg = write_and_check(
        |p| viz::plot_series(&s, Indicator::Inflation, "Japan", p, 640, 400, "de").unwrap(),
        "single",
    );
    assert!(svg.contains(&chart_title(Indicator::Inflation, "Japan")));
}

#[test]
fn empty_series_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let err = viz::plot_series(
        &IndicatorSeries::default(),
        Indicator::Gdp,
        "France",
        &path,
        640,
        400,
        "en",
    );
    assert!(err.is_err());
    assert!(!path.exists());
}

#[test]
fn png_chart_draws_text_with_bundled_font() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gdp_IN.png");
    let s = IndicatorSeries::from([(2018, 2.7e12), (2019, 2.8e12), (2020, 2.6e12)]);
    viz::plot_series(&s, Indicator::Gdp, "India", &path, 400, 300, "en").unwrap();
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "png signature");
}
