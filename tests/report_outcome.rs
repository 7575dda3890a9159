use wbi_econ::api::{FetchError, Fetched};
use wbi_econ::interpret::Statement;
use wbi_econ::report::{CountryReport, Outcome};
use wbi_econ::{IndicatorSeries, countries};

fn report(gdp: Fetched, inflation: Fetched) -> CountryReport {
    CountryReport {
        country: *countries::lookup("BR").unwrap(),
        gdp,
        inflation,
    }
}

#[test]
fn ready_when_both_available() {
    let rep = report(
        Ok(IndicatorSeries::from([(2019, 1.8e12), (2020, 1.4e12)])),
        Ok(IndicatorSeries::from([(2019, 3.7), (2020, 3.2)])),
    );
    match rep.outcome() {
        Outcome::Ready { statements, gdp, .. } => {
            assert_eq!(gdp.len(), 2);
            assert_eq!(
                statements,
                vec![Statement::GdpDeclining, Statement::InflationStable(3.2)]
            );
        }
        Outcome::Unavailable => panic!("expected ready"),
    }
    let rows = rep.rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.country_code == "BR"));
    assert_eq!(rows[0].indicator_id, "NY.GDP.MKTP.CD");
    assert_eq!(rows[3].indicator_id, "FP.CPI.TOTL.ZG");
    assert_eq!(rows[3].year, 2020);
}

#[test]
fn either_failure_suppresses_everything() {
    let rep = report(
        Ok(IndicatorSeries::from([(2019, 1.0), (2020, 2.0)])),
        Err(FetchError::Shape("missing record array")),
    );
    assert_eq!(rep.outcome(), Outcome::Unavailable);
    assert!(rep.rows().is_empty());

    let rep = report(
        Err(FetchError::Api("invalid country".into())),
        Ok(IndicatorSeries::from([(2019, 1.0), (2020, 2.0)])),
    );
    assert_eq!(rep.outcome(), Outcome::Unavailable);
}

#[test]
fn empty_series_are_still_ready() {
    let rep = report(Ok(IndicatorSeries::default()), Ok(IndicatorSeries::default()));
    assert_eq!(
        rep.outcome(),
        Outcome::Ready {
            gdp: &IndicatorSeries::default(),
            inflation: &IndicatorSeries::default(),
            statements: vec![],
        }
    );
}
