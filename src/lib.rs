//! wbi_econ
//!
//! Fetch GDP and inflation series for a country from the World Bank Indicators API,
//! render them as tables and line charts, and produce a short rule-based reading of
//! the trends. Pairs with the `wbi-econ` CLI.
//!
//! ### Features
//! - Fixed table of eleven countries, looked up by name or ISO2 code
//! - One-request fetch per indicator, normalized to a year-sorted series
//! - Threshold rules for GDP direction and inflation level
//! - SVG/PNG line charts, text tables, CSV/JSON export
//!
//! ### Example
//! ```no_run
//! use wbi_econ::{Client, countries, report};
//!
//! let client = Client::default();
//! let india = countries::lookup("India").unwrap();
//! let rep = report::build(&client, india);
//! match rep.outcome() {
//!     report::Outcome::Ready { statements, .. } => {
//!         print!("{}", wbi_econ::interpret::to_bullets(&statements));
//!     }
//!     report::Outcome::Unavailable => eprintln!("{}", report::UNAVAILABLE_MESSAGE),
//! }
//! ```

pub mod api;
pub mod countries;
pub mod interpret;
pub mod models;
pub mod report;
pub mod storage;
pub mod viz;

pub use api::{Client, ClientConfig, FetchError, Fetched};
pub use countries::{COUNTRIES, Country};
pub use interpret::{Statement, interpret};
pub use models::{Indicator, IndicatorSeries, Observation};
