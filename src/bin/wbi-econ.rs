use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use wbi_econ::api::DEFAULT_BASE_URL;
use wbi_econ::models::TableRow;
use wbi_econ::report::{self, Outcome, UNAVAILABLE_MESSAGE};
use wbi_econ::{COUNTRIES, Client, ClientConfig, Indicator, countries, interpret, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "wbi-econ",
    version,
    about = "Explore GDP and inflation trends for a country using World Bank data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the countries that can be explored.
    Countries,
    /// Fetch GDP and inflation for one country, print tables and an interpretation.
    Explore(ExploreArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Debug)]
enum PlotFormat {
    Svg,
    Png,
}

impl PlotFormat {
    fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Svg => "svg",
            PlotFormat::Png => "png",
        }
    }
}

#[derive(Args, Debug)]
struct ExploreArgs {
    /// Country name or ISO2 code (e.g., "India" or IN). See `wbi-econ countries`.
    #[arg(short, long)]
    country: String,
    /// Write `gdp_<CODE>.<ext>` and `inflation_<CODE>.<ext>` charts into this directory.
    #[arg(long)]
    plot_dir: Option<PathBuf>,
    /// Chart file type.
    #[arg(long, value_enum, default_value = "svg")]
    plot_format: PlotFormat,
    /// Width of the plots (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plots (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Save both series to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// API base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Countries => cmd_countries(),
        Command::Explore(args) => cmd_explore(args),
    }
}

fn cmd_countries() -> Result<()> {
    for c in COUNTRIES.iter() {
        println!("{:<4} {}", c.code, c.name);
    }
    Ok(())
}

fn cmd_explore(args: ExploreArgs) -> Result<()> {
    let Some(country) = countries::lookup(&args.country) else {
        bail!(
            "unknown country {:?}; run `wbi-econ countries` for the list",
            args.country
        );
    };

    let client = Client::new(ClientConfig {
        base_url: args.base_url.clone(),
    });
    let rep = report::build(&client, country);

    let Outcome::Ready {
        gdp,
        inflation,
        statements,
    } = rep.outcome()
    else {
        bail!(UNAVAILABLE_MESSAGE);
    };

    println!("Economic Data for {}", country.name);
    println!();
    for (indicator, series) in [(Indicator::Gdp, gdp), (Indicator::Inflation, inflation)] {
        println!("{}", indicator.title());
        print!("{}", report::render_table(series, indicator, &args.locale));
        println!();
    }
    println!("Interpretation");
    print!("{}", interpret::to_bullets(&statements));

    if let Some(dir) = args.plot_dir.as_ref() {
        std::fs::create_dir_all(dir)?;
        for (indicator, series, stem) in [
            (Indicator::Gdp, gdp, "gdp"),
            (Indicator::Inflation, inflation, "inflation"),
        ] {
            if series.is_empty() {
                eprintln!("No {} observations, skipping chart", indicator.short_name());
                continue;
            }
            let path = dir.join(format!(
                "{}_{}.{}",
                stem,
                country.code,
                args.plot_format.extension()
            ));
            viz::plot_series(
                series,
                indicator,
                country.name,
                &path,
                args.width,
                args.height,
                &args.locale,
            )?;
            eprintln!("Wrote plot to {}", path.display());
        }
    }

    if let Some(path) = args.out.as_ref() {
        save_rows(&rep.rows(), path, args.format.as_ref())?;
    }

    Ok(())
}

fn save_rows(rows: &[TableRow], path: &Path, format: Option<&OutFormat>) -> Result<()> {
    let fmt = match format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(rows, path)?,
        "json" => storage::save_json(rows, path)?,
        other => bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}
