use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use urania::ephemeris::{Ephemeris, MeanElementsEphemeris};
use urania::{compute_natal_chart_with, BirthQuery};
use urania_config::{load_config_with_source, EphemerisBackend, EphemerisConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a natal chart and print it as JSON")]
struct Args {
    #[arg(long)]
    year: i32,

    #[arg(long)]
    month: u32,

    #[arg(long)]
    day: u32,

    /// Local clock hour 0-23. Omit, or pass -1, when the birth time is unknown.
    #[arg(long, allow_negative_numbers = true)]
    hour: Option<i32>,

    #[arg(long, default_value_t = 0)]
    minute: u32,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Hours east of UTC, fractional allowed (e.g. 5.5, -3.5).
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    utc_offset: f64,

    /// Label echoed back in the chart.
    #[arg(long)]
    city: Option<String>,

    /// Config file (otherwise urania.toml, configs/urania.toml, ../../configs/urania.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON (overrides the config file).
    #[arg(long, action = clap::ArgAction::Set)]
    pretty: Option<bool>,
}

fn build_ephemeris(cfg: &EphemerisConfig) -> anyhow::Result<Box<dyn Ephemeris>> {
    match cfg.backend {
        EphemerisBackend::MeanElements => Ok(Box::new(MeanElementsEphemeris::new())),
        #[cfg(feature = "swisseph")]
        EphemerisBackend::Swiss => {
            let adapter = urania::ephemeris::SwissEphemerisAdapter::locate(cfg.path.clone())
                .context("Failed to initialise the Swiss Ephemeris backend")?;
            if adapter.is_moshier() {
                log::info!("Swiss Ephemeris running in Moshier mode (no data files)");
            }
            Ok(Box::new(adapter))
        }
        #[cfg(not(feature = "swisseph"))]
        EphemerisBackend::Swiss => anyhow::bail!(
            "ephemeris.backend = \"swiss\" needs urania_cli built with the `swisseph` feature"
        ),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, source) = load_config_with_source(args.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    match &source {
        Some(path) => log::debug!("Loaded config from {}", path.display()),
        None => log::debug!("No config file found; using defaults"),
    }

    if !(-90.0..=90.0).contains(&args.lat) {
        anyhow::bail!("--lat must be within [-90, 90], got {}", args.lat);
    }
    if !(-180.0..=180.0).contains(&args.lon) {
        anyhow::bail!("--lon must be within [-180, 180], got {}", args.lon);
    }

    let query = BirthQuery {
        year: args.year,
        month: args.month,
        day: args.day,
        hour: args.hour.unwrap_or(BirthQuery::UNKNOWN_HOUR),
        minute: args.minute,
        latitude: args.lat,
        longitude: args.lon,
        city: args.city,
        utc_offset: args.utc_offset,
    };

    let ephemeris = build_ephemeris(&config.ephemeris)?;
    log::info!("Using {:?} ephemeris backend", config.ephemeris.backend);

    let chart = compute_natal_chart_with(&query, ephemeris.as_ref())
        .with_context(|| format!("Failed to compute chart for {query:?}"))?;

    let pretty = args.pretty.unwrap_or(config.pretty);
    let json = chart.to_json(pretty).context("Failed to serialize chart")?;
    println!("{json}");
    Ok(())
}
