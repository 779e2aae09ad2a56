use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::{debug, warn};

use geodist::{Options, Point, compute_distance, resolve_earth_radius, units};

#[derive(Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    distance: DistanceArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported units and the earth radius used for each
    Units,
}

#[derive(Args)]
struct DistanceArgs {
    /// Start point as "lat,lon"
    #[arg(allow_hyphen_values = true)]
    start: Option<Point>,
    /// End point as "lat,lon"
    #[arg(allow_hyphen_values = true)]
    end: Option<Point>,
    /// Keep the fractional part
    #[arg(long)]
    exact: bool,
    /// Print "<value> <unit>"
    #[arg(long)]
    format: bool,
    /// Print whether the distance is below this value
    #[arg(long)]
    limit: Option<f64>,
    /// feet, yards, miles, mi, kilometers, km, meters or m
    #[arg(long)]
    unit: Option<String>,
}

impl DistanceArgs {
    fn options(&self) -> Options {
        Options {
            exact: self.exact,
            format: self.format,
            limit: self.limit,
            unit: self.unit.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Units) => print_units(),
        None => print_distance(&cli.distance)?,
    };

    Ok(())
}

fn print_units() {
    for (unit, radius) in units::known_units() {
        println!("{unit}\t{radius}");
    }
}

fn print_distance(args: &DistanceArgs) -> Result<()> {
    let (Some(start), Some(end)) = (args.start, args.end) else {
        return Err(anyhow::anyhow!("Both START and END points are required"));
    };

    let options = args.options();
    if let Some(unit) = options.unit.as_deref() {
        if !unit.is_empty() && !units::is_known_unit(unit) {
            warn!("Unknown unit {unit:?}, computing in {}", geodist::DEFAULT_UNIT);
        }
    }
    debug!(
        "start: {start}, end: {end}, radius: {}, options: {options:?}",
        resolve_earth_radius(options.unit.as_deref())
    );

    println!("{}", compute_distance(&start, &end, &options));

    Ok(())
}
