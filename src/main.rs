//! Geo distance matrix tool
//!
//! Reads named geographic points from a CSV file and answers distance queries
//! over them: point-to-point distance, min/max pairwise distance and the number
//! of pairs closer than a cutoff, optionally restricted to a subset of ids.

use clap::Parser;
use csv::ReaderBuilder;
use env_logger::Env;
use geo_distmatrix::Collection;
use log::{debug, info, warn};
use std::fs::File;
use std::path::PathBuf;

#[cfg(test)]
mod main_test;

#[derive(Parser)]
#[command(name = "geo_distmatrix")]
#[command(about = "Pairwise great-circle distance queries over geo points", long_about = None)]
struct Args {
    /// Input CSV file with id,latitude,longitude columns
    #[arg(short, long, default_value = "points.csv")]
    input: PathBuf,

    /// Collection name used in diagnostic output
    #[arg(long, default_value = "points")]
    name: String,

    /// Print the distance from this point (requires --to)
    #[arg(short, long, requires = "to")]
    from: Option<String>,

    /// Print the distance to this point (requires --from)
    #[arg(short, long, requires = "from")]
    to: Option<String>,

    /// Print the minimum and maximum pairwise distance in meters
    #[arg(short, long)]
    min_max: bool,

    /// Print the number of pairs closer than this many meters
    #[arg(short, long)]
    below: Option<i64>,

    /// Restrict --min-max and --below to these ids; unknown ids are ignored
    #[arg(short, long, value_delimiter = ',')]
    subset: Option<Vec<String>>,

    /// Print the point listing and the distance matrix rows
    #[arg(long)]
    dump: bool,

    /// Verbosity level: off, error, warn, info, debug, trace
    #[arg(short, long, default_value = "warn")]
    loglevel: String,
}

fn main() {
    let args = Args::parse();

    let env = Env::default().filter_or("GEODIST_LOG", &args.loglevel);
    env_logger::init_from_env(env);

    let mut collection = match read_collection(&args.input, &args.name) {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            std::process::exit(1);
        }
    };

    if collection.is_empty() {
        warn!("No points found in {:?}", args.input);
    }
    info!("Read {} points from {:?}", collection.len(), args.input);

    if let Err(e) = run_queries(&args, &mut collection) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Runs every query requested on the command line, printing one result per line
fn run_queries(args: &Args, collection: &mut Collection) -> geo_distmatrix::Result<()> {
    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        let dist = collection.distance(from, to)?;
        println!("{dist}");
    }

    if args.min_max {
        let (min, max) = match &args.subset {
            Some(ids) => collection.min_max_subset(ids)?,
            None => collection.min_max()?,
        };
        println!("{min},{max}");
    }

    if let Some(cutoff) = args.below {
        let count = match &args.subset {
            Some(ids) => collection.count_below_subset(ids, cutoff)?,
            None => collection.count_below(cutoff)?,
        };
        println!("{count}");
    }

    if args.dump {
        for line in dump_lines(collection) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Reads a collection from a CSV file
///
/// Expected format: `id,latitude,longitude` (header row is optional)
///
/// Rows with fewer than three columns or unparsable coordinates are skipped.
/// A repeated id is an error.
fn read_collection(
    filename: &PathBuf,
    name: &str,
) -> Result<Collection, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut collection = Collection::new(name);

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 3 {
            debug!("Skipping row {row}: {} columns", record.len());
            continue;
        }

        let lat = record[1].parse::<f64>();
        let lon = record[2].parse::<f64>();
        match (lat, lon) {
            (Ok(lat), Ok(lon)) => collection.add(&record[0], lat, lon)?,
            // header row
            _ if row == 0 => debug!("Skipping header {:?}", record),
            _ => warn!("Skipping row {row}: unparsable coordinates {:?}", record),
        }
    }

    Ok(collection)
}

/// Formats the point listing followed by the matrix rows
fn dump_lines(collection: &mut Collection) -> Vec<String> {
    let mut lines = vec![format!("Collection: {}", collection.id())];
    for point in collection.points() {
        lines.push(format!(
            "< {} > {}: Lat: {:.6}, Long: {:.6}",
            point.position, point.id, point.lat, point.lon
        ));
    }
    for (ix, row) in collection.matrix().rows().enumerate() {
        lines.push(format!("{ix}: {row:?}"));
    }
    lines
}
