// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lunar landing search.
//!
//! Load landing sites from a CSV file into a quadtree covering the whole Moon, then list
//! the sites inside a longitude/latitude box, ordered by landing date.
//!
//! Run:
//! - `cargo run -p understory_demos --example lunar_landing_search`
//! - `cargo run -p understory_demos --example lunar_landing_search -- 20 0 60 30`
//!
//! Load and search times are logged at `info` level. Process memory is not measured; the
//! tree's node and point counts are logged instead as a measure of its footprint. Set
//! `RUST_LOG=debug` to also see the quadtree's own events, such as rejected inserts.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{BoundingBox, Point, QuadTree};

const DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Parser)]
#[command(
    about = "List lunar landing sites inside a longitude/latitude box",
    allow_negative_numbers = true
)]
struct Args {
    /// Longitude of the box center, in degrees.
    #[arg(default_value_t = 0.0)]
    longitude: f64,
    /// Latitude of the box center, in degrees.
    #[arg(default_value_t = 0.0)]
    latitude: f64,
    /// Box width, in degrees of longitude.
    #[arg(default_value_t = 40.0)]
    width: f64,
    /// Box height, in degrees of latitude.
    #[arg(default_value_t = 40.0)]
    height: f64,
    /// Header-less CSV: name, launch date, landing date, latitude, longitude.
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/lunar_landings.csv"))]
    data: PathBuf,
}

#[derive(Clone, Debug)]
struct Landing {
    name: String,
    launched: NaiveDate,
    landed: NaiveDate,
}

fn parse_date(field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field, DATE_FORMAT)
        .with_context(|| format!("invalid date {field:?}, expected e.g. \"20 Jul 1969\""))
}

fn read_landings(path: &Path) -> Result<Vec<Point<Landing>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut landings = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading line {}", line + 1))?;
        let field = |i: usize| {
            record
                .get(i)
                .with_context(|| format!("line {}: missing column {}", line + 1, i + 1))
        };
        let name = field(0)?;
        if name.is_empty() {
            continue;
        }
        let launched = parse_date(field(1)?)?;
        let landed = parse_date(field(2)?)?;
        let latitude: f64 = field(3)?
            .parse()
            .with_context(|| format!("line {}: invalid latitude", line + 1))?;
        let longitude: f64 = field(4)?
            .parse()
            .with_context(|| format!("line {}: invalid longitude", line + 1))?;
        landings.push(Point::with_payload(
            longitude,
            latitude,
            Landing {
                name: name.to_owned(),
                launched,
                landed,
            },
        ));
    }
    Ok(landings)
}

fn build_tree(path: &Path) -> Result<QuadTree<Landing>> {
    // The whole Moon: longitude -180..180, latitude -90..90.
    let globe = BoundingBox::new(Point::new(0.0, 0.0), 360.0, 180.0)?;
    let mut tree = QuadTree::new(globe);
    for rejected in tree.insert_many(read_landings(path)?) {
        warn!("skipping {}: {rejected}", rejected.point().payload.name);
    }
    let stats = tree.stats();
    info!(
        nodes = stats.nodes,
        leaves = stats.leaves,
        depth = stats.depth,
        "added {} landings to the quadtree",
        stats.points
    );
    Ok(tree)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let tree = build_tree(&args.data)?;
    info!("load time: {:.4} s", start.elapsed().as_secs_f64());

    let start = Instant::now();
    let search = BoundingBox::new(
        Point::new(args.longitude, args.latitude),
        args.width,
        args.height,
    )
    .context("invalid search box")?;
    let mut results = tree.search(&search);
    results.sort_by_key(|p| p.payload.landed);

    println!("Landings in range");
    println!(
        "    Latitude: {:+.6} -> {:+.6}",
        search.min_y(),
        search.max_y()
    );
    println!(
        "    Longitude: {:+.6} -> {:+.6}",
        search.min_x(),
        search.max_x()
    );
    println!();

    if results.is_empty() {
        println!("No matches found");
    } else {
        for p in &results {
            println!(
                "    {},\tLaunched: {}  Landed: {}  Lat: {:+07.2} Long: {:+07.2}",
                p.payload.name,
                p.payload.launched.format(DATE_FORMAT),
                p.payload.landed.format(DATE_FORMAT),
                p.y,
                p.x
            );
        }
    }
    println!();
    info!("search time: {:.4} s", start.elapsed().as_secs_f64());

    Ok(())
}
