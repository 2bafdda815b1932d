use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use shapebox::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use report::BoxReport;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Fill, inspect, and filter a fixed-capacity shape box")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Walk through a small box scenario and print the final report
    Demo,
    /// Fill a box with seeded random shapes and print or write its report
    Sample {
        #[arg(long, default_value_t = 8)]
        capacity: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Remove every shape of this kind after filling (e.g. `circle`)
        #[arg(long)]
        remove: Option<ShapeKind>,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print library version and code revision
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Sample {
            capacity,
            seed,
            remove,
            out,
        } => sample(capacity, seed, remove, out),
        Action::Report => report(),
    }
}

fn demo() -> Result<()> {
    let mut bx = ShapeBox::new(3);
    bx.add(Box::new(Circle::new(2.0)?))?;
    bx.add(Box::new(Rectangle::new(2.0, 3.0)?))?;
    bx.add(Box::new(Circle::new(1.0)?))?;
    tracing::info!(len = bx.len(), sum_area = bx.sum_area(), "filled");

    if let Err(err) = bx.add(Box::new(Square::new(1.0)?)) {
        tracing::info!(%err, "fourth add rejected");
    }

    let removed = bx.remove_all_circles()?;
    tracing::info!(removed, len = bx.len(), "removed circles");
    match bx.remove_all_circles() {
        Err(err) => tracing::info!(%err, "second removal"),
        Ok(n) => tracing::warn!(n, "second removal unexpectedly matched"),
    }

    let old = bx.replace(0, Box::new(Triangle::new(3.0)?))?;
    tracing::info!(old = %old.kind(), new = %bx.get(0)?.kind(), "replaced");

    println!("{}", serde_json::to_string_pretty(&BoxReport::of(&bx))?);
    Ok(())
}

fn sample(
    capacity: usize,
    seed: u64,
    remove: Option<ShapeKind>,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(capacity, seed, remove = ?remove, out = ?out, "sample");
    let cfg = SampleCfg::default();
    let mut bx = ShapeBox::new(capacity);
    let added = fill_box(&mut bx, &cfg, seed).context("sampling shapes")?;
    ensure!(added == capacity, "sampler added {added} of {capacity} shapes");

    if let Some(kind) = remove {
        match bx.remove_all_of_kind(kind) {
            Ok(n) => tracing::info!(%kind, removed = n, "removed"),
            Err(err) => tracing::warn!(%err, "nothing removed"),
        }
    }

    let rep = BoxReport::of(&bx);
    match out {
        Some(path) => {
            let params = json!({
                "capacity": capacity,
                "seed": seed,
                "remove": remove.map(|k| k.to_string()),
            });
            provenance::write_with_sidecar(&path, &rep, params)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&rep)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "version": shapebox::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
