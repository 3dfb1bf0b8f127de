use std::{fmt::Write as _, path::PathBuf, sync::Arc, time::Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use cliclack::{intro, note, outro, progress_bar};
use seed_seer::{
    data, date::{format_day, is_cart_day}, predict_cart, predict_day, predict_geodes,
    predict_mine_floors, GameVersion, GeodeKind, Progress, SeedFinder,
};

/// Stardew Valley seed predictor and finder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict one day's outcomes for a seed.
    Predict {
        #[arg(allow_negative_numbers = true)]
        seed: i32,

        /// In-game day, counted from 1.
        #[arg(long, default_value_t = 1)]
        day: u32,

        #[arg(long, default_value = "1.6")]
        version: GameVersion,

        /// Also scan mine floors up to this level.
        #[arg(long)]
        floors: Option<u32>,
    },

    /// Predict a run of geode contents.
    Geodes {
        #[arg(allow_negative_numbers = true)]
        seed: i32,

        /// Geode kind to crack.
        #[arg(long, default_value = "omni")]
        kind: GeodeKind,

        /// Number of the first geode (the counter starts at 1).
        #[arg(long, default_value_t = 1)]
        start: u32,

        #[arg(long, default_value_t = 10)]
        count: u32,

        #[arg(long, default_value = "1.6")]
        version: GameVersion,
    },

    /// Predict the traveling cart's stock for a day.
    Cart {
        #[arg(allow_negative_numbers = true)]
        seed: i32,

        #[arg(long, default_value_t = 5)]
        day: u32,

        #[arg(long, default_value = "1.6")]
        version: GameVersion,
    },

    /// Search a seed range using a JSON search config.
    Find { config_file: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Predict { seed, day, version, floors } => predict(seed, day, version, floors),
        Command::Geodes { seed, kind, start, count, version } => {
            geodes(seed, kind, start, count, version)
        }
        Command::Cart { seed, day, version } => cart(seed, day, version),
        Command::Find { config_file } => find(config_file),
    }
}

fn predict(seed: i32, day: u32, version: GameVersion, floors: Option<u32>) -> Result<()> {
    intro("Seed Seer")?;

    let p = predict_day(seed, day, version)?;
    let mut report = String::new();
    writeln!(report, "{}", format_day(day))?;
    writeln!(report, "Luck: {:+.3}", p.luck)?;
    writeln!(
        report,
        "Dish of the Day: {} {}",
        p.dish.quantity,
        data::object_name(p.dish.id)
    )?;
    writeln!(report, "Weather: {}", p.weather)?;
    writeln!(report, "Night Event: {}", p.night_event)?;
    if let Some(items) = &p.cart {
        writeln!(report, "Traveling Cart:")?;
        for it in items {
            writeln!(
                report,
                "  {}x {} for {}g",
                it.quantity,
                data::object_name(it.id),
                it.price
            )?;
        }
    }
    if let Some(max_floor) = floors {
        writeln!(report, "Mine floors 1..{max_floor}:")?;
        for f in predict_mine_floors(seed, day, 1, max_floor, version) {
            if f.is_monster || f.is_dark || f.is_mushroom {
                let mut tags = Vec::new();
                if f.is_monster {
                    tags.push("infested");
                }
                if f.is_dark {
                    tags.push("dark");
                }
                if f.is_mushroom {
                    tags.push("mushroom");
                }
                writeln!(report, "  {}: {}", f.level, tags.join(", "))?;
            }
        }
    }
    note(format!("Seed {seed} (v{version})"), report)?;

    outro("Done")?;
    Ok(())
}

fn geodes(seed: i32, kind: GeodeKind, start: u32, count: u32, version: GameVersion) -> Result<()> {
    intro("Seed Seer")?;

    let drops = predict_geodes(seed, start, count, kind, version)?;
    let mut report = String::new();
    for (i, drop) in drops.iter().enumerate() {
        writeln!(
            report,
            "#{}: {}x {}",
            start + i as u32,
            drop.quantity,
            data::object_name(drop.id)
        )?;
    }
    note(format!("{kind} geodes for seed {seed} (v{version})"), report)?;

    outro("Done")?;
    Ok(())
}

fn cart(seed: i32, day: u32, version: GameVersion) -> Result<()> {
    intro("Seed Seer")?;

    if !is_cart_day(day, version) {
        outro(format!("No cart on {} under v{version}.", format_day(day)))?;
        return Ok(());
    }
    let items = predict_cart(seed, day, version).unwrap_or_default();
    let mut report = String::new();
    for it in &items {
        writeln!(
            report,
            "{}x {} for {}g",
            it.quantity,
            data::object_name(it.id),
            it.price
        )?;
    }
    note(format!("Cart on {} for seed {seed}", format_day(day)), report)?;

    outro("Done")?;
    Ok(())
}

fn find(config_file: PathBuf) -> Result<()> {
    intro("Seed Seer")?;

    let config_data = std::fs::read_to_string(&config_file)?;
    let finder = Arc::new(SeedFinder::from_json(&config_data)?);

    let pb = progress_bar(finder.total());
    pb.start("Searching seeds...");
    let start = Instant::now();
    let progress = SeedFinder::find_seeds_async(finder.clone(), 1000);
    let mut last_progress = 0;
    let mut seeds = loop {
        match progress.recv()? {
            Progress::Searched(searched) => {
                let searched = searched.min(finder.total());
                pb.inc(searched - last_progress);
                last_progress = searched;
            }
            Progress::Complete(seeds) => break seeds,
        }
    };
    let elapsed = start.elapsed();
    pb.stop("Search done");

    seeds.sort_unstable();
    if !seeds.is_empty() {
        let mut report = String::new();
        for seed in &seeds {
            writeln!(report, "{seed}")?;
        }
        note("Matching seeds", report)?;
    }

    outro(format!(
        "Finished: {} seeds found in {}s.",
        seeds.len(),
        elapsed.as_secs_f32()
    ))?;
    Ok(())
}
