use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quizpet::Species;

#[derive(Parser)]
#[command(name = "quizpet")]
#[command(about = "Look after the pet you earn by studying")]
pub struct Args {
    /// Data directory (defaults to $QUIZPET_DATA_DIR, then the user config dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Adopt a new pet
    Adopt {
        /// cat or dog
        #[arg(long)]
        species: Species,
        #[arg(long)]
        name: String,
        /// Replace the pet that already lives here
        #[arg(long)]
        force: bool,
    },
    /// Bring the pet up to date and show how it is doing
    Status {
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a single update cycle
    Tick,
    /// Give the pet a food item
    Feed {
        /// Hunger points the food restores
        #[arg(long)]
        hunger: f64,
        /// Optional happiness bonus
        #[arg(long)]
        happiness: Option<f64>,
    },
    /// Play with a toy item
    Play {
        /// Happiness points the toy gives
        #[arg(long)]
        happiness: f64,
    },
    /// Clean up after the pet
    Clean,
    /// A new day has begun: the pet grows one day older
    Birthday,
    /// Keep updating the pet on a fixed interval
    Watch {
        /// Seconds between updates (defaults to tick_interval_secs from config.json)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many updates
        #[arg(long)]
        ticks: Option<u64>,
    },
}
