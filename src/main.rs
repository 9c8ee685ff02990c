// main.rs
mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;

use cli::{Args, Commands};
use quizpet::config::Config;
use quizpet::core::{Item, PetStore};
use quizpet::display;
use quizpet::Driver;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::new(args.data_dir)?;
    let store = PetStore::new(config.pet_file()).context("Failed to open pet profile")?;
    let driver = Driver::new(store);

    match args.command {
        Commands::Adopt { species, name, force } => {
            let name = name.trim();
            if name.is_empty() {
                bail!("The pet needs a name");
            }
            let pet = driver.adopt(species, name, force)?;
            println!("{} Welcome home, {}!", pet.emoji(), pet.name().cyan().bold());
        }
        Commands::Status { json } => match driver.tick()? {
            Some(pet) if json => println!("{}", pet.to_record().to_json()?),
            Some(pet) => display::print_pet(&pet),
            None => display::print_no_pet(),
        },
        Commands::Tick => match driver.tick()? {
            Some(pet) => display::print_tick(&pet),
            None => display::print_no_pet(),
        },
        Commands::Feed { hunger, happiness } => {
            let mut food = Item::food(hunger);
            food.happiness_boost = happiness;
            match driver.interact(|pet| pet.feed(&food))? {
                Some(pet) => {
                    println!("{} {} enjoyed the meal! Hunger +{}", pet.emoji(), pet.name(), hunger);
                    display::print_pet(&pet);
                }
                None => display::print_no_pet(),
            }
        }
        Commands::Play { happiness } => {
            let toy = Item::toy(happiness);
            match driver.interact(|pet| pet.play(&toy))? {
                Some(pet) => {
                    println!("{} {} had fun! Happiness +{}", pet.emoji(), pet.name(), happiness);
                    display::print_pet(&pet);
                }
                None => display::print_no_pet(),
            }
        }
        Commands::Clean => match driver.interact(|pet| pet.clean())? {
            Some(pet) => {
                println!("{} {} is squeaky clean! Happiness +10", pet.emoji(), pet.name());
                display::print_pet(&pet);
            }
            None => display::print_no_pet(),
        },
        Commands::Birthday => match driver.interact(|pet| pet.increment_age())? {
            Some(pet) => {
                println!("🎂 {} is now {} days old ({})", pet.name(), pet.age_in_days(), pet.growth_stage().display_name());
            }
            None => display::print_no_pet(),
        },
        Commands::Watch { interval, ticks } => {
            let interval = match interval {
                Some(0) => bail!("--interval must be at least 1 second"),
                Some(secs) => std::time::Duration::from_secs(secs),
                None => config.tick_interval(),
            };
            println!("Watching every {}s (Ctrl-C to stop)", interval.as_secs());
            driver
                .watch(interval, ticks, |pet| match pet {
                    Some(pet) => display::print_tick(pet),
                    None => display::print_no_pet(),
                })
                .await;
        }
    }

    Ok(())
}
