use colored::*;

use crate::core::{Pet, PetStatus};

pub fn print_pet(pet: &Pet) {
    let stage = pet.growth_stage();
    let descriptor = pet.status_descriptor();

    println!(
        "{} {} {}",
        pet.emoji(),
        pet.name().cyan().bold(),
        format!("({} {}, day {})", stage.display_name(), pet.species().display_name(), pet.age_in_days()).dimmed()
    );
    println!("{} {}", descriptor.icon, paint_status(pet.status(), descriptor.label));
    println!("  {:<10} {}", "Hunger", meter(pet.hunger(), false));
    println!("  {:<10} {}", "Waste", meter(pet.waste(), true));
    println!("  {:<10} {}", "Happiness", meter(pet.happiness(), false));

    if let Some(hint) = care_hint(pet.status()) {
        println!("{}", hint.yellow());
    }
}

/// Suggested command when the status calls for attention.
pub fn care_hint(status: PetStatus) -> Option<&'static str> {
    if !status.is_alert() {
        return None;
    }
    match status {
        PetStatus::VeryHungry => Some("Try `quizpet feed --hunger <points>`."),
        _ => Some("Try `quizpet clean`."),
    }
}

pub fn print_tick(pet: &Pet) {
    println!(
        "[{}] {} {} hunger {:.1} waste {:.1} happiness {:.1}",
        pet.last_update_at().format("%H:%M:%S"),
        pet.emoji(),
        pet.name(),
        pet.hunger(),
        pet.waste(),
        pet.happiness()
    );
}

pub fn print_no_pet() {
    println!("{}", "No pet yet. Adopt one with `quizpet adopt --species cat --name <name>`.".yellow());
}

fn paint_status(status: PetStatus, label: &str) -> ColoredString {
    match status {
        PetStatus::VeryHungry => label.red().bold(),
        PetStatus::NeedsCleaning => label.yellow().bold(),
        PetStatus::Unhappy => label.bright_black(),
        PetStatus::VeryHappy => label.green(),
        PetStatus::Fine => label.blue(),
    }
}

/// Ten-cell bar. `inverted` marks stats where high is bad.
fn meter(value: f64, inverted: bool) -> String {
    let filled = ((value / 10.0).round() as usize).min(10);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
    let good = if inverted { value <= 50.0 } else { value >= 50.0 };
    let bar = if good { bar.green() } else { bar.red() };
    format!("{} {:>5.1}", bar, value)
}
