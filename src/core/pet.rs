use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::ItemEffect;
use super::stage::{display_emoji, GrowthStage};
use super::status::{PetStatus, StatusDescriptor};

pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;

pub const HUNGER_DECAY_PER_HOUR: f64 = 5.0;
pub const WASTE_GAIN_PER_HOUR: f64 = 3.0;
pub const HAPPINESS_DECAY_PER_HOUR: f64 = 2.0;

/// Below this hunger the pet starts losing happiness over time.
pub const HUNGRY_THRESHOLD: f64 = 30.0;
/// Above this waste the pet starts losing happiness over time.
pub const DIRTY_THRESHOLD: f64 = 70.0;

pub const CLEAN_HAPPINESS_BONUS: f64 = 10.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Clamp a vital statistic into `[0, 100]`. NaN collapses to the floor.
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub fn id(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Cat => "Kitty",
            Species::Dog => "Puppy",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            other => Err(format!("unknown species: {} (expected cat or dog)", other)),
        }
    }
}

/// A live pet: identity, vitals, and the rules that move them.
///
/// Vitals are only reachable through the operations below, each of which
/// clamps, so `hunger`, `waste` and `happiness` always stay in `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub(crate) species: Species,
    pub(crate) name: String,
    pub(crate) age_in_days: u32,
    pub(crate) hunger: f64,
    pub(crate) waste: f64,
    pub(crate) happiness: f64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) last_update_at: DateTime<Utc>,
}

impl Pet {
    /// Adopt a new pet right now.
    pub fn new(species: Species, name: impl Into<String>) -> Self {
        Self::new_at(species, name, Utc::now())
    }

    pub fn new_at(species: Species, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            species,
            name: name.into(),
            age_in_days: 0,
            hunger: STAT_MAX,
            waste: STAT_MIN,
            happiness: STAT_MAX,
            created_at: now,
            last_update_at: now,
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age_in_days(&self) -> u32 {
        self.age_in_days
    }

    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    pub fn waste(&self) -> f64 {
        self.waste
    }

    pub fn happiness(&self) -> f64 {
        self.happiness
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_update_at(&self) -> DateTime<Utc> {
        self.last_update_at
    }

    /// Hours between the last update and `now`, never negative.
    pub fn hours_since_update(&self, now: DateTime<Utc>) -> f64 {
        let millis = now.signed_duration_since(self.last_update_at).num_milliseconds();
        (millis as f64 / MILLIS_PER_HOUR).max(0.0)
    }

    /// Advance the simulation to `now` and return the hours accounted for.
    ///
    /// Happiness only decays when the *updated* hunger or waste crosses its
    /// threshold. A clock that went backwards counts as zero elapsed time and
    /// `last_update_at` keeps its value.
    pub fn apply_elapsed_time(&mut self, now: DateTime<Utc>) -> f64 {
        let hours = self.hours_since_update(now);

        self.hunger = clamp_stat(self.hunger - hours * HUNGER_DECAY_PER_HOUR);
        self.waste = clamp_stat(self.waste + hours * WASTE_GAIN_PER_HOUR);

        if self.hunger < HUNGRY_THRESHOLD || self.waste > DIRTY_THRESHOLD {
            self.happiness = clamp_stat(self.happiness - hours * HAPPINESS_DECAY_PER_HOUR);
        }

        if now > self.last_update_at {
            self.last_update_at = now;
        }
        hours
    }

    pub fn feed(&mut self, food: &impl ItemEffect) {
        let recovery = food.hunger_recovery().unwrap_or(0.0);
        self.hunger = clamp_stat(self.hunger + recovery);

        if let Some(boost) = food.happiness_boost() {
            self.happiness = clamp_stat(self.happiness + boost);
        }
    }

    /// Use a toy. Items without a happiness boost do nothing.
    pub fn play(&mut self, toy: &impl ItemEffect) {
        if let Some(boost) = toy.happiness_boost() {
            self.happiness = clamp_stat(self.happiness + boost);
        }
    }

    pub fn clean(&mut self) {
        self.waste = STAT_MIN;
        self.happiness = clamp_stat(self.happiness + CLEAN_HAPPINESS_BONUS);
    }

    /// Day-boundary event. Never triggered by `apply_elapsed_time`.
    pub fn increment_age(&mut self) {
        self.age_in_days = self.age_in_days.saturating_add(1);
    }

    pub fn growth_stage(&self) -> GrowthStage {
        GrowthStage::for_age(self.age_in_days)
    }

    pub fn status(&self) -> PetStatus {
        PetStatus::of(self)
    }

    pub fn status_descriptor(&self) -> StatusDescriptor {
        self.status().descriptor()
    }

    pub fn emoji(&self) -> &'static str {
        display_emoji(self.species, self.growth_stage())
    }
}
