use std::fmt;

use super::pet::Species;

/// Age-derived growth stage. Affects display size only, never the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthStage {
    Baby,
    Young,
    Adult,
}

impl GrowthStage {
    pub const ALL: [GrowthStage; 3] = [GrowthStage::Baby, GrowthStage::Young, GrowthStage::Adult];

    pub fn id(&self) -> &'static str {
        match self {
            GrowthStage::Baby => "baby",
            GrowthStage::Young => "young",
            GrowthStage::Adult => "adult",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthStage::Baby => "Baby",
            GrowthStage::Young => "Young",
            GrowthStage::Adult => "Adult",
        }
    }

    /// Inclusive day range. Adult is open-ended.
    pub fn age_range(&self) -> (u32, u32) {
        match self {
            GrowthStage::Baby => (0, 7),
            GrowthStage::Young => (8, 20),
            GrowthStage::Adult => (21, u32::MAX),
        }
    }

    pub fn size_multiplier(&self) -> f64 {
        match self {
            GrowthStage::Baby => 0.7,
            GrowthStage::Young => 1.0,
            GrowthStage::Adult => 1.2,
        }
    }

    pub fn contains(&self, age_in_days: u32) -> bool {
        let (min, max) = self.age_range();
        (min..=max).contains(&age_in_days)
    }

    pub fn for_age(age_in_days: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|stage| stage.contains(age_in_days))
            .unwrap_or(GrowthStage::Adult)
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

pub fn display_emoji(species: Species, stage: GrowthStage) -> &'static str {
    match (species, stage) {
        (Species::Cat, GrowthStage::Baby) => "🐱",
        (Species::Cat, GrowthStage::Young) => "😺",
        (Species::Cat, GrowthStage::Adult) => "😻",
        (Species::Dog, GrowthStage::Baby) => "🐶",
        (Species::Dog, GrowthStage::Young) => "🐕",
        (Species::Dog, GrowthStage::Adult) => "🦮",
    }
}
