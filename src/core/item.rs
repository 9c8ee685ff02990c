use serde::{Deserialize, Serialize};

/// Anything the inventory can hand to the pet: food, toys, treats.
///
/// The pet only reads the effect values. Owning and removing the item from
/// the ledger stays with the caller.
pub trait ItemEffect {
    fn hunger_recovery(&self) -> Option<f64>;
    fn happiness_boost(&self) -> Option<f64>;
}

/// Plain effect record as stored in the inventory ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, alias = "hunger_recovery", skip_serializing_if = "Option::is_none")]
    pub hunger_recovery: Option<f64>,

    #[serde(default, alias = "happiness_boost", skip_serializing_if = "Option::is_none")]
    pub happiness_boost: Option<f64>,
}

impl Item {
    pub fn food(hunger_recovery: f64) -> Self {
        Self {
            hunger_recovery: Some(hunger_recovery),
            happiness_boost: None,
        }
    }

    pub fn toy(happiness_boost: f64) -> Self {
        Self {
            hunger_recovery: None,
            happiness_boost: Some(happiness_boost),
        }
    }

    pub fn with_happiness(mut self, boost: f64) -> Self {
        self.happiness_boost = Some(boost);
        self
    }
}

impl ItemEffect for Item {
    fn hunger_recovery(&self) -> Option<f64> {
        self.hunger_recovery
    }

    fn happiness_boost(&self) -> Option<f64> {
        self.happiness_boost
    }
}

impl<T: ItemEffect + ?Sized> ItemEffect for &T {
    fn hunger_recovery(&self) -> Option<f64> {
        (**self).hunger_recovery()
    }

    fn happiness_boost(&self) -> Option<f64> {
        (**self).happiness_boost()
    }
}
