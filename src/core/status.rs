use std::fmt;

use serde::Serialize;

use super::pet::Pet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PetStatus {
    VeryHungry,
    NeedsCleaning,
    Unhappy,
    VeryHappy,
    Fine,
}

/// Display triple for a status. Recomputed on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl PetStatus {
    /// First matching rule wins; the order below is the priority.
    pub fn of(pet: &Pet) -> Self {
        let (hunger, waste, happiness) = (pet.hunger(), pet.waste(), pet.happiness());

        if hunger < 20.0 {
            PetStatus::VeryHungry
        } else if waste > 80.0 {
            PetStatus::NeedsCleaning
        } else if happiness < 30.0 {
            PetStatus::Unhappy
        } else if happiness > 80.0 && hunger > 70.0 {
            PetStatus::VeryHappy
        } else {
            PetStatus::Fine
        }
    }

    pub fn descriptor(&self) -> StatusDescriptor {
        match self {
            PetStatus::VeryHungry => StatusDescriptor {
                label: "Very hungry!",
                color: "#dc2626",
                icon: "😿",
            },
            PetStatus::NeedsCleaning => StatusDescriptor {
                label: "Needs cleaning!",
                color: "#f59e0b",
                icon: "💩",
            },
            PetStatus::Unhappy => StatusDescriptor {
                label: "Unhappy",
                color: "#6b7280",
                icon: "😢",
            },
            PetStatus::VeryHappy => StatusDescriptor {
                label: "Very happy!",
                color: "#10b981",
                icon: "😊",
            },
            PetStatus::Fine => StatusDescriptor {
                label: "Doing fine",
                color: "#3b82f6",
                icon: "🙂",
            },
        }
    }

    /// Needs the caller's attention (food or cleaning).
    pub fn is_alert(&self) -> bool {
        matches!(self, PetStatus::VeryHungry | PetStatus::NeedsCleaning)
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor().label)
    }
}
