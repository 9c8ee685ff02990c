use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::pet::{clamp_stat, Pet, Species};

/// Flat, behavior-free snapshot of a pet as it lives in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    #[serde(alias = "type")]
    pub species: Species,
    pub name: String,
    #[serde(alias = "age")]
    pub age_in_days: u32,
    pub hunger: f64,
    pub waste: f64,
    pub happiness: f64,
    pub created_at: DateTime<Utc>,
    pub last_update_at: DateTime<Utc>,
}

impl PetRecord {
    /// Rebuild a live pet: a fresh entity of the stored species and name,
    /// then every stored field written over it.
    pub fn hydrate(&self) -> Pet {
        let mut pet = Pet::new_at(self.species, self.name.clone(), self.created_at);
        pet.age_in_days = self.age_in_days;
        pet.hunger = sanitize("hunger", self.hunger);
        pet.waste = sanitize("waste", self.waste);
        pet.happiness = sanitize("happiness", self.happiness);
        pet.last_update_at = self.last_update_at;
        pet
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a stored document. Blank text and `null` mean "no pet yet".
    pub fn from_json(content: &str) -> Result<Option<Self>> {
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<PetRecord>>(content)?)
    }
}

impl From<&Pet> for PetRecord {
    fn from(pet: &Pet) -> Self {
        PetRecord {
            species: pet.species(),
            name: pet.name().to_string(),
            age_in_days: pet.age_in_days(),
            hunger: pet.hunger(),
            waste: pet.waste(),
            happiness: pet.happiness(),
            created_at: pet.created_at(),
            last_update_at: pet.last_update_at(),
        }
    }
}

impl From<PetRecord> for Pet {
    fn from(record: PetRecord) -> Self {
        record.hydrate()
    }
}

impl Pet {
    pub fn to_record(&self) -> PetRecord {
        PetRecord::from(self)
    }
}

/// Hydrate an optional stored record. `None` is the "no pet yet" state.
pub fn restore(record: Option<PetRecord>) -> Option<Pet> {
    record.map(Pet::from)
}

fn sanitize(field: &str, value: f64) -> f64 {
    let clamped = clamp_stat(value);
    if clamped != value {
        warn!("stored {} {} out of range, clamped to {}", field, value, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Item;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn worn_pet() -> Pet {
        let mut pet = Pet::new_at(Species::Cat, "Mimi", t0());
        pet.increment_age();
        pet.apply_elapsed_time(t0() + Duration::minutes(517));
        pet.feed(&Item::food(3.25));
        pet
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let pet = worn_pet();
        let restored = restore(Some(pet.to_record())).unwrap();
        assert_eq!(restored, pet);
    }

    #[test]
    fn test_round_trip_through_json() {
        let pet = worn_pet();
        let json = pet.to_record().to_json().unwrap();
        let record = PetRecord::from_json(&json).unwrap().unwrap();
        assert_eq!(record.hydrate(), pet);
    }

    #[test]
    fn test_restored_pet_behaves_the_same() {
        let mut original = worn_pet();
        let mut restored = original.to_record().hydrate();
        let later = t0() + Duration::hours(30);

        original.apply_elapsed_time(later);
        restored.apply_elapsed_time(later);
        original.clean();
        restored.clean();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_restore_does_not_reset_vitals() {
        let record = PetRecord {
            species: Species::Dog,
            name: "Pochi".to_string(),
            age_in_days: 12,
            hunger: 12.5,
            waste: 77.0,
            happiness: 3.0,
            created_at: t0(),
            last_update_at: t0() + Duration::hours(4),
        };
        let pet = record.hydrate();
        assert_eq!(pet.hunger(), 12.5);
        assert_eq!(pet.waste(), 77.0);
        assert_eq!(pet.happiness(), 3.0);
        assert_eq!(pet.age_in_days(), 12);
        assert_eq!(pet.created_at(), t0());
        assert_eq!(pet.last_update_at(), t0() + Duration::hours(4));
    }

    #[test]
    fn test_restore_absent_record() {
        assert!(restore(None).is_none());
        assert!(PetRecord::from_json("").unwrap().is_none());
        assert!(PetRecord::from_json("  null \n").unwrap().is_none());
    }

    #[test]
    fn test_json_layout() {
        let pet = Pet::new_at(Species::Cat, "Mimi", t0());
        let value = serde_json::to_value(pet.to_record()).unwrap();
        assert_eq!(value["species"], "cat");
        assert_eq!(value["name"], "Mimi");
        assert_eq!(value["ageInDays"], 0);
        assert_eq!(value["hunger"], 100.0);
        assert_eq!(value["waste"], 0.0);
        assert_eq!(value["happiness"], 100.0);
        assert_eq!(value["createdAt"], "2024-03-01T12:00:00Z");
        assert_eq!(value["lastUpdateAt"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_legacy_keys() {
        let legacy = r#"{
            "type": "dog",
            "name": "Pochi",
            "age": 3,
            "hunger": 64.2,
            "waste": 11,
            "happiness": 90,
            "createdAt": "2024-03-01T12:00:00.000Z",
            "lastUpdateAt": "2024-03-02T08:30:00.000Z"
        }"#;
        let pet = restore(PetRecord::from_json(legacy).unwrap()).unwrap();
        assert_eq!(pet.species(), Species::Dog);
        assert_eq!(pet.age_in_days(), 3);
        assert_eq!(pet.hunger(), 64.2);
        assert_eq!(pet.waste(), 11.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut record = Pet::new_at(Species::Cat, "Mimi", t0()).to_record();
        record.hunger = 140.0;
        record.waste = -5.0;
        let pet = record.hydrate();
        assert_eq!(pet.hunger(), 100.0);
        assert_eq!(pet.waste(), 0.0);
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(PetRecord::from_json("{\"species\": \"hamster\"}").is_err());
        assert!(PetRecord::from_json("not json").is_err());
    }
}
