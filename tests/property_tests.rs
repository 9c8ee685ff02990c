//! Property tests for the pet simulation.
//!
//! Any interleaving of time and care keeps the vitals in range, and the
//! linear decay composes over split intervals.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use quizpet::core::{restore, GrowthStage, Item, Pet, Species};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Wait(i64),
    Feed(f64, Option<f64>),
    Play(f64),
    Clean,
    Birthday,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-600_000i64..400_000_000).prop_map(Op::Wait),
        (-50.0f64..200.0, proptest::option::of(-50.0f64..200.0)).prop_map(|(h, b)| Op::Feed(h, b)),
        (-50.0f64..200.0).prop_map(Op::Play),
        Just(Op::Clean),
        Just(Op::Birthday),
    ]
}

fn in_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

proptest! {
    #[test]
    fn vitals_stay_in_range(ops in proptest::collection::vec(op(), 0..40)) {
        let mut pet = Pet::new_at(Species::Cat, "Mimi", t0());
        let mut now = t0();

        for op in ops {
            match op {
                Op::Wait(millis) => {
                    now += Duration::milliseconds(millis);
                    pet.apply_elapsed_time(now);
                }
                Op::Feed(hunger, boost) => pet.feed(&Item { hunger_recovery: Some(hunger), happiness_boost: boost }),
                Op::Play(boost) => pet.play(&Item::toy(boost)),
                Op::Clean => pet.clean(),
                Op::Birthday => pet.increment_age(),
            }
            prop_assert!(in_range(pet.hunger()));
            prop_assert!(in_range(pet.waste()));
            prop_assert!(in_range(pet.happiness()));
        }
    }

    #[test]
    fn last_update_never_moves_backward(offsets in proptest::collection::vec(-100_000_000i64..100_000_000, 1..20)) {
        let mut pet = Pet::new_at(Species::Dog, "Pochi", t0());
        let mut high_water = pet.last_update_at();

        for offset in offsets {
            pet.apply_elapsed_time(t0() + Duration::milliseconds(offset));
            prop_assert!(pet.last_update_at() >= high_water);
            high_water = pet.last_update_at();
        }
    }

    #[test]
    fn split_intervals_compose(
        hunger in 0.0f64..=100.0,
        waste in 0.0f64..=100.0,
        first in 0i64..200_000_000,
        second in 0i64..200_000_000,
    ) {
        let mut record = Pet::new_at(Species::Cat, "Mimi", t0()).to_record();
        record.hunger = hunger;
        record.waste = waste;

        let mut split = record.hydrate();
        split.apply_elapsed_time(t0() + Duration::milliseconds(first));
        split.apply_elapsed_time(t0() + Duration::milliseconds(first + second));

        let mut whole = record.hydrate();
        whole.apply_elapsed_time(t0() + Duration::milliseconds(first + second));

        prop_assert!((split.hunger() - whole.hunger()).abs() < 1e-9);
        prop_assert!((split.waste() - whole.waste()).abs() < 1e-9);
        prop_assert_eq!(split.last_update_at(), whole.last_update_at());
    }

    #[test]
    fn clock_skew_is_zero_elapsed(
        hunger in 0.0f64..=100.0,
        waste in 0.0f64..=100.0,
        happiness in 0.0f64..=100.0,
        skew in 1i64..1_000_000_000,
    ) {
        let mut record = Pet::new_at(Species::Dog, "Pochi", t0()).to_record();
        record.hunger = hunger;
        record.waste = waste;
        record.happiness = happiness;

        let mut pet = record.hydrate();
        let hours = pet.apply_elapsed_time(t0() - Duration::milliseconds(skew));

        prop_assert_eq!(hours, 0.0);
        prop_assert_eq!(pet, record.hydrate());
    }

    #[test]
    fn record_round_trip(
        hunger in 0.0f64..=100.0,
        waste in 0.0f64..=100.0,
        happiness in 0.0f64..=100.0,
        age in 0u32..1000,
        elapsed in 0i64..1_000_000_000,
        dog in any::<bool>(),
    ) {
        let species = if dog { Species::Dog } else { Species::Cat };
        let mut record = Pet::new_at(species, "Mochi", t0()).to_record();
        record.hunger = hunger;
        record.waste = waste;
        record.happiness = happiness;
        record.age_in_days = age;
        record.last_update_at = t0() + Duration::milliseconds(elapsed);

        let pet = record.hydrate();
        let json = pet.to_record().to_json().unwrap();
        let parsed = quizpet::PetRecord::from_json(&json).unwrap();
        let restored = restore(parsed).unwrap();

        prop_assert_eq!(&restored, &pet);
        prop_assert_eq!(restored.growth_stage(), GrowthStage::for_age(age));
    }
}
