use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{error, info};

use crate::core::{Pet, PetError, PetStore, Result, Species};

/// Runs the load → hydrate → update → persist cycle against a [`PetStore`].
///
/// The clock is injectable so cycles can be replayed at fixed instants.
pub struct Driver<C = fn() -> DateTime<Utc>> {
    store: PetStore,
    clock: C,
}

impl Driver {
    pub fn new(store: PetStore) -> Self {
        Driver {
            store,
            clock: Utc::now,
        }
    }
}

impl<C> Driver<C>
where
    C: Fn() -> DateTime<Utc>,
{
    pub fn with_clock(store: PetStore, clock: C) -> Self {
        Driver { store, clock }
    }

    pub fn store(&self) -> &PetStore {
        &self.store
    }

    /// Adopt a pet. Refuses to replace an existing one unless `overwrite`.
    pub fn adopt(&self, species: Species, name: &str, overwrite: bool) -> Result<Pet> {
        if !overwrite {
            if let Some(existing) = self.store.load()? {
                return Err(PetError::AlreadyExists(existing.name));
            }
        }

        let pet = Pet::new_at(species, name, (self.clock)());
        self.store.save_pet(&pet)?;
        info!("adopted {} the {}", pet.name(), pet.species());
        Ok(pet)
    }

    /// One scheduler cycle. `None` when there is no pet yet; nothing is written.
    pub fn tick(&self) -> Result<Option<Pet>> {
        self.interact(|_| {})
    }

    /// Bring the pet up to date, apply `action`, and persist the result.
    pub fn interact<F>(&self, action: F) -> Result<Option<Pet>>
    where
        F: FnOnce(&mut Pet),
    {
        let Some(mut pet) = self.store.load_pet()? else {
            return Ok(None);
        };

        let hours = pet.apply_elapsed_time((self.clock)());
        info!(
            "{}: {:.3}h elapsed, hunger {:.1} waste {:.1} happiness {:.1}",
            pet.name(),
            hours,
            pet.hunger(),
            pet.waste(),
            pet.happiness()
        );

        action(&mut pet);
        self.store.save_pet(&pet)?;
        Ok(Some(pet))
    }

    /// Tick every `interval` until `max_ticks` cycles have run (forever when `None`).
    ///
    /// A failed cycle is logged and the loop carries on. Returns the number of
    /// cycles attempted.
    pub async fn watch<F>(&self, interval: Duration, max_ticks: Option<u64>, mut on_tick: F) -> u64
    where
        F: FnMut(Option<&Pet>),
    {
        let mut timer = tokio::time::interval(interval);
        timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut ticks = 0u64;

        while max_ticks.map_or(true, |max| ticks < max) {
            timer.tick().await;
            ticks += 1;

            // a single small file; blocking the runtime thread is fine here
            match self.tick() {
                Ok(pet) => on_tick(pet.as_ref()),
                Err(e) => error!("tick {} failed: {}", ticks, e),
            }
        }
        ticks
    }
}
