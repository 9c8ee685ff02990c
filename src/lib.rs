pub mod config;
pub mod core;
pub mod display;
pub mod driver;

pub use crate::core::{Item, ItemEffect, Pet, PetRecord, PetStore, Species};
pub use crate::driver::Driver;
