pub mod error;
pub mod item;
pub mod pet;
pub mod record;
pub mod stage;
pub mod status;
pub mod store;

pub use error::{PetError, Result};
pub use item::{Item, ItemEffect};
pub use pet::{clamp_stat, Pet, Species};
pub use record::{restore, PetRecord};
pub use stage::{display_emoji, GrowthStage};
pub use status::{PetStatus, StatusDescriptor};
pub use store::PetStore;
