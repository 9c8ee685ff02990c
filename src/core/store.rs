use std::path::{Path, PathBuf};

use log::debug;

use super::error::Result;
use super::pet::Pet;
use super::record::{restore, PetRecord};

/// JSON file holding the single pet profile.
pub struct PetStore {
    path: PathBuf,
}

impl PetStore {
    /// Create a store backed by `path`, making sure the parent directory exists.
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True only when the file holds an actual pet record.
    pub fn has_pet(&self) -> Result<bool> {
        Ok(self.load()?.is_some())
    }

    /// Read the stored record. A missing or empty file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<PetRecord>> {
        if !self.path.exists() {
            debug!("no pet profile at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let record = PetRecord::from_json(&content)?;
        debug!(
            "loaded pet profile from {} ({})",
            self.path.display(),
            if record.is_some() { "present" } else { "empty" }
        );
        Ok(record)
    }

    pub fn load_pet(&self) -> Result<Option<Pet>> {
        Ok(restore(self.load()?))
    }

    /// Write the record through a sibling temp file, then rename over the target.
    pub fn save(&self, record: &PetRecord) -> Result<()> {
        let content = record.to_json()?;
        let tmp_path = self.path.with_extension("json.tmp");

        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;

        debug!("saved pet profile for {} to {}", record.name, self.path.display());
        Ok(())
    }

    pub fn save_pet(&self, pet: &Pet) -> Result<()> {
        self.save(&pet.to_record())
    }
}
