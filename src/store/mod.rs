mod memory;

pub use memory::*;

use crate::{
    SatErr,
    satellite::{Model, NewModel},
};

/// The owner of every satellite record.
///
/// A store assigns ids, looks records up and is the only thing allowed to mutate
/// them. [MemoryStore] is the implementation the service runs on; the trait is
/// the seam where tests substitute a store that fails on purpose.
pub trait SatelliteStore: std::fmt::Debug {
    /// All records, in insertion order
    fn get_all(&self) -> &[Model];

    /// The record with the given id
    fn get_one(&self, id: u64) -> Result<Model, SatErr>;

    /// Whether a record with the given id currently exists
    fn is_valid_id(&self, id: u64) -> bool;

    /// Assign the next id to `record`, append it and return the stored record
    fn add_one(&mut self, record: NewModel) -> Result<Model, SatErr>;

    /// Overwrite the record sharing `record.id` and return the stored record
    fn patch_one(&mut self, record: Model) -> Result<Model, SatErr>;
}

/// Defines the configuration options of a [MemoryStore]
#[derive(Clone, Debug)]
pub struct StoreOptions {
    /// The id given to the first record of an empty store
    pub(crate) first_id: u64,
    /// Records inserted when the store is created
    pub(crate) seed: Vec<NewModel>,
    /// Emit a debug event for every mutation
    pub(crate) logging: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&mut StoreOptions> for StoreOptions {
    fn from(opt: &mut StoreOptions) -> Self {
        opt.clone()
    }
}

impl StoreOptions {
    /// Create new [StoreOptions] with the default settings
    pub fn new() -> Self {
        Self {
            first_id: 1,
            seed: Vec::new(),
            logging: true,
        }
    }

    /// Set the id assigned to the first record of an empty store (default 1)
    pub fn first_id(&mut self, value: u64) -> &mut Self {
        self.first_id = value;
        self
    }

    /// Get the id assigned to the first record of an empty store
    pub fn get_first_id(&self) -> u64 {
        self.first_id
    }

    /// Add records to be inserted, in order, when the store is created
    pub fn seed<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = NewModel>,
    {
        self.seed.extend(records);
        self
    }

    /// Get the records inserted when the store is created
    pub fn get_seed(&self) -> &[NewModel] {
        &self.seed
    }

    /// Enable mutation logging (default true)
    pub fn logging(&mut self, value: bool) -> &mut Self {
        self.logging = value;
        self
    }

    /// Get whether mutation logging is enabled
    pub fn get_logging(&self) -> bool {
        self.logging
    }
}
