use super::{SatelliteStore, StoreOptions};
use crate::{
    SatErr,
    satellite::{MAX_SAFE_ID, Model, NewModel},
};
use tracing::{debug, instrument};

/// An ordered, in-memory collection of satellites
#[derive(Debug)]
pub struct MemoryStore {
    satellites: Vec<Model>,
    first_id: u64,
    logging: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store with the default [StoreOptions]
    pub fn new() -> Self {
        let opt = StoreOptions::new();
        Self {
            satellites: Vec::new(),
            first_id: opt.first_id,
            logging: opt.logging,
        }
    }

    /// Create a store from [StoreOptions], inserting the seed records in order.
    ///
    /// Seed records are held to the same field rules as a create; a blank name or
    /// a non-finite coordinate fails with [SatErr::ValidationRejected].
    ///
    /// ```
    /// use satellite_service::{MemoryStore, SatelliteStore, StoreOptions, tests_cfg};
    ///
    /// let store = MemoryStore::connect(
    ///     StoreOptions::new()
    ///         .first_id(100)
    ///         .seed(tests_cfg::satellite::seed()),
    /// )?;
    /// assert_eq!(store.get_all()[1].id, 101);
    /// # Ok::<(), satellite_service::SatErr>(())
    /// ```
    #[instrument(level = "trace", skip(opt))]
    pub fn connect<C>(opt: C) -> Result<Self, SatErr>
    where
        C: Into<StoreOptions>,
    {
        let opt: StoreOptions = opt.into();
        let mut store = Self {
            satellites: Vec::with_capacity(opt.seed.len()),
            first_id: opt.first_id,
            logging: opt.logging,
        };
        for record in opt.seed {
            record.check_fields()?;
            store.add_one(record)?;
        }
        Ok(store)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    fn next_id(&self) -> Result<u64, SatErr> {
        let next = match self.satellites.iter().map(|s| s.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(self.first_id),
        };
        next.filter(|id| *id <= MAX_SAFE_ID).ok_or_else(|| {
            SatErr::InternalFault(format!("no satellite id left below {MAX_SAFE_ID}"))
        })
    }
}

impl SatelliteStore for MemoryStore {
    fn get_all(&self) -> &[Model] {
        &self.satellites
    }

    #[instrument(level = "trace", skip(self))]
    fn get_one(&self, id: u64) -> Result<Model, SatErr> {
        self.satellites
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| SatErr::not_found(id))
    }

    fn is_valid_id(&self, id: u64) -> bool {
        self.satellites.iter().any(|s| s.id == id)
    }

    #[instrument(level = "trace", skip(self))]
    fn add_one(&mut self, record: NewModel) -> Result<Model, SatErr> {
        let model = record.into_model(self.next_id()?);
        if self.logging {
            debug!(id = model.id, name = %model.name, "satellite added");
        }
        self.satellites.push(model.clone());
        Ok(model)
    }

    #[instrument(level = "trace", skip(self))]
    fn patch_one(&mut self, record: Model) -> Result<Model, SatErr> {
        let logging = self.logging;
        let stored = self
            .satellites
            .iter_mut()
            .find(|s| s.id == record.id)
            .ok_or_else(|| SatErr::not_found(record.id))?;

        stored.name = record.name;
        stored.lat = record.lat;
        stored.lon = record.lon;
        stored.status = record.status;

        if logging {
            debug!(id = stored.id, "satellite patched");
        }
        Ok(stored.clone())
    }
}
