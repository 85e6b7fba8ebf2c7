use crate::{
    MemoryStore, NotSet, SatErr, SatelliteStore,
    satellite::{ActiveModel, MAX_SAFE_ID, Model, NewModel},
};
use serde_json::Number;
use tracing::{instrument, warn};

/// Gatekeeper for every write to a [SatelliteStore].
///
/// A payload is only handed to the store once it has been validated into a
/// complete [NewModel] (create) or [Model] (patch). Store failures other than
/// [SatErr::NotFound] come back as [SatErr::InternalFault].
///
/// ```
/// use satellite_service::{MemoryStore, SatelliteService, tests_cfg::satellite::create_payload};
///
/// let mut service = SatelliteService::new(MemoryStore::new());
/// let payload = create_payload("Vanguard 1");
/// assert!(service.can_create(&payload));
///
/// let created = service.create(payload)?;
/// assert_eq!(created.id, 1);
/// assert_eq!(service.get_one(1)?, created);
/// # Ok::<(), satellite_service::SatErr>(())
/// ```
#[derive(Debug)]
pub struct SatelliteService<S = MemoryStore>
where
    S: SatelliteStore,
{
    store: S,
}

impl Default for SatelliteService<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S> SatelliteService<S>
where
    S: SatelliteStore,
{
    /// Take ownership of `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// All satellites, in insertion order
    pub fn get_all(&self) -> &[Model] {
        self.store.get_all()
    }

    /// The satellite with the given id
    pub fn get_one(&self, id: u64) -> Result<Model, SatErr> {
        self.store.get_one(id).map_err(into_internal)
    }

    /// Whether a satellite with the given id exists
    pub fn is_valid_id(&self, id: u64) -> bool {
        self.store.is_valid_id(id)
    }

    /// Whether `payload` would be accepted by [SatelliteService::create]
    pub fn can_create(&self, payload: &ActiveModel) -> bool {
        self.validate_create(payload).is_ok()
    }

    /// Whether `payload` would be accepted by [SatelliteService::patch]
    pub fn can_patch(&self, payload: &ActiveModel) -> bool {
        self.validate_patch(payload).is_ok()
    }

    /// Validate a create payload into the record the store will insert.
    ///
    /// `name`, `lat`, `lon` and `status` must be set, `name` must not be blank and
    /// the coordinates must be finite. Any `id` is ignored.
    pub fn validate_create(&self, payload: &ActiveModel) -> Result<NewModel, SatErr> {
        let record = ActiveModel {
            id: NotSet,
            ..payload.clone()
        }
        .try_into_new_model()?;
        record.check_fields()?;
        Ok(record)
    }

    /// Validate a patch payload into the record that will replace the stored one.
    ///
    /// On top of the create rules, `id` must be an integer in `0..=MAX_SAFE_ID`
    /// naming an existing satellite; an unknown id is [SatErr::NotFound].
    pub fn validate_patch(&self, payload: &ActiveModel) -> Result<Model, SatErr> {
        let id = payload.id.try_as_ref().ok_or_else(|| {
            SatErr::ValidationRejected("`id` is required to patch a satellite".to_owned())
        })?;
        let id = resolve_id(id)?;

        let record = payload.clone().try_into_new_model()?;
        record.check_fields()?;

        if !self.store.is_valid_id(id) {
            return Err(SatErr::not_found(id));
        }
        Ok(record.into_model(id))
    }

    /// Insert a new satellite; the store assigns its id.
    ///
    /// A client supplied `id` is discarded. The payload is validated again here,
    /// so an invalid one is rejected without touching the store.
    #[instrument(level = "trace", skip(self))]
    pub fn create(&mut self, payload: ActiveModel) -> Result<Model, SatErr> {
        let payload = ActiveModel {
            id: NotSet,
            ..payload
        };
        let record = self.validate_create(&payload)?;
        self.store.add_one(record).map_err(into_internal)
    }

    /// Overwrite an existing satellite with `payload`, keeping its id
    #[instrument(level = "trace", skip(self))]
    pub fn patch(&mut self, payload: ActiveModel) -> Result<Model, SatErr> {
        let record = self.validate_patch(&payload)?;
        self.store.patch_one(record).map_err(into_internal)
    }
}

/// `1`, `1.0` and `1e0` all name satellite 1.
fn resolve_id(id: &Number) -> Result<u64, SatErr> {
    let integral = id.as_u64().or_else(|| {
        id.as_f64()
            .filter(|f| f.fract() == 0.0 && (0.0..=MAX_SAFE_ID as f64).contains(f))
            .map(|f| f as u64)
    });
    integral.filter(|id| *id <= MAX_SAFE_ID).ok_or_else(|| {
        SatErr::ValidationRejected(format!(
            "`id` must be an integer between 0 and {MAX_SAFE_ID}, got {id}"
        ))
    })
}

fn into_internal(err: SatErr) -> SatErr {
    match err {
        SatErr::NotFound(_) | SatErr::InternalFault(_) => err,
        SatErr::ValidationRejected(msg) => {
            warn!("store rejected a validated record: {msg}");
            SatErr::InternalFault(msg)
        }
    }
}
