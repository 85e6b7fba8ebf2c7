pub use crate::{
    ActiveValue, MemoryStore, NotSet, SatelliteService, SatelliteStore, Set,
    StoreOptions, Unchanged, error::*,
};

pub use crate::satellite::{
    ActiveModel as SatelliteActiveModel, Column as SatelliteColumn, Model as Satellite,
    NewModel as NewSatellite,
};
