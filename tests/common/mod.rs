#![allow(dead_code)]

use satellite_service::{
    MemoryStore, SatelliteService, SatelliteStore, StoreOptions,
    tests_cfg::{FaultyStore, satellite::seed},
};
use tracing_subscriber::EnvFilter;

pub struct TestContext<S: SatelliteStore = MemoryStore> {
    pub name: &'static str,
    pub service: SatelliteService<S>,
}

impl TestContext {
    /// A service over a store seeded with two satellites, ids 1 and 2
    pub fn new(name: &'static str) -> Self {
        init_tracing();
        let store = MemoryStore::connect(StoreOptions::new().seed(seed()))
            .expect("could not seed store");
        tracing::debug!(test = name, "seeded store");
        Self {
            name,
            service: SatelliteService::new(store),
        }
    }

    /// A service over an empty store
    pub fn empty(name: &'static str) -> Self {
        init_tracing();
        Self {
            name,
            service: SatelliteService::default(),
        }
    }
}

impl TestContext<FaultyStore> {
    /// A seeded service whose store faults as configured by `f`
    pub fn faulty<F>(name: &'static str, f: F) -> Self
    where
        F: FnOnce(FaultyStore) -> FaultyStore,
    {
        let ctx = TestContext::<MemoryStore>::new(name);
        Self {
            name,
            service: SatelliteService::new(f(FaultyStore::new(ctx.service.into_store()))),
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
