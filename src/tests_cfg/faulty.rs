use crate::{
    MemoryStore, SatErr, SatelliteStore,
    satellite::{Model, NewModel},
};
use std::cell::RefCell;

/// A store operation that can be made to fail
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StoreOp {
    GetOne,
    AddOne,
    PatchOne,
}

/// A [MemoryStore] that fails the next call to selected operations
#[derive(Debug)]
pub struct FaultyStore {
    inner: MemoryStore,
    faults: RefCell<Vec<(StoreOp, SatErr)>>,
}

impl FaultyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            faults: RefCell::new(Vec::new()),
        }
    }

    /// Make the next call to `op` return `err` instead of reaching the inner store
    pub fn fail_once(self, op: StoreOp, err: SatErr) -> Self {
        self.faults.borrow_mut().push((op, err));
        self
    }

    pub fn into_inner(self) -> MemoryStore {
        self.inner
    }

    fn trip(&self, op: StoreOp) -> Result<(), SatErr> {
        let mut faults = self.faults.borrow_mut();
        match faults.iter().position(|(o, _)| *o == op) {
            Some(pos) => Err(faults.remove(pos).1),
            None => Ok(()),
        }
    }
}

impl SatelliteStore for FaultyStore {
    fn get_all(&self) -> &[Model] {
        self.inner.get_all()
    }

    fn get_one(&self, id: u64) -> Result<Model, SatErr> {
        self.trip(StoreOp::GetOne)?;
        self.inner.get_one(id)
    }

    fn is_valid_id(&self, id: u64) -> bool {
        self.inner.is_valid_id(id)
    }

    fn add_one(&mut self, record: NewModel) -> Result<Model, SatErr> {
        self.trip(StoreOp::AddOne)?;
        self.inner.add_one(record)
    }

    fn patch_one(&mut self, record: Model) -> Result<Model, SatErr> {
        self.trip(StoreOp::PatchOne)?;
        self.inner.patch_one(record)
    }
}
