//! Collection sinks
//!
//! The interpreter never owns the user's collection. "Add to my garage"
//! produces a [`SideEffect`](crate::SideEffect) that the caller applies to
//! whatever store it owns through this trait.

use parking_lot::Mutex;

use crate::vehicle::VehicleRecord;

/// Receiver for add-to-collection effects
pub trait CollectionSink {
    fn add_to_collection(&mut self, vehicle: &VehicleRecord);
}

impl<F> CollectionSink for F
where
    F: FnMut(&VehicleRecord),
{
    fn add_to_collection(&mut self, vehicle: &VehicleRecord) {
        self(vehicle)
    }
}

/// Process-local collection, safe to share between threads.
///
/// Writes are serialized by the inner mutex; re-adding a vehicle with the
/// same id is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryCollection {
    vehicles: Mutex<Vec<VehicleRecord>>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle; returns false if it was already present
    pub fn add(&self, vehicle: &VehicleRecord) -> bool {
        let mut vehicles = self.vehicles.lock();
        if vehicles.iter().any(|v| v.id == vehicle.id) {
            tracing::debug!(vehicle_id = %vehicle.id, "Vehicle already in collection");
            return false;
        }
        vehicles.push(vehicle.clone());
        true
    }

    pub fn remove(&self, id: &str) -> Option<VehicleRecord> {
        let mut vehicles = self.vehicles.lock();
        let idx = vehicles.iter().position(|v| v.id == id)?;
        Some(vehicles.remove(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.vehicles.lock().iter().any(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.lock().is_empty()
    }

    /// Snapshot of the collection in insertion order
    pub fn vehicles(&self) -> Vec<VehicleRecord> {
        self.vehicles.lock().clone()
    }
}

impl CollectionSink for InMemoryCollection {
    fn add_to_collection(&mut self, vehicle: &VehicleRecord) {
        self.add(vehicle);
    }
}
