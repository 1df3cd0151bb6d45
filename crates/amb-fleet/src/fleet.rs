//! The roster of vehicles owned by one dispatch center.

use amb_core::{Point, VehicleId};

use crate::{FleetError, FleetResult, Vehicle, VehicleStatus};

/// Vehicles in roster order.  Ids are assigned consecutively in that order,
/// so roster order and id order coincide.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// One vehicle per home base, numbered from `first_id`.
    ///
    /// # Errors
    ///
    /// [`FleetError::IdRange`] if the last id would not fit in a `u32`.
    pub fn from_home_bases(first_id: VehicleId, home_bases: &[Point]) -> FleetResult<Self> {
        let last_offset = home_bases.len().saturating_sub(1);
        let fits = u32::try_from(last_offset)
            .ok()
            .and_then(|n| first_id.0.checked_add(n))
            .is_some();
        if !fits {
            return Err(FleetError::IdRange { first: first_id, count: home_bases.len() });
        }
        let vehicles = home_bases
            .iter()
            .enumerate()
            .map(|(i, &base)| Vehicle::new(VehicleId(first_id.0 + i as u32), base))
            .collect();
        Ok(Self { vehicles })
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Vehicle> {
        self.vehicles.iter_mut()
    }

    pub fn get(&self, id: VehicleId) -> FleetResult<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id() == id)
            .ok_or(FleetError::UnknownVehicle(id))
    }

    pub fn get_mut(&mut self, id: VehicleId) -> FleetResult<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.id() == id)
            .ok_or(FleetError::UnknownVehicle(id))
    }

    /// The idle vehicle closest to `target` in a straight line.
    ///
    /// Linear scan in roster order; on equal distance the earlier vehicle
    /// (lower id) wins.
    pub fn nearest_idle(&self, target: Point) -> Option<VehicleId> {
        let mut best: Option<(VehicleId, f32)> = None;
        for v in self.vehicles.iter().filter(|v| v.is_idle()) {
            let d = v.position.distance(target);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((v.id(), d));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn count_with_status(&self, status: VehicleStatus) -> usize {
        self.vehicles.iter().filter(|v| v.status() == status).count()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}
