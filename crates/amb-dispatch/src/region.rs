//! Several independent dispatch centers driven together.
//!
//! Centers share nothing: each keeps its own fleet, backlog and id counters.
//! The region only decides which center an emergency goes to and ticks them
//! all in index order.

use amb_core::{EmergencyId, PatientInfo, Point};
use amb_spatial::{GridRouter, Router};

use crate::{DispatchCenter, DispatchError, DispatchObserver, DispatchResult};

pub struct DispatchRegion<R: Router = GridRouter> {
    centers: Vec<DispatchCenter<R>>,
}

impl<R: Router> Default for DispatchRegion<R> {
    fn default() -> Self {
        Self { centers: Vec::new() }
    }
}

impl<R: Router> DispatchRegion<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a center and return its index.
    pub fn add_center(&mut self, center: DispatchCenter<R>) -> usize {
        self.centers.push(center);
        self.centers.len() - 1
    }

    pub fn centers(&self) -> &[DispatchCenter<R>] {
        &self.centers
    }

    pub fn center(&self, index: usize) -> DispatchResult<&DispatchCenter<R>> {
        self.centers.get(index).ok_or(DispatchError::UnknownCenter(index))
    }

    pub fn center_mut(&mut self, index: usize) -> DispatchResult<&mut DispatchCenter<R>> {
        self.centers.get_mut(index).ok_or(DispatchError::UnknownCenter(index))
    }

    /// Hand an emergency to the center at `index`.
    pub fn receive_at(
        &mut self,
        index: usize,
        patient: PatientInfo,
        location: Point,
        priority: u8,
    ) -> DispatchResult<EmergencyId> {
        self.center_mut(index)?.receive(patient, location, priority)
    }

    /// Index of the center closest to `location`; ties go to the lower index.
    pub fn nearest_center(&self, location: Point) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, c) in self.centers.iter().enumerate() {
            let d = c.location().distance(location);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Hand an emergency to the closest center.  Returns the center index and
    /// the id that center assigned.
    pub fn receive_nearest(
        &mut self,
        patient: PatientInfo,
        location: Point,
        priority: u8,
    ) -> DispatchResult<(usize, EmergencyId)> {
        let index = self
            .nearest_center(location)
            .ok_or_else(|| DispatchError::Config("region has no dispatch centers".into()))?;
        let id = self.receive_at(index, patient, location, priority)?;
        Ok((index, id))
    }

    /// Tick every center by `dt`.
    pub fn tick(&mut self, dt: f32) {
        for center in &mut self.centers {
            center.tick(dt);
        }
    }

    pub fn tick_with<O: DispatchObserver>(&mut self, dt: f32, observer: &mut O) {
        for center in &mut self.centers {
            center.tick_with(dt, observer);
        }
    }

    pub fn handled_count(&self) -> u64 {
        self.centers.iter().map(DispatchCenter::handled_count).sum()
    }

    pub fn pending_count(&self) -> usize {
        self.centers.iter().map(DispatchCenter::pending_count).sum()
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}
