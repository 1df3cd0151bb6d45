use amb_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("vehicle {0} is not idle")]
    NotIdle(VehicleId),

    #[error("vehicle {0} is not in the fleet")]
    UnknownVehicle(VehicleId),

    /// Numbering `count` vehicles from `first` would run past `u32::MAX`.
    #[error("{count} vehicles numbered from {first} overflow the id range")]
    IdRange { first: VehicleId, count: usize },
}

pub type FleetResult<T> = Result<T, FleetError>;
