use crate::domain::money::Money;
use crate::domain::vehicle::{VehicleCategory, VehicleId};
use thiserror::Error;

/// Every way an operation against the lot or the command driver can fail.
///
/// The first four variants are domain outcomes: they are all recoverable and
/// the lot is left exactly as it was before the call.
#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("no available parking spot for vehicle type: {category}")]
    NoAvailableSlot { category: VehicleCategory },
    #[error("vehicle {id} is already parked at spot {slot}")]
    DuplicateVehicle { id: VehicleId, slot: usize },
    #[error("vehicle with ID {id} not found in the parking lot")]
    VehicleNotFound { id: VehicleId },
    #[error("insufficient payment. Required: {fee}, Paid: {tendered}")]
    PaymentFailed { fee: Money, tendered: Money },
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParkingError>;
