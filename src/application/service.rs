use crate::domain::lot::{LotStatus, ParkingLot, Unparked};
use crate::domain::money::Money;
use crate::domain::payment::PaymentStrategyBox;
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One instruction for the lot, as issued by a gate or a replayed script.
pub enum Command {
    Park(Vehicle),
    Unpark {
        id: VehicleId,
        payment: PaymentStrategyBox,
        tendered: Money,
    },
    Status,
}

/// What a successfully executed `Command` produced.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    Parked { id: VehicleId, slot: usize },
    Unparked(Unparked),
    Status(LotStatus),
}

/// Shared handle to a single parking lot.
///
/// Clones refer to the same lot. `park` and `unpark` hold the write lock for
/// the whole search, payment and slot update, so no caller can see a vehicle
/// that has paid but still occupies its slot. `status` only needs the read lock.
#[derive(Clone)]
pub struct ParkingService {
    lot: Arc<RwLock<ParkingLot>>,
}

impl ParkingService {
    pub fn new(lot: ParkingLot) -> Self {
        Self {
            lot: Arc::new(RwLock::new(lot)),
        }
    }

    pub async fn park(&self, vehicle: Vehicle) -> Result<usize> {
        let mut lot = self.lot.write().await;
        lot.park(vehicle)
    }

    pub async fn unpark(
        &self,
        id: VehicleId,
        payment: PaymentStrategyBox,
        tendered: Money,
    ) -> Result<Unparked> {
        let mut lot = self.lot.write().await;
        lot.unpark(id, payment, tendered)
    }

    pub async fn status(&self) -> LotStatus {
        self.lot.read().await.status()
    }

    /// Slot currently holding vehicle `id`, if it is parked.
    pub async fn locate(&self, id: VehicleId) -> Option<usize> {
        self.lot.read().await.locate(id)
    }

    pub async fn execute(&self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Park(vehicle) => {
                let id = vehicle.id();
                let slot = self.park(vehicle).await?;
                Ok(CommandOutcome::Parked { id, slot })
            }
            Command::Unpark {
                id,
                payment,
                tendered,
            } => {
                let unparked = self.unpark(id, payment, tendered).await?;
                Ok(CommandOutcome::Unparked(unparked))
            }
            Command::Status => Ok(CommandOutcome::Status(self.status().await)),
        }
    }
}
