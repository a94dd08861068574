use super::money::Money;
use super::payment::{PaymentOutcome, PaymentProcessor, PaymentStrategyBox};
use super::ports::{PaymentLedgerBox, TracingLedger};
use super::slot::ParkingSlot;
use super::vehicle::{Vehicle, VehicleCategory, VehicleId};
use crate::error::{ParkingError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Number of spots to build for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LotLayout {
    pub cars: usize,
    pub bikes: usize,
    pub trucks: usize,
}

impl LotLayout {
    pub fn new(cars: usize, bikes: usize, trucks: usize) -> Self {
        Self {
            cars,
            bikes,
            trucks,
        }
    }

    pub fn spots_for(&self, category: VehicleCategory) -> usize {
        match category {
            VehicleCategory::Car => self.cars,
            VehicleCategory::Bike => self.bikes,
            VehicleCategory::Truck => self.trucks,
        }
    }
}

/// A successful exit.
#[derive(Debug, Clone)]
pub struct Unparked {
    /// Index of the slot that was freed.
    pub slot: usize,
    pub fee: Money,
    pub change: Money,
    pub vehicle: Vehicle,
}

/// Occupied and total spot counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Occupancy {
    pub occupied: usize,
    pub total: usize,
}

impl Occupancy {
    pub fn new(occupied: usize, total: usize) -> Self {
        Self { occupied, total }
    }
}

/// Point-in-time occupancy of the lot, grouped by category.
///
/// Every category is present, including ones the lot has no spots for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LotStatus(BTreeMap<VehicleCategory, Occupancy>);

impl LotStatus {
    pub fn get(&self, category: VehicleCategory) -> Occupancy {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VehicleCategory, Occupancy)> + '_ {
        self.0.iter().map(|(c, o)| (*c, *o))
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Parking Lot Status ---")?;
        for (category, occupancy) in self.iter() {
            writeln!(
                f,
                "{} spots: {}/{} occupied",
                category.label(),
                occupancy.occupied,
                occupancy.total
            )?;
        }
        write!(f, "------------------------")
    }
}

/// A parking facility with a fixed set of typed slots.
///
/// Slots are laid out cars first, then bikes, then trucks, and keep their
/// index for the lifetime of the lot. Every failing operation leaves the
/// slots untouched.
pub struct ParkingLot {
    slots: Vec<ParkingSlot>,
    ledger: PaymentLedgerBox,
}

impl ParkingLot {
    /// Builds a lot that reports settlements through `tracing`.
    pub fn new(cars: usize, bikes: usize, trucks: usize) -> Self {
        Self::with_ledger(LotLayout::new(cars, bikes, trucks), Box::new(TracingLedger))
    }

    pub fn with_ledger(layout: LotLayout, ledger: PaymentLedgerBox) -> Self {
        let slots = VehicleCategory::ALL
            .into_iter()
            .flat_map(|category| {
                std::iter::repeat_n(category, layout.spots_for(category)).map(ParkingSlot::new)
            })
            .collect::<Vec<_>>();

        debug!(
            cars = layout.cars,
            bikes = layout.bikes,
            trucks = layout.trucks,
            "parking lot built"
        );

        Self { slots, ledger }
    }

    /// Parks `vehicle` in the lowest-indexed free slot of its category.
    ///
    /// Returns the slot index. A vehicle id that is already parked is
    /// rejected before any slot is considered.
    pub fn park(&mut self, vehicle: Vehicle) -> Result<usize> {
        if let Some(slot) = self.locate(vehicle.id()) {
            warn!(vehicle = vehicle.id(), slot, "vehicle already parked");
            return Err(ParkingError::DuplicateVehicle {
                id: vehicle.id(),
                slot,
            });
        }

        let category = vehicle.category();
        let Some(index) = self.slots.iter().position(|s| s.is_free_for(category)) else {
            warn!(vehicle = vehicle.id(), %category, "no available parking spot");
            return Err(ParkingError::NoAvailableSlot { category });
        };

        info!(vehicle = vehicle.id(), slot = index, "vehicle parked");
        self.slots[index].occupy(vehicle);
        Ok(index)
    }

    /// Charges the parked vehicle `id` and frees its slot once paid.
    ///
    /// The fee comes from the vehicle's own strategy. `payment` settles the
    /// full tender; an insufficient tender leaves the vehicle parked.
    pub fn unpark(
        &mut self,
        id: VehicleId,
        payment: PaymentStrategyBox,
        tendered: Money,
    ) -> Result<Unparked> {
        let Some((index, vehicle)) = self
            .slots
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.occupant().filter(|v| v.id() == id).map(|v| (i, v.clone())))
        else {
            warn!(vehicle = id, "vehicle not found");
            return Err(ParkingError::VehicleNotFound { id });
        };

        let fee = vehicle.fee();
        let processor = PaymentProcessor::new(payment, self.ledger.as_ref());

        match processor.attempt_payment(fee, tendered) {
            PaymentOutcome::Paid { change } => {
                self.slots[index].vacate();
                info!(vehicle = id, slot = index, %fee, %change, "vehicle unparked");
                Ok(Unparked {
                    slot: index,
                    fee,
                    change,
                    vehicle,
                })
            }
            PaymentOutcome::Insufficient { fee_due, tendered } => {
                warn!(vehicle = id, %fee_due, %tendered, "payment failed, vehicle not unparked");
                Err(ParkingError::PaymentFailed {
                    fee: fee_due,
                    tendered,
                })
            }
        }
    }

    pub fn status(&self) -> LotStatus {
        let mut counts: BTreeMap<VehicleCategory, Occupancy> = VehicleCategory::ALL
            .into_iter()
            .map(|c| (c, Occupancy::default()))
            .collect();

        for slot in &self.slots {
            let entry = counts.entry(slot.accepts()).or_default();
            entry.total += 1;
            if slot.is_occupied() {
                entry.occupied += 1;
            }
        }

        LotStatus(counts)
    }

    /// Index of the slot currently holding vehicle `id`.
    pub fn locate(&self, id: VehicleId) -> Option<usize> {
        self.slots.iter().position(|s| s.holds(id))
    }

    pub fn slots(&self) -> &[ParkingSlot] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// True when no vehicle is parked.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.is_occupied())
    }
}
