use crate::domain::fee::FeeStrategy;
use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Caller-assigned vehicle identity. Unique among currently parked vehicles.
pub type VehicleId = u32;

/// The kinds of vehicle the lot knows about.
///
/// Adding a variant means extending both tariff tables and `LotLayout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Bike,
    Truck,
}

impl VehicleCategory {
    /// All categories, in slot construction order.
    pub const ALL: [VehicleCategory; 3] = [Self::Car, Self::Bike, Self::Truck];

    /// Capitalized name used in human-readable reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bike => "Bike",
            Self::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Truck => "truck",
        };
        f.write_str(name)
    }
}

/// A vehicle presented at the gate.
///
/// The fee strategy is shared, not owned: many vehicles usually point at the
/// same stateless pricing policy.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    category: VehicleCategory,
    fee_strategy: Arc<dyn FeeStrategy>,
}

impl Vehicle {
    pub fn new(id: VehicleId, category: VehicleCategory, fee_strategy: Arc<dyn FeeStrategy>) -> Self {
        Self {
            id,
            category,
            fee_strategy,
        }
    }

    pub fn car(id: VehicleId, fee_strategy: Arc<dyn FeeStrategy>) -> Self {
        Self::new(id, VehicleCategory::Car, fee_strategy)
    }

    pub fn bike(id: VehicleId, fee_strategy: Arc<dyn FeeStrategy>) -> Self {
        Self::new(id, VehicleCategory::Bike, fee_strategy)
    }

    pub fn truck(id: VehicleId, fee_strategy: Arc<dyn FeeStrategy>) -> Self {
        Self::new(id, VehicleCategory::Truck, fee_strategy)
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn fee_strategy(&self) -> &Arc<dyn FeeStrategy> {
        &self.fee_strategy
    }

    /// Fee owed by this vehicle under its own pricing policy.
    pub fn fee(&self) -> Money {
        self.fee_strategy.compute_fee(self)
    }
}
