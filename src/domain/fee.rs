//! Pricing policies.
//!
//! A fee depends only on the vehicle's category and on which policy the
//! vehicle was issued with. Policies are stateless and shared between vehicles.

use crate::domain::money::Money;
use crate::domain::vehicle::{Vehicle, VehicleCategory};
use serde::Deserialize;
use std::fmt::Debug;
use std::sync::Arc;

/// Maps a vehicle to the fee it owes on exit.
pub trait FeeStrategy: Debug + Send + Sync {
    fn compute_fee(&self, vehicle: &Vehicle) -> Money;
}

/// A fixed fee per vehicle category.
///
/// A category missing from the table is charged nothing. The closed
/// `VehicleCategory` set makes this unreachable for the built-in tables,
/// but a table written before a new category is added still answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TariffTable(&'static [(VehicleCategory, Money)]);

impl TariffTable {
    pub const fn new(entries: &'static [(VehicleCategory, Money)]) -> Self {
        Self(entries)
    }

    pub fn lookup(&self, category: VehicleCategory) -> Money {
        match self.0.iter().find(|(c, _)| *c == category) {
            Some((_, fee)) => *fee,
            None => Money::ZERO,
        }
    }
}

const MEMBER_TARIFF: TariffTable = TariffTable::new(&[
    (VehicleCategory::Car, Money::new(100)),
    (VehicleCategory::Truck, Money::new(1000)),
    (VehicleCategory::Bike, Money::new(50)),
]);

const STANDARD_TARIFF: TariffTable = TariffTable::new(&[
    (VehicleCategory::Car, Money::new(150)),
    (VehicleCategory::Truck, Money::new(1500)),
    (VehicleCategory::Bike, Money::new(100)),
]);

/// Discounted pricing for registered members.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberFee;

impl MemberFee {
    pub const TARIFF: TariffTable = MEMBER_TARIFF;
}

impl FeeStrategy for MemberFee {
    fn compute_fee(&self, vehicle: &Vehicle) -> Money {
        Self::TARIFF.lookup(vehicle.category())
    }
}

/// Walk-in pricing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFee;

impl StandardFee {
    pub const TARIFF: TariffTable = STANDARD_TARIFF;
}

impl FeeStrategy for StandardFee {
    fn compute_fee(&self, vehicle: &Vehicle) -> Money {
        Self::TARIFF.lookup(vehicle.category())
    }
}

/// Names the built-in fee strategies so they can be picked from input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeePlan {
    Member,
    Standard,
}

impl FeePlan {
    pub fn strategy(&self) -> Arc<dyn FeeStrategy> {
        match self {
            FeePlan::Member => Arc::new(MemberFee),
            FeePlan::Standard => Arc::new(StandardFee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee_for(strategy: Arc<dyn FeeStrategy>, category: VehicleCategory) -> Money {
        let vehicle = Vehicle::new(1, category, strategy.clone());
        strategy.compute_fee(&vehicle)
    }

    #[test]
    fn test_member_fees() {
        let member: Arc<dyn FeeStrategy> = Arc::new(MemberFee);
        assert_eq!(fee_for(member.clone(), VehicleCategory::Car), Money::new(100));
        assert_eq!(fee_for(member.clone(), VehicleCategory::Truck), Money::new(1000));
        assert_eq!(fee_for(member, VehicleCategory::Bike), Money::new(50));
    }

    #[test]
    fn test_standard_fees() {
        let standard: Arc<dyn FeeStrategy> = Arc::new(StandardFee);
        assert_eq!(fee_for(standard.clone(), VehicleCategory::Car), Money::new(150));
        assert_eq!(fee_for(standard.clone(), VehicleCategory::Truck), Money::new(1500));
        assert_eq!(fee_for(standard, VehicleCategory::Bike), Money::new(100));
    }

    #[test]
    fn test_missing_category_costs_nothing() {
        const CARS_ONLY: TariffTable = TariffTable::new(&[(VehicleCategory::Car, Money::new(10))]);
        assert_eq!(CARS_ONLY.lookup(VehicleCategory::Car), Money::new(10));
        assert_eq!(CARS_ONLY.lookup(VehicleCategory::Bike), Money::ZERO);
        assert_eq!(CARS_ONLY.lookup(VehicleCategory::Truck), Money::ZERO);
    }

    #[test]
    fn test_fee_plan_selects_strategy() {
        let plan: FeePlan = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(fee_for(plan.strategy(), VehicleCategory::Car), Money::new(100));
        assert_eq!(
            fee_for(FeePlan::Standard.strategy(), VehicleCategory::Car),
            Money::new(150)
        );
    }
}
