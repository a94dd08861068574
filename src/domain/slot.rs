use super::vehicle::{Vehicle, VehicleCategory, VehicleId};

/// One physical parking space.
///
/// The accepted category is fixed when the lot is built. A slot is either
/// empty or holds exactly one vehicle of that category.
#[derive(Debug, Clone)]
pub struct ParkingSlot {
    accepts: VehicleCategory,
    occupant: Option<Vehicle>,
}

impl ParkingSlot {
    pub fn new(accepts: VehicleCategory) -> Self {
        Self {
            accepts,
            occupant: None,
        }
    }

    pub fn accepts(&self) -> VehicleCategory {
        self.accepts
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// True when this slot is empty and sized for `category`.
    pub fn is_free_for(&self, category: VehicleCategory) -> bool {
        self.accepts == category && self.occupant.is_none()
    }

    pub fn holds(&self, id: VehicleId) -> bool {
        self.occupant.as_ref().is_some_and(|v| v.id() == id)
    }

    // Callers check `is_free_for` first; the lot is the only caller.
    pub(crate) fn occupy(&mut self, vehicle: Vehicle) {
        debug_assert!(self.is_free_for(vehicle.category()));
        self.occupant = Some(vehicle);
    }

    pub(crate) fn vacate(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fee::MemberFee;
    use std::sync::Arc;

    #[test]
    fn test_slot_lifecycle() {
        let mut slot = ParkingSlot::new(VehicleCategory::Bike);
        assert!(slot.is_free_for(VehicleCategory::Bike));
        assert!(!slot.is_free_for(VehicleCategory::Car));

        slot.occupy(Vehicle::bike(7, Arc::new(MemberFee)));
        assert!(slot.is_occupied());
        assert!(slot.holds(7));
        assert!(!slot.holds(8));
        assert!(!slot.is_free_for(VehicleCategory::Bike));

        let released = slot.vacate().unwrap();
        assert_eq!(released.id(), 7);
        assert!(slot.occupant().is_none());
        assert_eq!(slot.accepts(), VehicleCategory::Bike);
    }
}
