use lotkeeper::application::service::ParkingService;
use lotkeeper::domain::fee::{FeeStrategy, StandardFee};
use lotkeeper::domain::lot::{LotLayout, Occupancy, ParkingLot};
use lotkeeper::domain::money::Money;
use lotkeeper::domain::payment::PaymentMethod;
use lotkeeper::domain::vehicle::{Vehicle, VehicleCategory};
use lotkeeper::error::ParkingError;
use lotkeeper::infrastructure::ledger::InMemoryLedger;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_parks_never_share_a_slot() {
    let service = ParkingService::new(ParkingLot::new(5, 0, 0));
    let standard: Arc<dyn FeeStrategy> = Arc::new(StandardFee);

    let handles: Vec<_> = (0..20)
        .map(|id| {
            let service = service.clone();
            let vehicle = Vehicle::car(id, standard.clone());
            tokio::spawn(async move { service.park(vehicle).await })
        })
        .collect();

    let mut slots = HashSet::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(slot) => assert!(slots.insert(slot), "slot {slot} assigned twice"),
            Err(ParkingError::NoAvailableSlot { .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(slots, (0..5).collect::<HashSet<usize>>());
    assert_eq!(rejected, 15);
    assert_eq!(
        service.status().await.get(VehicleCategory::Car),
        Occupancy::new(5, 5)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_unparks_settle_once() {
    let ledger = InMemoryLedger::new();
    let service = ParkingService::new(ParkingLot::with_ledger(
        LotLayout::new(1, 0, 0),
        Box::new(ledger.clone()),
    ));
    service
        .park(Vehicle::car(1, Arc::new(StandardFee)))
        .await
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .unpark(1, PaymentMethod::Upi.strategy(), Money::new(150))
                    .await
            })
        })
        .collect();

    let mut paid = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => paid += 1,
            Err(ParkingError::VehicleNotFound { id: 1 }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(paid, 1);
    assert_eq!(ledger.receipts().len(), 1);
    assert_eq!(service.locate(1).await, None);
}
