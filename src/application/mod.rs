//! Application layer exposing the lot to concurrent callers.
//!
//! `ParkingService` owns one `ParkingLot` behind a `tokio` read-write lock so
//! that each park or unpark runs its search and its mutation as one step.

pub mod service;
