//! Core parking model: vehicles, pricing, payment and the lot itself.
//!
//! Nothing in here performs I/O. Settlement records leave through the
//! `PaymentLedger` port.

pub mod fee;
pub mod lot;
pub mod money;
pub mod payment;
pub mod ports;
pub mod slot;
pub mod vehicle;
