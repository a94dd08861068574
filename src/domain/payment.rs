//! Settlement channels and the one-shot payment transaction run on exit.

use super::money::Money;
use super::ports::PaymentLedger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the built-in settlement channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    CreditCard,
    DebitCard,
}

impl PaymentMethod {
    pub fn strategy(&self) -> PaymentStrategyBox {
        match self {
            PaymentMethod::Upi => Box::new(Upi),
            PaymentMethod::CreditCard => Box::new(CreditCard),
            PaymentMethod::DebitCard => Box::new(DebitCard),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
        };
        f.write_str(name)
    }
}

/// Record of one settled payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Money,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment of Rs. {} done via {}", self.amount, self.method)
    }
}

/// How a fee is paid.
///
/// Strategies do no validation: by the time `settle` runs, the processor has
/// already checked that the tender covers the fee.
pub trait PaymentStrategy: Send + Sync {
    fn method(&self) -> PaymentMethod;

    fn settle(&self, amount: Money, ledger: &dyn PaymentLedger) {
        ledger.record(PaymentReceipt {
            method: self.method(),
            amount,
        });
    }
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;

#[derive(Debug, Clone, Copy, Default)]
pub struct Upi;

impl PaymentStrategy for Upi {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Upi
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCard;

impl PaymentStrategy for CreditCard {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DebitCard;

impl PaymentStrategy for DebitCard {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::DebitCard
    }
}

/// Result of a single payment attempt.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Paid { change: Money },
    Insufficient { fee_due: Money, tendered: Money },
}

/// A one-shot payment transaction.
///
/// Built per exit attempt around the caller's chosen strategy and consumed
/// by `attempt_payment`.
pub struct PaymentProcessor<'a> {
    strategy: PaymentStrategyBox,
    ledger: &'a dyn PaymentLedger,
}

impl<'a> PaymentProcessor<'a> {
    pub fn new(strategy: PaymentStrategyBox, ledger: &'a dyn PaymentLedger) -> Self {
        Self { strategy, ledger }
    }

    /// Settles the full tender when it covers `fee_due`.
    ///
    /// An insufficient tender never reaches the strategy.
    pub fn attempt_payment(self, fee_due: Money, tendered: Money) -> PaymentOutcome {
        match tendered.checked_sub(fee_due) {
            Some(change) => {
                self.strategy.settle(tendered, self.ledger);
                PaymentOutcome::Paid { change }
            }
            None => PaymentOutcome::Insufficient { fee_due, tendered },
        }
    }
}
