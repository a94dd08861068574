use crate::domain::payment::PaymentReceipt;
use crate::domain::ports::PaymentLedger;
use std::sync::{Arc, Mutex};

/// Keeps settlements in memory, in the order they were recorded.
///
/// Clones share the same buffer, so a caller can hand one clone to a lot and
/// read receipts back through another.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    receipts: Arc<Mutex<Vec<PaymentReceipt>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receipts(&self) -> Vec<PaymentReceipt> {
        match self.receipts.lock() {
            Ok(receipts) => receipts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl PaymentLedger for InMemoryLedger {
    fn record(&self, receipt: PaymentReceipt) {
        // a panicking reader must not make settlements disappear
        let mut receipts = match self.receipts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        receipts.push(receipt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::payment::PaymentMethod;

    #[test]
    fn test_in_memory_ledger_shares_buffer_between_clones() {
        let ledger = InMemoryLedger::new();
        let handle = ledger.clone();

        ledger.record(PaymentReceipt {
            method: PaymentMethod::Upi,
            amount: Money::new(50),
        });
        ledger.record(PaymentReceipt {
            method: PaymentMethod::CreditCard,
            amount: Money::new(200),
        });

        let receipts = handle.receipts();
        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[0].method, PaymentMethod::Upi);
        assert_eq!(receipts[1].amount, Money::new(200));
    }
}
