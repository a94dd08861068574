use super::payment::PaymentReceipt;
use tracing::info;

/// Sink for settlement records.
///
/// Recording must not block or fail: the lot calls it while holding its
/// state and does not look at the outcome.
pub trait PaymentLedger: Send + Sync {
    fn record(&self, receipt: PaymentReceipt);
}

pub type PaymentLedgerBox = Box<dyn PaymentLedger>;

/// Default sink: emits every settlement as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLedger;

impl PaymentLedger for TracingLedger {
    fn record(&self, receipt: PaymentReceipt) {
        info!(
            method = %receipt.method,
            amount = receipt.amount.value(),
            "{receipt}"
        );
    }
}
