//! Simulated payment provider adapter.
//!
//! Declines a configurable fraction of payments and mints transaction ids,
//! standing in for a real provider behind [`PaymentGatewayPort`].

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use fleetlease_domain::{CustomerId, Money};

use super::ports::{PaymentError, PaymentGatewayPort, PaymentReceipt};

pub struct SimulatedPaymentGateway {
    /// Fraction of payments to decline, clamped to [0, 1].
    failure_rate: f64,
}

impl SimulatedPaymentGateway {
    pub fn new(failure_rate: f64) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        // Matches the original provider stand-in: roughly one in ten
        // payments bounces.
        Self::new(0.1)
    }
}

#[async_trait]
impl PaymentGatewayPort for SimulatedPaymentGateway {
    async fn process_payment(
        &self,
        customer_id: CustomerId,
        amount: &Money,
        description: &str,
    ) -> Result<PaymentReceipt, PaymentError> {
        tracing::info!(%customer_id, %amount, description, "processing payment");

        if rand::thread_rng().gen_bool(self.failure_rate) {
            tracing::warn!(%customer_id, "payment declined");
            return Err(PaymentError::Declined {
                reason: "insufficient funds".to_string(),
            });
        }

        let transaction_id = format!(
            "tx_{}_{}",
            Utc::now().timestamp_millis(),
            rand::thread_rng().gen_range(0..1000)
        );
        tracing::info!(%customer_id, transaction_id, "payment processed");
        Ok(PaymentReceipt { transaction_id })
    }
}
