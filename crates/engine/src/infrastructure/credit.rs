//! Simulated credit bureau adapter.
//!
//! Stand-in for a real bureau integration: returns a random score in the
//! standard 300-850 range. Latency, retries, and auth belong to a real
//! adapter behind the same port.

use async_trait::async_trait;
use rand::Rng;

use fleetlease_domain::CustomerId;

use super::ports::{CreditCheckError, CreditCheckPort};

const MIN_SCORE: u16 = 300;
const MAX_SCORE: u16 = 850;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedCreditCheck;

impl SimulatedCreditCheck {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CreditCheckPort for SimulatedCreditCheck {
    async fn check_credit_score(&self, customer_id: CustomerId) -> Result<u16, CreditCheckError> {
        let score = rand::thread_rng().gen_range(MIN_SCORE..=MAX_SCORE);
        tracing::info!(%customer_id, score, "simulated credit check");
        Ok(score)
    }
}
