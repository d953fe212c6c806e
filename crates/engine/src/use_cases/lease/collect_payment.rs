//! Collect monthly payment use case.
//!
//! The domain core produces Money values; this use case is the orchestration
//! that actually hands them to the payment provider. The aggregate itself
//! never calls the gateway.

use std::sync::Arc;

use fleetlease_domain::{DomainError, LeaseId};

use crate::infrastructure::ports::{LeaseRepo, PaymentGatewayPort, PaymentReceipt};

use super::error::LeaseError;

pub struct CollectMonthlyPayment {
    lease_repo: Arc<dyn LeaseRepo>,
    payment_gateway: Arc<dyn PaymentGatewayPort>,
}

impl CollectMonthlyPayment {
    pub fn new(
        lease_repo: Arc<dyn LeaseRepo>,
        payment_gateway: Arc<dyn PaymentGatewayPort>,
    ) -> Self {
        Self {
            lease_repo,
            payment_gateway,
        }
    }

    /// Charge one monthly payment for an active lease.
    ///
    /// # Returns
    /// * `Ok(PaymentReceipt)` - provider receipt for the processed payment
    /// * `Err(LeaseError)` - missing or inactive lease, declined payment,
    ///   or storage failure
    pub async fn execute(&self, lease_id: LeaseId) -> Result<PaymentReceipt, LeaseError> {
        let lease = self
            .lease_repo
            .get(lease_id)
            .await?
            .ok_or(LeaseError::LeaseNotFound)?;

        if !lease.is_active() {
            return Err(LeaseError::Domain(DomainError::LeaseNotActive {
                status: lease.status(),
            }));
        }

        let description = format!("Monthly payment for lease {}", lease.id());
        let receipt = self
            .payment_gateway
            .process_payment(lease.customer_id(), lease.monthly_payment(), &description)
            .await?;

        tracing::info!(
            %lease_id,
            transaction_id = %receipt.transaction_id,
            amount = %lease.monthly_payment(),
            "monthly payment collected"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockLeaseRepo, MockPaymentGatewayPort, PaymentError, RepoError,
    };
    use chrono::NaiveDate;
    use fleetlease_domain::{CustomerId, Lease, LeaseStatus, Money, VehicleId};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn usd(cents: i64) -> Money {
        Money::usd(Decimal::new(cents, 2)).expect("non-negative amount")
    }

    fn lease_with_status(status: LeaseStatus) -> Lease {
        Lease::rehydrate(
            LeaseId::new(),
            CustomerId::new(),
            VehicleId::new(),
            date(2023, 1, 1),
            date(2024, 1, 1),
            usd(49900),
            usd(100000),
            status,
            None,
        )
    }

    #[tokio::test]
    async fn charges_the_monthly_payment() {
        let mut lease_repo = MockLeaseRepo::new();
        let mut payment_gateway = MockPaymentGatewayPort::new();

        lease_repo
            .expect_get()
            .returning(|_| Ok(Some(lease_with_status(LeaseStatus::Active))));
        payment_gateway
            .expect_process_payment()
            .withf(|_, amount, description| {
                amount.amount() == Decimal::new(49900, 2)
                    && description.starts_with("Monthly payment for lease ")
            })
            .returning(|_, _, _| {
                Ok(PaymentReceipt {
                    transaction_id: "tx_123".to_string(),
                })
            });

        let use_case = CollectMonthlyPayment::new(Arc::new(lease_repo), Arc::new(payment_gateway));
        let receipt = use_case
            .execute(LeaseId::new())
            .await
            .expect("payment succeeds");

        assert_eq!(receipt.transaction_id, "tx_123");
    }

    #[tokio::test]
    async fn inactive_lease_is_not_charged() {
        let mut lease_repo = MockLeaseRepo::new();
        let payment_gateway = MockPaymentGatewayPort::new();

        lease_repo
            .expect_get()
            .returning(|_| Ok(Some(lease_with_status(LeaseStatus::Terminated))));
        // No process_payment expected.

        let use_case = CollectMonthlyPayment::new(Arc::new(lease_repo), Arc::new(payment_gateway));
        let err = use_case
            .execute(LeaseId::new())
            .await
            .expect_err("terminated lease");

        assert!(matches!(
            err,
            LeaseError::Domain(DomainError::LeaseNotActive { .. })
        ));
    }

    #[tokio::test]
    async fn declined_payment_surfaces_the_provider_error() {
        let mut lease_repo = MockLeaseRepo::new();
        let mut payment_gateway = MockPaymentGatewayPort::new();

        lease_repo
            .expect_get()
            .returning(|_| Ok(Some(lease_with_status(LeaseStatus::Active))));
        payment_gateway.expect_process_payment().returning(|_, _, _| {
            Err(PaymentError::Declined {
                reason: "insufficient funds".to_string(),
            })
        });

        let use_case = CollectMonthlyPayment::new(Arc::new(lease_repo), Arc::new(payment_gateway));
        let err = use_case
            .execute(LeaseId::new())
            .await
            .expect_err("declined payment");

        assert!(matches!(
            err,
            LeaseError::Payment(PaymentError::Declined { .. })
        ));
    }

    #[tokio::test]
    async fn provider_outage_surfaces_as_payment_error() {
        let mut lease_repo = MockLeaseRepo::new();
        let mut payment_gateway = MockPaymentGatewayPort::new();

        lease_repo
            .expect_get()
            .returning(|_| Ok(Some(lease_with_status(LeaseStatus::Active))));
        payment_gateway
            .expect_process_payment()
            .returning(|_, _, _| Err(PaymentError::Unavailable));

        let use_case = CollectMonthlyPayment::new(Arc::new(lease_repo), Arc::new(payment_gateway));
        let err = use_case
            .execute(LeaseId::new())
            .await
            .expect_err("provider down");

        assert!(matches!(err, LeaseError::Payment(PaymentError::Unavailable)));
    }

    #[tokio::test]
    async fn storage_failures_surface_as_repo_errors() {
        let mut lease_repo = MockLeaseRepo::new();
        let payment_gateway = MockPaymentGatewayPort::new();

        lease_repo
            .expect_get()
            .returning(|_| Err(RepoError::Storage("connection reset".to_string())));

        let use_case = CollectMonthlyPayment::new(Arc::new(lease_repo), Arc::new(payment_gateway));
        let err = use_case.execute(LeaseId::new()).await.expect_err("storage down");

        assert!(matches!(err, LeaseError::Repo(RepoError::Storage(_))));
    }
}
