//! FleetLease engine - demo entry point.
//!
//! Wires the in-memory repositories and simulated external adapters and
//! walks one full lease lifecycle, logging every step. A deployment would
//! swap the adapters behind the same ports and put a transport in front of
//! the use cases.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleetlease_engine::infrastructure::{
    clock::SystemClock,
    credit::SimulatedCreditCheck,
    memory::{InMemoryCustomerRepo, InMemoryLeaseRepo, InMemoryVehicleRepo},
    payment::SimulatedPaymentGateway,
};
use fleetlease_engine::use_cases::{
    customer::RegisterCustomerRequest, lease::CreateLeaseRequest, vehicle::AddVehicleRequest,
    AddVehicle, CollectMonthlyPayment, CreateLease, ExpireDueLeases, FindAvailableVehicles,
    RegisterCustomer, TerminateLease,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env for local overrides.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetlease_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FleetLease engine demo");

    let payment_failure_rate: f64 = std::env::var("PAYMENT_FAILURE_RATE")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0.1);

    // Infrastructure
    let customer_repo = Arc::new(InMemoryCustomerRepo::new());
    let vehicle_repo = Arc::new(InMemoryVehicleRepo::new());
    let lease_repo = Arc::new(InMemoryLeaseRepo::new());
    let credit_check = Arc::new(SimulatedCreditCheck::new());
    let payment_gateway = Arc::new(SimulatedPaymentGateway::new(payment_failure_rate));
    let clock = Arc::new(SystemClock);

    // Use cases
    let register_customer = RegisterCustomer::new(customer_repo.clone(), credit_check);
    let add_vehicle = AddVehicle::new(vehicle_repo.clone());
    let find_available = FindAvailableVehicles::new(vehicle_repo.clone());
    let create_lease = CreateLease::new(customer_repo, vehicle_repo.clone(), lease_repo.clone());
    let collect_payment = CollectMonthlyPayment::new(lease_repo.clone(), payment_gateway);
    let terminate_lease = TerminateLease::new(lease_repo.clone(), vehicle_repo.clone());
    let expire_due = ExpireDueLeases::new(lease_repo, vehicle_repo, clock);

    // Walk one lease lifecycle.
    let customer_id = register_customer
        .execute(RegisterCustomerRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone_number: "+1-555-0100".to_string(),
            credit_score: Some(720),
        })
        .await?;

    let vehicle_id = add_vehicle
        .execute(AddVehicleRequest {
            vin: "1HGCM82633A123456".to_string(),
            make: "Honda".to_string(),
            model: "Accord".to_string(),
            year: 2023,
            monthly_lease_rate: Decimal::new(49900, 2),
            currency: None,
        })
        .await?;

    let available = find_available.execute().await?;
    tracing::info!(count = available.len(), "vehicles available for leasing");

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let lease_id = create_lease
        .execute(CreateLeaseRequest {
            customer_id,
            vehicle_id,
            start_date: start,
            end_date: end,
            security_deposit: Decimal::new(100000, 2),
            deposit_currency: None,
        })
        .await?;

    match collect_payment.execute(lease_id).await {
        Ok(receipt) => tracing::info!(transaction_id = %receipt.transaction_id, "payment ok"),
        Err(err) => tracing::warn!(%err, "payment failed; would retry out of band"),
    }

    let termination = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
    terminate_lease.execute(lease_id, termination).await?;

    let expired = expire_due.execute().await?;
    tracing::info!(expired, "expiry sweep complete");

    tracing::info!("lifecycle done");
    Ok(())
}
