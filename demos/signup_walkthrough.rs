//! Signup Walkthrough
//!
//! This example drives the customer signup form the way a view would.
//!
//! Key concepts:
//! - Phone is required only while notification is "text"
//! - The e-mail message appears only after the quiet period
//! - Populating test data changes only the named fields
//! - Saving serializes the whole form, valid or not
//!
//! Run with: RUST_LOG=debug cargo run --example signup_walkthrough

use chrono::{Duration, Utc};
use serde_json::json;
use signup_forms::config::FormConfig;
use signup_forms::customer::CustomerForm;
use signup_forms::FormError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FormError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Customer Signup Walkthrough ===\n");

    let mut signup = CustomerForm::new(&FormConfig::default())?;
    let t0 = Utc::now();

    // Example 1: Dependent validators
    println!("Example 1: Notification -> Phone");
    println!("  phone validators at start: {}", signup.form().active_validators("phone")?.len());
    signup.input("notification", json!("text"), t0)?;
    println!("  after choosing text: {:?}", signup.form().errors("phone")?);
    signup.input("phone", json!("555-1234"), t0)?;
    println!("  after entering a number: {:?}\n", signup.form().errors("phone")?);

    // Example 2: Debounced message
    println!("Example 2: Debounced e-mail message");
    signup.input("emailGroup.email", json!("jack@"), t0)?;
    signup.tick(t0 + Duration::milliseconds(500));
    println!("  after 500ms: {:?}", signup.email_message());
    signup.tick(t0 + Duration::milliseconds(1000));
    println!("  after 1000ms: {:?}\n", signup.email_message());

    // Example 3: Test data and addresses
    println!("Example 3: Test data");
    let t1 = t0 + Duration::milliseconds(2000);
    signup.populate_test_data(t1)?;
    signup.add_address()?;
    signup.input("addresses.0.street1", json!("Roald Dahl Plass"), t1)?;
    for (path, errors) in signup.form().all_errors() {
        println!("  {path}: {errors:?}");
    }
    println!("  form valid: {}\n", signup.form().is_valid());

    // Example 4: Save
    println!("Example 4: Save");
    println!("  Saved: {}", signup.save()?);

    signup.teardown();
    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
