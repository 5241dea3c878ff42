//! End-to-end scenarios for the customer signup form.

use chrono::{Duration, Utc};
use serde_json::{json, Value};
use signup_forms::config::FormConfig;
use signup_forms::core::ErrorKind;
use signup_forms::customer::{CustomerForm, NotificationMethod};
use signup_forms::FormError;

fn signup() -> CustomerForm {
    CustomerForm::new(&FormConfig::default()).unwrap()
}

#[test]
fn phone_requirement_follows_notification() {
    let mut form = signup();
    let now = Utc::now();

    assert_eq!(form.form().value_at("notification").unwrap(), json!("email"));
    assert!(form.form().active_validators("phone").unwrap().is_empty());

    form.input("notification", json!("text"), now).unwrap();
    let names: Vec<_> = form
        .form()
        .active_validators("phone")
        .unwrap()
        .iter()
        .map(|v| v.name().to_string())
        .collect();
    assert_eq!(names, vec!["required"]);
    assert!(form.form().errors("phone").unwrap().contains(ErrorKind::Required));

    form.input("phone", json!("555-1234"), now).unwrap();
    assert!(form.form().errors("phone").unwrap().is_empty());
}

#[test]
fn switching_back_to_email_leaves_no_residual_error() {
    let mut form = signup();
    let now = Utc::now();

    form.input("notification", json!("text"), now).unwrap();
    assert!(!form.form().is_valid_at("phone").unwrap());

    form.input("notification", json!("email"), now).unwrap();
    assert!(form.form().active_validators("phone").unwrap().is_empty());
    assert!(form.form().errors("phone").unwrap().is_empty());
}

#[test]
fn notification_change_reports_phone_as_affected() {
    let mut form = signup();
    let changes = form.input("notification", json!("text"), Utc::now()).unwrap();

    assert!(changes.affects(&"phone".parse().unwrap()));
    assert!(!changes.wrote(&"phone".parse().unwrap()));
}

#[test]
fn mismatched_confirmation_fails_match_without_a_message() {
    let mut form = signup();
    let t0 = Utc::now();

    form.input("emailGroup.email", json!("a@b.com"), t0).unwrap();
    form.input("emailGroup.confirmEmail", json!("a@b.co"), t0).unwrap();
    form.touch("emailGroup.email").unwrap();
    form.touch("emailGroup.confirmEmail").unwrap();

    let group_errors = form.form().errors("emailGroup").unwrap();
    assert!(group_errors.contains(ErrorKind::Match));
    assert!(form.form().errors("emailGroup.email").unwrap().is_empty());

    form.tick(t0 + Duration::milliseconds(1000));
    assert_eq!(form.email_message(), "");
}

#[test]
fn rating_range_is_enforced() {
    let mut form = signup();
    let now = Utc::now();

    assert!(form.form().errors("rating").unwrap().is_empty());

    form.input("rating", json!(6), now).unwrap();
    assert!(form.form().errors("rating").unwrap().contains(ErrorKind::Range));

    form.input("rating", json!(3), now).unwrap();
    assert!(form.form().errors("rating").unwrap().is_empty());
}

#[test]
fn name_length_rules_apply() {
    let mut form = signup();
    let now = Utc::now();

    form.input("firstName", json!("Al"), now).unwrap();
    assert!(form.form().errors("firstName").unwrap().contains(ErrorKind::MinLength));

    form.input("lastName", json!("x".repeat(51)), now).unwrap();
    assert!(form.form().errors("lastName").unwrap().contains(ErrorKind::MaxLength));
}

#[test]
fn populate_then_save_round_trip() {
    let mut form = signup();
    let now = Utc::now();
    form.input("rating", json!(4), now).unwrap();
    form.input("sendCatalog", json!(false), now).unwrap();

    form.populate_test_data(now).unwrap();
    let saved: Value = serde_json::from_str(&form.save().unwrap()).unwrap();

    assert_eq!(saved["firstName"], json!("Jack"));
    assert_eq!(saved["lastName"], json!("Harkness"));
    assert_eq!(saved["emailGroup"]["email"], json!("jack@torchwood.com"));
    assert_eq!(saved["emailGroup"]["confirmEmail"], json!("jack@torchwood.com"));
    assert_eq!(saved["rating"], json!(4));
    assert_eq!(saved["sendCatalog"], json!(false));
    assert_eq!(saved["notification"], json!("email"));
    assert_eq!(saved["addresses"].as_array().unwrap().len(), 1);
}

#[test]
fn save_does_not_require_validity() {
    let form = signup();
    assert!(!form.form().is_valid());
    assert!(form.save().is_ok());
}

#[test]
fn populated_form_is_valid_once_address_filled() {
    let mut form = signup();
    let now = Utc::now();
    form.populate_test_data(now).unwrap();
    assert!(!form.form().is_valid());

    form.input("addresses.0.street1", json!("Roald Dahl Plass"), now).unwrap();
    assert!(form.form().is_valid());
    assert!(form.form().errors("emailGroup").unwrap().is_empty());
}

#[test]
fn populate_schedules_email_message() {
    let mut form = signup();
    let t0 = Utc::now();
    form.populate_test_data(t0).unwrap();

    assert_eq!(form.next_deadline(), Some(t0 + Duration::milliseconds(1000)));
    assert!(form.tick(t0 + Duration::milliseconds(1000)));
    assert_eq!(form.email_message(), "");
}

#[test]
fn added_addresses_are_independent() {
    let mut form = signup();
    let now = Utc::now();
    form.add_address().unwrap();
    form.input("addresses.1.city", json!("Cardiff"), now).unwrap();

    let value = form.form().value_at("addresses").unwrap();
    assert_eq!(value[0]["city"], json!(""));
    assert_eq!(value[1]["city"], json!("Cardiff"));
    assert_eq!(value[1]["addressType"], json!("home"));
}

#[test]
fn customer_read_out_matches_form() {
    let mut form = signup();
    let now = Utc::now();
    form.populate_test_data(now).unwrap();
    form.input("notification", json!("text"), now).unwrap();
    form.input("rating", json!("5"), now).unwrap();

    let customer = form.customer().unwrap();
    assert_eq!(customer.first_name, "Jack");
    assert_eq!(customer.confirm_email, "jack@torchwood.com");
    assert_eq!(customer.notification, NotificationMethod::Text);
    assert_eq!(customer.rating, Some(5));
    assert!(customer.send_catalog);
}

#[test]
fn customer_read_out_tolerates_invalid_input() {
    let mut form = signup();
    let now = Utc::now();
    form.input("firstName", json!(42), now).unwrap();
    form.input("rating", json!("abc"), now).unwrap();

    assert!(form.form().errors("rating").unwrap().contains(ErrorKind::Range));
    let customer = form.customer().unwrap();
    assert_eq!(customer.first_name, "42");
    assert_eq!(customer.rating, None);
}

#[test]
fn custom_config_changes_rules_and_timing() {
    let config = FormConfig::from_json_str(
        r#"{"debounce_ms": 200, "rating_min": 0, "rating_max": 10, "messages": {"pattern": "Bad email."}}"#,
    )
    .unwrap();
    let mut form = CustomerForm::new(&config).unwrap();
    let t0 = Utc::now();

    form.input("rating", json!(9), t0).unwrap();
    assert!(form.form().errors("rating").unwrap().is_empty());

    form.input("emailGroup.email", json!("nope"), t0).unwrap();
    assert!(form.tick(t0 + Duration::milliseconds(200)));
    assert_eq!(form.email_message(), "Bad email.");
}

#[test]
fn unknown_paths_are_errors() {
    let mut form = signup();
    assert!(matches!(
        form.input("middleName", json!("x"), Utc::now()),
        Err(FormError::NotFound(_))
    ));
    assert!(matches!(
        form.input("emailGroup", json!("x"), Utc::now()),
        Err(FormError::WrongKind { .. })
    ));
}
