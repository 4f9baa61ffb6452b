use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_quote_registered_above_threshold() {
    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args(["quote", "--registered", "--amount", "150"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Shipping: $0.00"))
        .stdout(predicate::str::contains("Total:    $150.00"))
        .stdout(predicate::str::contains("Shipping is free!"));
}

#[test]
fn test_quote_unregistered_above_threshold() {
    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args(["quote", "--amount", "150"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Shipping: $10.00"))
        .stdout(predicate::str::contains("Total:    $160.00"))
        .stdout(predicate::str::contains("registered customers"));
}

#[test]
fn test_quote_with_coupon() {
    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args(["quote", "--registered", "--amount", "50", "--coupon", " freeship "]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Coupon:   valid"))
        .stdout(predicate::str::contains("Total:    $50.00"));
}

#[test]
fn test_quote_invalid_amounts_count_as_zero() {
    for raw in ["-5", "abc"] {
        let mut cmd = Command::new(cargo_bin!("shipcalc"));
        cmd.args(["quote", "--registered", "--amount", raw]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Amount:   $0.00"))
            .stdout(predicate::str::contains("Shipping: $10.00"))
            .stdout(predicate::str::contains("Total:    $10.00"));
    }
}

#[test]
fn test_quote_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args([
        "quote",
        "--registered",
        "--amount",
        "50",
        "--coupon",
        "BOGUS",
        "--format",
        "json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output)?;

    assert_eq!(report["registered"], true);
    assert_eq!(report["coupon"], "invalid");
    assert_eq!(report["amount"], "50.00");
    assert_eq!(report["free_shipping"], false);
    assert_eq!(report["shipping_fee"], "10.00");
    assert_eq!(report["total"], "60.00");
    assert_eq!(report["verdict"], "below_threshold");
    Ok(())
}

#[test]
fn test_quote_json_rounds_half_cents_like_text() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args(["quote", "--amount", "1.005", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["amount"], "1.01");
    assert_eq!(report["total"], "11.01");

    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args(["quote", "--amount", "1.005"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Amount:   $1.01"))
        .stdout(predicate::str::contains("Total:    $11.01"));
    Ok(())
}

#[test]
fn test_quote_amount_beyond_decimal_range() {
    for raw in ["1e30", "79228162514264337593543950335"] {
        let mut cmd = Command::new(cargo_bin!("shipcalc"));
        cmd.args(["quote", "--registered", "--amount", raw]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains(
                "Amount:   $1,000,000,000,000,000,000,000,000,000.00",
            ))
            .stdout(predicate::str::contains("Shipping is free!"));
    }
}

#[test]
fn test_quote_requires_amount() {
    let mut cmd = Command::new(cargo_bin!("shipcalc"));
    cmd.args(["quote", "--registered"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--amount"));
}
