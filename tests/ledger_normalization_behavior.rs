//! Decode-table coverage for the operation normalizer: one scenario per
//! registered operation family, asserting the emitted legs.

use hiveledger_core::normalizer::normalize;
use serde_json::json;

use hiveledger_tests::raw_record;

const WHEN: &str = "2024-03-10 08:00:00";

#[test]
fn recurrent_transfer_fill_uses_the_transfer_shape() {
    let record = raw_record(
        10,
        "2024-03-10T08:00:00",
        "fill_recurrent_transfer",
        json!({
            "from": "alice",
            "to": "bob",
            "amount": "5.000 HBD",
            "memo": "",
            "remaining_executions": 3
        }),
    );

    let entries = normalize(&record, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].operation_type, "fill_recurrent_transfer");
    assert_eq!(entries[0].from.as_deref(), Some("alice"));
    assert_eq!(entries[0].to.as_deref(), Some("bob"));
    assert_eq!(entries[0].currency, "HBD");
}

#[test]
fn interest_flows_from_nowhere_to_the_owner() {
    let record = raw_record(
        11,
        "2024-03-10T08:00:00",
        "interest",
        json!({ "owner": "alice", "interest": "0.015 HBD" }),
    );

    let entries = normalize(&record, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].from, None);
    assert_eq!(entries[0].to.as_deref(), Some("alice"));
    assert_eq!(entries[0].amount, 0.015);
}

#[test]
fn vesting_transfer_and_withdraw_carry_their_accounts() {
    let power_up = raw_record(
        12,
        "2024-03-10T08:00:00",
        "transfer_to_vesting",
        json!({ "from": "alice", "to": "alice", "amount": "100.000 HIVE" }),
    );
    let entries = normalize(&power_up, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].currency, "HIVE");

    let withdraw = raw_record(
        13,
        "2024-03-10T08:00:00",
        "fill_vesting_withdraw",
        json!({
            "from_account": "alice",
            "to_account": "bob",
            "withdrawn": "1000.000000 VESTS",
            "deposited": "0.512 HIVE"
        }),
    );
    let entries = normalize(&withdraw, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].from.as_deref(), Some("alice"));
    assert_eq!(entries[0].to.as_deref(), Some("bob"));
    // The deposited side is the financially relevant leg.
    assert_eq!(entries[0].amount, 0.512);
    assert_eq!(entries[0].currency, "HIVE");
}

#[test]
fn convert_fill_emits_outflow_then_inflow() {
    let record = raw_record(
        14,
        "2024-03-10T08:00:00",
        "fill_convert_request",
        json!({
            "owner": "alice",
            "requestid": 7,
            "amount_in": "10.000 HBD",
            "amount_out": "33.333 HIVE"
        }),
    );

    let entries = normalize(&record, WHEN).expect("must decode");
    assert_eq!(entries.len(), 2);
    // Both legs stay on the owner; record order is amount_out first.
    assert_eq!(entries[0].currency, "HIVE");
    assert_eq!(entries[1].currency, "HBD");
    for entry in &entries {
        assert_eq!(entry.from.as_deref(), Some("alice"));
        assert_eq!(entry.to.as_deref(), Some("alice"));
    }
}

#[test]
fn producer_reward_pays_vesting_shares_to_the_producer() {
    let record = raw_record(
        15,
        "2024-03-10T08:00:00",
        "producer_reward",
        json!({ "producer": "witness", "vesting_shares": "420.000000 VESTS" }),
    );

    let entries = normalize(&record, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].from, None);
    assert_eq!(entries[0].to.as_deref(), Some("witness"));
    assert_eq!(entries[0].currency, "VESTS");
}

#[test]
fn escrow_release_suppresses_zero_sides() {
    let record = raw_record(
        16,
        "2024-03-10T08:00:00",
        "escrow_release",
        json!({
            "from": "alice",
            "to": "bob",
            "agent": "carol",
            "who": "alice",
            "receiver": "bob",
            "escrow_id": 1,
            "hbd_amount": "0.000 HBD",
            "hive_amount": "12.000 HIVE"
        }),
    );

    let entries = normalize(&record, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].currency, "HIVE");
    assert_eq!(entries[0].from.as_deref(), Some("alice"));
    assert_eq!(entries[0].to.as_deref(), Some("bob"));
}

#[test]
fn proposal_payments_and_fees_keep_their_direction() {
    let pay = raw_record(
        17,
        "2024-03-10T08:00:00",
        "proposal_pay",
        json!({
            "proposal_id": 3,
            "receiver": "worker",
            "payer": "hive.fund",
            "payment": "25.000 HBD"
        }),
    );
    let entries = normalize(&pay, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].from.as_deref(), Some("hive.fund"));
    assert_eq!(entries[0].to.as_deref(), Some("worker"));

    let fee = raw_record(
        18,
        "2024-03-10T08:00:00",
        "proposal_fee",
        json!({
            "creator": "alice",
            "treasury": "hive.fund",
            "proposal_id": 3,
            "fee": "10.000 HBD"
        }),
    );
    let entries = normalize(&fee, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].from.as_deref(), Some("alice"));
    assert_eq!(entries[0].to.as_deref(), Some("hive.fund"));
}

#[test]
fn account_creation_with_delegation_charges_the_creator() {
    let record = raw_record(
        19,
        "2024-03-10T08:00:00",
        "account_create_with_delegation",
        json!({
            "creator": "alice",
            "new_account_name": "bob",
            "fee": "3.000 HIVE",
            "delegation": "0.000000 VESTS"
        }),
    );

    let entries = normalize(&record, WHEN).expect("must decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].from.as_deref(), Some("alice"));
    assert_eq!(entries[0].to, None);
    assert_eq!(entries[0].amount, 3.0);
}
