//! Per-operation-type decoding of raw history records into ledger entries.
//!
//! Each decoder is a pure function from an operation payload to zero or
//! more legs; the normalizer attaches the shared envelope fields. Operation
//! types without a registered decoder are logged and skipped, since the
//! filter mask and the decoder table can drift apart across node versions.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::info;
use serde_json::Value;

use crate::domain::{Asset, LedgerEntry};
use crate::source::RawRecord;
use crate::ConfigurationError;

/// One `(from, to, amount)` triple produced by a decoder.
#[derive(Debug, Clone, PartialEq)]
struct Leg {
    from: Option<String>,
    to: Option<String>,
    asset: Asset,
}

type Decoder = fn(&Value) -> Result<Vec<Leg>, ConfigurationError>;

static DECODERS: OnceLock<HashMap<&'static str, Decoder>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Decoder> {
    DECODERS.get_or_init(|| {
        let mut table: HashMap<&'static str, Decoder> = HashMap::new();
        table.insert("transfer", decode_transfer);
        table.insert("fill_recurrent_transfer", decode_transfer);
        table.insert("interest", decode_interest);
        table.insert("transfer_to_vesting", decode_transfer_to_vesting);
        table.insert("fill_vesting_withdraw", decode_fill_vesting_withdraw);
        table.insert("fill_convert_request", decode_fill_convert_request);
        table.insert(
            "fill_collateralized_convert_request",
            decode_fill_collateralized_convert_request,
        );
        table.insert("producer_reward", decode_producer_reward);
        table.insert("claim_reward_balance", decode_claim_reward_balance);
        table.insert("escrow_release", decode_escrow_release);
        table.insert("account_create", decode_account_creation_fee);
        table.insert("account_create_with_delegation", decode_account_creation_fee);
        table.insert("proposal_pay", decode_proposal_pay);
        table.insert("fill_order", decode_fill_order);
        table.insert("proposal_fee", decode_proposal_fee);
        table
    })
}

/// Turn one raw record into its normalized ledger entries.
///
/// `datetime` is the already-resolved local datetime string for the record;
/// the paginator owns timestamp policy, not the decoders.
pub fn normalize(
    record: &RawRecord,
    datetime: &str,
) -> Result<Vec<LedgerEntry>, ConfigurationError> {
    let operation = record.entry.op.kind.as_str();
    let Some(decoder) = registry().get(operation) else {
        info!("no decoder registered for operation '{operation}', skipping");
        return Ok(Vec::new());
    };

    let legs = decoder(&record.entry.op.payload)?;
    Ok(legs
        .into_iter()
        .map(|leg| LedgerEntry {
            operation_type: operation.to_owned(),
            datetime: datetime.to_owned(),
            transaction_id: record.entry.trx_id.clone(),
            block_number: record.entry.block,
            from: leg.from,
            to: leg.to,
            amount: leg.asset.amount(),
            currency: leg.asset.symbol().to_string(),
        })
        .collect())
}

fn asset_field(
    payload: &Value,
    operation: &'static str,
    field: &'static str,
) -> Result<Asset, ConfigurationError> {
    let value = payload
        .get(field)
        .and_then(Value::as_str)
        .ok_or(ConfigurationError::MissingPayloadField { operation, field })?;
    Asset::parse(value)
}

fn account_field(
    payload: &Value,
    operation: &'static str,
    field: &'static str,
) -> Result<String, ConfigurationError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ConfigurationError::MissingPayloadField { operation, field })
}

fn leg(from: Option<String>, to: Option<String>, asset: Asset) -> Leg {
    Leg { from, to, asset }
}

fn decode_transfer(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    let asset = asset_field(payload, "transfer", "amount")?;
    Ok(vec![leg(
        Some(account_field(payload, "transfer", "from")?),
        Some(account_field(payload, "transfer", "to")?),
        asset,
    )])
}

fn decode_interest(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    let asset = asset_field(payload, "interest", "interest")?;
    Ok(vec![leg(
        None,
        Some(account_field(payload, "interest", "owner")?),
        asset,
    )])
}

fn decode_transfer_to_vesting(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    let asset = asset_field(payload, "transfer_to_vesting", "amount")?;
    Ok(vec![leg(
        Some(account_field(payload, "transfer_to_vesting", "from")?),
        Some(account_field(payload, "transfer_to_vesting", "to")?),
        asset,
    )])
}

fn decode_fill_vesting_withdraw(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    let asset = asset_field(payload, "fill_vesting_withdraw", "deposited")?;
    Ok(vec![leg(
        Some(account_field(payload, "fill_vesting_withdraw", "from_account")?),
        Some(account_field(payload, "fill_vesting_withdraw", "to_account")?),
        asset,
    )])
}

fn decode_fill_convert_request(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "fill_convert_request";
    let owner = account_field(payload, OP, "owner")?;
    Ok(vec![
        leg(
            Some(owner.clone()),
            Some(owner.clone()),
            asset_field(payload, OP, "amount_out")?,
        ),
        leg(
            Some(owner.clone()),
            Some(owner),
            asset_field(payload, OP, "amount_in")?,
        ),
    ])
}

fn decode_fill_collateralized_convert_request(
    payload: &Value,
) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "fill_collateralized_convert_request";
    let owner = account_field(payload, OP, "owner")?;
    Ok(vec![
        leg(
            Some(owner.clone()),
            Some(owner.clone()),
            asset_field(payload, OP, "amount_out")?,
        ),
        leg(
            Some(owner.clone()),
            Some(owner.clone()),
            asset_field(payload, OP, "amount_in")?,
        ),
        leg(
            Some(owner.clone()),
            Some(owner),
            asset_field(payload, OP, "excess_collateral")?,
        ),
    ])
}

fn decode_producer_reward(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    let asset = asset_field(payload, "producer_reward", "vesting_shares")?;
    Ok(vec![leg(
        None,
        Some(account_field(payload, "producer_reward", "producer")?),
        asset,
    )])
}

/// Reward claims may legitimately carry zero for any unit; zero legs are
/// suppressed rather than exported.
fn decode_claim_reward_balance(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "claim_reward_balance";
    let account = account_field(payload, OP, "account")?;
    let mut legs = Vec::with_capacity(3);
    for field in ["reward_hive", "reward_hbd", "reward_vests"] {
        let asset = asset_field(payload, OP, field)?;
        if asset.amount() > 0.0 {
            legs.push(leg(None, Some(account.clone()), asset));
        }
    }
    Ok(legs)
}

fn decode_escrow_release(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "escrow_release";
    let from = account_field(payload, OP, "from")?;
    let to = account_field(payload, OP, "to")?;
    let mut legs = Vec::with_capacity(2);
    for field in ["hbd_amount", "hive_amount"] {
        let asset = asset_field(payload, OP, field)?;
        if asset.amount() > 0.0 {
            legs.push(leg(Some(from.clone()), Some(to.clone()), asset));
        }
    }
    Ok(legs)
}

fn decode_account_creation_fee(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "account_create";
    let asset = asset_field(payload, OP, "fee")?;
    if asset.amount() <= 0.0 {
        return Ok(Vec::new());
    }
    Ok(vec![leg(
        Some(account_field(payload, OP, "creator")?),
        None,
        asset,
    )])
}

fn decode_proposal_pay(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "proposal_pay";
    let asset = asset_field(payload, OP, "payment")?;
    if asset.amount() <= 0.0 {
        return Ok(Vec::new());
    }
    Ok(vec![leg(
        Some(account_field(payload, OP, "payer")?),
        Some(account_field(payload, OP, "receiver")?),
        asset,
    )])
}

/// An order fill has two sides with swapped from/to; either side may be
/// zero after rounding and is then suppressed.
fn decode_fill_order(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "fill_order";
    let current_owner = account_field(payload, OP, "current_owner")?;
    let open_owner = account_field(payload, OP, "open_owner")?;
    let mut legs = Vec::with_capacity(2);

    let current_pays = asset_field(payload, OP, "current_pays")?;
    if current_pays.amount() > 0.0 {
        legs.push(leg(
            Some(current_owner.clone()),
            Some(open_owner.clone()),
            current_pays,
        ));
    }

    let open_pays = asset_field(payload, OP, "open_pays")?;
    if open_pays.amount() > 0.0 {
        legs.push(leg(Some(open_owner), Some(current_owner), open_pays));
    }

    Ok(legs)
}

fn decode_proposal_fee(payload: &Value) -> Result<Vec<Leg>, ConfigurationError> {
    const OP: &str = "proposal_fee";
    let asset = asset_field(payload, OP, "fee")?;
    if asset.amount() <= 0.0 {
        return Ok(Vec::new());
    }
    Ok(vec![leg(
        Some(account_field(payload, OP, "creator")?),
        Some(account_field(payload, OP, "treasury")?),
        asset,
    )])
}
