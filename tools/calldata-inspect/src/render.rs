//! JSON views of decoded records.

use calldata_verifier::{
    BridgeData, DestinationCall, GenericSwapParameters, MainParameters, RecipientKind, SwapData,
};
use serde_json::{json, Value};

fn hex0x(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn bridge_data(bd: &BridgeData) -> Value {
    json!({
        "transactionId": hex0x(bd.transactionId.as_slice()),
        "bridge": bd.bridge,
        "integrator": bd.integrator,
        "referrer": bd.referrer.to_string(),
        "sendingAssetId": bd.sendingAssetId.to_string(),
        "receiver": bd.receiver.to_string(),
        "minAmount": bd.minAmount.to_string(),
        "destinationChainId": bd.destinationChainId.to_string(),
        "hasSourceSwaps": bd.hasSourceSwaps,
        "hasDestinationCall": bd.hasDestinationCall,
    })
}

pub fn swap_step(step: &SwapData) -> Value {
    json!({
        "callTo": step.callTo.to_string(),
        "approveTo": step.approveTo.to_string(),
        "sendingAssetId": step.sendingAssetId.to_string(),
        "receivingAssetId": step.receivingAssetId.to_string(),
        "fromAmount": step.fromAmount.to_string(),
        "callData": hex0x(&step.callData),
        "requiresDeposit": step.requiresDeposit,
    })
}

pub fn swap_steps(steps: &[SwapData]) -> Value {
    Value::Array(steps.iter().map(swap_step).collect())
}

pub fn main_parameters(p: &MainParameters) -> Value {
    json!({
        "bridge": p.bridge,
        "sendingAssetId": p.sending_asset_id.to_string(),
        "receiver": p.receiver.to_string(),
        "amount": p.amount.to_string(),
        "destinationChainId": p.destination_chain_id.to_string(),
        "hasSourceSwaps": p.has_source_swaps,
        "hasDestinationCall": p.has_destination_call,
    })
}

pub fn generic_swap(p: &GenericSwapParameters) -> Value {
    json!({
        "sendingAssetId": p.sending_asset_id.to_string(),
        "amount": p.amount.to_string(),
        "receiver": p.receiver.to_string(),
        "receivingAssetId": p.receiving_asset_id.to_string(),
        "receivingAmount": p.receiving_amount.to_string(),
    })
}

pub fn destination_call(call: Option<&DestinationCall>) -> Value {
    let Some(call) = call else {
        return Value::Null;
    };
    let kind = match call.recipient_kind {
        RecipientKind::Address => "address",
        RecipientKind::Bytes32 => "bytes32",
        RecipientKind::Bytes => "bytes",
    };
    json!({
        "recipientKind": kind,
        "recipient": hex0x(&call.recipient),
        "message": hex0x(&call.message),
    })
}
