//! Comparisons against caller-supplied expectations.
//!
//! Mismatches are `false`, never errors. The only error raised here is for an expectation that
//! cannot describe any recipient at all.

use alloy_primitives::{Address, B256};
use calldata_verifier_types::{
    DestinationCall, ExpectedMainParameters, MainParameters, RecipientKind, ANY_ADDRESS, ANY_U256,
};

use crate::errors::DecodeError;

/// Shortest expected recipient accepted by destination validation.
pub const MIN_RECIPIENT_LEN: usize = 20;

/// Match decoded parameters against expectations. An empty `bridge`, [`ANY_ADDRESS`] and
/// [`ANY_U256`] are wildcards; the two flags always compare exactly.
pub fn main_parameters_match(params: &MainParameters, expected: &ExpectedMainParameters) -> bool {
    (expected.bridge.is_empty() || expected.bridge == params.bridge)
        && (expected.sending_asset_id == ANY_ADDRESS
            || expected.sending_asset_id == params.sending_asset_id)
        && (expected.receiver == ANY_ADDRESS || expected.receiver == params.receiver)
        && (expected.amount == ANY_U256 || expected.amount == params.amount)
        && (expected.destination_chain_id == ANY_U256
            || expected.destination_chain_id == params.destination_chain_id)
        && expected.has_source_swaps == params.has_source_swaps
        && expected.has_destination_call == params.has_destination_call
}

pub fn check_expected_recipient(expected: &[u8]) -> Result<(), DecodeError> {
    if expected.len() < MIN_RECIPIENT_LEN {
        return Err(DecodeError::MalformedField {
            field: "recipient",
            reason: "expected recipient is shorter than 20 bytes",
        });
    }
    Ok(())
}

/// Exact match of recipient and message. Address-like recipients are compared as 32-byte
/// words so a bare 20-byte address and its left-padded form are interchangeable.
pub fn destination_call_matches(
    call: &DestinationCall,
    expected_recipient: &[u8],
    expected_message: &[u8],
) -> bool {
    recipient_matches(call.recipient_kind, &call.recipient, expected_recipient)
        && call.message.as_ref() == expected_message
}

fn recipient_matches(kind: RecipientKind, actual: &[u8], expected: &[u8]) -> bool {
    match kind {
        RecipientKind::Bytes => actual == expected,
        RecipientKind::Address | RecipientKind::Bytes32 => {
            match (as_word(actual), as_word(expected)) {
                (Some(actual), Some(expected)) => actual == expected,
                _ => false,
            }
        }
    }
}

fn as_word(raw: &[u8]) -> Option<B256> {
    match raw.len() {
        20 => Some(Address::from_slice(raw).into_word()),
        32 => Some(B256::from_slice(raw)),
        _ => None,
    }
}
