//! Calldata verification for cross-chain bridge and swap entry points.
//!
//! Given the raw calldata of a call into the diamond, extract what the call will actually do
//! (which asset moves, how much, to whom, on which chain, with what destination-side message)
//! and compare it to what the caller expects. Nothing is executed; the calldata is decoded
//! against a closed registry of known entry points.
//!
//! The free functions below use [`VerifierConfig::default`]; build a [`CalldataVerifier`] to
//! change limits.

pub mod decoder;
pub mod errors;
pub mod registry;
pub mod resolver;
pub mod utils;
pub mod validator;
mod verifier;

use alloy_primitives::FixedBytes;

pub use calldata_verifier_types as types;
pub use calldata_verifier_types::{
    BridgeData, DestinationCall, ExpectedMainParameters, GenericSwapParameters, MainParameters,
    RecipientKind, SwapData, ANY_ADDRESS, ANY_U256, NON_EVM_ADDRESS,
};
pub use errors::DecodeError;
pub use verifier::{CalldataVerifier, VerifierConfig, MAX_SWAP_STEPS_DEFAULT};

pub fn extract_bridge_data(data: &[u8]) -> Result<BridgeData, DecodeError> {
    CalldataVerifier::default().extract_bridge_data(data)
}

pub fn extract_swap_data(data: &[u8]) -> Result<Vec<SwapData>, DecodeError> {
    CalldataVerifier::default().extract_swap_data(data)
}

pub fn extract_data(data: &[u8]) -> Result<(BridgeData, Vec<SwapData>), DecodeError> {
    CalldataVerifier::default().extract_data(data)
}

pub fn extract_main_parameters(data: &[u8]) -> Result<MainParameters, DecodeError> {
    CalldataVerifier::default().extract_main_parameters(data)
}

pub fn extract_non_evm_address(data: &[u8]) -> Result<FixedBytes<32>, DecodeError> {
    CalldataVerifier::default().extract_non_evm_address(data)
}

pub fn extract_generic_swap_parameters(data: &[u8]) -> Result<GenericSwapParameters, DecodeError> {
    CalldataVerifier::default().extract_generic_swap_parameters(data)
}

pub fn extract_destination_call(data: &[u8]) -> Result<Option<DestinationCall>, DecodeError> {
    CalldataVerifier::default().extract_destination_call(data)
}

pub fn validate_calldata(
    data: &[u8],
    expected: &ExpectedMainParameters,
) -> Result<bool, DecodeError> {
    CalldataVerifier::default().validate_calldata(data, expected)
}

pub fn validate_destination_calldata(
    data: &[u8],
    expected_recipient: &[u8],
    expected_message: &[u8],
) -> Result<bool, DecodeError> {
    CalldataVerifier::default().validate_destination_calldata(data, expected_recipient, expected_message)
}
