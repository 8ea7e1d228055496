use alloy_primitives::{address, Address, Bytes, U256};

/// `BridgeData.receiver` sentinel written when the real receiver is a non-EVM identifier.
pub const NON_EVM_ADDRESS: Address = address!("11f111f111f111f111f111f111f111f111f111f1");

/// Expected-address wildcard for [`ExpectedMainParameters`].
pub const ANY_ADDRESS: Address = Address::repeat_byte(0xff);

/// Expected-amount / chain-id wildcard for [`ExpectedMainParameters`].
pub const ANY_U256: U256 = U256::MAX;

/// The economically meaningful view of a bridge call.
///
/// `sending_asset_id` and `amount` describe what is actually bridged: the first swap's input when
/// source swaps are present, the `BridgeData` fields otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainParameters {
    pub bridge: String,
    pub sending_asset_id: Address,
    pub receiver: Address,
    pub amount: U256,
    pub destination_chain_id: U256,
    pub has_source_swaps: bool,
    pub has_destination_call: bool,
}

/// Common suffix of every generic swap shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericSwapParameters {
    pub sending_asset_id: Address,
    pub amount: U256,
    pub receiver: Address,
    pub receiving_asset_id: Address,
    pub receiving_amount: U256,
}

/// How a bridge encodes the destination-side recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipientKind {
    /// An ABI `address` word.
    Address,
    /// A `bytes32` identity (left-padded EVM address or a non-EVM identifier).
    Bytes32,
    /// Raw `bytes`, compared as-is.
    Bytes,
}

/// Recipient and message of the call scheduled on the destination chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationCall {
    pub recipient_kind: RecipientKind,
    /// 20 bytes for `Address`, 32 for `Bytes32`, the raw field for `Bytes`.
    pub recipient: Bytes,
    pub message: Bytes,
}

/// Expected values for main-parameter validation.
///
/// An empty `bridge`, [`ANY_ADDRESS`] and [`ANY_U256`] match anything. Flags always compare
/// exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpectedMainParameters {
    pub bridge: String,
    pub sending_asset_id: Address,
    pub receiver: Address,
    pub amount: U256,
    pub destination_chain_id: U256,
    pub has_source_swaps: bool,
    pub has_destination_call: bool,
}

impl ExpectedMainParameters {
    /// Wildcards everywhere except the two flags.
    pub fn any(has_source_swaps: bool, has_destination_call: bool) -> Self {
        Self {
            bridge: String::new(),
            sending_asset_id: ANY_ADDRESS,
            receiver: ANY_ADDRESS,
            amount: ANY_U256,
            destination_chain_id: ANY_U256,
            has_source_swaps,
            has_destination_call,
        }
    }
}

impl From<&MainParameters> for ExpectedMainParameters {
    fn from(params: &MainParameters) -> Self {
        Self {
            bridge: params.bridge.clone(),
            sending_asset_id: params.sending_asset_id,
            receiver: params.receiver,
            amount: params.amount,
            destination_chain_id: params.destination_chain_id,
            has_source_swaps: params.has_source_swaps,
            has_destination_call: params.has_destination_call,
        }
    }
}
