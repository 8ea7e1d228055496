//! Decode recipes: head slot positions for every tracked record and entry point.
//!
//! Slots are 32-byte word indices inside a tuple head. These tables mirror what the producer
//! facets emit; they must change in lockstep with them (see [`super::LAYOUT_VERSION`]).

use calldata_verifier_types::{BridgeFacet, GenericSwapFunction, RecipientKind};

use crate::utils::bytes::WORD;

/// Head of every bridge call: `(BridgeData, [SwapData[],] XData)`.
pub mod bridge_call {
    pub const BRIDGE_DATA: usize = 0;
    pub const SWAP_DATA: usize = 1;
}

/// `BridgeData` head.
pub mod bridge_data {
    pub const TRANSACTION_ID: usize = 0;
    pub const BRIDGE: usize = 1;
    pub const INTEGRATOR: usize = 2;
    pub const REFERRER: usize = 3;
    pub const SENDING_ASSET_ID: usize = 4;
    pub const RECEIVER: usize = 5;
    pub const MIN_AMOUNT: usize = 6;
    pub const DESTINATION_CHAIN_ID: usize = 7;
    pub const HAS_SOURCE_SWAPS: usize = 8;
    pub const HAS_DESTINATION_CALL: usize = 9;
}

/// `SwapData` head.
pub mod swap_data {
    pub const CALL_TO: usize = 0;
    pub const APPROVE_TO: usize = 1;
    pub const SENDING_ASSET_ID: usize = 2;
    pub const RECEIVING_ASSET_ID: usize = 3;
    pub const FROM_AMOUNT: usize = 4;
    pub const CALL_DATA: usize = 5;
    pub const REQUIRES_DEPOSIT: usize = 6;
    pub const HEAD_WORDS: usize = 7;
}

/// Head of every generic swap call:
/// `(bytes32, string, string, address, uint256, SwapData | SwapData[])`.
pub mod generic_swap {
    pub const TRANSACTION_ID: usize = 0;
    pub const INTEGRATOR: usize = 1;
    pub const REFERRER: usize = 2;
    pub const RECEIVER: usize = 3;
    pub const MIN_AMOUNT_OUT: usize = 4;
    pub const SWAP_DATA: usize = 5;
    pub const HEAD_WORDS: usize = 6;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepArity {
    Single,
    Multiple,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapInput {
    Erc20,
    Native,
}

/// One of the four generic swap shapes. Shapes of equal arity share a wire layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenericSwapShape {
    pub arity: StepArity,
    pub input: SwapInput,
}

impl GenericSwapShape {
    pub const fn of(function: GenericSwapFunction) -> Self {
        let arity = if function.is_single() {
            StepArity::Single
        } else {
            StepArity::Multiple
        };
        let input = if function.is_native_input() {
            SwapInput::Native
        } else {
            SwapInput::Erc20
        };
        Self { arity, input }
    }

    /// Smallest well-formed call of this shape: selector, head, two empty strings and one
    /// `SwapData` with an empty `callData` (plus the array count and one element offset for
    /// multiple steps).
    pub const fn min_len(self) -> usize {
        let prefix = 4 + generic_swap::HEAD_WORDS * WORD + 2 * WORD;
        let step = (swap_data::HEAD_WORDS + 1) * WORD;
        match self.arity {
            StepArity::Single => prefix + step,
            StepArity::Multiple => prefix + 2 * WORD + step,
        }
    }
}

/// A field reached by following `hops` offset words from the bridge-specific record, then
/// reading head slot `word`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldPath {
    pub hops: &'static [usize],
    pub word: usize,
}

impl FieldPath {
    const fn at(word: usize) -> Self {
        Self { hops: &[], word }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestinationCallLayout {
    pub recipient: FieldPath,
    pub recipient_kind: RecipientKind,
    /// Always a `bytes` member.
    pub message: FieldPath,
}

/// What the verifier knows about a facet's bridge-specific record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeLayout {
    /// The record starts with a `bytes32 nonEVMReceiver`.
    pub non_evm_receiver: bool,
    pub destination_call: Option<DestinationCallLayout>,
}

pub const fn bridge_layout(facet: BridgeFacet) -> BridgeLayout {
    match facet {
        // AmarokData { bytes callData; address callTo; ... }
        BridgeFacet::Amarok => BridgeLayout {
            non_evm_receiver: false,
            destination_call: Some(DestinationCallLayout {
                recipient: FieldPath::at(1),
                recipient_kind: RecipientKind::Address,
                message: FieldPath::at(0),
            }),
        },
        // StargateData { ...; bytes callTo; bytes callData; }
        BridgeFacet::Stargate => BridgeLayout {
            non_evm_receiver: false,
            destination_call: Some(DestinationCallLayout {
                recipient: FieldPath::at(6),
                recipient_kind: RecipientKind::Bytes,
                message: FieldPath::at(7),
            }),
        },
        // StargateV2Data { uint16; SendParam { uint32; bytes32 to; ...; bytes composeMsg; ... }; ... }
        BridgeFacet::StargateV2 => BridgeLayout {
            non_evm_receiver: false,
            destination_call: Some(DestinationCallLayout {
                recipient: FieldPath {
                    hops: &[1],
                    word: 1,
                },
                recipient_kind: RecipientKind::Bytes32,
                message: FieldPath {
                    hops: &[1],
                    word: 5,
                },
            }),
        },
        // CelerIMData { uint32; uint64; bytes callTo; bytes callData; ... }
        BridgeFacet::CelerIm => BridgeLayout {
            non_evm_receiver: false,
            destination_call: Some(DestinationCallLayout {
                recipient: FieldPath::at(2),
                recipient_kind: RecipientKind::Bytes,
                message: FieldPath::at(3),
            }),
        },
        // AcrossV3Data { address receiverAddress; ...; bytes message; }
        BridgeFacet::AcrossV3 => BridgeLayout {
            non_evm_receiver: false,
            destination_call: Some(DestinationCallLayout {
                recipient: FieldPath::at(0),
                recipient_kind: RecipientKind::Address,
                message: FieldPath::at(9),
            }),
        },
        BridgeFacet::Mayan | BridgeFacet::Chainflip => BridgeLayout {
            non_evm_receiver: true,
            destination_call: None,
        },
    }
}
