use alloy_primitives::{Address, FixedBytes, U256};
use calldata_verifier_types::{
    interfaces::{
        AcrossV3Data, AmarokData, CelerIMData, ChainflipData, MayanData, StargateData,
        StargateV2Data,
    },
    BridgeData, BridgeFacet, GenericSwapFunction, SwapData,
};

/// Bridge-specific record, one variant per facet.
#[derive(Clone, Debug)]
pub enum BridgeExtra {
    Amarok(AmarokData),
    Stargate(StargateData),
    StargateV2(StargateV2Data),
    CelerIm(CelerIMData),
    AcrossV3(AcrossV3Data),
    Mayan(MayanData),
    Chainflip(ChainflipData),
}

impl BridgeExtra {
    pub fn facet(&self) -> BridgeFacet {
        match self {
            BridgeExtra::Amarok(_) => BridgeFacet::Amarok,
            BridgeExtra::Stargate(_) => BridgeFacet::Stargate,
            BridgeExtra::StargateV2(_) => BridgeFacet::StargateV2,
            BridgeExtra::CelerIm(_) => BridgeFacet::CelerIm,
            BridgeExtra::AcrossV3(_) => BridgeFacet::AcrossV3,
            BridgeExtra::Mayan(_) => BridgeFacet::Mayan,
            BridgeExtra::Chainflip(_) => BridgeFacet::Chainflip,
        }
    }
}

/// A `startBridgeTokensVia*` or `swapAndStartBridgeTokensVia*` call.
#[derive(Clone, Debug)]
pub struct BridgeCall {
    pub bridge_data: BridgeData,
    pub swap_data: Vec<SwapData>,
    pub extra: BridgeExtra,
    /// Use the `swapAndStart*` entry point. Defaults to "swap steps are present" but may be set
    /// independently to build inconsistent payloads.
    pub with_swaps: bool,
}

impl BridgeCall {
    pub fn new(bridge_data: BridgeData, swap_data: Vec<SwapData>, extra: BridgeExtra) -> Self {
        let with_swaps = !swap_data.is_empty();
        Self {
            bridge_data,
            swap_data,
            extra,
            with_swaps,
        }
    }
}

/// One of the generic swap entry points.
#[derive(Clone, Debug)]
pub struct GenericSwapCall {
    pub function: GenericSwapFunction,
    pub transaction_id: FixedBytes<32>,
    pub integrator: String,
    pub referrer: String,
    pub receiver: Address,
    pub min_amount_out: U256,
    /// Single-step shapes take exactly one element.
    pub swap_data: Vec<SwapData>,
}
