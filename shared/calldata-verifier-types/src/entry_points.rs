use alloy_sol_types::SolCall;

use crate::interfaces::{
    IAcrossFacetV3, IAmarokFacet, ICelerIMFacet, IChainflipFacet, IGenericSwapFacet, IMayanFacet,
    IStargateFacet, IStargateFacetV2,
};

/// Leading 4-byte function identifier of an encoded call.
pub type Selector = [u8; 4];

/// Bridge facets whose entry points are tracked.
///
/// Each facet exposes `startBridgeTokensVia*(BridgeData, XData)` and
/// `swapAndStartBridgeTokensVia*(BridgeData, SwapData[], XData)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BridgeFacet {
    Amarok,
    Stargate,
    StargateV2,
    CelerIm,
    AcrossV3,
    Mayan,
    Chainflip,
}

impl BridgeFacet {
    pub const ALL: [BridgeFacet; 7] = [
        BridgeFacet::Amarok,
        BridgeFacet::Stargate,
        BridgeFacet::StargateV2,
        BridgeFacet::CelerIm,
        BridgeFacet::AcrossV3,
        BridgeFacet::Mayan,
        BridgeFacet::Chainflip,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BridgeFacet::Amarok => "amarok",
            BridgeFacet::Stargate => "stargate",
            BridgeFacet::StargateV2 => "stargateV2",
            BridgeFacet::CelerIm => "celerIM",
            BridgeFacet::AcrossV3 => "acrossV3",
            BridgeFacet::Mayan => "mayan",
            BridgeFacet::Chainflip => "chainflip",
        }
    }

    /// Selector of the plain `startBridgeTokensVia*` entry point.
    pub const fn start_selector(self) -> Selector {
        match self {
            BridgeFacet::Amarok => IAmarokFacet::startBridgeTokensViaAmarokCall::SELECTOR,
            BridgeFacet::Stargate => IStargateFacet::startBridgeTokensViaStargateCall::SELECTOR,
            BridgeFacet::StargateV2 => IStargateFacetV2::startBridgeTokensViaStargateCall::SELECTOR,
            BridgeFacet::CelerIm => ICelerIMFacet::startBridgeTokensViaCelerIMCall::SELECTOR,
            BridgeFacet::AcrossV3 => IAcrossFacetV3::startBridgeTokensViaAcrossV3Call::SELECTOR,
            BridgeFacet::Mayan => IMayanFacet::startBridgeTokensViaMayanCall::SELECTOR,
            BridgeFacet::Chainflip => IChainflipFacet::startBridgeTokensViaChainflipCall::SELECTOR,
        }
    }

    /// Selector of the `swapAndStartBridgeTokensVia*` entry point.
    pub const fn swap_and_start_selector(self) -> Selector {
        match self {
            BridgeFacet::Amarok => IAmarokFacet::swapAndStartBridgeTokensViaAmarokCall::SELECTOR,
            BridgeFacet::Stargate => {
                IStargateFacet::swapAndStartBridgeTokensViaStargateCall::SELECTOR
            }
            BridgeFacet::StargateV2 => {
                IStargateFacetV2::swapAndStartBridgeTokensViaStargateCall::SELECTOR
            }
            BridgeFacet::CelerIm => ICelerIMFacet::swapAndStartBridgeTokensViaCelerIMCall::SELECTOR,
            BridgeFacet::AcrossV3 => {
                IAcrossFacetV3::swapAndStartBridgeTokensViaAcrossV3Call::SELECTOR
            }
            BridgeFacet::Mayan => IMayanFacet::swapAndStartBridgeTokensViaMayanCall::SELECTOR,
            BridgeFacet::Chainflip => {
                IChainflipFacet::swapAndStartBridgeTokensViaChainflipCall::SELECTOR
            }
        }
    }

    /// Resolve a selector to `(facet, with_swaps)`.
    pub fn from_selector(selector: Selector) -> Option<(Self, bool)> {
        Self::ALL.into_iter().find_map(|facet| {
            if facet.start_selector() == selector {
                Some((facet, false))
            } else if facet.swap_and_start_selector() == selector {
                Some((facet, true))
            } else {
                None
            }
        })
    }
}

/// Generic swap entry points (no bridging).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericSwapFunction {
    SingleErc20ToErc20,
    SingleErc20ToNative,
    SingleNativeToErc20,
    MultipleErc20ToErc20,
    MultipleErc20ToNative,
    MultipleNativeToErc20,
    /// Pre-V3 `swapTokensGeneric`, always a `SwapData[]`.
    LegacyGeneric,
}

impl GenericSwapFunction {
    pub const ALL: [GenericSwapFunction; 7] = [
        GenericSwapFunction::SingleErc20ToErc20,
        GenericSwapFunction::SingleErc20ToNative,
        GenericSwapFunction::SingleNativeToErc20,
        GenericSwapFunction::MultipleErc20ToErc20,
        GenericSwapFunction::MultipleErc20ToNative,
        GenericSwapFunction::MultipleNativeToErc20,
        GenericSwapFunction::LegacyGeneric,
    ];

    pub const fn selector(self) -> Selector {
        use crate::interfaces::IGenericSwapFacetV3 as V3;
        match self {
            GenericSwapFunction::SingleErc20ToErc20 => {
                V3::swapTokensSingleV3ERC20ToERC20Call::SELECTOR
            }
            GenericSwapFunction::SingleErc20ToNative => {
                V3::swapTokensSingleV3ERC20ToNativeCall::SELECTOR
            }
            GenericSwapFunction::SingleNativeToErc20 => {
                V3::swapTokensSingleV3NativeToERC20Call::SELECTOR
            }
            GenericSwapFunction::MultipleErc20ToErc20 => {
                V3::swapTokensMultipleV3ERC20ToERC20Call::SELECTOR
            }
            GenericSwapFunction::MultipleErc20ToNative => {
                V3::swapTokensMultipleV3ERC20ToNativeCall::SELECTOR
            }
            GenericSwapFunction::MultipleNativeToErc20 => {
                V3::swapTokensMultipleV3NativeToERC20Call::SELECTOR
            }
            GenericSwapFunction::LegacyGeneric => {
                IGenericSwapFacet::swapTokensGenericCall::SELECTOR
            }
        }
    }

    /// Whether the function takes exactly one `SwapData` rather than an array.
    pub const fn is_single(self) -> bool {
        matches!(
            self,
            GenericSwapFunction::SingleErc20ToErc20
                | GenericSwapFunction::SingleErc20ToNative
                | GenericSwapFunction::SingleNativeToErc20
        )
    }

    /// Whether the swap input is the chain's native asset.
    pub const fn is_native_input(self) -> bool {
        matches!(
            self,
            GenericSwapFunction::SingleNativeToErc20 | GenericSwapFunction::MultipleNativeToErc20
        )
    }

    pub fn from_selector(selector: Selector) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.selector() == selector)
    }
}

/// `StandardizedCallFacet` wrappers, each `(bytes callData)` around one inner call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardizedWrapper {
    Call,
    SwapCall,
    BridgeCall,
    SwapAndBridgeCall,
}

impl StandardizedWrapper {
    pub const ALL: [StandardizedWrapper; 4] = [
        StandardizedWrapper::Call,
        StandardizedWrapper::SwapCall,
        StandardizedWrapper::BridgeCall,
        StandardizedWrapper::SwapAndBridgeCall,
    ];

    pub const fn selector(self) -> Selector {
        use crate::interfaces::IStandardizedCallFacet as S;
        match self {
            StandardizedWrapper::Call => S::standardizedCallCall::SELECTOR,
            StandardizedWrapper::SwapCall => S::standardizedSwapCallCall::SELECTOR,
            StandardizedWrapper::BridgeCall => S::standardizedBridgeCallCall::SELECTOR,
            StandardizedWrapper::SwapAndBridgeCall => {
                S::standardizedSwapAndBridgeCallCall::SELECTOR
            }
        }
    }

    pub fn from_selector(selector: Selector) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.selector() == selector)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::keccak256;

    use super::*;

    fn selector_of(signature: &str) -> Selector {
        let hash = keccak256(signature.as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    #[test]
    fn selectors_match_canonical_signatures() {
        assert_eq!(
            StandardizedWrapper::Call.selector(),
            selector_of("standardizedCall(bytes)")
        );
        assert_eq!(
            GenericSwapFunction::LegacyGeneric.selector(),
            selector_of(
                "swapTokensGeneric(bytes32,string,string,address,uint256,\
                 (address,address,address,address,uint256,bytes,bool)[])"
            )
        );
        assert_eq!(
            BridgeFacet::Mayan.start_selector(),
            selector_of(
                "startBridgeTokensViaMayan(\
                 (bytes32,string,string,address,address,address,uint256,uint256,bool,bool),\
                 (bytes32,address,bytes))"
            )
        );
    }

    #[test]
    fn stargate_versions_do_not_collide() {
        assert_ne!(
            BridgeFacet::Stargate.start_selector(),
            BridgeFacet::StargateV2.start_selector()
        );
        assert_eq!(
            BridgeFacet::from_selector(BridgeFacet::StargateV2.swap_and_start_selector()),
            Some((BridgeFacet::StargateV2, true))
        );
    }

    #[test]
    fn shape_flags() {
        assert!(GenericSwapFunction::SingleNativeToErc20.is_single());
        assert!(GenericSwapFunction::SingleNativeToErc20.is_native_input());
        assert!(!GenericSwapFunction::LegacyGeneric.is_single());
        assert!(!GenericSwapFunction::MultipleErc20ToNative.is_native_input());
    }
}
