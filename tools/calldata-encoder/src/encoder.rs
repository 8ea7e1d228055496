use alloy_primitives::Bytes;
use alloy_sol_types::SolCall;
use calldata_verifier_types::{
    interfaces::{
        IAcrossFacetV3, IAmarokFacet, ICelerIMFacet, IChainflipFacet, IGenericSwapFacet,
        IMayanFacet, IStargateFacet, IStargateFacetV2,
    },
    StandardizedWrapper,
};

use crate::types::{BridgeCall, BridgeExtra, GenericSwapCall};

/// Encode both entry points of one facet; `$field` is the facet's record parameter.
macro_rules! bridge_call {
    ($iface:ident, $start:ident, $swap_and_start:ident, $field:ident, $call:expr, $extra:expr) => {
        if $call.with_swaps {
            $iface::$swap_and_start {
                _bridgeData: $call.bridge_data.clone(),
                _swapData: $call.swap_data.clone(),
                $field: $extra.clone(),
            }
            .abi_encode()
        } else {
            $iface::$start {
                _bridgeData: $call.bridge_data.clone(),
                $field: $extra.clone(),
            }
            .abi_encode()
        }
    };
}

/// Encode a bridge call, selector included.
pub fn encode_bridge_call(call: &BridgeCall) -> Vec<u8> {
    match &call.extra {
        BridgeExtra::Amarok(x) => bridge_call!(
            IAmarokFacet,
            startBridgeTokensViaAmarokCall,
            swapAndStartBridgeTokensViaAmarokCall,
            _amarokData,
            call,
            x
        ),
        BridgeExtra::Stargate(x) => bridge_call!(
            IStargateFacet,
            startBridgeTokensViaStargateCall,
            swapAndStartBridgeTokensViaStargateCall,
            _stargateData,
            call,
            x
        ),
        BridgeExtra::StargateV2(x) => bridge_call!(
            IStargateFacetV2,
            startBridgeTokensViaStargateCall,
            swapAndStartBridgeTokensViaStargateCall,
            _stargateData,
            call,
            x
        ),
        BridgeExtra::CelerIm(x) => bridge_call!(
            ICelerIMFacet,
            startBridgeTokensViaCelerIMCall,
            swapAndStartBridgeTokensViaCelerIMCall,
            _celerIMData,
            call,
            x
        ),
        BridgeExtra::AcrossV3(x) => bridge_call!(
            IAcrossFacetV3,
            startBridgeTokensViaAcrossV3Call,
            swapAndStartBridgeTokensViaAcrossV3Call,
            _acrossData,
            call,
            x
        ),
        BridgeExtra::Mayan(x) => bridge_call!(
            IMayanFacet,
            startBridgeTokensViaMayanCall,
            swapAndStartBridgeTokensViaMayanCall,
            _mayanData,
            call,
            x
        ),
        BridgeExtra::Chainflip(x) => bridge_call!(
            IChainflipFacet,
            startBridgeTokensViaChainflipCall,
            swapAndStartBridgeTokensViaChainflipCall,
            _chainflipData,
            call,
            x
        ),
    }
}

/// Encode a generic swap call. Returns `None` when a single-step shape is given anything but
/// exactly one swap step.
pub fn encode_generic_swap(call: &GenericSwapCall) -> Option<Vec<u8>> {
    use calldata_verifier_types::interfaces::IGenericSwapFacetV3 as V3;
    use calldata_verifier_types::GenericSwapFunction as F;

    let single = || match call.swap_data.as_slice() {
        [step] => Some(step.clone()),
        _ => None,
    };
    let steps = call.swap_data.clone();
    let (id, integrator, referrer) = (
        call.transaction_id,
        call.integrator.clone(),
        call.referrer.clone(),
    );
    let (receiver, min_out) = (call.receiver, call.min_amount_out);

    let encoded = match call.function {
        F::SingleErc20ToErc20 => V3::swapTokensSingleV3ERC20ToERC20Call {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmountOut: min_out,
            _swapData: single()?,
        }
        .abi_encode(),
        F::SingleErc20ToNative => V3::swapTokensSingleV3ERC20ToNativeCall {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmountOut: min_out,
            _swapData: single()?,
        }
        .abi_encode(),
        F::SingleNativeToErc20 => V3::swapTokensSingleV3NativeToERC20Call {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmountOut: min_out,
            _swapData: single()?,
        }
        .abi_encode(),
        F::MultipleErc20ToErc20 => V3::swapTokensMultipleV3ERC20ToERC20Call {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmountOut: min_out,
            _swapData: steps,
        }
        .abi_encode(),
        F::MultipleErc20ToNative => V3::swapTokensMultipleV3ERC20ToNativeCall {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmountOut: min_out,
            _swapData: steps,
        }
        .abi_encode(),
        F::MultipleNativeToErc20 => V3::swapTokensMultipleV3NativeToERC20Call {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmountOut: min_out,
            _swapData: steps,
        }
        .abi_encode(),
        F::LegacyGeneric => IGenericSwapFacet::swapTokensGenericCall {
            _transactionId: id,
            _integrator: integrator,
            _referrer: referrer,
            _receiver: receiver,
            _minAmount: min_out,
            _swapData: steps,
        }
        .abi_encode(),
    };
    Some(encoded)
}

/// Wrap an encoded call in one of the standardized-call entry points.
pub fn wrap_standardized(wrapper: StandardizedWrapper, inner: &[u8]) -> Vec<u8> {
    use calldata_verifier_types::interfaces::IStandardizedCallFacet as S;

    let call_data: Bytes = inner.to_vec().into();
    match wrapper {
        StandardizedWrapper::Call => S::standardizedCallCall {
            callData: call_data,
        }
        .abi_encode(),
        StandardizedWrapper::SwapCall => S::standardizedSwapCallCall {
            callData: call_data,
        }
        .abi_encode(),
        StandardizedWrapper::BridgeCall => S::standardizedBridgeCallCall {
            callData: call_data,
        }
        .abi_encode(),
        StandardizedWrapper::SwapAndBridgeCall => S::standardizedSwapAndBridgeCallCall {
            callData: call_data,
        }
        .abi_encode(),
    }
}
