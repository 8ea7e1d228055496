//! Cross-reference resolution: combine `BridgeData` with the swap steps that feed it.

use calldata_verifier_types::{BridgeData, MainParameters, SwapData};

use crate::errors::DecodeError;

/// Build the main parameters of a bridge call.
///
/// With source swaps the bridged asset and amount are the first swap's input, because
/// `BridgeData.minAmount` then only describes the post-swap minimum. Everything else comes from
/// `BridgeData` unchanged.
pub fn resolve_main_parameters(
    bridge_data: &BridgeData,
    swap_data: &[SwapData],
) -> Result<MainParameters, DecodeError> {
    let (sending_asset_id, amount) = if bridge_data.hasSourceSwaps {
        let first = swap_data.first().ok_or(DecodeError::MalformedField {
            field: "swapData",
            reason: "hasSourceSwaps is set but no swap steps are present",
        })?;
        (first.sendingAssetId, first.fromAmount)
    } else {
        (bridge_data.sendingAssetId, bridge_data.minAmount)
    };

    Ok(MainParameters {
        bridge: bridge_data.bridge.clone(),
        sending_asset_id,
        receiver: bridge_data.receiver,
        amount,
        destination_chain_id: bridge_data.destinationChainId,
        has_source_swaps: bridge_data.hasSourceSwaps,
        has_destination_call: bridge_data.hasDestinationCall,
    })
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, Bytes, B256, U256};
    use pretty_assertions::assert_eq;

    use super::*;

    fn bridge_data(has_source_swaps: bool) -> BridgeData {
        BridgeData {
            transactionId: B256::repeat_byte(0x01),
            bridge: "stargate".into(),
            integrator: "acme".into(),
            referrer: Address::ZERO,
            sendingAssetId: Address::repeat_byte(0xaa),
            receiver: Address::repeat_byte(0xbb),
            minAmount: U256::from(900u64),
            destinationChainId: U256::from(10u64),
            hasSourceSwaps: has_source_swaps,
            hasDestinationCall: false,
        }
    }

    fn step(asset: u8, amount: u64) -> SwapData {
        SwapData {
            callTo: Address::repeat_byte(0xdd),
            approveTo: Address::repeat_byte(0xdd),
            sendingAssetId: Address::repeat_byte(asset),
            receivingAssetId: Address::repeat_byte(0xaa),
            fromAmount: U256::from(amount),
            callData: Bytes::from_static(&[0x12, 0x34]),
            requiresDeposit: true,
        }
    }

    #[test]
    fn without_swaps_bridge_data_is_authoritative() {
        let params = resolve_main_parameters(&bridge_data(false), &[step(0x11, 5)]).unwrap();
        assert_eq!(params.sending_asset_id, Address::repeat_byte(0xaa));
        assert_eq!(params.amount, U256::from(900u64));
        assert!(!params.has_source_swaps);
    }

    #[test]
    fn with_swaps_first_step_is_authoritative() {
        let steps = [step(0x11, 1_000), step(0x22, 7)];
        let params = resolve_main_parameters(&bridge_data(true), &steps).unwrap();
        assert_eq!(params.sending_asset_id, Address::repeat_byte(0x11));
        assert_eq!(params.amount, U256::from(1_000u64));
        assert_eq!(params.receiver, Address::repeat_byte(0xbb));
        assert_eq!(params.destination_chain_id, U256::from(10u64));
    }

    #[test]
    fn swap_flag_without_steps_is_malformed() {
        assert!(matches!(
            resolve_main_parameters(&bridge_data(true), &[]),
            Err(DecodeError::MalformedField {
                field: "swapData",
                ..
            })
        ));
    }
}
