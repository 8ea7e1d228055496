//! Ready-made records for tests and demos.
//!
//! Every facet gets a record with a recognisable destination recipient and message, so tests can
//! assert on decoded values without rebuilding the record by hand.

use alloy_primitives::{address, Address, Bytes, FixedBytes, U256};
use calldata_verifier_types::{
    interfaces::{
        AcrossV3Data, AmarokData, CelerIMData, ChainflipData, MayanData, MessagingFee, SendParam,
        StargateData, StargateV2Data,
    },
    BridgeData, BridgeFacet, GenericSwapFunction, SwapData, NON_EVM_ADDRESS,
};

use crate::types::{BridgeCall, BridgeExtra, GenericSwapCall};

pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
pub const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const DEX: Address = address!("1111111254eeb25477b68fb85ed929f73a960582");
pub const RECEIVER: Address = address!("00000000000000000000000000000000000000b0");
/// Destination-side contract that receives the cross-chain message.
pub const DESTINATION_RECIPIENT: Address = address!("00000000000000000000000000000000000000de");
pub const DESTINATION_CHAIN_ID: u64 = 137;

pub fn destination_message() -> Bytes {
    Bytes::from_static(b"\xca\xfe\xba\xbe destination payload")
}

/// Solana-style 32-byte receiver used by non-EVM facets.
pub fn non_evm_receiver() -> FixedBytes<32> {
    FixedBytes::repeat_byte(0x5e)
}

pub fn bridge_data(facet: BridgeFacet, has_source_swaps: bool) -> BridgeData {
    let layout_has_destination_call = !matches!(facet, BridgeFacet::Mayan | BridgeFacet::Chainflip);
    BridgeData {
        transactionId: FixedBytes::repeat_byte(0x01),
        bridge: facet.name().to_owned(),
        integrator: "acme-wallet".into(),
        referrer: Address::ZERO,
        sendingAssetId: USDC,
        receiver: if layout_has_destination_call {
            RECEIVER
        } else {
            NON_EVM_ADDRESS
        },
        minAmount: U256::from(1_000_000u64),
        destinationChainId: U256::from(DESTINATION_CHAIN_ID),
        hasSourceSwaps: has_source_swaps,
        hasDestinationCall: layout_has_destination_call,
    }
}

pub fn swap_step(from: Address, to: Address, amount: u64) -> SwapData {
    SwapData {
        callTo: DEX,
        approveTo: DEX,
        sendingAssetId: from,
        receivingAssetId: to,
        fromAmount: U256::from(amount),
        callData: Bytes::from_static(&[0x12, 0xaa, 0x3c, 0xaf, 0x00, 0x01]),
        requiresDeposit: true,
    }
}

/// Bridge-specific record for `facet` carrying the fixture destination call (or non-EVM
/// receiver).
pub fn extra(facet: BridgeFacet) -> BridgeExtra {
    let recipient = DESTINATION_RECIPIENT;
    let message = destination_message();
    match facet {
        BridgeFacet::Amarok => BridgeExtra::Amarok(AmarokData {
            callData: message,
            callTo: recipient,
            relayerFee: U256::from(10u64),
            slippageTol: U256::from(30u64),
            delegate: RECEIVER,
            destChainDomainId: 1_886_350_457,
            payFeeWithSendingAsset: false,
        }),
        BridgeFacet::Stargate => BridgeExtra::Stargate(StargateData {
            srcPoolId: U256::from(1u64),
            dstPoolId: U256::from(1u64),
            minAmountLD: U256::from(990_000u64),
            dstGasForCall: U256::from(200_000u64),
            lzFee: U256::from(1_000u64),
            refundAddress: RECEIVER,
            callTo: Bytes::copy_from_slice(recipient.as_slice()),
            callData: message,
        }),
        BridgeFacet::StargateV2 => BridgeExtra::StargateV2(StargateV2Data {
            assetId: 1,
            sendParams: SendParam {
                dstEid: 30_109,
                to: recipient.into_word(),
                amountLD: U256::from(1_000_000u64),
                minAmountLD: U256::from(990_000u64),
                extraOptions: Bytes::from_static(&[0x00, 0x03]),
                composeMsg: message,
                oftCmd: Bytes::new(),
            },
            fee: MessagingFee {
                nativeFee: U256::from(5_000u64),
                lzTokenFee: U256::ZERO,
            },
            refundAddress: RECEIVER,
        }),
        BridgeFacet::CelerIm => BridgeExtra::CelerIm(CelerIMData {
            maxSlippage: 5_000,
            nonce: 7,
            callTo: Bytes::copy_from_slice(recipient.as_slice()),
            callData: message,
            messageBusFee: U256::from(1_000u64),
            bridgeType: 0,
        }),
        BridgeFacet::AcrossV3 => BridgeExtra::AcrossV3(AcrossV3Data {
            receiverAddress: recipient,
            refundAddress: RECEIVER,
            receivingAssetId: USDC,
            outputAmount: U256::from(995_000u64),
            outputAmountPercent: 995_000_000_000_000_000,
            exclusiveRelayer: Address::ZERO,
            quoteTimestamp: 1_700_000_000,
            fillDeadline: 1_700_003_600,
            exclusivityDeadline: 0,
            message,
        }),
        BridgeFacet::Mayan => BridgeExtra::Mayan(MayanData {
            nonEVMReceiver: non_evm_receiver(),
            mayanProtocol: address!("00000000000000000000000000000000000000aa"),
            protocolData: Bytes::from_static(&[0x01, 0x02, 0x03, 0x04]),
        }),
        BridgeFacet::Chainflip => BridgeExtra::Chainflip(ChainflipData {
            nonEVMReceiver: non_evm_receiver(),
            dstToken: 3,
            dstCallReceiver: Address::ZERO,
            dstCallSwapData: Vec::new(),
            gasAmount: U256::ZERO,
            cfParameters: Bytes::new(),
        }),
    }
}

/// A consistent bridge call for `facet` with `swaps` source steps. The first step swaps WETH
/// in, every later one DAI, and each step yields DAI. `BridgeData` itself names USDC.
pub fn bridge_call(facet: BridgeFacet, swaps: usize) -> BridgeCall {
    let swap_data = (0..swaps)
        .map(|i| swap_step(if i == 0 { WETH } else { DAI }, DAI, 2_000 + i as u64))
        .collect();
    BridgeCall::new(bridge_data(facet, swaps > 0), swap_data, extra(facet))
}

/// A generic swap call with `steps` chained steps: WETH into the first, USDC out of the last.
pub fn generic_swap_call(function: GenericSwapFunction, steps: usize) -> GenericSwapCall {
    let swap_data = (0..steps)
        .map(|i| {
            let from = if i == 0 { WETH } else { DAI };
            let to = if i + 1 == steps { USDC } else { DAI };
            swap_step(from, to, 5_000 + i as u64)
        })
        .collect();
    GenericSwapCall {
        function,
        transaction_id: FixedBytes::repeat_byte(0x02),
        integrator: "acme-wallet".into(),
        referrer: "ref".into(),
        receiver: RECEIVER,
        min_amount_out: U256::from(4_900u64),
        swap_data,
    }
}
