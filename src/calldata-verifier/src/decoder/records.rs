use alloy_primitives::Bytes;
use calldata_verifier_types::{BridgeData, SwapData};
use tracing::trace;

use crate::{
    decoder::frame::{ArrayFrame, Frame},
    errors::DecodeError,
    registry::layouts::{bridge_data as bd, swap_data as sd},
};

/// Decode a `BridgeData` tuple. Only the bytes its offsets reference are read.
pub fn decode_bridge_data(frame: Frame<'_>) -> Result<BridgeData, DecodeError> {
    Ok(BridgeData {
        transactionId: frame.b32(bd::TRANSACTION_ID)?,
        bridge: frame.string(bd::BRIDGE)?,
        integrator: frame.string(bd::INTEGRATOR)?,
        referrer: frame.address(bd::REFERRER)?,
        sendingAssetId: frame.address(bd::SENDING_ASSET_ID)?,
        receiver: frame.address(bd::RECEIVER)?,
        minAmount: frame.uint(bd::MIN_AMOUNT)?,
        destinationChainId: frame.uint(bd::DESTINATION_CHAIN_ID)?,
        hasSourceSwaps: frame.flag(bd::HAS_SOURCE_SWAPS)?,
        hasDestinationCall: frame.flag(bd::HAS_DESTINATION_CALL)?,
    })
}

pub fn decode_swap_data(frame: Frame<'_>) -> Result<SwapData, DecodeError> {
    Ok(SwapData {
        callTo: frame.address(sd::CALL_TO)?,
        approveTo: frame.address(sd::APPROVE_TO)?,
        sendingAssetId: frame.address(sd::SENDING_ASSET_ID)?,
        receivingAssetId: frame.address(sd::RECEIVING_ASSET_ID)?,
        fromAmount: frame.uint(sd::FROM_AMOUNT)?,
        callData: Bytes::copy_from_slice(frame.bytes(sd::CALL_DATA)?),
        requiresDeposit: frame.flag(sd::REQUIRES_DEPOSIT)?,
    })
}

/// Decode a `SwapData[]`, in order. The declared count is checked against `limit`, then against
/// the buffer, before any element is touched.
pub fn decode_swap_steps(array: ArrayFrame<'_>, limit: usize) -> Result<Vec<SwapData>, DecodeError> {
    if array.len() > limit {
        return Err(DecodeError::TooManySwapSteps {
            count: array.len(),
            limit,
        });
    }
    array.check_offsets()?;
    let mut steps = Vec::with_capacity(array.len());
    for index in 0..array.len() {
        trace!(index, "decoding swap step");
        steps.push(decode_swap_data(array.element(index)?)?);
    }
    Ok(steps)
}
