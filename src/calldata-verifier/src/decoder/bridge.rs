//! Decoders for bridge entry points.

use alloy_primitives::{Bytes, FixedBytes};
use calldata_verifier_types::{BridgeData, DestinationCall, RecipientKind, SwapData};

use crate::{
    decoder::{
        frame::Frame,
        records::{decode_bridge_data, decode_swap_steps},
        Calldata,
    },
    errors::DecodeError,
    registry::{layouts::bridge_call, BridgeEntry, FieldPath},
};

pub fn bridge_data(call: &Calldata<'_>) -> Result<BridgeData, DecodeError> {
    call.bridge_entry()?;
    decode_bridge_data(call.args().tail(bridge_call::BRIDGE_DATA)?)
}

/// Source swap steps. Empty for entry points without a swap array.
pub fn swap_steps(call: &Calldata<'_>, limit: usize) -> Result<Vec<SwapData>, DecodeError> {
    if !call.bridge_entry()?.with_swaps {
        return Ok(Vec::new());
    }
    decode_swap_steps(call.args().array(bridge_call::SWAP_DATA)?, limit)
}

/// `nonEVMReceiver` of a facet whose bridge-specific record starts with one.
///
/// Where the record sits is driven by `hasSourceSwaps`, which must agree with the entry point.
pub fn non_evm_receiver(
    call: &Calldata<'_>,
    bridge_data: &BridgeData,
) -> Result<FixedBytes<32>, DecodeError> {
    let entry = call.bridge_entry()?;
    if !entry.layout().non_evm_receiver {
        return Err(DecodeError::WrongEntryPoint {
            selector: call.selector(),
            expected: "a bridge call with a non-EVM receiver",
        });
    }
    if bridge_data.hasSourceSwaps != entry.with_swaps {
        return Err(DecodeError::MalformedField {
            field: "hasSourceSwaps",
            reason: "flag disagrees with the entry point",
        });
    }
    let slot = BridgeEntry {
        with_swaps: bridge_data.hasSourceSwaps,
        ..entry
    }
    .bridge_specific_slot();
    call.args().tail(slot)?.b32(0)
}

/// Destination call carried by the bridge-specific record, or `None` for facets without one.
pub fn destination_call(call: &Calldata<'_>) -> Result<Option<DestinationCall>, DecodeError> {
    let entry = call.bridge_entry()?;
    let Some(layout) = entry.layout().destination_call else {
        return Ok(None);
    };
    let record = call.args().tail(entry.bridge_specific_slot())?;

    let holder = follow(record, layout.recipient)?;
    let word = layout.recipient.word;
    let recipient = match layout.recipient_kind {
        RecipientKind::Address => Bytes::copy_from_slice(holder.address(word)?.as_slice()),
        RecipientKind::Bytes32 => Bytes::copy_from_slice(holder.b32(word)?.as_slice()),
        RecipientKind::Bytes => Bytes::copy_from_slice(holder.bytes(word)?),
    };
    let message = follow(record, layout.message)?.bytes(layout.message.word)?;

    Ok(Some(DestinationCall {
        recipient_kind: layout.recipient_kind,
        recipient,
        message: Bytes::copy_from_slice(message),
    }))
}

fn follow<'a>(mut frame: Frame<'a>, path: FieldPath) -> Result<Frame<'a>, DecodeError> {
    for &hop in path.hops {
        frame = frame.tail(hop)?;
    }
    Ok(frame)
}
