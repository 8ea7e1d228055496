use calldata_verifier_types::GenericSwapParameters;
use tracing::debug;

use crate::{
    decoder::{
        records::{decode_swap_data, decode_swap_steps},
        Calldata,
    },
    errors::DecodeError,
    registry::{layouts::generic_swap as slot, GenericSwapShape, StepArity},
};

/// Summarise a generic swap call: what goes in (first step), what comes out (last step), and
/// who receives it.
pub fn generic_swap_parameters(
    call: &Calldata<'_>,
    limit: usize,
) -> Result<GenericSwapParameters, DecodeError> {
    let function = call.generic_swap()?;
    let shape = GenericSwapShape::of(function);

    let required = shape.min_len();
    if call.call_len() < required {
        return Err(DecodeError::InsufficientCalldata {
            required,
            actual: call.call_len(),
        });
    }

    let args = call.args();
    let (sending_asset_id, amount, receiving_asset_id) = match shape.arity {
        StepArity::Single => {
            let step = decode_swap_data(args.tail(slot::SWAP_DATA)?)?;
            (step.sendingAssetId, step.fromAmount, step.receivingAssetId)
        }
        StepArity::Multiple => {
            let steps = decode_swap_steps(args.array(slot::SWAP_DATA)?, limit)?;
            let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
                return Err(DecodeError::MalformedField {
                    field: "swapData",
                    reason: "no swap steps",
                });
            };
            debug!(steps = steps.len(), "aggregated generic swap steps");
            (first.sendingAssetId, first.fromAmount, last.receivingAssetId)
        }
    };

    Ok(GenericSwapParameters {
        sending_asset_id,
        amount,
        receiver: args.address(slot::RECEIVER)?,
        receiving_asset_id,
        receiving_amount: args.uint(slot::MIN_AMOUNT_OUT)?,
    })
}
