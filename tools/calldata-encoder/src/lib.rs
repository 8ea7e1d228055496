//! Producer-side ABI encoding for the entry points the verifier understands.
//!
//! Encoding goes through `alloy-sol-types` so fixtures are independent of the verifier's own
//! hand-written decoding.

pub mod encoder;
pub mod fixtures;
pub mod types;


pub use encoder::{encode_bridge_call, encode_generic_swap, wrap_standardized};
pub use types::{BridgeCall, BridgeExtra, GenericSwapCall};
