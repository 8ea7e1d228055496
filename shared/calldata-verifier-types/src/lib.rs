//! Shared types for the calldata verifier: ABI records, entry-point tables and parameter views.
//!
//! Both the verifier (consumer) and the encoder (producer) depend on this crate so the layouts
//! they agree on are declared exactly once.

pub mod entry_points;
pub mod interfaces;
pub mod params;

pub use entry_points::{BridgeFacet, GenericSwapFunction, Selector, StandardizedWrapper};
pub use interfaces::{BridgeData, SwapData};
pub use params::{
    DestinationCall, ExpectedMainParameters, GenericSwapParameters, MainParameters,
    RecipientKind, ANY_ADDRESS, ANY_U256, NON_EVM_ADDRESS,
};
