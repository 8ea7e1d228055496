//! Layout registry: maps an entry-point selector to the recipe used to decode it.
//!
//! The set of entry points is closed. Supporting a new facet means adding a variant in
//! `calldata-verifier-types` and a recipe in [`layouts`], not new lookup machinery.

pub mod layouts;

use calldata_verifier_types::{BridgeFacet, GenericSwapFunction, Selector, StandardizedWrapper};

use crate::errors::DecodeError;

pub use layouts::{
    bridge_layout, BridgeLayout, DestinationCallLayout, FieldPath, GenericSwapShape, StepArity,
    SwapInput,
};

/// Revision of the producer-side layouts mirrored by this registry.
pub const LAYOUT_VERSION: u16 = 1;

/// A bridge entry point: `startBridgeTokensVia*` or `swapAndStartBridgeTokensVia*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeEntry {
    pub facet: BridgeFacet,
    pub with_swaps: bool,
}

impl BridgeEntry {
    /// Head slot holding the offset of the bridge-specific record.
    pub const fn bridge_specific_slot(self) -> usize {
        if self.with_swaps {
            2
        } else {
            1
        }
    }

    pub const fn layout(self) -> BridgeLayout {
        bridge_layout(self.facet)
    }

    pub const fn selector(self) -> Selector {
        if self.with_swaps {
            self.facet.swap_and_start_selector()
        } else {
            self.facet.start_selector()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    Bridge(BridgeEntry),
    GenericSwap(GenericSwapFunction),
    Standardized(StandardizedWrapper),
}

impl EntryPoint {
    pub fn from_selector(selector: Selector) -> Result<Self, DecodeError> {
        if let Some((facet, with_swaps)) = BridgeFacet::from_selector(selector) {
            return Ok(EntryPoint::Bridge(BridgeEntry { facet, with_swaps }));
        }
        if let Some(function) = GenericSwapFunction::from_selector(selector) {
            return Ok(EntryPoint::GenericSwap(function));
        }
        if let Some(wrapper) = StandardizedWrapper::from_selector(selector) {
            return Ok(EntryPoint::Standardized(wrapper));
        }
        Err(DecodeError::UnknownSelector(selector))
    }

    pub fn selector(&self) -> Selector {
        match self {
            EntryPoint::Bridge(entry) => entry.selector(),
            EntryPoint::GenericSwap(function) => function.selector(),
            EntryPoint::Standardized(wrapper) => wrapper.selector(),
        }
    }
}

/// Every tracked entry point.
pub fn entry_points() -> impl Iterator<Item = EntryPoint> {
    let bridges = BridgeFacet::ALL.into_iter().flat_map(|facet| {
        [false, true]
            .into_iter()
            .map(move |with_swaps| EntryPoint::Bridge(BridgeEntry { facet, with_swaps }))
    });
    let swaps = GenericSwapFunction::ALL
        .into_iter()
        .map(EntryPoint::GenericSwap);
    let wrappers = StandardizedWrapper::ALL
        .into_iter()
        .map(EntryPoint::Standardized);
    bridges.chain(swaps).chain(wrappers)
}
