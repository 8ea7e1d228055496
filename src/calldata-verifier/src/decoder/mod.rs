//! Structural decoders: calldata in, records out. No business rules live here.

pub mod bridge;
pub mod frame;
pub mod generic_swap;
pub mod records;

use calldata_verifier_types::{GenericSwapFunction, Selector, StandardizedWrapper};
use tracing::debug;

use crate::{
    errors::DecodeError,
    registry::{BridgeEntry, EntryPoint},
    utils::bytes::{read_selector, slice},
};

pub use frame::{ArrayFrame, Frame};

/// A call resolved against the registry, with at most one standardized wrapper removed.
///
/// Borrows the input buffer; the unwrapped inner call is a sub-slice, never a copy.
#[derive(Clone, Copy, Debug)]
pub struct Calldata<'a> {
    selector: Selector,
    entry: EntryPoint,
    wrapper: Option<StandardizedWrapper>,
    call_len: usize,
    args: Frame<'a>,
}

impl<'a> Calldata<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, DecodeError> {
        let outer = Self::resolve(data)?;
        let EntryPoint::Standardized(wrapper) = outer.entry else {
            return Ok(outer);
        };

        let inner = outer.args.bytes(0)?;
        let mut call = Self::resolve(inner)?;
        if let EntryPoint::Standardized(_) = call.entry {
            return Err(DecodeError::MalformedField {
                field: "callData",
                reason: "nested standardized call",
            });
        }
        debug!(
            wrapper = ?wrapper,
            inner = %hex::encode(call.selector),
            "unwrapped standardized call"
        );
        call.wrapper = Some(wrapper);
        Ok(call)
    }

    fn resolve(call: &'a [u8]) -> Result<Self, DecodeError> {
        let selector = read_selector(call)?;
        let entry = EntryPoint::from_selector(selector)?;
        debug!(selector = %hex::encode(selector), entry = ?entry, "resolved entry point");
        let args = slice(call, 4, call.len().saturating_sub(4))?;
        Ok(Self {
            selector,
            entry,
            wrapper: None,
            call_len: call.len(),
            args: Frame::new(args),
        })
    }

    /// Selector of the (unwrapped) call.
    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn entry_point(&self) -> EntryPoint {
        self.entry
    }

    /// The standardized wrapper that was removed, if any.
    pub fn wrapper(&self) -> Option<StandardizedWrapper> {
        self.wrapper
    }

    /// Length of the (unwrapped) call including its selector.
    pub fn call_len(&self) -> usize {
        self.call_len
    }

    /// Argument tuple, starting right after the selector.
    pub fn args(&self) -> Frame<'a> {
        self.args
    }

    pub fn bridge_entry(&self) -> Result<BridgeEntry, DecodeError> {
        match self.entry {
            EntryPoint::Bridge(entry) => Ok(entry),
            _ => Err(DecodeError::WrongEntryPoint {
                selector: self.selector,
                expected: "a bridge call",
            }),
        }
    }

    pub fn generic_swap(&self) -> Result<GenericSwapFunction, DecodeError> {
        match self.entry {
            EntryPoint::GenericSwap(function) => Ok(function),
            _ => Err(DecodeError::WrongEntryPoint {
                selector: self.selector,
                expected: "a generic swap call",
            }),
        }
    }
}
