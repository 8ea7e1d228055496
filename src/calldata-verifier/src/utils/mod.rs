//! Shared utilities for the verifier.
//!
//! Kept small and allocation-free; everything here operates on borrowed calldata.

pub mod bytes;
