use alloy_primitives::FixedBytes;
use calldata_verifier_types::{
    BridgeData, DestinationCall, ExpectedMainParameters, GenericSwapParameters, MainParameters,
    SwapData,
};
use tracing::{debug, instrument};

use crate::{
    decoder::{bridge, generic_swap::generic_swap_parameters, Calldata},
    errors::DecodeError,
    registry::EntryPoint,
    resolver::resolve_main_parameters,
    validator::{check_expected_recipient, destination_call_matches, main_parameters_match},
};

/// Default cap on decoded swap steps per call.
pub const MAX_SWAP_STEPS_DEFAULT: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Swap arrays declaring more steps than this are rejected before any step is decoded.
    pub max_swap_steps: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_swap_steps: MAX_SWAP_STEPS_DEFAULT,
        }
    }
}

/// Stateless entry points over raw calldata.
///
/// Every operation is a pure function of its input and the config; the verifier can be shared
/// freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalldataVerifier {
    config: VerifierConfig,
}

impl CalldataVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> VerifierConfig {
        self.config
    }

    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_bridge_data(&self, data: &[u8]) -> Result<BridgeData, DecodeError> {
        bridge::bridge_data(&Calldata::parse(data)?)
    }

    /// Source swap steps of a bridge call; empty for `startBridgeTokensVia*`.
    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_swap_data(&self, data: &[u8]) -> Result<Vec<SwapData>, DecodeError> {
        bridge::swap_steps(&Calldata::parse(data)?, self.config.max_swap_steps)
    }

    /// `BridgeData` plus swap steps; steps are only decoded when `hasSourceSwaps` is set.
    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_data(&self, data: &[u8]) -> Result<(BridgeData, Vec<SwapData>), DecodeError> {
        let call = Calldata::parse(data)?;
        self.bridge_and_swaps(&call)
    }

    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_main_parameters(&self, data: &[u8]) -> Result<MainParameters, DecodeError> {
        let call = Calldata::parse(data)?;
        let (bridge_data, swap_data) = self.bridge_and_swaps(&call)?;
        resolve_main_parameters(&bridge_data, &swap_data)
    }

    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_non_evm_address(&self, data: &[u8]) -> Result<FixedBytes<32>, DecodeError> {
        let call = Calldata::parse(data)?;
        let bridge_data = bridge::bridge_data(&call)?;
        bridge::non_evm_receiver(&call, &bridge_data)
    }

    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_generic_swap_parameters(
        &self,
        data: &[u8],
    ) -> Result<GenericSwapParameters, DecodeError> {
        generic_swap_parameters(&Calldata::parse(data)?, self.config.max_swap_steps)
    }

    /// Destination call of a bridge call, `None` when the facet carries none.
    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn extract_destination_call(
        &self,
        data: &[u8],
    ) -> Result<Option<DestinationCall>, DecodeError> {
        bridge::destination_call(&Calldata::parse(data)?)
    }

    /// Decode the main parameters and match them against `expected`.
    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn validate_calldata(
        &self,
        data: &[u8],
        expected: &ExpectedMainParameters,
    ) -> Result<bool, DecodeError> {
        let params = self.extract_main_parameters(data)?;
        let ok = main_parameters_match(&params, expected);
        debug!(ok, bridge = %params.bridge, "validated main parameters");
        Ok(ok)
    }

    /// Check the destination call against an expected recipient and message.
    ///
    /// Entry points without a destination-call layout yield `Ok(false)`. Malformed calldata and
    /// expected recipients shorter than 20 bytes are errors.
    #[instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn validate_destination_calldata(
        &self,
        data: &[u8],
        expected_recipient: &[u8],
        expected_message: &[u8],
    ) -> Result<bool, DecodeError> {
        check_expected_recipient(expected_recipient)?;
        let call = Calldata::parse(data)?;
        if !matches!(call.entry_point(), EntryPoint::Bridge(_)) {
            debug!("not a bridge call, no destination call to validate");
            return Ok(false);
        }
        let Some(destination) = bridge::destination_call(&call)? else {
            debug!("facet carries no destination call");
            return Ok(false);
        };
        let ok = destination_call_matches(&destination, expected_recipient, expected_message);
        debug!(ok, kind = ?destination.recipient_kind, "validated destination call");
        Ok(ok)
    }

    fn bridge_and_swaps(
        &self,
        call: &Calldata<'_>,
    ) -> Result<(BridgeData, Vec<SwapData>), DecodeError> {
        let bridge_data = bridge::bridge_data(call)?;
        let swap_data = if bridge_data.hasSourceSwaps {
            bridge::swap_steps(call, self.config.max_swap_steps)?
        } else {
            Vec::new()
        };
        Ok((bridge_data, swap_data))
    }
}
