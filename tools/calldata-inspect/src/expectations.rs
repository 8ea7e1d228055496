use std::{fs, path::Path};

use alloy_primitives::{Address, U256};
use anyhow::{anyhow, Context, Result};
use calldata_verifier::{ExpectedMainParameters, ANY_ADDRESS, ANY_U256};
use serde::Deserialize;

/// Expected main parameters as written by hand. Omitted fields are wildcards; the two flags
/// default to `false`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Expectations {
    #[serde(default)]
    pub bridge: Option<String>,
    #[serde(default)]
    pub sending_asset_id: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    /// Decimal or `0x`-prefixed hex.
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub destination_chain_id: Option<String>,
    #[serde(default)]
    pub has_source_swaps: bool,
    #[serde(default)]
    pub has_destination_call: bool,
}

impl Expectations {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed parsing JSON in {}", path.display()))
    }

    pub fn resolve(&self) -> Result<ExpectedMainParameters> {
        Ok(ExpectedMainParameters {
            bridge: self.bridge.clone().unwrap_or_default(),
            sending_asset_id: address_or_any(self.sending_asset_id.as_deref(), "sendingAssetId")?,
            receiver: address_or_any(self.receiver.as_deref(), "receiver")?,
            amount: u256_or_any(self.amount.as_deref(), "amount")?,
            destination_chain_id: u256_or_any(
                self.destination_chain_id.as_deref(),
                "destinationChainId",
            )?,
            has_source_swaps: self.has_source_swaps,
            has_destination_call: self.has_destination_call,
        })
    }
}

fn address_or_any(raw: Option<&str>, field: &str) -> Result<Address> {
    match raw {
        None => Ok(ANY_ADDRESS),
        Some(s) => s
            .parse::<Address>()
            .map_err(|e| anyhow!("invalid address for {field} ({s}): {e}")),
    }
}

fn u256_or_any(raw: Option<&str>, field: &str) -> Result<U256> {
    match raw {
        None => Ok(ANY_U256),
        Some(s) => s
            .parse::<U256>()
            .map_err(|e| anyhow!("invalid uint256 for {field} ({s}): {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_become_wildcards() {
        let parsed: Expectations =
            serde_json::from_str(r#"{ "bridge": "mayan", "hasDestinationCall": true }"#).unwrap();
        let expected = parsed.resolve().unwrap();
        assert_eq!(expected.bridge, "mayan");
        assert_eq!(expected.receiver, ANY_ADDRESS);
        assert_eq!(expected.amount, ANY_U256);
        assert!(!expected.has_source_swaps);
        assert!(expected.has_destination_call);
    }

    #[test]
    fn amounts_accept_decimal_and_hex() {
        let parsed: Expectations =
            serde_json::from_str(r#"{ "amount": "1000", "destinationChainId": "0x89" }"#).unwrap();
        let expected = parsed.resolve().unwrap();
        assert_eq!(expected.amount, U256::from(1000u64));
        assert_eq!(expected.destination_chain_id, U256::from(137u64));
    }

    #[test]
    fn bad_address_is_reported() {
        let parsed = Expectations {
            receiver: Some("0x1234".into()),
            ..Default::default()
        };
        assert!(parsed.resolve().is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<Expectations>(r#"{ "minAmount": "1" }"#).is_err());
    }
}
