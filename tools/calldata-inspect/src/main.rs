mod expectations;
mod render;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use calldata_verifier::{CalldataVerifier, VerifierConfig, MAX_SWAP_STEPS_DEFAULT};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::expectations::Expectations;

/// Decode bridge or swap calldata and check it against expectations, without executing it.
///
/// Results are printed as JSON on stdout; logs go to stderr (filter with `RUST_LOG`).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Hex calldata (with or without `0x`).
    #[arg(long, env = "CALLDATA", conflicts_with = "calldata_file")]
    calldata: Option<String>,

    /// File containing hex calldata.
    #[arg(long, conflicts_with = "calldata")]
    calldata_file: Option<PathBuf>,

    /// Reject swap arrays declaring more steps than this.
    #[arg(long, env = "MAX_SWAP_STEPS", default_value_t = MAX_SWAP_STEPS_DEFAULT)]
    max_swap_steps: usize,

    /// Also write the result, timestamped, to this JSON file.
    #[arg(long)]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode `BridgeData`.
    BridgeData,
    /// Decode the source swap steps.
    SwapData,
    /// Decode `BridgeData` and, when flagged, its swap steps.
    Data,
    /// Resolve the main parameters (asset, amount, receiver, chain, flags).
    MainParams,
    /// Extract the 32-byte receiver of a non-EVM bridge call.
    NonEvmReceiver,
    /// Summarise a generic swap call.
    GenericSwap,
    /// Decode the destination call, if the facet carries one.
    DestinationCall,
    /// Validate the main parameters. Omitted expectations are wildcards.
    Validate {
        /// JSON file with expected values (camelCase keys).
        #[arg(long, conflicts_with_all = ["bridge", "sending_asset_id", "receiver", "amount", "destination_chain_id"])]
        expectations: Option<PathBuf>,
        #[arg(long)]
        bridge: Option<String>,
        #[arg(long)]
        sending_asset_id: Option<String>,
        #[arg(long)]
        receiver: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        destination_chain_id: Option<String>,
        #[arg(long)]
        has_source_swaps: bool,
        #[arg(long)]
        has_destination_call: bool,
    },
    /// Validate the destination call against a recipient and message.
    ValidateDestination {
        /// Hex recipient, at least 20 bytes.
        #[arg(long)]
        recipient: String,
        /// Hex message; empty by default.
        #[arg(long, default_value = "")]
        message: String,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let calldata = load_calldata(&cli)?;
    let verifier = CalldataVerifier::new(VerifierConfig {
        max_swap_steps: cli.max_swap_steps,
    });
    info!(len = calldata.len(), command = ?cli.command, "inspecting calldata");

    let result = run(&verifier, &cli.command, &calldata)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("failed serialising result")?
    );

    if let Some(path) = &cli.report {
        write_report(path, &cli.command, &calldata, result)?;
        info!(path = %path.display(), "wrote report");
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let stderr = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .init();
}

fn load_calldata(cli: &Cli) -> Result<Vec<u8>> {
    let raw = match (&cli.calldata, &cli.calldata_file) {
        (Some(hex), _) => hex.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()))?,
        (None, None) => {
            return Err(anyhow!(
                "missing calldata: provide --calldata or --calldata-file (or set CALLDATA)"
            ))
        }
    };
    decode_hex(&raw).context("calldata is not valid hex")
}

fn decode_hex(raw: &str) -> Result<Vec<u8>> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

fn run(verifier: &CalldataVerifier, command: &Command, data: &[u8]) -> Result<Value> {
    let value = match command {
        Command::BridgeData => render::bridge_data(&verifier.extract_bridge_data(data)?),
        Command::SwapData => render::swap_steps(&verifier.extract_swap_data(data)?),
        Command::Data => {
            let (bridge_data, swap_data) = verifier.extract_data(data)?;
            json!({
                "bridgeData": render::bridge_data(&bridge_data),
                "swapData": render::swap_steps(&swap_data),
            })
        }
        Command::MainParams => render::main_parameters(&verifier.extract_main_parameters(data)?),
        Command::NonEvmReceiver => {
            let receiver = verifier.extract_non_evm_address(data)?;
            json!({ "nonEVMReceiver": format!("0x{}", hex::encode(receiver)) })
        }
        Command::GenericSwap => {
            render::generic_swap(&verifier.extract_generic_swap_parameters(data)?)
        }
        Command::DestinationCall => {
            render::destination_call(verifier.extract_destination_call(data)?.as_ref())
        }
        Command::Validate {
            expectations,
            bridge,
            sending_asset_id,
            receiver,
            amount,
            destination_chain_id,
            has_source_swaps,
            has_destination_call,
        } => {
            let expected = match expectations {
                Some(path) => Expectations::load(path)?,
                None => Expectations {
                    bridge: bridge.clone(),
                    sending_asset_id: sending_asset_id.clone(),
                    receiver: receiver.clone(),
                    amount: amount.clone(),
                    destination_chain_id: destination_chain_id.clone(),
                    has_source_swaps: *has_source_swaps,
                    has_destination_call: *has_destination_call,
                },
            }
            .resolve()?;
            json!({ "valid": verifier.validate_calldata(data, &expected)? })
        }
        Command::ValidateDestination { recipient, message } => {
            let recipient = decode_hex(recipient).context("recipient is not valid hex")?;
            let message = decode_hex(message).context("message is not valid hex")?;
            json!({ "valid": verifier.validate_destination_calldata(data, &recipient, &message)? })
        }
    };
    Ok(value)
}

/// Write the result with its provenance. Goes through a `.partial` sibling so a reader never
/// sees a half-written report.
fn write_report(path: &Path, command: &Command, calldata: &[u8], result: Value) -> Result<()> {
    let generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("failed formatting report timestamp")?;
    let report = json!({
        "generatedAt": generated_at,
        "command": format!("{command:?}"),
        "selector": calldata.get(..4).map(hex::encode),
        "calldataLength": calldata.len(),
        "result": result,
    });

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed creating report directory {}", dir.display()))?;
    }
    let partial = partial_path(path);
    let body = serde_json::to_vec_pretty(&report).context("failed serialising report")?;
    fs::write(&partial, body).with_context(|| format!("failed writing {}", partial.display()))?;
    fs::rename(&partial, path)
        .with_context(|| format!("failed moving report into {}", path.display()))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".partial");
    PathBuf::from(name)
}
