use alloy_primitives::U256;
use calldata_encoder::{encode_bridge_call, fixtures, wrap_standardized};
use calldata_verifier::{
    extract_bridge_data, extract_data, extract_destination_call, extract_main_parameters,
    extract_non_evm_address, extract_swap_data, validate_calldata, CalldataVerifier, DecodeError,
    ExpectedMainParameters, VerifierConfig, NON_EVM_ADDRESS,
};
use calldata_verifier_types::{BridgeFacet, StandardizedWrapper};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn word_at(data: &[u8], offset: usize) -> usize {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset + 24..offset + 32]);
    u64::from_be_bytes(buf) as usize
}

#[rstest]
fn bridge_data_and_swaps_decode_for_every_facet(
    #[values(
        BridgeFacet::Amarok,
        BridgeFacet::Stargate,
        BridgeFacet::StargateV2,
        BridgeFacet::CelerIm,
        BridgeFacet::AcrossV3,
        BridgeFacet::Mayan,
        BridgeFacet::Chainflip
    )]
    facet: BridgeFacet,
    #[values(0, 1, 3)] swaps: usize,
) {
    let call = fixtures::bridge_call(facet, swaps);
    let data = encode_bridge_call(&call);

    assert_eq!(extract_bridge_data(&data).unwrap(), call.bridge_data);
    assert_eq!(extract_swap_data(&data).unwrap(), call.swap_data);

    let (bridge_data, swap_data) = extract_data(&data).unwrap();
    assert_eq!(bridge_data, call.bridge_data);
    assert_eq!(swap_data, call.swap_data);
}

#[rstest]
fn standardized_wrappers_are_transparent(
    #[values(
        BridgeFacet::Amarok,
        BridgeFacet::Stargate,
        BridgeFacet::StargateV2,
        BridgeFacet::CelerIm,
        BridgeFacet::AcrossV3,
        BridgeFacet::Mayan,
        BridgeFacet::Chainflip
    )]
    facet: BridgeFacet,
    #[values(
        StandardizedWrapper::Call,
        StandardizedWrapper::SwapCall,
        StandardizedWrapper::BridgeCall,
        StandardizedWrapper::SwapAndBridgeCall
    )]
    wrapper: StandardizedWrapper,
) {
    let call = fixtures::bridge_call(facet, 2);
    let plain = encode_bridge_call(&call);
    let wrapped = wrap_standardized(wrapper, &plain);

    assert_eq!(extract_bridge_data(&wrapped).unwrap(), call.bridge_data);
    assert_eq!(
        extract_main_parameters(&wrapped).unwrap(),
        extract_main_parameters(&plain).unwrap()
    );
    assert_eq!(extract_swap_data(&wrapped).unwrap(), call.swap_data);
}

#[test_log::test]
fn nested_standardized_call_is_rejected() {
    let plain = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    let once = wrap_standardized(StandardizedWrapper::BridgeCall, &plain);
    let twice = wrap_standardized(StandardizedWrapper::Call, &once);
    assert!(matches!(
        extract_bridge_data(&twice),
        Err(DecodeError::MalformedField {
            field: "callData",
            ..
        })
    ));
}

#[test_log::test]
fn trailing_bytes_are_ignored() {
    let call = fixtures::bridge_call(BridgeFacet::AcrossV3, 1);
    let mut data = encode_bridge_call(&call);
    let expected = extract_main_parameters(&data).unwrap();
    let destination = extract_destination_call(&data).unwrap();
    data.extend_from_slice(&[0xee; 37]);
    assert_eq!(extract_main_parameters(&data).unwrap(), expected);
    assert_eq!(extract_bridge_data(&data).unwrap(), call.bridge_data);
    assert_eq!(extract_swap_data(&data).unwrap(), call.swap_data);
    assert_eq!(extract_destination_call(&data).unwrap(), destination);

    let mut non_evm = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Chainflip, 1));
    non_evm.extend_from_slice(&[0u8; 64]);
    assert_eq!(
        extract_non_evm_address(&non_evm).unwrap(),
        fixtures::non_evm_receiver()
    );
}

#[test_log::test]
fn main_parameters_without_swaps_come_from_bridge_data() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    let params = extract_main_parameters(&data).unwrap();
    assert_eq!(params.bridge, "amarok");
    assert_eq!(params.sending_asset_id, fixtures::USDC);
    assert_eq!(params.amount, U256::from(1_000_000u64));
    assert_eq!(params.receiver, fixtures::RECEIVER);
    assert_eq!(
        params.destination_chain_id,
        U256::from(fixtures::DESTINATION_CHAIN_ID)
    );
    assert!(!params.has_source_swaps);
    assert!(params.has_destination_call);
}

#[test_log::test]
fn main_parameters_with_swaps_come_from_first_step() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::CelerIm, 3));
    let params = extract_main_parameters(&data).unwrap();
    assert_eq!(params.sending_asset_id, fixtures::WETH);
    assert_eq!(params.amount, U256::from(2_000u64));
    assert!(params.has_source_swaps);
}

#[test_log::test]
fn swap_flag_without_steps_is_malformed() {
    let mut call = fixtures::bridge_call(BridgeFacet::Stargate, 0);
    call.bridge_data.hasSourceSwaps = true;
    call.with_swaps = true;
    let data = encode_bridge_call(&call);

    assert!(extract_swap_data(&data).unwrap().is_empty());
    assert!(matches!(
        extract_main_parameters(&data),
        Err(DecodeError::MalformedField {
            field: "swapData",
            ..
        })
    ));
}

#[rstest]
#[case::mayan_plain(BridgeFacet::Mayan, 0)]
#[case::mayan_with_swap(BridgeFacet::Mayan, 1)]
#[case::chainflip_plain(BridgeFacet::Chainflip, 0)]
#[case::chainflip_with_swaps(BridgeFacet::Chainflip, 2)]
fn non_evm_receiver_follows_swap_flag(#[case] facet: BridgeFacet, #[case] swaps: usize) {
    let data = encode_bridge_call(&fixtures::bridge_call(facet, swaps));
    assert_eq!(
        extract_non_evm_address(&data).unwrap(),
        fixtures::non_evm_receiver()
    );
    assert_eq!(extract_bridge_data(&data).unwrap().receiver, NON_EVM_ADDRESS);
}

#[test_log::test]
fn non_evm_flag_disagreeing_with_entry_point_is_malformed() {
    let mut call = fixtures::bridge_call(BridgeFacet::Mayan, 0);
    call.bridge_data.hasSourceSwaps = true;
    let data = encode_bridge_call(&call);
    assert_eq!(
        extract_non_evm_address(&data),
        Err(DecodeError::MalformedField {
            field: "hasSourceSwaps",
            reason: "flag disagrees with the entry point",
        })
    );
}

#[test_log::test]
fn non_evm_receiver_requires_a_non_evm_facet() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    assert!(matches!(
        extract_non_evm_address(&data),
        Err(DecodeError::WrongEntryPoint { .. })
    ));
}

#[test_log::test]
fn validate_calldata_honours_wildcards_and_flags() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::StargateV2, 1));
    let params = extract_main_parameters(&data).unwrap();

    assert!(validate_calldata(&data, &ExpectedMainParameters::from(&params)).unwrap());
    assert!(validate_calldata(&data, &ExpectedMainParameters::any(true, true)).unwrap());
    assert!(!validate_calldata(&data, &ExpectedMainParameters::any(false, true)).unwrap());

    let mut expected = ExpectedMainParameters::any(true, true);
    expected.bridge = "stargateV2".into();
    expected.amount = U256::from(2_000u64);
    assert!(validate_calldata(&data, &expected).unwrap());

    // BridgeData.minAmount is not the bridged amount once swaps are involved
    expected.amount = U256::from(1_000_000u64);
    assert!(!validate_calldata(&data, &expected).unwrap());
}

#[test_log::test]
fn unknown_selector_is_an_error() {
    let mut data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    data[..4].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(
        extract_bridge_data(&data),
        Err(DecodeError::UnknownSelector([0xde, 0xad, 0xbe, 0xef]))
    );
    assert_eq!(
        validate_calldata(&data, &ExpectedMainParameters::any(false, true)),
        Err(DecodeError::UnknownSelector([0xde, 0xad, 0xbe, 0xef]))
    );
}

#[test_log::test]
fn short_input_is_insufficient_calldata() {
    assert_eq!(
        extract_bridge_data(&[0x01, 0x02]),
        Err(DecodeError::InsufficientCalldata {
            required: 4,
            actual: 2
        })
    );
}

#[test_log::test]
fn truncated_bridge_data_never_decodes() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    // every prefix that stops before the end of the BridgeData head
    let bridge_data_start = 4 + word_at(&data, 4);
    for len in 0..bridge_data_start + 10 * 32 {
        assert!(extract_bridge_data(&data[..len]).is_err(), "prefix of {len} bytes");
    }
}

#[test_log::test]
fn dirty_address_word_is_malformed() {
    let mut data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    let receiver_word = 4 + word_at(&data, 4) + 5 * 32;
    data[receiver_word] = 0x01;
    assert_eq!(
        extract_bridge_data(&data),
        Err(DecodeError::MalformedWord {
            offset: receiver_word - 4,
            expected: "address"
        })
    );
}

#[test_log::test]
fn non_boolean_flag_is_malformed() {
    let mut data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Stargate, 0));
    let flag_word = 4 + word_at(&data, 4) + 8 * 32;
    data[flag_word + 31] = 2;
    assert_eq!(
        extract_bridge_data(&data),
        Err(DecodeError::MalformedWord {
            offset: flag_word - 4,
            expected: "bool"
        })
    );
}

#[test_log::test]
fn swap_limit_is_enforced_before_decoding() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 3));
    let strict = CalldataVerifier::new(VerifierConfig { max_swap_steps: 2 });
    assert_eq!(
        strict.extract_swap_data(&data),
        Err(DecodeError::TooManySwapSteps { count: 3, limit: 2 })
    );
    assert!(strict.extract_bridge_data(&data).is_ok());

    // a forged element count is rejected without touching the (missing) elements
    let mut forged = data.clone();
    let count_word = 4 + word_at(&forged, 4 + 32);
    forged[count_word + 24..count_word + 32].copy_from_slice(&(1u64 << 40).to_be_bytes());
    assert_eq!(
        extract_swap_data(&forged),
        Err(DecodeError::TooManySwapSteps {
            count: 1 << 40,
            limit: 64
        })
    );
}

#[rstest]
#[case::table_past_buffer(1 << 40)]
#[case::table_size_overflows(1 << 60)]
fn forged_count_under_lenient_limit_is_out_of_bounds(#[case] count: u64) {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 1));
    let count_word = 4 + word_at(&data, 4 + 32);
    let mut forged = data.clone();
    forged[count_word + 24..count_word + 32].copy_from_slice(&count.to_be_bytes());

    let lenient = CalldataVerifier::new(VerifierConfig {
        max_swap_steps: usize::MAX,
    });
    assert!(matches!(
        lenient.extract_swap_data(&forged),
        Err(DecodeError::OutOfBounds { .. })
    ));
    assert!(matches!(
        lenient.extract_main_parameters(&forged),
        Err(DecodeError::OutOfBounds { .. })
    ));
}
