use alloy_primitives::{Address, Bytes};
use calldata_encoder::{encode_bridge_call, encode_generic_swap, fixtures, wrap_standardized};
use calldata_verifier::{
    extract_destination_call, validate_destination_calldata, DecodeError, RecipientKind,
};
use calldata_verifier_types::{BridgeFacet, GenericSwapFunction, StandardizedWrapper};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn recipient() -> Vec<u8> {
    fixtures::DESTINATION_RECIPIENT.to_vec()
}

fn message() -> Vec<u8> {
    fixtures::destination_message().to_vec()
}

#[rstest]
#[case::amarok(BridgeFacet::Amarok, RecipientKind::Address)]
#[case::stargate(BridgeFacet::Stargate, RecipientKind::Bytes)]
#[case::stargate_v2(BridgeFacet::StargateV2, RecipientKind::Bytes32)]
#[case::celer_im(BridgeFacet::CelerIm, RecipientKind::Bytes)]
#[case::across_v3(BridgeFacet::AcrossV3, RecipientKind::Address)]
fn destination_call_is_extracted(
    #[case] facet: BridgeFacet,
    #[case] kind: RecipientKind,
    #[values(0, 2)] swaps: usize,
) {
    let data = encode_bridge_call(&fixtures::bridge_call(facet, swaps));
    let call = extract_destination_call(&data).unwrap().unwrap();
    assert_eq!(call.recipient_kind, kind);
    assert_eq!(call.message, fixtures::destination_message());

    assert!(validate_destination_calldata(&data, &recipient(), &message()).unwrap());
}

#[rstest]
#[case::amarok(BridgeFacet::Amarok)]
#[case::stargate_v2(BridgeFacet::StargateV2)]
#[case::across_v3(BridgeFacet::AcrossV3)]
fn address_like_recipients_accept_padded_words(#[case] facet: BridgeFacet) {
    let data = encode_bridge_call(&fixtures::bridge_call(facet, 0));
    let padded = fixtures::DESTINATION_RECIPIENT.into_word();
    assert!(validate_destination_calldata(&data, padded.as_slice(), &message()).unwrap());
}

#[test_log::test]
fn raw_bytes_recipient_is_not_padded() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Stargate, 0));
    let padded = fixtures::DESTINATION_RECIPIENT.into_word();
    assert!(!validate_destination_calldata(&data, padded.as_slice(), &message()).unwrap());
}

#[rstest]
fn any_single_byte_change_in_message_fails(
    #[values(BridgeFacet::Amarok, BridgeFacet::Stargate, BridgeFacet::CelerIm)] facet: BridgeFacet,
) {
    let data = encode_bridge_call(&fixtures::bridge_call(facet, 1));
    let original = message();
    for i in 0..original.len() {
        let mut tampered = original.clone();
        tampered[i] ^= 0x01;
        assert!(
            !validate_destination_calldata(&data, &recipient(), &tampered).unwrap(),
            "byte {i}"
        );
    }
    let mut longer = original.clone();
    longer.push(0);
    assert!(!validate_destination_calldata(&data, &recipient(), &longer).unwrap());
    assert!(!validate_destination_calldata(&data, &recipient(), &original[1..]).unwrap());
}

#[test_log::test]
fn different_recipient_fails() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::AcrossV3, 0));
    let other = Address::repeat_byte(0x77);
    assert!(!validate_destination_calldata(&data, other.as_slice(), &message()).unwrap());
}

#[test_log::test]
fn short_expected_recipient_is_an_error() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    let short = &recipient()[..19];
    assert!(matches!(
        validate_destination_calldata(&data, short, &message()),
        Err(DecodeError::MalformedField {
            field: "recipient",
            ..
        })
    ));
    // checked before the calldata is even looked at
    assert!(matches!(
        validate_destination_calldata(&[], short, &message()),
        Err(DecodeError::MalformedField { .. })
    ));
}

#[rstest]
#[case::mayan(BridgeFacet::Mayan)]
#[case::chainflip(BridgeFacet::Chainflip)]
fn facets_without_destination_call_never_validate(#[case] facet: BridgeFacet) {
    let data = encode_bridge_call(&fixtures::bridge_call(facet, 0));
    assert_eq!(extract_destination_call(&data).unwrap(), None);
    assert!(!validate_destination_calldata(&data, &recipient(), &message()).unwrap());
}

#[test_log::test]
fn generic_swap_has_no_destination_call() {
    let call = fixtures::generic_swap_call(GenericSwapFunction::MultipleErc20ToErc20, 2);
    let data = encode_generic_swap(&call).unwrap();
    assert!(!validate_destination_calldata(&data, &recipient(), &message()).unwrap());
    assert!(matches!(
        extract_destination_call(&data),
        Err(DecodeError::WrongEntryPoint { .. })
    ));
}

#[test_log::test]
fn wrapped_destination_call_validates() {
    let inner = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::StargateV2, 1));
    let data = wrap_standardized(StandardizedWrapper::SwapAndBridgeCall, &inner);
    assert!(validate_destination_calldata(&data, &recipient(), &message()).unwrap());
}

#[test_log::test]
fn empty_message_is_compared_exactly() {
    let mut call = fixtures::bridge_call(BridgeFacet::CelerIm, 0);
    if let calldata_encoder::BridgeExtra::CelerIm(data) = &mut call.extra {
        data.callData = Bytes::new();
    }
    let data = encode_bridge_call(&call);
    assert!(validate_destination_calldata(&data, &recipient(), &[]).unwrap());
    assert!(!validate_destination_calldata(&data, &recipient(), &[0]).unwrap());
}

#[test_log::test]
fn truncated_destination_record_is_an_error() {
    let data = encode_bridge_call(&fixtures::bridge_call(BridgeFacet::Amarok, 0));
    // the message is the last member encoded; cutting into it must never decode
    for len in 0..data.len() - 32 {
        assert!(
            validate_destination_calldata(&data[..len], &recipient(), &message()).is_err(),
            "prefix of {len} bytes"
        );
    }
}
