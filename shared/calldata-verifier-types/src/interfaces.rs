//! Solidity ABI declarations for the records and entry points the verifier understands.
//!
//! Everything lives in a single `sol!` invocation so function selectors can be computed from the
//! full tuple signatures at compile time.

use alloy_sol_types::sol;

sol! {
    /// Bridge-agnostic intent shared by every bridge entry point.
    #[derive(Debug, PartialEq, Eq)]
    struct BridgeData {
        bytes32 transactionId;
        string bridge;
        string integrator;
        address referrer;
        address sendingAssetId;
        address receiver;
        uint256 minAmount;
        uint256 destinationChainId;
        bool hasSourceSwaps;
        bool hasDestinationCall;
    }

    /// One leg of a source-side swap, forwarded to a DEX.
    #[derive(Debug, PartialEq, Eq)]
    struct SwapData {
        address callTo;
        address approveTo;
        address sendingAssetId;
        address receivingAssetId;
        uint256 fromAmount;
        bytes callData;
        bool requiresDeposit;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct AmarokData {
        bytes callData;
        address callTo;
        uint256 relayerFee;
        uint256 slippageTol;
        address delegate;
        uint32 destChainDomainId;
        bool payFeeWithSendingAsset;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct StargateData {
        uint256 srcPoolId;
        uint256 dstPoolId;
        uint256 minAmountLD;
        uint256 dstGasForCall;
        uint256 lzFee;
        address refundAddress;
        bytes callTo;
        bytes callData;
    }

    /// LayerZero OFT send parameters (Stargate v2).
    #[derive(Debug, PartialEq, Eq)]
    struct SendParam {
        uint32 dstEid;
        bytes32 to;
        uint256 amountLD;
        uint256 minAmountLD;
        bytes extraOptions;
        bytes composeMsg;
        bytes oftCmd;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MessagingFee {
        uint256 nativeFee;
        uint256 lzTokenFee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct StargateV2Data {
        uint16 assetId;
        SendParam sendParams;
        MessagingFee fee;
        address refundAddress;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct CelerIMData {
        uint32 maxSlippage;
        uint64 nonce;
        bytes callTo;
        bytes callData;
        uint256 messageBusFee;
        uint8 bridgeType;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct AcrossV3Data {
        address receiverAddress;
        address refundAddress;
        address receivingAssetId;
        uint256 outputAmount;
        uint64 outputAmountPercent;
        address exclusiveRelayer;
        uint32 quoteTimestamp;
        uint32 fillDeadline;
        uint32 exclusivityDeadline;
        bytes message;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MayanData {
        bytes32 nonEVMReceiver;
        address mayanProtocol;
        bytes protocolData;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ChainflipData {
        bytes32 nonEVMReceiver;
        uint32 dstToken;
        address dstCallReceiver;
        SwapData[] dstCallSwapData;
        uint256 gasAmount;
        bytes cfParameters;
    }

    interface IAmarokFacet {
        function startBridgeTokensViaAmarok(BridgeData _bridgeData, AmarokData _amarokData) external payable;
        function swapAndStartBridgeTokensViaAmarok(BridgeData _bridgeData, SwapData[] _swapData, AmarokData _amarokData) external payable;
    }

    interface IStargateFacet {
        function startBridgeTokensViaStargate(BridgeData _bridgeData, StargateData _stargateData) external payable;
        function swapAndStartBridgeTokensViaStargate(BridgeData _bridgeData, SwapData[] _swapData, StargateData _stargateData) external payable;
    }

    interface IStargateFacetV2 {
        function startBridgeTokensViaStargate(BridgeData _bridgeData, StargateV2Data _stargateData) external payable;
        function swapAndStartBridgeTokensViaStargate(BridgeData _bridgeData, SwapData[] _swapData, StargateV2Data _stargateData) external payable;
    }

    interface ICelerIMFacet {
        function startBridgeTokensViaCelerIM(BridgeData _bridgeData, CelerIMData _celerIMData) external payable;
        function swapAndStartBridgeTokensViaCelerIM(BridgeData _bridgeData, SwapData[] _swapData, CelerIMData _celerIMData) external payable;
    }

    interface IAcrossFacetV3 {
        function startBridgeTokensViaAcrossV3(BridgeData _bridgeData, AcrossV3Data _acrossData) external payable;
        function swapAndStartBridgeTokensViaAcrossV3(BridgeData _bridgeData, SwapData[] _swapData, AcrossV3Data _acrossData) external payable;
    }

    interface IMayanFacet {
        function startBridgeTokensViaMayan(BridgeData _bridgeData, MayanData _mayanData) external payable;
        function swapAndStartBridgeTokensViaMayan(BridgeData _bridgeData, SwapData[] _swapData, MayanData _mayanData) external payable;
    }

    interface IChainflipFacet {
        function startBridgeTokensViaChainflip(BridgeData _bridgeData, ChainflipData _chainflipData) external payable;
        function swapAndStartBridgeTokensViaChainflip(BridgeData _bridgeData, SwapData[] _swapData, ChainflipData _chainflipData) external payable;
    }

    interface IGenericSwapFacetV3 {
        function swapTokensSingleV3ERC20ToERC20(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmountOut, SwapData _swapData) external;
        function swapTokensSingleV3ERC20ToNative(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmountOut, SwapData _swapData) external;
        function swapTokensSingleV3NativeToERC20(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmountOut, SwapData _swapData) external payable;
        function swapTokensMultipleV3ERC20ToERC20(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmountOut, SwapData[] _swapData) external;
        function swapTokensMultipleV3ERC20ToNative(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmountOut, SwapData[] _swapData) external;
        function swapTokensMultipleV3NativeToERC20(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmountOut, SwapData[] _swapData) external payable;
    }

    interface IGenericSwapFacet {
        function swapTokensGeneric(bytes32 _transactionId, string _integrator, string _referrer, address _receiver, uint256 _minAmount, SwapData[] _swapData) external payable;
    }

    interface IStandardizedCallFacet {
        function standardizedCall(bytes callData) external payable;
        function standardizedSwapCall(bytes callData) external payable;
        function standardizedBridgeCall(bytes callData) external payable;
        function standardizedSwapAndBridgeCall(bytes callData) external payable;
    }
}
