use calldata_verifier_types::Selector;

/// Errors during calldata decoding and validation.
///
/// Every variant is a hard failure: a truncated or malformed payload never resolves to a
/// plausible-looking record. A validation *mismatch* is not an error, it is `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown entry point selector 0x{}", hex::encode(.0))]
    UnknownSelector(Selector),

    #[error("entry point 0x{} is not {expected}", hex::encode(.selector))]
    WrongEntryPoint {
        selector: Selector,
        expected: &'static str,
    },

    #[error("read of {len} bytes at offset {start} exceeds calldata of {available} bytes")]
    OutOfBounds {
        start: usize,
        len: usize,
        available: usize,
    },

    #[error("calldata is {actual} bytes, its shape requires at least {required}")]
    InsufficientCalldata { required: usize, actual: usize },

    #[error("word at offset {offset} is not a valid {expected}")]
    MalformedWord {
        offset: usize,
        expected: &'static str,
    },

    #[error("malformed `{field}`: {reason}")]
    MalformedField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("swap data holds {count} steps, limit is {limit}")]
    TooManySwapSteps { count: usize, limit: usize },
}
