//! Bounds-checked access to an ABI-encoded buffer.
//!
//! Every read of calldata goes through [`slice`]; nothing else in the crate indexes the input.

use alloy_primitives::{Address, FixedBytes, U256};
use calldata_verifier_types::Selector;

use crate::errors::DecodeError;

/// Size of one ABI head/tail word.
pub const WORD: usize = 32;

/// Return `data[start..start + len]`, or `OutOfBounds` if the range leaves the buffer.
pub fn slice(data: &[u8], start: usize, len: usize) -> Result<&[u8], DecodeError> {
    let out_of_bounds = DecodeError::OutOfBounds {
        start,
        len,
        available: data.len(),
    };
    let end = start.checked_add(len).ok_or(out_of_bounds.clone())?;
    data.get(start..end).ok_or(out_of_bounds)
}

pub fn read_word(data: &[u8], offset: usize) -> Result<&[u8; WORD], DecodeError> {
    let word = slice(data, offset, WORD)?;
    // `slice` returned exactly WORD bytes.
    word.try_into().map_err(|_| DecodeError::OutOfBounds {
        start: offset,
        len: WORD,
        available: data.len(),
    })
}

pub fn read_u256(data: &[u8], offset: usize) -> Result<U256, DecodeError> {
    Ok(U256::from_be_slice(read_word(data, offset)?))
}

pub fn read_b32(data: &[u8], offset: usize) -> Result<FixedBytes<32>, DecodeError> {
    Ok(FixedBytes(*read_word(data, offset)?))
}

/// An `address` word: 12 zero bytes followed by the 20-byte address.
pub fn read_address(data: &[u8], offset: usize) -> Result<Address, DecodeError> {
    let word = read_word(data, offset)?;
    if word[..12].iter().any(|b| *b != 0) {
        return Err(DecodeError::MalformedWord {
            offset,
            expected: "address",
        });
    }
    Ok(Address::from_slice(&word[12..]))
}

/// A `bool` word: exactly 0 or 1.
pub fn read_bool(data: &[u8], offset: usize) -> Result<bool, DecodeError> {
    let word = read_word(data, offset)?;
    if word[..WORD - 1].iter().any(|b| *b != 0) || word[WORD - 1] > 1 {
        return Err(DecodeError::MalformedWord {
            offset,
            expected: "bool",
        });
    }
    Ok(word[WORD - 1] == 1)
}

/// An offset or length word. Values that cannot address memory are out of bounds by definition.
pub fn read_offset(data: &[u8], offset: usize) -> Result<usize, DecodeError> {
    let word = read_word(data, offset)?;
    let too_large = DecodeError::OutOfBounds {
        start: usize::MAX,
        len: 0,
        available: data.len(),
    };
    if word[..WORD - 8].iter().any(|b| *b != 0) {
        return Err(too_large);
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[WORD - 8..]);
    usize::try_from(u64::from_be_bytes(buf)).map_err(|_| too_large)
}

/// Leading 4-byte entry-point identifier.
pub fn read_selector(data: &[u8]) -> Result<Selector, DecodeError> {
    let mut sel = [0u8; 4];
    let head = slice(data, 0, 4).map_err(|_| DecodeError::InsufficientCalldata {
        required: 4,
        actual: data.len(),
    })?;
    sel.copy_from_slice(head);
    Ok(sel)
}
