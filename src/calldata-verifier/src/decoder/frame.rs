//! Head/tail navigation over ABI-encoded tuples.
//!
//! A [`Frame`] is one tuple: `base` is where its head starts. Dynamic members are reached by
//! explicit indirection steps, each bounds-checked through the slice engine:
//!
//! - field offset: [`Frame::tail`] follows a head slot to a nested tuple;
//! - array offset: [`Frame::array`] follows a head slot to `count || elements`;
//! - element offset: [`ArrayFrame::element`] follows an element's own offset word.

use alloy_primitives::{Address, FixedBytes, U256};

use crate::{
    errors::DecodeError,
    utils::bytes::{read_address, read_b32, read_bool, read_offset, read_u256, read_word, slice, WORD},
};

#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    data: &'a [u8],
    base: usize,
}

impl<'a> Frame<'a> {
    /// Frame for a tuple whose head starts at byte 0 of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, base: 0 }
    }

    /// Offset of the tuple head inside the underlying buffer.
    pub fn base(&self) -> usize {
        self.base
    }

    fn overflow(&self, len: usize) -> DecodeError {
        DecodeError::OutOfBounds {
            start: usize::MAX,
            len,
            available: self.data.len(),
        }
    }

    /// Absolute offset of head slot `index`.
    fn slot(&self, index: usize) -> Result<usize, DecodeError> {
        index
            .checked_mul(WORD)
            .and_then(|rel| self.base.checked_add(rel))
            .ok_or_else(|| self.overflow(WORD))
    }

    fn at(&self, base: usize) -> Result<Frame<'a>, DecodeError> {
        // a tuple may be empty but must start inside the buffer
        slice(self.data, base, 0)?;
        Ok(Frame {
            data: self.data,
            base,
        })
    }

    pub fn word(&self, index: usize) -> Result<&'a [u8; WORD], DecodeError> {
        read_word(self.data, self.slot(index)?)
    }

    pub fn uint(&self, index: usize) -> Result<U256, DecodeError> {
        read_u256(self.data, self.slot(index)?)
    }

    pub fn address(&self, index: usize) -> Result<Address, DecodeError> {
        read_address(self.data, self.slot(index)?)
    }

    pub fn flag(&self, index: usize) -> Result<bool, DecodeError> {
        read_bool(self.data, self.slot(index)?)
    }

    pub fn b32(&self, index: usize) -> Result<FixedBytes<32>, DecodeError> {
        read_b32(self.data, self.slot(index)?)
    }

    /// Follow the offset word in slot `index` to the nested tuple it points at.
    pub fn tail(&self, index: usize) -> Result<Frame<'a>, DecodeError> {
        let offset = read_offset(self.data, self.slot(index)?)?;
        let base = self
            .base
            .checked_add(offset)
            .ok_or_else(|| self.overflow(0))?;
        self.at(base)
    }

    /// Length-prefixed `bytes` referenced by slot `index`. Borrowed, never copied.
    pub fn bytes(&self, index: usize) -> Result<&'a [u8], DecodeError> {
        let tail = self.tail(index)?;
        let len = read_offset(self.data, tail.base)?;
        let start = tail
            .base
            .checked_add(WORD)
            .ok_or_else(|| self.overflow(len))?;
        slice(self.data, start, len)
    }

    /// Length-prefixed UTF-8 `string` referenced by slot `index`.
    pub fn string(&self, index: usize) -> Result<String, DecodeError> {
        let raw = self.bytes(index)?;
        core::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| DecodeError::MalformedWord {
                offset: self.slot(index).unwrap_or(usize::MAX),
                expected: "string",
            })
    }

    /// Dynamic array referenced by slot `index`.
    pub fn array(&self, index: usize) -> Result<ArrayFrame<'a>, DecodeError> {
        let tail = self.tail(index)?;
        let len = read_offset(self.data, tail.base)?;
        let elements_base = tail
            .base
            .checked_add(WORD)
            .ok_or_else(|| self.overflow(WORD))?;
        Ok(ArrayFrame {
            elements: self.at(elements_base)?,
            len,
        })
    }
}

/// `T[]` where `T` is a dynamic tuple: `count`, then one offset word per element, relative to
/// the first slot after `count`.
#[derive(Clone, Copy, Debug)]
pub struct ArrayFrame<'a> {
    elements: Frame<'a>,
    len: usize,
}

impl<'a> ArrayFrame<'a> {
    /// Element count as declared by the payload (not yet validated against the buffer).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check that the declared count's offset table lies inside the buffer.
    pub fn check_offsets(&self) -> Result<(), DecodeError> {
        let table = self
            .len
            .checked_mul(WORD)
            .ok_or_else(|| self.elements.overflow(usize::MAX))?;
        slice(self.elements.data, self.elements.base, table)?;
        Ok(())
    }

    pub fn element(&self, index: usize) -> Result<Frame<'a>, DecodeError> {
        if index >= self.len {
            return Err(DecodeError::OutOfBounds {
                start: index,
                len: 1,
                available: self.len,
            });
        }
        self.elements.tail(index)
    }
}
