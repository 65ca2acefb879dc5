//! Minimal TON cell builder
//!
//! Only what address derivation needs: ordinary cells (level 0), a bit
//! buffer, and references that are known by their representation hash and
//! depth. Nothing here serializes bags of cells.

use crate::shared::error::WalletError;
use sha2::{Digest, Sha256};

pub const MAX_CELL_BITS: usize = 1023;
pub const MAX_CELL_REFS: usize = 4;

/// A child cell identified by its representation hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub hash: [u8; 32],
    pub depth: u16,
}

/// Finished ordinary cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    bits: Vec<bool>,
    refs: Vec<CellRef>,
}

impl Cell {
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Max child depth plus one, zero for leaves
    pub fn depth(&self) -> u16 {
        self.refs
            .iter()
            .map(|r| r.depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Representation hash: sha256(d1 d2 data depths hashes)
    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.descriptors());
        hasher.update(self.padded_data());
        for r in &self.refs {
            hasher.update(r.depth.to_be_bytes());
        }
        for r in &self.refs {
            hasher.update(r.hash);
        }
        hasher.finalize().into()
    }

    pub fn to_ref(&self) -> CellRef {
        CellRef {
            hash: self.hash(),
            depth: self.depth(),
        }
    }

    fn descriptors(&self) -> [u8; 2] {
        let d1 = self.refs.len() as u8;
        let len = self.bits.len();
        let d2 = (len / 8 + (len + 7) / 8) as u8;
        [d1, d2]
    }

    // Incomplete trailing byte gets a completion tag: one set bit, then zeros
    fn padded_data(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; (self.bits.len() + 7) / 8];
        for (i, bit) in self.bits.iter().enumerate() {
            if *bit {
                bytes[i / 8] |= 0x80 >> (i % 8);
            }
        }
        let rem = self.bits.len() % 8;
        if rem != 0 {
            let last = bytes.len() - 1;
            bytes[last] |= 0x80 >> rem;
        }
        bytes
    }
}

/// Incremental cell builder
#[derive(Debug, Default)]
pub struct CellBuilder {
    bits: Vec<bool>,
    refs: Vec<CellRef>,
}

impl CellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_bit(&mut self, bit: bool) -> Result<&mut Self, WalletError> {
        self.ensure_room(1)?;
        self.bits.push(bit);
        Ok(self)
    }

    pub fn store_bits(&mut self, bits: &[bool]) -> Result<&mut Self, WalletError> {
        self.ensure_room(bits.len())?;
        self.bits.extend_from_slice(bits);
        Ok(self)
    }

    /// Store the low `width` bits of `value`, most significant first
    pub fn store_uint(&mut self, value: u64, width: usize) -> Result<&mut Self, WalletError> {
        if width > 64 || (width < 64 && value >> width != 0) {
            return Err(WalletError::generation(format!(
                "value {} does not fit in {} bits",
                value, width
            )));
        }
        self.ensure_room(width)?;
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
        Ok(self)
    }

    pub fn store_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, WalletError> {
        self.ensure_room(bytes.len() * 8)?;
        for byte in bytes {
            for i in (0..8).rev() {
                self.bits.push((byte >> i) & 1 == 1);
            }
        }
        Ok(self)
    }

    pub fn store_ref(&mut self, child: CellRef) -> Result<&mut Self, WalletError> {
        if self.refs.len() >= MAX_CELL_REFS {
            return Err(WalletError::generation("cell reference overflow"));
        }
        self.refs.push(child);
        Ok(self)
    }

    pub fn build(&self) -> Cell {
        Cell {
            bits: self.bits.clone(),
            refs: self.refs.clone(),
        }
    }

    fn ensure_room(&self, extra: usize) -> Result<(), WalletError> {
        if self.bits.len() + extra > MAX_CELL_BITS {
            return Err(WalletError::generation("cell bit overflow"));
        }
        Ok(())
    }
}
