//! TON address derivation
//!
//! A wallet's address is the representation hash of its state init: the
//! v4R2 contract code (referenced by its well-known hash) plus a data cell
//! carrying the seqno, subwallet id and public key.

pub mod cell;

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::types::AddressFormat;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cell::{CellBuilder, CellRef};

const USER_FRIENDLY_LEN: usize = 36;

/// Raw account address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonAddress {
    pub workchain: i8,
    pub hash: [u8; 32],
}

impl TonAddress {
    /// Address of a v4R2 wallet owned by `public_key`
    pub fn wallet_v4r2(public_key: &[u8], subwallet_id: u32) -> Result<Self, WalletError> {
        Ok(Self {
            workchain: BASECHAIN,
            hash: wallet_v4r2_state_init_hash(public_key, subwallet_id)?,
        })
    }

    /// 48-character user-friendly form in the standard base64 alphabet
    pub fn to_user_friendly(&self, format: AddressFormat) -> String {
        let mut bytes = Vec::with_capacity(USER_FRIENDLY_LEN);
        bytes.push(format.tag());
        bytes.push(self.workchain as u8);
        bytes.extend_from_slice(&self.hash);
        let checksum = crc16(&bytes);
        bytes.extend_from_slice(&checksum.to_be_bytes());
        STANDARD.encode(bytes)
    }
}

/// Representation hash of the v4R2 state init for `public_key`
pub fn wallet_v4r2_state_init_hash(public_key: &[u8], subwallet_id: u32) -> Result<[u8; 32], WalletError> {
    if public_key.len() != PUBLIC_KEY_SIZE {
        return Err(WalletError::generation(format!(
            "Invalid public key length: expected {} bytes, got {}",
            PUBLIC_KEY_SIZE,
            public_key.len()
        )));
    }

    let mut data = CellBuilder::new();
    data.store_uint(0, 32)?
        .store_uint(u64::from(subwallet_id), 32)?
        .store_bytes(public_key)?
        .store_bit(false)?;

    let mut state_init = CellBuilder::new();
    // split_depth, special, code, data, library
    state_init
        .store_bits(&[false, false, true, true, false])?
        .store_ref(wallet_v4r2_code()?)?
        .store_ref(data.build().to_ref())?;

    Ok(state_init.build().hash())
}

fn wallet_v4r2_code() -> Result<CellRef, WalletError> {
    let mut hash = [0u8; 32];
    hex::decode_to_slice(WALLET_V4R2_CODE_HASH, &mut hash)?;
    Ok(CellRef {
        hash,
        depth: WALLET_V4R2_CODE_DEPTH,
    })
}

/// CRC-16/XMODEM (poly 0x1021, init 0)
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY: &str = "24a4a2d374857104efa476b1d39cfd78969fcd50d0b70f84ac24ee1300552a40";
    const STATE_INIT_HASH: &str = "51261b69e24cd18b3097521984e14f3096a634f2b09ffc60d6567aae398d006b";

    fn public_key() -> Vec<u8> {
        hex::decode(PUBLIC_KEY).expect("Failed to decode test key")
    }

    #[test]
    fn test_crc16_check_value() {
        assert_eq!(crc16(b"123456789"), 0x31c3);
        assert_eq!(crc16(&[]), 0);
    }

    #[test]
    fn test_state_init_hash() {
        let hash = wallet_v4r2_state_init_hash(&public_key(), DEFAULT_SUBWALLET_ID)
            .expect("Failed to hash state init");
        assert_eq!(hex::encode(hash), STATE_INIT_HASH);
    }

    #[test]
    fn test_subwallet_changes_address() {
        let a = TonAddress::wallet_v4r2(&public_key(), DEFAULT_SUBWALLET_ID).expect("Failed to derive");
        let b = TonAddress::wallet_v4r2(&public_key(), DEFAULT_SUBWALLET_ID + 1).expect("Failed to derive");
        assert_ne!(a, b);
    }

    #[test]
    fn test_user_friendly_forms() {
        let address = TonAddress::wallet_v4r2(&public_key(), DEFAULT_SUBWALLET_ID)
            .expect("Failed to derive address");

        assert_eq!(address.workchain, BASECHAIN);
        assert_eq!(hex::encode(address.hash), STATE_INIT_HASH);
        assert_eq!(
            address.to_user_friendly(AddressFormat::default()),
            "EQBRJhtp4kzRizCXUhmE4U8wlqY08rCf/GDWVnquOY0Aa31s"
        );
        assert_eq!(
            address.to_user_friendly(AddressFormat::new(false, false)),
            "UQBRJhtp4kzRizCXUhmE4U8wlqY08rCf/GDWVnquOY0AayCp"
        );
        assert_eq!(
            address.to_user_friendly(AddressFormat::new(true, true)),
            "kQBRJhtp4kzRizCXUhmE4U8wlqY08rCf/GDWVnquOY0Aa8bm"
        );
    }

    #[test]
    fn test_rejects_wrong_key_length() {
        let result = wallet_v4r2_state_init_hash(&[0u8; 33], DEFAULT_SUBWALLET_ID);
        assert!(matches!(result, Err(WalletError::Generation(_))));
    }
}
