//! Version prefixes for base58check-encoded addresses and keys.

use std::slice;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    /// BIP44 coin type, hardened.
    ExtCoinType,
}

pub const ALL_BASE58_TYPES: [Base58Type; 6] = [
    Base58Type::PubkeyAddress,
    Base58Type::ScriptAddress,
    Base58Type::SecretKey,
    Base58Type::ExtPublicKey,
    Base58Type::ExtSecretKey,
    Base58Type::ExtCoinType,
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    pub ext_coin_type: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => slice::from_ref(&self.script_address),
            Base58Type::SecretKey => slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }

    /// BIP44 coin index with the hardened bit cleared.
    pub fn coin_type_index(&self) -> u32 {
        u32::from_be_bytes(self.ext_coin_type) & 0x7fff_ffff
    }
}
