//! Genesis block construction.
//!
//! Building is pure: the same literals always produce the same block. Hash
//! checks against expected values are left to the caller.

use skt_consensus::money::Amount;

use crate::block::{Block, BlockHeader};
use crate::merkle::compute_merkle_root;
use crate::outpoint::OutPoint;
use crate::script::{pay_to_pubkey, push_data, push_int, push_script_num};
use crate::transaction::{Transaction, TxIn, TxOut, SEQUENCE_FINAL};

pub const GENESIS_TIMESTAMP: &str =
    "10/07/2017 respn to trump the Castro gov said Trump's US is in no condition to lecture us";

pub const GENESIS_OUTPUT_PUBKEY_HEX: &str = "12348afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Leading coinbase push, the compact bits of Bitcoin's genesis block.
const COINBASE_BITS_TAG: i64 = 486_604_799;
const COINBASE_EXTRA_NONCE: i64 = 4;

pub fn genesis_coinbase_script(timestamp: &str) -> Vec<u8> {
    let mut script = Vec::with_capacity(timestamp.len() + 10);
    push_int(&mut script, COINBASE_BITS_TAG);
    push_script_num(&mut script, COINBASE_EXTRA_NONCE);
    push_data(&mut script, timestamp.as_bytes());
    script
}

pub fn genesis_output_script() -> Vec<u8> {
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY_HEX).expect("genesis output pubkey");
    pay_to_pubkey(&pubkey)
}

pub fn create_genesis_block(
    timestamp: &str,
    output_script: &[u8],
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let coinbase = Transaction {
        version: 1,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig: genesis_coinbase_script(timestamp),
            sequence: SEQUENCE_FINAL,
        }],
        vout: vec![TxOut {
            value: reward,
            script_pubkey: output_script.to_vec(),
        }],
        lock_time: 0,
    };

    let merkle_root = compute_merkle_root(&[coinbase.txid()]);
    Block {
        header: BlockHeader {
            version,
            prev_block: [0u8; 32],
            merkle_root,
            time,
            bits,
            nonce,
        },
        transactions: vec![coinbase],
    }
}

/// Genesis block using the network-wide timestamp and output key.
pub fn default_genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    create_genesis_block(
        GENESIS_TIMESTAMP,
        &genesis_output_script(),
        time,
        nonce,
        bits,
        version,
        reward,
    )
}
