//! Core block/transaction types, consensus serialization and genesis construction.

pub mod block;
pub mod encoding;
pub mod genesis;
pub mod hash;
pub mod merkle;
pub mod outpoint;
pub mod script;
pub mod transaction;

pub use block::{Block, BlockHeader};
pub use genesis::{create_genesis_block, default_genesis_block};
pub use hash::{sha256, sha256d};
pub use merkle::{compute_merkle_root, compute_merkle_root_mutated};
pub use outpoint::OutPoint;
pub use transaction::{Transaction, TxIn, TxOut};
