//! Transaction merkle root.

use skt_consensus::Hash256;

use crate::hash::sha256d;

/// Merkle root over `txids`, duplicating the last entry of odd-length layers.
///
/// A single txid is its own root; an empty list yields the null hash.
pub fn compute_merkle_root(txids: &[Hash256]) -> Hash256 {
    compute_merkle_root_mutated(txids).0
}

/// Like [`compute_merkle_root`], also reporting whether any layer contained
/// two identical adjacent hashes. Such a list shares its root with a shorter
/// one (CVE-2012-2459), so the block carrying it must not be cached as invalid.
pub fn compute_merkle_root_mutated(txids: &[Hash256]) -> (Hash256, bool) {
    if txids.is_empty() {
        return ([0u8; 32], false);
    }
    let mut mutated = false;
    let mut layer = txids.to_vec();
    while layer.len() > 1 {
        if layer.chunks_exact(2).any(|pair| pair[0] == pair[1]) {
            mutated = true;
        }
        if layer.len() % 2 == 1 {
            let last = layer[layer.len() - 1];
            layer.push(last);
        }
        layer = layer
            .chunks(2)
            .map(|pair| merkle_hash_pair(&pair[0], &pair[1]))
            .collect();
    }
    (layer[0], mutated)
}

fn merkle_hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut buf = [0u8; 64];
    buf[0..32].copy_from_slice(left);
    buf[32..64].copy_from_slice(right);
    sha256d(&buf)
}
