//! Hard-coded block anchors.

use skt_consensus::{hash256_from_hex, Hash256};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub height: i32,
    pub hash: Hash256,
}

/// Checkpoints ordered by strictly increasing height.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckpointData {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointData {
    /// Parses `(height, display hex)` pairs. Entries must already be sorted.
    pub fn from_entries(entries: &[(i32, &str)]) -> Self {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| Checkpoint {
                height: *height,
                hash: hash256_from_hex(hash).expect("checkpoint hash"),
            })
            .collect();
        Self { checkpoints }
    }

    pub fn entries(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn hash_at(&self, height: i32) -> Option<&Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |checkpoint| checkpoint.height)
            .ok()
            .map(|index| &self.checkpoints[index].hash)
    }

    pub fn last_height(&self) -> Option<i32> {
        self.checkpoints.last().map(|checkpoint| checkpoint.height)
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.checkpoints
            .windows(2)
            .all(|pair| pair[0].height < pair[1].height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_ordering() {
        let data = CheckpointData::from_entries(&[
            (0, "00000a867c51c481819d51fbb38bb48e38dd0f0312530410f1ffb9c46022242b"),
            (10, "01"),
        ]);
        assert!(data.is_strictly_increasing());
        assert_eq!(data.last_height(), Some(10));
        assert_eq!(data.hash_at(10).map(|hash| hash[0]), Some(1));
        assert!(data.hash_at(5).is_none());

        let unordered = CheckpointData::from_entries(&[(10, "01"), (10, "02")]);
        assert!(!unordered.is_strictly_increasing());
        assert_eq!(CheckpointData::default().last_height(), None);
    }
}
