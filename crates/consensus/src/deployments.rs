//! Versionbits deployment windows.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum DeploymentPos {
    TestDummy = 0,
    /// BIP68, BIP112 and BIP113.
    Csv = 1,
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 2;

pub const ALL_DEPLOYMENTS: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
    [DeploymentPos::TestDummy, DeploymentPos::Csv];

impl DeploymentPos {
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        DEPLOYMENT_INFO[self.as_usize()].name
    }
}

/// Signalling window for one soft fork.
///
/// `bit` is the version bit miners set; signalling counts only for blocks
/// whose median time past lies in `[start_time, timeout)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}

impl Deployment {
    /// Timeout used on regtest so a deployment never expires.
    pub const NO_TIMEOUT: i64 = 999_999_999_999;

    pub fn is_within_window(&self, median_time_past: i64) -> bool {
        (self.start_time..self.timeout).contains(&median_time_past)
    }

    pub fn version_mask(&self) -> u32 {
        1u32 << self.bit
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DeploymentInfo {
    pub name: &'static str,
    pub gbt_force: bool,
}

pub const DEPLOYMENT_INFO: [DeploymentInfo; MAX_VERSION_BITS_DEPLOYMENTS] = [
    DeploymentInfo {
        name: "testdummy",
        gbt_force: true,
    },
    DeploymentInfo {
        name: "csv",
        gbt_force: true,
    },
];

/// Returns true when no two deployments share a version bit.
pub fn bits_are_unique(deployments: &[Deployment]) -> bool {
    let mut seen = 0u32;
    for deployment in deployments {
        let mask = deployment.version_mask();
        if seen & mask != 0 {
            return false;
        }
        seen |= mask;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_half_open() {
        let deployment = Deployment {
            bit: 0,
            start_time: 100,
            timeout: 200,
        };
        assert!(!deployment.is_within_window(99));
        assert!(deployment.is_within_window(100));
        assert!(deployment.is_within_window(199));
        assert!(!deployment.is_within_window(200));
    }

    #[test]
    fn duplicate_bits_detected() {
        let a = Deployment {
            bit: 28,
            start_time: 0,
            timeout: Deployment::NO_TIMEOUT,
        };
        let b = Deployment { bit: 0, ..a };
        assert!(bits_are_unique(&[a, b]));
        assert!(!bits_are_unique(&[a, b, a]));
    }

    #[test]
    fn names_follow_positions() {
        assert_eq!(DeploymentPos::TestDummy.name(), "testdummy");
        assert_eq!(DeploymentPos::Csv.name(), "csv");
        assert_eq!(ALL_DEPLOYMENTS.len(), DEPLOYMENT_INFO.len());
    }
}
