//! Seed management for crust generation
//!
//! Each stochastic subsystem gets its own seed derived from a master seed,
//! so terrain shape and destruction randomness can be varied independently
//! while a single master seed still reproduces the whole world.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for the crust engine's stochastic subsystems.
#[derive(Clone, Copy, Debug)]
pub struct CrustSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Terrain noise field (height, caves, ore, biomes)
    pub terrain: u64,
    /// Probabilistic explosion destruction draws
    pub destruction: u64,
}

impl CrustSeeds {
    /// Derive all sub-seeds deterministically from a master seed.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            terrain: derive_seed(master, "terrain"),
            destruction: derive_seed(master, "destruction"),
        }
    }
}

/// Derive a sub-seed from a master seed and a system name.
/// Hashing keeps different systems on different but deterministic seeds.
fn derive_seed(master: u64, system: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    system.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for CrustSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CrustSeeds {{ master: {}, terrain: {}, destruction: {} }}",
            self.master, self.terrain, self.destruction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        let a = CrustSeeds::from_master(12345);
        let b = CrustSeeds::from_master(12345);
        assert_eq!(a.terrain, b.terrain);
        assert_eq!(a.destruction, b.destruction);
    }

    #[test]
    fn test_different_systems_get_different_seeds() {
        let seeds = CrustSeeds::from_master(12345);
        assert_ne!(seeds.terrain, seeds.destruction);
    }

    #[test]
    fn test_different_masters_diverge() {
        let a = CrustSeeds::from_master(1);
        let b = CrustSeeds::from_master(2);
        assert_ne!(a.terrain, b.terrain);
    }
}
