//! Seed derivation for independent realizations.

/// Weyl increment of the splitmix64 generator.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives a well-mixed seed for realization `index` of an ensemble started from `base_seed`.
///
/// The result is output `index + 1` of a splitmix64 stream seeded with `base_seed`, so
/// `StdRng::seed_from_u64(seed_for_realization(s, i))` yields an independent stream for
/// each realization even when neighbouring `s` or `i` are used.
pub fn seed_for_realization(base_seed: u64, index: u64) -> u64 {
    let z = base_seed.wrapping_add(GOLDEN_GAMMA.wrapping_mul(index.wrapping_add(1)));
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
