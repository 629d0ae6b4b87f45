//! Random short code drawing.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet using a
//! seedable, non-cryptographic PRNG. Uniqueness against storage is not checked
//! here; see [`crate::application::services::LinkService::generate_unique_code`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Symbols a short code may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a regular short code.
pub const CODE_LENGTH: usize = 5;

/// Length of the fallback code used once regular draws are exhausted.
pub const FALLBACK_CODE_LENGTH: usize = 6;

/// Draws random short codes from an owned random source.
///
/// The source is injected so tests can replay an exact code sequence via
/// [`ShortCodeGenerator::seeded`].
pub struct ShortCodeGenerator {
    rng: Mutex<StdRng>,
}

impl ShortCodeGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator producing a deterministic sequence for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Draws a code of `length` symbols from [`ALPHABET`].
    pub fn generate(&self, length: usize) -> String {
        // A panic while holding the lock cannot leave the PRNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for ShortCodeGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Returns true if `code` could have been produced by a [`ShortCodeGenerator`].
pub fn is_well_formed(code: &str) -> bool {
    (CODE_LENGTH..=FALLBACK_CODE_LENGTH).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
