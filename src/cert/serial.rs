//! Serial number generation.
//!
//! Serial numbers are 160-bit positive integers derived from a shared call
//! counter and the wall clock, hashed so that values from different runs do
//! not collide in practice.

use crate::error::{ArtifactError, Result};
use chrono::Utc;
use sha1::{Digest, Sha1};
use std::sync::atomic::{AtomicU32, Ordering};
use x509_cert::serial_number::SerialNumber;

/// Generator for collision-resistant certificate serial numbers.
///
/// One generator is shared across the whole generation run; the counter
/// starts at 1, increments on every call and is never reset. The counter
/// is atomic so the per-algorithm pipelines can run concurrently with the
/// generator as their only shared resource.
#[derive(Debug)]
pub struct SerialNumberGenerator {
    counter: AtomicU32,
}

impl SerialNumberGenerator {
    /// Create a generator with its counter at 1.
    pub fn new() -> Self {
        Self {
            counter: AtomicU32::new(1),
        }
    }

    /// Produce the next serial number.
    ///
    /// The counter (4 bytes big-endian) is concatenated with the current
    /// time in milliseconds (8 bytes big-endian) and hashed with SHA-1.
    /// The first digest byte is forced to `01xxxxxx`, so the 20-byte
    /// big-endian integer is always strictly positive with its two
    /// most-significant bits equal to `01`.
    pub fn next(&self) -> Result<SerialNumber> {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        let now_millis = Utc::now().timestamp_millis();

        let mut input = [0u8; 12];
        input[..4].copy_from_slice(&count.to_be_bytes());
        input[4..].copy_from_slice(&now_millis.to_be_bytes());

        let mut digest: [u8; 20] = Sha1::digest(input).into();
        digest[0] = (digest[0] & 0x7f) | 0x40;

        SerialNumber::new(&digest)
            .map_err(|e| ArtifactError::CertificateError(format!("Failed to create serial number: {}", e)))
    }
}

impl Default for SerialNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_is_20_bytes() {
        let serials = SerialNumberGenerator::new();
        let serial = serials.next().unwrap();
        assert_eq!(serial.as_bytes().len(), 20);
    }

    #[test]
    fn test_serial_top_bits_are_01() {
        let serials = SerialNumberGenerator::new();
        for _ in 0..32 {
            let serial = serials.next().unwrap();
            assert_eq!(serial.as_bytes()[0] & 0xc0, 0x40);
        }
    }

    #[test]
    fn test_serials_are_unique() {
        let serials = SerialNumberGenerator::new();
        let a = serials.next().unwrap();
        let b = serials.next().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_counter_is_shared_across_threads() {
        use std::sync::Arc;

        let serials = Arc::new(SerialNumberGenerator::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let serials = Arc::clone(&serials);
            handles.push(std::thread::spawn(move || {
                (0..8).map(|_| serials.next().unwrap()).collect::<Vec<_>>()
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }

        let unique: std::collections::HashSet<_> =
            all.iter().map(|s| s.as_bytes().to_vec()).collect();
        assert_eq!(unique.len(), all.len());
    }
}
