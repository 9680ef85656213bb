// The external digest collaborator. X11 chains eleven sub-hashes and
// truncates the final state to 32 bytes; its internals live outside this
// crate, reachable only through this seam.

use super::constants_errors::DIGEST_SIZE;

/// A synchronous, deterministic digest producing exactly [`DIGEST_SIZE`]
/// bytes. Implementations must be reentrant: the bridge may be called from
/// multiple JVM threads with disjoint buffers.
pub trait Digest32 {
    fn digest(&self, input: &[u8], output: &mut [u8; DIGEST_SIZE]);
}

impl<F> Digest32 for F
where
    F: Fn(&[u8], &mut [u8; DIGEST_SIZE]),
{
    fn digest(&self, input: &[u8], output: &mut [u8; DIGEST_SIZE]) {
        self(input, output)
    }
}
