// Marshalling core: validates the caller-supplied window and forwards the
// exact sub-range to the digest collaborator.

use super::constants_errors::*;
use super::digest::Digest32;

/// Freshly allocated per call; ownership transfers to the caller.
pub type DigestOutput = [u8; DIGEST_SIZE];

// MARK: InputView
/// Borrowed read-only window over a caller-owned buffer. Never outlives the
/// call that created it.
pub struct InputView<'a> {
    bytes: &'a [u8],
}

impl<'a> InputView<'a> {
    /// Validates the handle and the `(offset, length)` window. `None` models
    /// a null handle from the managed side. Offsets arrive as `jint`, so
    /// negative values are rejected alongside windows that overrun the
    /// buffer.
    pub fn new(
        buffer: Option<&'a [u8]>,
        offset: i32,
        length: i32,
    ) -> Result<InputView<'a>, BridgeError> {
        let buffer = buffer.ok_or(BridgeError::NullInput)?;
        let out_of_range = BridgeError::OutOfRange {
            offset,
            length,
            available: buffer.len(),
        };
        if offset < 0 || length < 0 {
            return Err(out_of_range);
        }
        let start = offset as usize;
        let end = start
            .checked_add(length as usize)
            .ok_or_else(|| out_of_range.clone())?;
        if end > buffer.len() {
            return Err(out_of_range);
        }
        Ok(InputView {
            bytes: &buffer[start..end],
        })
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

// MARK: compute_digest
/// Forwards `buffer[offset..offset + length]` by reference to `digest` and
/// returns the 32-byte result by value. A zero-length window forwards an
/// empty slice rather than being rejected. The caller's buffer is never
/// mutated.
#[inline]
pub fn compute_digest<D>(
    digest: &D,
    buffer: Option<&[u8]>,
    offset: i32,
    length: i32,
) -> Result<DigestOutput, BridgeError>
where
    D: Digest32 + ?Sized,
{
    let view = InputView::new(buffer, offset, length)?;
    let mut output = [0u8; DIGEST_SIZE];
    digest.digest(view.as_bytes(), &mut output);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha3::{Digest, Keccak512};
    use std::cell::RefCell;

    // Stand-in for the external X11 collaborator: a real digest truncated
    // to 32 bytes, like X11's final stage.
    fn keccak32(input: &[u8], output: &mut [u8; DIGEST_SIZE]) {
        let full = Keccak512::digest(input);
        output.copy_from_slice(&full[..DIGEST_SIZE]);
    }

    #[test]
    fn forwards_exact_subrange() {
        let forwarded = RefCell::new(Vec::new());
        let recorder = |input: &[u8], output: &mut [u8; DIGEST_SIZE]| {
            forwarded.borrow_mut().push(input.to_vec());
            output.fill(0xab);
        };
        let buffer: Vec<u8> = (0u8..64).collect();

        let out = compute_digest(&recorder, Some(&buffer), 10, 20).unwrap();
        assert_eq!(out, [0xab; DIGEST_SIZE]);
        assert_eq!(*forwarded.borrow(), vec![buffer[10..30].to_vec()]);
    }

    #[test]
    fn zero_length_forwards_empty_range() {
        let forwarded = RefCell::new(Vec::new());
        let recorder = |input: &[u8], output: &mut [u8; DIGEST_SIZE]| {
            forwarded.borrow_mut().push(input.to_vec());
            output.fill(0);
        };
        let buffer = [7u8; 16];

        compute_digest(&recorder, Some(&buffer), 5, 0).unwrap();
        assert_eq!(*forwarded.borrow(), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn null_handle_fails_without_invoking_digest() {
        let calls = RefCell::new(0u32);
        let recorder = |_: &[u8], _: &mut [u8; DIGEST_SIZE]| {
            *calls.borrow_mut() += 1;
        };

        let err = compute_digest(&recorder, None, 0, 0).unwrap_err();
        assert!(matches!(err, BridgeError::NullInput));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn rejects_windows_outside_the_buffer() {
        let buffer = [0u8; 16];
        for (offset, length) in [(-1, 4), (0, -1), (0, 17), (10, 7), (1, i32::MAX)] {
            let err = compute_digest(&keccak32, Some(&buffer), offset, length).unwrap_err();
            assert!(
                matches!(err, BridgeError::OutOfRange { .. }),
                "({offset}, {length}) should be out of range"
            );
        }
        // offset + length at exactly the buffer end is valid
        compute_digest(&keccak32, Some(&buffer), 12, 4).unwrap();
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let buffer = [0u8; 64];
        let first = compute_digest(&keccak32, Some(&buffer), 0, 64).unwrap();
        let second = compute_digest(&keccak32, Some(&buffer), 0, 64).unwrap();
        assert_eq!(first, second);

        // matches the collaborator applied directly to the same 64 bytes
        let mut direct = [0u8; DIGEST_SIZE];
        keccak32(&buffer, &mut direct);
        assert_eq!(first, direct);
    }

    #[test]
    fn offset_window_equals_subbuffer_extraction() {
        let buffer: Vec<u8> = (0u8..64).collect();
        let windowed = compute_digest(&keccak32, Some(&buffer), 10, 20).unwrap();

        let copied: Vec<u8> = buffer[10..30].to_vec();
        let extracted = compute_digest(&keccak32, Some(&copied), 0, 20).unwrap();
        assert_eq!(
            hex::encode(windowed),
            hex::encode(extracted),
            "offset handling must be equivalent to sub-buffer extraction"
        );
    }

    #[test]
    fn disjoint_ranges_with_different_content_differ() {
        let mut buffer = [0u8; 64];
        buffer[32..].fill(0xff);
        let first = compute_digest(&keccak32, Some(&buffer), 0, 32).unwrap();
        let second = compute_digest(&keccak32, Some(&buffer), 32, 32).unwrap();
        assert_ne!(first, second);
    }
}
