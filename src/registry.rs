// One-time, process-wide installation of the digest collaborator. The
// bridge moves from Unregistered to Registered exactly once; there is no
// way back for the process lifetime.

use once_cell::sync::OnceCell;

use super::constants_errors::BridgeError;
use super::digest::Digest32;

static DIGEST: OnceCell<Box<dyn Digest32 + Send + Sync>> = OnceCell::new();

// MARK: register_digest
/// Installs the digest function used by the JNI entry point. The first call
/// wins; later calls fail with `AlreadyRegistered` and leave the installed
/// function untouched. Must run before the host dispatches any digest
/// calls.
pub fn register_digest<D>(digest: D) -> Result<(), BridgeError>
where
    D: Digest32 + Send + Sync + 'static,
{
    DIGEST
        .set(Box::new(digest))
        .map_err(|_| BridgeError::AlreadyRegistered)?;
    log::debug!("digest function registered");
    Ok(())
}

// MARK: registered_digest
/// The installed collaborator, or `NotRegistered` while the bridge is still
/// in its unregistered state.
pub fn registered_digest() -> Result<&'static (dyn Digest32 + Send + Sync), BridgeError> {
    DIGEST
        .get()
        .map(|digest| digest.as_ref())
        .ok_or(BridgeError::NotRegistered)
}

#[inline]
pub fn is_registered() -> bool {
    DIGEST.get().is_some()
}
