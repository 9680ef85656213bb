// Digest output size
pub const DIGEST_SIZE: usize = 32;

// JNI identifiers for the hosting class and the exported method
pub const BRIDGE_CLASS: &str = "com/hashengineering/crypto/X11";
pub const NATIVE_METHOD_NAME: &str = "x11_native";
pub const NATIVE_METHOD_SIG: &str = "([BII)[B";

#[derive(Debug, Clone)]
pub enum BridgeError {
    NullInput,
    OutOfRange {
        offset: i32,
        length: i32,
        available: usize,
    },
    NotRegistered,
    AlreadyRegistered,
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::NullInput => write!(f, "input is null"),
            BridgeError::OutOfRange {
                offset,
                length,
                available,
            } => write!(
                f,
                "range [{}, {}) exceeds buffer of {} bytes",
                offset,
                i64::from(*offset) + i64::from(*length),
                available
            ),
            BridgeError::NotRegistered => write!(f, "no digest function registered"),
            BridgeError::AlreadyRegistered => write!(f, "digest function already registered"),
        }
    }
}

impl std::error::Error for BridgeError {}
