//! This library provides the Rust-native marshalling core and the JNI
//! bindings that expose a fixed-output-size digest to a JVM caller.

pub mod constants_errors;
pub mod digest;
pub mod bridge;
pub mod registry;
pub mod java_ffi;

pub use bridge::*;
pub use constants_errors::*;
pub use digest::*;
pub use registry::*;
