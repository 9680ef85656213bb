// JNI boundary. The exported symbol name is the compile-time-checked form
// of `com.hashengineering.crypto.X11.x11_native`; JNI_OnLoad additionally
// registers the same function through RegisterNatives so the VM can resolve
// it either way.

use std::os::raw::c_void;
use std::slice;

use jni::objects::{JByteArray, JClass, ReleaseMode};
use jni::sys::{jbyteArray, jint, JNI_ERR, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM, NativeMethod};

use crate::bridge;
use crate::constants_errors::*;
use crate::registry;

// MARK: exception_class
pub(crate) fn exception_class(err: &BridgeError) -> &'static str {
    match err {
        BridgeError::NullInput => "java/lang/NullPointerException",
        BridgeError::OutOfRange { .. } => "java/lang/ArrayIndexOutOfBoundsException",
        BridgeError::NotRegistered | BridgeError::AlreadyRegistered => {
            "java/lang/IllegalStateException"
        }
    }
}

fn throw(env: &mut JNIEnv, err: &BridgeError) {
    if env.throw_new(exception_class(err), err.to_string()).is_err() {
        log::error!("failed to raise '{err}' across the JNI boundary");
    }
}

// MARK: x11_native
/// `byte[] x11_native(byte[] input, int offset, int length)`. Returns a
/// newly allocated 32-byte array, or null with a pending exception. The
/// input elements are borrowed read-only and released without copy-back,
/// so a VM that handed out a private copy discards it.
#[no_mangle]
pub extern "system" fn Java_com_hashengineering_crypto_X11_x11_1native<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    input: JByteArray<'local>,
    offset: jint,
    length: jint,
) -> jbyteArray {
    let digest = match registry::registered_digest() {
        Ok(digest) => digest,
        Err(err) => {
            throw(&mut env, &err);
            return std::ptr::null_mut();
        }
    };
    if input.as_raw().is_null() {
        throw(&mut env, &BridgeError::NullInput);
        return std::ptr::null_mut();
    }

    let result = match unsafe { env.get_array_elements(&input, ReleaseMode::NoCopyBack) } {
        Ok(elements) => {
            let bytes =
                unsafe { slice::from_raw_parts(elements.as_ptr() as *const u8, elements.len()) };
            bridge::compute_digest(digest, Some(bytes), offset, length)
        }
        Err(err) => {
            log::error!("failed to borrow input array elements: {err}");
            let _ = env.throw_new("java/lang/RuntimeException", "failed to borrow input array");
            return std::ptr::null_mut();
        }
    };

    match result {
        Ok(output) => match env.byte_array_from_slice(&output) {
            Ok(array) => array.into_raw(),
            Err(err) => {
                log::error!("failed to allocate digest array: {err}");
                let _ = env.throw_new("java/lang/RuntimeException", "failed to allocate digest");
                std::ptr::null_mut()
            }
        },
        Err(err) => {
            throw(&mut env, &err);
            std::ptr::null_mut()
        }
    }
}

// MARK: JNI_OnLoad
/// Load hook. Locates the hosting class and binds the native method;
/// reports `JNI_ERR` on any failure so the VM never dispatches into a
/// partially-initialized bridge.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    let vm = match unsafe { JavaVM::from_raw(vm) } {
        Ok(vm) => vm,
        Err(_) => return JNI_ERR,
    };
    let mut env = match vm.get_env() {
        Ok(env) => env,
        Err(_) => return JNI_ERR,
    };

    let class = match env.find_class(BRIDGE_CLASS) {
        Ok(class) => class,
        Err(err) => {
            log::error!("hosting class {BRIDGE_CLASS} not found: {err}");
            return JNI_ERR;
        }
    };
    let method = NativeMethod {
        name: NATIVE_METHOD_NAME.into(),
        sig: NATIVE_METHOD_SIG.into(),
        fn_ptr: Java_com_hashengineering_crypto_X11_x11_1native as *mut c_void,
    };
    if let Err(err) = env.register_native_methods(&class, &[method]) {
        log::error!("failed to register {NATIVE_METHOD_NAME} on {BRIDGE_CLASS}: {err}");
        return JNI_ERR;
    }

    if !registry::is_registered() {
        log::warn!("loaded before a digest function was registered; calls will fail until one is");
    }
    log::debug!("registered {NATIVE_METHOD_NAME} on {BRIDGE_CLASS}");
    JNI_VERSION_1_6
}
