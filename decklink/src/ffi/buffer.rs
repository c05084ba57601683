// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

use std::{ffi::c_void, ptr};

use crate::buffer::Buffer;

/// Returns the NUL-terminated contents of `buf` without transferring
/// ownership. Null yields null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn buffer_data(buf: *mut Buffer) -> *const c_void {
    match unsafe { buf.as_ref() } {
        Some(buffer) => buffer.as_ptr().cast(),
        None => ptr::null(),
    }
}

/// Releases a buffer. Null is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn buffer_release(buf: *mut Buffer) {
    drop(unsafe { Buffer::from_raw(buf) });
}
