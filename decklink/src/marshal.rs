// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Conversion of native string results into owned [`Buffer`]s.
//!
//! DeckLink string getters hand out a platform string through an
//! out-parameter. On macOS it is a `CFStringRef` that has to be encoded to
//! UTF-8 and released; on Linux it already is a `malloc`ed UTF-8 string and
//! is adopted as is. [`StringArg`] hides the difference from the flat surface.

use std::{ffi::c_char, ptr};

use decklink_sys::DLString;

use crate::buffer::Buffer;

/// A native text object that must be encoded before it can cross the flat
/// surface. Dropping the value releases the native object.
pub trait ManagedText {
    /// Exact number of UTF-8 bytes needed to encode the text, without terminator.
    fn utf8_len(&self) -> usize;

    /// Encodes the text into `dest`, which is exactly [`ManagedText::utf8_len`]
    /// bytes long. Returns `false` if the text could not be encoded.
    fn write_utf8(&self, dest: &mut [u8]) -> bool;
}

/// Encodes a managed string into a new buffer and releases the native string.
///
/// The allocation is exactly the UTF-8 length plus one terminator byte.
/// `None` yields null, never an empty buffer.
pub fn marshal_managed<T: ManagedText>(text: Option<T>) -> *mut Buffer {
    let Some(text) = text else {
        return ptr::null_mut();
    };
    let len = text.utf8_len();
    let mut bytes = vec![0u8; len + 1].into_boxed_slice();
    if !text.write_utf8(&mut bytes[..len]) {
        tracing::debug!(len, "failed to encode native string");
        return ptr::null_mut();
    }
    Buffer::from_terminated(bytes).into_raw()
}

/// Adopts a `malloc`ed UTF-8 string without copying. Null yields null.
///
/// # Safety
///
/// `data` must be null or a NUL-terminated string from `malloc` whose
/// ownership passes to the returned buffer.
pub unsafe fn marshal_native(data: *const c_char) -> *mut Buffer {
    match ptr::NonNull::new(data.cast_mut()) {
        Some(data) => unsafe { Buffer::from_native(data) }.into_raw(),
        None => ptr::null_mut(),
    }
}

/// A `CFStringRef` obtained under the create rule.
#[cfg(target_os = "macos")]
pub struct CfText(core_foundation_sys::string::CFStringRef);

#[cfg(target_os = "macos")]
impl CfText {
    /// Takes ownership of `string`. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `string` must be null or a valid string the caller owns one reference to.
    pub unsafe fn from_create_rule(string: core_foundation_sys::string::CFStringRef) -> Option<Self> {
        if string.is_null() {
            None
        } else {
            Some(CfText(string))
        }
    }

    /// Runs `CFStringGetBytes` over the whole string and returns
    /// `(characters left unconverted, bytes used)`. An empty `dest` only
    /// measures.
    fn get_bytes(&self, dest: &mut [u8]) -> (core_foundation_sys::base::CFIndex, usize) {
        use core_foundation_sys::{
            base::CFRange,
            string::{CFStringGetBytes, CFStringGetLength, kCFStringEncodingUTF8},
        };

        unsafe {
            let length = CFStringGetLength(self.0);
            let mut used = 0;
            let buffer = if dest.is_empty() {
                ptr::null_mut()
            } else {
                dest.as_mut_ptr()
            };
            let converted = CFStringGetBytes(
                self.0,
                CFRange::init(0, length),
                kCFStringEncodingUTF8,
                0,
                false as _,
                buffer,
                dest.len() as _,
                &mut used,
            );
            (length - converted, used as usize)
        }
    }
}

#[cfg(target_os = "macos")]
impl ManagedText for CfText {
    fn utf8_len(&self) -> usize {
        self.get_bytes(&mut []).1
    }

    fn write_utf8(&self, dest: &mut [u8]) -> bool {
        let expected = dest.len();
        let (unconverted, used) = self.get_bytes(dest);
        unconverted == 0 && used == expected
    }
}

#[cfg(target_os = "macos")]
impl Drop for CfText {
    fn drop(&mut self) {
        unsafe { core_foundation_sys::base::CFRelease(self.0.cast()) };
    }
}

/// Out-parameter adapter for string getters.
///
/// Pass [`StringArg::as_out_ptr`] to the native getter. When the adapter is
/// dropped it converts whatever the getter stored into a [`Buffer`] and writes
/// it to the caller's destination, or releases it if the destination is null.
/// A getter that stored nothing produces null.
pub struct StringArg {
    temp: DLString,
    dest: *mut *mut Buffer,
}

impl StringArg {
    /// # Safety
    ///
    /// `dest` must be null or valid for a pointer-sized write when the adapter
    /// is dropped.
    pub unsafe fn new(dest: *mut *mut Buffer) -> Self {
        StringArg {
            temp: ptr::null(),
            dest,
        }
    }

    pub fn as_out_ptr(&mut self) -> *mut DLString {
        &mut self.temp
    }

    #[cfg(target_os = "macos")]
    fn take_buffer(&mut self) -> *mut Buffer {
        let temp = std::mem::replace(&mut self.temp, ptr::null());
        marshal_managed(unsafe { CfText::from_create_rule(temp) })
    }

    #[cfg(not(target_os = "macos"))]
    fn take_buffer(&mut self) -> *mut Buffer {
        let temp = std::mem::replace(&mut self.temp, ptr::null());
        unsafe { marshal_native(temp) }
    }
}

impl Drop for StringArg {
    fn drop(&mut self) {
        let buffer = self.take_buffer();
        if self.dest.is_null() {
            drop(unsafe { Buffer::from_raw(buffer) });
        } else {
            unsafe { *self.dest = buffer };
        }
    }
}
