// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Owned byte buffers handed across the flat surface.
//!
//! A [`Buffer`] is the unit of ownership transfer for strings returned by the
//! DeckLink runtime. It is handed out as `*mut Buffer`; the holder reads it
//! with [`crate::ffi::buffer_data`] and gives it back exactly once with
//! [`crate::ffi::buffer_release`].

use std::{
    borrow::Cow,
    ffi::{CStr, c_char},
    ptr::NonNull,
};

/// A NUL-terminated byte sequence with a single owner.
pub struct Buffer {
    storage: Storage,
}

enum Storage {
    /// Bytes encoded by this crate, terminator included.
    Encoded(Box<[u8]>),
    /// A string `malloc`ed by the vendor runtime.
    Native(NonNull<c_char>),
}

// Safety: the buffer exclusively owns its storage.
unsafe impl Send for Buffer {}

impl Buffer {
    /// Wraps bytes that already end with a NUL terminator.
    pub(crate) fn from_terminated(bytes: Box<[u8]>) -> Self {
        debug_assert_eq!(bytes.last(), Some(&0));
        Buffer {
            storage: Storage::Encoded(bytes),
        }
    }

    /// Adopts a string allocated with `malloc` by the vendor runtime. No copy
    /// is made; the string is released with `free` when the buffer is dropped.
    ///
    /// # Safety
    ///
    /// `data` must point to a NUL-terminated string obtained from `malloc`
    /// that nobody else will free.
    pub unsafe fn from_native(data: NonNull<c_char>) -> Self {
        Buffer {
            storage: Storage::Native(data),
        }
    }

    /// Returns a pointer to the first byte; the data is NUL-terminated.
    pub fn as_ptr(&self) -> *const c_char {
        match &self.storage {
            Storage::Encoded(bytes) => bytes.as_ptr().cast(),
            Storage::Native(data) => data.as_ptr(),
        }
    }

    pub fn as_c_str(&self) -> &CStr {
        // Safety: both storages are NUL-terminated and live as long as `self`.
        unsafe { CStr::from_ptr(self.as_ptr()) }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.as_c_str().to_string_lossy()
    }

    /// Moves the buffer to the heap and hands out the owning pointer.
    pub fn into_raw(self) -> *mut Buffer {
        Box::into_raw(Box::new(self))
    }

    /// Takes back ownership of a pointer produced by [`Buffer::into_raw`].
    ///
    /// Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `buffer` must be null or an unreleased pointer from [`Buffer::into_raw`].
    pub unsafe fn from_raw(buffer: *mut Buffer) -> Option<Box<Buffer>> {
        if buffer.is_null() {
            None
        } else {
            Some(unsafe { Box::from_raw(buffer) })
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if let Storage::Native(data) = self.storage {
            unsafe { libc::free(data.as_ptr().cast()) };
        }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Buffer").field(&self.as_c_str()).finish()
    }
}

/// Consumes a buffer handed out by the flat surface and returns its text.
///
/// Invalid UTF-8 sequences are replaced. Returns `None` for a null buffer,
/// which is how the flat surface reports an absent string.
///
/// # Safety
///
/// `buffer` must be null or an unreleased buffer pointer; it is released here.
pub unsafe fn take_string(buffer: *mut Buffer) -> Option<String> {
    let buffer = unsafe { Buffer::from_raw(buffer) }?;
    Some(buffer.to_string_lossy().into_owned())
}
