// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Owned references to native interfaces.

use std::{fmt, marker::PhantomData, mem::ManuallyDrop, ptr::NonNull};

use decklink_sys::{ComInterface, ComInterfaceId, IUnknown, LPVOID};
use tracing::trace;

use crate::{
    Error, Result,
    ffi::{unknown_add_ref, unknown_query_interface, unknown_release},
};

/// One counted reference to a native interface.
///
/// The native object's intrusive counter is the only authority over its
/// lifetime; a `ComPtr` holds exactly one of those references and gives it
/// back when dropped. Duplicate a reference with [`ComPtr::acquire`].
pub struct ComPtr<I: ComInterface> {
    ptr: NonNull<I>,
    _marker: PhantomData<I>,
}

// Safety: DeckLink objects are free-threaded; the reference itself is plain data.
unsafe impl<I: ComInterface> Send for ComPtr<I> {}

impl<I: ComInterface> ComPtr<I> {
    /// Adopts a reference the caller already owns, as returned by creation,
    /// `Next` and query operations. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live interface pointer carrying one reference
    /// that is transferred to the returned value.
    pub unsafe fn from_raw(ptr: *mut I) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| ComPtr {
            ptr,
            _marker: PhantomData,
        })
    }

    /// Acquires a new reference to a pointer the caller only borrows, such as
    /// the arguments of a notification. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a live interface pointer.
    pub unsafe fn from_borrowed(ptr: *mut I) -> Option<Self> {
        let ptr = NonNull::new(ptr)?;
        unsafe { unknown_add_ref(ptr.as_ptr().cast()) };
        Some(ComPtr {
            ptr,
            _marker: PhantomData,
        })
    }

    /// Takes another reference to the same object.
    pub fn acquire(&self) -> Self {
        unsafe { unknown_add_ref(self.as_unknown()) };
        ComPtr {
            ptr: self.ptr,
            _marker: PhantomData,
        }
    }

    pub fn as_raw(&self) -> *mut I {
        self.ptr.as_ptr()
    }

    fn as_unknown(&self) -> *mut IUnknown {
        self.ptr.as_ptr().cast()
    }

    /// Gives up ownership without releasing; the caller becomes responsible
    /// for the reference.
    pub fn into_raw(self) -> *mut I {
        ManuallyDrop::new(self).ptr.as_ptr()
    }

    /// Asks the object for another of its interfaces.
    ///
    /// # Errors
    ///
    /// Returns the native result, usually [`Error::NoInterface`], if the
    /// object does not implement `J`.
    pub fn query<J: ComInterfaceId>(&self) -> Result<ComPtr<J>> {
        let mut out: LPVOID = std::ptr::null_mut();
        let result = unsafe { unknown_query_interface(self.as_unknown(), J::IID, &mut out) };
        trace!(
            iid = %uuid::Uuid::from_bytes(J::IID.bytes),
            result,
            "queried interface"
        );
        Error::from_result(result)?;
        unsafe { ComPtr::from_raw(out.cast()) }.ok_or(Error::InvalidPointer)
    }

    /// Reinterprets the reference as one of the interfaces `I` derives from.
    ///
    /// # Safety
    ///
    /// `I`'s vtable must begin with `J`'s vtable.
    pub unsafe fn cast<J: ComInterface>(self) -> ComPtr<J> {
        ComPtr {
            ptr: ManuallyDrop::new(self).ptr.cast(),
            _marker: PhantomData,
        }
    }
}

impl<I: ComInterface> Drop for ComPtr<I> {
    fn drop(&mut self) {
        unsafe { unknown_release(self.as_unknown()) };
    }
}

impl<I: ComInterface> fmt::Debug for ComPtr<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComPtr").field(&self.ptr).finish()
    }
}
