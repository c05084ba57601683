// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Reference counting and interface queries on any interface handle.

use decklink_sys::{HRESULT, IDeckLink, IUnknown, LPVOID, REFIID, ULONG};

/// Adds a reference. Returns whatever the object's `AddRef` returns.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn unknown_add_ref(obj: *mut IUnknown) -> ULONG {
    unsafe { vcall!(obj, AddRef) }
}

/// Drops a reference. The handle must not be used afterwards unless another
/// reference is still held.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn unknown_release(obj: *mut IUnknown) -> ULONG {
    unsafe { vcall!(obj, Release) }
}

/// Requests another interface of `obj`. On success `*iface` holds a new
/// reference; on failure the native code is returned unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn unknown_query_interface(
    obj: *mut IUnknown,
    iid: REFIID,
    iface: *mut LPVOID,
) -> HRESULT {
    unsafe { vcall!(obj, QueryInterface, iid, iface) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_query_interface(
    decklink: *mut IDeckLink,
    iid: REFIID,
    iface: *mut LPVOID,
) -> HRESULT {
    unsafe { unknown_query_interface(decklink.cast(), iid, iface) }
}
