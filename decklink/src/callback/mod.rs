// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Callback objects the DeckLink runtime can call into.
//!
//! A callback object is a heap cell laid out like a native interface: its
//! first field points to a `'static` vtable of `extern "system"` functions.
//! The runtime holds it through the interface pointer returned by the
//! factories, counts references on it through `AddRef`/`Release`, and invokes
//! its notification methods from its own threads. Every notification is
//! forwarded unchanged, prefixed with the opaque handler identity given at
//! construction, to the matching function of an event table.
//!
//! The two sink kinds (input and scheduled output) share the reference count
//! and `QueryInterface` implementation below and differ only in their vtable,
//! identity and event table.
//!
//! ```text
//! runtime thread ──► vtbl.VideoInputFrameArrived(this, frame, packet)
//!                        │
//!                        └─► events.video_input_frame_arrived(identity, frame, packet)
//! ```

use std::{
    ffi::c_void,
    panic::{self, AssertUnwindSafe},
    ptr,
    sync::atomic::{AtomicU32, Ordering, fence},
};

use decklink_sys::{
    ComInterfaceId, Destructor, E_FAIL, E_INVALIDARG, E_NOINTERFACE, HRESULT, IID_IUnknown,
    IUnknown, IUnknownVtbl, LPVOID, REFIID, S_OK, ULONG,
};
use tracing::{debug, error, trace};

use crate::Result;

mod input;
mod output;

pub use input::{InputCallbackEvents, create_input_callback};
pub use output::{OutputCallbackEvents, create_video_output_callback};

/// One kind of notification sink.
pub(crate) trait CallbackKind: Sized + 'static {
    /// The native interface the object presents.
    type Interface: ComInterfaceId;
    type Vtbl: 'static;
    type Events: 'static;

    const NAME: &'static str;
    const VTBL: &'static Self::Vtbl;
}

/// The object behind every callback interface pointer.
#[repr(C)]
pub(crate) struct CallbackObject<K: CallbackKind> {
    vtbl: &'static K::Vtbl,
    ref_count: AtomicU32,
    identity: *mut c_void,
    events: &'static K::Events,
}

impl<K: CallbackKind> CallbackObject<K> {
    /// Allocates an object with a reference count of one, owned by the caller.
    pub(crate) fn create(identity: *mut c_void, events: &'static K::Events) -> *mut K::Interface {
        let object = Box::new(CallbackObject::<K> {
            vtbl: K::VTBL,
            ref_count: AtomicU32::new(1),
            identity,
            events,
        });
        trace!(kind = K::NAME, ?identity, "created callback object");
        Box::into_raw(object).cast()
    }

    /// # Safety
    ///
    /// `this` must be an unreleased pointer returned by [`CallbackObject::create`].
    pub(crate) unsafe fn from_interface<'a>(this: *mut K::Interface) -> &'a Self {
        unsafe { &*this.cast::<Self>() }
    }

    pub(crate) fn identity(&self) -> *mut c_void {
        self.identity
    }

    pub(crate) fn events(&self) -> &'static K::Events {
        self.events
    }
}

impl<K: CallbackKind> Drop for CallbackObject<K> {
    fn drop(&mut self) {
        trace!(kind = K::NAME, identity = ?self.identity, "reclaimed callback object");
        #[cfg(test)]
        reclamations::record(self.identity);
    }
}

/// The `IUnknown` part of a callback vtable.
pub(crate) const fn unknown_vtbl<K: CallbackKind>() -> IUnknownVtbl {
    IUnknownVtbl {
        QueryInterface: query_interface::<K>,
        AddRef: add_ref::<K>,
        Release: release::<K>,
    }
}

/// Slots of the vendor's virtual destructor. The runtime never calls them.
pub(crate) const INERT_DESTRUCTORS: [Destructor; 2] = [Some(inert_destructor), Some(inert_destructor)];

unsafe extern "system" fn inert_destructor(_this: *mut c_void) {}

unsafe extern "system" fn query_interface<K: CallbackKind>(
    this: *mut IUnknown,
    iid: REFIID,
    ppv: *mut LPVOID,
) -> HRESULT {
    if ppv.is_null() {
        return E_INVALIDARG;
    }
    unsafe { *ppv = ptr::null_mut() };

    if iid == IID_IUnknown || iid == <K::Interface as ComInterfaceId>::IID {
        unsafe {
            add_ref::<K>(this);
            *ppv = this.cast();
        }
        S_OK
    } else {
        trace!(
            kind = K::NAME,
            iid = %uuid::Uuid::from_bytes(iid.bytes),
            "callback object does not implement interface"
        );
        E_NOINTERFACE
    }
}

/// Returns the count before the increment.
unsafe extern "system" fn add_ref<K: CallbackKind>(this: *mut IUnknown) -> ULONG {
    let object = unsafe { &*this.cast::<CallbackObject<K>>() };
    object.ref_count.fetch_add(1, Ordering::Relaxed) as ULONG
}

/// Returns the count after the decrement; the object is gone when it is zero.
unsafe extern "system" fn release<K: CallbackKind>(this: *mut IUnknown) -> ULONG {
    let object = this.cast::<CallbackObject<K>>();
    let previous = unsafe { (*object).ref_count.fetch_sub(1, Ordering::Release) };
    if previous == 1 {
        fence(Ordering::Acquire);
        drop(unsafe { Box::from_raw(object) });
    }
    previous.wrapping_sub(1) as ULONG
}

/// Runs a Rust handler for `event` and turns its outcome into a result code.
///
/// Panics are caught here; unwinding into the runtime's thread is undefined
/// behaviour.
pub(crate) fn relay(event: &'static str, handler: impl FnOnce() -> Result<()>) -> HRESULT {
    match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(Ok(())) => S_OK,
        Ok(Err(err)) => {
            debug!(event, error = %err, "callback handler failed");
            err.result_code()
        }
        Err(_) => {
            error!(event, "callback handler panicked");
            E_FAIL
        }
    }
}
