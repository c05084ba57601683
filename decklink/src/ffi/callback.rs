// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Callback object factories.

use std::{ffi::c_void, ptr};

use decklink_sys::{IDeckLinkInputCallback, IDeckLinkVideoOutputCallback};

use crate::{
    callback::{
        InputCallbackEvents, OutputCallbackEvents, create_input_callback,
        create_video_output_callback,
    },
    input::INPUT_CALLBACK_DISPATCH,
    output::OUTPUT_CALLBACK_DISPATCH,
};

/// Creates an input sink bound to this crate's handler dispatch.
///
/// `implementation` must point to a `Box<dyn InputCallback + Send>` that
/// outlives the registration. The returned object carries one reference.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_input_callback(
    implementation: *mut c_void,
) -> *mut IDeckLinkInputCallback {
    create_input_callback(implementation, &INPUT_CALLBACK_DISPATCH)
}

/// Creates an input sink forwarding to a caller-supplied event table.
///
/// `events` must stay valid and unchanged for the life of the process. Null
/// yields null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_input_callback_with_events(
    implementation: *mut c_void,
    events: *const InputCallbackEvents,
) -> *mut IDeckLinkInputCallback {
    match unsafe { events.as_ref() } {
        Some(events) => create_input_callback(implementation, events),
        None => ptr::null_mut(),
    }
}

/// Creates an output sink bound to this crate's handler dispatch.
///
/// `implementation` must point to a `Box<dyn VideoOutputCallback + Send>`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_video_output_callback(
    implementation: *mut c_void,
) -> *mut IDeckLinkVideoOutputCallback {
    create_video_output_callback(implementation, &OUTPUT_CALLBACK_DISPATCH)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decklink_video_output_callback_with_events(
    implementation: *mut c_void,
    events: *const OutputCallbackEvents,
) -> *mut IDeckLinkVideoOutputCallback {
    match unsafe { events.as_ref() } {
        Some(events) => create_video_output_callback(implementation, events),
        None => ptr::null_mut(),
    }
}
