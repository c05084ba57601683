// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! The scheduled playback notification sink (`IDeckLinkVideoOutputCallback`).

use std::ffi::c_void;

use decklink_sys::{
    BMDOutputFrameCompletionResult, HRESULT, IDeckLinkVideoFrame, IDeckLinkVideoOutputCallback,
    IDeckLinkVideoOutputCallbackVtbl,
};

use super::{CallbackKind, CallbackObject, INERT_DESTRUCTORS, unknown_vtbl};

/// Functions an output sink forwards its notifications to.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OutputCallbackEvents {
    pub scheduled_frame_completed: unsafe extern "C" fn(
        identity: *mut c_void,
        completed_frame: *mut IDeckLinkVideoFrame,
        result: BMDOutputFrameCompletionResult,
    ) -> HRESULT,
    pub scheduled_playback_has_stopped: unsafe extern "C" fn(identity: *mut c_void) -> HRESULT,
}

pub(crate) struct OutputSink;

impl CallbackKind for OutputSink {
    type Interface = IDeckLinkVideoOutputCallback;
    type Vtbl = IDeckLinkVideoOutputCallbackVtbl;
    type Events = OutputCallbackEvents;

    const NAME: &'static str = "IDeckLinkVideoOutputCallback";
    const VTBL: &'static IDeckLinkVideoOutputCallbackVtbl = &IDeckLinkVideoOutputCallbackVtbl {
        base: unknown_vtbl::<OutputSink>(),
        ScheduledFrameCompleted: scheduled_frame_completed,
        ScheduledPlaybackHasStopped: scheduled_playback_has_stopped,
        Destructors: INERT_DESTRUCTORS,
    };
}

/// Creates an output sink forwarding to `events` with `identity`.
///
/// Reference ownership works as for [`super::create_input_callback`].
pub fn create_video_output_callback(
    identity: *mut c_void,
    events: &'static OutputCallbackEvents,
) -> *mut IDeckLinkVideoOutputCallback {
    CallbackObject::<OutputSink>::create(identity, events)
}

unsafe extern "system" fn scheduled_frame_completed(
    this: *mut IDeckLinkVideoOutputCallback,
    completed_frame: *mut IDeckLinkVideoFrame,
    result: BMDOutputFrameCompletionResult,
) -> HRESULT {
    let object = unsafe { CallbackObject::<OutputSink>::from_interface(this) };
    unsafe { (object.events().scheduled_frame_completed)(object.identity(), completed_frame, result) }
}

unsafe extern "system" fn scheduled_playback_has_stopped(
    this: *mut IDeckLinkVideoOutputCallback,
) -> HRESULT {
    let object = unsafe { CallbackObject::<OutputSink>::from_interface(this) };
    unsafe { (object.events().scheduled_playback_has_stopped)(object.identity()) }
}
