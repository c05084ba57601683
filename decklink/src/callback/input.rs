// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! The capture notification sink (`IDeckLinkInputCallback`).

use std::ffi::c_void;

use decklink_sys::{
    BMDDetectedVideoInputFormatFlags, BMDVideoInputFormatChangedEvents, HRESULT,
    IDeckLinkAudioInputPacket, IDeckLinkDisplayMode, IDeckLinkInputCallback,
    IDeckLinkInputCallbackVtbl, IDeckLinkVideoInputFrame,
};

use super::{CallbackKind, CallbackObject, INERT_DESTRUCTORS, unknown_vtbl};

/// Functions an input sink forwards its notifications to.
///
/// Each receives the handler identity the sink was created with, followed by
/// the notification's arguments exactly as the runtime passed them. Pointer
/// arguments are borrowed for the duration of the call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct InputCallbackEvents {
    pub video_input_format_changed: unsafe extern "C" fn(
        identity: *mut c_void,
        notification_events: BMDVideoInputFormatChangedEvents,
        new_display_mode: *mut IDeckLinkDisplayMode,
        detected_signal_flags: BMDDetectedVideoInputFormatFlags,
    ) -> HRESULT,
    pub video_input_frame_arrived: unsafe extern "C" fn(
        identity: *mut c_void,
        video_frame: *mut IDeckLinkVideoInputFrame,
        audio_packet: *mut IDeckLinkAudioInputPacket,
    ) -> HRESULT,
}

pub(crate) struct InputSink;

impl CallbackKind for InputSink {
    type Interface = IDeckLinkInputCallback;
    type Vtbl = IDeckLinkInputCallbackVtbl;
    type Events = InputCallbackEvents;

    const NAME: &'static str = "IDeckLinkInputCallback";
    const VTBL: &'static IDeckLinkInputCallbackVtbl = &IDeckLinkInputCallbackVtbl {
        base: unknown_vtbl::<InputSink>(),
        VideoInputFormatChanged: video_input_format_changed,
        VideoInputFrameArrived: video_input_frame_arrived,
        Destructors: INERT_DESTRUCTORS,
    };
}

/// Creates an input sink forwarding to `events` with `identity`.
///
/// The returned object carries one reference owned by the caller. Hand it to
/// `decklink_input_set_callback`, then release the caller's reference; the
/// runtime keeps its own.
pub fn create_input_callback(
    identity: *mut c_void,
    events: &'static InputCallbackEvents,
) -> *mut IDeckLinkInputCallback {
    CallbackObject::<InputSink>::create(identity, events)
}

unsafe extern "system" fn video_input_format_changed(
    this: *mut IDeckLinkInputCallback,
    notification_events: BMDVideoInputFormatChangedEvents,
    new_display_mode: *mut IDeckLinkDisplayMode,
    detected_signal_flags: BMDDetectedVideoInputFormatFlags,
) -> HRESULT {
    let object = unsafe { CallbackObject::<InputSink>::from_interface(this) };
    unsafe {
        (object.events().video_input_format_changed)(
            object.identity(),
            notification_events,
            new_display_mode,
            detected_signal_flags,
        )
    }
}

unsafe extern "system" fn video_input_frame_arrived(
    this: *mut IDeckLinkInputCallback,
    video_frame: *mut IDeckLinkVideoInputFrame,
    audio_packet: *mut IDeckLinkAudioInputPacket,
) -> HRESULT {
    let object = unsafe { CallbackObject::<InputSink>::from_interface(this) };
    unsafe { (object.events().video_input_frame_arrived)(object.identity(), video_frame, audio_packet) }
}
