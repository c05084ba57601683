// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

use decklink_sys::{
    BMDAudioSampleRate, BMDAudioSampleType, BMDDisplayMode, BMDPixelFormat, BMDTimeScale,
    BMDTimeValue, BMDVideoInputFlags, HRESULT, IDeckLinkDisplayModeIterator, IDeckLinkInput,
    IDeckLinkInputCallback,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_get_display_mode_iterator(
    input: *mut IDeckLinkInput,
    iterator: *mut *mut IDeckLinkDisplayModeIterator,
) -> HRESULT {
    unsafe { vcall!(input, GetDisplayModeIterator, iterator) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_start_streams(input: *mut IDeckLinkInput) -> HRESULT {
    unsafe { vcall!(input, StartStreams) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_stop_streams(input: *mut IDeckLinkInput) -> HRESULT {
    unsafe { vcall!(input, StopStreams) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_pause_streams(input: *mut IDeckLinkInput) -> HRESULT {
    unsafe { vcall!(input, PauseStreams) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_flush_streams(input: *mut IDeckLinkInput) -> HRESULT {
    unsafe { vcall!(input, FlushStreams) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_enable_video_input(
    input: *mut IDeckLinkInput,
    display_mode: BMDDisplayMode,
    pixel_format: BMDPixelFormat,
    flags: BMDVideoInputFlags,
) -> HRESULT {
    unsafe { vcall!(input, EnableVideoInput, display_mode, pixel_format, flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_disable_video_input(input: *mut IDeckLinkInput) -> HRESULT {
    unsafe { vcall!(input, DisableVideoInput) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_enable_audio_input(
    input: *mut IDeckLinkInput,
    sample_rate: BMDAudioSampleRate,
    sample_type: BMDAudioSampleType,
    channel_count: u32,
) -> HRESULT {
    unsafe { vcall!(input, EnableAudioInput, sample_rate, sample_type, channel_count) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_disable_audio_input(input: *mut IDeckLinkInput) -> HRESULT {
    unsafe { vcall!(input, DisableAudioInput) }
}

/// Registers `callback` as the notification sink, or clears it with null.
/// The runtime takes its own reference to the callback object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_set_callback(
    input: *mut IDeckLinkInput,
    callback: *mut IDeckLinkInputCallback,
) -> HRESULT {
    unsafe { vcall!(input, SetCallback, callback) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_input_get_hardware_reference_clock(
    input: *mut IDeckLinkInput,
    desired_time_scale: BMDTimeScale,
    hardware_time: *mut BMDTimeValue,
    time_in_frame: *mut BMDTimeValue,
    ticks_per_frame: *mut BMDTimeValue,
) -> HRESULT {
    unsafe {
        vcall!(
            input,
            GetHardwareReferenceClock,
            desired_time_scale,
            hardware_time,
            time_in_frame,
            ticks_per_frame
        )
    }
}
