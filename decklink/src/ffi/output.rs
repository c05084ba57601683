// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

use decklink_sys::{
    BMDDisplayMode, BMDFrameFlags, BMDPixelFormat, BMDTimeScale, BMDTimeValue,
    BMDVideoOutputFlags, HRESULT, IDeckLinkDisplayModeIterator, IDeckLinkMutableVideoFrame,
    IDeckLinkOutput, IDeckLinkVideoFrame, IDeckLinkVideoOutputCallback,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_get_display_mode_iterator(
    output: *mut IDeckLinkOutput,
    iterator: *mut *mut IDeckLinkDisplayModeIterator,
) -> HRESULT {
    unsafe { vcall!(output, GetDisplayModeIterator, iterator) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_create_video_frame(
    output: *mut IDeckLinkOutput,
    width: i32,
    height: i32,
    row_bytes: i32,
    pixel_format: BMDPixelFormat,
    flags: BMDFrameFlags,
    out_frame: *mut *mut IDeckLinkMutableVideoFrame,
) -> HRESULT {
    unsafe {
        vcall!(
            output,
            CreateVideoFrame,
            width,
            height,
            row_bytes,
            pixel_format,
            flags,
            out_frame
        )
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_enable_video_output(
    output: *mut IDeckLinkOutput,
    display_mode: BMDDisplayMode,
    flags: BMDVideoOutputFlags,
) -> HRESULT {
    unsafe { vcall!(output, EnableVideoOutput, display_mode, flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_disable_video_output(
    output: *mut IDeckLinkOutput,
) -> HRESULT {
    unsafe { vcall!(output, DisableVideoOutput) }
}

/// Registers `callback` as the completion sink, or clears it with null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_set_scheduled_frame_completion_callback(
    output: *mut IDeckLinkOutput,
    callback: *mut IDeckLinkVideoOutputCallback,
) -> HRESULT {
    unsafe { vcall!(output, SetScheduledFrameCompletionCallback, callback) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_start_scheduled_playback(
    output: *mut IDeckLinkOutput,
    playback_start_time: BMDTimeValue,
    time_scale: BMDTimeScale,
    playback_speed: f64,
) -> HRESULT {
    unsafe {
        vcall!(
            output,
            StartScheduledPlayback,
            playback_start_time,
            time_scale,
            playback_speed
        )
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_stop_scheduled_playback(
    output: *mut IDeckLinkOutput,
    stop_playback_at_time: BMDTimeValue,
    actual_stop_time: *mut BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    unsafe {
        vcall!(
            output,
            StopScheduledPlayback,
            stop_playback_at_time,
            actual_stop_time,
            time_scale
        )
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_output_schedule_video_frame(
    output: *mut IDeckLinkOutput,
    frame: *mut IDeckLinkVideoFrame,
    display_time: BMDTimeValue,
    display_duration: BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    unsafe {
        vcall!(
            output,
            ScheduleVideoFrame,
            frame,
            display_time,
            display_duration,
            time_scale
        )
    }
}
