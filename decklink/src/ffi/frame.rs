// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Video frames, audio packets, timecodes and frame conversion.

use std::ffi::{c_long, c_void};

use decklink_sys::{
    BMDFrameFlags, BMDPixelFormat, BMDTimeScale, BMDTimeValue, BMDTimecodeFormat, HRESULT,
    IDeckLinkAudioInputPacket, IDeckLinkTimecode, IDeckLinkVideoConversion, IDeckLinkVideoFrame,
    IDeckLinkVideoInputFrame,
};

use crate::{buffer::Buffer, marshal::StringArg};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_width(frame: *mut IDeckLinkVideoFrame) -> c_long {
    unsafe { vcall!(frame, GetWidth) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_height(frame: *mut IDeckLinkVideoFrame) -> c_long {
    unsafe { vcall!(frame, GetHeight) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_row_bytes(
    frame: *mut IDeckLinkVideoFrame,
) -> c_long {
    unsafe { vcall!(frame, GetRowBytes) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_pixel_format(
    frame: *mut IDeckLinkVideoFrame,
) -> BMDPixelFormat {
    unsafe { vcall!(frame, GetPixelFormat) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_flags(
    frame: *mut IDeckLinkVideoFrame,
) -> BMDFrameFlags {
    unsafe { vcall!(frame, GetFlags) }
}

/// Exposes the frame's pixel memory. The memory belongs to the frame.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_bytes(
    frame: *mut IDeckLinkVideoFrame,
    bytes: *mut *mut c_void,
) -> HRESULT {
    unsafe { vcall!(frame, GetBytes, bytes) }
}

/// Returns `S_FALSE` with a null timecode when the frame carries none of `format`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_frame_get_timecode(
    frame: *mut IDeckLinkVideoFrame,
    format: BMDTimecodeFormat,
    timecode: *mut *mut IDeckLinkTimecode,
) -> HRESULT {
    unsafe { vcall!(frame, GetTimecode, format, timecode) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_input_frame_get_stream_time(
    frame: *mut IDeckLinkVideoInputFrame,
    frame_time: *mut BMDTimeValue,
    frame_duration: *mut BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    unsafe { vcall!(frame, GetStreamTime, frame_time, frame_duration, time_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_input_frame_get_hardware_reference_timestamp(
    frame: *mut IDeckLinkVideoInputFrame,
    time_scale: BMDTimeScale,
    frame_time: *mut BMDTimeValue,
    frame_duration: *mut BMDTimeValue,
) -> HRESULT {
    unsafe {
        vcall!(
            frame,
            GetHardwareReferenceTimestamp,
            time_scale,
            frame_time,
            frame_duration
        )
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_audio_input_packet_get_sample_frame_count(
    packet: *mut IDeckLinkAudioInputPacket,
) -> c_long {
    unsafe { vcall!(packet, GetSampleFrameCount) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_audio_input_packet_get_bytes(
    packet: *mut IDeckLinkAudioInputPacket,
    bytes: *mut *mut c_void,
) -> HRESULT {
    unsafe { vcall!(packet, GetBytes, bytes) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_audio_input_packet_get_packet_time(
    packet: *mut IDeckLinkAudioInputPacket,
    packet_time: *mut BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    unsafe { vcall!(packet, GetPacketTime, packet_time, time_scale) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_timecode_get_components(
    timecode: *mut IDeckLinkTimecode,
    hours: *mut u8,
    minutes: *mut u8,
    seconds: *mut u8,
    frames: *mut u8,
) -> HRESULT {
    unsafe { vcall!(timecode, GetComponents, hours, minutes, seconds, frames) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_timecode_get_string(
    timecode: *mut IDeckLinkTimecode,
    value: *mut *mut Buffer,
) -> HRESULT {
    let mut arg = unsafe { StringArg::new(value) };
    unsafe { vcall!(timecode, GetString, arg.as_out_ptr()) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_video_conversion_convert_frame(
    conversion: *mut IDeckLinkVideoConversion,
    src_frame: *mut IDeckLinkVideoFrame,
    dst_frame: *mut IDeckLinkVideoFrame,
) -> HRESULT {
    unsafe { vcall!(conversion, ConvertFrame, src_frame, dst_frame) }
}
