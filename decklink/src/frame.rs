// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Video frames and audio packets.
//!
//! Frames handed to callback handlers hold their own reference, so a handler
//! may keep a frame after returning; the runtime recycles the frame's memory
//! only once every reference is gone.

use std::{ffi::c_void, ptr, slice};

use decklink_sys::{
    IDeckLinkAudioInputPacket, IDeckLinkMutableVideoFrame, IDeckLinkTimecode, IDeckLinkVideoFrame,
    IDeckLinkVideoInputFrame,
};

use crate::{
    AudioSampleType, Error, FrameFlags, PixelFormat, Result, StreamTime, Timecode, TimecodeFormat,
    ffi, unknown::ComPtr,
};

/// Read access shared by every kind of video frame.
///
/// # Safety
///
/// Implementors must return a live `IDeckLinkVideoFrame` pointer that stays
/// valid for as long as `self` is borrowed.
pub unsafe trait VideoFrame {
    fn as_frame_ptr(&self) -> *mut IDeckLinkVideoFrame;

    fn get_width(&self) -> i64 {
        i64::from(unsafe { ffi::decklink_video_frame_get_width(self.as_frame_ptr()) })
    }

    fn get_height(&self) -> i64 {
        i64::from(unsafe { ffi::decklink_video_frame_get_height(self.as_frame_ptr()) })
    }

    /// Bytes per row, including any padding.
    fn get_row_bytes(&self) -> i64 {
        i64::from(unsafe { ffi::decklink_video_frame_get_row_bytes(self.as_frame_ptr()) })
    }

    fn get_pixel_format(&self) -> PixelFormat {
        PixelFormat(unsafe { ffi::decklink_video_frame_get_pixel_format(self.as_frame_ptr()) })
    }

    fn get_flags(&self) -> FrameFlags {
        FrameFlags::from_bits_truncate(unsafe {
            ffi::decklink_video_frame_get_flags(self.as_frame_ptr())
        })
    }

    /// The frame's pixel memory, `row_bytes * height` bytes long.
    fn get_bytes(&self) -> Result<&[u8]> {
        let data = frame_bytes(self.as_frame_ptr())?;
        let len = frame_len(self);
        Ok(unsafe { slice::from_raw_parts(data.cast::<u8>(), len) })
    }

    /// Returns `None` when the frame carries no timecode of `format`.
    fn get_timecode(&self, format: TimecodeFormat) -> Result<Option<Timecode>> {
        let mut timecode: *mut IDeckLinkTimecode = ptr::null_mut();
        let found = Error::from_optional_result(unsafe {
            ffi::decklink_video_frame_get_timecode(self.as_frame_ptr(), format.0, &mut timecode)
        })?;
        if !found {
            return Ok(None);
        }
        Ok(unsafe { ComPtr::from_raw(timecode) }.map(Timecode::from_ptr))
    }
}

fn frame_bytes(frame: *mut IDeckLinkVideoFrame) -> Result<*mut c_void> {
    let mut data: *mut c_void = ptr::null_mut();
    Error::from_result(unsafe { ffi::decklink_video_frame_get_bytes(frame, &mut data) })?;
    if data.is_null() {
        return Err(Error::InvalidPointer);
    }
    Ok(data)
}

/// Zero for bottom-up (negative row bytes) or nonsensical dimensions.
fn frame_len<F: VideoFrame + ?Sized>(frame: &F) -> usize {
    frame
        .get_row_bytes()
        .checked_mul(frame.get_height())
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(0)
}

/// A frame of any kind, such as a completed output frame.
pub struct VideoFrameRef {
    frame: ComPtr<IDeckLinkVideoFrame>,
}

impl VideoFrameRef {
    pub fn from_ptr(frame: ComPtr<IDeckLinkVideoFrame>) -> Self {
        VideoFrameRef { frame }
    }
}

unsafe impl VideoFrame for VideoFrameRef {
    fn as_frame_ptr(&self) -> *mut IDeckLinkVideoFrame {
        self.frame.as_raw()
    }
}

/// A captured frame.
pub struct VideoInputFrame {
    frame: ComPtr<IDeckLinkVideoInputFrame>,
}

impl VideoInputFrame {
    pub fn from_ptr(frame: ComPtr<IDeckLinkVideoInputFrame>) -> Self {
        VideoInputFrame { frame }
    }

    /// Capture time relative to the start of the stream.
    pub fn get_stream_time(&self, time_scale: i64) -> Result<StreamTime> {
        let mut value = 0;
        let mut duration = 0;
        Error::from_result(unsafe {
            ffi::decklink_video_input_frame_get_stream_time(
                self.frame.as_raw(),
                &mut value,
                &mut duration,
                time_scale,
            )
        })?;
        Ok(StreamTime {
            value,
            duration,
            time_scale,
        })
    }

    /// Arrival time on the hardware reference clock.
    pub fn get_hardware_reference_timestamp(&self, time_scale: i64) -> Result<StreamTime> {
        let mut value = 0;
        let mut duration = 0;
        Error::from_result(unsafe {
            ffi::decklink_video_input_frame_get_hardware_reference_timestamp(
                self.frame.as_raw(),
                time_scale,
                &mut value,
                &mut duration,
            )
        })?;
        Ok(StreamTime {
            value,
            duration,
            time_scale,
        })
    }
}

unsafe impl VideoFrame for VideoInputFrame {
    fn as_frame_ptr(&self) -> *mut IDeckLinkVideoFrame {
        self.frame.as_raw().cast()
    }
}

/// A frame allocated by an [`Output`](crate::Output) for playback.
pub struct MutableVideoFrame {
    frame: ComPtr<IDeckLinkMutableVideoFrame>,
}

impl MutableVideoFrame {
    pub fn from_ptr(frame: ComPtr<IDeckLinkMutableVideoFrame>) -> Self {
        MutableVideoFrame { frame }
    }

    /// Writable pixel memory, `row_bytes * height` bytes long.
    pub fn get_bytes_mut(&mut self) -> Result<&mut [u8]> {
        let data = frame_bytes(self.as_frame_ptr())?;
        let len = frame_len(&*self);
        Ok(unsafe { slice::from_raw_parts_mut(data.cast::<u8>(), len) })
    }
}

unsafe impl VideoFrame for MutableVideoFrame {
    fn as_frame_ptr(&self) -> *mut IDeckLinkVideoFrame {
        self.frame.as_raw().cast()
    }
}

/// Audio captured alongside a video frame.
pub struct AudioInputPacket {
    packet: ComPtr<IDeckLinkAudioInputPacket>,
}

impl AudioInputPacket {
    pub fn from_ptr(packet: ComPtr<IDeckLinkAudioInputPacket>) -> Self {
        AudioInputPacket { packet }
    }

    /// Number of sample frames (one sample per channel) in the packet.
    pub fn get_sample_frame_count(&self) -> i64 {
        i64::from(unsafe {
            ffi::decklink_audio_input_packet_get_sample_frame_count(self.packet.as_raw())
        })
    }

    /// Interleaved samples, laid out as enabled on the input.
    ///
    /// The packet does not report the size of its buffer; it is derived from
    /// the sample frame count and the layout passed in here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArg`] if the computed size does not fit in
    /// memory.
    ///
    /// # Safety
    ///
    /// `sample_type` and `channel_count` must be the ones the input was
    /// enabled with through [`Input::enable_audio_input`](crate::Input::enable_audio_input).
    /// A larger layout yields a slice reaching past the native buffer.
    pub unsafe fn get_bytes(
        &self,
        sample_type: AudioSampleType,
        channel_count: u32,
    ) -> Result<&[u8]> {
        let frames = usize::try_from(self.get_sample_frame_count()).unwrap_or(0);
        let len = usize::try_from(channel_count)
            .ok()
            .and_then(|channels| frames.checked_mul(channels))
            .and_then(|samples| samples.checked_mul(sample_type.bytes_per_sample()))
            .ok_or(Error::InvalidArg)?;
        let mut data: *mut c_void = ptr::null_mut();
        Error::from_result(unsafe {
            ffi::decklink_audio_input_packet_get_bytes(self.packet.as_raw(), &mut data)
        })?;
        if data.is_null() {
            return Err(Error::InvalidPointer);
        }
        Ok(unsafe { slice::from_raw_parts(data.cast::<u8>(), len) })
    }

    pub fn get_packet_time(&self, time_scale: i64) -> Result<i64> {
        let mut packet_time = 0;
        Error::from_result(unsafe {
            ffi::decklink_audio_input_packet_get_packet_time(
                self.packet.as_raw(),
                &mut packet_time,
                time_scale,
            )
        })?;
        Ok(packet_time)
    }
}
