// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Video and audio capture.
//!
//! Capture is push based: enable the streams, register an [`InputCallback`]
//! and start streaming. The runtime then calls the handler from its own
//! capture thread, one notification at a time.
//!
//! # Examples
//!
//! ```no_run
//! use decklink::{
//!     AudioInputPacket, DeviceIterator, DisplayMode, InputCallback, PixelFormat, Result,
//!     VideoFrame, VideoInputFlags, VideoInputFrame,
//! };
//!
//! struct Counter(u64);
//!
//! impl InputCallback for Counter {
//!     fn video_input_frame_arrived(
//!         &mut self,
//!         video_frame: Option<VideoInputFrame>,
//!         _audio_packet: Option<AudioInputPacket>,
//!     ) -> Result<()> {
//!         if let Some(frame) = video_frame {
//!             self.0 += 1;
//!             println!("frame {} is {}x{}", self.0, frame.get_width(), frame.get_height());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let device = DeviceIterator::new()?.next().expect("no DeckLink device");
//! let input = device.query_input()?;
//! input.enable_video_input(
//!     DisplayMode::HD1080P25,
//!     PixelFormat::YUV_10BIT,
//!     VideoInputFlags::empty(),
//! )?;
//! let input = input.with_callback(Counter(0))?;
//! input.start_streams()?;
//! std::thread::sleep(std::time::Duration::from_secs(1));
//! input.stop_streams()?;
//! # Ok(())
//! # }
//! ```

use std::{
    ffi::c_void,
    ops::{Deref, DerefMut},
    ptr,
};

use decklink_sys::{
    BMDDetectedVideoInputFormatFlags, BMDVideoInputFormatChangedEvents, E_POINTER, HRESULT,
    IDeckLinkAudioInputPacket, IDeckLinkDisplayMode, IDeckLinkDisplayModeIterator,
    IDeckLinkInput, IDeckLinkInputCallback, IDeckLinkVideoInputFrame,
};
use tracing::{debug, error};

use crate::{
    AudioInputPacket, AudioSampleRate, AudioSampleType, DetectedVideoInputFormatFlags,
    DisplayMode, DisplayModeInfo, DisplayModeIterator, Error, HardwareReferenceClock, PixelFormat,
    Result, VideoInputFlags, VideoInputFormatChangedEvents, VideoInputFrame,
    callback::{InputCallbackEvents, relay},
    ffi,
    unknown::ComPtr,
};

/// Receives capture notifications.
///
/// Both methods default to doing nothing. An error is reported to the
/// runtime as the matching result code.
pub trait InputCallback {
    /// The input signal changed; only delivered when format detection is
    /// enabled.
    fn video_input_format_changed(
        &mut self,
        _notification_events: VideoInputFormatChangedEvents,
        _new_display_mode: Option<DisplayModeInfo>,
        _detected_signal_flags: DetectedVideoInputFormatFlags,
    ) -> Result<()> {
        Ok(())
    }

    /// A frame was captured. Either part may be missing, for example audio
    /// without a locked video signal.
    fn video_input_frame_arrived(
        &mut self,
        _video_frame: Option<VideoInputFrame>,
        _audio_packet: Option<AudioInputPacket>,
    ) -> Result<()> {
        Ok(())
    }
}

type BoxedInputCallback<'a> = Box<dyn InputCallback + Send + 'a>;

/// Event table routing input sink notifications to a [`BoxedInputCallback`]
/// identified by its address.
pub(crate) static INPUT_CALLBACK_DISPATCH: InputCallbackEvents = InputCallbackEvents {
    video_input_format_changed: dispatch_video_input_format_changed,
    video_input_frame_arrived: dispatch_video_input_frame_arrived,
};

unsafe extern "C" fn dispatch_video_input_format_changed(
    identity: *mut c_void,
    notification_events: BMDVideoInputFormatChangedEvents,
    new_display_mode: *mut IDeckLinkDisplayMode,
    detected_signal_flags: BMDDetectedVideoInputFormatFlags,
) -> HRESULT {
    let Some(handler) = (unsafe { identity.cast::<BoxedInputCallback>().as_mut() }) else {
        return E_POINTER;
    };
    let display_mode = unsafe { ComPtr::from_borrowed(new_display_mode) }.map(DisplayModeInfo::from_ptr);
    relay("VideoInputFormatChanged", || {
        handler.video_input_format_changed(
            VideoInputFormatChangedEvents::from_bits_truncate(notification_events),
            display_mode,
            DetectedVideoInputFormatFlags::from_bits_truncate(detected_signal_flags),
        )
    })
}

unsafe extern "C" fn dispatch_video_input_frame_arrived(
    identity: *mut c_void,
    video_frame: *mut IDeckLinkVideoInputFrame,
    audio_packet: *mut IDeckLinkAudioInputPacket,
) -> HRESULT {
    let Some(handler) = (unsafe { identity.cast::<BoxedInputCallback>().as_mut() }) else {
        return E_POINTER;
    };
    let video_frame = unsafe { ComPtr::from_borrowed(video_frame) }.map(VideoInputFrame::from_ptr);
    let audio_packet = unsafe { ComPtr::from_borrowed(audio_packet) }.map(AudioInputPacket::from_ptr);
    relay("VideoInputFrameArrived", || {
        handler.video_input_frame_arrived(video_frame, audio_packet)
    })
}

/// The capture interface of a device (`IDeckLinkInput`).
pub struct Input {
    input: ComPtr<IDeckLinkInput>,
}

impl Input {
    pub fn from_ptr(input: ComPtr<IDeckLinkInput>) -> Self {
        Input { input }
    }

    pub fn as_ptr(&self) -> &ComPtr<IDeckLinkInput> {
        &self.input
    }

    /// Lists the display modes this input can capture.
    pub fn get_display_mode_iterator(&self) -> Result<DisplayModeIterator> {
        let mut iterator: *mut IDeckLinkDisplayModeIterator = ptr::null_mut();
        Error::from_result(unsafe {
            ffi::decklink_input_get_display_mode_iterator(self.input.as_raw(), &mut iterator)
        })?;
        unsafe { ComPtr::from_raw(iterator) }
            .map(DisplayModeIterator::from_ptr)
            .ok_or(Error::InvalidPointer)
    }

    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if another process is capturing from
    /// the device.
    pub fn enable_video_input(
        &self,
        display_mode: DisplayMode,
        pixel_format: PixelFormat,
        flags: VideoInputFlags,
    ) -> Result<()> {
        debug!(%display_mode, %pixel_format, ?flags, "enabling video input");
        Error::from_result(unsafe {
            ffi::decklink_input_enable_video_input(
                self.input.as_raw(),
                display_mode.0,
                pixel_format.0,
                flags.bits(),
            )
        })
    }

    pub fn disable_video_input(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_input_disable_video_input(self.input.as_raw()) })
    }

    pub fn enable_audio_input(
        &self,
        sample_rate: AudioSampleRate,
        sample_type: AudioSampleType,
        channel_count: u32,
    ) -> Result<()> {
        Error::from_result(unsafe {
            ffi::decklink_input_enable_audio_input(
                self.input.as_raw(),
                sample_rate.0,
                sample_type.0,
                channel_count,
            )
        })
    }

    pub fn disable_audio_input(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_input_disable_audio_input(self.input.as_raw()) })
    }

    pub fn start_streams(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_input_start_streams(self.input.as_raw()) })
    }

    pub fn stop_streams(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_input_stop_streams(self.input.as_raw()) })
    }

    pub fn pause_streams(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_input_pause_streams(self.input.as_raw()) })
    }

    /// Discards frames that have been captured but not yet delivered.
    pub fn flush_streams(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_input_flush_streams(self.input.as_raw()) })
    }

    pub fn get_hardware_reference_clock(&self, time_scale: i64) -> Result<HardwareReferenceClock> {
        let mut clock = HardwareReferenceClock {
            hardware_time: 0,
            time_in_frame: 0,
            ticks_per_frame: 0,
        };
        Error::from_result(unsafe {
            ffi::decklink_input_get_hardware_reference_clock(
                self.input.as_raw(),
                time_scale,
                &mut clock.hardware_time,
                &mut clock.time_in_frame,
                &mut clock.ticks_per_frame,
            )
        })?;
        Ok(clock)
    }

    /// Registers `callback` as the notification handler, or clears the
    /// current one with `None`.
    ///
    /// # Safety
    ///
    /// The handler box must stay at the same address and alive until the
    /// registration has been cleared. [`Input::with_callback`] takes care of
    /// this.
    pub unsafe fn set_callback(&self, callback: Option<&mut BoxedInputCallback<'_>>) -> Result<()> {
        let sink: *mut IDeckLinkInputCallback = match callback {
            Some(callback) => {
                let identity: *mut BoxedInputCallback = callback;
                let sink = unsafe { ffi::create_decklink_input_callback(identity.cast()) };
                if sink.is_null() {
                    return Err(Error::OutOfMemory);
                }
                sink
            }
            None => ptr::null_mut(),
        };
        let result = unsafe { ffi::decklink_input_set_callback(self.input.as_raw(), sink) };
        if !sink.is_null() {
            // The runtime holds its own reference once registered.
            unsafe { ffi::unknown_release(sink.cast()) };
        }
        Error::from_result(result)
    }

    /// Registers `callback` for as long as the returned value lives.
    pub fn with_callback<C>(self, callback: C) -> Result<InputWithCallback>
    where
        C: InputCallback + Send + 'static,
    {
        let mut callback: Box<BoxedInputCallback<'static>> = Box::new(Box::new(callback));
        unsafe { self.set_callback(Some(&mut *callback)) }?;
        Ok(InputWithCallback {
            input: Some(self),
            callback: Some(callback),
        })
    }
}

/// An [`Input`] with a registered handler. Dropping it clears the
/// registration before the handler is freed.
pub struct InputWithCallback {
    input: Option<Input>,
    callback: Option<Box<BoxedInputCallback<'static>>>,
}

impl InputWithCallback {
    /// Clears the registration and gives the input back.
    ///
    /// # Errors
    ///
    /// If the runtime refuses to clear the handler, the handler is leaked
    /// rather than freed while still reachable.
    pub fn into_inner(mut self) -> Result<Input> {
        let input = self.input.take().ok_or(Error::InvalidHandle)?;
        match unsafe { input.set_callback(None) } {
            Ok(()) => Ok(input),
            Err(err) => {
                std::mem::forget(self.callback.take());
                Err(err)
            }
        }
    }
}

impl Deref for InputWithCallback {
    type Target = Input;

    fn deref(&self) -> &Input {
        // `input` is only taken by `into_inner` and `drop`, which consume `self`.
        self.input.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl DerefMut for InputWithCallback {
    fn deref_mut(&mut self) -> &mut Input {
        self.input.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl Drop for InputWithCallback {
    fn drop(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };
        if let Err(error) = unsafe { input.set_callback(None) } {
            error!(%error, "failed to clear input callback; leaking handler");
            std::mem::forget(self.callback.take());
        }
    }
}
