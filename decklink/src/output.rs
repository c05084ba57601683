// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Scheduled video playback.
//!
//! Frames are created by the output, filled, and scheduled for display at a
//! stream time. A [`VideoOutputCallback`] learns when each scheduled frame
//! has been displayed (or dropped) so it can be refilled and scheduled again.

use std::{
    ffi::c_void,
    ops::{Deref, DerefMut},
    ptr,
};

use decklink_sys::{
    BMDOutputFrameCompletionResult, E_POINTER, HRESULT, IDeckLinkDisplayModeIterator,
    IDeckLinkMutableVideoFrame, IDeckLinkOutput, IDeckLinkVideoFrame,
    IDeckLinkVideoOutputCallback,
};
use tracing::{debug, error};

use crate::{
    DisplayMode, DisplayModeIterator, Error, FrameFlags, MutableVideoFrame,
    OutputFrameCompletionResult, PixelFormat, Result, VideoFrame, VideoFrameRef, VideoOutputFlags,
    callback::{OutputCallbackEvents, relay},
    ffi,
    unknown::ComPtr,
};

/// Receives scheduled playback notifications.
pub trait VideoOutputCallback {
    fn scheduled_frame_completed(
        &mut self,
        _completed_frame: Option<VideoFrameRef>,
        _result: OutputFrameCompletionResult,
    ) -> Result<()> {
        Ok(())
    }

    /// Playback stopped after [`Output::stop_scheduled_playback`].
    fn scheduled_playback_has_stopped(&mut self) -> Result<()> {
        Ok(())
    }
}

type BoxedOutputCallback<'a> = Box<dyn VideoOutputCallback + Send + 'a>;

pub(crate) static OUTPUT_CALLBACK_DISPATCH: OutputCallbackEvents = OutputCallbackEvents {
    scheduled_frame_completed: dispatch_scheduled_frame_completed,
    scheduled_playback_has_stopped: dispatch_scheduled_playback_has_stopped,
};

unsafe extern "C" fn dispatch_scheduled_frame_completed(
    identity: *mut c_void,
    completed_frame: *mut IDeckLinkVideoFrame,
    result: BMDOutputFrameCompletionResult,
) -> HRESULT {
    let Some(handler) = (unsafe { identity.cast::<BoxedOutputCallback>().as_mut() }) else {
        return E_POINTER;
    };
    let completed_frame = unsafe { ComPtr::from_borrowed(completed_frame) }.map(VideoFrameRef::from_ptr);
    relay("ScheduledFrameCompleted", || {
        handler.scheduled_frame_completed(completed_frame, OutputFrameCompletionResult(result))
    })
}

unsafe extern "C" fn dispatch_scheduled_playback_has_stopped(identity: *mut c_void) -> HRESULT {
    let Some(handler) = (unsafe { identity.cast::<BoxedOutputCallback>().as_mut() }) else {
        return E_POINTER;
    };
    relay("ScheduledPlaybackHasStopped", || handler.scheduled_playback_has_stopped())
}

/// The playback interface of a device (`IDeckLinkOutput`).
pub struct Output {
    output: ComPtr<IDeckLinkOutput>,
}

impl Output {
    pub fn from_ptr(output: ComPtr<IDeckLinkOutput>) -> Self {
        Output { output }
    }

    pub fn as_ptr(&self) -> &ComPtr<IDeckLinkOutput> {
        &self.output
    }

    pub fn get_display_mode_iterator(&self) -> Result<DisplayModeIterator> {
        let mut iterator: *mut IDeckLinkDisplayModeIterator = ptr::null_mut();
        Error::from_result(unsafe {
            ffi::decklink_output_get_display_mode_iterator(self.output.as_raw(), &mut iterator)
        })?;
        unsafe { ComPtr::from_raw(iterator) }
            .map(DisplayModeIterator::from_ptr)
            .ok_or(Error::InvalidPointer)
    }

    /// Allocates a frame from the output's frame pool.
    pub fn create_video_frame(
        &self,
        width: i32,
        height: i32,
        row_bytes: i32,
        pixel_format: PixelFormat,
        flags: FrameFlags,
    ) -> Result<MutableVideoFrame> {
        let mut frame: *mut IDeckLinkMutableVideoFrame = ptr::null_mut();
        Error::from_result(unsafe {
            ffi::decklink_output_create_video_frame(
                self.output.as_raw(),
                width,
                height,
                row_bytes,
                pixel_format.0,
                flags.bits(),
                &mut frame,
            )
        })?;
        unsafe { ComPtr::from_raw(frame) }
            .map(MutableVideoFrame::from_ptr)
            .ok_or(Error::OutOfMemory)
    }

    pub fn enable_video_output(&self, display_mode: DisplayMode, flags: VideoOutputFlags) -> Result<()> {
        debug!(%display_mode, ?flags, "enabling video output");
        Error::from_result(unsafe {
            ffi::decklink_output_enable_video_output(self.output.as_raw(), display_mode.0, flags.bits())
        })
    }

    pub fn disable_video_output(&self) -> Result<()> {
        Error::from_result(unsafe { ffi::decklink_output_disable_video_output(self.output.as_raw()) })
    }

    /// Queues `frame` for display at `display_time`. The output keeps its own
    /// reference to the frame until it has been displayed.
    pub fn schedule_video_frame(
        &self,
        frame: &impl VideoFrame,
        display_time: i64,
        display_duration: i64,
        time_scale: i64,
    ) -> Result<()> {
        Error::from_result(unsafe {
            ffi::decklink_output_schedule_video_frame(
                self.output.as_raw(),
                frame.as_frame_ptr(),
                display_time,
                display_duration,
                time_scale,
            )
        })
    }

    pub fn start_scheduled_playback(
        &self,
        playback_start_time: i64,
        time_scale: i64,
        playback_speed: f64,
    ) -> Result<()> {
        Error::from_result(unsafe {
            ffi::decklink_output_start_scheduled_playback(
                self.output.as_raw(),
                playback_start_time,
                time_scale,
                playback_speed,
            )
        })
    }

    /// Stops playback at `stop_playback_at_time` (0 stops immediately) and
    /// returns the time playback actually stopped at.
    pub fn stop_scheduled_playback(&self, stop_playback_at_time: i64, time_scale: i64) -> Result<i64> {
        let mut actual_stop_time = 0;
        Error::from_result(unsafe {
            ffi::decklink_output_stop_scheduled_playback(
                self.output.as_raw(),
                stop_playback_at_time,
                &mut actual_stop_time,
                time_scale,
            )
        })?;
        Ok(actual_stop_time)
    }

    /// Registers `callback` as the completion handler, or clears the current
    /// one with `None`.
    ///
    /// # Safety
    ///
    /// The handler box must stay at the same address and alive until the
    /// registration has been cleared. [`Output::with_callback`] takes care of
    /// this.
    pub unsafe fn set_callback(&self, callback: Option<&mut BoxedOutputCallback<'_>>) -> Result<()> {
        let sink: *mut IDeckLinkVideoOutputCallback = match callback {
            Some(callback) => {
                let identity: *mut BoxedOutputCallback = callback;
                let sink = unsafe { ffi::create_decklink_video_output_callback(identity.cast()) };
                if sink.is_null() {
                    return Err(Error::OutOfMemory);
                }
                sink
            }
            None => ptr::null_mut(),
        };
        let result = unsafe {
            ffi::decklink_output_set_scheduled_frame_completion_callback(self.output.as_raw(), sink)
        };
        if !sink.is_null() {
            unsafe { ffi::unknown_release(sink.cast()) };
        }
        Error::from_result(result)
    }

    pub fn with_callback<C>(self, callback: C) -> Result<OutputWithCallback>
    where
        C: VideoOutputCallback + Send + 'static,
    {
        let mut callback: Box<BoxedOutputCallback<'static>> = Box::new(Box::new(callback));
        unsafe { self.set_callback(Some(&mut *callback)) }?;
        Ok(OutputWithCallback {
            output: Some(self),
            callback: Some(callback),
        })
    }
}

/// An [`Output`] with a registered completion handler.
pub struct OutputWithCallback {
    output: Option<Output>,
    callback: Option<Box<BoxedOutputCallback<'static>>>,
}

impl OutputWithCallback {
    /// Clears the registration and gives the output back.
    pub fn into_inner(mut self) -> Result<Output> {
        let output = self.output.take().ok_or(Error::InvalidHandle)?;
        match unsafe { output.set_callback(None) } {
            Ok(()) => Ok(output),
            Err(err) => {
                std::mem::forget(self.callback.take());
                Err(err)
            }
        }
    }
}

impl Deref for OutputWithCallback {
    type Target = Output;

    fn deref(&self) -> &Output {
        self.output.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl DerefMut for OutputWithCallback {
    fn deref_mut(&mut self) -> &mut Output {
        self.output.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl Drop for OutputWithCallback {
    fn drop(&mut self) {
        let Some(output) = self.output.take() else {
            return;
        };
        if let Err(error) = unsafe { output.set_callback(None) } {
            error!(%error, "failed to clear output callback; leaking handler");
            std::mem::forget(self.callback.take());
        }
    }
}
