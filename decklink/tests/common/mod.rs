// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Fake native objects for integration tests.
//!
//! Each fake is a `#[repr(C)]` struct whose first field is a vtable pointer,
//! exactly like an object handed out by the DeckLink runtime, followed by a
//! reference counter and whatever state the test wants to observe. Fakes are
//! owned by the test through a `Box`; `Release` only counts, so the counter
//! can still be inspected after the code under test has let go.

#![allow(dead_code)]

use std::{
    cell::UnsafeCell,
    ffi::{CStr, c_void},
    ptr,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicI32, AtomicPtr, AtomicU32, AtomicUsize, Ordering},
    },
};

use decklink_sys::*;

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: std::sync::Once = std::sync::Once::new();

/// Initializes logging (respects the `RUST_LOG` environment variable).
pub fn init_logging() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_test_writer()
            .init();
    });
}

/// Produces a string the way the runtime does: `malloc`ed UTF-8 on Linux, a
/// created `CFString` on macOS. Ownership passes to the receiver.
#[cfg(not(target_os = "macos"))]
pub fn native_string(text: &CStr) -> DLString {
    unsafe { libc::strdup(text.as_ptr()) }
}

#[cfg(target_os = "macos")]
pub fn native_string(text: &CStr) -> DLString {
    use core_foundation_sys::{
        base::kCFAllocatorDefault,
        string::{CFStringCreateWithCString, kCFStringEncodingUTF8},
    };
    unsafe { CFStringCreateWithCString(kCFAllocatorDefault, text.as_ptr(), kCFStringEncodingUTF8) }
}

/// Common prefix of every fake.
#[repr(C)]
struct FakeHeader {
    vtbl: *const c_void,
    refs: AtomicU32,
}

/// Returns the new count, as native objects do.
unsafe extern "system" fn fake_add_ref(this: *mut IUnknown) -> ULONG {
    let header = unsafe { &*this.cast::<FakeHeader>() };
    (header.refs.fetch_add(1, Ordering::SeqCst) + 1) as ULONG
}

unsafe extern "system" fn fake_release(this: *mut IUnknown) -> ULONG {
    let header = unsafe { &*this.cast::<FakeHeader>() };
    (header.refs.fetch_sub(1, Ordering::SeqCst) - 1) as ULONG
}

unsafe extern "system" fn fake_query_interface(
    this: *mut IUnknown,
    iid: REFIID,
    ppv: *mut LPVOID,
) -> HRESULT {
    if iid == IID_IUnknown {
        unsafe {
            fake_add_ref(this);
            *ppv = this.cast();
        }
        S_OK
    } else {
        unsafe { *ppv = ptr::null_mut() };
        E_NOINTERFACE
    }
}

const FAKE_UNKNOWN: IUnknownVtbl = IUnknownVtbl {
    QueryInterface: fake_query_interface,
    AddRef: fake_add_ref,
    Release: fake_release,
};

macro_rules! fake_refs {
    ($name:ident) => {
        impl $name {
            /// References currently held on the fake.
            pub fn refs(&self) -> u32 {
                self.refs.load(Ordering::SeqCst)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// IUnknown

#[repr(C)]
pub struct FakeUnknown {
    vtbl: *const IUnknownVtbl,
    refs: AtomicU32,
}

fake_refs!(FakeUnknown);

static FAKE_UNKNOWN_VTBL: IUnknownVtbl = FAKE_UNKNOWN;

impl FakeUnknown {
    pub fn new() -> Box<Self> {
        Box::new(FakeUnknown {
            vtbl: &FAKE_UNKNOWN_VTBL,
            refs: AtomicU32::new(1),
        })
    }

    pub fn as_ptr(&self) -> *mut IUnknown {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkDisplayMode

#[repr(C)]
pub struct FakeDisplayMode {
    vtbl: *const IDeckLinkDisplayModeVtbl,
    refs: AtomicU32,
    pub mode: BMDDisplayMode,
    pub name: &'static CStr,
    pub width: i32,
    pub height: i32,
    pub frame_duration: i64,
    pub time_scale: i64,
}

fake_refs!(FakeDisplayMode);

static FAKE_DISPLAY_MODE_VTBL: IDeckLinkDisplayModeVtbl = IDeckLinkDisplayModeVtbl {
    base: FAKE_UNKNOWN,
    GetName: display_mode_get_name,
    GetDisplayMode: display_mode_get_display_mode,
    GetWidth: display_mode_get_width,
    GetHeight: display_mode_get_height,
    GetFrameRate: display_mode_get_frame_rate,
    GetFieldDominance: display_mode_get_field_dominance,
    GetFlags: display_mode_get_flags,
};

fn display_mode<'a>(this: *mut IDeckLinkDisplayMode) -> &'a FakeDisplayMode {
    unsafe { &*this.cast::<FakeDisplayMode>() }
}

unsafe extern "system" fn display_mode_get_name(
    this: *mut IDeckLinkDisplayMode,
    name: *mut DLString,
) -> HRESULT {
    unsafe { *name = native_string(display_mode(this).name) };
    S_OK
}

unsafe extern "system" fn display_mode_get_display_mode(this: *mut IDeckLinkDisplayMode) -> BMDDisplayMode {
    display_mode(this).mode
}

unsafe extern "system" fn display_mode_get_width(this: *mut IDeckLinkDisplayMode) -> LONG {
    display_mode(this).width as LONG
}

unsafe extern "system" fn display_mode_get_height(this: *mut IDeckLinkDisplayMode) -> LONG {
    display_mode(this).height as LONG
}

unsafe extern "system" fn display_mode_get_frame_rate(
    this: *mut IDeckLinkDisplayMode,
    frame_duration: *mut BMDTimeValue,
    time_scale: *mut BMDTimeScale,
) -> HRESULT {
    let mode = display_mode(this);
    unsafe {
        *frame_duration = mode.frame_duration;
        *time_scale = mode.time_scale;
    }
    S_OK
}

unsafe extern "system" fn display_mode_get_field_dominance(
    _this: *mut IDeckLinkDisplayMode,
) -> BMDFieldDominance {
    bmdProgressiveFrame
}

unsafe extern "system" fn display_mode_get_flags(_this: *mut IDeckLinkDisplayMode) -> BMDDisplayModeFlags {
    0
}

impl FakeDisplayMode {
    /// 1080p25.
    pub fn hd1080p25() -> Box<Self> {
        Box::new(FakeDisplayMode {
            vtbl: &FAKE_DISPLAY_MODE_VTBL,
            refs: AtomicU32::new(1),
            mode: bmdModeHD1080p25,
            name: c"1080p25",
            width: 1920,
            height: 1080,
            frame_duration: 1000,
            time_scale: 25000,
        })
    }

    /// 720p50.
    pub fn hd720p50() -> Box<Self> {
        Box::new(FakeDisplayMode {
            vtbl: &FAKE_DISPLAY_MODE_VTBL,
            refs: AtomicU32::new(1),
            mode: bmdModeHD720p50,
            name: c"720p50",
            width: 1280,
            height: 720,
            frame_duration: 1000,
            time_scale: 50000,
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkDisplayMode {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkVideoInputFrame and IDeckLinkMutableVideoFrame

/// A frame backed by a `Vec`. The same fake serves captured frames and frames
/// created by an output; only the vtable differs.
#[repr(C)]
pub struct FakeVideoFrame {
    vtbl: *const c_void,
    refs: AtomicU32,
    pub width: i32,
    pub height: i32,
    pub row_bytes: i32,
    pub pixel_format: BMDPixelFormat,
    pub flags: BMDFrameFlags,
    pixels: UnsafeCell<Vec<u8>>,
    pub stream_time: BMDTimeValue,
    pub timecode: Option<Box<FakeTimecode>>,
    /// Format of the most recent timecode request.
    pub timecode_format: AtomicU32,
}

fake_refs!(FakeVideoFrame);

const FAKE_FRAME_BASE: IDeckLinkVideoFrameVtbl = IDeckLinkVideoFrameVtbl {
    base: FAKE_UNKNOWN,
    GetWidth: frame_get_width,
    GetHeight: frame_get_height,
    GetRowBytes: frame_get_row_bytes,
    GetPixelFormat: frame_get_pixel_format,
    GetFlags: frame_get_flags,
    GetBytes: frame_get_bytes,
    GetTimecode: frame_get_timecode,
    GetAncillaryData: frame_get_ancillary_data,
};

static FAKE_VIDEO_FRAME_VTBL: IDeckLinkVideoInputFrameVtbl = IDeckLinkVideoInputFrameVtbl {
    base: FAKE_FRAME_BASE,
    Destructors: [None, None],
    GetStreamTime: frame_get_stream_time,
    GetHardwareReferenceTimestamp: frame_get_hardware_reference_timestamp,
};

static FAKE_MUTABLE_FRAME_VTBL: IDeckLinkMutableVideoFrameVtbl = IDeckLinkMutableVideoFrameVtbl {
    base: FAKE_FRAME_BASE,
    Destructors: [None, None],
    SetFlags: mutable_frame_set_flags,
    SetTimecode: mutable_frame_set_timecode,
    SetTimecodeFromComponents: mutable_frame_set_timecode_from_components,
    SetAncillaryData: mutable_frame_set_ancillary_data,
    SetTimecodeUserBits: mutable_frame_set_timecode_user_bits,
};

fn frame<'a, T>(this: *mut T) -> &'a FakeVideoFrame {
    unsafe { &*this.cast::<FakeVideoFrame>() }
}

unsafe extern "system" fn frame_get_width(this: *mut IDeckLinkVideoFrame) -> LONG {
    frame(this).width as LONG
}

unsafe extern "system" fn frame_get_height(this: *mut IDeckLinkVideoFrame) -> LONG {
    frame(this).height as LONG
}

unsafe extern "system" fn frame_get_row_bytes(this: *mut IDeckLinkVideoFrame) -> LONG {
    frame(this).row_bytes as LONG
}

unsafe extern "system" fn frame_get_pixel_format(this: *mut IDeckLinkVideoFrame) -> BMDPixelFormat {
    frame(this).pixel_format
}

unsafe extern "system" fn frame_get_flags(this: *mut IDeckLinkVideoFrame) -> BMDFrameFlags {
    frame(this).flags
}

unsafe extern "system" fn frame_get_bytes(this: *mut IDeckLinkVideoFrame, buffer: *mut LPVOID) -> HRESULT {
    unsafe { *buffer = (*frame(this).pixels.get()).as_mut_ptr().cast() };
    S_OK
}

/// `S_FALSE` when the fake carries no timecode.
unsafe extern "system" fn frame_get_timecode(
    this: *mut IDeckLinkVideoFrame,
    format: BMDTimecodeFormat,
    timecode: *mut *mut IDeckLinkTimecode,
) -> HRESULT {
    let fake = frame(this);
    fake.timecode_format.store(format, Ordering::SeqCst);
    match &fake.timecode {
        Some(attached) => unsafe {
            fake_add_ref(attached.as_ptr().cast());
            *timecode = attached.as_ptr();
            S_OK
        },
        None => unsafe {
            *timecode = ptr::null_mut();
            S_FALSE
        },
    }
}

unsafe extern "system" fn frame_get_ancillary_data(
    _this: *mut IDeckLinkVideoFrame,
    _ancillary: *mut LPVOID,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn frame_get_stream_time(
    this: *mut IDeckLinkVideoInputFrame,
    frame_time: *mut BMDTimeValue,
    frame_duration: *mut BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    unsafe {
        *frame_time = frame(this).stream_time;
        *frame_duration = time_scale / 25;
    }
    S_OK
}

unsafe extern "system" fn frame_get_hardware_reference_timestamp(
    _this: *mut IDeckLinkVideoInputFrame,
    _time_scale: BMDTimeScale,
    _frame_time: *mut BMDTimeValue,
    _frame_duration: *mut BMDTimeValue,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn mutable_frame_set_flags(
    _this: *mut IDeckLinkMutableVideoFrame,
    _flags: BMDFrameFlags,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn mutable_frame_set_timecode(
    _this: *mut IDeckLinkMutableVideoFrame,
    _format: BMDTimecodeFormat,
    _timecode: *mut IDeckLinkTimecode,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn mutable_frame_set_timecode_from_components(
    _this: *mut IDeckLinkMutableVideoFrame,
    _format: BMDTimecodeFormat,
    _hours: u8,
    _minutes: u8,
    _seconds: u8,
    _frames: u8,
    _flags: BMDTimecodeFlags,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn mutable_frame_set_ancillary_data(
    _this: *mut IDeckLinkMutableVideoFrame,
    _ancillary: *mut c_void,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn mutable_frame_set_timecode_user_bits(
    _this: *mut IDeckLinkMutableVideoFrame,
    _format: BMDTimecodeFormat,
    _user_bits: BMDTimecodeUserBits,
) -> HRESULT {
    E_NOTIMPL
}

impl FakeVideoFrame {
    fn with_vtbl(
        vtbl: *const c_void,
        width: i32,
        height: i32,
        row_bytes: i32,
        pixel_format: BMDPixelFormat,
        pixels: Vec<u8>,
    ) -> Box<Self> {
        Box::new(FakeVideoFrame {
            vtbl,
            refs: AtomicU32::new(1),
            width,
            height,
            row_bytes,
            pixel_format,
            flags: bmdFrameFlagDefault,
            pixels: UnsafeCell::new(pixels),
            stream_time: 0,
            timecode: None,
            timecode_format: AtomicU32::new(0),
        })
    }

    /// A small 8-bit ARGB frame whose pixel bytes count up from zero.
    pub fn argb(width: i32, height: i32) -> Box<Self> {
        let row_bytes = width * 4;
        let pixels = (0..row_bytes * height).map(|i| i as u8).collect();
        Self::with_vtbl(
            (&raw const FAKE_VIDEO_FRAME_VTBL).cast(),
            width,
            height,
            row_bytes,
            bmdFormat8BitARGB,
            pixels,
        )
    }

    /// A zero-filled frame as handed out by an output.
    pub fn mutable(
        width: i32,
        height: i32,
        row_bytes: i32,
        pixel_format: BMDPixelFormat,
        flags: BMDFrameFlags,
    ) -> Box<Self> {
        let len = usize::try_from(row_bytes * height).unwrap_or(0);
        let mut frame = Self::with_vtbl(
            (&raw const FAKE_MUTABLE_FRAME_VTBL).cast(),
            width,
            height,
            row_bytes,
            pixel_format,
            vec![0; len],
        );
        frame.flags = flags;
        frame
    }

    /// Reports a negative row pitch, as frames stored bottom-up do.
    pub fn bottom_up(mut self: Box<Self>) -> Box<Self> {
        self.row_bytes = -self.row_bytes;
        self.flags |= bmdFrameFlagFlipVertical;
        self
    }

    pub fn with_timecode(mut self: Box<Self>, timecode: Box<FakeTimecode>) -> Box<Self> {
        self.timecode = Some(timecode);
        self
    }

    pub fn pixels(&self) -> &[u8] {
        unsafe { &*self.pixels.get() }
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkVideoInputFrame {
        (self as *const Self).cast_mut().cast()
    }

    pub fn as_mutable_ptr(&self) -> *mut IDeckLinkMutableVideoFrame {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkTimecode

#[repr(C)]
pub struct FakeTimecode {
    vtbl: *const IDeckLinkTimecodeVtbl,
    refs: AtomicU32,
    pub components: [u8; 4],
    pub text: Option<&'static CStr>,
}

fake_refs!(FakeTimecode);

static FAKE_TIMECODE_VTBL: IDeckLinkTimecodeVtbl = IDeckLinkTimecodeVtbl {
    base: FAKE_UNKNOWN,
    GetBCD: timecode_get_bcd,
    GetComponents: timecode_get_components,
    GetString: timecode_get_string,
    GetFlags: timecode_get_flags,
    GetTimecodeUserBits: timecode_get_user_bits,
};

fn timecode<'a>(this: *mut IDeckLinkTimecode) -> &'a FakeTimecode {
    unsafe { &*this.cast::<FakeTimecode>() }
}

unsafe extern "system" fn timecode_get_bcd(this: *mut IDeckLinkTimecode) -> BMDTimecodeBCD {
    timecode(this)
        .components
        .iter()
        .fold(0, |bcd, &field| (bcd << 8) | (u32::from(field / 10) << 4) | u32::from(field % 10))
}

unsafe extern "system" fn timecode_get_components(
    this: *mut IDeckLinkTimecode,
    hours: *mut u8,
    minutes: *mut u8,
    seconds: *mut u8,
    frames: *mut u8,
) -> HRESULT {
    let [h, m, s, f] = timecode(this).components;
    unsafe {
        *hours = h;
        *minutes = m;
        *seconds = s;
        *frames = f;
    }
    S_OK
}

/// Reports success without a string when no text is configured.
unsafe extern "system" fn timecode_get_string(
    this: *mut IDeckLinkTimecode,
    text: *mut DLString,
) -> HRESULT {
    unsafe {
        *text = match timecode(this).text {
            Some(value) => native_string(value),
            None => ptr::null_mut(),
        }
    };
    S_OK
}

unsafe extern "system" fn timecode_get_flags(_this: *mut IDeckLinkTimecode) -> BMDTimecodeFlags {
    bmdTimecodeFlagDefault
}

unsafe extern "system" fn timecode_get_user_bits(
    _this: *mut IDeckLinkTimecode,
    _user_bits: *mut BMDTimecodeUserBits,
) -> HRESULT {
    E_NOTIMPL
}

impl FakeTimecode {
    pub fn new(components: [u8; 4], text: Option<&'static CStr>) -> Box<Self> {
        Box::new(FakeTimecode {
            vtbl: &FAKE_TIMECODE_VTBL,
            refs: AtomicU32::new(1),
            components,
            text,
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkTimecode {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkAudioInputPacket

#[repr(C)]
pub struct FakeAudioPacket {
    vtbl: *const IDeckLinkAudioInputPacketVtbl,
    refs: AtomicU32,
    pub sample_frame_count: i32,
    /// Handed out as the packet's memory; empty reports a null buffer.
    pub samples: Vec<u8>,
    /// Packet time in 48 kHz ticks.
    pub packet_time: BMDTimeValue,
}

fake_refs!(FakeAudioPacket);

static FAKE_AUDIO_PACKET_VTBL: IDeckLinkAudioInputPacketVtbl = IDeckLinkAudioInputPacketVtbl {
    base: FAKE_UNKNOWN,
    GetSampleFrameCount: audio_packet_get_sample_frame_count,
    GetBytes: audio_packet_get_bytes,
    GetPacketTime: audio_packet_get_packet_time,
};

fn audio_packet<'a>(this: *mut IDeckLinkAudioInputPacket) -> &'a FakeAudioPacket {
    unsafe { &*this.cast::<FakeAudioPacket>() }
}

unsafe extern "system" fn audio_packet_get_sample_frame_count(
    this: *mut IDeckLinkAudioInputPacket,
) -> LONG {
    audio_packet(this).sample_frame_count as LONG
}

unsafe extern "system" fn audio_packet_get_bytes(
    this: *mut IDeckLinkAudioInputPacket,
    buffer: *mut LPVOID,
) -> HRESULT {
    let samples = &audio_packet(this).samples;
    unsafe {
        *buffer = if samples.is_empty() {
            ptr::null_mut()
        } else {
            samples.as_ptr().cast_mut().cast()
        }
    };
    S_OK
}

unsafe extern "system" fn audio_packet_get_packet_time(
    this: *mut IDeckLinkAudioInputPacket,
    packet_time: *mut BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    if time_scale <= 0 {
        return E_INVALIDARG;
    }
    unsafe { *packet_time = audio_packet(this).packet_time * time_scale / 48_000 };
    S_OK
}

impl FakeAudioPacket {
    pub fn new(sample_frame_count: i32, samples: Vec<u8>) -> Box<Self> {
        Box::new(FakeAudioPacket {
            vtbl: &FAKE_AUDIO_PACKET_VTBL,
            refs: AtomicU32::new(1),
            sample_frame_count,
            samples,
            packet_time: 0,
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkAudioInputPacket {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLink

#[repr(C)]
pub struct FakeDevice {
    vtbl: *const IDeckLinkVtbl,
    refs: AtomicU32,
    pub model_name: &'static CStr,
    pub display_name: Option<&'static CStr>,
    pub input: Option<Box<FakeInput>>,
}

fake_refs!(FakeDevice);

static FAKE_DEVICE_VTBL: IDeckLinkVtbl = IDeckLinkVtbl {
    base: IUnknownVtbl {
        QueryInterface: device_query_interface,
        AddRef: fake_add_ref,
        Release: fake_release,
    },
    GetModelName: device_get_model_name,
    GetDisplayName: device_get_display_name,
};

fn device<'a>(this: *mut IDeckLink) -> &'a FakeDevice {
    unsafe { &*this.cast::<FakeDevice>() }
}

unsafe extern "system" fn device_query_interface(
    this: *mut IUnknown,
    iid: REFIID,
    ppv: *mut LPVOID,
) -> HRESULT {
    match &device(this.cast()).input {
        Some(input) if iid == IID_IDeckLinkInput => unsafe {
            fake_add_ref(FakeInput::as_ptr(input).cast());
            *ppv = FakeInput::as_ptr(input).cast();
            S_OK
        },
        _ => unsafe { fake_query_interface(this, iid, ppv) },
    }
}

unsafe extern "system" fn device_get_model_name(this: *mut IDeckLink, name: *mut DLString) -> HRESULT {
    unsafe { *name = native_string(device(this).model_name) };
    S_OK
}

/// Reports success without a string when no display name is configured.
unsafe extern "system" fn device_get_display_name(this: *mut IDeckLink, name: *mut DLString) -> HRESULT {
    unsafe {
        *name = match device(this).display_name {
            Some(display_name) => native_string(display_name),
            None => ptr::null_mut(),
        }
    };
    S_OK
}

impl FakeDevice {
    pub fn new(model_name: &'static CStr, display_name: Option<&'static CStr>) -> Box<Self> {
        Box::new(FakeDevice {
            vtbl: &FAKE_DEVICE_VTBL,
            refs: AtomicU32::new(1),
            model_name,
            display_name,
            input: None,
        })
    }

    pub fn with_input(mut self: Box<Self>) -> Box<Self> {
        self.input = Some(FakeInput::new());
        self
    }

    pub fn as_ptr(&self) -> *mut IDeckLink {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkInput

/// A capture interface that records what it is told and lets the test play
/// the runtime's part by firing notifications at the registered sink.
#[repr(C)]
pub struct FakeInput {
    vtbl: *const IDeckLinkInputVtbl,
    refs: AtomicU32,
    callback: AtomicPtr<IDeckLinkInputCallback>,
    pub set_callback_calls: AtomicU32,
    /// Result returned by `SetCallback`; the registration only changes on `S_OK`.
    pub set_callback_result: AtomicI32,
    pub enabled_mode: AtomicU32,
    pub enabled_pixel_format: AtomicU32,
    pub streaming: AtomicBool,
    pub events: Mutex<Vec<&'static str>>,
}

fake_refs!(FakeInput);

static FAKE_INPUT_VTBL: IDeckLinkInputVtbl = IDeckLinkInputVtbl {
    base: FAKE_UNKNOWN,
    DoesSupportVideoMode: input_does_support_video_mode,
    GetDisplayModeIterator: input_get_display_mode_iterator,
    SetScreenPreviewCallback: input_set_pointer_unsupported,
    EnableVideoInput: input_enable_video_input,
    DisableVideoInput: input_disable_video_input,
    GetAvailableVideoFrameCount: input_get_count_unsupported,
    SetVideoInputFrameMemoryAllocator: input_set_pointer_unsupported,
    EnableAudioInput: input_enable_audio_input,
    DisableAudioInput: input_disable_audio_input,
    GetAvailableAudioSampleFrameCount: input_get_count_unsupported,
    StartStreams: input_start_streams,
    StopStreams: input_stop_streams,
    PauseStreams: input_pause_streams,
    FlushStreams: input_flush_streams,
    SetCallback: input_set_callback,
    GetHardwareReferenceClock: input_get_hardware_reference_clock,
};

fn input<'a>(this: *mut IDeckLinkInput) -> &'a FakeInput {
    unsafe { &*this.cast::<FakeInput>() }
}

fn record(this: *mut IDeckLinkInput, event: &'static str) -> HRESULT {
    input(this).events.lock().unwrap().push(event);
    S_OK
}

unsafe extern "system" fn input_does_support_video_mode(
    _this: *mut IDeckLinkInput,
    _display_mode: BMDDisplayMode,
    _pixel_format: BMDPixelFormat,
    _flags: BMDVideoInputFlags,
    _result: *mut BMDDisplayModeSupport_v10_11,
    _result_display_mode: *mut *mut IDeckLinkDisplayMode,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn input_get_display_mode_iterator(
    _this: *mut IDeckLinkInput,
    iterator: *mut *mut IDeckLinkDisplayModeIterator,
) -> HRESULT {
    unsafe { *iterator = ptr::null_mut() };
    E_NOTIMPL
}

unsafe extern "system" fn input_set_pointer_unsupported(
    _this: *mut IDeckLinkInput,
    _pointer: *mut c_void,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn input_get_count_unsupported(_this: *mut IDeckLinkInput, _count: *mut u32) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn input_enable_video_input(
    this: *mut IDeckLinkInput,
    display_mode: BMDDisplayMode,
    pixel_format: BMDPixelFormat,
    _flags: BMDVideoInputFlags,
) -> HRESULT {
    input(this).enabled_mode.store(display_mode, Ordering::SeqCst);
    input(this).enabled_pixel_format.store(pixel_format, Ordering::SeqCst);
    record(this, "EnableVideoInput")
}

unsafe extern "system" fn input_disable_video_input(this: *mut IDeckLinkInput) -> HRESULT {
    record(this, "DisableVideoInput")
}

unsafe extern "system" fn input_enable_audio_input(
    this: *mut IDeckLinkInput,
    _sample_rate: BMDAudioSampleRate,
    _sample_type: BMDAudioSampleType,
    _channel_count: u32,
) -> HRESULT {
    record(this, "EnableAudioInput")
}

unsafe extern "system" fn input_disable_audio_input(this: *mut IDeckLinkInput) -> HRESULT {
    record(this, "DisableAudioInput")
}

unsafe extern "system" fn input_start_streams(this: *mut IDeckLinkInput) -> HRESULT {
    input(this).streaming.store(true, Ordering::SeqCst);
    record(this, "StartStreams")
}

unsafe extern "system" fn input_stop_streams(this: *mut IDeckLinkInput) -> HRESULT {
    input(this).streaming.store(false, Ordering::SeqCst);
    record(this, "StopStreams")
}

unsafe extern "system" fn input_pause_streams(this: *mut IDeckLinkInput) -> HRESULT {
    record(this, "PauseStreams")
}

unsafe extern "system" fn input_flush_streams(this: *mut IDeckLinkInput) -> HRESULT {
    record(this, "FlushStreams")
}

/// Holds one reference on the registered sink, as the runtime does.
unsafe extern "system" fn input_set_callback(
    this: *mut IDeckLinkInput,
    callback: *mut IDeckLinkInputCallback,
) -> HRESULT {
    let fake = input(this);
    fake.set_callback_calls.fetch_add(1, Ordering::SeqCst);
    let result = fake.set_callback_result.load(Ordering::SeqCst);
    if result != S_OK {
        return result;
    }
    if !callback.is_null() {
        unsafe { ((*(*callback).vtbl).base.AddRef)(callback.cast()) };
    }
    let previous = fake.callback.swap(callback, Ordering::SeqCst);
    if !previous.is_null() {
        unsafe { ((*(*previous).vtbl).base.Release)(previous.cast()) };
    }
    S_OK
}

unsafe extern "system" fn input_get_hardware_reference_clock(
    _this: *mut IDeckLinkInput,
    desired_time_scale: BMDTimeScale,
    hardware_time: *mut BMDTimeValue,
    time_in_frame: *mut BMDTimeValue,
    ticks_per_frame: *mut BMDTimeValue,
) -> HRESULT {
    unsafe {
        *hardware_time = 10 * desired_time_scale;
        *time_in_frame = 0;
        *ticks_per_frame = desired_time_scale / 25;
    }
    S_OK
}

impl FakeInput {
    pub fn new() -> Box<Self> {
        Box::new(FakeInput {
            vtbl: &FAKE_INPUT_VTBL,
            refs: AtomicU32::new(1),
            callback: AtomicPtr::new(ptr::null_mut()),
            set_callback_calls: AtomicU32::new(0),
            set_callback_result: AtomicI32::new(S_OK),
            enabled_mode: AtomicU32::new(0),
            enabled_pixel_format: AtomicU32::new(0),
            streaming: AtomicBool::new(false),
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkInput {
        (self as *const Self).cast_mut().cast()
    }

    /// The currently registered sink, or null.
    pub fn callback(&self) -> *mut IDeckLinkInputCallback {
        self.callback.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }

    /// Delivers a frame to the registered sink like the capture thread does.
    pub fn fire_frame_arrived(
        &self,
        video_frame: *mut IDeckLinkVideoInputFrame,
        audio_packet: *mut IDeckLinkAudioInputPacket,
    ) -> HRESULT {
        let sink = self.callback();
        assert!(!sink.is_null(), "no input callback registered");
        unsafe { ((*(*sink).vtbl).VideoInputFrameArrived)(sink, video_frame, audio_packet) }
    }

    pub fn fire_format_changed(
        &self,
        events: BMDVideoInputFormatChangedEvents,
        display_mode: *mut IDeckLinkDisplayMode,
        flags: BMDDetectedVideoInputFormatFlags,
    ) -> HRESULT {
        let sink = self.callback();
        assert!(!sink.is_null(), "no input callback registered");
        unsafe { ((*(*sink).vtbl).VideoInputFormatChanged)(sink, events, display_mode, flags) }
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkAttributes, IDeckLinkStatus and IDeckLinkAPIInformation

/// Identifier-keyed properties shared by the three property interfaces.
/// Identifiers without an entry answer `E_INVALIDARG`, as the runtime does.
#[repr(C)]
pub struct FakeProperties {
    vtbl: *const c_void,
    refs: AtomicU32,
    pub flags: Vec<(u32, bool)>,
    pub ints: Vec<(u32, i64)>,
    pub floats: Vec<(u32, f64)>,
    /// `None` reports success without a string.
    pub strings: Vec<(u32, Option<&'static CStr>)>,
}

fake_refs!(FakeProperties);

static FAKE_ATTRIBUTES_VTBL: IDeckLinkAttributesVtbl = IDeckLinkAttributesVtbl {
    base: FAKE_UNKNOWN,
    GetFlag: properties_get_flag,
    GetInt: properties_get_int,
    GetFloat: properties_get_float,
    GetString: properties_get_string,
};

static FAKE_STATUS_VTBL: IDeckLinkStatusVtbl = IDeckLinkStatusVtbl {
    base: FAKE_UNKNOWN,
    GetFlag: properties_get_flag,
    GetInt: properties_get_int,
    GetFloat: properties_get_float,
    GetString: properties_get_string,
    GetBytes: status_get_bytes,
};

static FAKE_API_INFORMATION_VTBL: IDeckLinkAPIInformationVtbl = IDeckLinkAPIInformationVtbl {
    base: FAKE_UNKNOWN,
    GetFlag: properties_get_flag,
    GetInt: properties_get_int,
    GetFloat: properties_get_float,
    GetString: properties_get_string,
};

fn properties<'a, T>(this: *mut T) -> &'a FakeProperties {
    unsafe { &*this.cast::<FakeProperties>() }
}

fn lookup<V: Copy>(entries: &[(u32, V)], id: u32) -> Option<V> {
    entries.iter().find(|(key, _)| *key == id).map(|(_, value)| *value)
}

unsafe extern "system" fn properties_get_flag<T>(this: *mut T, id: u32, value: *mut bool) -> HRESULT {
    match lookup(&properties(this).flags, id) {
        Some(flag) => unsafe {
            *value = flag;
            S_OK
        },
        None => E_INVALIDARG,
    }
}

unsafe extern "system" fn properties_get_int<T>(this: *mut T, id: u32, value: *mut i64) -> HRESULT {
    match lookup(&properties(this).ints, id) {
        Some(int) => unsafe {
            *value = int;
            S_OK
        },
        None => E_INVALIDARG,
    }
}

unsafe extern "system" fn properties_get_float<T>(this: *mut T, id: u32, value: *mut f64) -> HRESULT {
    match lookup(&properties(this).floats, id) {
        Some(float) => unsafe {
            *value = float;
            S_OK
        },
        None => E_INVALIDARG,
    }
}

unsafe extern "system" fn properties_get_string<T>(this: *mut T, id: u32, value: *mut DLString) -> HRESULT {
    let (text, result) = match lookup(&properties(this).strings, id) {
        Some(Some(text)) => (native_string(text), S_OK),
        Some(None) => (ptr::null(), S_OK),
        None => (ptr::null(), E_INVALIDARG),
    };
    unsafe { *value = text };
    result
}

unsafe extern "system" fn status_get_bytes(
    _this: *mut IDeckLinkStatus,
    _id: BMDDeckLinkStatusID,
    _buffer: *mut c_void,
    _buffer_size: *mut u32,
) -> HRESULT {
    E_NOTIMPL
}

impl FakeProperties {
    fn with_vtbl(vtbl: *const c_void) -> Box<Self> {
        Box::new(FakeProperties {
            vtbl,
            refs: AtomicU32::new(1),
            flags: Vec::new(),
            ints: Vec::new(),
            floats: Vec::new(),
            strings: Vec::new(),
        })
    }

    pub fn attributes() -> Box<Self> {
        Self::with_vtbl((&raw const FAKE_ATTRIBUTES_VTBL).cast())
    }

    pub fn status() -> Box<Self> {
        Self::with_vtbl((&raw const FAKE_STATUS_VTBL).cast())
    }

    pub fn api_information() -> Box<Self> {
        Self::with_vtbl((&raw const FAKE_API_INFORMATION_VTBL).cast())
    }

    pub fn flag(mut self: Box<Self>, id: u32, value: bool) -> Box<Self> {
        self.flags.push((id, value));
        self
    }

    pub fn int(mut self: Box<Self>, id: u32, value: i64) -> Box<Self> {
        self.ints.push((id, value));
        self
    }

    pub fn float(mut self: Box<Self>, id: u32, value: f64) -> Box<Self> {
        self.floats.push((id, value));
        self
    }

    pub fn string(mut self: Box<Self>, id: u32, value: Option<&'static CStr>) -> Box<Self> {
        self.strings.push((id, value));
        self
    }

    /// The fake as whichever property interface it was built for.
    pub fn as_ptr<T>(&self) -> *mut T {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkVideoConversion

/// Copies the source pixels into the destination, ignoring pixel formats.
#[repr(C)]
pub struct FakeConversion {
    vtbl: *const IDeckLinkVideoConversionVtbl,
    refs: AtomicU32,
    pub conversions: AtomicU32,
    pub result: AtomicI32,
}

fake_refs!(FakeConversion);

static FAKE_CONVERSION_VTBL: IDeckLinkVideoConversionVtbl = IDeckLinkVideoConversionVtbl {
    base: FAKE_UNKNOWN,
    ConvertFrame: conversion_convert_frame,
};

/// Memory and length of a frame, read through its vtable.
unsafe fn frame_memory(frame: *mut IDeckLinkVideoFrame) -> Option<(*mut u8, usize)> {
    let vtbl = unsafe { &*(*frame).vtbl };
    let mut data: LPVOID = ptr::null_mut();
    if unsafe { (vtbl.GetBytes)(frame, &mut data) } != S_OK || data.is_null() {
        return None;
    }
    let len = unsafe { (vtbl.GetRowBytes)(frame) * (vtbl.GetHeight)(frame) };
    Some((data.cast(), usize::try_from(len).ok()?))
}

unsafe extern "system" fn conversion_convert_frame(
    this: *mut IDeckLinkVideoConversion,
    src: *mut IDeckLinkVideoFrame,
    dst: *mut IDeckLinkVideoFrame,
) -> HRESULT {
    let fake = unsafe { &*this.cast::<FakeConversion>() };
    let result = fake.result.load(Ordering::SeqCst);
    if result != S_OK {
        return result;
    }
    if src.is_null() || dst.is_null() {
        return E_POINTER;
    }
    let memory = unsafe { (frame_memory(src), frame_memory(dst)) };
    let (Some((from, from_len)), Some((to, to_len))) = memory else {
        return E_FAIL;
    };
    unsafe { ptr::copy_nonoverlapping(from, to, from_len.min(to_len)) };
    fake.conversions.fetch_add(1, Ordering::SeqCst);
    S_OK
}

impl FakeConversion {
    pub fn new() -> Box<Self> {
        Box::new(FakeConversion {
            vtbl: &FAKE_CONVERSION_VTBL,
            refs: AtomicU32::new(1),
            conversions: AtomicU32::new(0),
            result: AtomicI32::new(S_OK),
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkVideoConversion {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkDisplayModeIterator

#[repr(C)]
pub struct FakeDisplayModeIterator {
    vtbl: *const IDeckLinkDisplayModeIteratorVtbl,
    refs: AtomicU32,
    pub modes: Vec<Box<FakeDisplayMode>>,
    position: AtomicUsize,
}

fake_refs!(FakeDisplayModeIterator);

static FAKE_DISPLAY_MODE_ITERATOR_VTBL: IDeckLinkDisplayModeIteratorVtbl =
    IDeckLinkDisplayModeIteratorVtbl {
        base: FAKE_UNKNOWN,
        Next: display_mode_iterator_next,
    };

/// `S_FALSE` and null once every mode has been handed out.
unsafe extern "system" fn display_mode_iterator_next(
    this: *mut IDeckLinkDisplayModeIterator,
    mode: *mut *mut IDeckLinkDisplayMode,
) -> HRESULT {
    let fake = unsafe { &*this.cast::<FakeDisplayModeIterator>() };
    let position = fake.position.fetch_add(1, Ordering::SeqCst);
    match fake.modes.get(position) {
        Some(next) => unsafe {
            fake_add_ref(next.as_ptr().cast());
            *mode = next.as_ptr();
            S_OK
        },
        None => unsafe {
            *mode = ptr::null_mut();
            S_FALSE
        },
    }
}

impl FakeDisplayModeIterator {
    pub fn new(modes: Vec<Box<FakeDisplayMode>>) -> Box<Self> {
        Box::new(FakeDisplayModeIterator {
            vtbl: &FAKE_DISPLAY_MODE_ITERATOR_VTBL,
            refs: AtomicU32::new(1),
            modes,
            position: AtomicUsize::new(0),
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkDisplayModeIterator {
        (self as *const Self).cast_mut().cast()
    }
}

// ---------------------------------------------------------------------------
// IDeckLinkOutput

/// A frame queued through `ScheduleVideoFrame`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledFrame {
    pub frame: *mut IDeckLinkVideoFrame,
    pub display_time: BMDTimeValue,
    pub display_duration: BMDTimeValue,
    pub time_scale: BMDTimeScale,
}

/// A playback interface that allocates frames from its own pool and holds a
/// reference on every scheduled frame until playback stops.
#[repr(C)]
pub struct FakeOutput {
    vtbl: *const IDeckLinkOutputVtbl,
    refs: AtomicU32,
    callback: AtomicPtr<IDeckLinkVideoOutputCallback>,
    pub modes: Box<FakeDisplayModeIterator>,
    created: Mutex<Vec<Box<FakeVideoFrame>>>,
    scheduled: Mutex<Vec<ScheduledFrame>>,
    pub enabled_mode: AtomicU32,
    pub playback: Mutex<Option<(BMDTimeValue, BMDTimeScale, f64)>>,
    pub events: Mutex<Vec<&'static str>>,
}

fake_refs!(FakeOutput);

static FAKE_OUTPUT_VTBL: IDeckLinkOutputVtbl = IDeckLinkOutputVtbl {
    base: FAKE_UNKNOWN,
    DoesSupportVideoMode: output_does_support_video_mode,
    GetDisplayModeIterator: output_get_display_mode_iterator,
    SetScreenPreviewCallback: output_set_pointer_unsupported,
    EnableVideoOutput: output_enable_video_output,
    DisableVideoOutput: output_disable_video_output,
    SetVideoOutputFrameMemoryAllocator: output_set_pointer_unsupported,
    CreateVideoFrame: output_create_video_frame,
    CreateAncillaryData: output_create_ancillary_data,
    DisplayVideoFrameSync: output_display_video_frame_sync,
    ScheduleVideoFrame: output_schedule_video_frame,
    SetScheduledFrameCompletionCallback: output_set_scheduled_frame_completion_callback,
    GetBufferedVideoFrameCount: output_get_buffered_video_frame_count,
    EnableAudioOutput: output_enable_audio_output,
    DisableAudioOutput: output_unsupported,
    WriteAudioSamplesSync: output_write_audio_samples_sync,
    BeginAudioPreroll: output_unsupported,
    EndAudioPreroll: output_unsupported,
    ScheduleAudioSamples: output_schedule_audio_samples,
    GetBufferedAudioSampleFrameCount: output_get_count_unsupported,
    FlushBufferedAudioSamples: output_unsupported,
    SetAudioCallback: output_set_pointer_unsupported,
    StartScheduledPlayback: output_start_scheduled_playback,
    StopScheduledPlayback: output_stop_scheduled_playback,
    IsScheduledPlaybackRunning: output_is_scheduled_playback_running,
    GetScheduledStreamTime: output_get_scheduled_stream_time,
    GetReferenceStatus: output_get_reference_status,
    GetHardwareReferenceClock: output_get_hardware_reference_clock,
    GetFrameCompletionReferenceTimestamp: output_get_frame_completion_reference_timestamp,
};

fn output<'a>(this: *mut IDeckLinkOutput) -> &'a FakeOutput {
    unsafe { &*this.cast::<FakeOutput>() }
}

fn record_output(this: *mut IDeckLinkOutput, event: &'static str) -> HRESULT {
    output(this).events.lock().unwrap().push(event);
    S_OK
}

unsafe extern "system" fn output_does_support_video_mode(
    _this: *mut IDeckLinkOutput,
    _display_mode: BMDDisplayMode,
    _pixel_format: BMDPixelFormat,
    _flags: BMDVideoOutputFlags,
    _result: *mut BMDDisplayModeSupport_v10_11,
    _result_display_mode: *mut *mut IDeckLinkDisplayMode,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_get_display_mode_iterator(
    this: *mut IDeckLinkOutput,
    iterator: *mut *mut IDeckLinkDisplayModeIterator,
) -> HRESULT {
    let modes = &output(this).modes;
    unsafe {
        fake_add_ref(modes.as_ptr().cast());
        *iterator = modes.as_ptr();
    }
    S_OK
}

unsafe extern "system" fn output_set_pointer_unsupported(
    _this: *mut IDeckLinkOutput,
    _pointer: *mut c_void,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_unsupported(_this: *mut IDeckLinkOutput) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_get_count_unsupported(
    _this: *mut IDeckLinkOutput,
    _count: *mut u32,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_enable_video_output(
    this: *mut IDeckLinkOutput,
    display_mode: BMDDisplayMode,
    _flags: BMDVideoOutputFlags,
) -> HRESULT {
    output(this).enabled_mode.store(display_mode, Ordering::SeqCst);
    record_output(this, "EnableVideoOutput")
}

unsafe extern "system" fn output_disable_video_output(this: *mut IDeckLinkOutput) -> HRESULT {
    record_output(this, "DisableVideoOutput")
}

/// Rejects empty dimensions and a row pitch too small for 8-bit ARGB.
unsafe extern "system" fn output_create_video_frame(
    this: *mut IDeckLinkOutput,
    width: i32,
    height: i32,
    row_bytes: i32,
    pixel_format: BMDPixelFormat,
    flags: BMDFrameFlags,
    out_frame: *mut *mut IDeckLinkMutableVideoFrame,
) -> HRESULT {
    unsafe { *out_frame = ptr::null_mut() };
    if width <= 0 || height <= 0 || (pixel_format == bmdFormat8BitARGB && row_bytes < width * 4) {
        return E_INVALIDARG;
    }
    let frame = FakeVideoFrame::mutable(width, height, row_bytes, pixel_format, flags);
    unsafe { *out_frame = frame.as_mutable_ptr() };
    output(this).created.lock().unwrap().push(frame);
    S_OK
}

unsafe extern "system" fn output_create_ancillary_data(
    _this: *mut IDeckLinkOutput,
    _pixel_format: BMDPixelFormat,
    _buffer: *mut LPVOID,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_display_video_frame_sync(
    _this: *mut IDeckLinkOutput,
    _frame: *mut IDeckLinkVideoFrame,
) -> HRESULT {
    E_NOTIMPL
}

/// Holds one reference on the frame until playback stops.
unsafe extern "system" fn output_schedule_video_frame(
    this: *mut IDeckLinkOutput,
    frame: *mut IDeckLinkVideoFrame,
    display_time: BMDTimeValue,
    display_duration: BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    if frame.is_null() {
        return E_POINTER;
    }
    if display_duration <= 0 || time_scale <= 0 {
        return E_INVALIDARG;
    }
    unsafe { ((*(*frame).vtbl).base.AddRef)(frame.cast()) };
    output(this).scheduled.lock().unwrap().push(ScheduledFrame {
        frame,
        display_time,
        display_duration,
        time_scale,
    });
    S_OK
}

unsafe extern "system" fn output_set_scheduled_frame_completion_callback(
    this: *mut IDeckLinkOutput,
    callback: *mut IDeckLinkVideoOutputCallback,
) -> HRESULT {
    if !callback.is_null() {
        unsafe { ((*(*callback).vtbl).base.AddRef)(callback.cast()) };
    }
    let previous = output(this).callback.swap(callback, Ordering::SeqCst);
    if !previous.is_null() {
        unsafe { ((*(*previous).vtbl).base.Release)(previous.cast()) };
    }
    S_OK
}

unsafe extern "system" fn output_get_buffered_video_frame_count(
    this: *mut IDeckLinkOutput,
    count: *mut u32,
) -> HRESULT {
    unsafe { *count = output(this).scheduled.lock().unwrap().len() as u32 };
    S_OK
}

unsafe extern "system" fn output_enable_audio_output(
    _this: *mut IDeckLinkOutput,
    _sample_rate: BMDAudioSampleRate,
    _sample_type: BMDAudioSampleType,
    _channel_count: u32,
    _stream_type: BMDAudioOutputStreamType,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_write_audio_samples_sync(
    _this: *mut IDeckLinkOutput,
    _buffer: *mut c_void,
    _sample_frame_count: u32,
    _sample_frames_written: *mut u32,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_schedule_audio_samples(
    _this: *mut IDeckLinkOutput,
    _buffer: *mut c_void,
    _sample_frame_count: u32,
    _stream_time: BMDTimeValue,
    _time_scale: BMDTimeScale,
    _sample_frames_written: *mut u32,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_start_scheduled_playback(
    this: *mut IDeckLinkOutput,
    start_time: BMDTimeValue,
    time_scale: BMDTimeScale,
    speed: f64,
) -> HRESULT {
    *output(this).playback.lock().unwrap() = Some((start_time, time_scale, speed));
    record_output(this, "StartScheduledPlayback")
}

/// Releases every scheduled frame. Stopping immediately reports the end of
/// the last scheduled frame as the stop time.
unsafe extern "system" fn output_stop_scheduled_playback(
    this: *mut IDeckLinkOutput,
    stop_at: BMDTimeValue,
    actual_stop_time: *mut BMDTimeValue,
    time_scale: BMDTimeScale,
) -> HRESULT {
    let fake = output(this);
    if fake.playback.lock().unwrap().take().is_none() {
        return E_ACCESSDENIED;
    }
    let scheduled = std::mem::take(&mut *fake.scheduled.lock().unwrap());
    let end = scheduled
        .iter()
        .map(|queued| (queued.display_time + queued.display_duration) * time_scale / queued.time_scale)
        .max()
        .unwrap_or(0);
    for queued in scheduled {
        unsafe { ((*(*queued.frame).vtbl).base.Release)(queued.frame.cast()) };
    }
    unsafe { *actual_stop_time = if stop_at > 0 { stop_at } else { end } };
    record_output(this, "StopScheduledPlayback")
}

unsafe extern "system" fn output_is_scheduled_playback_running(
    this: *mut IDeckLinkOutput,
    active: *mut bool,
) -> HRESULT {
    unsafe { *active = output(this).playback.lock().unwrap().is_some() };
    S_OK
}

unsafe extern "system" fn output_get_scheduled_stream_time(
    _this: *mut IDeckLinkOutput,
    _time_scale: BMDTimeScale,
    _stream_time: *mut BMDTimeValue,
    _speed: *mut f64,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_get_reference_status(
    _this: *mut IDeckLinkOutput,
    _status: *mut BMDReferenceStatus,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_get_hardware_reference_clock(
    _this: *mut IDeckLinkOutput,
    _time_scale: BMDTimeScale,
    _hardware_time: *mut BMDTimeValue,
    _time_in_frame: *mut BMDTimeValue,
    _ticks_per_frame: *mut BMDTimeValue,
) -> HRESULT {
    E_NOTIMPL
}

unsafe extern "system" fn output_get_frame_completion_reference_timestamp(
    _this: *mut IDeckLinkOutput,
    _frame: *mut IDeckLinkVideoFrame,
    _time_scale: BMDTimeScale,
    _timestamp: *mut BMDTimeValue,
) -> HRESULT {
    E_NOTIMPL
}

impl FakeOutput {
    /// Offers 1080p25 and 720p50.
    pub fn new() -> Box<Self> {
        Box::new(FakeOutput {
            vtbl: &FAKE_OUTPUT_VTBL,
            refs: AtomicU32::new(1),
            callback: AtomicPtr::new(ptr::null_mut()),
            modes: FakeDisplayModeIterator::new(vec![
                FakeDisplayMode::hd1080p25(),
                FakeDisplayMode::hd720p50(),
            ]),
            created: Mutex::new(Vec::new()),
            scheduled: Mutex::new(Vec::new()),
            enabled_mode: AtomicU32::new(0),
            playback: Mutex::new(None),
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn as_ptr(&self) -> *mut IDeckLinkOutput {
        (self as *const Self).cast_mut().cast()
    }

    /// The currently registered sink, or null.
    pub fn callback(&self) -> *mut IDeckLinkVideoOutputCallback {
        self.callback.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }

    pub fn scheduled(&self) -> Vec<ScheduledFrame> {
        self.scheduled.lock().unwrap().clone()
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    /// A frame from the output's pool. Pool frames live as long as the fake.
    pub fn created_frame(&self, index: usize) -> &FakeVideoFrame {
        let created = self.created.lock().unwrap();
        let frame: *const FakeVideoFrame = &*created[index];
        unsafe { &*frame }
    }

    /// Reports a completed frame to the registered sink like the playback
    /// thread does.
    pub fn fire_frame_completed(
        &self,
        frame: *mut IDeckLinkVideoFrame,
        result: BMDOutputFrameCompletionResult,
    ) -> HRESULT {
        let sink = self.callback();
        assert!(!sink.is_null(), "no output callback registered");
        unsafe { ((*(*sink).vtbl).ScheduledFrameCompleted)(sink, frame, result) }
    }

    pub fn fire_playback_stopped(&self) -> HRESULT {
        let sink = self.callback();
        assert!(!sink.is_null(), "no output callback registered");
        unsafe { ((*(*sink).vtbl).ScheduledPlaybackHasStopped)(sink) }
    }
}
