// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Value types for DeckLink enumerations and flag sets.
//!
//! Enumerations are open-ended on the wire (new drivers add display modes and
//! pixel formats), so they are newtypes over the raw value with associated
//! constants rather than Rust enums.

use std::fmt;

use bitflags::bitflags;
use decklink_sys as sys;

/// Formats a four-character code, falling back to hex when it is not printable.
fn fmt_fourcc(value: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let bytes = value.to_be_bytes();
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        write!(f, "'{}'", String::from_utf8_lossy(&bytes))
    } else {
        write!(f, "{value:#010x}")
    }
}

macro_rules! fourcc_type {
    ($(#[$meta:meta])* $name:ident { $($(#[$cmeta:meta])* $constant:ident = $value:expr;)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            $($(#[$cmeta])* pub const $constant: $name = $name($value);)*
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_fourcc(self.0, f)
            }
        }
    };
}

fourcc_type!(
    /// A video standard (`BMDDisplayMode`).
    DisplayMode {
        NTSC = sys::bmdModeNTSC;
        NTSC2398 = sys::bmdModeNTSC2398;
        PAL = sys::bmdModePAL;
        NTSCP = sys::bmdModeNTSCp;
        PALP = sys::bmdModePALp;
        HD1080P2398 = sys::bmdModeHD1080p2398;
        HD1080P24 = sys::bmdModeHD1080p24;
        HD1080P25 = sys::bmdModeHD1080p25;
        HD1080P2997 = sys::bmdModeHD1080p2997;
        HD1080P30 = sys::bmdModeHD1080p30;
        HD1080P50 = sys::bmdModeHD1080p50;
        HD1080P5994 = sys::bmdModeHD1080p5994;
        HD1080P6000 = sys::bmdModeHD1080p6000;
        HD1080I50 = sys::bmdModeHD1080i50;
        HD1080I5994 = sys::bmdModeHD1080i5994;
        HD1080I6000 = sys::bmdModeHD1080i6000;
        HD720P50 = sys::bmdModeHD720p50;
        HD720P5994 = sys::bmdModeHD720p5994;
        HD720P60 = sys::bmdModeHD720p60;
        UHD2160P25 = sys::bmdMode4K2160p25;
        UHD2160P2997 = sys::bmdMode4K2160p2997;
        UHD2160P30 = sys::bmdMode4K2160p30;
        UHD2160P50 = sys::bmdMode4K2160p50;
        UHD2160P5994 = sys::bmdMode4K2160p5994;
        UHD2160P60 = sys::bmdMode4K2160p60;
        /// Reported before format detection has locked onto a signal.
        UNKNOWN = sys::bmdModeUnknown;
    }
);

fourcc_type!(
    /// Pixel packing of a video frame (`BMDPixelFormat`).
    PixelFormat {
        YUV_8BIT = sys::bmdFormat8BitYUV;
        YUV_10BIT = sys::bmdFormat10BitYUV;
        ARGB_8BIT = sys::bmdFormat8BitARGB;
        BGRA_8BIT = sys::bmdFormat8BitBGRA;
        RGB_10BIT = sys::bmdFormat10BitRGB;
        RGB_12BIT = sys::bmdFormat12BitRGB;
        RGB_12BIT_LE = sys::bmdFormat12BitRGBLE;
        RGBX_10BIT_LE = sys::bmdFormat10BitRGBXLE;
        RGBX_10BIT = sys::bmdFormat10BitRGBX;
        H265 = sys::bmdFormatH265;
    }
);

fourcc_type!(
    /// Where a timecode is read from (`BMDTimecodeFormat`).
    TimecodeFormat {
        RP188_VITC1 = sys::bmdTimecodeRP188VITC1;
        RP188_VITC2 = sys::bmdTimecodeRP188VITC2;
        RP188_LTC = sys::bmdTimecodeRP188LTC;
        RP188_HIGH_FRAME_RATE = sys::bmdTimecodeRP188HighFrameRate;
        RP188_ANY = sys::bmdTimecodeRP188Any;
        VITC = sys::bmdTimecodeVITC;
        VITC_FIELD2 = sys::bmdTimecodeVITCField2;
        SERIAL = sys::bmdTimecodeSerial;
    }
);

fourcc_type!(
    FieldDominance {
        UNKNOWN = sys::bmdUnknownFieldDominance;
        LOWER_FIELD_FIRST = sys::bmdLowerFieldFirst;
        UPPER_FIELD_FIRST = sys::bmdUpperFieldFirst;
        PROGRESSIVE = sys::bmdProgressiveFrame;
        PROGRESSIVE_SEGMENTED = sys::bmdProgressiveSegmentedFrame;
    }
);

/// Outcome of a scheduled frame (`BMDOutputFrameCompletionResult`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutputFrameCompletionResult(pub u32);

impl OutputFrameCompletionResult {
    pub const COMPLETED: Self = Self(sys::bmdOutputFrameCompleted);
    pub const DISPLAYED_LATE: Self = Self(sys::bmdOutputFrameDisplayedLate);
    pub const DROPPED: Self = Self(sys::bmdOutputFrameDropped);
    pub const FLUSHED: Self = Self(sys::bmdOutputFrameFlushed);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AudioSampleRate(pub u32);

impl AudioSampleRate {
    pub const RATE_48KHZ: Self = Self(sys::bmdAudioSampleRate48kHz);
}

/// Bits per audio sample (`BMDAudioSampleType`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AudioSampleType(pub u32);

impl AudioSampleType {
    pub const INTEGER_16BIT: Self = Self(sys::bmdAudioSampleType16bitInteger);
    pub const INTEGER_32BIT: Self = Self(sys::bmdAudioSampleType32bitInteger);

    /// Size of one sample of one channel in bytes.
    pub fn bytes_per_sample(self) -> usize {
        self.0 as usize / 8
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VideoInputFlags: u32 {
        const ENABLE_FORMAT_DETECTION = sys::bmdVideoInputEnableFormatDetection;
        const DUAL_STREAM_3D = sys::bmdVideoInputDualStream3D;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VideoOutputFlags: u32 {
        const VANC = sys::bmdVideoOutputVANC;
        const VITC = sys::bmdVideoOutputVITC;
        const RP188 = sys::bmdVideoOutputRP188;
        const DUAL_STREAM_3D = sys::bmdVideoOutputDualStream3D;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FrameFlags: u32 {
        const FLIP_VERTICAL = sys::bmdFrameFlagFlipVertical;
        const CONTAINS_HDR_METADATA = sys::bmdFrameContainsHDRMetadata;
        const CAPTURED_AS_PSF = sys::bmdFrameCapturedAsPsF;
        const HAS_NO_INPUT_SOURCE = sys::bmdFrameHasNoInputSource;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DisplayModeFlags: u32 {
        const SUPPORTS_3D = sys::bmdDisplayModeSupports3D;
        const COLORSPACE_REC601 = sys::bmdDisplayModeColorspaceRec601;
        const COLORSPACE_REC709 = sys::bmdDisplayModeColorspaceRec709;
    }
}

bitflags! {
    /// What changed in a format change notification.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VideoInputFormatChangedEvents: u32 {
        const DISPLAY_MODE_CHANGED = sys::bmdVideoInputDisplayModeChanged;
        const FIELD_DOMINANCE_CHANGED = sys::bmdVideoInputFieldDominanceChanged;
        const COLORSPACE_CHANGED = sys::bmdVideoInputColorspaceChanged;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DetectedVideoInputFormatFlags: u32 {
        const YCBCR422 = sys::bmdDetectedVideoInputYCbCr422;
        const RGB444 = sys::bmdDetectedVideoInputRGB444;
        const DUAL_STREAM_3D = sys::bmdDetectedVideoInputDualStream3D;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VideoIOSupport: i64 {
        const CAPTURE = sys::bmdDeviceSupportsCapture;
        const PLAYBACK = sys::bmdDeviceSupportsPlayback;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DeviceBusyState: i64 {
        const CAPTURE_BUSY = sys::bmdDeviceCaptureBusy;
        const PLAYBACK_BUSY = sys::bmdDevicePlaybackBusy;
        const SERIAL_PORT_BUSY = sys::bmdDeviceSerialPortBusy;
    }
}

/// A point in time expressed in units of `1 / time_scale` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamTime {
    pub value: i64,
    pub duration: i64,
    pub time_scale: i64,
}

/// Hardware reference clock sample (`GetHardwareReferenceClock`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HardwareReferenceClock {
    pub hardware_time: i64,
    pub time_in_frame: i64,
    pub ticks_per_frame: i64,
}
