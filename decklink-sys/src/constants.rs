// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! `BMD*` enumeration values.
//!
//! Most DeckLink enumerations are four-character codes packed big-endian into a
//! `u32`, the way the vendor headers spell them with multi-character literals.

use crate::*;

/// Packs a four-character code, first character in the most significant byte.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

// BMDDisplayMode
pub const bmdModeNTSC: BMDDisplayMode = fourcc(b"ntsc");
pub const bmdModeNTSC2398: BMDDisplayMode = fourcc(b"nt23");
pub const bmdModePAL: BMDDisplayMode = fourcc(b"pal ");
pub const bmdModeNTSCp: BMDDisplayMode = fourcc(b"ntsp");
pub const bmdModePALp: BMDDisplayMode = fourcc(b"palp");
pub const bmdModeHD1080p2398: BMDDisplayMode = fourcc(b"23ps");
pub const bmdModeHD1080p24: BMDDisplayMode = fourcc(b"24ps");
pub const bmdModeHD1080p25: BMDDisplayMode = fourcc(b"Hp25");
pub const bmdModeHD1080p2997: BMDDisplayMode = fourcc(b"Hp29");
pub const bmdModeHD1080p30: BMDDisplayMode = fourcc(b"Hp30");
pub const bmdModeHD1080p50: BMDDisplayMode = fourcc(b"Hp50");
pub const bmdModeHD1080p5994: BMDDisplayMode = fourcc(b"Hp59");
pub const bmdModeHD1080p6000: BMDDisplayMode = fourcc(b"Hp60");
pub const bmdModeHD1080i50: BMDDisplayMode = fourcc(b"Hi50");
pub const bmdModeHD1080i5994: BMDDisplayMode = fourcc(b"Hi59");
pub const bmdModeHD1080i6000: BMDDisplayMode = fourcc(b"Hi60");
pub const bmdModeHD720p50: BMDDisplayMode = fourcc(b"hp50");
pub const bmdModeHD720p5994: BMDDisplayMode = fourcc(b"hp59");
pub const bmdModeHD720p60: BMDDisplayMode = fourcc(b"hp60");
pub const bmdMode4K2160p25: BMDDisplayMode = fourcc(b"4k25");
pub const bmdMode4K2160p2997: BMDDisplayMode = fourcc(b"4k29");
pub const bmdMode4K2160p30: BMDDisplayMode = fourcc(b"4k30");
pub const bmdMode4K2160p50: BMDDisplayMode = fourcc(b"4k50");
pub const bmdMode4K2160p5994: BMDDisplayMode = fourcc(b"4k59");
pub const bmdMode4K2160p60: BMDDisplayMode = fourcc(b"4k60");
pub const bmdModeUnknown: BMDDisplayMode = fourcc(b"iunk");

// BMDFieldDominance
pub const bmdUnknownFieldDominance: BMDFieldDominance = 0;
pub const bmdLowerFieldFirst: BMDFieldDominance = fourcc(b"lowr");
pub const bmdUpperFieldFirst: BMDFieldDominance = fourcc(b"uppr");
pub const bmdProgressiveFrame: BMDFieldDominance = fourcc(b"prog");
pub const bmdProgressiveSegmentedFrame: BMDFieldDominance = fourcc(b"psf ");

// BMDDisplayModeFlags
pub const bmdDisplayModeSupports3D: BMDDisplayModeFlags = 1 << 0;
pub const bmdDisplayModeColorspaceRec601: BMDDisplayModeFlags = 1 << 1;
pub const bmdDisplayModeColorspaceRec709: BMDDisplayModeFlags = 1 << 2;

// BMDDisplayModeSupport_v10_11
pub const bmdDisplayModeNotSupported_v10_11: BMDDisplayModeSupport_v10_11 = 0;
pub const bmdDisplayModeSupported_v10_11: BMDDisplayModeSupport_v10_11 = 1;
pub const bmdDisplayModeSupportedWithConversion_v10_11: BMDDisplayModeSupport_v10_11 = 2;

// BMDPixelFormat
pub const bmdFormat8BitYUV: BMDPixelFormat = fourcc(b"2vuy");
pub const bmdFormat10BitYUV: BMDPixelFormat = fourcc(b"v210");
pub const bmdFormat8BitARGB: BMDPixelFormat = 32;
pub const bmdFormat8BitBGRA: BMDPixelFormat = fourcc(b"BGRA");
pub const bmdFormat10BitRGB: BMDPixelFormat = fourcc(b"r210");
pub const bmdFormat12BitRGB: BMDPixelFormat = fourcc(b"R12B");
pub const bmdFormat12BitRGBLE: BMDPixelFormat = fourcc(b"R12L");
pub const bmdFormat10BitRGBXLE: BMDPixelFormat = fourcc(b"R10l");
pub const bmdFormat10BitRGBX: BMDPixelFormat = fourcc(b"R10b");
pub const bmdFormatH265: BMDPixelFormat = fourcc(b"hev1");

// BMDVideoInputFlags
pub const bmdVideoInputFlagDefault: BMDVideoInputFlags = 0;
pub const bmdVideoInputEnableFormatDetection: BMDVideoInputFlags = 1 << 0;
pub const bmdVideoInputDualStream3D: BMDVideoInputFlags = 1 << 1;

// BMDVideoOutputFlags
pub const bmdVideoOutputFlagDefault: BMDVideoOutputFlags = 0;
pub const bmdVideoOutputVANC: BMDVideoOutputFlags = 1 << 0;
pub const bmdVideoOutputVITC: BMDVideoOutputFlags = 1 << 1;
pub const bmdVideoOutputRP188: BMDVideoOutputFlags = 1 << 2;
pub const bmdVideoOutputDualStream3D: BMDVideoOutputFlags = 1 << 4;

// BMDFrameFlags
pub const bmdFrameFlagDefault: BMDFrameFlags = 0;
pub const bmdFrameFlagFlipVertical: BMDFrameFlags = 1 << 0;
pub const bmdFrameContainsHDRMetadata: BMDFrameFlags = 1 << 1;
pub const bmdFrameCapturedAsPsF: BMDFrameFlags = 1 << 30;
pub const bmdFrameHasNoInputSource: BMDFrameFlags = 1 << 31;

// BMDVideoInputFormatChangedEvents
pub const bmdVideoInputDisplayModeChanged: BMDVideoInputFormatChangedEvents = 1 << 0;
pub const bmdVideoInputFieldDominanceChanged: BMDVideoInputFormatChangedEvents = 1 << 1;
pub const bmdVideoInputColorspaceChanged: BMDVideoInputFormatChangedEvents = 1 << 2;

// BMDDetectedVideoInputFormatFlags
pub const bmdDetectedVideoInputYCbCr422: BMDDetectedVideoInputFormatFlags = 1 << 0;
pub const bmdDetectedVideoInputRGB444: BMDDetectedVideoInputFormatFlags = 1 << 1;
pub const bmdDetectedVideoInputDualStream3D: BMDDetectedVideoInputFormatFlags = 1 << 2;

// BMDOutputFrameCompletionResult
pub const bmdOutputFrameCompleted: BMDOutputFrameCompletionResult = 0;
pub const bmdOutputFrameDisplayedLate: BMDOutputFrameCompletionResult = 1;
pub const bmdOutputFrameDropped: BMDOutputFrameCompletionResult = 2;
pub const bmdOutputFrameFlushed: BMDOutputFrameCompletionResult = 3;

// BMDReferenceStatus
pub const bmdReferenceNotSupportedByHardware: BMDReferenceStatus = 1 << 0;
pub const bmdReferenceLocked: BMDReferenceStatus = 1 << 1;

// BMDAudioSampleRate / BMDAudioSampleType / BMDAudioOutputStreamType
pub const bmdAudioSampleRate48kHz: BMDAudioSampleRate = 48000;
pub const bmdAudioSampleType16bitInteger: BMDAudioSampleType = 16;
pub const bmdAudioSampleType32bitInteger: BMDAudioSampleType = 32;
pub const bmdAudioOutputStreamContinuous: BMDAudioOutputStreamType = fourcc(b"cont");
pub const bmdAudioOutputStreamContinuousDontResample: BMDAudioOutputStreamType = fourcc(b"cdnr");
pub const bmdAudioOutputStreamTimestamped: BMDAudioOutputStreamType = fourcc(b"time");

// BMDTimecodeFormat
pub const bmdTimecodeRP188VITC1: BMDTimecodeFormat = fourcc(b"rpv1");
pub const bmdTimecodeRP188VITC2: BMDTimecodeFormat = fourcc(b"rp12");
pub const bmdTimecodeRP188LTC: BMDTimecodeFormat = fourcc(b"rplt");
pub const bmdTimecodeRP188HighFrameRate: BMDTimecodeFormat = fourcc(b"rphr");
pub const bmdTimecodeRP188Any: BMDTimecodeFormat = fourcc(b"rp18");
pub const bmdTimecodeVITC: BMDTimecodeFormat = fourcc(b"vitc");
pub const bmdTimecodeVITCField2: BMDTimecodeFormat = fourcc(b"vit2");
pub const bmdTimecodeSerial: BMDTimecodeFormat = fourcc(b"seri");

// BMDTimecodeFlags
pub const bmdTimecodeFlagDefault: BMDTimecodeFlags = 0;
pub const bmdTimecodeIsDropFrame: BMDTimecodeFlags = 1 << 0;
pub const bmdTimecodeFieldMark: BMDTimecodeFlags = 1 << 1;
pub const bmdTimecodeColorFrame: BMDTimecodeFlags = 1 << 2;

// BMDDeckLinkAttributeID
pub const BMDDeckLinkSupportsInternalKeying: BMDDeckLinkAttributeID = fourcc(b"keyi");
pub const BMDDeckLinkSupportsExternalKeying: BMDDeckLinkAttributeID = fourcc(b"keye");
pub const BMDDeckLinkHasSerialPort: BMDDeckLinkAttributeID = fourcc(b"hspt");
pub const BMDDeckLinkSupportsInputFormatDetection: BMDDeckLinkAttributeID = fourcc(b"infd");
pub const BMDDeckLinkMaximumAudioChannels: BMDDeckLinkAttributeID = fourcc(b"mach");
pub const BMDDeckLinkVideoIOSupport: BMDDeckLinkAttributeID = fourcc(b"vios");
pub const BMDDeckLinkPersistentID: BMDDeckLinkAttributeID = fourcc(b"peid");
pub const BMDDeckLinkTopologicalID: BMDDeckLinkAttributeID = fourcc(b"toid");
pub const BMDDeckLinkSubDeviceIndex: BMDDeckLinkAttributeID = fourcc(b"subi");
pub const BMDDeckLinkNumberOfSubDevices: BMDDeckLinkAttributeID = fourcc(b"nsbd");
pub const BMDDeckLinkModelName: BMDDeckLinkAttributeID = fourcc(b"mnam");
pub const BMDDeckLinkVendorName: BMDDeckLinkAttributeID = fourcc(b"vndr");
pub const BMDDeckLinkDisplayName: BMDDeckLinkAttributeID = fourcc(b"dspn");
pub const BMDDeckLinkDeviceHandle: BMDDeckLinkAttributeID = fourcc(b"devh");

// BMDVideoIOSupport
pub const bmdDeviceSupportsCapture: i64 = 1 << 0;
pub const bmdDeviceSupportsPlayback: i64 = 1 << 1;

// BMDDeckLinkStatusID
pub const bmdDeckLinkStatusDetectedVideoInputMode: BMDDeckLinkStatusID = fourcc(b"dvim");
pub const bmdDeckLinkStatusCurrentVideoInputMode: BMDDeckLinkStatusID = fourcc(b"cvim");
pub const bmdDeckLinkStatusCurrentVideoOutputMode: BMDDeckLinkStatusID = fourcc(b"cvom");
pub const bmdDeckLinkStatusBusy: BMDDeckLinkStatusID = fourcc(b"busy");
pub const bmdDeckLinkStatusVideoInputSignalLocked: BMDDeckLinkStatusID = fourcc(b"visl");
pub const bmdDeckLinkStatusReferenceSignalLocked: BMDDeckLinkStatusID = fourcc(b"refl");
pub const bmdDeckLinkStatusDeviceTemperature: BMDDeckLinkStatusID = fourcc(b"dtmp");

// BMDDeviceBusyState
pub const bmdDeviceCaptureBusy: i64 = 1 << 0;
pub const bmdDevicePlaybackBusy: i64 = 1 << 1;
pub const bmdDeviceSerialPortBusy: i64 = 1 << 2;

// BMDDeckLinkAPIInformationID
pub const BMDDeckLinkAPIVersion: BMDDeckLinkAPIInformationID = fourcc(b"vers");
