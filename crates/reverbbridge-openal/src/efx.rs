//! EFX enumeration constants consumed by the bridge.
//!
//! Values mirror the headers the shipped `soft_oal.dll` build was compiled
//! against; they are wire-compatible with the existing mod binaries and must
//! not be re-derived from newer OpenAL headers.

pub type ALenum = i32;
pub type ALuint = u32;
pub type ALfloat = f32;

pub const AL_NO_ERROR: ALenum = 0;

pub const AL_EFFECTSLOT_EFFECT: ALenum = 0x0001;
pub const AL_EFFECTSLOT_GAIN: ALenum = 0x0002;

pub const AL_EFFECT_TYPE: ALenum = 0x8001;
pub const AL_EFFECT_EAXREVERB: ALenum = 0x8000;

pub const AL_EAXREVERB_DECAY_TIME: ALenum = 0x0001;
pub const AL_EAXREVERB_DECAY_HFRATIO: ALenum = 0x0002;
pub const AL_EAXREVERB_DECAY_LFRATIO: ALenum = 0x0003;
pub const AL_EAXREVERB_REFLECTIONS_GAIN: ALenum = 0x0004;
pub const AL_EAXREVERB_REFLECTIONS_DELAY: ALenum = 0x0005;
pub const AL_EAXREVERB_LATE_REVERB_GAIN: ALenum = 0x0006;
pub const AL_EAXREVERB_LATE_REVERB_DELAY: ALenum = 0x0007;
pub const AL_EAXREVERB_ECHO_TIME: ALenum = 0x0008;
pub const AL_EAXREVERB_ECHO_DEPTH: ALenum = 0x0009;
pub const AL_EAXREVERB_MODULATION_TIME: ALenum = 0x000A;
pub const AL_EAXREVERB_MODULATION_DEPTH: ALenum = 0x000B;
pub const AL_EAXREVERB_AIR_ABSORPTION_GAINHF: ALenum = 0x000C;
pub const AL_EAXREVERB_HFREFERENCE: ALenum = 0x000D;
pub const AL_EAXREVERB_LFREFERENCE: ALenum = 0x000E;
pub const AL_EAXREVERB_ROOM_ROLLOFF_FACTOR: ALenum = 0x000F;
pub const AL_EAXREVERB_DENSITY: ALenum = 0x0010;
pub const AL_EAXREVERB_DIFFUSION: ALenum = 0x0011;
