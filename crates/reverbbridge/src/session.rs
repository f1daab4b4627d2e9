use reverbbridge_openal::efx::{
    ALenum, ALfloat, ALuint, AL_EAXREVERB_AIR_ABSORPTION_GAINHF, AL_EAXREVERB_DECAY_HFRATIO,
    AL_EAXREVERB_DECAY_LFRATIO, AL_EAXREVERB_DECAY_TIME, AL_EAXREVERB_DENSITY,
    AL_EAXREVERB_DIFFUSION, AL_EAXREVERB_ECHO_DEPTH, AL_EAXREVERB_ECHO_TIME,
    AL_EAXREVERB_HFREFERENCE, AL_EAXREVERB_LATE_REVERB_DELAY, AL_EAXREVERB_LATE_REVERB_GAIN,
    AL_EAXREVERB_LFREFERENCE, AL_EAXREVERB_MODULATION_DEPTH, AL_EAXREVERB_MODULATION_TIME,
    AL_EAXREVERB_REFLECTIONS_DELAY, AL_EAXREVERB_REFLECTIONS_GAIN,
    AL_EAXREVERB_ROOM_ROLLOFF_FACTOR, AL_EFFECTSLOT_EFFECT, AL_EFFECTSLOT_GAIN, AL_EFFECT_EAXREVERB,
    AL_EFFECT_TYPE, AL_NO_ERROR,
};
use reverbbridge_openal::EfxApi;
use reverbbridge_presets::ReverbPreset;

use crate::error::{BridgeError, BridgeResult};

/// Catalog gains are stored in millibels; the native parameter is the same
/// quantity scaled down by this factor.
const MILLIBEL_SCALE: f32 = 1000.0;

#[inline]
fn db_to_linear(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}

/// Owns the effect and auxiliary-slot handles derived from one bound native
/// library, and writes presets into them.
///
/// Handles are created lazily on the first successful [`apply`] and then
/// reused for every later preset change; only parameter values are
/// overwritten. A failed creation sequence is not rolled back: whatever
/// handles were created stay as they are and the next call continues from
/// there (the native library is shared and long-lived, so nothing is leaked
/// that the process would want back).
///
/// Single-owner, no internal locking. Concurrent use is the caller's problem.
///
/// [`apply`]: ReverbSession::apply
pub struct ReverbSession {
    api: Box<dyn EfxApi>,
    effect: ALuint,
    slot: ALuint,
    slot_gain_scale: f32,
}

impl ReverbSession {
    pub fn new(api: Box<dyn EfxApi>) -> Self {
        Self::with_gain_scale(api, 1.0)
    }

    pub fn with_gain_scale(api: Box<dyn EfxApi>, slot_gain_scale: f32) -> Self {
        Self {
            api,
            effect: 0,
            slot: 0,
            slot_gain_scale,
        }
    }

    /// Pushes all 18 preset parameters into the effect, re-binds the effect
    /// to the slot and sets the slot gain. Aborts on the first native error.
    pub fn apply(&mut self, preset: &ReverbPreset) -> BridgeResult<()> {
        self.ensure_handles()?;

        self.effect_write(AL_EAXREVERB_DECAY_TIME, preset.decay_time)?;
        self.effect_write(AL_EAXREVERB_DECAY_HFRATIO, preset.decay_hf_ratio)?;
        self.effect_write(AL_EAXREVERB_DECAY_LFRATIO, preset.decay_lf_ratio)?;
        self.effect_write(
            AL_EAXREVERB_REFLECTIONS_GAIN,
            preset.reflections_gain / MILLIBEL_SCALE,
        )?;
        self.effect_write(AL_EAXREVERB_REFLECTIONS_DELAY, preset.reflections_delay)?;
        self.effect_write(
            AL_EAXREVERB_LATE_REVERB_GAIN,
            preset.late_reverb_gain / MILLIBEL_SCALE,
        )?;
        self.effect_write(AL_EAXREVERB_LATE_REVERB_DELAY, preset.late_reverb_delay)?;
        self.effect_write(AL_EAXREVERB_ECHO_TIME, preset.echo_time)?;
        self.effect_write(AL_EAXREVERB_ECHO_DEPTH, preset.echo_depth)?;
        self.effect_write(AL_EAXREVERB_MODULATION_TIME, preset.modulation_time)?;
        self.effect_write(AL_EAXREVERB_MODULATION_DEPTH, preset.modulation_depth)?;
        self.effect_write(
            AL_EAXREVERB_AIR_ABSORPTION_GAINHF,
            db_to_linear(preset.air_absorption_hf),
        )?;
        self.effect_write(AL_EAXREVERB_HFREFERENCE, preset.hf_reference)?;
        self.effect_write(AL_EAXREVERB_LFREFERENCE, preset.lf_reference)?;
        self.effect_write(AL_EAXREVERB_ROOM_ROLLOFF_FACTOR, preset.room_rolloff_factor)?;
        self.effect_write(AL_EAXREVERB_DENSITY, preset.density)?;
        self.effect_write(AL_EAXREVERB_DIFFUSION, preset.diffusion)?;

        self.api
            .aux_slot_f(self.slot, AL_EFFECTSLOT_GAIN, preset.gain * self.slot_gain_scale);
        self.check("alAuxiliaryEffectSlotf")?;

        // Always re-asserted in case the slot was reset from outside.
        self.api
            .aux_slot_i(self.slot, AL_EFFECTSLOT_EFFECT, self.effect);
        self.check("alAuxiliaryEffectSloti")?;

        Ok(())
    }

    /// Creates the effect and slot on first use. Gated on the effect handle
    /// only, matching the shipped bridge: a sequence that fails midway keeps
    /// the handles it already created.
    fn ensure_handles(&mut self) -> BridgeResult<()> {
        if self.effect != 0 {
            return Ok(());
        }

        self.effect = self.api.gen_effects(1).first().copied().unwrap_or(0);
        self.check("alGenEffects")?;

        self.api
            .effect_i(self.effect, AL_EFFECT_TYPE, AL_EFFECT_EAXREVERB);
        self.check("alEffecti")?;

        self.slot = self
            .api
            .gen_auxiliary_effect_slots(1)
            .first()
            .copied()
            .unwrap_or(0);
        self.check("alGenAuxiliaryEffectSlots")?;

        self.api
            .aux_slot_i(self.slot, AL_EFFECTSLOT_EFFECT, self.effect);
        self.check("alAuxiliaryEffectSloti")?;

        log::debug!(
            "session: created effect handle {} and slot handle {}",
            self.effect,
            self.slot
        );
        Ok(())
    }

    fn effect_write(&self, param: ALenum, value: ALfloat) -> BridgeResult<()> {
        self.api.effect_f(self.effect, param, value);
        self.check("alEffectf")
    }

    fn check(&self, call: &'static str) -> BridgeResult<()> {
        let code = self.api.get_error();
        if code == AL_NO_ERROR {
            Ok(())
        } else {
            Err(BridgeError::Native { call, code })
        }
    }
}
