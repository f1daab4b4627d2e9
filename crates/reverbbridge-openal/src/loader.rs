#![forbid(unsafe_op_in_unsafe_fn)]

use libloading::Library;
use thiserror::Error;

use crate::api::EfxApi;
use crate::efx::{ALenum, ALfloat, ALuint};

/* =============================================================================================
   Runtime binding to the native OpenAL library
   ============================================================================================= */

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("load library failed file='{file}': {reason}")]
    Open { file: String, reason: String },

    #[error("missing entry point '{symbol}' in '{file}'")]
    Symbol { file: String, symbol: &'static str },

    #[error("no native audio library found (tried: {tried})")]
    NoCandidate { tried: String },
}

/// Library names probed by [`OpenAlDriver::load_default`], in order.
/// `soft_oal.dll` is the build shipped next to the game binary.
#[cfg(windows)]
pub const DEFAULT_CANDIDATES: &[&str] = &["soft_oal.dll", "OpenAL32.dll"];
#[cfg(not(windows))]
pub const DEFAULT_CANDIDATES: &[&str] = &["libopenal.so.1", "libopenal.so"];

type PfnGetError = unsafe extern "system" fn() -> ALenum;
type PfnGenEffects = unsafe extern "system" fn(ALuint, *mut ALuint);
type PfnEffectI = unsafe extern "system" fn(ALuint, ALenum, ALenum);
type PfnEffectF = unsafe extern "system" fn(ALuint, ALenum, ALfloat);
type PfnGenAuxSlots = unsafe extern "system" fn(ALuint, *mut ALuint);
type PfnAuxSlotI = unsafe extern "system" fn(ALuint, ALenum, ALuint);
type PfnAuxSlotF = unsafe extern "system" fn(ALuint, ALenum, ALfloat);

/// Production [`EfxApi`] backed by a runtime-loaded OpenAL library.
///
/// All entry points are resolved eagerly at load; a missing symbol fails the
/// whole load rather than surfacing later as a null call. The `Library`
/// handle is kept alive for as long as the resolved pointers are.
pub struct OpenAlDriver {
    _lib: Library,
    get_error: PfnGetError,
    gen_effects: PfnGenEffects,
    effect_i: PfnEffectI,
    effect_f: PfnEffectF,
    gen_aux_slots: PfnGenAuxSlots,
    aux_slot_i: PfnAuxSlotI,
    aux_slot_f: PfnAuxSlotF,
}

impl OpenAlDriver {
    /// Loads one specific library file and resolves every entry point.
    pub fn load(file: &str) -> Result<Self, LoadError> {
        let lib = unsafe {
            Library::new(file).map_err(|e| LoadError::Open {
                file: file.to_string(),
                reason: e.to_string(),
            })?
        };

        // Safety: pointers are resolved from a live library handle that the
        // driver keeps alive alongside them.
        let driver = unsafe {
            Self {
                get_error: resolve(&lib, file, "alGetError")?,
                gen_effects: resolve(&lib, file, "alGenEffects")?,
                effect_i: resolve(&lib, file, "alEffecti")?,
                effect_f: resolve(&lib, file, "alEffectf")?,
                gen_aux_slots: resolve(&lib, file, "alGenAuxiliaryEffectSlots")?,
                aux_slot_i: resolve(&lib, file, "alAuxiliaryEffectSloti")?,
                aux_slot_f: resolve(&lib, file, "alAuxiliaryEffectSlotf")?,
                _lib: lib,
            }
        };

        log::info!("openal: loaded '{file}', all effect entry points resolved");
        Ok(driver)
    }

    /// Probes `candidates` in order and binds the first loadable library.
    pub fn load_any(candidates: &[String]) -> Result<Self, LoadError> {
        for file in candidates {
            match Self::load(file) {
                Ok(driver) => return Ok(driver),
                Err(e) => log::warn!("openal: SKIP candidate '{file}': {e}"),
            }
        }
        Err(LoadError::NoCandidate {
            tried: candidates.join(", "),
        })
    }

    pub fn load_default() -> Result<Self, LoadError> {
        let candidates: Vec<String> =
            DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect();
        Self::load_any(&candidates)
    }
}

unsafe fn resolve<T: Copy>(
    lib: &Library,
    file: &str,
    symbol: &'static str,
) -> Result<T, LoadError> {
    let mut bytes = Vec::with_capacity(symbol.len() + 1);
    bytes.extend_from_slice(symbol.as_bytes());
    bytes.push(0);

    let sym = unsafe {
        lib.get::<T>(&bytes).map_err(|_| LoadError::Symbol {
            file: file.to_string(),
            symbol,
        })?
    };

    Ok(*sym)
}

impl EfxApi for OpenAlDriver {
    fn get_error(&self) -> ALenum {
        unsafe { (self.get_error)() }
    }

    fn gen_effects(&self, count: usize) -> Vec<ALuint> {
        let mut handles = vec![0 as ALuint; count];
        unsafe { (self.gen_effects)(count as ALuint, handles.as_mut_ptr()) };
        handles
    }

    fn effect_i(&self, effect: ALuint, param: ALenum, value: ALenum) {
        unsafe { (self.effect_i)(effect, param, value) }
    }

    fn effect_f(&self, effect: ALuint, param: ALenum, value: ALfloat) {
        unsafe { (self.effect_f)(effect, param, value) }
    }

    fn gen_auxiliary_effect_slots(&self, count: usize) -> Vec<ALuint> {
        let mut handles = vec![0 as ALuint; count];
        unsafe { (self.gen_aux_slots)(count as ALuint, handles.as_mut_ptr()) };
        handles
    }

    fn aux_slot_i(&self, slot: ALuint, param: ALenum, value: ALuint) {
        unsafe { (self.aux_slot_i)(slot, param, value) }
    }

    fn aux_slot_f(&self, slot: ALuint, param: ALenum, value: ALfloat) {
        unsafe { (self.aux_slot_f)(slot, param, value) }
    }
}
