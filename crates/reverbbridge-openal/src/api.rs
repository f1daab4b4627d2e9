use crate::efx::{ALenum, ALfloat, ALuint};

/// The capability set the bridge consumes from the native audio library.
///
/// Production code wires this to [`crate::OpenAlDriver`]; tests wire it to an
/// in-memory fake that records calls and scripts error codes. The trait is
/// the only seam through which the bridge touches the native side.
pub trait EfxApi: Send {
    /// Returns and clears the library's last-error indicator.
    fn get_error(&self) -> ALenum;

    /// Creates `count` effect objects and returns their handles.
    /// Handles are library-assigned; zero never names a live object.
    fn gen_effects(&self, count: usize) -> Vec<ALuint>;

    /// Sets an integer-valued effect parameter (e.g. the effect type).
    fn effect_i(&self, effect: ALuint, param: ALenum, value: ALenum);

    /// Sets a float-valued effect parameter.
    fn effect_f(&self, effect: ALuint, param: ALenum, value: ALfloat);

    /// Creates `count` auxiliary effect slots and returns their handles.
    fn gen_auxiliary_effect_slots(&self, count: usize) -> Vec<ALuint>;

    /// Sets an integer-valued slot parameter (e.g. the routed effect).
    fn aux_slot_i(&self, slot: ALuint, param: ALenum, value: ALuint);

    /// Sets a float-valued slot parameter (e.g. the slot output gain).
    fn aux_slot_f(&self, slot: ALuint, param: ALenum, value: ALfloat);
}
