//! In-memory `EfxApi` fake for tests: records every native call and can be
//! told to fail a specific entry point.

use std::sync::{Arc, Mutex};

use reverbbridge_openal::efx::{ALenum, ALfloat, ALuint, AL_NO_ERROR};
use reverbbridge_openal::EfxApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GenEffects(usize),
    EffectI(ALuint, ALenum, ALenum),
    EffectF(ALuint, ALenum, ALfloat),
    GenAuxSlots(usize),
    AuxSlotI(ALuint, ALenum, ALuint),
    AuxSlotF(ALuint, ALenum, ALfloat),
}

struct State {
    calls: Vec<Call>,
    last_call: &'static str,
    fail_call: Option<&'static str>,
    next_effect: ALuint,
    next_slot: ALuint,
}

/// Cloning shares the recorded state, so a test can hand one clone to the
/// session and keep another for inspection.
#[derive(Clone)]
pub struct ScriptedEfx {
    state: Arc<Mutex<State>>,
}

const SCRIPTED_ERROR: ALenum = 0xA001;

impl ScriptedEfx {
    /// A fake that reports no error for any call.
    pub fn ok() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                calls: Vec::new(),
                last_call: "",
                fail_call: None,
                next_effect: 1,
                next_slot: 1,
            })),
        }
    }

    /// A fake whose error indicator fires right after `call` is issued.
    pub fn fail_on(call: &'static str) -> Self {
        let fake = Self::ok();
        fake.state.lock().unwrap().fail_call = Some(call);
        fake
    }

    pub fn clear_failure(&self) {
        self.state.lock().unwrap().fail_call = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    /// Last float value written to an effect parameter, if any.
    pub fn effect_value(&self, param: ALenum) -> Option<f32> {
        self.calls().iter().rev().find_map(|c| match c {
            Call::EffectF(_, p, v) if *p == param => Some(*v),
            _ => None,
        })
    }

    fn record(&self, call: &'static str, entry: Call) {
        let mut state = self.state.lock().unwrap();
        state.last_call = call;
        state.calls.push(entry);
    }
}

impl EfxApi for ScriptedEfx {
    fn get_error(&self) -> ALenum {
        let state = self.state.lock().unwrap();
        if state.fail_call == Some(state.last_call) {
            SCRIPTED_ERROR
        } else {
            AL_NO_ERROR
        }
    }

    fn gen_effects(&self, count: usize) -> Vec<ALuint> {
        let handles: Vec<ALuint> = {
            let mut state = self.state.lock().unwrap();
            (0..count)
                .map(|_| {
                    let h = state.next_effect;
                    state.next_effect += 1;
                    h
                })
                .collect()
        };
        self.record("alGenEffects", Call::GenEffects(count));
        handles
    }

    fn effect_i(&self, effect: ALuint, param: ALenum, value: ALenum) {
        self.record("alEffecti", Call::EffectI(effect, param, value));
    }

    fn effect_f(&self, effect: ALuint, param: ALenum, value: ALfloat) {
        self.record("alEffectf", Call::EffectF(effect, param, value));
    }

    fn gen_auxiliary_effect_slots(&self, count: usize) -> Vec<ALuint> {
        let handles: Vec<ALuint> = {
            let mut state = self.state.lock().unwrap();
            (0..count)
                .map(|_| {
                    let h = state.next_slot;
                    state.next_slot += 1;
                    h
                })
                .collect()
        };
        self.record("alGenAuxiliaryEffectSlots", Call::GenAuxSlots(count));
        handles
    }

    fn aux_slot_i(&self, slot: ALuint, param: ALenum, value: ALuint) {
        self.record("alAuxiliaryEffectSloti", Call::AuxSlotI(slot, param, value));
    }

    fn aux_slot_f(&self, slot: ALuint, param: ALenum, value: ALfloat) {
        self.record("alAuxiliaryEffectSlotf", Call::AuxSlotF(slot, param, value));
    }
}
