//! Runtime reverb preset bridge.
//!
//! Exports a single C-ABI function, `rm_apply_preset`, that resolves a named
//! acoustic preset and pushes it into a shared EAX-reverb effect slot of the
//! runtime-loaded native audio library. Built as a cdylib dropped next to the
//! game binary.

pub mod config;
pub mod error;
#[cfg(test)]
pub(crate) mod scripted;
pub mod session;

pub use crate::config::BridgeConfig;
pub use crate::error::{BridgeError, BridgeResult};
pub use crate::session::ReverbSession;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::PathBuf;
use std::sync::{Once, OnceLock};

use parking_lot::Mutex;
use reverbbridge_openal::{EfxApi, LoadError, OpenAlDriver};
use reverbbridge_presets::PresetCatalog;

/// Produces a bound native driver on demand. Separated out so tests can
/// substitute a factory that fails or hands back a scripted fake.
type DriverFactory<'a> = &'a mut dyn FnMut(&[String]) -> Result<Box<dyn EfxApi>, LoadError>;

/// Everything behind the exported symbol: config, catalog and the lazily
/// created session. One instance per process.
struct Bridge {
    config: BridgeConfig,
    catalog: PresetCatalog,
    session: Option<ReverbSession>,
}

impl Bridge {
    fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            catalog: PresetCatalog::builtin(),
            session: None,
        }
    }

    fn from_disk() -> Self {
        let path = config_path_near_exe();
        Self::new(BridgeConfig::load_or_default(&path))
    }

    /// The whole `rm_apply_preset` operation minus the C boundary: resolve
    /// the preset, make sure a session exists (loading the native library if
    /// this is the first need), apply. A load failure leaves `session` empty
    /// so the next call retries the load.
    fn apply_named(&mut self, name: Option<&str>, driver: DriverFactory<'_>) -> BridgeResult<()> {
        let preset = {
            let name = name.unwrap_or(self.config.default_preset.as_str());
            *self.catalog.lookup(name)
        };

        if self.session.is_none() {
            let api = driver(&self.config.libraries)?;
            self.session = Some(ReverbSession::with_gain_scale(
                api,
                self.config.slot_gain_scale,
            ));
        }

        let session = self
            .session
            .as_mut()
            .expect("session exists after a successful load");
        session.apply(&preset)
    }
}

fn config_path_near_exe() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(config::CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE))
}

static INIT_LOG: Once = Once::new();
static BRIDGE: OnceLock<Mutex<Bridge>> = OnceLock::new();

/// Applies the named reverb preset to the shared effect slot.
///
/// `name` may be null (or non-UTF-8), which selects the configured default
/// preset; unknown names fall back to Generic. Returns `true` only if the
/// library was loaded, the handles exist and every native call in the apply
/// sequence reported no error. On `false` the previous audio state is left
/// untouched.
///
/// # Safety
/// `name` must be null or point to a NUL-terminated string. Calls are
/// serialized internally, but the native library's own thread requirements
/// still apply; the game issues these from its audio-control thread.
#[no_mangle]
pub extern "C" fn rm_apply_preset(name: *const c_char) -> bool {
    INIT_LOG.call_once(|| {
        let _ = env_logger::try_init();
    });

    let name = if name.is_null() {
        None
    } else {
        // Invalid UTF-8 degrades to the default preset rather than failing.
        unsafe { CStr::from_ptr(name) }
            .to_str()
            .ok()
            .map(str::to_owned)
    };

    let bridge = BRIDGE.get_or_init(|| Mutex::new(Bridge::from_disk()));
    let mut bridge = bridge.lock();

    let result = bridge.apply_named(name.as_deref(), &mut |libraries| {
        OpenAlDriver::load_any(libraries).map(|d| Box::new(d) as Box<dyn EfxApi>)
    });

    match result {
        Ok(()) => {
            log::debug!(
                "bridge: applied preset '{}'",
                name.as_deref().unwrap_or("<default>")
            );
            true
        }
        Err(e) => {
            log::warn!(
                "bridge: apply preset '{}' failed: {e}",
                name.as_deref().unwrap_or("<default>")
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::{Call, ScriptedEfx};
    use reverbbridge_openal::efx::AL_EAXREVERB_DECAY_TIME;

    fn bridge() -> Bridge {
        Bridge::new(BridgeConfig::default())
    }

    #[test]
    fn load_failure_reports_error_and_keeps_no_session() {
        let mut bridge = bridge();
        let mut attempts = 0usize;

        let err = bridge
            .apply_named(Some("Cave"), &mut |_| {
                attempts += 1;
                Err(LoadError::NoCandidate {
                    tried: "soft_oal.dll".to_string(),
                })
            })
            .unwrap_err();

        assert!(matches!(err, BridgeError::Load(_)));
        assert_eq!(attempts, 1);
        assert!(bridge.session.is_none());
    }

    #[test]
    fn load_is_reattempted_on_every_call_until_it_succeeds() {
        let mut bridge = bridge();
        let fake = ScriptedEfx::ok();
        let mut attempts = 0usize;

        for _ in 0..3 {
            let _ = bridge.apply_named(Some("Cave"), &mut |_| {
                attempts += 1;
                Err(LoadError::NoCandidate {
                    tried: String::new(),
                })
            });
        }
        assert_eq!(attempts, 3);

        bridge
            .apply_named(Some("Cave"), &mut |_| Ok(Box::new(fake.clone())))
            .unwrap();
        assert!(bridge.session.is_some());

        // Once loaded, the factory is never consulted again.
        bridge
            .apply_named(Some("Forest"), &mut |_| {
                panic!("driver factory must not run after a successful load")
            })
            .unwrap();
    }

    #[test]
    fn load_failure_issues_no_native_calls() {
        let mut bridge = bridge();
        let fake = ScriptedEfx::ok();

        let _ = bridge.apply_named(Some("Cave"), &mut |_| {
            // The factory never hands the fake out, so any recorded call
            // would have bypassed the load failure.
            Err(LoadError::NoCandidate {
                tried: String::new(),
            })
        });

        assert!(fake.calls().is_empty());
    }

    #[test]
    fn missing_name_uses_the_configured_default_preset() {
        let mut config = BridgeConfig::default();
        config.default_preset = "Cave".to_string();
        let mut bridge = Bridge::new(config);
        let fake = ScriptedEfx::ok();

        bridge
            .apply_named(None, &mut |_| Ok(Box::new(fake.clone())))
            .unwrap();

        // Cave's decay time, not Generic's.
        assert_eq!(fake.effect_value(AL_EAXREVERB_DECAY_TIME), Some(2.91));
    }

    #[test]
    fn unknown_name_applies_generic() {
        let mut bridge = bridge();
        let fake = ScriptedEfx::ok();

        bridge
            .apply_named(Some("NoSuchPlace"), &mut |_| Ok(Box::new(fake.clone())))
            .unwrap();

        assert_eq!(fake.effect_value(AL_EAXREVERB_DECAY_TIME), Some(1.49));
        assert_eq!(fake.count(|c| matches!(c, Call::EffectF(..))), 17);
    }

    #[test]
    fn factory_receives_the_configured_library_candidates() {
        let mut config = BridgeConfig::default();
        config.libraries = vec!["custom_oal.dll".to_string()];
        let mut bridge = Bridge::new(config);
        let fake = ScriptedEfx::ok();

        bridge
            .apply_named(Some("Room"), &mut |libraries| {
                assert_eq!(libraries, ["custom_oal.dll".to_string()]);
                Ok(Box::new(fake.clone()))
            })
            .unwrap();
    }
}
