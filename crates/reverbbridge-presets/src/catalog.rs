use std::collections::HashMap;

use crate::preset::ReverbPreset;

/// Universal fallback entry; the builtin catalog always contains it.
pub const GENERIC: &str = "generic";

/// Positional constructor so the builtin table below reads row-per-preset.
/// Argument order matches the field order of [`ReverbPreset`].
#[allow(clippy::too_many_arguments)]
const fn row(
    decay_time: f32,
    decay_hf_ratio: f32,
    decay_lf_ratio: f32,
    reflections_gain: f32,
    reflections_delay: f32,
    late_reverb_gain: f32,
    late_reverb_delay: f32,
    echo_time: f32,
    echo_depth: f32,
    modulation_time: f32,
    modulation_depth: f32,
    air_absorption_hf: f32,
    hf_reference: f32,
    lf_reference: f32,
    room_rolloff_factor: f32,
    density: f32,
    diffusion: f32,
    gain: f32,
) -> ReverbPreset {
    ReverbPreset {
        decay_time,
        decay_hf_ratio,
        decay_lf_ratio,
        reflections_gain,
        reflections_delay,
        late_reverb_gain,
        late_reverb_delay,
        echo_time,
        echo_depth,
        modulation_time,
        modulation_depth,
        air_absorption_hf,
        hf_reference,
        lf_reference,
        room_rolloff_factor,
        density,
        diffusion,
        gain,
    }
}

/// The acoustic ground truth for the mod ecosystem. Do not regenerate these
/// values from formulas; existing content depends on them verbatim.
#[rustfmt::skip]
const BUILTIN: &[(&str, ReverbPreset)] = &[
    ("generic",       row( 1.49, 0.83, 1.0, -1000.0, 0.007, -1100.0, 0.011, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.0)),
    ("room",          row( 0.40, 0.67, 1.0,  -100.0, 0.002,  -600.0, 0.006, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 0.79, 1.0,  1.0)),
    ("bathroom",      row( 1.49, 0.54, 1.0, -1200.0, 0.007,  -700.0, 0.011, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.2)),
    ("livingroom",    row( 0.50, 0.10, 1.0, -1000.0, 0.003,  -600.0, 0.004, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 0.68, 1.0,  1.0)),
    ("stoneroom",     row( 2.31, 0.64, 1.0, -1000.0, 0.012,  -300.0, 0.017, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  0.9)),
    ("auditorium",    row( 4.32, 0.59, 1.0, -1000.0, 0.020,  -476.0, 0.030, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  0.9)),
    ("concerthall",   row( 3.92, 0.70, 1.0, -1000.0, 0.020,  -500.0, 0.029, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  0.9)),
    ("cave",          row( 2.91, 1.30, 1.0, -1000.0, 0.015,  -600.0, 0.022, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.7,  1.0)),
    ("hallway",       row( 1.49, 0.59, 1.0, -1000.0, 0.007,  -300.0, 0.011, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.7,  1.0)),
    ("stonecorridor", row( 2.70, 0.79, 1.0, -1000.0, 0.013,  -300.0, 0.020, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.8,  1.0)),
    ("forest",        row( 1.49, 0.54, 1.0, -1000.0, 0.162, -1100.0, 0.088, 0.125, 1.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.3,  1.0)),
    ("city",          row( 1.49, 0.67, 1.0, -1000.0, 0.007,  -800.0, 0.011, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.5,  1.0)),
    ("mountains",     row( 1.49, 0.21, 1.0, -1000.0, 0.300, -1200.0, 0.100, 0.25,  1.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.3,  1.0)),
    ("quarry",        row( 1.49, 0.83, 1.0, -1000.0, 0.061, -1000.0, 0.025, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.0)),
    ("plain",         row( 1.49, 0.50, 1.0, -1000.0, 0.179, -2000.0, 0.100, 0.25,  1.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  0.5,  1.0)),
    ("parkinglot",    row( 1.65, 1.50, 1.0, -1000.0, 0.008, -1300.0, 0.012, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.0)),
    ("sewerpipe",     row( 2.81, 0.14, 1.0, -1000.0, 0.014,  -800.0, 0.021, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 0.81, 0.14, 1.0)),
    ("underwater",    row( 1.49, 1.00, 1.0, -1000.0, 0.007,  -400.0, 0.011, 0.25,  0.0, 0.25, 0.0, -5.0, 5000.0, 250.0, 0.0, 0.10, 1.0,  0.7)),
    ("drugged",       row( 8.39, 1.39, 1.0, -1000.0, 0.002, -1000.0, 0.030, 0.25,  1.0, 0.25, 1.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.0)),
    ("dizzy",         row(17.23, 0.56, 1.0, -1000.0, 0.002, -1000.0, 0.030, 0.25,  1.0, 0.25, 1.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.0)),
    ("psychotic",     row( 7.56, 0.91, 1.0, -1000.0, 0.002, -1000.0, 0.030, 0.25,  1.0, 0.25, 1.0, -5.0, 5000.0, 250.0, 0.0, 1.0,  1.0,  1.0)),
];

/// Immutable name -> preset mapping. Built once, read many times.
pub struct PresetCatalog {
    entries: HashMap<&'static str, ReverbPreset>,
}

impl PresetCatalog {
    /// Builds the catalog of builtin environments.
    pub fn builtin() -> Self {
        let entries: HashMap<&'static str, ReverbPreset> =
            BUILTIN.iter().copied().collect();
        Self { entries }
    }

    /// Case-insensitive lookup; unknown names resolve to the Generic preset.
    pub fn lookup(&self, name: &str) -> &ReverbPreset {
        let key = name.to_ascii_lowercase();
        self.entries.get(key.as_str()).unwrap_or_else(|| {
            self.entries
                .get(GENERIC)
                .expect("builtin catalog always contains 'generic'")
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
