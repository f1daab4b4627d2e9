/// One EAX-style reverb character (the full 18-parameter model).
///
/// Values are stored in the conventions the catalog table was authored in:
/// `reflections_gain` and `late_reverb_gain` are millibels (e.g. -1000),
/// `air_absorption_hf` is dB per meter (e.g. -5.0). The backend converts
/// them to the native scales when it writes the effect.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReverbPreset {
    pub decay_time: f32,
    pub decay_hf_ratio: f32,
    pub decay_lf_ratio: f32,
    pub reflections_gain: f32,
    pub reflections_delay: f32,
    pub late_reverb_gain: f32,
    pub late_reverb_delay: f32,
    pub echo_time: f32,
    pub echo_depth: f32,
    pub modulation_time: f32,
    pub modulation_depth: f32,
    pub air_absorption_hf: f32,
    pub hf_reference: f32,
    pub lf_reference: f32,
    pub room_rolloff_factor: f32,
    pub density: f32,
    pub diffusion: f32,
    /// Output gain of the auxiliary slot, linear.
    pub gain: f32,
}
