use reverbbridge_openal::efx::ALenum;
use reverbbridge_openal::LoadError;
use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("native library unavailable: {0}")]
    Load(#[from] LoadError),

    #[error("native call failed call='{call}' code=0x{code:04X}")]
    Native { call: &'static str, code: ALenum },
}
