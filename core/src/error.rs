#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("die face must be within 1..=6, got {0}")]
    FaceOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown pairing '{0}' (expected 'combined' or 'independent')")]
    UnknownPairing(String),
}
