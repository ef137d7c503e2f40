#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    #[error("config: {0}")]
    Config(#[from] dataschemes::ConfigError),

    #[error("{0}")]
    Coercion(#[from] dataschemes::CoercionError),

    #[error("invalid boolean {text:?}: expected true or false")]
    InvalidBoolean {
        text: String,
        source: std::str::ParseBoolError,
    },
}
