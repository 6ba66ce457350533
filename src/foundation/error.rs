/// Convenience result type used across camrig.
pub type CamrigResult<T> = Result<T, CamrigError>;

/// Top-level error taxonomy used by the planning APIs.
///
/// Every public operation either returns a complete, valid value or one of these. Nothing is
/// partially built on failure.
#[derive(thiserror::Error, Debug)]
pub enum CamrigError {
    /// Degenerate or zero-size subject geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Out-of-range numeric parameter or malformed configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Lighting style name outside the known set.
    #[error("unknown lighting style: '{0}' (expected studio, outdoor or dramatic)")]
    UnknownLightingStyle(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CamrigError {
    /// Build a [`CamrigError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`CamrigError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`CamrigError::UnknownLightingStyle`] value.
    pub fn unknown_lighting_style(name: impl Into<String>) -> Self {
        Self::UnknownLightingStyle(name.into())
    }

    /// Build a [`CamrigError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
