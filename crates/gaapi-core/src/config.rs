//! Codec configuration.

/// What to do with extension entries that reuse a fixed field's wire key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Leave the entry out of the encoded form and log a warning.
    #[default]
    Skip,
    /// Fail the encode with [`CodecError::ExtensionCollision`](crate::CodecError::ExtensionCollision).
    Reject,
}

/// Configuration for the [`Codec`](crate::Codec).
///
/// # Example
///
/// ```
/// use gaapi_core::{CodecConfig, CollisionPolicy};
///
/// let config = CodecConfig::new()
///     .with_pretty(true)
///     .with_collision_policy(CollisionPolicy::Reject);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    /// Emit indented JSON
    pub(crate) pretty: bool,
    /// Handling of extension keys that shadow fixed fields
    pub(crate) collision_policy: CollisionPolicy,
}

impl CodecConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented JSON from `encode`.
    ///
    /// Defaults to compact output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the policy for extension keys that shadow fixed fields.
    ///
    /// Defaults to [`CollisionPolicy::Skip`].
    #[must_use]
    pub const fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
