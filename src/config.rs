//! Driver configuration types and builder

pub use crate::error::BuilderError;

/// Default reset pulse delay in milliseconds
///
/// Applied after each edge of the high-low-high reset pulse.
pub const DEFAULT_RESET_PULSE_MS: u32 = 100;

/// Default blink half-period in milliseconds
///
/// The alert blink waits this long before each invert and each normal
/// command.
pub const DEFAULT_BLINK_INTERVAL_MS: u32 = 1000;

/// What a multi-byte operation does when a byte fails to send
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorPolicy {
    /// Stop at the first failed byte and return its error
    #[default]
    Abort,
    /// Keep sending the remaining bytes, then return the first error
    ///
    /// Matches firmware that ignores per-byte status. The controller may be
    /// left in an inconsistent state, but every byte gets its chance on the
    /// bus.
    Continue,
}

/// Driver configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Delay after each reset edge in milliseconds
    pub reset_pulse_ms: u32,
    /// Delay before each blink toggle in milliseconds
    pub blink_interval_ms: u32,
    /// Failure handling for multi-byte operations
    pub error_policy: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_pulse_ms: DEFAULT_RESET_PULSE_MS,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            error_policy: ErrorPolicy::Abort,
        }
    }
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1331::{Builder, ErrorPolicy};
///
/// let config = match Builder::new()
///     .blink_interval_ms(500)
///     .error_policy(ErrorPolicy::Continue)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Configuration under construction
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay after each reset edge
    pub fn reset_pulse_ms(mut self, value: u32) -> Self {
        self.config.reset_pulse_ms = value;
        self
    }

    /// Set the delay before each blink toggle
    pub fn blink_interval_ms(mut self, value: u32) -> Self {
        self.config.blink_interval_ms = value;
        self
    }

    /// Set how multi-byte operations react to a failed byte
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ZeroBlinkInterval` if the blink interval is 0,
    /// which would toggle the panel as fast as the bus allows
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.blink_interval_ms == 0 {
            return Err(BuilderError::ZeroBlinkInterval);
        }
        Ok(self.config)
    }
}
