//! Ledger configuration.

use eykar_coords::Pitch;

use crate::error::Result;

/// Default spacing between spiral rings.
pub const DEFAULT_PITCH: u128 = 3;

/// Configuration for a [`Ledger`](crate::Ledger).
///
/// Pitch is chosen once per deployment. Changing it after participants have
/// registered would move every location that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LedgerConfig {
    /// Spacing between adjacent spiral lattice points
    pub pitch: u128,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            pitch: DEFAULT_PITCH,
        }
    }
}

impl LedgerConfig {
    /// Override the pitch.
    pub fn with_pitch(mut self, pitch: u128) -> Self {
        self.pitch = pitch;
        self
    }

    /// Check the configuration, returning the validated pitch.
    pub fn validate(&self) -> Result<Pitch> {
        Ok(Pitch::new(self.pitch)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_pitch() {
        let config = LedgerConfig::default();
        assert_eq!(config.pitch, DEFAULT_PITCH);
        assert_eq!(config.validate().unwrap().get(), DEFAULT_PITCH);
    }

    #[test]
    fn zero_pitch_fails_validation() {
        let config = LedgerConfig::default().with_pitch(0);
        assert_eq!(
            config.validate(),
            Err(Error::Coords(eykar_coords::Error::InvalidPitch))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let config: LedgerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LedgerConfig::default());

        let config: LedgerConfig = serde_json::from_str(r#"{"pitch": 10}"#).unwrap();
        assert_eq!(config.pitch, 10);
    }
}
