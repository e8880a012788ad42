use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const DEFAULT_CHUNK_SIZE: u32 = 16;
pub const DEFAULT_SEED: u64 = 0x5EED_5A4D;
pub const DEFAULT_SETTLE_THRESHOLD: u8 = 8;

/// Construction parameters. Fixed for the lifetime of a world; resizing
/// means building a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub chunk_size: u32,
    /// Seeds the tie-break RNG; equal seeds give equal runs.
    pub seed: u64,
    pub settle_threshold: u8,
    pub perf_metrics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            chunk_size: DEFAULT_CHUNK_SIZE,
            seed: DEFAULT_SEED,
            settle_threshold: DEFAULT_SETTLE_THRESHOLD,
            perf_metrics: false,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = EngineError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(invalid);
        }
        // Coordinates travel as i32 through the public API.
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(invalid);
        }
        if (self.width as usize).checked_mul(self.height as usize).is_none() {
            return Err(invalid);
        }
        if self.chunk_size == 0 || self.chunk_size > i32::MAX as u32 {
            return Err(EngineError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = EngineConfig::from_json(r#"{ "width": 64, "height": 32 }"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.settle_threshold, DEFAULT_SETTLE_THRESHOLD);
        assert!(!config.perf_metrics);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let config = EngineConfig::from_json(
            r#"{ "width": 8, "height": 8, "chunkSize": 4, "seed": 9, "settleThreshold": 0, "perfMetrics": true }"#,
        )
        .unwrap();
        assert_eq!(config.chunk_size, 4);
        assert_eq!(config.seed, 9);
        assert_eq!(config.settle_threshold, 0);
        assert!(config.perf_metrics);
    }

    #[test]
    fn rejects_bad_documents_and_values() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(EngineError::InvalidConfig(_))
        ));
        assert_eq!(
            EngineConfig::from_json(r#"{ "width": 0 }"#),
            Err(EngineError::InvalidDimensions { width: 0, height: 256 })
        );
        assert_eq!(
            EngineConfig::from_json(r#"{ "chunkSize": 0 }"#),
            Err(EngineError::InvalidChunkSize(0))
        );
    }
}
