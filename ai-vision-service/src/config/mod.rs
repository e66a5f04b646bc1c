use serde::Deserialize;
use service_core::config::{self as core_config, get_env_parsed, is_production};
use service_core::error::AppError;

/// Requests carry only an image URL, never image bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct VisionConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub limits: RequestLimits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestLimits {
    pub max_body_bytes: usize,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            limits: RequestLimits {
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            },
        }
    }
}

impl VisionConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = is_production();

        Ok(VisionConfig {
            common: common_config,
            limits: RequestLimits {
                max_body_bytes: get_env_parsed(
                    "AI_VISION_MAX_BODY_BYTES",
                    DEFAULT_MAX_BODY_BYTES,
                    is_prod,
                )?,
            },
        })
    }
}
