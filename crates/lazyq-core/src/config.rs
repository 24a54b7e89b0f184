//! Operator configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a negative count handed to `take`/`skip`/`take_while`/`skip_while` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Negative counts are `Error::InvalidArgument`.
    #[default]
    Reject,
    /// Negative counts are treated as zero.
    Clamp,
}

impl CountPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(CountPolicy::Reject),
            "clamp" => Some(CountPolicy::Clamp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Treatment of negative element counts. Page sizes are never clamped.
    pub count_policy: CountPolicy,

    /// Page size used by `paged_group_sum_default`.
    pub default_page_size: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            count_policy: CountPolicy::Reject,
            default_page_size: 3,
        }
    }
}

impl SequenceConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_COUNT_POLICY`: `reject` or `clamp`
    /// - `LAZYQ_DEFAULT_PAGE_SIZE`: page size for `paged_group_sum_default`; `0` is ignored
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYQ_COUNT_POLICY") {
            if let Some(p) = CountPolicy::parse(&s) {
                cfg.count_policy = p;
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_DEFAULT_PAGE_SIZE") {
            if let Ok(v) = s.parse::<usize>() {
                if v > 0 {
                    cfg.default_page_size = v;
                }
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_count_policy(mut self, policy: CountPolicy) -> Self {
        self.count_policy = policy;
        self
    }

    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::Config("default_page_size must be positive".into()));
        }
        Ok(())
    }
}
