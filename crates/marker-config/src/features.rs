//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the boolean switches for optional inline constructs.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which inline constructs the compiler resolves. A disabled
/// construct is left in the output as literal text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Resolve `[name](url)` links into anchor tags.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,

    /// Resolve `![alt](url)` images into image tags.
    /// Default: true
    #[serde(default = "default_true")]
    pub images: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            links: true,
            images: true,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// All fields are copied from `other` since they're all
    /// simple values with no "unset" state in TOML.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.links = other.links;
        self.images = other.images;
    }
}

fn default_true() -> bool {
    true
}
