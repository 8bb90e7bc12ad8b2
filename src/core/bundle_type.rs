//! Bundle types and the channel/optimization axes they are built from.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distribution channel of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Public single-file UMD bundle
    Umd,
    /// CommonJS bundle for Node and npm consumers
    Node,
    /// Internal-company (www) bundle
    Fb,
    /// Native-mobile bundle
    Rn,
}

impl Channel {
    /// Get the channel name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Umd => "umd",
            Channel::Node => "node",
            Channel::Fb => "fb",
            Channel::Rn => "rn",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optimization level of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimization {
    /// Development build (warnings, unminified)
    Development,
    /// Production build (minified)
    Production,
}

/// A bundle type: one concrete build output flavor.
///
/// Deserialization goes through [`FromStr`](std::str::FromStr), so config
/// files and the command line accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum BundleType {
    UmdDev,
    UmdProd,
    NodeDev,
    NodeProd,
    FbDev,
    FbProd,
    RnDev,
    RnProd,
}

impl BundleType {
    /// Every bundle type, in declaration order.
    pub const ALL: [BundleType; 8] = [
        BundleType::UmdDev,
        BundleType::UmdProd,
        BundleType::NodeDev,
        BundleType::NodeProd,
        BundleType::FbDev,
        BundleType::FbProd,
        BundleType::RnDev,
        BundleType::RnProd,
    ];

    /// Get the canonical name (e.g., "UMD_DEV").
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleType::UmdDev => "UMD_DEV",
            BundleType::UmdProd => "UMD_PROD",
            BundleType::NodeDev => "NODE_DEV",
            BundleType::NodeProd => "NODE_PROD",
            BundleType::FbDev => "FB_DEV",
            BundleType::FbProd => "FB_PROD",
            BundleType::RnDev => "RN_DEV",
            BundleType::RnProd => "RN_PROD",
        }
    }

    /// Get the distribution channel.
    pub fn channel(&self) -> Channel {
        match self {
            BundleType::UmdDev | BundleType::UmdProd => Channel::Umd,
            BundleType::NodeDev | BundleType::NodeProd => Channel::Node,
            BundleType::FbDev | BundleType::FbProd => Channel::Fb,
            BundleType::RnDev | BundleType::RnProd => Channel::Rn,
        }
    }

    /// Get the optimization level.
    pub fn optimization(&self) -> Optimization {
        match self {
            BundleType::UmdDev
            | BundleType::NodeDev
            | BundleType::FbDev
            | BundleType::RnDev => Optimization::Development,
            BundleType::UmdProd
            | BundleType::NodeProd
            | BundleType::FbProd
            | BundleType::RnProd => Optimization::Production,
        }
    }

    /// Check if this is a development build.
    pub fn is_dev(&self) -> bool {
        self.optimization() == Optimization::Development
    }
}

impl fmt::Display for BundleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts the canonical name in any case, with `-` or `_` separators.
impl std::str::FromStr for BundleType {
    type Err = ParseBundleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        BundleType::ALL
            .into_iter()
            .find(|bt| bt.as_str() == normalized)
            .ok_or_else(|| ParseBundleTypeError(s.to_string()))
    }
}

impl TryFrom<String> for BundleType {
    type Error = ParseBundleTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error returned when parsing an unknown bundle type string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid bundle type '{0}', valid values: UMD_DEV, UMD_PROD, NODE_DEV, NODE_PROD, \
     FB_DEV, FB_PROD, RN_DEV, RN_PROD"
)]
pub struct ParseBundleTypeError(pub String);
