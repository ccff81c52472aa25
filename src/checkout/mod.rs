//! # Checkout Integration
//!
//! Paid preview packages are settled through a third-party checkout dialog. The vendor
//! script is loaded at runtime and then opened with a [`CheckoutOptions`] record; the
//! dialog either reports a payment id or is dismissed.
//!
//! The [`CheckoutGateway`] trait is the seam between the wizard and that vendor. Results
//! never roll state back: callers turn every failure into a one-shot [`Notification`]
//! and simply skip the success transition. There is no retry and no timeout.
//!
//! [`ScriptedGateway`] is an in-memory gateway with queued outcomes, used by tests and
//! by the demo binary.

mod scripted;

pub use scripted::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration object handed to the vendor's checkout constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    pub key: String,
    /// Amount in minor currency units (cents).
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
}

/// What the checkout dialog reported back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    Paid { payment_id: String },
    Dismissed,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Failed to load checkout script: {0}")]
    ScriptLoad(String),
    #[error("Checkout dialog failed: {0}")]
    Dialog(String),
}

#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Loads the vendor script. Called before every checkout.
    async fn load(&self) -> Result<(), CheckoutError>;

    /// Opens the dialog and waits for the customer.
    async fn open(&self, options: CheckoutOptions) -> Result<CheckoutOutcome, CheckoutError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A one-shot toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Merchant-side settings copied into every [`CheckoutOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSettings {
    pub key: String,
    pub currency: String,
    pub merchant_name: String,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            key: "test_key".to_string(),
            currency: "USD".to_string(),
            merchant_name: "IdeaLaunch".to_string(),
        }
    }
}

impl CheckoutSettings {
    pub fn options(&self, amount: u64, description: impl Into<String>) -> CheckoutOptions {
        CheckoutOptions {
            key: self.key.clone(),
            amount,
            currency: self.currency.clone(),
            name: self.merchant_name.clone(),
            description: description.into(),
        }
    }
}
