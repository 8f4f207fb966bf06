use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How the customer pays for a package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    /// Hosted gateway widget opened with a server-created order.
    Gateway,
    /// UPI deep link rendered as a QR code, confirmed manually by an admin.
    ManualUpi,
}

impl PaymentChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Gateway => "gateway",
            PaymentChannel::ManualUpi => "manual_upi",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "gateway" => Some(PaymentChannel::Gateway),
            "manual_upi" => Some(PaymentChannel::ManualUpi),
            _ => None,
        }
    }
}

impl Display for PaymentChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
