use anyhow::{Context, Result};
use qrcode::{QrCode, render::svg};
use url::Url;

/// Static UPI collect request rendered for manual bank-app payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiPaymentRequest {
    /// Recipient VPA, e.g. `coach@okaxis`.
    pub vpa: String,
    pub payee_name: String,
    /// Whole rupees.
    pub amount: i64,
    pub note: Option<String>,
}

impl UpiPaymentRequest {
    /// `upi://pay?pa=..&pn=..&am=..&cu=INR[&tn=..]`
    pub fn to_uri(&self) -> Result<String> {
        let mut uri = Url::parse("upi://pay").context("failed to build upi base uri")?;

        {
            let mut query = uri.query_pairs_mut();
            query
                .append_pair("pa", &self.vpa)
                .append_pair("pn", &self.payee_name)
                .append_pair("am", &self.amount.to_string())
                .append_pair("cu", "INR");

            if let Some(note) = self.note.as_deref().filter(|note| !note.is_empty()) {
                query.append_pair("tn", note);
            }
        }

        Ok(uri.to_string())
    }

    /// The deep link as a scannable SVG.
    pub fn to_qr_svg(&self) -> Result<String> {
        let uri = self.to_uri()?;
        render_qr_svg(&uri)
    }
}

pub fn render_qr_svg(payload: &str) -> Result<String> {
    let code = QrCode::new(payload.as_bytes()).context("failed to encode qr code")?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(240, 240)
        .quiet_zone(true)
        .build())
}
