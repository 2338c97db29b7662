//! Invoice wire/view model and totals computation.
//!
//! These types are transient: they arrive as JSON on the render endpoint,
//! drive one document generation and are dropped. Nothing here is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Round to two decimal places, the resolution of every money field.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One side of the invoice (Billed By / Billed To).
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub gstin: Option<String>,
    pub pan: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A billable line on the invoice.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Itemized tax for this line. When any line carries one, the itemized
    /// sum wins over the invoice-level percentage.
    pub tax_amount: Option<f64>,
}

impl LineItem {
    pub fn amount(&self) -> f64 {
        round2(self.quantity * self.unit_price)
    }
}

/// A payment recorded against the invoice.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaymentRecord {
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub method: Option<String>,
}

/// Footer branding rendered on every page.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct FooterBranding {
    pub logo_url: Option<String>,
    #[serde(default = "FooterBranding::default_text")]
    pub text: String,
    pub link_url: Option<String>,
}

impl FooterBranding {
    fn default_text() -> String {
        "Powered by AgencyDesk".to_string()
    }
}

impl Default for FooterBranding {
    fn default() -> Self {
        Self {
            logo_url: None,
            text: Self::default_text(),
            link_url: None,
        }
    }
}

/// The full invoice document handed to the renderer.
///
/// Monetary fields are optional where the source system may or may not send
/// an explicit value; the `computed_*` accessors apply the fallback chain.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct InvoiceDocument {
    pub number: Option<String>,
    pub status: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// ISO currency code, defaults to INR.
    pub currency: Option<String>,
    pub billed_by: Party,
    pub billed_to: Party,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub subtotal: Option<f64>,
    /// Invoice-level tax percentage, used when no line carries an itemized tax.
    pub tax_rate: Option<f64>,
    pub total: Option<f64>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
    #[serde(default)]
    pub branding: FooterBranding,
}

impl InvoiceDocument {
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or("INR")
    }

    /// Explicit subtotal when present, else the sum of line amounts.
    pub fn computed_subtotal(&self) -> f64 {
        match self.subtotal {
            Some(value) => round2(value),
            None => round2(self.items.iter().map(LineItem::amount).sum()),
        }
    }

    /// Itemized tax sum when any line carries one, else the invoice-level
    /// percentage applied to the subtotal, else zero.
    pub fn computed_tax(&self) -> f64 {
        let itemized: Vec<f64> = self.items.iter().filter_map(|i| i.tax_amount).collect();
        if !itemized.is_empty() {
            return round2(itemized.iter().sum());
        }
        match self.tax_rate {
            Some(rate) => round2(self.computed_subtotal() * rate / 100.0),
            None => 0.0,
        }
    }

    /// Explicit total when present, else subtotal plus tax.
    pub fn computed_total(&self) -> f64 {
        match self.total {
            Some(value) => round2(value),
            None => round2(self.computed_subtotal() + self.computed_tax()),
        }
    }

    pub fn amount_paid(&self) -> f64 {
        round2(self.payments.iter().map(|p| p.amount).sum())
    }

    pub fn balance_due(&self) -> f64 {
        round2(self.computed_total() - self.amount_paid())
    }

    pub fn has_itemized_tax(&self) -> bool {
        self.items.iter().any(|i| i.tax_amount.is_some())
    }

    /// Artifact name: `Invoice_<number>.pdf`, or `Invoice.pdf` when the
    /// invoice has no number (or it sanitizes away entirely).
    pub fn file_name(&self) -> String {
        match self.number.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => {
                let safe = sanitize_filename::sanitize(number);
                if safe.is_empty() {
                    "Invoice.pdf".to_string()
                } else {
                    format!("Invoice_{safe}.pdf")
                }
            }
            _ => "Invoice.pdf".to_string(),
        }
    }
}
