use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RenderError;

/// Document kind. Determines the title, the body wording, and which
/// conditional sections (due date, payment information) are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Angebot, a non-binding offer. No due date, no payment block.
    Quote,
    /// Rechnung, a payable invoice.
    Invoice,
}

impl DocumentKind {
    /// Fixed document title printed in the header ("ANGEBOT" / "RECHNUNG").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Quote => "ANGEBOT",
            Self::Invoice => "RECHNUNG",
        }
    }

    /// Wire value of the external record's `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Invoice => "invoice",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = RenderError;

    /// Parse the external `type` field. Anything but the two known values
    /// fails fast instead of defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quote" => Ok(Self::Quote),
            "invoice" => Ok(Self::Invoice),
            other => Err(RenderError::InvalidDocumentKind(other.to_string())),
        }
    }
}

/// The recipient bound to a document. Absence means the document has no
/// recipient yet; the customer block is simply omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Display name.
    pub name: String,
    /// Contact email, shown below the name when present.
    pub email: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// One billable row: description, quantity, unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description (width-clipped at render time, never sliced).
    pub description: String,
    /// Invoiced quantity. Invariant: > 0.
    pub quantity: Decimal,
    /// Net price per unit.
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total, always derived as quantity × unit price.
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A quote or invoice snapshot, immutable input to the renderer.
///
/// Totals are computed upstream (`subtotal = Σ quantity×unit_price`,
/// `tax_amount = subtotal × tax_rate/100`, `total = subtotal + tax_amount`);
/// the renderer trusts them as-is. [`crate::core::validate_amounts`] checks
/// the identity for callers that want the reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Quote or invoice. Wire name `type` in the external record.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Document number (Rechnungsnummer / Angebotsnummer), unique per
    /// issuer, immutable once issued.
    #[serde(rename = "document_number")]
    pub number: String,
    /// Issue date (Rechnungsdatum).
    #[serde(rename = "document_date")]
    pub issue_date: NaiveDate,
    /// Payment due date. Meaningful only for invoices; quotes never render
    /// it even when set.
    pub due_date: Option<NaiveDate>,
    /// Bound recipient, if any.
    pub customer: Option<Customer>,
    /// Line items in display order; positions are 1-based indexes.
    pub items: Vec<LineItem>,
    /// Net sum of all line totals.
    pub subtotal: Decimal,
    /// VAT rate in percent (e.g. 19).
    pub tax_rate: Decimal,
    /// VAT amount on the subtotal.
    pub tax_amount: Decimal,
    /// Gross total (subtotal + tax_amount).
    pub total: Decimal,
    /// ISO 4217 currency code. Not part of the external record, which
    /// bills in euros; defaults to "EUR" when absent.
    #[serde(default = "default_currency")]
    pub currency_code: String,
    /// Internal note, never rendered.
    pub notes: Option<String>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// The issuing business's identity and banking details, used for the
/// header, payment box, and footer. Every field is optional: missing data
/// renders as empty, it never fails a render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: Option<String>,
    /// Street address (first line).
    pub company_address: Option<String>,
    /// Additional address line (suite, building), joined after the street.
    pub company_address_line2: Option<String>,
    pub company_city: Option<String>,
    pub company_postal_code: Option<String>,
    pub company_country: Option<String>,
    /// USt-IdNr. Preferred over `company_tax_id` when both are set.
    pub company_vat_id: Option<String>,
    /// Steuernummer, fallback when no VAT ID is set.
    pub company_tax_id: Option<String>,
    pub company_email: Option<String>,
    /// Landline. Preferred over `company_mobile` when both are set.
    pub company_phone: Option<String>,
    pub company_mobile: Option<String>,
    pub company_website: Option<String>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub bank_name: Option<String>,
}

fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl CompanyProfile {
    pub fn name(&self) -> &str {
        opt(&self.company_name)
    }

    /// Street address with the second line joined by ", " when present.
    pub fn address(&self) -> String {
        match (&self.company_address, &self.company_address_line2) {
            (Some(a), Some(b)) if !b.is_empty() => format!("{a}, {b}"),
            (Some(a), _) => a.clone(),
            (None, Some(b)) => b.clone(),
            (None, None) => String::new(),
        }
    }

    pub fn city(&self) -> &str {
        opt(&self.company_city)
    }

    pub fn postal_code(&self) -> &str {
        opt(&self.company_postal_code)
    }

    pub fn country(&self) -> &str {
        opt(&self.company_country)
    }

    /// USt-IdNr., falling back to the Steuernummer.
    pub fn tax_id(&self) -> &str {
        match &self.company_vat_id {
            Some(id) if !id.is_empty() => id,
            _ => opt(&self.company_tax_id),
        }
    }

    pub fn email(&self) -> &str {
        opt(&self.company_email)
    }

    /// Landline, falling back to the mobile number.
    pub fn phone(&self) -> &str {
        match &self.company_phone {
            Some(p) if !p.is_empty() => p,
            _ => opt(&self.company_mobile),
        }
    }

    pub fn website(&self) -> &str {
        opt(&self.company_website)
    }

    pub fn iban(&self) -> &str {
        opt(&self.iban)
    }

    pub fn bic(&self) -> &str {
        opt(&self.bic)
    }

    pub fn bank_name(&self) -> &str {
        opt(&self.bank_name)
    }
}
