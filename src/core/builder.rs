use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::RenderError;
use super::types::*;
use super::validation;

/// Builder for renderable documents.
///
/// ```
/// use belegdruck::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let rechnung = DocumentBuilder::new(
///     DocumentKind::Invoice,
///     "RE-2024-001",
///     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// )
/// .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
/// .customer(Customer::new("Kunde AG").email("rechnung@kunde.de"))
/// .add_item("Beratung", dec!(10), dec!(150.00))
/// .add_item("Fahrtkosten", dec!(1), dec!(45.50))
/// .build()
/// .unwrap();
///
/// assert_eq!(rechnung.total, dec!(1839.15));
/// ```
pub struct DocumentBuilder {
    kind: DocumentKind,
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    customer: Option<Customer>,
    items: Vec<LineItem>,
    tax_rate: Decimal,
    currency_code: String,
    notes: Option<String>,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind, number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            kind,
            number: number.into(),
            issue_date,
            due_date: None,
            customer: None,
            items: Vec::new(),
            tax_rate: dec!(19),
            currency_code: "EUR".to_string(),
            notes: None,
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn add_item(
        mut self,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        self.items.push(LineItem::new(description, quantity, unit_price));
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the document, calculating totals and running validation.
    pub fn build(self) -> Result<Document, RenderError> {
        if self.number.trim().is_empty() {
            return Err(RenderError::Builder(
                "document number must not be empty".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(RenderError::Builder(
                "document number cannot exceed 200 characters".into(),
            ));
        }
        // Input limit to prevent abuse
        if self.items.len() > 10_000 {
            return Err(RenderError::Builder(
                "document cannot have more than 10,000 line items".into(),
            ));
        }

        let document = self.build_unchecked();

        let errors = validation::validate_amounts(&document);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(RenderError::Validation(msg));
        }

        Ok(document)
    }

    /// Build without validation, for tests or for importing external
    /// data verbatim. Totals are still calculated so the document is
    /// internally consistent.
    pub fn build_unchecked(self) -> Document {
        let mut document = Document {
            kind: self.kind,
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            customer: self.customer,
            items: self.items,
            subtotal: Decimal::ZERO,
            tax_rate: self.tax_rate,
            tax_amount: Decimal::ZERO,
            total: Decimal::ZERO,
            currency_code: self.currency_code,
            notes: self.notes,
        };
        validation::calculate_totals(&mut document);
        document
    }
}

/// Builder for the issuer profile. Every field is optional; the builder
/// only exists so call sites read naturally.
pub struct CompanyProfileBuilder {
    profile: CompanyProfile,
}

impl CompanyProfileBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile: CompanyProfile {
                company_name: Some(name.into()),
                ..Default::default()
            },
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.profile.company_address = Some(address.into());
        self
    }

    pub fn address_line2(mut self, line: impl Into<String>) -> Self {
        self.profile.company_address_line2 = Some(line.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.profile.company_city = Some(city.into());
        self
    }

    pub fn postal_code(mut self, code: impl Into<String>) -> Self {
        self.profile.company_postal_code = Some(code.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.profile.company_country = Some(country.into());
        self
    }

    pub fn vat_id(mut self, id: impl Into<String>) -> Self {
        self.profile.company_vat_id = Some(id.into());
        self
    }

    pub fn tax_id(mut self, id: impl Into<String>) -> Self {
        self.profile.company_tax_id = Some(id.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.profile.company_email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.profile.company_phone = Some(phone.into());
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.profile.company_mobile = Some(mobile.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.profile.company_website = Some(website.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.profile.iban = Some(iban.into());
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.profile.bic = Some(bic.into());
        self
    }

    pub fn bank_name(mut self, name: impl Into<String>) -> Self {
        self.profile.bank_name = Some(name.into());
        self
    }

    pub fn build(self) -> CompanyProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn build_calculates_totals() {
        let doc = DocumentBuilder::new(DocumentKind::Invoice, "RE-001", test_date())
            .add_item("Beratung", dec!(2), dec!(19.99))
            .build()
            .unwrap();
        assert_eq!(doc.subtotal, dec!(39.98));
        assert_eq!(doc.tax_amount, dec!(7.60));
        assert_eq!(doc.total, dec!(47.58));
    }

    #[test]
    fn build_rejects_empty_number() {
        let err = DocumentBuilder::new(DocumentKind::Invoice, "  ", test_date())
            .add_item("Beratung", dec!(1), dec!(100))
            .build()
            .unwrap_err();
        assert!(matches!(err, RenderError::Builder(_)));
    }

    #[test]
    fn build_enforces_item_limit() {
        let mut at_limit = DocumentBuilder::new(DocumentKind::Invoice, "RE-001", test_date());
        for _ in 0..10_000 {
            at_limit = at_limit.add_item("Posten", dec!(1), dec!(1));
        }
        assert!(at_limit.build().is_ok());

        let mut over_limit = DocumentBuilder::new(DocumentKind::Invoice, "RE-001", test_date());
        for _ in 0..10_001 {
            over_limit = over_limit.add_item("Posten", dec!(1), dec!(1));
        }
        let err = over_limit.build().unwrap_err();
        assert!(matches!(err, RenderError::Builder(_)));
    }

    #[test]
    fn build_rejects_zero_quantity() {
        let err = DocumentBuilder::new(DocumentKind::Invoice, "RE-001", test_date())
            .add_item("Beratung", dec!(0), dec!(100))
            .build()
            .unwrap_err();
        assert!(matches!(err, RenderError::Validation(_)));
    }

    #[test]
    fn build_unchecked_skips_validation() {
        let doc = DocumentBuilder::new(DocumentKind::Quote, "AN-001", test_date())
            .add_item("Beratung", dec!(0), dec!(100))
            .build_unchecked();
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.subtotal, dec!(0.00));
    }

    #[test]
    fn defaults_are_eur_and_19_percent() {
        let doc = DocumentBuilder::new(DocumentKind::Invoice, "RE-001", test_date())
            .add_item("Beratung", dec!(1), dec!(100))
            .build()
            .unwrap();
        assert_eq!(doc.currency_code, "EUR");
        assert_eq!(doc.tax_rate, dec!(19));
    }

    #[test]
    fn profile_builder_sets_fields() {
        let profile = CompanyProfileBuilder::new("Muster GmbH")
            .address("Hauptstraße 5")
            .city("Berlin")
            .postal_code("10115")
            .vat_id("DE123456789")
            .iban("DE89 3704 0044 0532 0130 00")
            .bic("COBADEFFXXX")
            .bank_name("Commerzbank")
            .build();
        assert_eq!(profile.name(), "Muster GmbH");
        assert_eq!(profile.tax_id(), "DE123456789");
        assert_eq!(profile.bank_name(), "Commerzbank");
    }
}
