use chrono::NaiveDate;
use rust_decimal_macros::dec;

use belegdruck::core::*;
use belegdruck::render;

fn main() {
    // Create a standard German domestic invoice
    let invoice = DocumentBuilder::new(
        DocumentKind::Invoice,
        "RE-2024-001",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
    .customer(Customer::new("Kunde AG").email("rechnung@kunde.de"))
    .add_item("Softwareentwicklung", dec!(80), dec!(120))
    .add_item("Hosting (monatlich)", dec!(1), dec!(49.90))
    .build()
    .expect("invoice should be valid");

    let profile = CompanyProfileBuilder::new("ACME GmbH")
        .address("Friedrichstraße 123")
        .postal_code("10115")
        .city("Berlin")
        .country("Deutschland")
        .vat_id("DE123456789")
        .email("billing@acme.de")
        .phone("+49 30 12345")
        .website("https://acme.de")
        .iban("DE89 3704 0044 0532 0130 00")
        .bic("COBADEFFXXX")
        .bank_name("Commerzbank Berlin")
        .build();

    let bytes = render(&invoice, &profile).expect("render should succeed");

    println!("Invoice:  {}", invoice.number);
    println!("Date:     {}", invoice.issue_date);
    println!("Customer: {}", invoice.customer.as_ref().unwrap().name);
    println!("---");
    for (i, item) in invoice.items.iter().enumerate() {
        println!(
            "  {}. {} x {} @ {} = {}",
            i + 1,
            item.quantity,
            item.description,
            item.unit_price,
            item.total(),
        );
    }
    println!("---");
    println!("Netto:  {} {}", invoice.subtotal, invoice.currency_code);
    println!("MwSt.:  {} {}", invoice.tax_amount, invoice.currency_code);
    println!("Brutto: {} {}", invoice.total, invoice.currency_code);

    std::fs::write("rechnung.pdf", &bytes).expect("write rechnung.pdf");
    println!("\nWrote rechnung.pdf ({} bytes)", bytes.len());
}
