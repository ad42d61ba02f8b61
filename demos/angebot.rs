use chrono::NaiveDate;
use rust_decimal_macros::dec;

use belegdruck::core::*;
use belegdruck::render;

fn main() {
    // A quote: same layout, no due date and no payment block
    let quote = DocumentBuilder::new(
        DocumentKind::Quote,
        "AN-2024-017",
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    )
    .customer(Customer::new("Müller & Söhne GmbH"))
    .add_item("Konzeption und Entwurf", dec!(12), dec!(95))
    .add_item("Umsetzung Webauftritt", dec!(40), dec!(110))
    .add_item("Schulung (halbtags)", dec!(2), dec!(450))
    .build()
    .expect("quote should be valid");

    let profile = CompanyProfileBuilder::new("ACME GmbH")
        .address("Friedrichstraße 123")
        .postal_code("10115")
        .city("Berlin")
        .vat_id("DE123456789")
        .email("billing@acme.de")
        .build();

    let bytes = render(&quote, &profile).expect("render should succeed");

    println!("Quote:  {}", quote.number);
    println!("Brutto: {} {}", quote.total, quote.currency_code);

    std::fs::write("angebot.pdf", &bytes).expect("write angebot.pdf");
    println!("Wrote angebot.pdf ({} bytes)", bytes.len());
}
