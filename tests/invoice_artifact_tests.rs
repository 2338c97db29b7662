use agencydesk_server::invoice::{
    render, FooterBranding, InvoiceDocument, LineItem, Party, PaymentRecord,
};
use agencydesk_server::taxid::gstin_checksum;
use chrono::NaiveDate;

fn invoice_fixture() -> InvoiceDocument {
    let gstin_body = "27AAPFU0939F1Z";
    let gstin = format!("{gstin_body}{}", gstin_checksum(gstin_body).unwrap());
    InvoiceDocument {
        number: Some("INV-2026-014".to_string()),
        status: Some("Partially Paid".to_string()),
        issue_date: NaiveDate::from_ymd_opt(2026, 8, 1),
        due_date: NaiveDate::from_ymd_opt(2026, 8, 31),
        currency: Some("INR".to_string()),
        billed_by: Party {
            name: "Studio North LLP".to_string(),
            address: "Fourth Floor, Plot 12, Industrial Estate,\nAndheri East, Mumbai 400093"
                .to_string(),
            gstin: Some(gstin),
            pan: Some("AAPFU0939F".to_string()),
            email: Some("billing@studionorth.in".to_string()),
            phone: Some("+91 98200 00000".to_string()),
        },
        billed_to: Party {
            name: "Acme Traders".to_string(),
            address: "8 Market Lane, Pune 411001".to_string(),
            ..Party::default()
        },
        items: vec![
            LineItem {
                description: "Brand identity refresh covering logo, palette and typography"
                    .to_string(),
                quantity: 1.0,
                unit_price: 45000.0,
                tax_amount: None,
            },
            LineItem {
                description: "Marketing site build".to_string(),
                quantity: 1.0,
                unit_price: 80000.0,
                tax_amount: None,
            },
            LineItem {
                description: "Hosting, per month".to_string(),
                quantity: 3.0,
                unit_price: 1500.0,
                tax_amount: None,
            },
        ],
        subtotal: None,
        tax_rate: Some(18.0),
        total: None,
        notes: Some("Milestone two of the retainer. Payable within 15 days.".to_string()),
        terms: Some("Late payments accrue 1.5% interest per month.".to_string()),
        payments: vec![PaymentRecord {
            amount: 50000.0,
            date: NaiveDate::from_ymd_opt(2026, 8, 10),
            method: Some("NEFT".to_string()),
        }],
        branding: FooterBranding {
            logo_url: None,
            text: "Powered by AgencyDesk".to_string(),
            link_url: Some("https://agencydesk.example".to_string()),
        },
    }
}

#[test]
fn renders_and_saves_a_well_formed_artifact() {
    let invoice = invoice_fixture();
    let generated = render(&invoice, None).unwrap();
    assert_eq!(generated.filename, "Invoice_INV-2026-014.pdf");
    assert!(generated.pdf.starts_with(b"%PDF"));
    // A PDF trailer must close the file.
    let tail = String::from_utf8_lossy(&generated.pdf[generated.pdf.len().saturating_sub(64)..]);
    assert!(tail.contains("%%EOF"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(&generated.filename);
    std::fs::write(&path, &generated.pdf).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), generated.pdf.len() as u64);
}

#[test]
fn totals_on_the_fixture_line_up() {
    let invoice = invoice_fixture();
    assert_eq!(invoice.computed_subtotal(), 129_500.0);
    assert_eq!(invoice.computed_tax(), 23_310.0);
    assert_eq!(invoice.computed_total(), 152_810.0);
    assert_eq!(invoice.balance_due(), 102_810.0);
}

#[test]
fn long_invoices_span_multiple_pages() {
    let mut invoice = invoice_fixture();
    invoice.items = (0..80)
        .map(|i| LineItem {
            description: format!("Iteration {} including stakeholder review and rework", i + 1),
            quantity: 1.0,
            unit_price: 900.0,
            tax_amount: None,
        })
        .collect();
    let generated = render(&invoice, None).unwrap();
    assert!(generated.pdf.starts_with(b"%PDF"));

    // Page objects multiply when the table breaks across pages.
    let count_pages = |bytes: &[u8]| {
        let needle = b"/Type /Page";
        bytes.windows(needle.len()).filter(|w| w == needle).count()
    };
    let short = render(&invoice_fixture(), None).unwrap();
    assert!(
        count_pages(&generated.pdf) > count_pages(&short.pdf),
        "expected the long invoice to paginate"
    );
}
