//! Serialisation of an [`InvoiceRecord`] into a FatturaElettronica document.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::names::*;
use super::{FATTURA_NAMESPACE, FORMAT_VERSION, SIGNATURE_NAMESPACE};
use crate::error::XmlError;
use crate::models::invoice::InvoiceRecord;

const COUNTRY: &str = "IT";
const TRANSMITTER_CODE: &str = "09876543210";
const FORMAT: &str = "FPR12";
const RECIPIENT: &str = "DEF5678";
const INVOICE_TYPE: &str = "TD01";
const EUR: &str = "EUR";

/// Static business identity written as the seller of every invoice.
#[derive(Debug, Clone, Copy)]
pub struct SenderIdentity {
    pub country: &'static str,
    pub vat_code: &'static str,
    pub legal_name: &'static str,
    pub street: &'static str,
    pub postal_code: &'static str,
    pub city: &'static str,
    pub province: &'static str,
    pub nation: &'static str,
}

pub const SENDER: SenderIdentity = SenderIdentity {
    country: "IT",
    vat_code: "09876543210",
    legal_name: "XYZ Consulting Srl",
    street: "Corso Venezia 45",
    postal_code: "20121",
    city: "Milano",
    province: "MI",
    nation: "IT",
};

/// Encode a record as a FatturaElettronica XML document.
///
/// String fields are written verbatim, without escaping. This is only sound
/// while every value comes from the built-in sample pools.
pub fn encode(record: &InvoiceRecord) -> Result<String, XmlError> {
    let mut doc = DocumentWriter::new();

    doc.writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let root = BytesStart::new(ROOT).with_attributes([
        ("xmlns:ns2", FATTURA_NAMESPACE),
        ("versione", FORMAT_VERSION),
        ("xmlns:ds", SIGNATURE_NAMESPACE),
    ]);
    doc.writer.write_event(Event::Start(root))?;

    doc.open(HEADER)?;
    write_transmission(&mut doc, record)?;
    write_sender(&mut doc)?;
    write_recipient(&mut doc, record)?;
    doc.close(HEADER)?;

    doc.open(BODY)?;
    doc.open(GENERAL_DATA)?;
    doc.open(DOCUMENT_DATA)?;
    doc.leaf(DOCUMENT_TYPE, INVOICE_TYPE)?;
    doc.leaf(CURRENCY, EUR)?;
    doc.leaf(DATE, &record.date.format("%Y-%m-%d").to_string())?;
    doc.leaf(NUMBER, &record.number)?;
    doc.leaf(TOTAL_AMOUNT, &record.total_amount.to_string())?;
    doc.close(DOCUMENT_DATA)?;
    doc.close(GENERAL_DATA)?;
    doc.close(BODY)?;

    doc.close(ROOT)?;
    doc.finish()
}

fn write_transmission(doc: &mut DocumentWriter, record: &InvoiceRecord) -> Result<(), XmlError> {
    doc.open(TRANSMISSION)?;
    doc.open(TRANSMITTER_ID)?;
    doc.leaf(COUNTRY_ID, COUNTRY)?;
    doc.leaf(CODE, TRANSMITTER_CODE)?;
    doc.close(TRANSMITTER_ID)?;
    doc.leaf(PROGRESSIVE_ID, &record.id)?;
    doc.leaf(TRANSMISSION_FORMAT, FORMAT)?;
    doc.leaf(RECIPIENT_CODE, RECIPIENT)?;
    doc.close(TRANSMISSION)
}

fn write_sender(doc: &mut DocumentWriter) -> Result<(), XmlError> {
    doc.open(SENDER_SECTION)?;
    doc.open(REGISTRY_DATA)?;
    doc.open(VAT_ID)?;
    doc.leaf(COUNTRY_ID, SENDER.country)?;
    doc.leaf(CODE, SENDER.vat_code)?;
    doc.close(VAT_ID)?;
    doc.open(REGISTRY)?;
    doc.leaf(LEGAL_NAME, SENDER.legal_name)?;
    doc.close(REGISTRY)?;
    doc.close(REGISTRY_DATA)?;
    write_seat(
        doc,
        SENDER.street,
        SENDER.postal_code,
        SENDER.city,
        SENDER.province,
        SENDER.nation,
    )?;
    doc.close(SENDER_SECTION)
}

fn write_recipient(doc: &mut DocumentWriter, record: &InvoiceRecord) -> Result<(), XmlError> {
    doc.open(RECIPIENT_SECTION)?;
    doc.open(REGISTRY_DATA)?;
    doc.leaf(FISCAL_CODE, &record.client_tax_code)?;
    doc.open(REGISTRY)?;
    doc.leaf(NAME, &record.client_name)?;
    doc.close(REGISTRY)?;
    doc.close(REGISTRY_DATA)?;
    write_seat(
        doc,
        &record.client_address,
        &record.client_postal_code,
        &record.client_city,
        &record.client_province,
        COUNTRY,
    )?;
    doc.close(RECIPIENT_SECTION)
}

fn write_seat(
    doc: &mut DocumentWriter,
    street: &str,
    postal_code: &str,
    city: &str,
    province: &str,
    nation: &str,
) -> Result<(), XmlError> {
    doc.open(SEAT)?;
    doc.leaf(STREET, street)?;
    doc.leaf(POSTAL_CODE, postal_code)?;
    doc.leaf(CITY, city)?;
    doc.leaf(PROVINCE, province)?;
    doc.leaf(NATION, nation)?;
    doc.close(SEAT)
}

struct DocumentWriter {
    writer: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 4),
        }
    }

    fn open(&mut self, name: &str) -> Result<(), XmlError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<(), XmlError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn leaf(&mut self, name: &str, text: &str) -> Result<(), XmlError> {
        self.open(name)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(text)))?;
        self.close(name)
    }

    fn finish(self) -> Result<String, XmlError> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlElement;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            id: "5f0c7a52-1f43-4d8e-9a59-2b1c4f6e8d10".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            number: "002/2025".to_string(),
            total_amount: Decimal::new(9900, 2),
            client_name: "Laura Bianchi".to_string(),
            client_tax_code: "GLNLEN97E05F205Z".to_string(),
            client_address: "Viale Europa 34".to_string(),
            client_city: "Bologna".to_string(),
            client_province: "RM".to_string(),
            client_postal_code: "80100".to_string(),
        }
    }

    #[test]
    fn test_root_declares_namespaces() {
        let xml = encode(&record()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(&format!(
            "<ns2:FatturaElettronica xmlns:ns2=\"{FATTURA_NAMESPACE}\" versione=\"1.2.2\" xmlns:ds=\"{SIGNATURE_NAMESPACE}\">"
        )));
        assert!(xml.trim_end().ends_with("</ns2:FatturaElettronica>"));
    }

    #[test]
    fn test_record_fields_are_placed() {
        let xml = encode(&record()).unwrap();
        let root = XmlElement::parse(&xml).unwrap();

        let header = root.child(HEADER).unwrap();
        assert_eq!(
            header.path(&[TRANSMISSION, PROGRESSIVE_ID]).unwrap().text(),
            "5f0c7a52-1f43-4d8e-9a59-2b1c4f6e8d10"
        );
        let seat = header.path(&[RECIPIENT_SECTION, SEAT]).unwrap();
        assert_eq!(seat.child(STREET).unwrap().text(), "Viale Europa 34");
        assert_eq!(seat.child(POSTAL_CODE).unwrap().text(), "80100");
        assert_eq!(seat.child(CITY).unwrap().text(), "Bologna");
        assert_eq!(seat.child(PROVINCE).unwrap().text(), "RM");
        assert_eq!(seat.child(NATION).unwrap().text(), "IT");

        let document = root.path(&[BODY, GENERAL_DATA, DOCUMENT_DATA]).unwrap();
        assert_eq!(document.child(DOCUMENT_TYPE).unwrap().text(), "TD01");
        assert_eq!(document.child(CURRENCY).unwrap().text(), "EUR");
        assert_eq!(document.child(DATE).unwrap().text(), "2025-01-31");
        assert_eq!(document.child(TOTAL_AMOUNT).unwrap().text(), "99.00");
    }

    #[test]
    fn test_sender_is_static() {
        let xml = encode(&record()).unwrap();
        let root = XmlElement::parse(&xml).unwrap();
        let sender = root.path(&[HEADER, SENDER_SECTION]).unwrap();

        assert_eq!(
            sender
                .path(&[REGISTRY_DATA, REGISTRY, LEGAL_NAME])
                .unwrap()
                .text(),
            "XYZ Consulting Srl"
        );
        assert_eq!(
            sender.path(&[REGISTRY_DATA, VAT_ID, CODE]).unwrap().text(),
            "09876543210"
        );
        assert_eq!(sender.path(&[SEAT, STREET]).unwrap().text(), "Corso Venezia 45");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(encode(&record()).unwrap(), encode(&record()).unwrap());
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let mut record = record();
        record.client_name = "Rossi &amp; Figli".to_string();
        let xml = encode(&record).unwrap();
        assert!(xml.contains("<Nome>Rossi &amp; Figli</Nome>"));
    }
}
