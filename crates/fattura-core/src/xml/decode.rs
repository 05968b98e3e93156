//! Decoding of FatturaElettronica documents into [`ExtractedRecord`]s.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::names::*;
use super::tree::XmlElement;
use crate::error::DecodeError;
use crate::models::invoice::ExtractedRecord;

const DOCUMENT_PATH: [&str; 2] = [GENERAL_DATA, DOCUMENT_DATA];
const CLIENT_PATH: [&str; 2] = [RECIPIENT_SECTION, REGISTRY_DATA];

/// Decode an invoice document.
///
/// Parsing yields to the runtime once before the document is read, so
/// sequential batches interleave with other tasks at each file.
pub async fn decode(xml: &str) -> Result<ExtractedRecord, DecodeError> {
    tokio::task::yield_now().await;
    decode_str(xml)
}

/// Synchronous form of [`decode`].
pub fn decode_str(xml: &str) -> Result<ExtractedRecord, DecodeError> {
    let root = XmlElement::parse(xml)?;
    if root.name != ROOT {
        return Err(missing(&[ROOT]));
    }

    let header = require(&root, &[HEADER])?;
    let body = require(&root, &[BODY])?;
    let document = require(body, &DOCUMENT_PATH)?;
    let client = require(header, &CLIENT_PATH)?;

    let number = require(document, &[NUMBER])?.text();
    let date = require(document, &[DATE])?.text();
    let client_name = require(client, &[REGISTRY, NAME])?.text();
    let client_tax_code = require(client, &[FISCAL_CODE])?.text();
    let amount_text = require(document, &[TOTAL_AMOUNT])?.text();

    // Structure is checked before content.
    let total_amount =
        Decimal::from_str(amount_text.trim()).map_err(|_| DecodeError::NumberFormat {
            value: amount_text.to_string(),
        })?;

    Ok(ExtractedRecord {
        number: number.to_string(),
        date: date.to_string(),
        client_name: client_name.to_string(),
        client_tax_code: client_tax_code.to_string(),
        total_amount,
    })
}

fn require<'a>(parent: &'a XmlElement, path: &[&str]) -> Result<&'a XmlElement, DecodeError> {
    parent.path(path).ok_or_else(|| {
        let mut full = vec![parent.name.as_str()];
        full.extend_from_slice(path);
        missing(&full)
    })
}

fn missing(path: &[&str]) -> DecodeError {
    DecodeError::MalformedDocument {
        path: path.join("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{InvoiceGenerator, RngSource};
    use crate::xml::encode;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_xml() -> String {
        let mut generator = InvoiceGenerator::new(RngSource::seeded(
            21,
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
        ));
        encode(&generator.generate()).unwrap()
    }

    #[tokio::test]
    async fn test_round_trip() {
        let mut generator = InvoiceGenerator::new(RngSource::seeded(
            99,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        ));

        for _ in 0..25 {
            let record = generator.generate();
            let decoded = decode(&encode(&record).unwrap()).await.unwrap();
            assert_eq!(decoded, ExtractedRecord::from(&record));
            assert_eq!(decoded.total_amount.to_string(), record.total_amount.to_string());
        }
    }

    #[test]
    fn test_missing_number_is_malformed() {
        let xml = sample_xml();
        let start = xml.find("<Numero>").unwrap();
        let end = xml.find("</Numero>").unwrap() + "</Numero>".len();
        let stripped = format!("{}{}", &xml[..start], &xml[end..]);

        match decode_str(&stripped) {
            Err(DecodeError::MalformedDocument { path }) => {
                assert!(path.ends_with("DatiGeneraliDocumento/Numero"), "{path}");
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_root_is_malformed() {
        let xml = sample_xml().replace("ns2:FatturaElettronica", "ns2:Altro");
        assert!(matches!(
            decode_str(&xml),
            Err(DecodeError::MalformedDocument { path }) if path == ROOT
        ));
    }

    #[test]
    fn test_missing_body_is_malformed() {
        let xml = r#"<ns2:FatturaElettronica xmlns:ns2="urn:x">
            <FatturaElettronicaHeader/>
        </ns2:FatturaElettronica>"#;
        assert!(matches!(
            decode_str(xml),
            Err(DecodeError::MalformedDocument { path }) if path.ends_with(BODY)
        ));
    }

    #[test]
    fn test_missing_client_name_is_malformed() {
        let xml = sample_xml().replace("<Nome>", "<Cognome>").replace("</Nome>", "</Cognome>");
        assert!(matches!(
            decode_str(&xml),
            Err(DecodeError::MalformedDocument { path }) if path.ends_with("Anagrafica/Nome")
        ));
    }

    #[test]
    fn test_non_numeric_amount() {
        let xml = sample_xml();
        let start = xml.find("<ImportoTotaleDocumento>").unwrap() + "<ImportoTotaleDocumento>".len();
        let end = xml.find("</ImportoTotaleDocumento>").unwrap();
        let broken = format!("{}dodici{}", &xml[..start], &xml[end..]);

        match decode_str(&broken) {
            Err(DecodeError::NumberFormat { value }) => assert_eq!(value, "dodici"),
            other => panic!("expected NumberFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_element_reported_before_bad_amount() {
        let xml = sample_xml();
        let start = xml.find("<Numero>").unwrap();
        let end = xml.find("</Numero>").unwrap() + "</Numero>".len();
        let stripped = format!("{}{}", &xml[..start], &xml[end..]);
        let amount_start =
            stripped.find("<ImportoTotaleDocumento>").unwrap() + "<ImportoTotaleDocumento>".len();
        let amount_end = stripped.find("</ImportoTotaleDocumento>").unwrap();
        let broken = format!("{}n/a{}", &stripped[..amount_start], &stripped[amount_end..]);

        match decode_str(&broken) {
            Err(DecodeError::MalformedDocument { path }) => {
                assert!(path.ends_with("Numero"), "{path}");
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_xml() {
        assert!(matches!(decode_str("<ns2:FatturaElettronica>"), Err(DecodeError::Xml(_))));
    }
}
