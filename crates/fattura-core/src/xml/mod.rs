//! FatturaElettronica XML encoding, decoding and path flattening.
//!
//! The element names below are the compatibility-sensitive wire contract:
//! the encoder writes exactly this shape and the decoder reads it back.

mod decode;
mod encode;
pub mod flatten;
mod tree;

pub use decode::{decode, decode_str};
pub use encode::{encode, SenderIdentity, SENDER};
pub use flatten::{flatten, to_pretty_xml, unflatten, FlatRow};
pub use tree::XmlElement;

/// Namespace bound to the `ns2` prefix on the root element.
pub const FATTURA_NAMESPACE: &str =
    "http://ivaservizi.agenziaentrate.gov.it/docs/xsd/fatture/v1.2";

/// XML signature namespace declared on the root element (signatures are not handled).
pub const SIGNATURE_NAMESPACE: &str = "http://www.w3.org/2000/09/xmldsig#";

/// Value of the `versione` attribute.
pub const FORMAT_VERSION: &str = "1.2.2";

pub(crate) mod names {
    pub const ROOT: &str = "ns2:FatturaElettronica";
    pub const HEADER: &str = "FatturaElettronicaHeader";
    pub const BODY: &str = "FatturaElettronicaBody";

    pub const TRANSMISSION: &str = "DatiTrasmissione";
    pub const TRANSMITTER_ID: &str = "IdTrasmittente";
    pub const PROGRESSIVE_ID: &str = "ProgressivoInvio";
    pub const TRANSMISSION_FORMAT: &str = "FormatoTrasmissione";
    pub const RECIPIENT_CODE: &str = "CodiceDestinatario";

    pub const SENDER_SECTION: &str = "CedentePrestatore";
    pub const RECIPIENT_SECTION: &str = "CessionarioCommittente";
    pub const REGISTRY_DATA: &str = "DatiAnagrafici";
    pub const VAT_ID: &str = "IdFiscaleIVA";
    pub const COUNTRY_ID: &str = "IdPaese";
    pub const CODE: &str = "IdCodice";
    pub const FISCAL_CODE: &str = "CodiceFiscale";
    pub const REGISTRY: &str = "Anagrafica";
    pub const LEGAL_NAME: &str = "Denominazione";
    pub const NAME: &str = "Nome";

    pub const SEAT: &str = "Sede";
    pub const STREET: &str = "Indirizzo";
    pub const POSTAL_CODE: &str = "CAP";
    pub const CITY: &str = "Comune";
    pub const PROVINCE: &str = "Provincia";
    pub const NATION: &str = "Nazione";

    pub const GENERAL_DATA: &str = "DatiGenerali";
    pub const DOCUMENT_DATA: &str = "DatiGeneraliDocumento";
    pub const DOCUMENT_TYPE: &str = "TipoDocumento";
    pub const CURRENCY: &str = "Divisa";
    pub const DATE: &str = "Data";
    pub const NUMBER: &str = "Numero";
    pub const TOTAL_AMOUNT: &str = "ImportoTotaleDocumento";
}
