// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! XML (ETSI TS 119 312) cryptographic suite source.
//!
//! Linking this crate registers [`XML_SUITE_FACTORY_ID`] with the suite factory registry of
//! `etsi-policy-abstractions`. It also ships the default suite.

mod reader;

use etsi_policy_abstractions::{
    CryptographicSuite, CryptographicSuiteFactory, CryptographicSuiteFactoryId,
    CryptographicSuiteFactoryRegistration, InMemoryDocument, SuiteError,
};
use once_cell::sync::OnceCell;

pub use reader::{cryptographic_suite_from_document, cryptographic_suite_from_str, read_security_suitability_policy};

pub const XML_SUITE_FACTORY_ID: CryptographicSuiteFactoryId =
    CryptographicSuiteFactoryId(uuid::uuid!("0f6d4f5e-2a7c-4c83-9d0b-6e1f1c9a3b21"));
pub const XML_SUITE_FACTORY_NAME: &str = "ETSI TS 119 312 XML";

/// Default suite document shipped with this crate.
pub const DEFAULT_SUITE_XML: &str = include_str!("../resources/default-crypto-suite.xml");

static DEFAULT_SUITE: OnceCell<CryptographicSuite> = OnceCell::new();

/// The shipped default suite, parsed once.
pub fn default_cryptographic_suite() -> Result<CryptographicSuite, SuiteError> {
    DEFAULT_SUITE
        .get_or_try_init(|| cryptographic_suite_from_str(DEFAULT_SUITE_XML))
        .cloned()
}

struct XmlSuiteFactory;

impl CryptographicSuiteFactory for XmlSuiteFactory {
    fn name(&self) -> &'static str {
        XML_SUITE_FACTORY_NAME
    }

    fn is_supported(&self, document: &InMemoryDocument) -> bool {
        document
            .as_str()
            .map(str::trim_start)
            .map_or(false, |t| t.starts_with('<') && t.contains(reader::ROOT_ELEMENT))
    }

    fn load_default_cryptographic_suite(&self) -> Result<CryptographicSuite, SuiteError> {
        default_cryptographic_suite()
    }

    fn load_cryptographic_suite(&self, document: &InMemoryDocument) -> Result<CryptographicSuite, SuiteError> {
        let text = document
            .as_str()
            .ok_or_else(|| SuiteError::Malformed("document is not valid UTF-8".to_string()))?;
        cryptographic_suite_from_str(text)
    }
}

static FACTORY: XmlSuiteFactory = XmlSuiteFactory;

inventory::submit! {
    CryptographicSuiteFactoryRegistration {
        id: XML_SUITE_FACTORY_ID,
        name: XML_SUITE_FACTORY_NAME,
        // XML is the reference form; it provides the default suite.
        priority: 100,
        factory: &FACTORY,
    }
}
