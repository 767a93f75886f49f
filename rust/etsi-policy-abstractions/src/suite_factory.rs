// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Link-time registry of cryptographic suite sources.
//!
//! Each companion crate (`etsi-policy-crypto-xml`, `etsi-policy-crypto-json`, or a custom one)
//! submits a [`CryptographicSuiteFactoryRegistration`]. Resolution walks the registrations by
//! descending priority and picks the first factory that supports the document.

use crate::document::InMemoryDocument;
use crate::error::SuiteError;
use crate::suite::CryptographicSuite;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CryptographicSuiteFactoryId(pub uuid::Uuid);

pub trait CryptographicSuiteFactory: Sync {
    fn name(&self) -> &'static str;

    /// Cheap format sniffing; `load_cryptographic_suite` may still fail on malformed content.
    fn is_supported(&self, document: &InMemoryDocument) -> bool;

    /// The suite shipped with the factory.
    fn load_default_cryptographic_suite(&self) -> Result<CryptographicSuite, SuiteError>;

    fn load_cryptographic_suite(
        &self,
        document: &InMemoryDocument,
    ) -> Result<CryptographicSuite, SuiteError>;
}

pub struct CryptographicSuiteFactoryRegistration {
    pub id: CryptographicSuiteFactoryId,
    pub name: &'static str,
    pub priority: i32,
    pub factory: &'static dyn CryptographicSuiteFactory,
}

inventory::collect!(CryptographicSuiteFactoryRegistration);

pub fn suite_factories_ordered() -> Vec<&'static CryptographicSuiteFactoryRegistration> {
    let mut regs: Vec<_> = inventory::iter::<CryptographicSuiteFactoryRegistration>
        .into_iter()
        .collect();
    regs.sort_by(|a, b| b.priority.cmp(&a.priority));
    regs
}

pub fn suite_factory_name(id: CryptographicSuiteFactoryId) -> Option<&'static str> {
    inventory::iter::<CryptographicSuiteFactoryRegistration>
        .into_iter()
        .find(|r| r.id == id)
        .map(|r| r.name)
}

/// Default suite of the highest-priority registered factory.
pub fn load_default_cryptographic_suite() -> Result<CryptographicSuite, SuiteError> {
    let Some(reg) = suite_factories_ordered().into_iter().next() else {
        return Err(SuiteError::NoFactory);
    };
    tracing::debug!(factory = reg.name, "loading default cryptographic suite");
    reg.factory.load_default_cryptographic_suite()
}

pub fn load_cryptographic_suite(document: &InMemoryDocument) -> Result<CryptographicSuite, SuiteError> {
    if document.is_empty() {
        return Err(SuiteError::MissingArgument("Cryptographic suite document"));
    }

    let regs = suite_factories_ordered();
    if regs.is_empty() {
        return Err(SuiteError::NoFactory);
    }

    for reg in regs {
        if reg.factory.is_supported(document) {
            tracing::debug!(
                factory = reg.name,
                document = document.name().unwrap_or("<unnamed>"),
                "cryptographic suite factory selected"
            );
            return reg.factory.load_cryptographic_suite(document);
        }
    }
    Err(SuiteError::UnsupportedFormat)
}

pub fn load_cryptographic_suite_from_path(
    path: impl AsRef<Path>,
) -> Result<CryptographicSuite, SuiteError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(SuiteError::MissingArgument("Cryptographic suite file path"));
    }
    load_cryptographic_suite(&InMemoryDocument::from_path(path)?)
}

pub fn load_cryptographic_suite_from_reader(reader: impl Read) -> Result<CryptographicSuite, SuiteError> {
    let document = InMemoryDocument::from_reader(reader)?;
    if document.is_empty() {
        return Err(SuiteError::MissingArgument("Cryptographic suite stream"));
    }
    load_cryptographic_suite(&document)
}
