// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! JSON (ETSI TS 119 312) cryptographic suite source.
//!
//! The JSON form mirrors the XML `SecuritySuitabilityPolicy` element by element, either as the
//! top-level object or wrapped in a `{"SecuritySuitabilityPolicy": ...}` envelope. Linking this
//! crate registers [`JSON_SUITE_FACTORY_ID`].

use etsi_policy_abstractions::{
    CryptographicSuite, CryptographicSuiteFactory, CryptographicSuiteFactoryId,
    CryptographicSuiteFactoryRegistration, InMemoryDocument, SecuritySuitabilityPolicy, SuiteError,
};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::Value;

pub const JSON_SUITE_FACTORY_ID: CryptographicSuiteFactoryId =
    CryptographicSuiteFactoryId(uuid::uuid!("5b0c8a61-93e4-4f0e-b7a2-0d4c6e81f9c7"));
pub const JSON_SUITE_FACTORY_NAME: &str = "ETSI TS 119 312 JSON";

const ENVELOPE: &str = "SecuritySuitabilityPolicy";

/// Default suite document shipped with this crate; same content as the XML default.
pub const DEFAULT_SUITE_JSON: &str = include_str!("../resources/default-crypto-suite.json");

static DEFAULT_SUITE: OnceCell<CryptographicSuite> = OnceCell::new();

pub fn default_cryptographic_suite() -> Result<CryptographicSuite, SuiteError> {
    DEFAULT_SUITE
        .get_or_try_init(|| cryptographic_suite_from_str(DEFAULT_SUITE_JSON))
        .cloned()
}

fn policy_object(value: &Value) -> Result<&Value, SuiteError> {
    let Some(object) = value.as_object() else {
        return Err(SuiteError::Malformed("expected a JSON object".to_string()));
    };
    Ok(object.get(ENVELOPE).unwrap_or(value))
}

/// Read a pre-parsed JSON value.
pub fn read_security_suitability_policy(value: &Value) -> Result<SecuritySuitabilityPolicy, SuiteError> {
    let policy = policy_object(value)?;
    SecuritySuitabilityPolicy::deserialize(policy).map_err(|e| SuiteError::Malformed(e.to_string()))
}

/// Build a suite from a pre-parsed JSON value.
pub fn cryptographic_suite_from_value(value: &Value) -> Result<CryptographicSuite, SuiteError> {
    Ok(read_security_suitability_policy(value)?.to_cryptographic_suite())
}

/// Build a suite from JSON text.
pub fn cryptographic_suite_from_str(json: &str) -> Result<CryptographicSuite, SuiteError> {
    if json.trim().is_empty() {
        return Err(SuiteError::MissingArgument("Cryptographic suite document"));
    }
    let value: Value = serde_json::from_str(json).map_err(|e| SuiteError::Malformed(e.to_string()))?;
    cryptographic_suite_from_value(&value)
}

struct JsonSuiteFactory;

impl CryptographicSuiteFactory for JsonSuiteFactory {
    fn name(&self) -> &'static str {
        JSON_SUITE_FACTORY_NAME
    }

    fn is_supported(&self, document: &InMemoryDocument) -> bool {
        let Some(text) = document.as_str() else {
            return false;
        };
        if !text.trim_start().starts_with('{') {
            return false;
        }
        match serde_json::from_str::<Value>(text) {
            Ok(value) => policy_object(&value)
                .map_or(false, |p| p.get("Algorithm").is_some() || p.get("PolicyName").is_some()),
            Err(_) => false,
        }
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

static FACTORY: JsonSuiteFactory = JsonSuiteFactory;

inventory::submit! {
    CryptographicSuiteFactoryRegistration {
        id: JSON_SUITE_FACTORY_ID,
        name: JSON_SUITE_FACTORY_NAME,
        priority: 50,
        factory: &FACTORY,
    }
}
