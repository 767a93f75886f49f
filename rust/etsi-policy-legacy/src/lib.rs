// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Legacy all-in-one validation policy source.
//!
//! Reads `ConstraintsParameters` documents, where cryptographic constraints are embedded in
//! the policy itself: a global `Cryptographic` element, optionally refined per context and per
//! certificate position. Linking this crate registers [`XML_POLICY_FACTORY_ID`] with the policy
//! factory registry of `etsi-policy-abstractions` and ships the default policy.

mod cryptographic;
mod policy;
mod xml;

use etsi_policy_abstractions::{
    InMemoryDocument, PolicyError, ValidationPolicy, ValidationPolicyFactory, ValidationPolicyFactoryId,
    ValidationPolicyFactoryRegistration,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub use policy::EtsiValidationPolicy;

pub const XML_POLICY_FACTORY_ID: ValidationPolicyFactoryId =
    ValidationPolicyFactoryId(uuid::uuid!("8e3a27c4-61d5-4b9f-a0c2-3f7b5d19e6a8"));
pub const XML_POLICY_FACTORY_NAME: &str = "ETSI ConstraintsParameters XML";

/// Default policy document shipped with this crate.
pub const DEFAULT_POLICY_XML: &str = include_str!("../resources/default-policy.xml");

static DEFAULT_POLICY: OnceCell<Arc<EtsiValidationPolicy>> = OnceCell::new();

/// The shipped default policy, parsed once.
pub fn default_validation_policy() -> Result<Arc<EtsiValidationPolicy>, PolicyError> {
    DEFAULT_POLICY
        .get_or_try_init(|| EtsiValidationPolicy::from_xml(DEFAULT_POLICY_XML).map(Arc::new))
        .cloned()
}

pub fn validation_policy_from_str(xml: &str) -> Result<EtsiValidationPolicy, PolicyError> {
    EtsiValidationPolicy::from_xml(xml)
}

pub fn validation_policy_from_document(document: &roxmltree::Document<'_>) -> Result<EtsiValidationPolicy, PolicyError> {
    EtsiValidationPolicy::from_document(document)
}

struct XmlPolicyFactory;

impl ValidationPolicyFactory for XmlPolicyFactory {
    fn name(&self) -> &'static str {
        XML_POLICY_FACTORY_NAME
    }

    fn is_supported(&self, document: &InMemoryDocument) -> bool {
        document
            .as_str()
            .map(str::trim_start)
            .map_or(false, |t| t.starts_with('<') && t.contains(policy::ROOT_ELEMENT))
    }

    fn load_default_validation_policy(&self) -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
        Ok(default_validation_policy()?)
    }

    fn load_validation_policy(&self, document: &InMemoryDocument) -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
        let text = document
            .as_str()
            .ok_or_else(|| PolicyError::Malformed("document is not valid UTF-8".to_string()))?;
        Ok(Arc::new(EtsiValidationPolicy::from_xml(text)?))
    }
}

static FACTORY: XmlPolicyFactory = XmlPolicyFactory;

inventory::submit! {
    ValidationPolicyFactoryRegistration {
        id: XML_POLICY_FACTORY_ID,
        name: XML_POLICY_FACTORY_NAME,
        priority: 100,
        factory: &FACTORY,
    }
}
