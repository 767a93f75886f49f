// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::cryptographic::CryptographicConstraint;
use crate::xml::{child, child_level, text};
use etsi_policy_abstractions::{
    Context, CryptographicSuite, Level, PolicyError, SubContext, ValidationPolicy,
};
use roxmltree::{Document, Node};
use std::collections::BTreeMap;
use std::sync::Arc;

pub(crate) const ROOT_ELEMENT: &str = "ConstraintsParameters";

#[derive(Debug, Clone)]
struct CertificateConstraints {
    not_expired: Option<Level>,
    cryptographic: Arc<CryptographicSuite>,
}

/// One policy section. Its suites are always present, empty when neither the section nor the
/// global element defines any cryptographic constraint.
#[derive(Debug, Clone)]
struct ContextConstraints {
    structural_validation: Option<Level>,
    cryptographic: Arc<CryptographicSuite>,
    certificates: BTreeMap<SubContext, CertificateConstraints>,
}

/// A validation policy read from a `ConstraintsParameters` document.
///
/// All suites are materialized at load time, so configuration errors surface immediately and
/// the policy is read-only afterwards.
#[derive(Debug, Clone)]
pub struct EtsiValidationPolicy {
    name: Option<String>,
    description: Option<String>,
    contexts: BTreeMap<Context, ContextConstraints>,
    evidence_record: Option<Arc<CryptographicSuite>>,
    default_cryptographic: Option<Arc<CryptographicSuite>>,
}

fn section_name(context: Context) -> &'static str {
    match context {
        Context::Signature | Context::Certificate => "SignatureConstraints",
        Context::CounterSignature => "CounterSignatureConstraints",
        Context::Timestamp => "Timestamp",
        Context::Revocation => "Revocation",
        Context::EvidenceRecord => "EvidenceRecord",
    }
}

fn certificate_element(sub_context: SubContext) -> &'static str {
    match sub_context {
        SubContext::SigningCert => "SigningCertificate",
        SubContext::CaCertificate => "CACertificate",
    }
}

/// Suite for the `Cryptographic` element under `parent`. Either may be absent, in which case
/// the global element alone applies.
fn cryptographic_under(
    parent: Option<Node<'_, '_>>,
    global: Option<&CryptographicConstraint>,
) -> Result<Arc<CryptographicSuite>, PolicyError> {
    let local = match parent.and_then(|p| child(p, "Cryptographic")) {
        Some(node) => CryptographicConstraint::read(node)?,
        None => CryptographicConstraint::default(),
    };
    Ok(Arc::new(local.inherit(global).to_cryptographic_suite()?))
}

fn read_context(
    section: Node<'_, '_>,
    global: Option<&CryptographicConstraint>,
) -> Result<ContextConstraints, PolicyError> {
    let basic = child(section, "BasicSignatureConstraints");
    let mut certificates = BTreeMap::new();
    for sub_context in SubContext::ALL {
        let cert = basic.and_then(|b| child(b, certificate_element(sub_context)));
        let not_expired = match cert {
            Some(cert) => child_level(cert, "NotExpired")?,
            None => None,
        };
        certificates.insert(
            sub_context,
            CertificateConstraints {
                not_expired,
                cryptographic: cryptographic_under(cert, global)?,
            },
        );
    }

    Ok(ContextConstraints {
        structural_validation: child_level(section, "StructuralValidation")?,
        cryptographic: cryptographic_under(basic, global)?,
        certificates,
    })
}

impl EtsiValidationPolicy {
    pub fn from_document(document: &Document<'_>) -> Result<Self, PolicyError> {
        let root = document.root_element();
        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(PolicyError::Malformed(format!(
                "expected root element '{ROOT_ELEMENT}', found '{}'",
                root.tag_name().name()
            )));
        }

        let global = child(root, "Cryptographic")
            .map(CryptographicConstraint::read)
            .transpose()?;

        let mut contexts = BTreeMap::new();
        for context in [
            Context::Signature,
            Context::CounterSignature,
            Context::Timestamp,
            Context::Revocation,
        ] {
            if let Some(section) = child(root, section_name(context)) {
                contexts.insert(context, read_context(section, global.as_ref())?);
            }
        }
        if let Some(signature) = contexts.get(&Context::Signature).cloned() {
            contexts.insert(Context::Certificate, signature);
        }

        let evidence_record = child(root, section_name(Context::EvidenceRecord))
            .map(|section| cryptographic_under(Some(section), global.as_ref()))
            .transpose()?;

        let default_cryptographic = global
            .as_ref()
            .map(|g| g.to_cryptographic_suite().map(Arc::new))
            .transpose()?;

        Ok(Self {
            name: root.attribute("Name").map(str::to_string),
            description: child(root, "Description").and_then(text),
            contexts,
            evidence_record,
            default_cryptographic,
        })
    }

    pub fn from_xml(xml: &str) -> Result<Self, PolicyError> {
        if xml.trim().is_empty() {
            return Err(PolicyError::MissingArgument("Validation policy document"));
        }
        let document = Document::parse(xml).map_err(|e| PolicyError::Malformed(e.to_string()))?;
        Self::from_document(&document)
    }

    /// Suite of the global `Cryptographic` element, if the document has one.
    pub fn default_cryptographic_constraint(&self) -> Option<Arc<CryptographicSuite>> {
        self.default_cryptographic.clone()
    }
}

impl ValidationPolicy for EtsiValidationPolicy {
    fn policy_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn policy_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn structural_validation_level(&self, context: Context) -> Option<Level> {
        self.contexts.get(&context).and_then(|c| c.structural_validation)
    }

    fn certificate_not_expired_level(&self, context: Context, sub_context: SubContext) -> Option<Level> {
        self.contexts
            .get(&context)
            .and_then(|c| c.certificates.get(&sub_context))
            .and_then(|c| c.not_expired)
    }

    fn signature_cryptographic_constraint(&self, context: Context) -> Option<Arc<CryptographicSuite>> {
        if context == Context::EvidenceRecord {
            return self.evidence_record.clone();
        }
        self.contexts.get(&context).map(|c| c.cryptographic.clone())
    }

    fn certificate_cryptographic_constraint(
        &self,
        context: Context,
        sub_context: SubContext,
    ) -> Option<Arc<CryptographicSuite>> {
        self.contexts
            .get(&context)
            .and_then(|c| c.certificates.get(&sub_context))
            .map(|c| c.cryptographic.clone())
    }

    fn evidence_record_cryptographic_constraint(&self) -> Option<Arc<CryptographicSuite>> {
        self.evidence_record.clone()
    }
}
