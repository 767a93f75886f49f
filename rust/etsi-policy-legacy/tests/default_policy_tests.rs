// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Content of the shipped default policy.

mod common;

use common::*;
use etsi_policy_abstractions::suite_utils::digest_expiration_date;
use etsi_policy_abstractions::{Context, DigestAlgorithm, Level, SubContext, ValidationPolicy};

#[test]
fn default_policy_metadata_and_levels() {
    let policy = etsi_policy_legacy::default_validation_policy().unwrap();

    assert_eq!(policy.policy_name(), Some("QES AdESQC TL based"));
    assert!(policy.policy_description().unwrap().starts_with("Validate electronic signatures"));
    assert_eq!(policy.structural_validation_level(Context::Signature), Some(Level::Warn));
    assert_eq!(policy.structural_validation_level(Context::Revocation), None);
    assert_eq!(policy.structural_validation_level(Context::EvidenceRecord), None);
    assert_eq!(
        policy.certificate_not_expired_level(Context::Timestamp, SubContext::CaCertificate),
        Some(Level::Fail)
    );
}

#[test]
fn default_policy_suites_inherit_the_global_cryptographic_element() {
    let policy = etsi_policy_legacy::default_validation_policy().unwrap();

    for context in Context::ALL {
        let suite = policy.signature_cryptographic_constraint(context).unwrap();
        assert_eq!(digest_expiration_date(&suite, DigestAlgorithm::Sha1), Some(date(2012, 8, 1)));
        assert_eq!(suite.update_date(), Some(date(2024, 10, 13)));
        assert_eq!(suite.algorithms_expiration_date_level(), Level::Fail);
        assert_eq!(suite.algorithms_expiration_date_after_update_level(), Level::Warn);
    }
    for context in Context::ALL.into_iter().filter(|c| c.supports_sub_context()) {
        for sub_context in SubContext::ALL {
            assert!(policy.certificate_cryptographic_constraint(context, sub_context).is_some());
        }
    }
    assert!(policy.evidence_record_cryptographic_constraint().is_some());
}

#[test]
fn certificate_suites_without_local_element_equal_the_global_suite() {
    let policy = etsi_policy_legacy::default_validation_policy().unwrap();
    let global = policy.default_cryptographic_constraint().unwrap();
    let signing = policy
        .certificate_cryptographic_constraint(Context::Signature, SubContext::SigningCert)
        .unwrap();

    assert_eq!(*signing, *global);
    assert!(global.acceptable_digest_algorithms().contains(&DigestAlgorithm::Sha256));
    assert!(!global.is_empty());
}

#[test]
fn certificate_context_mirrors_signature_context() {
    let policy = etsi_policy_legacy::default_validation_policy().unwrap();

    assert_eq!(
        policy.structural_validation_level(Context::Certificate),
        policy.structural_validation_level(Context::Signature)
    );
    assert_eq!(
        policy.certificate_not_expired_level(Context::Certificate, SubContext::SigningCert),
        Some(Level::Fail)
    );
}

#[test]
fn default_policy_is_parsed_once() {
    let first = etsi_policy_legacy::default_validation_policy().unwrap();
    let second = etsi_policy_legacy::default_validation_policy().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
