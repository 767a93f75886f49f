// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Suite factory resolution with both wire forms linked.

mod common;

use common::*;
use etsi_policy_abstractions::{
    load_cryptographic_suite, load_cryptographic_suite_from_path, load_default_cryptographic_suite,
    suite_factories_ordered, suite_factory_name, DigestAlgorithm, InMemoryDocument, SuiteError,
};
use etsi_policy_crypto_json::{JSON_SUITE_FACTORY_ID, JSON_SUITE_FACTORY_NAME};
use etsi_policy_crypto_xml::XML_SUITE_FACTORY_ID;

#[test]
fn factories_are_ordered_by_priority() {
    let ids: Vec<_> = suite_factories_ordered().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![XML_SUITE_FACTORY_ID, JSON_SUITE_FACTORY_ID]);
    assert_eq!(suite_factory_name(JSON_SUITE_FACTORY_ID), Some(JSON_SUITE_FACTORY_NAME));
}

#[test]
fn json_documents_are_routed_to_the_json_factory() {
    let suite = load_cryptographic_suite(&InMemoryDocument::new(SHA1_ONLY_JSON)).unwrap();
    assert_eq!(suite.name(), Some("sha1 only"));
    assert!(suite.acceptable_digest_algorithms().contains(&DigestAlgorithm::Sha1));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("suite.json");
    std::fs::write(&path, SHA1_ONLY_JSON).unwrap();
    assert_eq!(load_cryptographic_suite_from_path(&path).unwrap(), suite);
}

#[test]
fn default_suite_comes_from_the_highest_priority_factory() {
    let suite = load_default_cryptographic_suite().unwrap();
    assert_eq!(suite, etsi_policy_crypto_xml::default_cryptographic_suite().unwrap());
}

#[test]
fn json_without_suite_keys_is_unsupported() {
    match load_cryptographic_suite(&InMemoryDocument::new(r#"{"ConstraintsParameters": {}}"#)) {
        Err(SuiteError::UnsupportedFormat) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected UnsupportedFormat"),
    }
}
