// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `etsi-policy-validation` integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use etsi_policy_abstractions::{CryptographicSuite, DigestAlgorithm, EncryptionAlgorithm, SuiteLevels};
use std::sync::Arc;

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// The XML default suite: SHA1 expired 2012-08-01, RSA 1900 bits expired 2026-01-01, issued
/// 2024-10-13, FAIL everywhere except WARN after the update date.
pub(crate) fn default_suite() -> Arc<CryptographicSuite> {
    Arc::new(etsi_policy_crypto_xml::default_cryptographic_suite().unwrap())
}

/// A small suite accepting SHA256 and RSA only, every level set to `levels`.
pub(crate) fn sha256_rsa_suite(name: &str, levels: SuiteLevels) -> CryptographicSuite {
    CryptographicSuite::builder()
        .name(name)
        .acceptable_digest_algorithm(DigestAlgorithm::Sha256)
        .digest_expiration(DigestAlgorithm::Sha256, None)
        .acceptable_encryption_algorithm(EncryptionAlgorithm::Rsa)
        .min_key_size(EncryptionAlgorithm::Rsa, 2048)
        .encryption_expiration(EncryptionAlgorithm::Rsa, 2048, Some(date(2030, 1, 1)))
        .update_date(Some(date(2025, 1, 1)))
        .levels(levels)
        .build()
}

pub(crate) fn named_suite(name: &str) -> CryptographicSuite {
    sha256_rsa_suite(name, SuiteLevels::default())
}

/// A legacy policy document with a signature section and a timestamp section.
pub(crate) const POLICY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ConstraintsParameters Name="loader test policy">
    <SignatureConstraints>
        <StructuralValidation Level="WARN" />
    </SignatureConstraints>
    <Timestamp />
    <Cryptographic Level="FAIL">
        <AcceptableDigestAlgo>
            <Algo>SHA1</Algo>
        </AcceptableDigestAlgo>
    </Cryptographic>
</ConstraintsParameters>"#;
