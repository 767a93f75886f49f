// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `etsi-policy-abstractions` integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use etsi_policy_abstractions::{CryptographicSuite, DigestAlgorithm, EncryptionAlgorithm};

/// UTC midnight of the given day.
pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// A small suite shaped like the shipped default: SHA1 expired in 2012, SHA256 never expires,
/// RSA with three key-size brackets.
pub(crate) fn sample_suite() -> CryptographicSuite {
    CryptographicSuite::builder()
        .name("sample")
        .acceptable_digest_algorithms([DigestAlgorithm::Sha1, DigestAlgorithm::Sha256])
        .digest_expiration(DigestAlgorithm::Sha1, Some(date(2012, 8, 1)))
        .digest_expiration(DigestAlgorithm::Sha256, None)
        .acceptable_encryption_algorithms([EncryptionAlgorithm::Rsa, EncryptionAlgorithm::Ecdsa])
        .min_key_size(EncryptionAlgorithm::Rsa, 1024)
        .encryption_expiration(EncryptionAlgorithm::Rsa, 1024, Some(date(2019, 10, 1)))
        .encryption_expiration(EncryptionAlgorithm::Rsa, 1900, Some(date(2026, 1, 1)))
        .encryption_expiration(EncryptionAlgorithm::Rsa, 3000, None)
        .update_date(Some(date(2024, 10, 13)))
        .build()
}
