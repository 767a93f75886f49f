// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Reliability queries over a cryptographic suite.

mod common;

use common::*;
use etsi_policy_abstractions::suite_utils::*;
use etsi_policy_abstractions::{
    CryptographicSuite, DigestAlgorithm, EncryptionAlgorithm, EncryptionAlgorithmWithMinKeySize, Level,
    SuiteLevels,
};

#[test]
fn acceptable_sets_drive_reliability() {
    let suite = sample_suite();

    assert!(is_digest_algorithm_reliable(&suite, DigestAlgorithm::Sha256));
    assert!(!is_digest_algorithm_reliable(&suite, DigestAlgorithm::Md5));
    assert!(is_encryption_algorithm_reliable(&suite, EncryptionAlgorithm::Rsa));
    assert!(!is_encryption_algorithm_reliable(&suite, EncryptionAlgorithm::Dsa));
}

#[test]
fn key_size_check_passes_unknown_sizes_and_unlisted_algorithms() {
    let suite = sample_suite();

    assert!(is_encryption_algorithm_with_key_size_reliable(&suite, EncryptionAlgorithm::Rsa, Some(2048)));
    assert!(is_encryption_algorithm_with_key_size_reliable(&suite, EncryptionAlgorithm::Rsa, Some(1024)));
    assert!(!is_encryption_algorithm_with_key_size_reliable(&suite, EncryptionAlgorithm::Rsa, Some(512)));

    assert!(is_encryption_algorithm_with_key_size_reliable(&suite, EncryptionAlgorithm::Rsa, None));
    assert!(is_encryption_algorithm_with_key_size_reliable(&suite, EncryptionAlgorithm::Rsa, Some(0)));
    assert!(is_encryption_algorithm_with_key_size_reliable(&suite, EncryptionAlgorithm::Ecdsa, Some(128)));
}

#[test]
fn encryption_expiration_uses_the_nearest_bracket_not_exceeding_the_key_size() {
    let suite = sample_suite();

    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Rsa, 1024), Some(date(2019, 10, 1)));
    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Rsa, 1899), Some(date(2019, 10, 1)));
    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Rsa, 2048), Some(date(2026, 1, 1)));
    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Rsa, 4096), None);
    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Rsa, 512), None);
    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Ecdsa, 256), None);
}

#[test]
fn minimum_key_size_without_a_bracket_borrows_the_next_one_up() {
    let suite = CryptographicSuite::builder()
        .acceptable_encryption_algorithm(EncryptionAlgorithm::Dsa)
        .min_key_size(EncryptionAlgorithm::Dsa, 1000)
        .encryption_expiration(EncryptionAlgorithm::Dsa, 2048, Some(date(2030, 1, 1)))
        .build();

    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Dsa, 1500), Some(date(2030, 1, 1)));
    assert_eq!(encryption_expiration_date(&suite, EncryptionAlgorithm::Dsa, 999), None);
}

#[test]
fn digest_expiration_distinguishes_missing_and_never_expiring() {
    let suite = sample_suite();

    assert_eq!(digest_expiration_date(&suite, DigestAlgorithm::Sha1), Some(date(2012, 8, 1)));
    assert_eq!(digest_expiration_date(&suite, DigestAlgorithm::Sha256), None);
    assert!(suite.digest_expiration_dates().contains_key(&DigestAlgorithm::Sha256));
    assert!(!suite.digest_expiration_dates().contains_key(&DigestAlgorithm::Sha512));
}

#[test]
fn reliable_algorithms_at_time_follow_expirations() {
    let suite = sample_suite();

    let at_2010 = reliable_digest_algorithms_at_time(&suite, date(2010, 1, 1));
    assert!(at_2010.contains(&DigestAlgorithm::Sha1));
    let at_2025 = reliable_digest_algorithms_at_time(&suite, date(2025, 1, 1));
    assert!(!at_2025.contains(&DigestAlgorithm::Sha1));
    assert!(at_2025.contains(&DigestAlgorithm::Sha256));

    // The expiration day itself is still reliable.
    assert!(reliable_digest_algorithms_at_time(&suite, date(2012, 8, 1)).contains(&DigestAlgorithm::Sha1));

    let encryption = reliable_encryption_algorithms_with_min_key_size_at_time(&suite, date(2025, 1, 1));
    assert!(encryption.contains(&EncryptionAlgorithmWithMinKeySize::new(EncryptionAlgorithm::Rsa, 1900)));
    assert!(encryption.contains(&EncryptionAlgorithmWithMinKeySize::new(EncryptionAlgorithm::Ecdsa, 0)));
    assert_eq!(encryption.len(), 2);

    let later = reliable_encryption_algorithms_with_min_key_size_at_time(&suite, date(2027, 1, 1));
    assert!(later.contains(&EncryptionAlgorithmWithMinKeySize::new(EncryptionAlgorithm::Rsa, 3000)));
}

#[test]
fn empty_suite_rejects_everything_but_never_panics() {
    let suite = CryptographicSuite::default();

    assert!(suite.is_empty());
    assert!(suite.acceptable_digest_algorithms().is_empty());
    assert!(!is_digest_algorithm_reliable(&suite, DigestAlgorithm::Sha256));
    assert!(reliable_digest_algorithms_at_time(&suite, date(2025, 1, 1)).is_empty());
    assert!(reliable_encryption_algorithms_with_min_key_size_at_time(&suite, date(2025, 1, 1)).is_empty());
}

#[test]
fn with_levels_keeps_content() {
    let suite = sample_suite();
    let relevelled = suite.with_levels(SuiteLevels::uniform(Level::Inform));

    assert_eq!(relevelled.acceptable_digest_algorithms(), suite.acceptable_digest_algorithms());
    assert_eq!(relevelled.update_date(), suite.update_date());
    assert_eq!(relevelled.algorithms_expiration_date_after_update_level(), Level::Inform);
    assert_eq!(suite.algorithms_expiration_date_after_update_level(), Level::Warn);
    assert_eq!(suite.level(), Level::Fail);
}
