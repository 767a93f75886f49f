// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Algorithm acceptability checks, levels and proof-of-existence reasoning.

mod common;

use common::*;
use etsi_policy_abstractions::{DigestAlgorithm, EncryptionAlgorithm, Level, SignatureAlgorithm, SuiteLevels};
use etsi_policy_validation::{ControlTimes, CryptographicChecker, Indication, MessageTag, SubIndication};
use std::sync::Arc;

fn checker(times: ControlTimes) -> CryptographicChecker {
    CryptographicChecker::new(Some(default_suite()), times, "signature")
}

#[test]
fn poe_before_expiration_passes() {
    let times = ControlTimes::new(date(2025, 1, 1)).with_poe(date(2010, 1, 1));
    let conclusion = checker(times).check_digest_algorithm(Some(DigestAlgorithm::Sha1));

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert_eq!(conclusion.sub_indication(), None);
    assert!(conclusion.errors().is_empty());
    assert!(conclusion.warnings().is_empty());
    assert!(conclusion.is_valid());
}

#[test]
fn expired_without_poe_is_indeterminate_no_poe() {
    let conclusion = checker(ControlTimes::new(date(2025, 1, 1))).check_digest_algorithm(Some(DigestAlgorithm::Sha1));

    assert_eq!(conclusion.indication(), Indication::Indeterminate);
    assert_eq!(conclusion.sub_indication(), Some(SubIndication::CryptoConstraintsFailureNoPoe));
    assert_eq!(conclusion.errors().len(), 1);
    assert_eq!(conclusion.errors()[0].key, MessageTag::DigestAlgorithmExpired);
    assert_eq!(
        conclusion.errors()[0].value,
        "The digest algorithm SHA1 is no longer considered reliable for signature at 2025-01-01 00:00:00 UTC \
         (expiration date: 2012-08-01 00:00:00 UTC)!"
    );
    assert!(!conclusion.is_valid());
}

#[test]
fn poe_after_expiration_is_a_plain_crypto_failure() {
    let times = ControlTimes::new(date(2025, 1, 1)).with_poe(date(2013, 1, 1));
    let conclusion = checker(times).check_digest_algorithm(Some(DigestAlgorithm::Sha1));

    assert_eq!(conclusion.indication(), Indication::Indeterminate);
    assert_eq!(conclusion.sub_indication(), Some(SubIndication::CryptoConstraintsFailure));
}

#[test]
fn earliest_poe_is_the_control_time() {
    let times = ControlTimes::new(date(2025, 1, 1))
        .with_poe(date(2014, 1, 1))
        .with_poe(date(2011, 6, 1));
    assert_eq!(times.best_control_time(), date(2011, 6, 1));
    assert!(times.has_poe());
    assert_eq!(times.poe_times().len(), 2);

    let conclusion = checker(times).check_digest_algorithm(Some(DigestAlgorithm::Sha1));
    assert_eq!(conclusion.indication(), Indication::Passed);

    let without = ControlTimes::new(date(2025, 1, 1));
    assert_eq!(without.best_control_time(), without.validation_time());
    assert!(!without.has_poe());
}

#[test]
fn expiration_after_suite_update_uses_the_after_update_level() {
    let conclusion = checker(ControlTimes::new(date(2027, 1, 1)))
        .check_encryption_algorithm(Some(EncryptionAlgorithm::Rsa), Some(2048));

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert!(conclusion.errors().is_empty());
    assert_eq!(conclusion.warnings().len(), 1);
    assert_eq!(conclusion.warnings()[0].key, MessageTag::EncryptionAlgorithmExpired);
    assert_eq!(
        conclusion.warnings()[0].value,
        "The encryption algorithm RSA with key size 2048 is no longer considered reliable for signature at \
         2027-01-01 00:00:00 UTC (expiration date: 2026-01-01 00:00:00 UTC)!"
    );
}

#[test]
fn expiration_before_suite_update_uses_the_expiration_level() {
    let conclusion = checker(ControlTimes::new(date(2025, 1, 1)))
        .check_encryption_algorithm(Some(EncryptionAlgorithm::Rsa), Some(1024));

    assert_eq!(conclusion.indication(), Indication::Indeterminate);
    assert_eq!(conclusion.sub_indication(), Some(SubIndication::CryptoConstraintsFailureNoPoe));
    assert_eq!(conclusion.errors()[0].key, MessageTag::EncryptionAlgorithmExpired);
}

#[test]
fn fail_level_stops_remaining_checks() {
    let conclusion = checker(ControlTimes::new(date(2030, 1, 1)))
        .check_signature_algorithm(Some(SignatureAlgorithm::RSA_SHA256), Some(512));

    assert_eq!(conclusion.indication(), Indication::Indeterminate);
    assert_eq!(conclusion.sub_indication(), Some(SubIndication::CryptoConstraintsFailure));
    assert_eq!(conclusion.errors().len(), 1);
    assert_eq!(
        conclusion.errors()[0].value,
        "The public key size (512) for the algorithm RSA is not authorised for signature!"
    );
    assert!(conclusion.warnings().is_empty());
}

#[test]
fn signature_algorithm_checks_digest_before_encryption_expiry() {
    let conclusion = checker(ControlTimes::new(date(2025, 1, 1)))
        .check_signature_algorithm(Some(SignatureAlgorithm::RSA_SHA1), Some(4096));

    assert_eq!(conclusion.sub_indication(), Some(SubIndication::CryptoConstraintsFailureNoPoe));
    assert_eq!(conclusion.errors().len(), 1);
    assert_eq!(conclusion.errors()[0].key, MessageTag::DigestAlgorithmExpired);
}

#[test]
fn signature_algorithm_without_digest_checks_encryption_only() {
    let conclusion = checker(ControlTimes::new(date(2030, 1, 1)))
        .check_signature_algorithm(Some(SignatureAlgorithm::ED25519), None);

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert!(conclusion.errors().is_empty());
}

#[test]
fn unauthorised_algorithms_fail_with_crypto_constraints_failure() {
    let suite = Arc::new(named_suite("restricted"));
    let checker = CryptographicChecker::new(Some(suite), ControlTimes::new(date(2026, 1, 1)), "timestamp");

    let digest = checker.check_digest_algorithm(Some(DigestAlgorithm::Sha1));
    assert_eq!(digest.indication(), Indication::Indeterminate);
    assert_eq!(digest.sub_indication(), Some(SubIndication::CryptoConstraintsFailure));
    assert_eq!(digest.errors()[0].key, MessageTag::DigestAlgorithmNotAuthorised);
    assert_eq!(digest.errors()[0].value, "The digest algorithm SHA1 is not authorised for timestamp!");

    let encryption = checker.check_encryption_algorithm(Some(EncryptionAlgorithm::Ecdsa), Some(256));
    assert_eq!(encryption.sub_indication(), Some(SubIndication::CryptoConstraintsFailure));
    assert_eq!(
        encryption.errors()[0].value,
        "The encryption algorithm ECDSA is not authorised for timestamp!"
    );
}

#[test]
fn warn_level_failures_accumulate_warnings() {
    let suite = Arc::new(sha256_rsa_suite("warn", SuiteLevels::uniform(Level::Warn)));
    let checker = CryptographicChecker::new(Some(suite), ControlTimes::new(date(2031, 1, 1)), "signature");

    let conclusion = checker.check_signature_algorithm(Some(SignatureAlgorithm::ECDSA_SHA1), Some(4096));

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert_eq!(conclusion.sub_indication(), None);
    let keys: Vec<_> = conclusion.warnings().iter().map(|m| m.key).collect();
    assert_eq!(
        keys,
        vec![MessageTag::DigestAlgorithmNotAuthorised, MessageTag::EncryptionAlgorithmNotAuthorised]
    );

    let expired = checker.check_encryption_algorithm(Some(EncryptionAlgorithm::Rsa), Some(4096));
    assert_eq!(expired.indication(), Indication::Passed);
    assert_eq!(expired.warnings().len(), 1);
    assert_eq!(expired.warnings()[0].key, MessageTag::EncryptionAlgorithmExpired);
}

#[test]
fn inform_level_failures_become_infos() {
    let suite = Arc::new(sha256_rsa_suite("inform", SuiteLevels::uniform(Level::Inform)));
    let checker = CryptographicChecker::new(Some(suite), ControlTimes::new(date(2031, 1, 1)), "signature");

    let conclusion = checker.check_signature_algorithm(Some(SignatureAlgorithm::RSA_SHA1), Some(1024));

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert!(conclusion.warnings().is_empty());
    let keys: Vec<_> = conclusion.infos().iter().map(|m| m.key).collect();
    assert_eq!(
        keys,
        vec![MessageTag::DigestAlgorithmNotAuthorised, MessageTag::PublicKeySizeNotAuthorised]
    );
}

#[test]
fn ignore_level_failures_are_silent() {
    let suite = Arc::new(sha256_rsa_suite("ignore", SuiteLevels::uniform(Level::Ignore)));
    let checker = CryptographicChecker::new(Some(suite), ControlTimes::new(date(2031, 1, 1)), "signature");

    let conclusion = checker.check_signature_algorithm(Some(SignatureAlgorithm::ECDSA_SHA1), Some(128));

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert!(conclusion.errors().is_empty());
    assert!(conclusion.warnings().is_empty());
    assert!(conclusion.infos().is_empty());
}

#[test]
fn unidentified_algorithm_uses_the_global_level() {
    let conclusion = CryptographicChecker::new(Some(default_suite()), ControlTimes::new(date(2025, 1, 1)), "revocation")
        .check_digest_algorithm(None);

    assert_eq!(conclusion.indication(), Indication::Indeterminate);
    assert_eq!(conclusion.sub_indication(), Some(SubIndication::CryptoConstraintsFailure));
    assert_eq!(conclusion.errors()[0].key, MessageTag::AlgorithmNotIdentified);
    assert_eq!(conclusion.errors()[0].value, "The algorithm used for revocation is not identified!");

    let mut levels = SuiteLevels::uniform(Level::Fail);
    levels.level = Level::Warn;
    let lenient = Arc::new(sha256_rsa_suite("lenient", levels));
    let conclusion = CryptographicChecker::new(Some(lenient), ControlTimes::new(date(2025, 1, 1)), "signature")
        .check_signature_algorithm(None, Some(2048));
    assert_eq!(conclusion.indication(), Indication::Passed);
    assert_eq!(conclusion.warnings().len(), 1);
}

#[test]
fn missing_suite_passes_everything() {
    let checker = CryptographicChecker::new(None, ControlTimes::new(date(2040, 1, 1)), "signature");

    for conclusion in [
        checker.check_digest_algorithm(Some(DigestAlgorithm::Md5)),
        checker.check_digest_algorithm(None),
        checker.check_encryption_algorithm(Some(EncryptionAlgorithm::Rsa), Some(256)),
        checker.check_signature_algorithm(None, None),
    ] {
        assert_eq!(conclusion.indication(), Indication::Passed);
        assert!(conclusion.errors().is_empty());
        assert!(conclusion.warnings().is_empty());
        assert!(conclusion.infos().is_empty());
    }
}

#[test]
fn unknown_key_size_passes_the_key_size_check() {
    let conclusion = checker(ControlTimes::new(date(2030, 1, 1)))
        .check_encryption_algorithm(Some(EncryptionAlgorithm::Rsa), None);

    assert_eq!(conclusion.indication(), Indication::Passed);
    assert!(conclusion.errors().is_empty());
}

#[test]
fn expiration_is_exclusive_at_the_expiration_instant() {
    let at_expiration = checker(ControlTimes::new(date(2012, 8, 1))).check_digest_algorithm(Some(DigestAlgorithm::Sha1));
    assert_eq!(at_expiration.indication(), Indication::Indeterminate);

    let just_before = checker(ControlTimes::new(date(2012, 7, 31))).check_digest_algorithm(Some(DigestAlgorithm::Sha1));
    assert_eq!(just_before.indication(), Indication::Passed);
}
