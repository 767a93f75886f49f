// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Algorithm acceptability check with proof-of-existence reasoning.
//!
//! Checks run in a fixed order: acceptable digest, acceptable encryption, minimum key size,
//! digest expiration, encryption expiration. A failure at level FAIL stops the run and yields
//! an INDETERMINATE conclusion; WARN and INFORM failures only attach messages; IGNORE skips the
//! check.

use crate::conclusion::Conclusion;
use crate::indication::{Indication, SubIndication};
use crate::message_tag::{Message, MessageTag};
use chrono::{DateTime, Utc};
use etsi_policy_abstractions::suite_utils::{
    digest_expiration_date, encryption_expiration_date, is_digest_algorithm_reliable,
    is_encryption_algorithm_reliable, is_encryption_algorithm_with_key_size_reliable,
};
use etsi_policy_abstractions::{
    CryptographicSuite, DigestAlgorithm, EncryptionAlgorithm, Level, SignatureAlgorithm,
};
use std::sync::Arc;

/// Candidate times at which the material is known to have existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlTimes {
    validation_time: DateTime<Utc>,
    poe_times: Vec<DateTime<Utc>>,
}

impl ControlTimes {
    /// Only the validation instant, no proof of existence.
    pub fn new(validation_time: DateTime<Utc>) -> Self {
        Self {
            validation_time,
            poe_times: Vec::new(),
        }
    }

    /// Add a proof-of-existence time, typically the generation time of a validated timestamp
    /// covering the material.
    pub fn with_poe(mut self, poe_time: DateTime<Utc>) -> Self {
        self.poe_times.push(poe_time);
        self
    }

    pub fn validation_time(&self) -> DateTime<Utc> {
        self.validation_time
    }

    pub fn poe_times(&self) -> &[DateTime<Utc>] {
        &self.poe_times
    }

    pub fn has_poe(&self) -> bool {
        !self.poe_times.is_empty()
    }

    /// The earliest proof of existence, or the validation instant without any.
    pub fn best_control_time(&self) -> DateTime<Utc> {
        self.poe_times
            .iter()
            .min()
            .copied()
            .unwrap_or(self.validation_time)
    }
}

/// Marker returned once a FAIL-level failure was recorded.
struct Stop;

#[derive(Default)]
struct CheckRun {
    failure: Option<SubIndication>,
    errors: Vec<Message>,
    warnings: Vec<Message>,
    infos: Vec<Message>,
}

impl CheckRun {
    fn record(&mut self, level: Level, sub_indication: SubIndication, message: Message) -> Result<(), Stop> {
        match level {
            Level::Fail => {
                tracing::debug!(detail = %message, %sub_indication, "cryptographic check failed, remaining checks skipped");
                self.errors.push(message);
                self.failure = Some(sub_indication);
                Err(Stop)
            }
            Level::Warn => {
                self.warnings.push(message);
                Ok(())
            }
            Level::Inform => {
                self.infos.push(message);
                Ok(())
            }
            Level::Ignore => Ok(()),
        }
    }

    fn into_conclusion(self) -> Conclusion {
        let indication = match self.failure {
            Some(_) => Indication::Indeterminate,
            None => Indication::Passed,
        };
        Conclusion::new(indication, self.failure, self.errors, self.warnings, self.infos)
    }
}

fn display_date(date: DateTime<Utc>) -> impl std::fmt::Display {
    date.format("%Y-%m-%d %H:%M:%S UTC")
}

/// Judges one algorithm usage against the suite in effect at a given position.
#[derive(Debug, Clone)]
pub struct CryptographicChecker {
    suite: Option<Arc<CryptographicSuite>>,
    control_times: ControlTimes,
    position: String,
}

impl CryptographicChecker {
    /// `suite` is `None` when the policy imposes no cryptographic constraint at this position,
    /// in which case every check passes. `position` names the checked material in messages.
    pub fn new(
        suite: Option<Arc<CryptographicSuite>>,
        control_times: ControlTimes,
        position: impl Into<String>,
    ) -> Self {
        Self {
            suite,
            control_times,
            position: position.into(),
        }
    }

    pub fn check_digest_algorithm(&self, algorithm: Option<DigestAlgorithm>) -> Conclusion {
        self.run(|run, suite| {
            let Some(digest) = algorithm else {
                return self.unidentified(run, suite);
            };
            self.digest_acceptable(run, suite, digest)?;
            self.digest_not_expired(run, suite, digest)
        })
    }

    pub fn check_encryption_algorithm(
        &self,
        algorithm: Option<EncryptionAlgorithm>,
        key_size: Option<u32>,
    ) -> Conclusion {
        self.run(|run, suite| {
            let Some(encryption) = algorithm else {
                return self.unidentified(run, suite);
            };
            self.encryption_acceptable(run, suite, encryption)?;
            self.key_size_acceptable(run, suite, encryption, key_size)?;
            self.encryption_not_expired(run, suite, encryption, key_size)
        })
    }

    /// Both halves of a signature algorithm, judged in one run.
    pub fn check_signature_algorithm(
        &self,
        algorithm: Option<SignatureAlgorithm>,
        key_size: Option<u32>,
    ) -> Conclusion {
        self.run(|run, suite| {
            let Some(signature) = algorithm else {
                return self.unidentified(run, suite);
            };
            let digest = signature.digest_algorithm();
            let encryption = signature.encryption_algorithm();

            if let Some(digest) = digest {
                self.digest_acceptable(run, suite, digest)?;
            }
            self.encryption_acceptable(run, suite, encryption)?;
            self.key_size_acceptable(run, suite, encryption, key_size)?;
            if let Some(digest) = digest {
                self.digest_not_expired(run, suite, digest)?;
            }
            self.encryption_not_expired(run, suite, encryption, key_size)
        })
    }

    fn run(&self, checks: impl FnOnce(&mut CheckRun, &CryptographicSuite) -> Result<(), Stop>) -> Conclusion {
        let Some(suite) = self.suite.as_deref() else {
            return Conclusion::passed();
        };
        let mut run = CheckRun::default();
        // A stop only ends the run; its outcome is already recorded.
        let _ = checks(&mut run, suite);
        run.into_conclusion()
    }

    fn unidentified(&self, run: &mut CheckRun, suite: &CryptographicSuite) -> Result<(), Stop> {
        run.record(
            suite.level(),
            SubIndication::CryptoConstraintsFailure,
            Message::new(MessageTag::AlgorithmNotIdentified, &[&self.position]),
        )
    }

    fn digest_acceptable(
        &self,
        run: &mut CheckRun,
        suite: &CryptographicSuite,
        digest: DigestAlgorithm,
    ) -> Result<(), Stop> {
        if is_digest_algorithm_reliable(suite, digest) {
            return Ok(());
        }
        run.record(
            suite.acceptable_digest_algorithms_level(),
            SubIndication::CryptoConstraintsFailure,
            Message::new(MessageTag::DigestAlgorithmNotAuthorised, &[&digest, &self.position]),
        )
    }

    fn encryption_acceptable(
        &self,
        run: &mut CheckRun,
        suite: &CryptographicSuite,
        encryption: EncryptionAlgorithm,
    ) -> Result<(), Stop> {
        if is_encryption_algorithm_reliable(suite, encryption) {
            return Ok(());
        }
        run.record(
            suite.acceptable_encryption_algorithms_level(),
            SubIndication::CryptoConstraintsFailure,
            Message::new(MessageTag::EncryptionAlgorithmNotAuthorised, &[&encryption, &self.position]),
        )
    }

    fn key_size_acceptable(
        &self,
        run: &mut CheckRun,
        suite: &CryptographicSuite,
        encryption: EncryptionAlgorithm,
        key_size: Option<u32>,
    ) -> Result<(), Stop> {
        if is_encryption_algorithm_with_key_size_reliable(suite, encryption, key_size) {
            return Ok(());
        }
        let size = key_size.unwrap_or_default();
        run.record(
            suite.acceptable_encryption_algorithms_mini_key_size_level(),
            SubIndication::CryptoConstraintsFailure,
            Message::new(MessageTag::PublicKeySizeNotAuthorised, &[&size, &encryption, &self.position]),
        )
    }

    fn digest_not_expired(
        &self,
        run: &mut CheckRun,
        suite: &CryptographicSuite,
        digest: DigestAlgorithm,
    ) -> Result<(), Stop> {
        let Some(expiration) = digest_expiration_date(suite, digest) else {
            return Ok(());
        };
        let control_time = self.control_times.best_control_time();
        if control_time < expiration {
            return Ok(());
        }
        run.record(
            self.expiration_level(suite, expiration),
            self.expiration_sub_indication(),
            Message::new(
                MessageTag::DigestAlgorithmExpired,
                &[&digest, &self.position, &display_date(control_time), &display_date(expiration)],
            ),
        )
    }

    fn encryption_not_expired(
        &self,
        run: &mut CheckRun,
        suite: &CryptographicSuite,
        encryption: EncryptionAlgorithm,
        key_size: Option<u32>,
    ) -> Result<(), Stop> {
        let size = key_size.unwrap_or_default();
        let Some(expiration) = encryption_expiration_date(suite, encryption, size) else {
            return Ok(());
        };
        let control_time = self.control_times.best_control_time();
        if control_time < expiration {
            return Ok(());
        }
        run.record(
            self.expiration_level(suite, expiration),
            self.expiration_sub_indication(),
            Message::new(
                MessageTag::EncryptionAlgorithmExpired,
                &[
                    &encryption,
                    &size,
                    &self.position,
                    &display_date(control_time),
                    &display_date(expiration),
                ],
            ),
        )
    }

    /// Expirations the suite author could not have known about use the after-update level.
    fn expiration_level(&self, suite: &CryptographicSuite, expiration: DateTime<Utc>) -> Level {
        match suite.update_date() {
            Some(update_date) if expiration > update_date => suite.algorithms_expiration_date_after_update_level(),
            _ => suite.algorithms_expiration_date_level(),
        }
    }

    fn expiration_sub_indication(&self) -> SubIndication {
        if self.control_times.has_poe() {
            SubIndication::CryptoConstraintsFailure
        } else {
            SubIndication::CryptoConstraintsFailureNoPoe
        }
    }
}
