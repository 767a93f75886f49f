// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The cryptographic suite model.
//!
//! A [`CryptographicSuite`] is immutable once built. Accessors always return a collection,
//! empty when the source document said nothing, so callers never special-case a missing suite
//! section. Programmatic construction goes through [`CryptographicSuiteBuilder`].

use crate::algorithms::{DigestAlgorithm, EncryptionAlgorithm, EncryptionAlgorithmWithMinKeySize};
use crate::level::Level;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// The six independent severity levels carried by a suite.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SuiteLevels {
    /// Global level of the suite, also applied when the algorithm in use cannot be identified.
    pub level: Level,
    pub acceptable_digest_algorithms: Level,
    pub acceptable_encryption_algorithms: Level,
    pub acceptable_encryption_algorithms_mini_key_size: Level,
    pub algorithms_expiration_date: Level,
    /// Applied instead of `algorithms_expiration_date` when the algorithm expired after the
    /// suite was last updated.
    pub algorithms_expiration_date_after_update: Level,
}

impl SuiteLevels {
    /// Every level set to `level`.
    pub fn uniform(level: Level) -> Self {
        Self {
            level,
            acceptable_digest_algorithms: level,
            acceptable_encryption_algorithms: level,
            acceptable_encryption_algorithms_mini_key_size: level,
            algorithms_expiration_date: level,
            algorithms_expiration_date_after_update: level,
        }
    }
}

impl Default for SuiteLevels {
    /// FAIL everywhere, except WARN for expirations the suite author could not have known about.
    fn default() -> Self {
        Self {
            algorithms_expiration_date_after_update: Level::Warn,
            ..Self::uniform(Level::Fail)
        }
    }
}

/// Acceptable algorithms, minimum key sizes and expiration dates.
///
/// In the expiration maps, a missing key means "no expiration asserted" while a key mapped
/// to `None` means "explicitly never expires".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CryptographicSuite {
    name: Option<String>,
    acceptable_digest_algorithms: BTreeSet<DigestAlgorithm>,
    acceptable_encryption_algorithms: BTreeSet<EncryptionAlgorithm>,
    acceptable_encryption_algorithms_with_min_key_sizes: BTreeSet<EncryptionAlgorithmWithMinKeySize>,
    digest_expiration_dates: BTreeMap<DigestAlgorithm, Option<DateTime<Utc>>>,
    encryption_expiration_dates: BTreeMap<EncryptionAlgorithmWithMinKeySize, Option<DateTime<Utc>>>,
    update_date: Option<DateTime<Utc>>,
    levels: SuiteLevels,
}

impl CryptographicSuite {
    pub fn builder() -> CryptographicSuiteBuilder {
        CryptographicSuiteBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn acceptable_digest_algorithms(&self) -> &BTreeSet<DigestAlgorithm> {
        &self.acceptable_digest_algorithms
    }

    pub fn acceptable_encryption_algorithms(&self) -> &BTreeSet<EncryptionAlgorithm> {
        &self.acceptable_encryption_algorithms
    }

    pub fn acceptable_encryption_algorithms_with_min_key_sizes(
        &self,
    ) -> &BTreeSet<EncryptionAlgorithmWithMinKeySize> {
        &self.acceptable_encryption_algorithms_with_min_key_sizes
    }

    pub fn digest_expiration_dates(&self) -> &BTreeMap<DigestAlgorithm, Option<DateTime<Utc>>> {
        &self.digest_expiration_dates
    }

    pub fn encryption_expiration_dates(
        &self,
    ) -> &BTreeMap<EncryptionAlgorithmWithMinKeySize, Option<DateTime<Utc>>> {
        &self.encryption_expiration_dates
    }

    /// Date the suite itself was last revised.
    pub fn update_date(&self) -> Option<DateTime<Utc>> {
        self.update_date
    }

    pub fn levels(&self) -> &SuiteLevels {
        &self.levels
    }

    pub fn level(&self) -> Level {
        self.levels.level
    }

    pub fn acceptable_digest_algorithms_level(&self) -> Level {
        self.levels.acceptable_digest_algorithms
    }

    pub fn acceptable_encryption_algorithms_level(&self) -> Level {
        self.levels.acceptable_encryption_algorithms
    }

    pub fn acceptable_encryption_algorithms_mini_key_size_level(&self) -> Level {
        self.levels.acceptable_encryption_algorithms_mini_key_size
    }

    pub fn algorithms_expiration_date_level(&self) -> Level {
        self.levels.algorithms_expiration_date
    }

    pub fn algorithms_expiration_date_after_update_level(&self) -> Level {
        self.levels.algorithms_expiration_date_after_update
    }

    /// Same content, different levels.
    pub fn with_levels(&self, levels: SuiteLevels) -> Self {
        Self {
            levels,
            ..self.clone()
        }
    }

    /// True when the suite lists no algorithm at all.
    pub fn is_empty(&self) -> bool {
        self.acceptable_digest_algorithms.is_empty()
            && self.acceptable_encryption_algorithms.is_empty()
            && self.acceptable_encryption_algorithms_with_min_key_sizes.is_empty()
            && self.digest_expiration_dates.is_empty()
            && self.encryption_expiration_dates.is_empty()
    }
}

/// Builder for [`CryptographicSuite`].
#[derive(Debug, Default)]
pub struct CryptographicSuiteBuilder {
    suite: CryptographicSuite,
}

impl CryptographicSuiteBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.suite.name = Some(name.into());
        self
    }

    pub fn acceptable_digest_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.suite.acceptable_digest_algorithms.insert(algorithm);
        self
    }

    pub fn acceptable_digest_algorithms(
        mut self,
        algorithms: impl IntoIterator<Item = DigestAlgorithm>,
    ) -> Self {
        self.suite.acceptable_digest_algorithms.extend(algorithms);
        self
    }

    /// Record an expiration entry for a digest algorithm. A later call for the same
    /// algorithm replaces the earlier one.
    pub fn digest_expiration(
        mut self,
        algorithm: DigestAlgorithm,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        self.suite.digest_expiration_dates.insert(algorithm, expiration);
        self
    }

    pub fn acceptable_encryption_algorithm(mut self, algorithm: EncryptionAlgorithm) -> Self {
        self.suite.acceptable_encryption_algorithms.insert(algorithm);
        self
    }

    pub fn acceptable_encryption_algorithms(
        mut self,
        algorithms: impl IntoIterator<Item = EncryptionAlgorithm>,
    ) -> Self {
        self.suite.acceptable_encryption_algorithms.extend(algorithms);
        self
    }

    pub fn min_key_size(mut self, algorithm: EncryptionAlgorithm, min_key_size: u32) -> Self {
        self.suite
            .acceptable_encryption_algorithms_with_min_key_sizes
            .insert(EncryptionAlgorithmWithMinKeySize::new(algorithm, min_key_size));
        self
    }

    pub fn encryption_expiration(
        mut self,
        algorithm: EncryptionAlgorithm,
        min_key_size: u32,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        self.suite.encryption_expiration_dates.insert(
            EncryptionAlgorithmWithMinKeySize::new(algorithm, min_key_size),
            expiration,
        );
        self
    }

    pub fn update_date(mut self, update_date: Option<DateTime<Utc>>) -> Self {
        self.suite.update_date = update_date;
        self
    }

    pub fn levels(mut self, levels: SuiteLevels) -> Self {
        self.suite.levels = levels;
        self
    }

    pub fn build(self) -> CryptographicSuite {
        self.suite
    }
}
