// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Queries over a [`CryptographicSuite`].

use crate::algorithms::{DigestAlgorithm, EncryptionAlgorithm, EncryptionAlgorithmWithMinKeySize};
use crate::suite::CryptographicSuite;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

pub fn is_digest_algorithm_reliable(suite: &CryptographicSuite, algorithm: DigestAlgorithm) -> bool {
    suite.acceptable_digest_algorithms().contains(&algorithm)
}

pub fn is_encryption_algorithm_reliable(
    suite: &CryptographicSuite,
    algorithm: EncryptionAlgorithm,
) -> bool {
    suite.acceptable_encryption_algorithms().contains(&algorithm)
}

/// Key-size check.
///
/// An unknown key size (`None` or 0) passes, as does an algorithm the suite lists no minimum
/// for. Otherwise at least one listed minimum must not exceed `key_size`.
pub fn is_encryption_algorithm_with_key_size_reliable(
    suite: &CryptographicSuite,
    algorithm: EncryptionAlgorithm,
    key_size: Option<u32>,
) -> bool {
    let key_size = match key_size {
        Some(k) if k > 0 => k,
        _ => return true,
    };

    let mut found = false;
    for entry in suite.acceptable_encryption_algorithms_with_min_key_sizes() {
        if entry.encryption_algorithm == algorithm {
            found = true;
            if entry.min_key_size <= key_size {
                return true;
            }
        }
    }
    !found
}

/// Expiration date asserted for a digest algorithm, if any.
pub fn digest_expiration_date(
    suite: &CryptographicSuite,
    algorithm: DigestAlgorithm,
) -> Option<DateTime<Utc>> {
    suite.digest_expiration_dates().get(&algorithm).copied().flatten()
}

/// Expiration date asserted for an encryption algorithm used with `key_size` bits.
///
/// Expiration entries are keyed by the minimum key size of their bracket; the entry with the
/// greatest minimum not exceeding `key_size` applies. Acceptable minimum key sizes with no
/// bracket at or below them borrow the date of the next bracket above.
pub fn encryption_expiration_date(
    suite: &CryptographicSuite,
    algorithm: EncryptionAlgorithm,
    key_size: u32,
) -> Option<DateTime<Utc>> {
    let mut brackets: BTreeMap<u32, Option<DateTime<Utc>>> = suite
        .encryption_expiration_dates()
        .iter()
        .filter(|(k, _)| k.encryption_algorithm == algorithm)
        .map(|(k, v)| (k.min_key_size, *v))
        .collect();

    for entry in suite.acceptable_encryption_algorithms_with_min_key_sizes() {
        if entry.encryption_algorithm != algorithm {
            continue;
        }
        if brackets.range(..=entry.min_key_size).next_back().is_none() {
            let ceiling = brackets.range(entry.min_key_size..).next().map(|(_, v)| *v);
            if let Some(date) = ceiling {
                brackets.insert(entry.min_key_size, date);
            }
        }
    }

    brackets
        .range(..=key_size)
        .next_back()
        .and_then(|(_, date)| *date)
}

fn is_reliable_at(expiration: Option<DateTime<Utc>>, time: DateTime<Utc>) -> bool {
    expiration.map_or(true, |e| e >= time)
}

/// Acceptable digest algorithms that have not expired at `time`.
pub fn reliable_digest_algorithms_at_time(
    suite: &CryptographicSuite,
    time: DateTime<Utc>,
) -> BTreeSet<DigestAlgorithm> {
    suite
        .acceptable_digest_algorithms()
        .iter()
        .copied()
        .filter(|a| is_reliable_at(digest_expiration_date(suite, *a), time))
        .collect()
}

/// Acceptable encryption algorithms at `time`, each with the smallest key size still reliable.
///
/// Algorithms without any expiration bracket keep the greatest listed minimum key size, and
/// algorithms without any key-size information are reported with a minimum of 0.
pub fn reliable_encryption_algorithms_with_min_key_size_at_time(
    suite: &CryptographicSuite,
    time: DateTime<Utc>,
) -> BTreeSet<EncryptionAlgorithmWithMinKeySize> {
    let acceptable = suite.acceptable_encryption_algorithms();
    let mut reliable: BTreeMap<EncryptionAlgorithm, u32> = BTreeMap::new();
    let mut processed: BTreeSet<EncryptionAlgorithm> = BTreeSet::new();

    for (entry, expiration) in suite.encryption_expiration_dates() {
        let algorithm = entry.encryption_algorithm;
        if acceptable.contains(&algorithm) && is_reliable_at(*expiration, time) {
            let current = reliable.get(&algorithm).copied();
            if current.map_or(true, |min| min > entry.min_key_size) {
                reliable.insert(algorithm, entry.min_key_size);
            }
        }
        processed.insert(algorithm);
    }

    for entry in suite.acceptable_encryption_algorithms_with_min_key_sizes() {
        let algorithm = entry.encryption_algorithm;
        if !processed.contains(&algorithm) {
            reliable.insert(algorithm, entry.min_key_size);
        } else if let Some(min) = reliable.get_mut(&algorithm) {
            if *min < entry.min_key_size {
                *min = entry.min_key_size;
            }
        }
        processed.insert(algorithm);
    }

    for algorithm in acceptable {
        if !processed.contains(algorithm) {
            reliable.insert(*algorithm, 0);
        }
    }

    reliable
        .into_iter()
        .map(|(a, size)| EncryptionAlgorithmWithMinKeySize::new(a, size))
        .collect()
}
