// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The `Cryptographic` element of a legacy policy and its conversion to a suite model.

use crate::xml::{attribute_level, child, children, text};
use etsi_policy_abstractions::dates::parse_with_pattern;
use etsi_policy_abstractions::{
    CryptographicSuite, DigestAlgorithm, EncryptionAlgorithm, Level, PolicyError, SuiteLevels,
};
use roxmltree::Node;

const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Algo {
    pub(crate) value: String,
    pub(crate) size: Option<u32>,
    pub(crate) date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListAlgo {
    pub(crate) level: Option<Level>,
    pub(crate) algos: Vec<Algo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AlgoExpirationDate {
    pub(crate) level: Option<Level>,
    pub(crate) level_after_update: Option<Level>,
    pub(crate) format: Option<String>,
    pub(crate) update_date: Option<String>,
    pub(crate) algos: Vec<Algo>,
}

/// Raw `Cryptographic` element. Every child is optional so that a per-context element can
/// inherit what it lacks from the global one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CryptographicConstraint {
    pub(crate) level: Option<Level>,
    pub(crate) acceptable_encryption_algo: Option<ListAlgo>,
    pub(crate) mini_public_key_size: Option<ListAlgo>,
    pub(crate) acceptable_digest_algo: Option<ListAlgo>,
    pub(crate) algo_expiration_date: Option<AlgoExpirationDate>,
}

fn read_algo(node: Node<'_, '_>) -> Result<Algo, PolicyError> {
    let size = match node.attribute("Size").map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<u32>().map_err(|_| {
            PolicyError::Malformed(format!("invalid key size '{s}' for algorithm '{}'", text(node).unwrap_or_default()))
        })?),
    };
    Ok(Algo {
        value: text(node).unwrap_or_default(),
        size,
        date: node.attribute("Date").map(str::to_string),
    })
}

fn read_list(node: Node<'_, '_>) -> Result<ListAlgo, PolicyError> {
    Ok(ListAlgo {
        level: attribute_level(node, "Level")?,
        algos: children(node, "Algo").map(read_algo).collect::<Result<_, _>>()?,
    })
}

impl CryptographicConstraint {
    pub(crate) fn read(node: Node<'_, '_>) -> Result<Self, PolicyError> {
        let algo_expiration_date = match child(node, "AlgoExpirationDate") {
            None => None,
            Some(n) => Some(AlgoExpirationDate {
                level: attribute_level(n, "Level")?,
                level_after_update: attribute_level(n, "LevelAfterUpdate")?,
                format: n.attribute("Format").map(str::to_string),
                update_date: n.attribute("UpdateDate").map(str::to_string),
                algos: children(n, "Algo").map(read_algo).collect::<Result<_, _>>()?,
            }),
        };

        Ok(Self {
            level: attribute_level(node, "Level")?,
            acceptable_encryption_algo: child(node, "AcceptableEncryptionAlgo").map(read_list).transpose()?,
            mini_public_key_size: child(node, "MiniPublicKeySize").map(read_list).transpose()?,
            acceptable_digest_algo: child(node, "AcceptableDigestAlgo").map(read_list).transpose()?,
            algo_expiration_date,
        })
    }

    /// Fill every missing child from `global`.
    pub(crate) fn inherit(mut self, global: Option<&CryptographicConstraint>) -> Self {
        let Some(global) = global else {
            return self;
        };
        if self.acceptable_digest_algo.is_none() {
            self.acceptable_digest_algo = global.acceptable_digest_algo.clone();
        }
        if self.acceptable_encryption_algo.is_none() {
            self.acceptable_encryption_algo = global.acceptable_encryption_algo.clone();
        }
        if self.algo_expiration_date.is_none() {
            self.algo_expiration_date = global.algo_expiration_date.clone();
        }
        if self.level.is_none() {
            self.level = global.level;
        }
        if self.mini_public_key_size.is_none() {
            self.mini_public_key_size = global.mini_public_key_size.clone();
        }
        self
    }

    fn levels(&self) -> SuiteLevels {
        let global = self.level.unwrap_or(Level::Fail);
        let list_level = |list: &Option<ListAlgo>| list.as_ref().and_then(|l| l.level).unwrap_or(global);
        let expiration = self
            .algo_expiration_date
            .as_ref()
            .and_then(|e| e.level)
            .unwrap_or(global);
        let after_update = self
            .algo_expiration_date
            .as_ref()
            .and_then(|e| e.level_after_update)
            .unwrap_or(expiration);

        SuiteLevels {
            level: global,
            acceptable_digest_algorithms: list_level(&self.acceptable_digest_algo),
            acceptable_encryption_algorithms: list_level(&self.acceptable_encryption_algo),
            acceptable_encryption_algorithms_mini_key_size: list_level(&self.mini_public_key_size),
            algorithms_expiration_date: expiration,
            algorithms_expiration_date_after_update: after_update,
        }
    }

    pub(crate) fn to_cryptographic_suite(&self) -> Result<CryptographicSuite, PolicyError> {
        let mut builder = CryptographicSuite::builder().levels(self.levels());

        for algo in self.acceptable_digest_algo.iter().flat_map(|l| &l.algos) {
            match DigestAlgorithm::from_name(&algo.value) {
                Some(digest) => builder = builder.acceptable_digest_algorithm(digest),
                None => tracing::debug!(algorithm = %algo.value, "unknown digest algorithm skipped"),
            }
        }
        for algo in self.acceptable_encryption_algo.iter().flat_map(|l| &l.algos) {
            match EncryptionAlgorithm::from_name(&algo.value) {
                Some(encryption) => builder = builder.acceptable_encryption_algorithm(encryption),
                None => tracing::debug!(algorithm = %algo.value, "unknown encryption algorithm skipped"),
            }
        }
        for algo in self.mini_public_key_size.iter().flat_map(|l| &l.algos) {
            match EncryptionAlgorithm::from_name(&algo.value) {
                Some(encryption) => builder = builder.min_key_size(encryption, algo.size.unwrap_or(0)),
                None => tracing::debug!(algorithm = %algo.value, "unknown encryption algorithm skipped"),
            }
        }

        if let Some(expirations) = &self.algo_expiration_date {
            let format = expirations.format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);

            for digest in DigestAlgorithm::ALL {
                let occurrences = expirations
                    .algos
                    .iter()
                    .filter(|a| a.size.is_none() && a.value == digest.name())
                    .count();
                if occurrences > 1 {
                    return Err(PolicyError::Malformed(format!(
                        "Multiple expiration constraints are provided for the same digest algorithm '{}'!",
                        digest.name()
                    )));
                }
            }

            if let Some(update_date) = expirations.update_date.as_deref() {
                let parsed = parse_with_pattern(update_date, format);
                if parsed.is_none() {
                    tracing::warn!(update_date, format, "unparsable cryptographic suite update date");
                }
                builder = builder.update_date(parsed);
            }

            for algo in &expirations.algos {
                let date = match algo.date.as_deref() {
                    None => None,
                    Some(raw) => match parse_with_pattern(raw, format) {
                        Some(date) => Some(date),
                        None => {
                            tracing::warn!(algorithm = %algo.value, date = raw, format, "unparsable expiration date ignored");
                            continue;
                        }
                    },
                };

                if let Some(size) = algo.size {
                    match EncryptionAlgorithm::from_name(&algo.value) {
                        Some(encryption) => builder = builder.encryption_expiration(encryption, size, date),
                        None => tracing::debug!(algorithm = %algo.value, "unknown encryption algorithm skipped"),
                    }
                } else if let Some(digest) = DigestAlgorithm::from_name(&algo.value) {
                    builder = builder.digest_expiration(digest, date);
                } else if let Some(encryption) = EncryptionAlgorithm::from_name(&algo.value) {
                    builder = builder.encryption_expiration(encryption, 0, date);
                } else {
                    tracing::debug!(algorithm = %algo.value, "unknown algorithm skipped");
                }
            }
        }

        Ok(builder.build())
    }
}
