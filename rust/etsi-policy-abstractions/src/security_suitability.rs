// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ETSI TS 119 312 `SecuritySuitabilityPolicy` document model.
//!
//! The XML and JSON suite sources both read their wire form into this model and then call
//! [`SecuritySuitabilityPolicy::to_cryptographic_suite`], so equivalent documents always
//! produce identical suites.

use crate::algorithms::{identify_algorithm, EncryptionAlgorithm, IdentifiedAlgorithm};
use crate::dates::parse_date_time;
use crate::suite::{CryptographicSuite, SuiteLevels};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SecuritySuitabilityPolicy {
    #[serde(rename = "PolicyName", default)]
    pub policy_name: Option<PolicyName>,
    #[serde(rename = "PolicyIssueDate", default)]
    pub policy_issue_date: Option<String>,
    #[serde(rename = "Algorithm", default)]
    pub algorithms: Vec<AlgorithmDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyName {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlgorithmDefinition {
    #[serde(rename = "AlgorithmIdentifier", default)]
    pub identifier: AlgorithmIdentifier,
    #[serde(rename = "Evaluation", default)]
    pub evaluations: Vec<Evaluation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlgorithmIdentifier {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "ObjectIdentifier", default)]
    pub object_identifier: Option<String>,
    #[serde(rename = "URI", default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Evaluation {
    #[serde(rename = "Parameter", default)]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "Validity", default)]
    pub validity: Validity,
}

/// Key-size parameter (`moduluslength`, `plength`, `qlength`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    #[serde(rename = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "Min", default)]
    pub min: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Validity {
    #[serde(rename = "Start", default)]
    pub start: Option<String>,
    #[serde(rename = "End", default)]
    pub end: Option<String>,
}

/// `Ok(None)`: never expires. `Err(())`: unparsable, the entry is dropped.
fn evaluation_end(validity: &Validity, algorithm: &str) -> Result<Option<DateTime<Utc>>, ()> {
    match validity.end.as_deref() {
        None => Ok(None),
        Some(end) => match parse_date_time(end) {
            Some(date) => Ok(Some(date)),
            None => {
                tracing::warn!(algorithm, end, "unparsable validity end date, expiration entry ignored");
                Err(())
            }
        },
    }
}

impl SecuritySuitabilityPolicy {
    /// Build the suite model.
    ///
    /// Rules:
    /// - unknown algorithm identifiers are skipped;
    /// - a digest expires at the latest `Validity/End` of its evaluations, never if one of them
    ///   has no end; a later definition of the same digest replaces an earlier one;
    /// - an encryption evaluation is keyed by the `Min` of its first parameter (0 without
    ///   parameters; evaluations whose first parameter has no `Min` are skipped) and the
    ///   acceptable minimum key size is the smallest such key across all definitions;
    /// - levels default to FAIL, and WARN after the suite update date.
    pub fn to_cryptographic_suite(&self) -> CryptographicSuite {
        let mut builder = CryptographicSuite::builder().levels(SuiteLevels::default());

        if let Some(name) = self.policy_name.as_ref().and_then(|n| n.name.as_deref()) {
            builder = builder.name(name.trim());
        }
        if let Some(issue_date) = self.policy_issue_date.as_deref() {
            let parsed = parse_date_time(issue_date);
            if parsed.is_none() {
                tracing::warn!(issue_date, "unparsable policy issue date");
            }
            builder = builder.update_date(parsed);
        }

        let mut min_key_sizes: BTreeMap<EncryptionAlgorithm, u32> = BTreeMap::new();

        for definition in &self.algorithms {
            let id = &definition.identifier;
            let label = id
                .name
                .as_deref()
                .or(id.object_identifier.as_deref())
                .or(id.uri.as_deref())
                .unwrap_or("<unnamed>");

            match identify_algorithm(id.name.as_deref(), id.object_identifier.as_deref(), id.uri.as_deref()) {
                None => {
                    tracing::debug!(algorithm = label, "unknown algorithm identifier skipped");
                }
                Some(IdentifiedAlgorithm::Digest(digest)) => {
                    builder = builder.acceptable_digest_algorithm(digest);

                    let mut expiration: Option<Option<DateTime<Utc>>> = None;
                    for evaluation in &definition.evaluations {
                        let Ok(end) = evaluation_end(&evaluation.validity, label) else {
                            continue;
                        };
                        expiration = Some(match (expiration, end) {
                            (None, end) => end,
                            (Some(None), _) | (Some(_), None) => None,
                            (Some(Some(a)), Some(b)) => Some(a.max(b)),
                        });
                    }
                    if let Some(expiration) = expiration {
                        builder = builder.digest_expiration(digest, expiration);
                    }
                }
                Some(IdentifiedAlgorithm::Encryption(encryption)) => {
                    builder = builder.acceptable_encryption_algorithm(encryption);

                    for evaluation in &definition.evaluations {
                        let key_size = match evaluation.parameters.first() {
                            None => 0,
                            Some(Parameter { min: Some(min), .. }) => *min,
                            Some(_) => continue,
                        };
                        min_key_sizes
                            .entry(encryption)
                            .and_modify(|m| *m = (*m).min(key_size))
                            .or_insert(key_size);

                        if let Ok(end) = evaluation_end(&evaluation.validity, label) {
                            builder = builder.encryption_expiration(encryption, key_size, end);
                        }
                    }
                }
            }
        }

        for (encryption, min) in min_key_sizes {
            builder = builder.min_key_size(encryption, min);
        }

        builder.build()
    }
}
