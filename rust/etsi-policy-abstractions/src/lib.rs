// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared model and interfaces for ETSI EN 319 102-1 validation policies.
//!
//! This crate exists to prevent circular dependencies across:
//! - the policy engine (`etsi-policy-validation`)
//! - suite and policy sources (`etsi-policy-crypto-xml`, `etsi-policy-crypto-json`,
//!   `etsi-policy-legacy`, and other future formats)
//!
//! It holds the cryptographic suite model, the [`ValidationPolicy`] trait, and link-time
//! registries for suite and policy factories.

pub mod algorithms;
pub mod context;
pub mod dates;
pub mod document;
pub mod error;
pub mod level;
pub mod policy;
pub mod policy_factory;
pub mod security_suitability;
pub mod suite;
pub mod suite_factory;
pub mod suite_utils;

pub use algorithms::{
    identify_algorithm, DigestAlgorithm, EncryptionAlgorithm, EncryptionAlgorithmWithMinKeySize,
    IdentifiedAlgorithm, SignatureAlgorithm,
};
pub use context::{Context, SubContext};
pub use document::InMemoryDocument;
pub use error::{PolicyError, SuiteError};
pub use level::{Level, ParseLevelError};
pub use policy::ValidationPolicy;
pub use security_suitability::SecuritySuitabilityPolicy;
pub use suite::{CryptographicSuite, CryptographicSuiteBuilder, SuiteLevels};

pub use suite_factory::{
    load_cryptographic_suite, load_cryptographic_suite_from_path, load_cryptographic_suite_from_reader,
    load_default_cryptographic_suite, suite_factories_ordered, suite_factory_name, CryptographicSuiteFactory,
    CryptographicSuiteFactoryId, CryptographicSuiteFactoryRegistration,
};

pub use policy_factory::{
    load_default_validation_policy, load_validation_policy, load_validation_policy_from_path,
    load_validation_policy_from_reader, policy_factories_ordered, policy_factory_name, ValidationPolicyFactory,
    ValidationPolicyFactoryId, ValidationPolicyFactoryRegistration,
};
