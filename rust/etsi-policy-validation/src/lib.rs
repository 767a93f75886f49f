// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cryptographic constraint resolution and algorithm acceptability checks.
//!
//! - [`ValidationPolicyLoader`] composes a base validation policy with cryptographic suite
//!   overrides scoped globally, per [`Context`](etsi_policy_abstractions::Context), or per
//!   Context and [`SubContext`](etsi_policy_abstractions::SubContext).
//! - [`CryptographicChecker`] judges one algorithm usage against the resolved suite, taking
//!   proofs of existence into account, and returns a [`Conclusion`].
//!
//! Suite and policy documents are resolved through the registries of
//! `etsi-policy-abstractions`; link `etsi-policy-crypto-xml`, `etsi-policy-crypto-json` and/or
//! `etsi-policy-legacy` to make their formats available.

pub mod conclusion;
pub mod crypto_check;
pub mod indication;
pub mod loader;
pub mod message_tag;
pub mod policy_with_suite;

pub use conclusion::Conclusion;
pub use crypto_check::{ControlTimes, CryptographicChecker};
pub use indication::{Indication, SubIndication};
pub use loader::{PolicySource, SuiteSource, ValidationPolicyLoader, ValidationPolicyLoaderWithCryptoSuite};
pub use message_tag::{Message, MessageTag};
pub use policy_with_suite::{lookup_keys, BindingKey, ValidationPolicyWithCryptographicSuite};
