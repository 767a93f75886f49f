// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::context::{Context, SubContext};
use crate::level::Level;
use crate::suite::CryptographicSuite;
use std::sync::Arc;

/// The rule set for one validation run.
///
/// Cryptographic constraints are resolved per (Context, SubContext). `None` means the policy
/// imposes no cryptographic constraint at that position. Implementations are immutable once
/// built and are shared read-only across concurrent validations.
pub trait ValidationPolicy: Send + Sync {
    fn policy_name(&self) -> Option<&str>;

    fn policy_description(&self) -> Option<&str>;

    /// Level of the structural (schema) validation of the material in `context`.
    fn structural_validation_level(&self, context: Context) -> Option<Level>;

    /// Level of the "certificate not expired" check for a certificate in the chain.
    fn certificate_not_expired_level(&self, context: Context, sub_context: SubContext) -> Option<Level>;

    /// Suite applied to the signature value of the material in `context`.
    fn signature_cryptographic_constraint(&self, context: Context) -> Option<Arc<CryptographicSuite>>;

    /// Suite applied to a certificate signature at `sub_context` in the chain of `context`.
    fn certificate_cryptographic_constraint(
        &self,
        context: Context,
        sub_context: SubContext,
    ) -> Option<Arc<CryptographicSuite>>;

    /// Suite applied to evidence records, which have no SubContext axis.
    fn evidence_record_cryptographic_constraint(&self) -> Option<Arc<CryptographicSuite>>;
}
