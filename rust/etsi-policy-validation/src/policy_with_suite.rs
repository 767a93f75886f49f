// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A validation policy with cryptographic suite overrides.

use etsi_policy_abstractions::{Context, CryptographicSuite, Level, PolicyError, SubContext, ValidationPolicy};
use std::collections::HashMap;
use std::sync::Arc;

/// Where a suite binding applies. `(None, None)` is the unscoped default.
pub type BindingKey = (Option<Context>, Option<SubContext>);

/// Keys consulted for a position, most specific first.
pub fn lookup_keys(context: Context, sub_context: Option<SubContext>) -> Vec<BindingKey> {
    let mut keys = Vec::with_capacity(3);
    if let Some(sub_context) = sub_context {
        keys.push((Some(context), Some(sub_context)));
    }
    keys.push((Some(context), None));
    keys.push((None, None));
    keys
}

/// Wraps a base policy and answers cryptographic constraint queries from suite bindings first.
///
/// The first binding found along [`lookup_keys`] supplies the suite together with its levels.
/// Positions without any binding fall back to the base policy. Everything else delegates to
/// the base policy unchanged.
pub struct ValidationPolicyWithCryptographicSuite {
    base: Arc<dyn ValidationPolicy>,
    bindings: HashMap<BindingKey, Arc<CryptographicSuite>>,
}

impl ValidationPolicyWithCryptographicSuite {
    pub fn new(base: Arc<dyn ValidationPolicy>) -> Self {
        Self {
            base,
            bindings: HashMap::new(),
        }
    }

    pub fn base(&self) -> &Arc<dyn ValidationPolicy> {
        &self.base
    }

    /// Bind the unscoped default suite.
    pub fn set_cryptographic_suite(&mut self, suite: CryptographicSuite) {
        self.bind((None, None), suite);
    }

    pub fn set_cryptographic_suite_for_context(&mut self, suite: CryptographicSuite, context: Context) {
        self.bind((Some(context), None), suite);
    }

    pub fn set_cryptographic_suite_for_context_and_sub_context(
        &mut self,
        suite: CryptographicSuite,
        context: Context,
        sub_context: SubContext,
    ) -> Result<(), PolicyError> {
        ensure_sub_context_allowed(context)?;
        self.bind((Some(context), Some(sub_context)), suite);
        Ok(())
    }

    pub(crate) fn bind(&mut self, key: BindingKey, suite: CryptographicSuite) {
        tracing::debug!(
            context = ?key.0,
            sub_context = ?key.1,
            suite = suite.name().unwrap_or("<unnamed>"),
            "cryptographic suite bound"
        );
        self.bindings.insert(key, Arc::new(suite));
    }

    /// The bound suite for a position, without falling back to the base policy.
    pub fn bound_cryptographic_suite(
        &self,
        context: Context,
        sub_context: Option<SubContext>,
    ) -> Option<Arc<CryptographicSuite>> {
        lookup_keys(context, sub_context)
            .into_iter()
            .find_map(|key| self.bindings.get(&key).cloned())
    }

    pub fn has_bindings(&self) -> bool {
        !self.bindings.is_empty()
    }
}

pub(crate) fn ensure_sub_context_allowed(context: Context) -> Result<(), PolicyError> {
    if context.supports_sub_context() {
        Ok(())
    } else {
        Err(PolicyError::SubContextNotAllowed)
    }
}

impl ValidationPolicy for ValidationPolicyWithCryptographicSuite {
    fn policy_name(&self) -> Option<&str> {
        self.base.policy_name()
    }

    fn policy_description(&self) -> Option<&str> {
        self.base.policy_description()
    }

    fn structural_validation_level(&self, context: Context) -> Option<Level> {
        self.base.structural_validation_level(context)
    }

    fn certificate_not_expired_level(&self, context: Context, sub_context: SubContext) -> Option<Level> {
        self.base.certificate_not_expired_level(context, sub_context)
    }

    fn signature_cryptographic_constraint(&self, context: Context) -> Option<Arc<CryptographicSuite>> {
        self.bound_cryptographic_suite(context, None)
            .or_else(|| self.base.signature_cryptographic_constraint(context))
    }

    fn certificate_cryptographic_constraint(
        &self,
        context: Context,
        sub_context: SubContext,
    ) -> Option<Arc<CryptographicSuite>> {
        self.bound_cryptographic_suite(context, Some(sub_context))
            .or_else(|| self.base.certificate_cryptographic_constraint(context, sub_context))
    }

    fn evidence_record_cryptographic_constraint(&self) -> Option<Arc<CryptographicSuite>> {
        self.bound_cryptographic_suite(Context::EvidenceRecord, None)
            .or_else(|| self.base.evidence_record_cryptographic_constraint())
    }
}
