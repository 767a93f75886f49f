// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for the effective validation policy.
//!
//! ```text
//! ValidationPolicyLoader::from_default_validation_policy()?
//!     .with_default_cryptographic_suite()?
//!     .and_level(Level::Warn)
//!     .with_cryptographic_suite_for_context(suite, Context::Timestamp)?
//!     .and_algorithms_expiration_date_level(Level::Fail)
//!     .create()
//! ```
//!
//! Level calls apply to the suite binding established by the preceding `with_*` call only.

use crate::policy_with_suite::{ensure_sub_context_allowed, BindingKey, ValidationPolicyWithCryptographicSuite};
use etsi_policy_abstractions::{
    load_cryptographic_suite, load_cryptographic_suite_from_path, load_default_cryptographic_suite,
    load_default_validation_policy, load_validation_policy, load_validation_policy_from_path,
    load_validation_policy_from_reader, Context, CryptographicSuite, InMemoryDocument, Level, PolicyError,
    SubContext, SuiteError, SuiteLevels, ValidationPolicy,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A base validation policy, as an object or a document to load.
pub enum PolicySource {
    Policy(Arc<dyn ValidationPolicy>),
    Document(InMemoryDocument),
    Path(PathBuf),
}

impl From<Arc<dyn ValidationPolicy>> for PolicySource {
    fn from(policy: Arc<dyn ValidationPolicy>) -> Self {
        Self::Policy(policy)
    }
}

impl From<InMemoryDocument> for PolicySource {
    fn from(document: InMemoryDocument) -> Self {
        Self::Document(document)
    }
}

impl From<PathBuf> for PolicySource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for PolicySource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl PolicySource {
    fn load(self) -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
        match self {
            Self::Policy(policy) => Ok(policy),
            Self::Document(document) => load_validation_policy(&document),
            Self::Path(path) => load_validation_policy_from_path(path),
        }
    }
}

/// A cryptographic suite, as an object or a document to load.
pub enum SuiteSource {
    Suite(CryptographicSuite),
    Document(InMemoryDocument),
    Path(PathBuf),
}

impl From<CryptographicSuite> for SuiteSource {
    fn from(suite: CryptographicSuite) -> Self {
        Self::Suite(suite)
    }
}

impl From<InMemoryDocument> for SuiteSource {
    fn from(document: InMemoryDocument) -> Self {
        Self::Document(document)
    }
}

impl From<PathBuf> for SuiteSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for SuiteSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl SuiteSource {
    fn load(self) -> Result<CryptographicSuite, SuiteError> {
        match self {
            Self::Suite(suite) => Ok(suite),
            Self::Document(document) => load_cryptographic_suite(&document),
            Self::Path(path) => load_cryptographic_suite_from_path(path),
        }
    }
}

/// Which level a level call targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LevelKind {
    /// Every level at once.
    All,
    AcceptableDigestAlgorithms,
    AcceptableEncryptionAlgorithms,
    AcceptableEncryptionAlgorithmsMiniKeySize,
    AlgorithmsExpirationDate,
    AlgorithmsExpirationDateAfterUpdate,
}

/// The binding established by the last `with_*` call, still open to level calls.
#[derive(Debug, Clone)]
struct PendingBinding {
    key: BindingKey,
    suite: CryptographicSuite,
    levels: SuiteLevels,
    last_set: Option<LevelKind>,
}

impl PendingBinding {
    fn new(key: BindingKey, suite: CryptographicSuite) -> Self {
        let levels = *suite.levels();
        Self {
            key,
            suite,
            levels,
            last_set: None,
        }
    }

    /// Last write wins per level; `All` overwrites every level, including earlier specific ones.
    fn set_level(mut self, kind: LevelKind, level: Level) -> Self {
        match kind {
            LevelKind::All => self.levels = SuiteLevels::uniform(level),
            LevelKind::AcceptableDigestAlgorithms => self.levels.acceptable_digest_algorithms = level,
            LevelKind::AcceptableEncryptionAlgorithms => self.levels.acceptable_encryption_algorithms = level,
            LevelKind::AcceptableEncryptionAlgorithmsMiniKeySize => {
                self.levels.acceptable_encryption_algorithms_mini_key_size = level
            }
            LevelKind::AlgorithmsExpirationDate => self.levels.algorithms_expiration_date = level,
            LevelKind::AlgorithmsExpirationDateAfterUpdate => {
                self.levels.algorithms_expiration_date_after_update = level
            }
        }
        self.last_set = Some(kind);
        self
    }

    fn commit(self, policy: &mut ValidationPolicyWithCryptographicSuite) {
        if let Some(kind) = self.last_set {
            tracing::debug!(?kind, levels = ?self.levels, "suite levels overridden");
        }
        policy.bind(self.key, self.suite.with_levels(self.levels));
    }
}

fn binding_key(context: Option<Context>, sub_context: Option<SubContext>) -> Result<BindingKey, PolicyError> {
    if let (Some(context), Some(_)) = (context, sub_context) {
        ensure_sub_context_allowed(context)?;
    }
    Ok((context, sub_context))
}

/// Entry point of the builder: holds the base policy.
pub struct ValidationPolicyLoader {
    policy: Arc<dyn ValidationPolicy>,
}

impl ValidationPolicyLoader {
    pub fn from_default_validation_policy() -> Result<Self, PolicyError> {
        Ok(Self {
            policy: load_default_validation_policy()?,
        })
    }

    pub fn from_validation_policy(source: impl Into<PolicySource>) -> Result<Self, PolicyError> {
        Ok(Self {
            policy: source.into().load()?,
        })
    }

    pub fn from_validation_policy_reader(reader: impl Read) -> Result<Self, PolicyError> {
        Ok(Self {
            policy: load_validation_policy_from_reader(reader)?,
        })
    }

    fn into_crypto(self) -> ValidationPolicyLoaderWithCryptoSuite {
        ValidationPolicyLoaderWithCryptoSuite {
            policy: ValidationPolicyWithCryptographicSuite::new(self.policy),
            pending: None,
        }
    }

    pub fn with_default_cryptographic_suite(self) -> Result<ValidationPolicyLoaderWithCryptoSuite, PolicyError> {
        self.into_crypto().with_default_cryptographic_suite()
    }

    pub fn with_cryptographic_suite(
        self,
        source: impl Into<SuiteSource>,
    ) -> Result<ValidationPolicyLoaderWithCryptoSuite, PolicyError> {
        self.into_crypto().with_cryptographic_suite(source)
    }

    pub fn with_default_cryptographic_suite_for_context(
        self,
        context: Context,
    ) -> Result<ValidationPolicyLoaderWithCryptoSuite, PolicyError> {
        self.into_crypto().with_default_cryptographic_suite_for_context(context)
    }

    pub fn with_cryptographic_suite_for_context(
        self,
        source: impl Into<SuiteSource>,
        context: Context,
    ) -> Result<ValidationPolicyLoaderWithCryptoSuite, PolicyError> {
        self.into_crypto().with_cryptographic_suite_for_context(source, context)
    }

    pub fn with_default_cryptographic_suite_for_context_and_sub_context(
        self,
        context: Context,
        sub_context: SubContext,
    ) -> Result<ValidationPolicyLoaderWithCryptoSuite, PolicyError> {
        self.into_crypto()
            .with_default_cryptographic_suite_for_context_and_sub_context(context, sub_context)
    }

    pub fn with_cryptographic_suite_for_context_and_sub_context(
        self,
        source: impl Into<SuiteSource>,
        context: Context,
        sub_context: SubContext,
    ) -> Result<ValidationPolicyLoaderWithCryptoSuite, PolicyError> {
        self.into_crypto()
            .with_cryptographic_suite_for_context_and_sub_context(source, context, sub_context)
    }

    /// The base policy, untouched.
    pub fn create(self) -> Arc<dyn ValidationPolicy> {
        self.policy
    }
}

/// Builder state once at least one suite has been bound.
pub struct ValidationPolicyLoaderWithCryptoSuite {
    policy: ValidationPolicyWithCryptographicSuite,
    pending: Option<PendingBinding>,
}

impl ValidationPolicyLoaderWithCryptoSuite {
    fn bind(
        mut self,
        context: Option<Context>,
        sub_context: Option<SubContext>,
        suite: impl FnOnce() -> Result<CryptographicSuite, SuiteError>,
    ) -> Result<Self, PolicyError> {
        let key = binding_key(context, sub_context)?;
        let suite = suite()?;
        if let Some(previous) = self.pending.take() {
            previous.commit(&mut self.policy);
        }
        self.pending = Some(PendingBinding::new(key, suite));
        Ok(self)
    }

    pub fn with_default_cryptographic_suite(self) -> Result<Self, PolicyError> {
        self.bind(None, None, load_default_cryptographic_suite)
    }

    pub fn with_cryptographic_suite(self, source: impl Into<SuiteSource>) -> Result<Self, PolicyError> {
        let source = source.into();
        self.bind(None, None, || source.load())
    }

    pub fn with_default_cryptographic_suite_for_context(self, context: Context) -> Result<Self, PolicyError> {
        self.bind(Some(context), None, load_default_cryptographic_suite)
    }

    pub fn with_cryptographic_suite_for_context(
        self,
        source: impl Into<SuiteSource>,
        context: Context,
    ) -> Result<Self, PolicyError> {
        let source = source.into();
        self.bind(Some(context), None, || source.load())
    }

    pub fn with_default_cryptographic_suite_for_context_and_sub_context(
        self,
        context: Context,
        sub_context: SubContext,
    ) -> Result<Self, PolicyError> {
        self.bind(Some(context), Some(sub_context), load_default_cryptographic_suite)
    }

    pub fn with_cryptographic_suite_for_context_and_sub_context(
        self,
        source: impl Into<SuiteSource>,
        context: Context,
        sub_context: SubContext,
    ) -> Result<Self, PolicyError> {
        let source = source.into();
        self.bind(Some(context), Some(sub_context), || source.load())
    }

    fn set_level(mut self, kind: LevelKind, level: Level) -> Self {
        self.pending = self.pending.take().map(|p| p.set_level(kind, level));
        self
    }

    /// Set every level of the last bound suite, discarding earlier level calls on it.
    pub fn and_level(self, level: Level) -> Self {
        self.set_level(LevelKind::All, level)
    }

    pub fn and_acceptable_digest_algorithms_level(self, level: Level) -> Self {
        self.set_level(LevelKind::AcceptableDigestAlgorithms, level)
    }

    pub fn and_acceptable_encryption_algorithms_level(self, level: Level) -> Self {
        self.set_level(LevelKind::AcceptableEncryptionAlgorithms, level)
    }

    pub fn and_acceptable_encryption_algorithms_mini_key_size_level(self, level: Level) -> Self {
        self.set_level(LevelKind::AcceptableEncryptionAlgorithmsMiniKeySize, level)
    }

    pub fn and_algorithms_expiration_date_level(self, level: Level) -> Self {
        self.set_level(LevelKind::AlgorithmsExpirationDate, level)
    }

    pub fn and_algorithms_expiration_time_after_policy_update_level(self, level: Level) -> Self {
        self.set_level(LevelKind::AlgorithmsExpirationDateAfterUpdate, level)
    }

    pub fn create(mut self) -> Arc<dyn ValidationPolicy> {
        if let Some(pending) = self.pending.take() {
            pending.commit(&mut self.policy);
        }
        Arc::new(self.policy)
    }
}
