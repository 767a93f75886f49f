// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Link-time registry of validation policy sources.

use crate::document::InMemoryDocument;
use crate::error::PolicyError;
use crate::policy::ValidationPolicy;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValidationPolicyFactoryId(pub uuid::Uuid);

pub trait ValidationPolicyFactory: Sync {
    fn name(&self) -> &'static str;

    fn is_supported(&self, document: &InMemoryDocument) -> bool;

    /// The policy shipped with the factory.
    fn load_default_validation_policy(&self) -> Result<Arc<dyn ValidationPolicy>, PolicyError>;

    fn load_validation_policy(
        &self,
        document: &InMemoryDocument,
    ) -> Result<Arc<dyn ValidationPolicy>, PolicyError>;
}

pub struct ValidationPolicyFactoryRegistration {
    pub id: ValidationPolicyFactoryId,
    pub name: &'static str,
    pub priority: i32,
    pub factory: &'static dyn ValidationPolicyFactory,
}

inventory::collect!(ValidationPolicyFactoryRegistration);

pub fn policy_factories_ordered() -> Vec<&'static ValidationPolicyFactoryRegistration> {
    let mut regs: Vec<_> = inventory::iter::<ValidationPolicyFactoryRegistration>
        .into_iter()
        .collect();
    regs.sort_by(|a, b| b.priority.cmp(&a.priority));
    regs
}

pub fn policy_factory_name(id: ValidationPolicyFactoryId) -> Option<&'static str> {
    inventory::iter::<ValidationPolicyFactoryRegistration>
        .into_iter()
        .find(|r| r.id == id)
        .map(|r| r.name)
}

pub fn load_default_validation_policy() -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
    let Some(reg) = policy_factories_ordered().into_iter().next() else {
        return Err(PolicyError::NoFactory);
    };
    tracing::debug!(factory = reg.name, "loading default validation policy");
    reg.factory.load_default_validation_policy()
}

pub fn load_validation_policy(
    document: &InMemoryDocument,
) -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
    if document.is_empty() {
        return Err(PolicyError::MissingArgument("Validation policy document"));
    }

    let regs = policy_factories_ordered();
    if regs.is_empty() {
        return Err(PolicyError::NoFactory);
    }

    for reg in regs {
        if reg.factory.is_supported(document) {
            tracing::debug!(
                factory = reg.name,
                document = document.name().unwrap_or("<unnamed>"),
                "validation policy factory selected"
            );
            return reg.factory.load_validation_policy(document);
        }
    }
    Err(PolicyError::UnsupportedFormat)
}

pub fn load_validation_policy_from_path(
    path: impl AsRef<Path>,
) -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(PolicyError::MissingArgument("Validation policy file path"));
    }
    load_validation_policy(&InMemoryDocument::from_path(path)?)
}

pub fn load_validation_policy_from_reader(
    reader: impl Read,
) -> Result<Arc<dyn ValidationPolicy>, PolicyError> {
    let document = InMemoryDocument::from_reader(reader)?;
    if document.is_empty() {
        return Err(PolicyError::MissingArgument("Validation policy stream"));
    }
    load_validation_policy(&document)
}
