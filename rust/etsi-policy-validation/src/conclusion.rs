// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::indication::{Indication, SubIndication};
use crate::message_tag::Message;
use serde::Serialize;

/// Outcome of one check. Created once per check and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conclusion {
    indication: Indication,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_indication: Option<SubIndication>,
    errors: Vec<Message>,
    warnings: Vec<Message>,
    infos: Vec<Message>,
}

impl Conclusion {
    pub(crate) fn new(
        indication: Indication,
        sub_indication: Option<SubIndication>,
        errors: Vec<Message>,
        warnings: Vec<Message>,
        infos: Vec<Message>,
    ) -> Self {
        Self {
            indication,
            sub_indication,
            errors,
            warnings,
            infos,
        }
    }

    /// A passing conclusion without messages.
    pub fn passed() -> Self {
        Self::new(Indication::Passed, None, Vec::new(), Vec::new(), Vec::new())
    }

    pub fn indication(&self) -> Indication {
        self.indication
    }

    pub fn sub_indication(&self) -> Option<SubIndication> {
        self.sub_indication
    }

    pub fn errors(&self) -> &[Message] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Message] {
        &self.warnings
    }

    pub fn infos(&self) -> &[Message] {
        &self.infos
    }

    pub fn is_valid(&self) -> bool {
        self.indication.is_passing()
    }
}
