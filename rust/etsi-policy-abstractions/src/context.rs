// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// Role of the material whose cryptography is being judged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    Signature,
    Timestamp,
    Revocation,
    Certificate,
    CounterSignature,
    EvidenceRecord,
}

impl Context {
    pub const ALL: [Context; 6] = [
        Self::Signature,
        Self::Timestamp,
        Self::Revocation,
        Self::Certificate,
        Self::CounterSignature,
        Self::EvidenceRecord,
    ];

    /// Evidence records have no certificate axis.
    pub fn supports_sub_context(self) -> bool {
        !matches!(self, Self::EvidenceRecord)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signature => "SIGNATURE",
            Self::Timestamp => "TIMESTAMP",
            Self::Revocation => "REVOCATION",
            Self::Certificate => "CERTIFICATE",
            Self::CounterSignature => "COUNTER_SIGNATURE",
            Self::EvidenceRecord => "EVIDENCE_RECORD",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a certificate within the chain of the material under check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubContext {
    SigningCert,
    CaCertificate,
}

impl SubContext {
    pub const ALL: [SubContext; 2] = [Self::SigningCert, Self::CaCertificate];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SigningCert => "SIGNING_CERT",
            Self::CaCertificate => "CA_CERTIFICATE",
        }
    }
}

impl fmt::Display for SubContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
