// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;
use std::fmt::{self, Write as _};

/// Stable identifier and text template of a check message.
///
/// Templates use positional placeholders (`{0}`, `{1}`, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageTag {
    AlgorithmNotIdentified,
    DigestAlgorithmNotAuthorised,
    EncryptionAlgorithmNotAuthorised,
    PublicKeySizeNotAuthorised,
    DigestAlgorithmExpired,
    EncryptionAlgorithmExpired,
}

impl MessageTag {
    pub fn template(self) -> &'static str {
        match self {
            Self::AlgorithmNotIdentified => "The algorithm used for {0} is not identified!",
            Self::DigestAlgorithmNotAuthorised => "The digest algorithm {0} is not authorised for {1}!",
            Self::EncryptionAlgorithmNotAuthorised => "The encryption algorithm {0} is not authorised for {1}!",
            Self::PublicKeySizeNotAuthorised => {
                "The public key size ({0}) for the algorithm {1} is not authorised for {2}!"
            }
            Self::DigestAlgorithmExpired => {
                "The digest algorithm {0} is no longer considered reliable for {1} at {2} (expiration date: {3})!"
            }
            Self::EncryptionAlgorithmExpired => {
                "The encryption algorithm {0} with key size {1} is no longer considered reliable for {2} at {3} \
                 (expiration date: {4})!"
            }
        }
    }

    /// Fill the template. Placeholders without a matching argument are kept as written.
    pub fn format(self, args: &[&dyn fmt::Display]) -> String {
        let mut text = String::new();
        let mut rest = self.template();
        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after
                .find('}')
                .and_then(|close| Some((after[..close].parse::<usize>().ok()?, close)));
            match placeholder {
                Some((index, close)) if index < args.len() => {
                    let _ = write!(text, "{}", args[index]);
                    rest = &after[close + 1..];
                }
                _ => {
                    text.push('{');
                    rest = after;
                }
            }
        }
        text.push_str(rest);
        text
    }
}

/// A rendered check message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub key: MessageTag,
    pub value: String,
}

impl Message {
    pub fn new(key: MessageTag, args: &[&dyn fmt::Display]) -> Self {
        Self {
            key,
            value: key.format(args),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
