// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Configuration errors raised while loading a cryptographic suite.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("{0} cannot be empty!")]
    MissingArgument(&'static str),

    #[error("unable to read cryptographic suite: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed cryptographic suite: {0}")]
    Malformed(String),

    #[error(
        "The cryptographic suite file is not valid or no suitable cryptographic suite factory has been found! \
         Please ensure the provided document is valid and 'etsi-policy-crypto-xml' or 'etsi-policy-crypto-json' \
         is linked, or register your own implementation for a custom cryptographic suite format."
    )]
    UnsupportedFormat,

    #[error(
        "No cryptographic suite factory has been found! Please link 'etsi-policy-crypto-xml' or \
         'etsi-policy-crypto-json', or register your own implementation."
    )]
    NoFactory,
}

/// Configuration errors raised while loading or composing a validation policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("{0} cannot be empty!")]
    MissingArgument(&'static str),

    #[error("unable to read validation policy: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed validation policy: {0}")]
    Malformed(String),

    #[error(
        "The validation policy is not valid or no suitable validation policy factory has been found! \
         Please ensure the provided policy file is valid and 'etsi-policy-legacy' is linked, or register \
         your own implementation for a custom policy."
    )]
    UnsupportedFormat,

    #[error(
        "No validation policy factory has been found! Please link 'etsi-policy-legacy' or register your \
         own implementation."
    )]
    NoFactory,

    #[error(
        "Please use no SubContext for the Context EVIDENCE_RECORD or use the \
         with_cryptographic_suite_for_context / with_default_cryptographic_suite_for_context method."
    )]
    SubContextNotAllowed,

    #[error(transparent)]
    Suite(#[from] SuiteError),
}
