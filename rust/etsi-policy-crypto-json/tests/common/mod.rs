// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `etsi-policy-crypto-json` integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub(crate) const SHA1_ONLY_JSON: &str = r#"{
    "SecuritySuitabilityPolicy": {
        "PolicyName": { "Name": "sha1 only" },
        "Algorithm": [
            {
                "AlgorithmIdentifier": { "Name": "SHA1" },
                "Evaluation": [ { "Validity": { "End": "2012-08-01" } } ]
            }
        ]
    }
}"#;
