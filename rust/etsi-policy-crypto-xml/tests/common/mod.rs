// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `etsi-policy-crypto-xml` integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Wrap `Algorithm` elements in a namespaced suite document.
pub(crate) fn suite_xml(algorithms: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SecuritySuitabilityPolicy xmlns="http://uri.etsi.org/19312/v1.1.1#">
    <PolicyName><Name>test suite</Name></PolicyName>
    <PolicyIssueDate>2020-01-01T00:00:00Z</PolicyIssueDate>
    {algorithms}
</SecuritySuitabilityPolicy>"#
    )
}
