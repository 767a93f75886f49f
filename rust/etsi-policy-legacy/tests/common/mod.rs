// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `etsi-policy-legacy` integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Wrap sections in a `ConstraintsParameters` root.
pub(crate) fn policy_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ConstraintsParameters Name="test policy" xmlns="http://dss.esig.europa.eu/validation/policy">
    <Description>policy used by tests</Description>
    {body}
</ConstraintsParameters>"#
    )
}

/// A global `Cryptographic` element: SHA1 expired 2012-08-01, SHA256 never expires, RSA from 1024 bits.
pub(crate) const GLOBAL_CRYPTOGRAPHIC: &str = r#"
    <Cryptographic Level="FAIL">
        <AcceptableEncryptionAlgo>
            <Algo>RSA</Algo>
            <Algo>ECDSA</Algo>
        </AcceptableEncryptionAlgo>
        <MiniPublicKeySize>
            <Algo Size="1024">RSA</Algo>
        </MiniPublicKeySize>
        <AcceptableDigestAlgo>
            <Algo>SHA1</Algo>
            <Algo>SHA256</Algo>
        </AcceptableDigestAlgo>
        <AlgoExpirationDate Level="FAIL" LevelAfterUpdate="INFORM" UpdateDate="2020-01-01">
            <Algo Date="2012-08-01">SHA1</Algo>
            <Algo>SHA256</Algo>
            <Algo Size="1024" Date="2019-10-01">RSA</Algo>
            <Algo Size="3000">RSA</Algo>
        </AlgoExpirationDate>
    </Cryptographic>"#;
