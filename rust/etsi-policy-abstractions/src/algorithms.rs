// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Algorithm identifiers referenced by cryptographic suites.
//!
//! Every identifier has a stable name (the one used by suite documents and reports),
//! and most carry an ASN.1 OID and/or an XML-DSig URI so that documents which identify
//! algorithms by OID or URI resolve to the same value.

use std::fmt;

/// Digest (hash) algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DigestAlgorithm {
    Md2,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
    Ripemd160,
    Whirlpool,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 15] = [
        Self::Md2,
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Shake128,
        Self::Shake256,
        Self::Ripemd160,
        Self::Whirlpool,
    ];

    /// Stable name, as written in suite documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md2 => "MD2",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
            Self::Ripemd160 => "RIPEMD160",
            Self::Whirlpool => "WHIRLPOOL",
        }
    }

    pub fn oid(self) -> &'static str {
        match self {
            Self::Md2 => "1.2.840.113549.2.2",
            Self::Md5 => "1.2.840.113549.2.5",
            Self::Sha1 => "1.3.14.3.2.26",
            Self::Sha224 => "2.16.840.1.101.3.4.2.4",
            Self::Sha256 => "2.16.840.1.101.3.4.2.1",
            Self::Sha384 => "2.16.840.1.101.3.4.2.2",
            Self::Sha512 => "2.16.840.1.101.3.4.2.3",
            Self::Sha3_224 => "2.16.840.1.101.3.4.2.7",
            Self::Sha3_256 => "2.16.840.1.101.3.4.2.8",
            Self::Sha3_384 => "2.16.840.1.101.3.4.2.9",
            Self::Sha3_512 => "2.16.840.1.101.3.4.2.10",
            Self::Shake128 => "2.16.840.1.101.3.4.2.11",
            Self::Shake256 => "2.16.840.1.101.3.4.2.12",
            Self::Ripemd160 => "1.3.36.3.2.1",
            Self::Whirlpool => "1.0.10118.3.0.55",
        }
    }

    /// XML-DSig / XML-Enc identifier, when one is defined.
    pub fn uri(self) -> Option<&'static str> {
        match self {
            Self::Md2 => Some("http://www.w3.org/2001/04/xmldsig-more#md2"),
            Self::Md5 => Some("http://www.w3.org/2001/04/xmldsig-more#md5"),
            Self::Sha1 => Some("http://www.w3.org/2000/09/xmldsig#sha1"),
            Self::Sha224 => Some("http://www.w3.org/2001/04/xmldsig-more#sha224"),
            Self::Sha256 => Some("http://www.w3.org/2001/04/xmlenc#sha256"),
            Self::Sha384 => Some("http://www.w3.org/2001/04/xmldsig-more#sha384"),
            Self::Sha512 => Some("http://www.w3.org/2001/04/xmlenc#sha512"),
            Self::Sha3_224 => Some("http://www.w3.org/2007/05/xmldsig-more#sha3-224"),
            Self::Sha3_256 => Some("http://www.w3.org/2007/05/xmldsig-more#sha3-256"),
            Self::Sha3_384 => Some("http://www.w3.org/2007/05/xmldsig-more#sha3-384"),
            Self::Sha3_512 => Some("http://www.w3.org/2007/05/xmldsig-more#sha3-512"),
            Self::Shake128 | Self::Shake256 => None,
            Self::Ripemd160 => Some("http://www.w3.org/2001/04/xmlenc#ripemd160"),
            Self::Whirlpool => Some("http://www.w3.org/2007/05/xmldsig-more#whirlpool"),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.oid() == oid)
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.uri() == Some(uri))
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Public-key (signature) algorithm families.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EncryptionAlgorithm {
    Rsa,
    RsassaPss,
    Dsa,
    Ecdsa,
    PlainEcdsa,
    X25519,
    X448,
    EdDsa,
    Hmac,
}

impl EncryptionAlgorithm {
    pub const ALL: [EncryptionAlgorithm; 9] = [
        Self::Rsa,
        Self::RsassaPss,
        Self::Dsa,
        Self::Ecdsa,
        Self::PlainEcdsa,
        Self::X25519,
        Self::X448,
        Self::EdDsa,
        Self::Hmac,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::RsassaPss => "RSASSA-PSS",
            Self::Dsa => "DSA",
            Self::Ecdsa => "ECDSA",
            Self::PlainEcdsa => "PLAIN-ECDSA",
            Self::X25519 => "X25519",
            Self::X448 => "X448",
            Self::EdDsa => "EdDSA",
            Self::Hmac => "HMAC",
        }
    }

    pub fn oid(self) -> Option<&'static str> {
        match self {
            Self::Rsa => Some("1.2.840.113549.1.1.1"),
            Self::RsassaPss => Some("1.2.840.113549.1.1.10"),
            Self::Dsa => Some("1.2.840.10040.4.1"),
            Self::Ecdsa => Some("1.2.840.10045.2.1"),
            Self::PlainEcdsa => Some("0.4.0.127.0.7.1.1.4.1"),
            Self::X25519 => Some("1.3.101.110"),
            Self::X448 => Some("1.3.101.111"),
            Self::EdDsa => Some("1.3.101.112"),
            Self::Hmac => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.oid() == Some(oid))
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature algorithm = encryption algorithm + (optional) digest algorithm.
///
/// Suite documents may list a constraint under a signature algorithm identifier
/// (e.g. `RSA_SHA256`); such entries constrain the encryption side only.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignatureAlgorithm {
    RSA_SHA1,
    RSA_SHA224,
    RSA_SHA256,
    RSA_SHA384,
    RSA_SHA512,
    RSA_SSA_PSS_SHA256_MGF1,
    RSA_SSA_PSS_SHA384_MGF1,
    RSA_SSA_PSS_SHA512_MGF1,
    DSA_SHA1,
    DSA_SHA224,
    DSA_SHA256,
    ECDSA_SHA1,
    ECDSA_SHA224,
    ECDSA_SHA256,
    ECDSA_SHA384,
    ECDSA_SHA512,
    PLAIN_ECDSA_SHA256,
    PLAIN_ECDSA_SHA384,
    PLAIN_ECDSA_SHA512,
    ED25519,
    ED448,
}

impl SignatureAlgorithm {
    pub const ALL: [SignatureAlgorithm; 21] = [
        Self::RSA_SHA1,
        Self::RSA_SHA224,
        Self::RSA_SHA256,
        Self::RSA_SHA384,
        Self::RSA_SHA512,
        Self::RSA_SSA_PSS_SHA256_MGF1,
        Self::RSA_SSA_PSS_SHA384_MGF1,
        Self::RSA_SSA_PSS_SHA512_MGF1,
        Self::DSA_SHA1,
        Self::DSA_SHA224,
        Self::DSA_SHA256,
        Self::ECDSA_SHA1,
        Self::ECDSA_SHA224,
        Self::ECDSA_SHA256,
        Self::ECDSA_SHA384,
        Self::ECDSA_SHA512,
        Self::PLAIN_ECDSA_SHA256,
        Self::PLAIN_ECDSA_SHA384,
        Self::PLAIN_ECDSA_SHA512,
        Self::ED25519,
        Self::ED448,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RSA_SHA1 => "RSA_SHA1",
            Self::RSA_SHA224 => "RSA_SHA224",
            Self::RSA_SHA256 => "RSA_SHA256",
            Self::RSA_SHA384 => "RSA_SHA384",
            Self::RSA_SHA512 => "RSA_SHA512",
            Self::RSA_SSA_PSS_SHA256_MGF1 => "RSA_SSA_PSS_SHA256_MGF1",
            Self::RSA_SSA_PSS_SHA384_MGF1 => "RSA_SSA_PSS_SHA384_MGF1",
            Self::RSA_SSA_PSS_SHA512_MGF1 => "RSA_SSA_PSS_SHA512_MGF1",
            Self::DSA_SHA1 => "DSA_SHA1",
            Self::DSA_SHA224 => "DSA_SHA224",
            Self::DSA_SHA256 => "DSA_SHA256",
            Self::ECDSA_SHA1 => "ECDSA_SHA1",
            Self::ECDSA_SHA224 => "ECDSA_SHA224",
            Self::ECDSA_SHA256 => "ECDSA_SHA256",
            Self::ECDSA_SHA384 => "ECDSA_SHA384",
            Self::ECDSA_SHA512 => "ECDSA_SHA512",
            Self::PLAIN_ECDSA_SHA256 => "PLAIN_ECDSA_SHA256",
            Self::PLAIN_ECDSA_SHA384 => "PLAIN_ECDSA_SHA384",
            Self::PLAIN_ECDSA_SHA512 => "PLAIN_ECDSA_SHA512",
            Self::ED25519 => "ED25519",
            Self::ED448 => "ED448",
        }
    }

    /// Signature OID. RSASSA-PSS variants share a parameterised OID and have none here.
    pub fn oid(self) -> Option<&'static str> {
        match self {
            Self::RSA_SHA1 => Some("1.2.840.113549.1.1.5"),
            Self::RSA_SHA224 => Some("1.2.840.113549.1.1.14"),
            Self::RSA_SHA256 => Some("1.2.840.113549.1.1.11"),
            Self::RSA_SHA384 => Some("1.2.840.113549.1.1.12"),
            Self::RSA_SHA512 => Some("1.2.840.113549.1.1.13"),
            Self::RSA_SSA_PSS_SHA256_MGF1
            | Self::RSA_SSA_PSS_SHA384_MGF1
            | Self::RSA_SSA_PSS_SHA512_MGF1 => None,
            Self::DSA_SHA1 => Some("1.2.840.10040.4.3"),
            Self::DSA_SHA224 => Some("2.16.840.1.101.3.4.3.1"),
            Self::DSA_SHA256 => Some("2.16.840.1.101.3.4.3.2"),
            Self::ECDSA_SHA1 => Some("1.2.840.10045.4.1"),
            Self::ECDSA_SHA224 => Some("1.2.840.10045.4.3.1"),
            Self::ECDSA_SHA256 => Some("1.2.840.10045.4.3.2"),
            Self::ECDSA_SHA384 => Some("1.2.840.10045.4.3.3"),
            Self::ECDSA_SHA512 => Some("1.2.840.10045.4.3.4"),
            Self::PLAIN_ECDSA_SHA256 => Some("0.4.0.127.0.7.1.1.4.1.3"),
            Self::PLAIN_ECDSA_SHA384 => Some("0.4.0.127.0.7.1.1.4.1.4"),
            Self::PLAIN_ECDSA_SHA512 => Some("0.4.0.127.0.7.1.1.4.1.5"),
            Self::ED25519 => Some("1.3.101.112"),
            Self::ED448 => Some("1.3.101.113"),
        }
    }

    pub fn encryption_algorithm(self) -> EncryptionAlgorithm {
        match self {
            Self::RSA_SHA1
            | Self::RSA_SHA224
            | Self::RSA_SHA256
            | Self::RSA_SHA384
            | Self::RSA_SHA512 => EncryptionAlgorithm::Rsa,
            Self::RSA_SSA_PSS_SHA256_MGF1
            | Self::RSA_SSA_PSS_SHA384_MGF1
            | Self::RSA_SSA_PSS_SHA512_MGF1 => EncryptionAlgorithm::RsassaPss,
            Self::DSA_SHA1 | Self::DSA_SHA224 | Self::DSA_SHA256 => EncryptionAlgorithm::Dsa,
            Self::ECDSA_SHA1
            | Self::ECDSA_SHA224
            | Self::ECDSA_SHA256
            | Self::ECDSA_SHA384
            | Self::ECDSA_SHA512 => EncryptionAlgorithm::Ecdsa,
            Self::PLAIN_ECDSA_SHA256 | Self::PLAIN_ECDSA_SHA384 | Self::PLAIN_ECDSA_SHA512 => {
                EncryptionAlgorithm::PlainEcdsa
            }
            Self::ED25519 | Self::ED448 => EncryptionAlgorithm::EdDsa,
        }
    }

    /// `None` for algorithms that hash internally (EdDSA).
    pub fn digest_algorithm(self) -> Option<DigestAlgorithm> {
        match self {
            Self::RSA_SHA1 | Self::DSA_SHA1 | Self::ECDSA_SHA1 => Some(DigestAlgorithm::Sha1),
            Self::RSA_SHA224 | Self::DSA_SHA224 | Self::ECDSA_SHA224 => Some(DigestAlgorithm::Sha224),
            Self::RSA_SHA256
            | Self::RSA_SSA_PSS_SHA256_MGF1
            | Self::DSA_SHA256
            | Self::ECDSA_SHA256
            | Self::PLAIN_ECDSA_SHA256 => Some(DigestAlgorithm::Sha256),
            Self::RSA_SHA384
            | Self::RSA_SSA_PSS_SHA384_MGF1
            | Self::ECDSA_SHA384
            | Self::PLAIN_ECDSA_SHA384 => Some(DigestAlgorithm::Sha384),
            Self::RSA_SHA512
            | Self::RSA_SSA_PSS_SHA512_MGF1
            | Self::ECDSA_SHA512
            | Self::PLAIN_ECDSA_SHA512 => Some(DigestAlgorithm::Sha512),
            Self::ED25519 | Self::ED448 => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.oid() == Some(oid))
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An encryption algorithm paired with a minimum key size in bits.
///
/// Used both as a set member (acceptable minimum key sizes) and as a map key
/// (expiration dates per key-size bracket); equality covers both fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncryptionAlgorithmWithMinKeySize {
    pub encryption_algorithm: EncryptionAlgorithm,
    pub min_key_size: u32,
}

impl EncryptionAlgorithmWithMinKeySize {
    pub fn new(encryption_algorithm: EncryptionAlgorithm, min_key_size: u32) -> Self {
        Self {
            encryption_algorithm,
            min_key_size,
        }
    }
}

impl fmt::Display for EncryptionAlgorithmWithMinKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bits)", self.encryption_algorithm, self.min_key_size)
    }
}

/// The algorithm a suite document entry refers to, once its identifier is resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IdentifiedAlgorithm {
    Digest(DigestAlgorithm),
    Encryption(EncryptionAlgorithm),
}

/// Resolve an algorithm identifier as found in suite documents.
///
/// Names are tried first, then OIDs, then URIs. Digest identifiers win over encryption
/// identifiers, and signature algorithm identifiers resolve to their encryption algorithm.
pub fn identify_algorithm(
    name: Option<&str>,
    oid: Option<&str>,
    uri: Option<&str>,
) -> Option<IdentifiedAlgorithm> {
    if let Some(name) = name.map(str::trim) {
        if let Some(a) = DigestAlgorithm::from_name(name) {
            return Some(IdentifiedAlgorithm::Digest(a));
        }
        if let Some(a) = EncryptionAlgorithm::from_name(name) {
            return Some(IdentifiedAlgorithm::Encryption(a));
        }
        if let Some(a) = SignatureAlgorithm::from_name(name) {
            return Some(IdentifiedAlgorithm::Encryption(a.encryption_algorithm()));
        }
    }
    if let Some(oid) = oid.map(str::trim) {
        if let Some(a) = DigestAlgorithm::from_oid(oid) {
            return Some(IdentifiedAlgorithm::Digest(a));
        }
        if let Some(a) = EncryptionAlgorithm::from_oid(oid) {
            return Some(IdentifiedAlgorithm::Encryption(a));
        }
        if let Some(a) = SignatureAlgorithm::from_oid(oid) {
            return Some(IdentifiedAlgorithm::Encryption(a.encryption_algorithm()));
        }
    }
    if let Some(uri) = uri.map(str::trim) {
        if let Some(a) = DigestAlgorithm::from_uri(uri) {
            return Some(IdentifiedAlgorithm::Digest(a));
        }
    }
    None
}
