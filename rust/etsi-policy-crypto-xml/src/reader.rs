// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Reads the XML form of a `SecuritySuitabilityPolicy`.
//!
//! Elements are matched by local name so that documents with or without the ETSI namespace
//! are both accepted.

use etsi_policy_abstractions::security_suitability::{
    AlgorithmDefinition, AlgorithmIdentifier, Evaluation, Parameter, PolicyName, Validity,
};
use etsi_policy_abstractions::{CryptographicSuite, SecuritySuitabilityPolicy, SuiteError};
use roxmltree::{Document, Node};

pub(crate) const ROOT_ELEMENT: &str = "SecuritySuitabilityPolicy";

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.tag_name().name() == name)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn read_parameter(node: Node<'_, '_>) -> Parameter {
    let min = child_text(node, "Min").and_then(|m| match m.parse::<u32>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(min = %m, "non-numeric parameter minimum ignored");
            None
        }
    });
    Parameter {
        name: node.attribute("name").map(str::to_string),
        min,
    }
}

fn read_evaluation(node: Node<'_, '_>) -> Evaluation {
    let validity = child(node, "Validity")
        .map(|v| Validity {
            start: child_text(v, "Start"),
            end: child_text(v, "End"),
        })
        .unwrap_or_default();
    Evaluation {
        parameters: children(node, "Parameter").map(read_parameter).collect(),
        validity,
    }
}

fn read_algorithm(node: Node<'_, '_>) -> AlgorithmDefinition {
    let identifier = child(node, "AlgorithmIdentifier")
        .map(|id| AlgorithmIdentifier {
            name: child_text(id, "Name"),
            object_identifier: child_text(id, "ObjectIdentifier"),
            uri: child_text(id, "URI"),
        })
        .unwrap_or_default();
    AlgorithmDefinition {
        identifier,
        evaluations: children(node, "Evaluation").map(read_evaluation).collect(),
    }
}

/// Read a pre-parsed XML document.
pub fn read_security_suitability_policy(
    document: &Document<'_>,
) -> Result<SecuritySuitabilityPolicy, SuiteError> {
    let root = document.root_element();
    if root.tag_name().name() != ROOT_ELEMENT {
        return Err(SuiteError::Malformed(format!(
            "expected root element '{ROOT_ELEMENT}', found '{}'",
            root.tag_name().name()
        )));
    }

    Ok(SecuritySuitabilityPolicy {
        policy_name: child(root, "PolicyName").map(|n| PolicyName {
            name: child_text(n, "Name"),
        }),
        policy_issue_date: child_text(root, "PolicyIssueDate"),
        algorithms: children(root, "Algorithm").map(read_algorithm).collect(),
    })
}

/// Build a suite from a pre-parsed XML document.
pub fn cryptographic_suite_from_document(document: &Document<'_>) -> Result<CryptographicSuite, SuiteError> {
    Ok(read_security_suitability_policy(document)?.to_cryptographic_suite())
}

/// Build a suite from XML text.
pub fn cryptographic_suite_from_str(xml: &str) -> Result<CryptographicSuite, SuiteError> {
    if xml.trim().is_empty() {
        return Err(SuiteError::MissingArgument("Cryptographic suite document"));
    }
    let document = Document::parse(xml).map_err(|e| SuiteError::Malformed(e.to_string()))?;
    cryptographic_suite_from_document(&document)
}
