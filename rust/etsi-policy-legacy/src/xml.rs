// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use etsi_policy_abstractions::{Level, PolicyError};
use roxmltree::Node;

pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.tag_name().name() == name)
}

pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.is_element() && n.tag_name().name() == name)
}

pub(crate) fn text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

pub(crate) fn attribute_level(node: Node<'_, '_>, attribute: &str) -> Result<Option<Level>, PolicyError> {
    match node.attribute(attribute) {
        None => Ok(None),
        Some(value) => value
            .parse::<Level>()
            .map(Some)
            .map_err(|e| PolicyError::Malformed(format!("<{}> {attribute}: {e}", node.tag_name().name()))),
    }
}

/// `Level` attribute of the named child element, if both exist.
pub(crate) fn child_level(node: Node<'_, '_>, name: &str) -> Result<Option<Level>, PolicyError> {
    match child(node, name) {
        Some(c) => attribute_level(c, "Level"),
        None => Ok(None),
    }
}
