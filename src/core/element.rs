//! Small helpers over `xmltree` element trees
//!
//! Only immediate children are ever inspected; the balancer never descends
//! more than one level below the data subtree.

use xmltree::{Element, XMLNode};

pub fn as_element(node: &XMLNode) -> Option<&Element> {
    match node {
        XMLNode::Element(element) => Some(element),
        _ => None,
    }
}

/// Whether `name` can be written as an element tag
///
/// Accepts an unprefixed XML name: a letter or `_` followed by letters,
/// digits, `_`, `-` or `.`.
pub fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// First immediate child element called `name`
pub fn child_element<'a>(parent: &'a Element, name: &str) -> Option<&'a Element> {
    parent
        .children
        .iter()
        .filter_map(as_element)
        .find(|child| child.name == name)
}

/// Mutable variant of [`child_element`]
pub fn child_element_mut<'a>(parent: &'a mut Element, name: &str) -> Option<&'a mut Element> {
    parent.children.iter_mut().find_map(|node| match node {
        XMLNode::Element(child) if child.name == name => Some(child),
        _ => None,
    })
}

/// Number of immediate child elements called `name`
pub fn count_children(parent: &Element, name: &str) -> usize {
    parent
        .children
        .iter()
        .filter_map(as_element)
        .filter(|child| child.name == name)
        .count()
}

/// Character data directly inside `element` (text and CDATA, concatenated)
///
/// Whitespace-only text never reaches the tree, so it reads as empty.
pub fn element_text(element: &Element) -> String {
    element
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Text(text) | XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// Replace the character data of `element`, keeping any other children
pub fn set_element_text(element: &mut Element, text: &str) {
    element
        .children
        .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
    element.children.insert(0, XMLNode::Text(text.to_string()));
}

/// Append a new `<name>text</name>` child at the end of `parent`
pub fn append_text_child(parent: &mut Element, name: &str, text: &str) {
    let mut child = Element::new(name);
    child.children.push(XMLNode::Text(text.to_string()));
    parent.children.push(XMLNode::Element(child));
}

/// Remove every child element called `name` except the first
///
/// # Returns
///
/// How many elements were removed
pub fn keep_first_child(parent: &mut Element, name: &str) -> usize {
    let before = parent.children.len();
    let mut seen = false;
    parent.children.retain(|node| match node {
        XMLNode::Element(child) if child.name == name => !std::mem::replace(&mut seen, true),
        _ => true,
    });
    before - parent.children.len()
}
