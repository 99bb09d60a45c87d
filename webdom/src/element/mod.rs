mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::error::DomError;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the parent of `id`. The root has no parent.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let Content::Children(children) = &root.content else {
        return None;
    };

    if children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    children.iter().find_map(|child| find_parent(child, id))
}

/// Check whether `id` is `ancestor` or one of its descendants.
pub fn contains(root: &Element, ancestor: &str, id: &str) -> bool {
    find_element(root, ancestor)
        .map(|el| find_element(el, id).is_some())
        .unwrap_or(false)
}

/// Append `child` as the last child of `parent`.
pub fn append_child(root: &mut Element, parent: &str, child: Element) -> Result<(), DomError> {
    let parent_el =
        find_element_mut(root, parent).ok_or_else(|| DomError::NotFound(parent.to_string()))?;

    match &mut parent_el.content {
        Content::Children(children) => children.push(child),
        _ => parent_el.content = Content::Children(vec![child]),
    }
    Ok(())
}

/// Insert `element` as the next sibling of `sibling`.
pub fn insert_after(root: &mut Element, sibling: &str, element: Element) -> Result<(), DomError> {
    if root.id == sibling {
        return Err(DomError::NoParent(sibling.to_string()));
    }

    match insert_after_inner(root, sibling, element) {
        None => Ok(()),
        Some(_) => Err(DomError::NotFound(sibling.to_string())),
    }
}

/// Returns the element back if the sibling was not found in this subtree.
fn insert_after_inner(parent: &mut Element, sibling: &str, element: Element) -> Option<Element> {
    let Content::Children(children) = &mut parent.content else {
        return Some(element);
    };

    if let Some(index) = children.iter().position(|c| c.id == sibling) {
        children.insert(index + 1, element);
        return None;
    }

    let mut element = element;
    for child in children.iter_mut() {
        match insert_after_inner(child, sibling, element) {
            None => return None,
            Some(back) => element = back,
        }
    }
    Some(element)
}

/// Detach the element with `id` from the tree and return it.
/// The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|c| c.id == id) {
        return Some(children.remove(index));
    }

    children
        .iter_mut()
        .find_map(|child| remove_element(child, id))
}
