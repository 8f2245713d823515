// src/core/sel.rs
//! Typed selections over a `Dom`.
//!
//! `Sel` is exactly one node; `Sels` is zero or more, in document order.
//! Navigation never fails. Cardinality is asserted where the caller needs it
//! (`single`, `exactly`, `first`, `last`) and a failed assertion carries a
//! dump of the subtree in scope.

use ego_tree::NodeId;

use crate::error::{ParseError, ParseResult};

use super::html::Dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sel {
    id: NodeId,
}

impl Sel {
    pub(crate) fn new(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    /// Assert this node matches `selector` (tag, class, id or a compound of them).
    pub fn ensure(self, dom: &Dom, selector: &str) -> ParseResult<Sel> {
        if dom.matches(self.id, selector) {
            Ok(self)
        } else {
            Err(self.fail(dom, ParseError::structural(format!("expected selector {selector:?}"))))
        }
    }

    pub fn is(self, dom: &Dom, selector: &str) -> bool {
        dom.matches(self.id, selector)
    }

    pub fn has_class(self, dom: &Dom, class: &str) -> bool {
        dom.element(self.id)
            .is_some_and(|el| el.value().classes().any(|c| c == class))
    }

    pub fn attr(self, dom: &Dom, name: &str) -> Option<String> {
        dom.element(self.id).and_then(|el| el.value().attr(name).map(String::from))
    }

    /// Element children.
    pub fn children(self, dom: &Dom) -> Sels {
        Sels::scoped(self, dom.element_children(self.id))
    }

    /// Element children matching `selector`.
    pub fn children_filtered(self, dom: &Dom, selector: &str) -> Sels {
        let items = dom
            .element_children(self.id)
            .into_iter()
            .filter(|c| dom.matches(c.id, selector))
            .collect();
        Sels::scoped(self, items)
    }

    /// Descendants matching `selector`.
    pub fn find(self, dom: &Dom, selector: &str) -> Sels {
        Sels::scoped(self, dom.descendants_matching(self.id, selector))
    }

    /// Enrich `err` with this node's dump.
    pub fn fail(self, dom: &Dom, err: ParseError) -> ParseError {
        err.with_dump(dom.dump(self))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sels {
    scope: Option<Sel>,
    items: Vec<Sel>,
}

impl Sels {
    pub fn scoped(scope: Sel, items: Vec<Sel>) -> Self {
        Self { scope: Some(scope), items }
    }

    pub fn scope(&self) -> Option<Sel> {
        self.scope
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sel> + '_ {
        self.items.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<Sel> {
        self.items.get(index).copied()
    }

    pub fn single(&self, dom: &Dom) -> ParseResult<Sel> {
        match self.items.as_slice() {
            [only] => Ok(*only),
            _ => Err(self.fail(dom, ParseError::shape("exactly 1", self.len()))),
        }
    }

    pub fn exactly(self, dom: &Dom, n: usize) -> ParseResult<Sels> {
        if self.len() == n {
            Ok(self)
        } else {
            let expected = match n {
                0 => "exactly 0",
                1 => "exactly 1",
                2 => "exactly 2",
                3 => "exactly 3",
                _ => "a fixed number of",
            };
            Err(self.fail(dom, ParseError::shape(expected, self.len())))
        }
    }

    pub fn first(&self, dom: &Dom) -> ParseResult<Sel> {
        self.items
            .first()
            .copied()
            .ok_or_else(|| self.fail(dom, ParseError::shape("at least 1", 0)))
    }

    pub fn last(&self, dom: &Dom) -> ParseResult<Sel> {
        self.items
            .last()
            .copied()
            .ok_or_else(|| self.fail(dom, ParseError::shape("at least 1", 0)))
    }

    pub fn reverse(mut self) -> Sels {
        self.items.reverse();
        self
    }

    /// Children of every element, concatenated in order.
    pub fn children(&self, dom: &Dom) -> Sels {
        let items = self
            .items
            .iter()
            .flat_map(|s| dom.element_children(s.id))
            .collect();
        Sels { scope: self.scope, items }
    }

    fn fail(&self, dom: &Dom, err: ParseError) -> ParseError {
        err.with_dump(dom.dump_all(self))
    }
}

impl IntoIterator for Sels {
    type Item = Sel;
    type IntoIter = std::vec::IntoIter<Sel>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const LIST: &str = r#"
        <ul class="endpoints">
            <li class="endpoint"><span>a</span><span>b</span></li>
            <li class="endpoint"><span>c</span></li>
            <li class="other"></li>
        </ul>"#;

    #[test]
    fn single_rejects_many_with_dump() {
        let dom = Dom::parse_fragment(LIST);
        let ul = dom.root().find(&dom, "ul.endpoints").single(&dom).unwrap();

        let err = ul.children_filtered(&dom, "li.endpoint").single(&dom).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Shape { expected: "exactly 1", found: 2 });
        assert!(err.dump().unwrap().contains("<li class=\"endpoint\">"));
    }

    #[test]
    fn empty_selection_dumps_its_scope() {
        let dom = Dom::parse_fragment(LIST);
        let ul = dom.root().find(&dom, "ul").single(&dom).unwrap();

        let err = ul.children_filtered(&dom, "li.missing").single(&dom).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Shape { expected: "exactly 1", found: 0 });
        assert!(err.dump().unwrap().contains("EMPTY SELECTION"));
        assert!(err.dump().unwrap().contains("<ul class=\"endpoints\">"));
    }

    #[test]
    fn ensure_checks_tag_and_class() {
        let dom = Dom::parse_fragment(LIST);
        let li = dom.root().find(&dom, "li").first(&dom).unwrap();

        assert!(li.ensure(&dom, "li.endpoint").is_ok());
        let err = li.ensure(&dom, "li.resource").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Structural(m) if m.contains("li.resource")));
        assert!(err.dump().is_some());
    }

    #[test]
    fn flatten_children_keeps_order() {
        let dom = Dom::parse_fragment(LIST);
        let ul = dom.root().find(&dom, "ul").single(&dom).unwrap();
        let spans = ul.children_filtered(&dom, "li.endpoint").children(&dom);

        let texts: Vec<String> = spans.iter().map(|s| dom.direct_text(s.id())).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);

        let reversed: Vec<String> = spans
            .reverse()
            .iter()
            .map(|s| dom.direct_text(s.id()))
            .collect();
        assert_eq!(reversed, vec!["c", "b", "a"]);
    }

    #[test]
    fn first_last_and_exactly() {
        let dom = Dom::parse_fragment(LIST);
        let items = dom.root().find(&dom, "li");

        assert_eq!(items.first(&dom).unwrap(), items.get(0).unwrap());
        assert_eq!(items.last(&dom).unwrap(), items.get(2).unwrap());
        assert!(items.clone().exactly(&dom, 3).is_ok());
        assert!(items.exactly(&dom, 2).is_err());
        assert!(dom.root().find(&dom, "table").first(&dom).is_err());
    }
}
