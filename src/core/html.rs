// src/core/html.rs
//! Owned HTML tree for one parse.
//!
//! A `Dom` is mutated as parsing proceeds: understood fragments are replaced
//! with comment markers or detached. Each parse owns its `Dom`, so two parses
//! never share consumption state.

use ego_tree::{NodeId, NodeRef};
use scraper::node::Comment;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::error;

use super::sanitize::normalize_ws;
use super::sel::{Sel, Sels};

const DUMP_PREFIX: &str = "\nDUMP HTML:\n";
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub struct Dom {
    html: Html,
}

impl Dom {
    pub fn parse(src: &str) -> Self {
        Self { html: Html::parse_document(src) }
    }

    pub fn parse_fragment(src: &str) -> Self {
        Self { html: Html::parse_fragment(src) }
    }

    /// Document (or fragment) root.
    pub fn root(&self) -> Sel {
        Sel::new(self.html.tree.root().id())
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(id)
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.node(id).and_then(ElementRef::wrap)
    }

    pub(crate) fn element_children(&self, id: NodeId) -> Vec<Sel> {
        match self.node(id) {
            Some(node) => node
                .children()
                .filter(|c| c.value().is_element())
                .map(|c| Sel::new(c.id()))
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn matches(&self, id: NodeId, selector: &str) -> bool {
        match (self.element(id), compile(selector)) {
            (Some(el), Some(sel)) => sel.matches(&el),
            _ => false,
        }
    }

    pub(crate) fn descendants_matching(&self, id: NodeId, selector: &str) -> Vec<Sel> {
        let (Some(node), Some(sel)) = (self.node(id), compile(selector)) else {
            return Vec::new();
        };
        node.descendants()
            .skip(1)
            .filter(|n| ElementRef::wrap(*n).is_some_and(|el| sel.matches(&el)))
            .map(|n| Sel::new(n.id()))
            .collect()
    }

    /// Concatenated direct text children, comments skipped.
    pub(crate) fn direct_text(&self, id: NodeId) -> String {
        let mut out = s!();
        if let Some(node) = self.node(id) {
            for child in node.children() {
                if let Node::Text(t) = child.value() {
                    out.push_str(t);
                }
            }
        }
        out
    }

    pub(crate) fn detach(&mut self, id: NodeId) {
        if let Some(mut node) = self.html.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Swap the subtree at `id` for a `<!-- text -->` marker.
    pub(crate) fn replace_with_comment(&mut self, id: NodeId, text: &str) {
        if let Some(mut node) = self.html.tree.get_mut(id) {
            node.insert_before(Node::Comment(Comment { comment: text.into() }));
            node.detach();
        }
    }

    /// Pretty, line-numbered rendering of the subtree at `sel`.
    pub fn dump(&self, sel: Sel) -> String {
        let Some(node) = self.node(sel.id()) else {
            return join!(DUMP_PREFIX, "<!-- EMPTY NODE -->\n");
        };
        let mut lines = Vec::new();
        render(node, 0, &mut lines);
        number_lines(&lines)
    }

    /// Dump of everything `sels` holds, or of the scope it was queried from.
    pub fn dump_all(&self, sels: &Sels) -> String {
        let mut lines = Vec::new();
        if sels.is_empty() {
            match sels.scope().and_then(|s| self.node(s.id())) {
                Some(node) => {
                    lines.push(s!("<!-- EMPTY SELECTION, SCOPE: -->"));
                    render(node, 0, &mut lines);
                }
                None => return join!(DUMP_PREFIX, "<!-- EMPTY NODE -->\n"),
            }
        }
        for sel in sels.iter() {
            if let Some(node) = self.node(sel.id()) {
                render(node, 0, &mut lines);
            }
        }
        number_lines(&lines)
    }

    /// Non-whitespace text still live in the tree, in document order.
    pub fn leftover_text(&self) -> Vec<String> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|n| match n.value() {
                Node::Text(t) => Some(normalize_ws(t)),
                _ => None,
            })
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            error!(selector, "invalid selector: {e}");
            None
        }
    }
}

fn number_lines(lines: &[String]) -> String {
    let width = lines.len().max(1).to_string().len();
    let mut out = s!(DUMP_PREFIX);
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!("{:>width$}  {line}\n", i + 1));
    }
    out
}

fn render(node: NodeRef<'_, Node>, depth: usize, out: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                render(child, depth, out);
            }
        }
        Node::Element(el) => {
            let name = el.name();
            let mut open = format!("<{name}");
            for (k, v) in el.attrs() {
                open.push_str(&format!(" {k}=\"{v}\""));
            }
            open.push('>');

            let kids: Vec<_> = node.children().collect();
            if kids.is_empty() {
                if VOID_TAGS.contains(&name) {
                    out.push(join!(&pad, &open));
                } else {
                    out.push(format!("{pad}{open}</{name}>"));
                }
                return;
            }
            // single text child stays on one line
            if let [only] = kids.as_slice() {
                if let Node::Text(t) = only.value() {
                    out.push(format!("{pad}{open}{}</{name}>", normalize_ws(t)));
                    return;
                }
            }
            out.push(join!(&pad, &open));
            for child in kids {
                render(child, depth + 1, out);
            }
            out.push(format!("{pad}</{name}>"));
        }
        Node::Text(t) => {
            let t = normalize_ws(t);
            if !t.is_empty() {
                out.push(join!(&pad, &t));
            }
        }
        Node::Comment(c) => {
            let text: &str = c;
            out.push(format!("{pad}<!--{text}-->"));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_is_line_numbered_and_indented() {
        let dom = Dom::parse_fragment(r#"<ul id="resources"><li class="resource">summoner</li></ul>"#);
        let ul = dom.root().find(&dom, "ul").single(&dom).unwrap();
        let dump = dom.dump(ul);

        assert!(dump.starts_with(DUMP_PREFIX));
        assert!(dump.contains("1  <ul id=\"resources\">"));
        assert!(dump.contains("2    <li class=\"resource\">summoner</li>"));
        assert!(dump.contains("3  </ul>"));
    }

    #[test]
    fn replace_with_comment_keeps_position() {
        let mut dom = Dom::parse_fragment("<div><b>one</b><i>two</i></div>");
        let b = dom.root().find(&dom, "b").single(&dom).unwrap();
        dom.replace_with_comment(b.id(), " \"one\" ");

        let div = dom.root().find(&dom, "div").single(&dom).unwrap();
        let dump = dom.dump(div);
        let comment = dump.find("<!-- \"one\" -->").unwrap();
        let italic = dump.find("<i>two</i>").unwrap();
        assert!(comment < italic);
        assert_eq!(dom.leftover_text(), vec![s!("two")]);
    }

    #[test]
    fn bad_selector_matches_nothing() {
        let dom = Dom::parse_fragment("<p>x</p>");
        assert!(dom.root().find(&dom, "p[").is_empty());
    }
}
