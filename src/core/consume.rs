// src/core/consume.rs
//! Consumption primitives.
//!
//! Reading is only allowed on leaf-like nodes (no child elements). Consuming
//! reads, then replaces the subtree with a comment marker so a partially parsed
//! tree shows exactly what is still unaccounted for.

use std::collections::{BTreeMap, HashMap};

use crate::error::{ParseError, ParseResult};

use super::html::Dom;
use super::sanitize::comment_quote;
use super::sel::Sel;

/// One table row keyed by header label.
pub type TableRow = HashMap<String, String>;

impl Sel {
    /// Direct text content, comments skipped. Does not touch the tree.
    pub fn read_text(self, dom: &Dom) -> ParseResult<String> {
        let n = dom.element_children(self.id()).len();
        if n != 0 {
            return Err(self.fail(
                dom,
                structural!("cannot read text: node must not have a child element, but has {n}"),
            ));
        }
        Ok(dom.direct_text(self.id()))
    }

    /// `read_text`, then replace the node with a comment holding the text.
    pub fn consume_text(self, dom: &mut Dom) -> ParseResult<String> {
        let text = self.read_text(dom)?;
        dom.replace_with_comment(self.id(), &comment_quote(&text));
        Ok(text)
    }

    /// Read, require `expected`, then drop the node.
    pub fn consume_exact(self, dom: &mut Dom, expected: &str) -> ParseResult<()> {
        let got = self.read_text(dom)?;
        if got != expected {
            return Err(self.fail(dom, structural!("expected text {expected:?}, but got {got:?}")));
        }
        dom.detach(self.id());
        Ok(())
    }

    pub fn remove(self, dom: &mut Dom) {
        dom.detach(self.id());
    }

    pub fn replace_with_comment(self, dom: &mut Dom, text: &str) {
        dom.replace_with_comment(self.id(), &format!(" {text} "));
    }
}

/// Consume one `<tr>` whose cells are all `cell_tag`.
pub fn consume_row(dom: &mut Dom, tr: Sel, cell_tag: &str) -> ParseResult<Vec<String>> {
    tr.ensure(dom, "tr")?;

    let mut vals = Vec::new();
    for cell in tr.children(dom) {
        cell.ensure(dom, cell_tag)?;
        vals.push(cell.read_text(dom)?);
    }
    tr.replace_with_comment(dom, &format!("Row: {vals:?}"));
    Ok(vals)
}

/// `<table><thead><tr><th>..</tr></thead><tbody><tr><td>..</tr>..</tbody></table>`
/// into rows keyed by header label.
pub fn consume_table(dom: &mut Dom, table: Sel) -> ParseResult<Vec<TableRow>> {
    table.ensure(dom, "table")?;

    let thead = table.children_filtered(dom, "thead").single(dom)?;
    let tbody = table.children_filtered(dom, "tbody").single(dom)?;

    let header = thead.children(dom).first(dom)?;
    let columns = consume_row(dom, header, "th")?;
    let rows = consume_body_rows(dom, tbody)?;

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        if row.len() != columns.len() {
            return Err(table.fail(dom, ParseError::row_shape(columns.len(), row.len())));
        }
        data.push(columns.iter().cloned().zip(row).collect());
    }
    Ok(data)
}

fn consume_body_rows(dom: &mut Dom, tbody: Sel) -> ParseResult<Vec<Vec<String>>> {
    tbody.ensure(dom, "tbody")?;
    let mut rows = Vec::new();
    for tr in tbody.children(dom) {
        rows.push(consume_row(dom, tr, "td")?);
    }
    Ok(rows)
}

/// `<select>` options as value → label. Every option needs a `value`.
pub fn consume_select(dom: &mut Dom, select: Sel) -> ParseResult<BTreeMap<String, String>> {
    select.ensure(dom, "select")?;

    let mut vals = BTreeMap::new();
    for option in select.children(dom) {
        option.ensure(dom, "option")?;
        let text = option.read_text(dom)?;
        let Some(value) = option.attr(dom, "value") else {
            return Err(select.fail(dom, structural!("consume select: no value for option {text:?}")));
        };
        vals.insert(value, text);
    }
    select.replace_with_comment(dom, &format!("select: {vals:?}"));
    Ok(vals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn consume_text_leaves_marker() {
        let mut dom = Dom::parse_fragment(r#"<div><span class="path">/api/lol/{region}/v1.4</span></div>"#);
        let span = dom.root().find(&dom, "span.path").single(&dom).unwrap();

        assert_eq!(span.consume_text(&mut dom).unwrap(), "/api/lol/{region}/v1.4");
        assert!(dom.root().find(&dom, "span").is_empty());
        let div = dom.root().find(&dom, "div").single(&dom).unwrap();
        assert!(dom.dump(div).contains("<!-- \"/api/lol/{region}/v1.4\" -->"));
    }

    #[test]
    fn read_text_skips_comments_and_rejects_children() {
        let dom = Dom::parse_fragment("<p>Get <!-- note -->summoners</p><div><b>x</b></div>");
        let p = dom.root().find(&dom, "p").single(&dom).unwrap();
        assert_eq!(p.read_text(&dom).unwrap(), "Get summoners");

        let div = dom.root().find(&dom, "div").single(&dom).unwrap();
        let err = div.read_text(&dom).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Structural(m) if m.contains("but has 1")));
    }

    #[test]
    fn consume_exact_detaches_or_fails() {
        let mut dom = Dom::parse_fragment("<div><b>Return Value:</b> MatchDetail</div>");
        let b = dom.root().find(&dom, "b").single(&dom).unwrap();
        b.consume_exact(&mut dom, "Return Value:").unwrap();
        let div = dom.root().find(&dom, "div").single(&dom).unwrap();
        assert!(div.children(&dom).is_empty());
        assert_eq!(div.read_text(&dom).unwrap().trim(), "MatchDetail");

        let mut dom = Dom::parse_fragment("<b>Returns</b>");
        let b = dom.root().find(&dom, "b").single(&dom).unwrap();
        assert!(b.consume_exact(&mut dom, "Return Value:").is_err());
    }

    #[test]
    fn consume_table_maps_rows_by_header() {
        let mut dom = Dom::parse_fragment(
            "<table><thead><tr><th>HTTP Status Code</th><th>Reason</th></tr></thead>\
             <tbody><tr><td>400</td><td>Bad request</td></tr>\
             <tr><td>429</td><td>Rate limit exceeded</td></tr></tbody></table>",
        );
        let table = dom.root().find(&dom, "table").single(&dom).unwrap();
        let rows = consume_table(&mut dom, table).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["HTTP Status Code"], "400");
        assert_eq!(rows[1]["Reason"], "Rate limit exceeded");
        assert!(table.find(&dom, "tr").is_empty());
        assert!(dom.dump(table).contains("Row: [\"429\", \"Rate limit exceeded\"]"));
    }

    #[test]
    fn consume_table_rejects_ragged_rows() {
        let mut dom = Dom::parse_fragment(
            "<table><thead><tr><th>Name</th><th>Data Type</th></tr></thead>\
             <tbody><tr><td>id</td><td>long</td><td>extra</td></tr></tbody></table>",
        );
        let table = dom.root().find(&dom, "table").single(&dom).unwrap();
        let err = consume_table(&mut dom, table).unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::RowShape { expected: 2, actual: 3 });
        let msg = err.to_string();
        assert!(msg.contains('2') && msg.contains('3'));
        assert!(err.dump().is_some());
    }

    #[test]
    fn consume_select_maps_values() {
        let mut dom = Dom::parse_fragment(
            r#"<select class="select any class" name="virtual">
                <option value="a">A</option>
                <option value="b">B</option>
                <option value="c">C &amp; C</option>
            </select>"#,
        );
        let select = dom.root().find(&dom, "select").single(&dom).unwrap();
        let vals = consume_select(&mut dom, select).unwrap();

        let want: BTreeMap<String, String> = [("a", "A"), ("b", "B"), ("c", "C & C")]
            .into_iter()
            .map(|(k, v)| (s!(k), s!(v)))
            .collect();
        assert_eq!(vals, want);
        assert!(dom.root().find(&dom, "option").is_empty());
        assert!(dom.root().find(&dom, "select").is_empty());
    }

    #[test]
    fn consume_select_requires_values() {
        let mut dom = Dom::parse_fragment("<select><option>NA</option></select>");
        let select = dom.root().find(&dom, "select").single(&dom).unwrap();
        let err = consume_select(&mut dom, select).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Structural(m) if m.contains("\"NA\"")));
    }
}
