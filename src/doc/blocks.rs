// src/doc/blocks.rs
//! Labeled content blocks inside an operation body.

use tracing::{debug, debug_span};

use crate::core::sanitize::{normalize_ws, strip_dash_prefix};
use crate::core::{Dom, Sel, TableRow, consume_row, consume_select, consume_table};
use crate::error::{Context, ParseError, ParseResult};
use crate::resolve::{exceptions, field_name};

use super::context::ParseContext;
use super::model::{Field, Operation, Parameter, ResponseError, Resource, Schema};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParamKind {
    Path,
    Query,
}

pub(super) fn parse_block(
    cx: ParseContext,
    dom: &mut Dom,
    res: &mut Resource,
    op: &mut Operation,
    block: Sel,
) -> ParseResult<()> {
    block.ensure(dom, ".api_block")?;

    // the status api has an empty block
    let children = block.children(dom);
    if children.is_empty() {
        return Ok(());
    }

    let label = children.first(dom)?.ensure(dom, "h4")?.consume_text(dom)?;
    match label.trim() {
        "Response Classes" => response_classes(cx, dom, res, op, block),
        "Response Errors" => {
            op.response_errors = response_errors(dom, block).context(|| "parse response errors")?;
            Ok(())
        }
        "Query Parameters" => {
            op.query_params = parameters(cx, dom, block, ParamKind::Query)
                .context(|| "parse query parameters")?;
            Ok(())
        }
        "Path Parameters" => {
            let params = parameters(cx, dom, block, ParamKind::Path).context(|| "parse path parameters")?;
            for p in params {
                // synthesized region parameters win
                if op.path_params.iter().any(|q| q.name == p.name) {
                    debug!(param = %p.name, "already synthesized");
                    continue;
                }
                op.path_params.push(p);
            }
            Ok(())
        }
        "Select Region to Execute Against" => {
            for select in block.find(dom, "select") {
                let regions = consume_select(dom, select)?;
                debug!(?regions, "region select");
            }
            Ok(())
        }
        "Implementation Notes" => {
            let p = block.children(dom).single(dom)?.ensure(dom, "p")?;
            op.implementation_notes = Some(normalize_ws(&p.consume_text(dom)?));
            Ok(())
        }
        "Rate Limit Notes" => {
            // <p> <span> $text </span> </p>
            let p = block.children(dom).single(dom)?.ensure(dom, "p")?;
            let span = p.children(dom).single(dom)?.ensure(dom, "span")?;
            op.rate_limit_notes = Some(normalize_ws(&span.consume_text(dom)?));
            Ok(())
        }
        other => Err(block.fail(dom, structural!("unknown api block {other:?}"))),
    }
}

/// Return-value declarations (1 child) and schemas (3 children), last first.
fn response_classes(
    cx: ParseContext,
    dom: &mut Dom,
    res: &mut Resource,
    op: &mut Operation,
    block: Sel,
) -> ParseResult<()> {
    for body in block.children_filtered(dom, ".block.response_body").reverse() {
        let kids = body.children(dom);
        match kids.len() {
            // <b>Return Value:</b> $class
            1 => {
                kids.first(dom)?.ensure(dom, "b")?.consume_exact(dom, "Return Value:")?;
                let raw = body.read_text(dom)?;
                let ty = cx
                    .resolve_type(&raw)
                    .map_err(|e| body.fail(dom, e))
                    .context(|| format!("resolve return value {:?}", raw.trim()))?;
                debug!(%ty, "return value");
                body.replace_with_comment(dom, &format!("return: {}", raw.trim()));
                op.return_type = Some(ty);
            }
            3 => {
                let schema = schema(cx, dom, body)?;
                res.define(schema);
            }
            n => {
                return Err(body.fail(dom, structural!("unexpected child count {n} in response classes")));
            }
        }
    }
    Ok(())
}

// <b>$class</b> - $description
// <br>
// <table> $fields... </table>
fn schema(cx: ParseContext, dom: &mut Dom, body: Sel) -> ParseResult<Schema> {
    body.ensure(dom, ".response_body")?;

    let original_name = body.children(dom).first(dom)?.ensure(dom, "b")?.consume_text(dom)?;
    let original_name = s!(original_name.trim());
    let span = debug_span!("schema", class = %original_name);
    let _enter = span.enter();

    let target_name = cx
        .class_name(&original_name)
        .map_err(|e| body.fail(dom, e))
        .context(|| format!("parse class {original_name:?}"))?;

    body.children(dom).first(dom)?.ensure(dom, "br")?.remove(dom);

    let table = body.children(dom).first(dom)?.ensure(dom, "table")?;
    let rows = consume_table(dom, table).context(|| format!("parse class {original_name:?}"))?;

    let mut fields = Vec::with_capacity(rows.len());
    for row in &rows {
        let field = field(cx, &original_name, row)
            .map_err(|e| table.fail(dom, e))
            .context(|| format!("parse class {original_name:?}"))?;
        fields.push(field);
    }
    table.replace_with_comment(dom, &format!("fields: {}", fields.len()));

    let description = strip_dash_prefix(&body.read_text(dom)?);
    body.replace_with_comment(dom, &format!("class: {original_name}"));

    debug!(fields = fields.len(), "schema");
    Ok(Schema { original_name, target_name, description, fields })
}

fn field(cx: ParseContext, class: &str, row: &TableRow) -> ParseResult<Field> {
    let name = s!(cell(row, "Name")?.trim());
    let documented = cell(row, "Data Type")?;
    let description = normalize_ws(cell(row, "Description")?);

    let raw = exceptions::field_type(cx.resource, class, &name, documented);
    let ty = cx.resolve_type(raw).context(|| format!("parse type of field {name:?}"))?;

    Ok(Field { target_name: field_name(&name), original_name: name, ty, description })
}

fn cell<'r>(row: &'r TableRow, column: &str) -> ParseResult<&'r str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| structural!("table has no {column:?} column"))
}

/// `{code, reason}` rows of the first table in the block.
fn response_errors(dom: &mut Dom, block: Sel) -> ParseResult<Vec<ResponseError>> {
    let table = block.children(dom).first(dom)?.ensure(dom, "table")?;
    let rows = consume_table(dom, table)?;

    let mut errors = Vec::with_capacity(rows.len());
    for row in &rows {
        let code = cell(row, "HTTP Status Code")?;
        let code = code
            .trim()
            .parse::<u16>()
            .map_err(|e| table.fail(dom, structural!("bad status code {code:?}: {e}")))?;
        errors.push(ResponseError { code, reason: normalize_ws(cell(row, "Reason")?) });
    }
    table.replace_with_comment(dom, "<table> Response Errors </table>");
    Ok(errors)
}

fn parameters(cx: ParseContext, dom: &mut Dom, block: Sel, kind: ParamKind) -> ParseResult<Vec<Parameter>> {
    let table = block.children(dom).first(dom)?.ensure(dom, "table")?;
    let thead = table.children_filtered(dom, "thead").single(dom)?;
    let header = thead.children(dom).single(dom)?;
    let columns = consume_row(dom, header, "th")?;
    let tbody = table
        .children_filtered(dom, "tbody")
        .single(dom)?
        .ensure(dom, ".operation-params")?;

    let mut params = Vec::new();
    for tr in tbody.children(dom) {
        let param = parameter(cx, dom, tr, columns.len(), kind)?;
        debug!(param = %param.name, ?kind, "parameter");
        params.push(param);
    }
    table.replace_with_comment(dom, &format!("{kind:?} parameters: {}", params.len()));
    Ok(params)
}

// <td class="code"><div class="required">required</div> $name</td>
// ... <td><span class="model-signature">$type</span></td>
// <td> $description </td>
fn parameter(cx: ParseContext, dom: &mut Dom, tr: Sel, columns: usize, kind: ParamKind) -> ParseResult<Parameter> {
    tr.ensure(dom, "tr")?;
    let cells: Vec<Sel> = tr.children(dom).into_iter().collect();
    if cells.len() != columns {
        return Err(tr.fail(dom, ParseError::row_shape(columns, cells.len())));
    }
    let [code, .., last] = cells.as_slice() else {
        return Err(tr.fail(dom, structural!("parameter row needs at least 2 cells, but has {}", cells.len())));
    };
    let (code, last) = (*code, *last);

    code.ensure(dom, "td.code")?;
    let marker = code.children_filtered(dom, "div.required").single(dom)?.consume_text(dom)?;
    let required = match marker.trim() {
        "required" => true,
        "optional" => false,
        other => return Err(code.fail(dom, structural!("unknown parameter marker {other:?}"))),
    };
    let name = s!(code.consume_text(dom)?.trim());

    last.ensure(dom, "td")?;
    let sig_cell = if last.children_filtered(dom, "span.model-signature").is_empty() {
        cells[cells.len() - 2].ensure(dom, "td")?
    } else {
        last
    };
    let sig = sig_cell.children_filtered(dom, "span.model-signature").single(dom)?;
    let documented = sig.consume_text(dom)?;
    let raw = match kind {
        ParamKind::Path => exceptions::path_param_type(&name, &documented),
        ParamKind::Query => documented.as_str(),
    };
    let ty = cx
        .resolve_type(raw)
        .map_err(|e| sig_cell.fail(dom, e))
        .context(|| format!("parse type of parameter {name:?}"))?;

    let description = normalize_ws(&last.consume_text(dom)?);
    if sig_cell != last {
        sig_cell.consume_text(dom)?;
    }
    tr.replace_with_comment(dom, &format!("param: {name}"));

    Ok(Parameter { name, description, required, ty })
}
