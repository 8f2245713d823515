// src/doc/parser.rs
//! Document → Resource → Endpoint → Operation walk.
//!
//! Top-down, no backtracking: each stage asserts its shape and fails instead
//! of trying another reading. Blocks inside an operation are in `blocks.rs`.

use tracing::{debug, info, warn};

use crate::config::consts::{CONTAINER_PATH, PRUNE, PRUNE_IF_EMPTY, RESOURCE_LIST};
use crate::core::{Dom, Sel};
use crate::error::{Context, ParseResult};
use crate::resolve::Registry;
use crate::resolve::exceptions::{REGION_PLACEHOLDERS, is_skipped};

use super::blocks::parse_block;
use super::context::ParseContext;
use super::model::{Document, HttpMethod, Operation, Parameter, Resource};
use super::util::{parse_id_version, parse_regions, placeholders};

/// Parse a whole reference page. `dom` is consumed in place.
pub fn parse(dom: &mut Dom, registry: &Registry) -> ParseResult<Document> {
    let root = dom.root();
    prune(dom, root);

    let mut container = root;
    for step in CONTAINER_PATH {
        container = container
            .children_filtered(dom, step)
            .single(dom)
            .context(|| format!("narrow to container {step:?}"))?;
    }

    let mut doc = Document::default();
    for detail in container.find(dom, RESOURCE_LIST) {
        detail.ensure(dom, "div#api_detail")?;
        let list = detail.children(dom).first(dom)?.ensure(dom, "ul#resources")?;

        for li in list.children(dom) {
            if let Some(res) = parse_resource(dom, registry, li)? {
                doc.resources.push(res);
            }
        }
    }

    info!(resources = doc.resources.len(), "parsed document");
    Ok(doc)
}

/// Remove presentational subtrees. A node is re-checked after its children
/// are pruned, since it may only become useless then.
fn prune(dom: &mut Dom, sel: Sel) {
    if is_useless(dom, sel) {
        sel.remove(dom);
        return;
    }
    for child in sel.children(dom) {
        prune(dom, child);
    }
    if is_useless(dom, sel) {
        sel.remove(dom);
    }
}

fn is_useless(dom: &Dom, sel: Sel) -> bool {
    PRUNE.iter().any(|p| sel.is(dom, p))
        || (sel.is(dom, PRUNE_IF_EMPTY) && sel.children(dom).is_empty())
}

/// `None` for resources deliberately skipped.
fn parse_resource(dom: &mut Dom, registry: &Registry, li: Sel) -> ParseResult<Option<Resource>> {
    li.ensure(dom, "li.resource")?;

    let heading = li.children_filtered(dom, ".heading").single(dom)?;
    heading.children_filtered(dom, "ul.options").single(dom)?.remove(dom);

    let h2 = heading.children(dom).first(dom)?.ensure(dom, "h2")?;
    let a = h2.children(dom).first(dom)?.ensure(dom, "a")?;
    let spans = a.children(dom);
    let id_version = spans.first(dom)?.ensure(dom, "span")?.read_text(dom)?;
    // [BR, EUNE, .... , TR]
    let region_text = spans.last(dom)?.ensure(dom, "span")?.read_text(dom)?;

    let (id, version) = parse_id_version(id_version.trim());
    let regions = parse_regions(&region_text);
    heading.replace_with_comment(dom, &format!("resource: {id} {version}"));

    if is_skipped(&id) {
        warn!(resource = %id, "skipping resource");
        li.replace_with_comment(dom, &format!("skipped: {id}"));
        return Ok(None);
    }

    let cx = ParseContext::new(registry, &id);
    let span = cx.span();
    let _enter = span.enter();

    let mut res = Resource::new(&id, version, regions);
    for endpoint in li.children_filtered(dom, "ul.endpoints").children(dom) {
        parse_endpoint(cx, dom, &mut res, endpoint)
            .context(|| "parse endpoint")
            .context(|| format!("parse resource {id:?}"))?;
    }

    info!(operations = res.operations.len(), definitions = res.definitions.len(), "parsed resource");
    Ok(Some(res))
}

fn parse_endpoint(cx: ParseContext, dom: &mut Dom, res: &mut Resource, endpoint: Sel) -> ParseResult<()> {
    endpoint.ensure(dom, "li.endpoint")?;

    for li in endpoint.children_filtered(dom, "ul.operations").children(dom) {
        let op = parse_operation(cx, dom, res, li)?;
        res.operations.push(op);
    }
    Ok(())
}

// ".heading > .path": request path
// ".heading > ul.options": description
// class on li: HTTP method
fn parse_operation(cx: ParseContext, dom: &mut Dom, res: &mut Resource, li: Sel) -> ParseResult<Operation> {
    li.ensure(dom, "li.operation")?;

    let heading = li.children_filtered(dom, "div.heading").single(dom)?;
    let request_path = heading
        .children_filtered(dom, ".path")
        .single(dom)?
        .children(dom)
        .single(dom)?
        .consume_text(dom)?;
    let request_path = s!(request_path.trim());

    let description = heading
        .children_filtered(dom, "ul.options")
        .single(dom)?
        .children(dom)
        .single(dom)?
        .ensure(dom, "li")?
        .children(dom)
        .single(dom)?
        .ensure(dom, "a")?
        .consume_text(dom)?;
    heading.remove(dom);

    // region placeholders are never documented as parameters
    let path_params: Vec<Parameter> = placeholders(&request_path, REGION_PLACEHOLDERS)
        .into_iter()
        .map(|name| Parameter { name: s!(name), description: s!(), required: true, ty: cx.region_type() })
        .collect();

    let patch = cx.operation(&request_path).map_err(|e| li.fail(dom, e))?;

    let http_method = HttpMethod::MARKERS
        .iter()
        .find(|(class, _)| li.has_class(dom, class))
        .map(|&(_, m)| m)
        .ok_or_else(|| li.fail(dom, structural!("unknown operation method")))?;

    let mut op = Operation {
        resource_id: res.id.clone(),
        http_method,
        request_path,
        description: s!(description.trim()),
        path_params,
        query_params: Vec::new(),
        return_type: None,
        target_name: s!(patch.name()),
        overridden_map_key: patch.key_hint(),
        response_errors: Vec::new(),
        implementation_notes: None,
        rate_limit_notes: None,
    };
    debug!(path = %op.request_path, name = %op.target_name, method = %op.http_method, "operation");

    for block in li.find(dom, ".content .api_block") {
        parse_block(cx, dom, res, &mut op, block)
            .context(|| "parse api block")
            .context(|| format!("parse operation {:?}", op.request_path))?;
    }

    if let Some(key) = op.overridden_map_key {
        if !op.return_type.as_ref().is_some_and(|t| t.is_map()) {
            let found = op.return_type.as_ref().map_or(s!("nothing"), |t| t.to_string());
            return Err(structural!(
                "operation {:?} overrides the map key with {key}, but returns {found}",
                op.target_name
            ));
        }
    }

    Ok(op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_removes_blacklist_and_empty_push() {
        let mut dom = Dom::parse(
            r#"<html><head><title>t</title></head><body>
                <div class="navbar"><a>nav</a></div>
                <div id="wrap"><div class="push"><script>x()</script></div><p>kept</p></div>
                <div id="footer">f</div>
            </body></html>"#,
        );
        let root = dom.root();
        prune(&mut dom, root);

        assert!(dom.root().find(&dom, "head").is_empty());
        assert!(dom.root().find(&dom, "div.navbar").is_empty());
        assert!(dom.root().find(&dom, "div.push").is_empty());
        assert!(dom.root().find(&dom, "#footer").is_empty());
        assert_eq!(dom.leftover_text(), vec![s!("kept")]);
    }

    #[test]
    fn missing_container_is_a_shape_error() {
        let mut dom = Dom::parse("<html><body><div id='wrap'></div></body></html>");
        let reg = Registry::builder().build().unwrap();
        let err = parse(&mut dom, &reg).unwrap_err();
        assert!(err.to_string().contains("narrow to container \".body.container\""));
        assert!(err.dump().is_some());
    }
}
