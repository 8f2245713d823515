// benches/parse.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use loldoc::core::Dom;
use loldoc::resolve::Registry;

const FIXTURE: &str = include_str!("../tests/fixtures/methods.html");

fn bench_parse(c: &mut Criterion) {
    let registry = match Registry::builtin() {
        Ok(r) => r,
        Err(e) => panic!("builtin registry: {e}"),
    };

    c.bench_function("tree_only", |b| {
        b.iter(|| {
            let dom = Dom::parse(black_box(FIXTURE));
            black_box(dom.root())
        })
    });

    c.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = loldoc::parse_html(black_box(FIXTURE), &registry);
            black_box(doc.map(|d| d.resources.len()))
        })
    });

    c.bench_function("resolve_types", |b| {
        b.iter(|| {
            for raw in ["Map[string, List[LeagueDto]]", "List[MatchReference]", "Set[long]"] {
                let _ = black_box(registry.resolve_type("league", black_box(raw)));
            }
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
