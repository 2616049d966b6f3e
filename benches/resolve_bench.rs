use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rtelinput::{COUNTRY_CATALOG, resolve_country, search_by_name};

fn setup_prefixes() -> Vec<&'static str> {
    vec!["1", "1702", "120455", "1809", "1268", "44", "447911", "7", "380441", "999", ""]
}

fn resolving_benchmark(c: &mut Criterion) {
    let prefixes = setup_prefixes();
    let catalog = &*COUNTRY_CATALOG;
    let current = catalog.get("do");

    let mut group = c.benchmark_group("Resolving");

    group.bench_function("resolve_country(stateless)", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                resolve_country(black_box(prefix), catalog, None, None);
            }
        })
    });

    group.bench_function("resolve_country(with current)", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                resolve_country(black_box(prefix), catalog, current, None);
            }
        })
    });

    group.bench_function("search_by_name", |b| {
        b.iter(|| {
            for query in ["u", "united k", "zim", "q"] {
                search_by_name(black_box(query), catalog.countries());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, resolving_benchmark);
criterion_main!(benches);
