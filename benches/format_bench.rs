use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rtelinput::{COUNTRY_CATALOG, extract_digits, format_number};

type TestEntity = (&'static str, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("+1 (702) 555-0123", "us"),
        ("+44 7911 123456", "gb"),
        ("+7 916 123-45-67", "ru"),
        ("+49 30 12345678", "de"),
        ("+380 44 123 45 67", "ua"),
        ("+1268 464 1234", "ag"),
        ("+55 11 912345678", "br"),
        ("+1", "us"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers: Vec<(String, Option<&str>)> = setup_numbers()
        .into_iter()
        .map(|(raw, iso2)| {
            let template = COUNTRY_CATALOG.get(iso2).and_then(|country| country.format());
            (extract_digits(raw), template)
        })
        .collect();

    let mut group = c.benchmark_group("Formatting");

    for auto_format in [true, false] {
        group.bench_function(format!("format_number(auto_format: {})", auto_format), |b| {
            b.iter(|| {
                for (digits, template) in &numbers {
                    format_number(black_box(digits), black_box(*template), black_box(auto_format));
                }
            })
        });
    }

    group.bench_function("extract_digits", |b| {
        b.iter(|| {
            for (raw, _) in setup_numbers() {
                extract_digits(black_box(raw));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
