use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swissmatch_core::prelude::*;
use swissmatch_core::text::{expand, fold};

/// Letters only: digits do not survive canonicalization.
fn suffix(mut i: u32) -> String {
    let mut out = String::new();
    loop {
        out.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            return out;
        }
    }
}

fn synthetic_dataset() -> Dataset {
    let zip_codes = (0..4000u32)
        .map(|i| ZipCode {
            ordering_number: i + 1,
            zip_type: ZipType::DomicileAndPostal,
            code: 1000 + (i / 2) as u16,
            add_on: (i % 2) as u8,
            names: Names::native(format!("Zürich-Oerlikon {}", suffix(i)))
                .with(Locale::It, format!("Zurigo {}", suffix(i))),
            language: Language::German,
            language_alternative: None,
            canton: "ZH".into(),
            delivery_by: None,
            largest_community: None,
            valid_from: None,
        })
        .collect();
    Dataset::build(Vec::new(), Vec::new(), zip_codes).expect("synthetic data is consistent")
}

fn bench_canonicalize(c: &mut Criterion) {
    c.bench_function("fold", |b| b.iter(|| fold(black_box("Zürich-Oerlikon Sihlpost"))));
    c.bench_function("expand", |b| b.iter(|| expand(black_box("Zürich-Oerlikon Sihlpost"))));
}

fn bench_lookups(c: &mut Criterion) {
    let db = synthetic_dataset();
    let tier1 = format!("Zurich-Oerlikon {}", suffix(1234));
    let tier2 = format!("Zuerich-Oerlikon {}", suffix(1234));
    let italian = format!("Zurigo {}", suffix(1234));
    c.bench_function("build_4000", |b| b.iter(synthetic_dataset));
    c.bench_function("city_tier1_hit", |b| {
        b.iter(|| db.city(black_box(tier1.as_str())))
    });
    c.bench_function("city_tier2_hit", |b| {
        b.iter(|| db.city(black_box(tier2.as_str())))
    });
    c.bench_function("zip_code_by_code_and_name", |b| {
        b.iter(|| db.zip_code(black_box(1617), Some(italian.as_str().into())))
    });
}

criterion_group!(benches, bench_canonicalize, bench_lookups);
criterion_main!(benches);
