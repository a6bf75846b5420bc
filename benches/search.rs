// benches/search.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use drug_finder::{Catalog, DrugRecord};

/// Synthetic catalog: `n` products over 200 ingredients, 4 doses, 12 categories.
fn synthetic(n: usize) -> Catalog {
    let records = (0..n)
        .map(|i| {
            DrugRecord::new(
                &format!("Product{i:06}"),
                &format!("ingredient{:03}{}", i % 200, if i % 7 == 0 { "," } else { "" }),
                &format!("{}mg", 5 * (1 + i % 4)),
                "Maker",
                &(100 + i % 900).to_string(),
                &format!("Category{:02}", i % 12),
            )
        })
        .collect();
    Catalog::new(records)
}

fn bench_search(c: &mut Criterion) {
    let catalog = synthetic(20_000);
    let base = catalog.get(1234).cloned().unwrap();

    c.bench_function("suggest_prefix", |b| {
        b.iter(|| black_box(catalog.suggest_indices(black_box("product01"), 10).len()))
    });

    c.bench_function("same_ingredient", |b| {
        b.iter(|| black_box(catalog.same_ingredient(black_box(&base), false).len()))
    });

    c.bench_function("same_ingredient_same_dose", |b| {
        b.iter(|| black_box(catalog.same_ingredient(black_box(&base), true).len()))
    });

    c.bench_function("category_counts", |b| b.iter(|| black_box(catalog.category_counts().len())));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
