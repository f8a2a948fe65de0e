use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dexview_catalog::core::filter_by_term;
use dexview_catalog::{CatalogConfig, CatalogEntry, CatalogSession};
use dexview_fetch::MockHttpClient;
use serde_json::json;

const CATALOG_SIZE: usize = 1025;

fn catalog() -> Vec<CatalogEntry> {
    (0..CATALOG_SIZE)
        .map(|i| {
            CatalogEntry::new(
                format!("species-{i:04}"),
                format!("https://api.test/pokemon/{i}/"),
            )
        })
        .collect()
}

fn bench_filter_by_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_term");
    let entries = catalog();
    group.throughput(Throughput::Elements(CATALOG_SIZE as u64));

    // empty matches everything, "species-1" about a tenth, the last one a single entry
    for term in ["", "s", "species-1", "SPECIES-1024"] {
        group.bench_with_input(BenchmarkId::new("catalog_1025", term), term, |b, term| {
            b.iter(|| filter_by_term(black_box(&entries), black_box(term)));
        });
    }

    group.finish();
}

fn bench_cached_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_batch");
    let rt = tokio::runtime::Runtime::new().unwrap();

    for size in [6usize, 20, 50] {
        let config = CatalogConfig::default().api_base("https://api.test/api/v2");
        let client = MockHttpClient::new();
        let names: Vec<String> = (0..size).map(|i| format!("mon-{i}")).collect();
        for (i, name) in names.iter().enumerate() {
            client.insert_json(
                config.detail_url(name),
                json!({
                    "id": i + 1,
                    "name": name,
                    "height": 7,
                    "weight": 69,
                    "sprites": { "front_default": null },
                    "types": [{ "slot": 1, "type": { "name": "normal" } }],
                    "species": { "name": name },
                }),
            );
        }
        let session = CatalogSession::new(client, config);
        rt.block_on(session.batch_fetcher().resolve_minimal_batch(&names));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("warm", size), &names, |b, names| {
            b.iter(|| rt.block_on(session.batch_fetcher().resolve_minimal_batch(black_box(names))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_by_term, bench_cached_batch);
criterion_main!(benches);
