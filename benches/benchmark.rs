//! Performance benchmarks for noweb

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use noweb::config::Config;
use noweb::model::{expand_chunk, Chunk, ChunkName, ChunkStore};
use noweb::readers::{read_document, ReadMode};
use noweb::text_location::TextLocation;

fn generate_document(num_chunks: usize, lines_per_chunk: usize) -> String {
    let mut doc = String::from("Benchmark document.\n\n");

    // A file chunk that includes all others
    doc.push_str("<<output.py>>=\n");
    for i in 0..num_chunks {
        doc.push_str(&format!("    <<block{}>>\n", i));
    }
    doc.push_str("@\n\n");

    for i in 0..num_chunks {
        doc.push_str(&format!("Prose before block {}.\n<<block{}>>=\n", i, i));
        for j in 0..lines_per_chunk {
            doc.push_str(&format!("print('Block {} line {}')\n", i, j));
        }
        doc.push_str("@\n\n");
    }

    doc
}

fn generate_nested_document(depth: usize, breadth: usize) -> String {
    fn generate_chunk(doc: &mut String, name: &str, depth: usize, breadth: usize) {
        doc.push_str(&format!("<<{}>>=\n", name));

        let children: Vec<String> = (0..breadth).map(|i| format!("{}_{}", name, i)).collect();
        if depth > 0 {
            for child in &children {
                doc.push_str(&format!("  <<{}>>\n", child));
            }
        } else {
            doc.push_str("pass\n");
        }
        doc.push_str("@\n");

        if depth > 0 {
            for child in &children {
                generate_chunk(doc, child, depth - 1, breadth);
            }
        }
    }

    let mut doc = String::from("Nested benchmark.\n");
    generate_chunk(&mut doc, "main.py", depth, breadth);
    doc
}

fn bench_read_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_document");
    let config = Config::default();

    for num_chunks in [10, 50, 100, 500].iter() {
        let doc = generate_document(*num_chunks, 10);
        group.bench_with_input(BenchmarkId::new("tangle", num_chunks), &doc, |b, doc| {
            b.iter(|| read_document(black_box(doc), None, &config, ReadMode::Tangle).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("weave", num_chunks), &doc, |b, doc| {
            b.iter(|| read_document(black_box(doc), None, &config, ReadMode::Weave).unwrap())
        });
    }

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    let config = Config::default();
    let root = ChunkName::new("output.py");

    for num_chunks in [10, 50, 100, 500].iter() {
        let doc = generate_document(*num_chunks, 10);
        let parsed = read_document(&doc, None, &config, ReadMode::Tangle).unwrap();

        group.bench_with_input(
            BenchmarkId::new("chunks", num_chunks),
            &parsed.store,
            |b, store| b.iter(|| expand_chunk(black_box(store), &root).unwrap()),
        );
    }

    group.finish();
}

fn bench_expand_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_nested");
    let config = Config::default();
    let root = ChunkName::new("main.py");

    // Different nesting depths with breadth=3
    for depth in [2, 3, 4, 5].iter() {
        let doc = generate_nested_document(*depth, 3);
        let parsed = read_document(&doc, None, &config, ReadMode::Tangle).unwrap();
        let total_chunks = parsed.store.len();

        group.bench_with_input(
            BenchmarkId::new("depth", format!("d{}({}chunks)", depth, total_chunks)),
            &parsed.store,
            |b, store| b.iter(|| expand_chunk(black_box(store), &root).unwrap()),
        );
    }

    group.finish();
}

fn bench_chunk_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_store");

    for num_chunks in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("insert", num_chunks),
            num_chunks,
            |b, &n| {
                b.iter(|| {
                    let mut store = ChunkStore::new();
                    for i in 0..n {
                        let name = ChunkName::new(format!("block{}", i));
                        store
                            .open(&name, TextLocation::line_only(i + 1))
                            .push_line("print()\n");
                    }
                    black_box(store)
                })
            },
        );
    }

    let store: ChunkStore = (0..10000)
        .map(|i| Chunk::with_body(ChunkName::new(format!("block{}", i)), "print()\n"))
        .collect();

    group.bench_function("lookup_10k", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let name = ChunkName::new(format!("block{}", i * 10));
                black_box(store.get(&name));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_read_document,
    bench_expand,
    bench_expand_nested,
    bench_chunk_store,
);

criterion_main!(benches);
