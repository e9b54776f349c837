use criterion::{black_box, criterion_group, criterion_main, Criterion};
use anime_indexer_core::parser::FilenameParser;
use anime_indexer_core::{parse_paths, Convention};

fn bench_filename_parse(c: &mut Criterion) {
    let parser = FilenameParser::new().unwrap();

    let inputs: Vec<&str> = Convention::ALL.iter().map(|c| c.example()).collect();

    c.bench_function("parse_single", |b| {
        b.iter(|| parser.parse(black_box(inputs[1])).unwrap());
    });

    c.bench_function("parse_all_conventions", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parser.parse(black_box(input)).unwrap();
            }
        });
    });

    c.bench_function("parse_unrecognized", |b| {
        b.iter(|| parser.parse(black_box("random_file.mkv")).unwrap());
    });

    c.bench_function("batch_10", |b| {
        b.iter(|| parse_paths(&parser, black_box(&inputs)));
    });
}

criterion_group!(benches, bench_filename_parse);
criterion_main!(benches);
