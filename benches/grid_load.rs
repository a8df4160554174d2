use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delim_edit::data::grid_loader::GridLoader;
use delim_edit::data::line_parser::LineParser;
use delim_edit::data::serializer::GridSerializer;

fn create_test_data(rows: usize) -> String {
    let books = [
        "Commodities Trading",
        "Equity Trading",
        "\"FX, Spot\"",
        "Bond Trading",
        "Derivatives",
    ];

    let mut text = String::from("id,book,value,status\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{},{},{},STATUS_{}\n",
            i,
            books[i % books.len()],
            i * 7,
            i % 5
        ));
    }
    text
}

fn benchmark_parse_line(c: &mut Criterion) {
    let parser = LineParser::new(',');
    let line = "12345,\"FX, Spot\",86415,STATUS_3,,trailing,";

    c.bench_function("parse_line", |b| {
        b.iter(|| parser.parse(black_box(line)));
    });
}

fn benchmark_load(c: &mut Criterion) {
    let text_10k = create_test_data(10_000);
    let text_100k = create_test_data(100_000);

    let mut group = c.benchmark_group("grid_load");

    group.bench_function("10k_rows", |b| {
        b.iter(|| {
            let grid = GridLoader::load_str(black_box(&text_10k), ',');
            assert!(grid.is_ok());
        });
    });

    group.bench_function("100k_rows", |b| {
        b.iter(|| {
            let grid = GridLoader::load_str(black_box(&text_100k), ',');
            assert!(grid.is_ok());
        });
    });

    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let grid = GridLoader::load_str(&create_test_data(100_000), ',').unwrap();

    c.bench_function("serialize_100k_rows", |b| {
        b.iter(|| GridSerializer::to_string(black_box(&grid)));
    });
}

criterion_group!(
    benches,
    benchmark_parse_line,
    benchmark_load,
    benchmark_serialize
);
criterion_main!(benches);
