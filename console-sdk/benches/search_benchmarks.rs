/*!
# Search Benchmarks

Measures how long the search compiler takes to expand a search over wide tables.

## Usage

```bash
# Run all benchmarks
cargo bench --bench search_benchmarks

# Quick benchmark with fewer samples
cargo bench --bench search_benchmarks -- --quick
```

HTML reports are generated in `target/criterion/report/index.html`.
*/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use console_sdk::{Column, DataType, SearchCompiler, Table};
use std::hint::black_box;

const TYPES: [DataType; 8] = [
    DataType::String,
    DataType::Text,
    DataType::Int,
    DataType::Double,
    DataType::Boolean,
    DataType::Datetime,
    DataType::DataRef,
    DataType::FileRef,
];

fn table_with_columns(count: usize) -> Table {
    (0..count).fold(Table::new("Bench"), |table, i| {
        table.with_column(Column::new(format!("column_{i}"), TYPES[i % TYPES.len()]))
    })
}

fn bench_compile(c: &mut Criterion) {
    let compiler = SearchCompiler::default();
    let mut group = c.benchmark_group("Search Compile");

    for columns in [8, 64, 256] {
        let table = table_with_columns(columns);

        for (label, search) in [("text", "alpha"), ("time", "4:7"), ("date", "1/2/1990 10:00")] {
            group.bench_with_input(
                BenchmarkId::new(label, columns),
                &table,
                |b, table| {
                    b.iter(|| compiler.compile(black_box(table), false, Some(search), Some("x = 1")));
                },
            );
        }
    }

    group.finish();
}

fn bench_sql_passthrough(c: &mut Criterion) {
    let compiler = SearchCompiler::default();
    let table = table_with_columns(256);

    c.bench_function("SQL passthrough", |b| {
        b.iter(|| compiler.compile(black_box(&table), true, Some("column_0 = 'a'"), None));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_compile, bench_sql_passthrough
}
criterion_main!(benches);
