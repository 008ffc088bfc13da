//! Rendering throughput for flat, spanning and nested tables.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gridfrier::{Cell, Node, RenderOptions, Row, SizeCalculator, Table, TableRenderer};

const ROWS: [usize; 3] = [10, 100, 1000];

fn words(row: usize, col: usize) -> String {
    format!("cell {row}:{col} with a few words that wrap")
}

fn flat(rows: usize) -> Table {
    Table::new([6, 12, 20]).with_head(vec![header()]).with_body(
        (0..rows)
            .map(|row| Row::new((0..3).map(|col| Cell::text(&words(row, col))).collect()))
            .collect(),
    )
}

/// Every other row starts with a cell spanning two columns and two rows.
fn spanning(rows: usize) -> Table {
    let rows = rows - rows % 2;
    Table::new([6, 12, 20]).with_head(vec![header()]).with_body(
        (0..rows)
            .map(|row| {
                if row % 2 == 0 {
                    Row::new(vec![
                        Cell::text(&words(row, 0)).span(2, 2),
                        Cell::text(&words(row, 2)),
                    ])
                } else {
                    Row::new(vec![Cell::text(&words(row, 2))])
                }
            })
            .collect(),
    )
}

fn nested(depth: usize) -> Table {
    let mut table = flat(2);
    for _ in 0..depth {
        table = Table::new([table_width(&table) + 2]).with_body(vec![Row::new(vec![Cell::new(
            Node::Block(vec![Node::from("wrapper"), Node::Table(Box::new(table))]),
        )])]);
    }
    table
}

fn table_width(table: &Table) -> usize {
    SizeCalculator::compute(table).width
}

fn header() -> Row {
    Row::new(vec![Cell::text("id"), Cell::text("name"), Cell::text("notes")])
}

fn bench_render(c: &mut Criterion) {
    let renderer = TableRenderer::new(RenderOptions::default());

    let mut group = c.benchmark_group("render");
    for rows in ROWS {
        let table = flat(rows);
        group.bench_with_input(BenchmarkId::new("flat", rows), &table, |b, table| {
            b.iter(|| renderer.render(black_box(table)));
        });
        let table = spanning(rows);
        group.bench_with_input(BenchmarkId::new("spanning", rows), &table, |b, table| {
            b.iter(|| renderer.render(black_box(table)));
        });
    }
    for depth in [1, 4, 8] {
        let table = nested(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &table, |b, table| {
            b.iter(|| renderer.render(black_box(table)));
        });
    }
    group.finish();
}

fn bench_sizes(c: &mut Criterion) {
    let table = flat(1000);
    c.bench_function("sizes/flat/1000", |b| {
        b.iter(|| SizeCalculator::compute(black_box(&table)));
    });
}

criterion_group!(benches, bench_render, bench_sizes);
criterion_main!(benches);
