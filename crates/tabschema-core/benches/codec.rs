use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabschema_core::prelude::*;

/// `width` leaves per level, one nested record per level down to `depth`.
fn make_tree(depth: usize, width: usize) -> Field {
    let mut current: Option<Field> = None;
    for level in (0..depth).rev() {
        let mut children: Vec<Field> = (0..width)
            .map(|i| {
                Field::builder(format!("leaf_{level}_{i}"), FieldType::string())
                    .unwrap()
                    .set_mode(Mode::Nullable)
                    .set_description(format!("leaf {i} at level {level}"))
                    .build()
                    .unwrap()
            })
            .collect();
        if let Some(child) = current.take() {
            children.push(child);
        }
        current = Some(
            Field::builder(format!("record_{level}"), FieldType::record(children))
                .unwrap()
                .set_mode(Mode::Repeated)
                .build()
                .unwrap(),
        );
    }
    current.unwrap()
}

fn bench_to_builder(c: &mut Criterion) {
    let field = make_tree(10, 8);
    c.bench_function("to_builder_build", |b| {
        b.iter(|| black_box(field.to_builder().build().unwrap()))
    });
}

fn bench_encode(c: &mut Criterion) {
    let field = make_tree(10, 8);
    c.bench_function("to_wire", |b| b.iter(|| black_box(to_wire(&field))));
}

fn bench_decode(c: &mut Criterion) {
    let wire = to_wire(&make_tree(10, 8));
    c.bench_function("from_wire", |b| {
        b.iter(|| black_box(from_wire(&wire).unwrap()))
    });
}

criterion_group!(benches, bench_to_builder, bench_encode, bench_decode);
criterion_main!(benches);
