use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use people_api::{
    consts::consts::PersonId,
    model::{person::Person, statement::Statement},
    store::table::table::PersonTable,
};

const SAMPLE_SIZE: u64 = 10_000;

fn test_person(id: i64) -> Person {
    let mut person = Person::new_test();
    person.id = PersonId(id);
    person
}

pub fn table_add_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_add");

    group.throughput(Throughput::Elements(SAMPLE_SIZE));

    group.bench_function("add", |b| {
        b.iter_with_large_drop(|| {
            let mut table = PersonTable::new();

            for i in 0..SAMPLE_SIZE {
                let _ = table
                    .apply(Statement::Add(test_person(i as i64)))
                    .expect("id should be unused");
            }

            table
        })
    });

    group.finish();
}

pub fn table_get_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_get");

    let mut table = PersonTable::new();

    for i in 0..SAMPLE_SIZE {
        let _ = table
            .apply(Statement::Add(test_person(i as i64)))
            .expect("id should be unused");
    }

    group.throughput(Throughput::Elements(SAMPLE_SIZE));

    group.bench_function("get", |b| {
        b.iter(|| {
            for i in 0..SAMPLE_SIZE {
                let _ = table
                    .apply(Statement::Get(PersonId(i as i64)))
                    .expect("get never errors");
            }
        })
    });

    group.finish();
}

criterion_group!(benches, table_add_benchmark, table_get_benchmark);

criterion_main!(benches);
