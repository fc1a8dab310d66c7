#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashSet;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use proptest::{collection::vec, strategy::Strategy, strategy::ValueTree, test_runner::TestRunner};
use wordtable::{HashCodeMethod, WordTable};

const ITEMS_AMOUNT: usize = 1000;
const TABLE_SIZE: usize = 211;
const SAMPLE_SIZE: usize = 10;

fn word_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let words = vec("[a-z]{1,12}", ITEMS_AMOUNT).new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Hash code method comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    for method in HashCodeMethod::ALL {
        group.bench_with_input(BenchmarkId::new("put", method), &words, |b, words| {
            b.iter(|| {
                let mut table = WordTable::with_size(TABLE_SIZE).unwrap();
                table.set_hash_code_method(method);
                for word in words {
                    table.put(word).unwrap();
                }
                table
            });
        });

        let mut table = WordTable::with_size(TABLE_SIZE).unwrap();
        table.set_hash_code_method(method);
        for word in &words {
            table.put(word).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("find", method), &words, |b, words| {
            b.iter(|| words.iter().filter(|word| matches!(table.find(word), Ok(Some(_)))).count());
        });
    }
    group.bench_function("rust std insert", |b| {
        b.iter(|| words.iter().cloned().collect::<HashSet<String>>());
    });
    group.finish();
}

criterion_group!(benches, word_table_benches);

criterion_main!(benches);
