use codspeed_criterion_compat::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use typeahead_tui::{TypeaheadOption, filter_options};

fn build_options(count: usize) -> Vec<TypeaheadOption> {
    (0..count)
        .map(|i| TypeaheadOption::new(format!("value-{i}"), format!("label-{i}")))
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_options");

    for size in [10, 1_000, 10_000].iter() {
        let options = build_options(*size);

        group.bench_with_input(
            BenchmarkId::new("narrow_match", size),
            &options,
            |b, options| {
                b.iter(|| black_box(filter_options(options, "label-7")));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("broad_match", size),
            &options,
            |b, options| {
                b.iter(|| black_box(filter_options(options, "label")));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("no_match", size),
            &options,
            |b, options| {
                b.iter(|| black_box(filter_options(options, "zz")));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("empty_query", size),
            &options,
            |b, options| {
                b.iter(|| black_box(filter_options(options, "")));
            },
        );
    }

    let unicode: Vec<TypeaheadOption> = (0..1_000)
        .map(|i| TypeaheadOption::new(format!("value-{i}"), format!("Größe-{i}")))
        .collect();
    group.bench_function("unicode_fold", |b| {
        b.iter(|| black_box(filter_options(&unicode, "größe")));
    });

    group.finish();
}

criterion_group!(benches, benchmark_filter);
criterion_main!(benches);
