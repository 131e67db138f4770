use criterion::{black_box, criterion_group, criterion_main, Criterion};
use windsolar::{summarize, Interpolation, MonthSet, RawRecord};

/// Ten-minute readings for every odd month of 2008-2010.
fn records() -> Vec<RawRecord> {
    let mut records = Vec::new();
    for year in 2008..=2010 {
        for month in (1..=12).step_by(2) {
            for day in 1..=28 {
                for slot in 0..144 {
                    let date = format!("{:02}/{:02}/{}", day, month, year);
                    let time = format!("{:02}:{:02}", slot / 6, (slot % 6) * 10);
                    let ws = (slot % 17) as f64 * 0.5;
                    let sr = (slot % 72) as f64 * 10.0;
                    records.push(RawRecord::new(&date, &time, ws, sr));
                }
            }
        }
    }
    records
}

fn bench_summarize(c: &mut Criterion) {
    let records = records();
    let months = MonthSet::all();
    c.bench_function("summarize_none", |b| {
        b.iter(|| summarize(black_box(&records), &months, None))
    });
    for strategy in [
        Interpolation::Linear,
        Interpolation::Quadratic,
        Interpolation::Spline,
    ] {
        c.bench_function(&format!("summarize_{}", strategy), |b| {
            b.iter(|| summarize(black_box(&records), &months, Some(strategy)))
        });
    }
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
