use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grapheme_rs::{validate_str, GraphemeNormMode};

fn benchmark_validation(c: &mut Criterion) {
    // "Security and public order forces"
    let khmer = "កងកម\u{17D2}លាំងរក\u{17D2}សាសន\u{17D2}តិសុខនិងសណ\u{17D2}តាប\u{17D2}ធ\u{17D2}នាប\u{17D2}សាធារណៈ";
    let devanagari = "भारत एक विशाल देश है और यहाँ अनेक भाषाएँ बोली जाती हैं";

    c.bench_function("validate_khmer_sentence", |b| {
        b.iter(|| {
            validate_str(GraphemeNormMode::Combined, false, black_box(khmer)).unwrap();
        })
    });

    c.bench_function("validate_devanagari_sentence", |b| {
        b.iter(|| {
            validate_str(GraphemeNormMode::Combined, false, black_box(devanagari)).unwrap();
        })
    });

    c.bench_function("validate_glyph_split", |b| {
        b.iter(|| {
            validate_str(GraphemeNormMode::GlyphSplit, false, black_box(devanagari)).unwrap();
        })
    });
}

criterion_group!(benches, benchmark_validation);
criterion_main!(benches);
