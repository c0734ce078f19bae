use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emoji_aliases::{
    AliasLoader, AliasPlan, CodepointSequence, DirectoryScan, FileExtension, FileNaming,
};

const NUM_ALIASES: u32 = 2_000;

fn mapping_text() -> String {
    let mut text = String::from("# generated aliases\n");
    for i in 0..NUM_ALIASES {
        text.push_str(&format!(
            "{:x}_fe0f ; {:x}  # alias {}\n",
            0x1f000 + i,
            0x1f000 + i,
            i
        ));
    }
    text
}

fn benchmark_read_aliases(c: &mut Criterion) {
    let text = mapping_text();

    c.bench_function("read_aliases_from_string", |b| {
        b.iter(|| AliasLoader::read_aliases_from_string(black_box(&text)))
    });
}

fn benchmark_build_plan(c: &mut Criterion) {
    let naming = FileNaming::new("emoji_u", FileExtension::Png);
    let load = AliasLoader::read_aliases_from_string(&mapping_text()).unwrap();

    let mut scan = DirectoryScan::new();
    for i in (0..NUM_ALIASES).step_by(2) {
        let sequence = CodepointSequence::new(vec![0x1f000 + i]);
        let file_name = naming.file_name(&sequence);
        scan.merge(sequence, file_name);
    }

    c.bench_function("build_plan", |b| {
        b.iter(|| AliasPlan::build(black_box(&load.aliases), &scan, &naming, false))
    });
}

criterion_group!(benches, benchmark_read_aliases, benchmark_build_plan);
criterion_main!(benches);
