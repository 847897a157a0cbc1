use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tutorkit_core::extract::{extract, fenced_code_blocks, split_frontmatter};

fn bench_frontmatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontmatter");

    let with_header = "---\ntopic: Binary Trees\nauth_required: false\n---\n# Body\n\nprose\n";
    let without_header = "# Body\n\nprose with no header at all\n";

    group.bench_function("with_header", |b| {
        b.iter(|| split_frontmatter(black_box(with_header)))
    });

    group.bench_function("without_header", |b| {
        b.iter(|| split_frontmatter(black_box(without_header)))
    });

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let simple = r#"---
topic: Binary Trees
---

<!-- examples:start -->
A file system is a tree of directories.
<!-- examples:end -->
"#;

    let leveled = r#"---
topic: Binary Trees
---

<!-- level:beginner -->
<!-- summary:start -->
Nodes with at most two children.
<!-- summary:end -->
<!-- examples:start -->
A file system is a tree.
<!-- examples:end -->
<!-- level:end -->

<!-- level:advanced -->
<!-- complexity:start -->
Balanced variants bound the height at O(log n).
<!-- complexity:end -->
<!-- level:end -->
"#;

    let large = {
        let mut s = String::from("---\ntopic: Generated\n---\n");
        for i in 0..50 {
            s.push_str(&format!(
                "\n<!-- examples:start -->\nExample number {i}.\n<!-- examples:end -->\n"
            ));
        }
        s
    };

    let single = vec!["examples".to_string()];
    let many = vec![
        "examples".to_string(),
        "summary".to_string(),
        "complexity".to_string(),
        "code_python".to_string(),
    ];

    group.bench_function("simple", |b| {
        b.iter(|| extract(black_box(simple), black_box("beginner"), black_box(&single)))
    });

    group.bench_function("leveled_multi_pref", |b| {
        b.iter(|| extract(black_box(leveled), black_box("beginner"), black_box(&many)))
    });

    group.bench_function("50_blocks", |b| {
        b.iter(|| extract(black_box(&large), black_box("beginner"), black_box(&single)))
    });

    group.finish();
}

fn bench_fences(c: &mut Criterion) {
    let mut group = c.benchmark_group("fenced_code");

    let mixed = {
        let mut s = String::new();
        for i in 0..20 {
            let lang = if i % 2 == 0 { "python" } else { "java" };
            s.push_str(&format!("\n```{lang}\nvalue = {i}\n```\n"));
        }
        s
    };

    group.bench_function("20_fences", |b| {
        b.iter(|| fenced_code_blocks(black_box(&mixed), black_box("python")))
    });

    group.finish();
}

criterion_group!(benches, bench_frontmatter, bench_extract, bench_fences);
criterion_main!(benches);
