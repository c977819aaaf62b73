// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for planning document parsing.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plansync_core::{parse_with_warnings, PlanSummary};

/// A plan with `modules` modules of `issues` issues each, one cycle per module.
fn generate_plan(modules: usize, issues: usize) -> String {
    let mut text = String::from("**Project Identifier**: `BEN`\n\n## 6. Cycles\n\n");
    for m in 1..=modules {
        text.push_str(&format!(
            "### Cycle {m}: Sprint {m}\n\n```yaml\nname: Sprint {m}\nstart_date: 2024-01-01\nend_date: 2024-01-14\n```\n\n"
        ));
    }

    text.push_str("## 7. Modules\n\n");
    for m in 1..=modules {
        text.push_str(&format!(
            "### Module {m}: Area {m}\n\n```yaml\nname: Area {m}\ndescription: Generated module\nstart_date: 2024-01-02\nlead: \"@lead\"\n```\n\n"
        ));
        for i in 1..=issues {
            text.push_str(&format!(
                "#### BEN-{m:02}{i:02}: Task {i} (3pt, High)\n\n```yaml\nname: Task {i}\npriority: high\nestimate_point: 3\nlabels: [backend, api]\ndescription_html: |\n  <p>Generated issue body</p>\n```\n\nAcceptance notes.\n\n"
            ));
        }
    }
    text
}

fn parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (modules, issues) in [(1, 5), (10, 10), (50, 20)] {
        let text = generate_plan(modules, issues);
        let id = format!("{modules}x{issues}");
        group.bench_with_input(BenchmarkId::new("parse_with_warnings", &id), &text, |b, t| {
            b.iter(|| parse_with_warnings(t))
        });
    }
    group.finish();
}

fn summarizing(c: &mut Criterion) {
    let parsed = parse_with_warnings(&generate_plan(50, 20));
    c.bench_function("summary_50x20", |b| b.iter(|| PlanSummary::of(&parsed.document)));
}

criterion_group!(benches, parsing, summarizing);
criterion_main!(benches);
