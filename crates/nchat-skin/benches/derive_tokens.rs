//! Benchmarks for token derivation and variable serialization.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nchat_skin::css::{DESIGN_PREFIX, design_tokens_to_css_variables};
use nchat_skin::registry::Overrides;
use nchat_skin::tokens::{accessibility_tokens, component_tokens, design_tokens};
use nchat_skin::{MemoryStyleRoot, SkinBinder, SkinRegistry, SkinRequest, builtin};
use serde_json::json;

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for id in ["slack", "discord"] {
        let skin = builtin::skin(id).unwrap();
        let behavior = builtin::behavior(id).unwrap();

        group.bench_with_input(BenchmarkId::new("design", id), &skin, |b, skin| {
            b.iter(|| design_tokens(skin, false));
        });
        group.bench_with_input(BenchmarkId::new("accessibility", id), &skin, |b, skin| {
            b.iter(|| accessibility_tokens(skin, true));
        });
        group.bench_function(BenchmarkId::new("component", id), |b| {
            b.iter(|| component_tokens(&skin, &behavior, false));
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let tokens = design_tokens(&builtin::skin("telegram").unwrap(), true);

    group.bench_function("design_variables", |b| {
        b.iter(|| design_tokens_to_css_variables(&tokens, DESIGN_PREFIX).unwrap());
    });

    group.finish();
}

fn bench_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch");
    let reg = SkinRegistry::with_builtins().unwrap();

    group.bench_function("profile", |b| {
        let mut binder = SkinBinder::new(MemoryStyleRoot::new());
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let id = if flip { "whatsapp" } else { "slack" };
            binder
                .switch_skin(&reg, SkinRequest::Profile(id.into()), &Overrides::none(), flip)
                .unwrap();
        });
    });

    let overrides = Overrides::skin(json!({ "colors": { "primary": "#FF5500" } }));
    group.bench_function("profile_with_override", |b| {
        let mut binder = SkinBinder::new(MemoryStyleRoot::new());
        b.iter(|| {
            binder
                .switch_skin(&reg, SkinRequest::Profile("nchat".into()), &overrides, false)
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derive, bench_serialize, bench_switch);
criterion_main!(benches);
