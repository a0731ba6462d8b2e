//! BWB Benchmark Suite
//!
//! Targets:
//!   bonding_pass_20_items ........ < 50μs
//!   shadow_repair_single ......... < 2μs
//!   scaled_power_single .......... < 50ns

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bwb_core::bonding::{self, ItemRules};
use bwb_core::config::{BondConfig, GrowthConfig};
use bwb_core::shadow::{self, TemplateRegistry};
use bwb_core::types::{Effect, Trigger, VariantId, VariantTemplate, WearableInstance};

struct BenchRules;

impl ItemRules for BenchRules {
    fn is_armor(&self, item: &WearableInstance) -> bool {
        item.name.ends_with("Armor")
    }
    fn is_lockable(&self, _item: &WearableInstance) -> bool {
        true
    }
    fn is_enchantment(&self, kind: &str) -> bool {
        kind != "Curse"
    }
}

fn make_template(i: u32) -> VariantTemplate {
    VariantTemplate::new(
        if i % 5 == 0 { "PlateArmor" } else { "Cuffs" },
        vec![
            Effect::new("Accuracy", "tick", f64::from(i) + 1.0),
            Effect::new("ManaPool", "afterCalcManaPool", 1.2),
            Effect::new("Glow", "icon", 1.0),
        ],
    )
}

/// Twenty worn variants with their templates, none of them new.
fn make_worn() -> (TemplateRegistry, Vec<WearableInstance>) {
    let mut registry = TemplateRegistry::new();
    let mut worn = Vec::new();
    for i in 0..20 {
        let id = VariantId::new(format!("Cuffs#{i}"));
        let template = make_template(i);
        let mut item = template.fresh_instance(&id);
        if i % 3 == 0 {
            item.lock = Some("Red".to_string());
        }
        registry.insert(id, template);
        worn.push(item);
    }
    (registry, worn)
}

/// Benchmark: one bonding pass over 20 worn items (target: < 50μs).
fn bench_bonding_pass(c: &mut Criterion) {
    let config = BondConfig::default();
    let (registry, worn) = make_worn();

    c.bench_function("bonding_pass_20_items", |b| {
        b.iter_batched(
            || (registry.clone(), worn.clone()),
            |(mut registry, mut worn)| {
                let summary = bonding::run_pass(&mut worn, &mut registry, &BenchRules, black_box(&config));
                black_box(summary)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: repairing a recreated instance (target: < 2μs).
fn bench_shadow_repair(c: &mut Criterion) {
    let config = BondConfig::default();
    let (mut registry, mut worn) = make_worn();
    for _ in 0..5 {
        let _ = bonding::run_pass(&mut worn, &mut registry, &BenchRules, &config);
    }
    let id = VariantId::from("Cuffs#1");
    let fresh = make_template(1).fresh_instance(&id);

    c.bench_function("shadow_repair_single", |b| {
        b.iter(|| {
            let mut item = fresh.clone();
            shadow::repair(&registry, black_box(&mut item));
            black_box(item)
        });
    });
}

/// Benchmark: a single power computation (target: < 50ns).
fn bench_scaled_power(c: &mut Criterion) {
    let growth = GrowthConfig::default();
    c.bench_function("scaled_power_single", |b| {
        b.iter(|| {
            bonding::scaled_power(
                black_box(&Trigger::Tick),
                black_box(10.0),
                black_box(12),
                black_box(4),
                &growth,
            )
        });
    });
}

criterion_group!(benches, bench_bonding_pass, bench_shadow_repair, bench_scaled_power);
criterion_main!(benches);
