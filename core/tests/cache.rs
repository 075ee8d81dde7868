//! Integration tests for the expression cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bumpalo::Bump;
use tarn_core::api::{Engine, EngineOptions, Error, ExpressionCache, Refresh};
use tarn_core::values::Value;

fn empty_cache(arena: &Bump) -> ExpressionCache<'_> {
    let engine = Engine::new(EngineOptions::default(), arena, |env| env);
    ExpressionCache::new(engine)
}

#[test]
fn test_eval_compiles_once() {
    let arena = Bump::new();
    let cache = empty_cache(&arena);

    let first = cache.eval("2+3*4").unwrap();
    let second = cache.eval("2+3*4").unwrap();
    assert_eq!(first, Value::Number(14.0));
    assert_eq!(first, second);
    assert_eq!(cache.compile_count(), 1);
}

#[test]
fn test_distinct_sources_compile_separately() {
    let arena = Bump::new();
    let cache = empty_cache(&arena);

    cache.eval("1+1").unwrap();
    cache.eval("2+2").unwrap();
    cache.eval("1+1").unwrap();
    assert_eq!(cache.compile_count(), 2);
}

#[test]
fn test_failed_source_is_not_recompiled() {
    let arena = Bump::new();
    let cache = empty_cache(&arena);

    let first = cache.eval("(1+2").unwrap_err();
    let second = cache.eval("(1+2").unwrap_err();
    assert!(matches!(first, Error::Compilation { .. }));
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(cache.compile_count(), 1);

    let failed = cache.failed_sources();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0], "(1+2");
}

#[test]
fn test_runtime_errors_are_not_cached_as_failures() {
    let arena = Bump::new();
    let cache = empty_cache(&arena);

    assert!(cache.eval("1/0").is_err());
    assert!(cache.failed_sources().is_empty());
    assert_eq!(cache.compile_count(), 1);
}

#[test]
fn test_check() {
    let arena = Bump::new();
    let cache = empty_cache(&arena);

    // Empty is valid by convention, without compiling.
    assert!(cache.check(""));
    assert!(cache.check("   "));
    assert_eq!(cache.compile_count(), 0);

    assert!(cache.check("1+1"));
    assert!(!cache.check("1+"));

    // check() shares the cache with eval().
    cache.eval("1+1").unwrap();
    assert_eq!(cache.compile_count(), 2);
}

#[test]
fn test_dynamic_variable_consulted_once_per_eval() {
    let reads = Arc::new(AtomicU64::new(0));
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena, {
        let reads = Arc::clone(&reads);
        move |env| {
            env.dynamic_variable("SAMPLE", move || {
                Value::Number(reads.fetch_add(1, Ordering::Relaxed) as f64)
            })
        }
    });
    let cache = ExpressionCache::new(engine);

    assert_eq!(cache.eval("SAMPLE").unwrap(), Value::Number(0.0));
    assert_eq!(cache.eval("SAMPLE").unwrap(), Value::Number(1.0));
    // Two evaluations, one compile: the getter ran exactly twice.
    assert_eq!(reads.load(Ordering::Relaxed), 2);
    assert_eq!(cache.compile_count(), 1);
}

struct TickingSensor {
    refreshes: AtomicU64,
    value: AtomicU64,
}

impl Refresh for TickingSensor {
    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        self.value.fetch_add(10, Ordering::Relaxed);
    }
}

#[test]
fn test_update_refreshes_attached_providers() {
    let sensor = Arc::new(TickingSensor {
        refreshes: AtomicU64::new(0),
        value: AtomicU64::new(0),
    });

    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena, {
        let sensor = Arc::clone(&sensor);
        move |env| {
            env.dynamic_variable("SENSOR", move || {
                Value::Number(sensor.value.load(Ordering::Relaxed) as f64)
            })
        }
    });
    let cache = ExpressionCache::new(engine);
    cache.attach(Arc::clone(&sensor) as Arc<dyn Refresh>);

    assert_eq!(cache.eval("SENSOR").unwrap(), Value::Number(0.0));

    cache.update();
    assert_eq!(sensor.refreshes.load(Ordering::Relaxed), 1);
    assert_eq!(cache.eval("SENSOR").unwrap(), Value::Number(10.0));

    cache.update();
    assert_eq!(cache.eval("SENSOR").unwrap(), Value::Number(20.0));
}

#[test]
fn test_post_construction_registration_affects_future_compiles() {
    let arena = Bump::new();
    let mut cache = empty_cache(&arena);

    assert!(cache.eval("CEILING_FT").is_err());
    cache.register_variable("CEILING_FT", Value::Number(4500.0));
    // The failure was cached under the same source; use a variant spelling
    // to compile against the updated environment.
    assert_eq!(cache.eval("CEILING_FT + 0").unwrap(), Value::Number(4500.0));
}
