use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dvm_proxy::{
    ArgumentDecoder, ByteCursor, CallDescriptor, ClassId, ClassRegistry, ObjectTable, ProxyBridge,
    SlotCursor, ValueType, Visibility,
};

struct Fixture {
    registry: ClassRegistry,
    objects: ObjectTable,
    widget: ClassId,
    string_ref: u32,
}

fn fixture() -> Fixture {
    let mut registry = ClassRegistry::new();
    let object = registry.declare("java.lang.Object", None).unwrap();
    let string = registry.declare("java.lang.String", Some(object)).unwrap();
    let widget = registry.declare("bench.Widget", Some(object)).unwrap();

    registry
        .define(object)
        .unwrap()
        .method("equals", Visibility::Public, &[ValueType::Object(object)]);

    let mut definer = registry.define(widget).unwrap();
    for i in 0..16 {
        definer = definer.method(
            &format!("other{}", i),
            Visibility::Public,
            &[ValueType::Int, ValueType::Int],
        );
    }
    let by_string = [ValueType::Object(string), ValueType::Int];
    let by_object = [ValueType::Object(object), ValueType::Int];
    definer
        .method("put", Visibility::Public, &by_string)
        .method("put", Visibility::Public, &by_object)
        .method("put", Visibility::Public, &[ValueType::Int, ValueType::Int]);

    let mut objects = ObjectTable::new();
    let string_ref = objects.insert(string).unwrap().reference;

    Fixture {
        registry,
        objects,
        widget,
        string_ref,
    }
}

fn bench_decode(c: &mut Criterion) {
    let fx = fixture();
    let mut group = c.benchmark_group("decode");

    let slots: Vec<u64> = vec![1, u64::from(fx.string_ref), 7, 0, 1, 3];
    group.bench_with_input(BenchmarkId::new("slot", "ILISZB"), &slots, |b, slots| {
        let decoder = ArgumentDecoder::default();
        b.iter(|| {
            let cursor = SlotCursor::new(black_box(slots), &fx.objects);
            decoder.decode("ILISZB", &cursor).unwrap()
        });
    });

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&5i32.to_le_bytes());
    bytes.extend_from_slice(&1.5f64.to_le_bytes());
    bytes.extend_from_slice(&fx.string_ref.to_le_bytes());
    bytes.extend_from_slice(&(-1i64).to_le_bytes());
    bytes.extend_from_slice(&2.0f32.to_le_bytes());
    group.bench_with_input(BenchmarkId::new("byte", "IDLJF"), &bytes, |b, bytes| {
        let decoder = ArgumentDecoder::default();
        b.iter(|| {
            let cursor = ByteCursor::new(black_box(bytes), &fx.objects);
            decoder.decode("IDLJF", &cursor).unwrap()
        });
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let fx = fixture();
    let bridge = ProxyBridge::with_defaults(&fx.registry);
    let descriptor = CallDescriptor::new("put", "LI");
    let mut group = c.benchmark_group("resolve");

    let exact = [u64::from(fx.string_ref), 3];
    group.bench_function("exact", |b| {
        b.iter(|| {
            let cursor = SlotCursor::new(black_box(&exact), &fx.objects);
            bridge.find_method(fx.widget, &descriptor, &cursor).unwrap()
        });
    });

    let wildcard = [0u64, 3];
    group.bench_function("wildcard", |b| {
        b.iter(|| {
            let cursor = SlotCursor::new(black_box(&wildcard), &fx.objects);
            bridge.find_method(fx.widget, &descriptor, &cursor).unwrap()
        });
    });

    group.bench_function("inherited", |b| {
        let equals = CallDescriptor::new("equals", "L");
        b.iter(|| {
            let cursor = SlotCursor::new(black_box(&wildcard[..1]), &fx.objects);
            bridge.find_method(fx.widget, &equals, &cursor).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_resolve);
criterion_main!(benches);
