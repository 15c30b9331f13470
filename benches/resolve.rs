use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mimesis::adapters::resolver::ExampleResolver;
use mimesis::domain::SchemaNode;
use serde_json::json;

fn benchmark_flat_object(c: &mut Criterion) {
    let resolver = ExampleResolver::new(false);
    let schema = SchemaNode::from_value(&json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "count": {"type": "integer"},
            "active": {"type": "boolean"},
            "score": {"type": "number", "format": "double"}
        }
    }));

    c.bench_function("resolve_flat_object", |b| {
        b.iter(|| resolver.resolve(black_box(&schema), None))
    });
}

fn benchmark_nested_document(c: &mut Criterion) {
    let resolver = ExampleResolver::new(false);
    let schema = SchemaNode::from_value(&json!({
        "type": "object",
        "properties": {
            "owner": {
                "type": "object",
                "properties": {
                    "userName": {"type": "string"},
                    "userId": {"type": "integer"}
                }
            },
            "tags": {"type": "array", "items": {"type": "string"}},
            "orders": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "orderId": {"type": "integer"},
                        "placedAt": {"type": "string", "format": "date-time"},
                        "lines": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "sku": {"type": "string"},
                                    "quantity": {"type": "integer", "format": "int32"}
                                }
                            }
                        }
                    }
                }
            }
        }
    }));

    c.bench_function("resolve_nested_document", |b| {
        b.iter(|| resolver.resolve(black_box(&schema), None))
    });
}

criterion_group!(benches, benchmark_flat_object, benchmark_nested_document);
criterion_main!(benches);
