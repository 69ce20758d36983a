#![allow(missing_docs)]

use chrono::{Local, TimeZone};
use specimen::sample::{FieldDecl, ResolveOptions, Resolver, Sample, SampleError, SimpleTypes, TypeRef, parse_source, render};

fn seeded_table() -> SimpleTypes {
	let seed = Local.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).single().expect("valid seed");
	SimpleTypes::seeded_at(seed)
}

fn seed_millis() -> String {
	Local
		.with_ymd_and_hms(2026, 8, 30, 10, 0, 0)
		.single()
		.expect("valid seed")
		.timestamp_millis()
		.to_string()
}

#[test]
fn person_scenario_produces_ordered_annotated_output() {
	let model = parse_source(
		"public class Person {\n\tprivate String name;\n\tprivate int age;\n\t/** created at */\n\tprivate java.time.LocalDateTime createdAt;\n}\n",
	)
	.expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let person = model.class_by_name("Person").expect("Person exists");

	let sample = resolver.sample_class(person).expect("resolves");
	let Sample::Object(fields) = &sample else {
		panic!("expected object root");
	};
	let names: Vec<_> = fields.iter().map(|field| field.name.as_ref()).collect();
	assert_eq!(names, ["name", "age", "createdAt"]);

	let text = render(&sample);
	assert!(text.contains("\"name\": \"\", //String:"), "got: {text}");
	assert!(text.contains("\"age\": 0, //int:"), "got: {text}");
	assert!(text.contains(&format!("\"createdAt\": {}, //LocalDateTime:created at", seed_millis())), "got: {text}");
}

#[test]
fn arrays_and_collections_wrap_exactly_one_element() {
	let model = parse_source(
		"class Holder {\n\tjava.util.List<Item> items;\n\tItem[][] grid;\n\tint[][][] cube;\n}\nclass Item {\n\tint id;\n}\n",
	)
	.expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let holder = model.class_by_name("Holder").expect("Holder exists");
	let fields: Vec<&FieldDecl> = model.all_fields(holder);

	// resolve(collection-of-T) == [ resolve(T, depth + 1) ].
	let item_ty = TypeRef::parse("Item").expect("type parses");
	let expected_elem = resolver.resolve(&item_ty, 1, fields[0]).expect("element resolves");
	let whole = resolver.resolve(&fields[0].ty, 0, fields[0]).expect("collection resolves");
	assert_eq!(whole, Sample::Array(vec![expected_elem.clone()]));

	// Multi-dimensional arrays collapse to a single-level sequence.
	let grid = resolver.resolve(&fields[1].ty, 0, fields[1]).expect("grid resolves");
	assert_eq!(grid, Sample::Array(vec![resolver.resolve(&item_ty, 1, fields[1]).expect("element resolves")]));

	let cube = resolver.resolve(&fields[2].ty, 0, fields[2]).expect("cube resolves");
	let Sample::Array(items) = cube else {
		panic!("expected array");
	};
	assert_eq!(items.len(), 1);
	assert!(matches!(items[0], Sample::Literal { .. }), "inner dimensions must collapse");
}

#[test]
fn enums_resolve_to_the_first_declared_constant() {
	let model = parse_source("class Ticket {\n\tStatus status;\n}\nenum Status {\n\tOPEN, CLOSED, ARCHIVED\n}\n").expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let ticket = model.class_by_name("Ticket").expect("Ticket exists");

	let sample = resolver.sample_class(ticket).expect("resolves");
	let Sample::Object(fields) = sample else {
		panic!("expected object root");
	};
	let Sample::Enum { name, .. } = &fields[0].value else {
		panic!("expected enum sample");
	};
	assert_eq!(name.as_ref(), "OPEN");
}

#[test]
fn simple_type_subtypes_beat_composite_expansion() {
	let model = parse_source("class Event {\n\tEventDate when;\n}\nclass EventDate extends Date {\n\tlong raw;\n}\n").expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let event = model.class_by_name("Event").expect("Event exists");

	let sample = resolver.sample_class(event).expect("resolves");
	let Sample::Object(fields) = sample else {
		panic!("expected object root");
	};
	let Sample::Literal { text, quoted, .. } = &fields[0].value else {
		panic!("Date subtype must resolve via the simple-type table, got {:?}", fields[0].value);
	};
	assert_eq!(text.as_ref(), seed_millis().as_str());
	assert!(!quoted);
}

#[test]
fn output_order_is_own_fields_then_inherited() {
	let model = parse_source(
		"class Child extends Base {\n\tint c1;\n\tint c2;\n}\nclass Base {\n\tint b1;\n\tint b2;\n}\n",
	)
	.expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let child = model.class_by_name("Child").expect("Child exists");

	let sample = resolver.sample_class(child).expect("resolves");
	let Sample::Object(fields) = sample else {
		panic!("expected object root");
	};
	let names: Vec<_> = fields.iter().map(|field| field.name.as_ref()).collect();
	assert_eq!(names, ["c1", "c2", "b1", "b2"]);
}

#[test]
fn all_filtered_class_renders_as_empty_object() {
	let model = parse_source("class Marker {\n\tprivate static final long serialVersionUID = 7L;\n}\n").expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let marker = model.class_by_name("Marker").expect("Marker exists");

	let sample = resolver.sample_class(marker).expect("resolves");
	assert_eq!(render(&sample), "{}");
}

#[test]
fn mutual_references_hit_the_depth_ceiling() {
	let model = parse_source("class A {\n\tB other;\n}\nclass B {\n\tA back;\n}\n").expect("source parses");
	let table = seeded_table();
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let a = model.class_by_name("A").expect("A exists");

	let err = resolver.sample_class(a).expect_err("cycle must exceed depth");
	assert!(matches!(err, SampleError::DepthExceeded { max_depth: 500 }));
	assert!(err.is_known());
}

#[test]
fn lowered_ceiling_applies_to_deep_but_finite_graphs() {
	let model = parse_source("class Outer {\n\tMiddle m;\n}\nclass Middle {\n\tInner i;\n}\nclass Inner {\n\tint leaf;\n}\n").expect("source parses");
	let table = seeded_table();
	let outer = model.class_by_name("Outer").expect("Outer exists");

	let strict = Resolver::new(&model, &table, ResolveOptions { max_depth: 1 });
	let err = strict.sample_class(outer).expect_err("ceiling of 1 is too low");
	assert!(matches!(err, SampleError::DepthExceeded { max_depth: 1 }));

	let relaxed = Resolver::new(&model, &table, ResolveOptions { max_depth: 2 });
	assert!(relaxed.sample_class(outer).is_ok());
}
