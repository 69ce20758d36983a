#![allow(missing_docs)]

use chrono::{Local, TimeZone};
use specimen::sample::{ResolveOptions, Resolver, SimpleTypes, parse_source, render, to_json};

#[test]
fn full_document_matches_expected_text() {
	let model = parse_source(
		"class Profile {\n\tString name;\n\tboolean active;\n\tLevel level;\n\tjava.util.List<Integer> scores;\n}\nenum Level {\n\tBRONZE, SILVER, GOLD\n}\n",
	)
	.expect("source parses");
	let seed = Local.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).single().expect("valid seed");
	let table = SimpleTypes::seeded_at(seed);
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let profile = model.class_by_name("Profile").expect("Profile exists");

	let sample = resolver.sample_class(profile).expect("resolves");
	let expected = concat!(
		"{\n",
		"  \"name\": \"\", //String:\n",
		"  \"active\": false, //boolean:\n",
		"  \"level\": \"BRONZE\", //Level:\n",
		"  \"scores\": [\n",
		"    0, //Integer:\n",
		"  ]\n",
		"}",
	);
	assert_eq!(render(&sample), expected);
}

#[test]
fn nested_objects_render_without_comments() {
	let model = parse_source("class Outer {\n\tInner inner;\n\tint tail;\n}\nclass Inner {\n\tString label;\n}\n").expect("source parses");
	let seed = Local.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).single().expect("valid seed");
	let table = SimpleTypes::seeded_at(seed);
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let outer = model.class_by_name("Outer").expect("Outer exists");

	let sample = resolver.sample_class(outer).expect("resolves");
	let expected = concat!(
		"{\n",
		"  \"inner\": {\n",
		"    \"label\": \"\", //String:\n",
		"  },\n",
		"  \"tail\": 0, //int:\n",
		"}",
	);
	assert_eq!(render(&sample), expected);
}

#[test]
fn comment_free_json_is_valid_and_ordered() {
	let model = parse_source("class Point {\n\tint x;\n\tint y;\n\tString label;\n}\n").expect("source parses");
	let seed = Local.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).single().expect("valid seed");
	let table = SimpleTypes::seeded_at(seed);
	let resolver = Resolver::new(&model, &table, ResolveOptions::default());
	let point = model.class_by_name("Point").expect("Point exists");

	let sample = resolver.sample_class(point).expect("resolves");
	let json = to_json(&sample);
	let keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
	assert_eq!(keys, ["x", "y", "label"]);
	assert_eq!(json["x"], serde_json::json!(0));
	assert_eq!(json["label"], serde_json::json!(""));

	let text = serde_json::to_string(&json).expect("serializes");
	let reparsed: serde_json::Value = serde_json::from_str(&text).expect("round trips");
	assert_eq!(reparsed, json);
}
