//! Direct supertype knowledge for well-known library types.
//!
//! Source-declared classes carry their own `extends`/`implements` texts;
//! library references have nothing in the parsed model, so shape sniffing
//! (collection detection, simple-type table hits) reads this registry
//! instead. A registered name with neither shape resolves to an empty
//! object, an unregistered one counts as unresolvable.

/// Registry rows: type name, direct declared supertype texts.
const SUPERTYPES: &[(&str, &[&str])] = &[
	("Object", &[]),
	("String", &["CharSequence", "Comparable<String>"]),
	("StringBuilder", &["CharSequence"]),
	("StringBuffer", &["CharSequence"]),
	("CharSequence", &[]),
	("Boolean", &["Comparable<Boolean>"]),
	("Character", &["Comparable<Character>"]),
	("Byte", &["Number", "Comparable<Byte>"]),
	("Short", &["Number", "Comparable<Short>"]),
	("Integer", &["Number", "Comparable<Integer>"]),
	("Long", &["Number", "Comparable<Long>"]),
	("Float", &["Number", "Comparable<Float>"]),
	("Double", &["Number", "Comparable<Double>"]),
	("Number", &[]),
	("BigDecimal", &["Number", "Comparable<BigDecimal>"]),
	("BigInteger", &["Number", "Comparable<BigInteger>"]),
	("Date", &["Comparable<Date>"]),
	("Calendar", &["Comparable<Calendar>"]),
	("Instant", &["Temporal", "Comparable<Instant>"]),
	("LocalDateTime", &["Temporal", "Comparable<LocalDateTime>"]),
	("LocalDate", &["Temporal", "Comparable<LocalDate>"]),
	("LocalTime", &["Temporal", "Comparable<LocalTime>"]),
	("ZonedDateTime", &["Temporal"]),
	("OffsetDateTime", &["Temporal", "Comparable<OffsetDateTime>"]),
	("Temporal", &[]),
	("Iterable", &[]),
	("Collection", &["Iterable"]),
	("List", &["Collection", "Iterable"]),
	("Set", &["Collection", "Iterable"]),
	("Queue", &["Collection", "Iterable"]),
	("Deque", &["Queue", "Collection", "Iterable"]),
	("ArrayList", &["AbstractList", "List", "Collection", "Iterable"]),
	("LinkedList", &["AbstractSequentialList", "List", "Deque", "Collection", "Iterable"]),
	("HashSet", &["AbstractSet", "Set", "Collection", "Iterable"]),
	("LinkedHashSet", &["HashSet", "Set", "Collection", "Iterable"]),
	("TreeSet", &["AbstractSet", "NavigableSet", "Set", "Collection", "Iterable"]),
	("Map", &[]),
	("HashMap", &["AbstractMap", "Map"]),
	("LinkedHashMap", &["HashMap", "Map"]),
	("TreeMap", &["AbstractMap", "NavigableMap", "Map"]),
	("UUID", &["Comparable<UUID>"]),
];

/// Direct supertype texts for a known library type name.
pub(crate) fn supertypes_of(name: &str) -> Option<&'static [&'static str]> {
	SUPERTYPES.iter().find(|(known, _)| *known == name).map(|(_, supers)| *supers)
}
