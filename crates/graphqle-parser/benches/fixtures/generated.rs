use std::fmt::Write;

/// Generates a schema with `count` object types, each with a description,
/// an annotation and a few fields with arguments.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 260);
    out.push_str("schema {\n  query: Type0\n}\n\n");
    for i in 0..count {
        writeln!(out, "\"\"\"Type number {i}.\"\"\"").unwrap();
        writeln!(out, "@Table(name: \"type_{i}\")").unwrap();
        writeln!(out, "type Type{i} implements Node {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  # Display name").unwrap();
        writeln!(out, "  name(locale: String = \"en\"): String").unwrap();
        writeln!(out, "  tags: [String!]!").unwrap();
        writeln!(out, "  next(first: Int = 10, filter: Filter = {{ active: true }}): [Type{i}]").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates an annotation argument with `depth` nested list values.
///
/// Depths past the parser's nesting limit exercise the recovery path.
pub fn deeply_nested_value(depth: usize) -> String {
    format!(
        "scalar Deep @Config(value: {}1{})\n",
        "[".repeat(depth),
        "]".repeat(depth),
    )
}

/// Generates a document whose every definition is broken in a different
/// way, to measure recovery cost.
pub fn malformed_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    for i in 0..count {
        match i % 4 {
            0 => writeln!(out, "type Broken{i} {{ a: Int b: }}").unwrap(),
            1 => writeln!(out, "enum Open{i} {{ A B").unwrap(),
            2 => writeln!(out, "garbage tokens {i} here").unwrap(),
            _ => writeln!(out, "input In{i} {{ a: [Int = 1 }}").unwrap(),
        }
    }
    out
}

/// Generates a doc comment with `count` words, every tenth one a tag.
pub fn doc_comment(count: usize) -> String {
    let mut out = String::with_capacity(count * 8);
    for i in 0..count {
        if i % 10 == 0 {
            write!(out, "@tag{i} value{i} ").unwrap();
        } else {
            write!(out, "word{i} ").unwrap();
        }
    }
    out
}
