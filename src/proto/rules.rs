/*!
 * Ordered substitution rules applied to the whole proto text.
 *
 * Each rule replaces every occurrence of its matcher. Rules run in the
 * order of the slices below, so later rules see the output of earlier ones.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Inlined replacement for `google/protobuf/timestamp.proto`
pub const INLINE_TIMESTAMP: &str = "
message Timestamp {
  int64 seconds = 1;
  int32 nanos = 2;
}
";

/// Inlined replacement for `google/protobuf/struct.proto`
pub const INLINE_STRUCT: &str = "
message Struct {
  map<string, Value> fields = 1;
}

message Value {
  oneof kind {
    NullValue null_value = 1;
    double number_value = 2;
    string string_value = 3;
    bool bool_value = 4;
    Struct struct_value = 5;
    ListValue list_value = 6;
  }
}

enum NullValue {
  NULL_VALUE = 0;
}

message ListValue {
  repeated Value values = 1;
}
";

/// Any import statement, including `import public` and `import weak`
static IMPORT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bimport\s+(?:(?:public|weak)\s+)?"[^"]*"\s*;"#)
        .expect("Invalid import statement regex")
});

/// What a rule looks for
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Exact substring
    Literal(&'static str),
    /// Regular expression
    Pattern(&'static Lazy<Regex>),
}

/// A global find/replace step
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub replacement: &'static str,
}

impl SubstitutionRule {
    const fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Literal(from),
            replacement: to,
        }
    }

    /// Apply the rule, returning the new text and the number of replacements
    pub fn apply(&self, text: &str) -> (String, usize) {
        match self.matcher {
            Matcher::Literal(from) => {
                let count = text.matches(from).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                (text.replace(from, self.replacement), count)
            }
            Matcher::Pattern(regex) => {
                let count = regex.find_iter(text).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                let replaced = regex.replace_all(text, NoExpand(self.replacement));
                (replaced.into_owned(), count)
            }
        }
    }
}

/// Swap well-known imports for local definitions. Struct goes first.
pub const WELL_KNOWN_IMPORTS: &[SubstitutionRule] = &[
    SubstitutionRule::literal(
        "inline struct.proto",
        "import \"google/protobuf/struct.proto\";",
        INLINE_STRUCT,
    ),
    SubstitutionRule::literal(
        "inline timestamp.proto",
        "import \"google/protobuf/timestamp.proto\";",
        INLINE_TIMESTAMP,
    ),
];

/// Drop every import left after inlining
pub static STRIP_IMPORTS: SubstitutionRule = SubstitutionRule {
    name: "strip imports",
    matcher: Matcher::Pattern(&IMPORT_STATEMENT),
    replacement: "",
};

/// Point fully-qualified well-known types at the inlined ones.
///
/// Struct and Value are renamed before Timestamp.
pub const TYPE_RENAMES: &[SubstitutionRule] = &[
    SubstitutionRule::literal("rename Struct", "google.protobuf.Struct", "Struct"),
    SubstitutionRule::literal("rename Value", "google.protobuf.Value", "Value"),
    SubstitutionRule::literal("rename Timestamp", "google.protobuf.Timestamp", "Timestamp"),
    SubstitutionRule::literal("rename ListValue", "google.protobuf.ListValue", "ListValue"),
    SubstitutionRule::literal("rename NullValue", "google.protobuf.NullValue", "NullValue"),
];

/// Apply `rules` in order, returning the text and the total replacement count
pub fn apply_all(text: &str, rules: &[SubstitutionRule]) -> (String, usize) {
    rules.iter().fold((text.to_string(), 0), |(current, total), rule| {
        let (next, count) = rule.apply(&current);
        if count > 0 {
            debug!("Rule '{}' replaced {} occurrence(s)", rule.name, count);
        }
        (next, total + count)
    })
}
