/// The catalog shipped with the binary, in the same format accepted from
/// external files.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/patterns.json");
