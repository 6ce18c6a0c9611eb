pub const DEFAULT_LANGUAGE: &str = "javascript";

// Catalog misses resolve to the bare name, not the `javascript` entry.
const FALLBACK_DISPLAY_NAME: &str = "JavaScript";

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("javascript", "JavaScript (ES6+)"),
    ("python", "Python 3"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("go", "Go"),
    ("typescript", "TypeScript"),
    ("rust", "Rust"),
    ("php", "PHP"),
];

pub fn display_name(code: &str) -> &'static str {
    DISPLAY_NAMES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
        .unwrap_or(FALLBACK_DISPLAY_NAME)
}
