use regex::Regex;

/// Compiled regular expressions used by the line and file checks.
pub struct Patterns {
    /// `if (...)`, `else if (...)`, `while (...)`, `for (...)` alone on a line.
    pub control_header: Regex,
    pub bare_else: Regex,
    pub malformed_else_if: Regex,
    pub public_signature: Regex,
    pub todo_marker: Regex,
    pub magic_number: Regex,
    pub loop_header: Regex,
    pub hardcoded_password: Regex,
    pub method_signature: Regex,
    pub class_declaration: Regex,
    pub import_statement: Regex,
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Patterns {
    #[must_use]
    pub fn new() -> Self {
        Self {
            control_header: Regex::new(r"^(if|else\s+if|while|for)\s*\(.*\)\s*$")
                .expect("Invalid regex"),
            bare_else: Regex::new(r"^else\s*$").expect("Invalid regex"),
            malformed_else_if: Regex::new(r"^else\s*\{\s*if\b").expect("Invalid regex"),
            public_signature: Regex::new(r"\bpublic\b.*\(.*\)").expect("Invalid regex"),
            todo_marker: Regex::new(r"(?i)(TODO|FIXME|XXX|HACK|BUG)").expect("Invalid regex"),
            magic_number: Regex::new(r"\b\d{2,}\b").expect("Invalid regex"),
            loop_header: Regex::new(r"\b(for|while)\s*\(").expect("Invalid regex"),
            hardcoded_password: Regex::new(r#"(?i)(password|senha|pwd)\s*=\s*["'].+["']"#)
                .expect("Invalid regex"),
            method_signature: Regex::new(
                r"\b(public|private|protected)\s+[\w<>\[\]]+\s+\w+\s*\(",
            )
            .expect("Invalid regex"),
            class_declaration: Regex::new(r"\bclass\s+\w+").expect("Invalid regex"),
            import_statement: Regex::new(r"(?m)^import\s+").expect("Invalid regex"),
        }
    }
}
