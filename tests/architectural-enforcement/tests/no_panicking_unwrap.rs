//! Integration Test: No Panicking Unwrap in Production Code
//!
//! Address values are total and config errors are typed, so production
//! code propagates with `?` rather than calling `unwrap()`/`expect()`.
//! Test modules are exempt.

use architectural_enforcement::{production_lines, rust_files, PRODUCTION_DIRS};

#[test]
fn test_no_unwrap_in_production_code() {
    let mut violations = Vec::new();

    for file in rust_files(PRODUCTION_DIRS) {
        for (line_number, code) in production_lines(&file.content) {
            if code.contains(".unwrap()") || code.contains(".expect(") {
                violations.push(format!("{}:{} - {}", file.relative, line_number, code.trim()));
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ Panicking calls found in production code:");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Return a Result and use `?`, or handle the None/Err case.");
        panic!(
            "\nFound {} unwrap/expect call(s) in production code.",
            violations.len()
        );
    }
}
