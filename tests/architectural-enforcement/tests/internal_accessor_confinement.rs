//! Integration Test: Internal Accessor Confinement
//!
//! `PathAddress::address_bytes_internal` hands out the stored path bytes
//! without copying. Only the defining module and the socket hand-off may
//! name it; every other caller goes through `address_bytes()`.

use architectural_enforcement::{production_lines, rust_files, PRODUCTION_DIRS};

const ACCESSOR: &str = "address_bytes_internal";

const ALLOWED: &[&str] = &[
    "pathaddr/core/src/address/path.rs",
    "pathaddr/core/src/socket.rs",
];

#[test]
fn test_internal_accessor_confined_to_socket_layer() {
    let mut violations = Vec::new();

    for file in rust_files(PRODUCTION_DIRS) {
        if ALLOWED.contains(&file.relative.as_str()) {
            continue;
        }
        for (line_number, code) in production_lines(&file.content) {
            if code.contains(ACCESSOR) {
                violations.push(format!("{}:{} - {}", file.relative, line_number, code.trim()));
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ No-copy accessor used outside the socket hand-off:");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Use PathAddress::address_bytes() (returns a copy) instead.");
        panic!("Found {} confinement violation(s).", violations.len());
    }
}

#[test]
fn test_internal_accessor_is_not_public() {
    let files = rust_files(&["pathaddr/core/src/address"]);
    let path_rs = files
        .iter()
        .find(|f| f.relative.ends_with("address/path.rs"))
        .expect("path.rs not found");

    let declaration = production_lines(&path_rs.content)
        .into_iter()
        .find(|(_, code)| code.contains(&format!("fn {ACCESSOR}")))
        .expect("accessor declaration not found");

    assert!(
        declaration.1.trim_start().starts_with("pub(crate) fn"),
        "{ACCESSOR} must stay pub(crate), found: {}",
        declaration.1.trim()
    );
}
