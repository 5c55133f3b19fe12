//! Structural tests for architectural boundary enforcement.
//!
//! These scan source files to keep the layer boundaries intact: services
//! depend on ports only, adapters never print, and commands render through
//! the `Renderer`.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

fn src_dir(parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), |p, part| {
            p.join(part)
        })
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Track brace depth and report whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-comment lines outside `#[cfg(test)]` blocks, with 1-based line numbers.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut tracker = CfgTestTracker::new();
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            let comment = trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*');
            (!in_test && !comment).then(|| (i + 1, line.to_string()))
        })
        .collect()
}

fn scan(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = relative(&file);
        for (lineno, line) in production_lines(&file) {
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!("{rel}:{lineno}: `{pattern}`: {}", line.trim()));
                }
            }
        }
    }
    violations
}

#[test]
fn application_has_no_outer_layer_imports() {
    let violations = scan(
        &src_dir(&["application"]),
        &["crate::infra", "crate::output", "crate::commands", "crate::app::"],
    );
    assert!(
        violations.is_empty(),
        "application/ must depend on domain/ and its own ports only:\n{}",
        violations.join("\n")
    );
}

#[test]
fn domain_is_free_of_io() {
    let violations = scan(
        &src_dir(&["domain"]),
        &["crate::application", "crate::infra", "reqwest", "std::fs", "println!"],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay pure:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = scan(&src_dir(&["infra"]), &["crate::commands", "crate::output"]);
    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let violations = scan(&src_dir(&["infra"]), &["println!", "eprintln!"]);
    assert!(
        violations.is_empty(),
        "infra/ must not use println!/eprintln! outside #[cfg(test)]:\n{}",
        violations.join("\n")
    );
}

#[test]
fn services_take_ports_not_clients() {
    let services = src_dir(&["application", "services"]);
    let concrete = ["GraphqlClient", "MachinesClient", "DialoguerPrompter", "YamlConfigStore"];
    let mut violations = Vec::new();
    for file in collect_rs_files(&services) {
        let rel = relative(&file);
        for (lineno, line) in production_lines(&file) {
            for name in concrete {
                if line.contains(name) {
                    violations.push(format!("{rel}:{lineno}: concrete type `{name}`: {}", line.trim()));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "services must be written against port traits:\n{}",
        violations.join("\n")
    );
}

#[test]
fn commands_render_through_renderer() {
    let violations = scan(&src_dir(&["commands"]), &["json: bool", "serde_json::", "println!"]);
    assert!(
        violations.is_empty(),
        "commands/ must render via app.renderer():\n{}",
        violations.join("\n")
    );
}
