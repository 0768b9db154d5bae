//! Layout checks for the `unit` test target
//!
//! `tests/unit/main.rs` is the crate root of that target, so a test file is
//! only compiled once its directory's `mod.rs` (or the root) declares it.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Paths of every .rs file below `root`, relative to it and with `/` separators
    fn rust_files(root: &Path) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut pending = vec![PathBuf::from(root)];
        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir)
                .unwrap_or_else(|error| panic!("cannot read {}: {error}", dir.display()));
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).unwrap_or(&path);
                    let components: Vec<_> = relative
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    found.insert(components.join("/"));
                }
            }
        }
        found
    }

    fn is_module_root(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Tests every source file with logic has a unit test file at the same relative path
    // Verified by deleting tests/unit/seam/roll_patch.rs
    #[test]
    fn test_sources_have_unit_files() {
        let tests = rust_files(Path::new(UNIT_ROOT));
        let missing: Vec<_> = rust_files(Path::new(SOURCE_ROOT))
            .into_iter()
            .filter(|path| !is_module_root(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_ROOT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit file outlives the source file it covers
    // Verified by adding tests/unit/seam/spiral.rs
    #[test]
    fn test_unit_files_have_sources() {
        let sources = rust_files(Path::new(SOURCE_ROOT));
        let orphans: Vec<_> = rust_files(Path::new(UNIT_ROOT))
            .into_iter()
            .filter(|path| path != "main.rs" && !sources.contains(path))
            .map(|path| format!("  - {UNIT_ROOT}/{path}"))
            .collect();

        assert!(
            orphans.is_empty(),
            "Unit test files without a matching source file:\n{}",
            orphans.join("\n")
        );
    }

    // Tests each unit file is declared by its parent so the target compiles it
    // Verified by removing `pub mod blend;` from tests/unit/seam/mod.rs
    #[test]
    fn test_unit_files_are_declared() {
        let root = Path::new(UNIT_ROOT);
        let mut undeclared = Vec::new();

        for path in rust_files(root) {
            if path == "main.rs" {
                continue;
            }
            let (parent, module) = match path.rsplit_once('/') {
                Some((dir, file)) if file == "mod.rs" => match dir.rsplit_once('/') {
                    Some((outer, name)) => (format!("{outer}/mod.rs"), name.to_string()),
                    None => (String::from("main.rs"), dir.to_string()),
                },
                Some((dir, file)) => (
                    format!("{dir}/mod.rs"),
                    file.trim_end_matches(".rs").to_string(),
                ),
                None => (
                    String::from("main.rs"),
                    path.trim_end_matches(".rs").to_string(),
                ),
            };

            let declarations = fs::read_to_string(root.join(&parent)).unwrap_or_default();
            let declared = declarations.lines().map(str::trim).any(|line| {
                line == format!("mod {module};") || line == format!("pub mod {module};")
            });
            if !declared {
                undeclared.push(format!("  - {UNIT_ROOT}/{path} (expected in {parent})"));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every test file outside the module roots defines at least one test
    // Verified by stripping #[test] from tests/transform.rs
    #[test]
    fn test_test_files_define_tests() {
        let empty: Vec<_> = rust_files(Path::new("tests"))
            .into_iter()
            .filter(|path| !path.ends_with("main.rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
