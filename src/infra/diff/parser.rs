//! Unified-diff parsing into the domain model.
//!
//! Parsing itself is delegated to the `unidiff` crate; this module
//! converts its output into domain `PatchSet`/`Patch`/`Hunk` values
//! with marker tags split off the line text.

use crate::domain::{ContextError, DiffLine, Hunk, LineKind, Patch, PatchSet};

/// Parse unified-diff text into a `PatchSet`.
///
/// Tolerates multiple file sections and multiple hunks per section.
/// Empty input, input `unidiff` rejects, and input with no hunks at
/// all are `MalformedDiff`: without at least header + hunk lines the
/// smart-context path has nothing to work from.
pub fn parse_patch(patch_text: &str) -> Result<PatchSet, ContextError> {
    let trimmed = patch_text.trim();
    if trimmed.is_empty() {
        return Err(ContextError::MalformedDiff("diff text is empty".to_string()));
    }

    let mut parsed = unidiff::PatchSet::new();
    parsed
        .parse(trimmed)
        .map_err(|err| ContextError::MalformedDiff(err.to_string()))?;

    let mut patches = Vec::new();
    for file in parsed.files() {
        let hunks = file.hunks().iter().map(convert_hunk).collect();
        patches.push(Patch {
            old_path: strip_git_prefix(&file.source_file),
            new_path: strip_git_prefix(&file.target_file),
            hunks,
        });
    }

    if patches.iter().all(|patch| patch.hunks.is_empty()) {
        return Err(ContextError::MalformedDiff(
            "diff contains no hunks".to_string(),
        ));
    }

    Ok(PatchSet::new(patches))
}

fn strip_git_prefix(path: &str) -> String {
    path.trim_start_matches("a/")
        .trim_start_matches("b/")
        .to_string()
}

fn convert_hunk(hunk: &unidiff::Hunk) -> Hunk {
    let mut lines = Vec::with_capacity(hunk.lines().len());
    for line in hunk.lines() {
        let kind = if line.is_added() {
            LineKind::Added
        } else if line.is_removed() {
            LineKind::Removed
        } else if line.is_context() {
            LineKind::Context
        } else {
            // "\ No newline at end of file" and friends carry no row.
            continue;
        };
        lines.push(DiffLine::new(kind, line.value.as_str()));
    }

    Hunk {
        old_start: hunk.source_start,
        old_lines: hunk.source_length,
        new_start: hunk.target_start,
        new_lines: hunk.target_length,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_DIFF: &str = r#"diff --git a/src/main.rs b/src/main.rs
index abc123..def456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,4 @@
 fn main() {
-    println!("Hello");
+    println!("Hello, World!");
+    println!("Goodbye!");
 }
"#;

    #[test]
    fn test_parse_simple_diff() {
        let patch_set = parse_patch(SIMPLE_DIFF).unwrap();
        assert_eq!(patch_set.patches().len(), 1);

        let patch = &patch_set.patches()[0];
        assert_eq!(patch.old_path, "src/main.rs");
        assert_eq!(patch.new_path, "src/main.rs");
        assert_eq!(patch.hunks.len(), 1);

        let hunk = &patch.hunks[0];
        assert_eq!(hunk.old_start, 1);
        assert_eq!(hunk.old_lines, 3);
        assert_eq!(hunk.new_start, 1);
        assert_eq!(hunk.new_lines, 4);
        assert_eq!(hunk.lines.len(), 5);
        assert_eq!(hunk.lines[1].kind, LineKind::Removed);
        assert_eq!(hunk.lines[1].text, "    println!(\"Hello\");");
    }

    #[test]
    fn test_hunk_line_counts_match_header() {
        let patch_set = parse_patch(SIMPLE_DIFF).unwrap();
        let hunk = &patch_set.patches()[0].hunks[0];
        assert_eq!(hunk.old_side_count(), hunk.old_lines);
        assert_eq!(hunk.new_side_count(), hunk.new_lines);
    }

    #[test]
    fn test_new_side_reconstructs_new_file_region() {
        let patch_set = parse_patch(SIMPLE_DIFF).unwrap();
        let hunk = &patch_set.patches()[0].hunks[0];

        let new_region: Vec<&str> = hunk
            .lines
            .iter()
            .filter(|line| line.kind.counts_new())
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(
            new_region,
            vec![
                "fn main() {",
                "    println!(\"Hello, World!\");",
                "    println!(\"Goodbye!\");",
                "}",
            ]
        );
    }

    #[test]
    fn test_parse_multiple_files_and_hunks() {
        let diff = r#"diff --git a/file1.py b/file1.py
--- a/file1.py
+++ b/file1.py
@@ -1,2 +1,2 @@
 x = 1
-y = 2
+y = 3
@@ -10,2 +10,2 @@
 a = 1
-b = 2
+b = 3
diff --git a/file2.py b/file2.py
--- a/file2.py
+++ b/file2.py
@@ -1 +1,2 @@
 existing
+added
"#;
        let patch_set = parse_patch(diff).unwrap();
        assert_eq!(patch_set.patches().len(), 2);
        assert_eq!(patch_set.patches()[0].hunks.len(), 2);
        assert_eq!(patch_set.patches()[1].hunks.len(), 1);
        assert_eq!(patch_set.patches()[1].new_path, "file2.py");
    }

    #[test]
    fn test_empty_diff_is_malformed() {
        assert!(matches!(
            parse_patch("   \n  "),
            Err(ContextError::MalformedDiff(_))
        ));
    }

    #[test]
    fn test_headers_without_hunks_are_malformed() {
        let diff = "diff --git a/foo.py b/foo.py\nindex 123..456 100644\n";
        assert!(matches!(
            parse_patch(diff),
            Err(ContextError::MalformedDiff(_))
        ));
    }
}
