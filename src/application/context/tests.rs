use crate::application::context::*;
use crate::domain::{ContextConfig, ReviewFile};

const FUNCTION_OLD: &str = "\
def process(items):
    total = 1
    count = 0
    for item in items:
        if item is None:
            continue
        total += item
        count += 1
    if count == 0:
        return 0
    average = total / count
    scaled = average * 2
    offset = scaled + 2
    result = offset
    return result
";

const FUNCTION_NEW: &str = "\
def process(items):
    total = 0
    count = 0
    for item in items:
        if item is None:
            continue
        total += item
        count += 1
    if count == 0:
        return 0
    average = total / count
    scaled = average * 2
    offset = scaled + 1
    result = offset
    return result
";

const FUNCTION_PATCH: &str = "\
diff --git a/process.py b/process.py
--- a/process.py
+++ b/process.py
@@ -1,5 +1,5 @@
 def process(items):
-    total = 1
+    total = 0
     count = 0
     for item in items:
         if item is None:
@@ -9,7 +9,7 @@
     if count == 0:
         return 0
     average = total / count
     scaled = average * 2
-    offset = scaled + 2
+    offset = scaled + 1
     result = offset
     return result
";

fn function_file() -> ReviewFile {
    ReviewFile::new("process.py", FUNCTION_OLD, FUNCTION_NEW, FUNCTION_PATCH)
}

#[test]
fn test_two_hunks_in_one_function_merge_into_one_block() {
    let output = smart_context_strategy(&function_file(), &ContextConfig::default());

    // Exactly one scope block, not two.
    assert_eq!(output.matches("@@ -").count(), 1);
    assert!(output.starts_with("## process.py\n\n@@ -1,12 +1,15 @@\n"));

    // Both edits survive, in order, with the unedited span between them.
    let first_minus = output.find("-    total = 1").unwrap();
    let first_plus = output.find("+    total = 0").unwrap();
    let between = output.find("total += item").unwrap();
    let second_minus = output.find("-    offset = scaled + 2").unwrap();
    let second_plus = output.find("+    offset = scaled + 1").unwrap();
    assert!(first_minus < first_plus);
    assert!(first_plus < between);
    assert!(between < second_minus);
    assert!(second_minus < second_plus);
}

#[test]
fn test_scope_blocks_precede_fallback_blocks() {
    let old = "\
def handler(event):
    status = 400
    return status


LIMIT = 10
";
    let new = "\
def handler(event):
    status = 200
    return status


LIMIT = 20
";
    let patch = "\
diff --git a/mixed.py b/mixed.py
--- a/mixed.py
+++ b/mixed.py
@@ -1,3 +1,3 @@
 def handler(event):
-    status = 400
+    status = 200
     return status
@@ -6 +6 @@
-LIMIT = 10
+LIMIT = 20
";
    let file = ReviewFile::new("mixed.py", old, new, patch);
    let output = smart_context_strategy(&file, &ContextConfig::default());

    // The function edit resolves to a scope; the module-level constant
    // does not and is margin-expanded after the scope blocks.
    let scope_block = output.find("def handler(event):").unwrap();
    let fallback_header = output.find("@@ -6,1 +6,1 @@").unwrap();
    assert!(scope_block < fallback_header);
    assert!(output.contains("-LIMIT = 10"));
    assert!(output.contains("+LIMIT = 20"));
}

#[test]
fn test_smart_strategy_is_deterministic() {
    let file = function_file();
    let config = ContextConfig::default();
    let first = smart_context_strategy(&file, &config);
    let second = smart_context_strategy(&file, &config);
    assert_eq!(first, second);
}

#[test]
fn test_unparseable_diff_degrades_to_raw_patch() {
    let file = ReviewFile::new("broken.py", "a = 1\n", "a = 2\n", "not a diff at all");
    let output = smart_context_strategy(&file, &ContextConfig::default());
    assert_eq!(output, "## broken.py\n\nnot a diff at all");
}

#[test]
fn test_raw_patch_strategy_passes_patch_through() {
    let file = function_file();
    let output = raw_patch_strategy(&file);
    assert!(output.starts_with("## process.py\n\n"));
    assert!(output.contains("@@ -1,5 +1,5 @@"));
}
