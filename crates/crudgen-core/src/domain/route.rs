//! Idempotent route-registry patching.
//!
//! The route registry is a shared text artifact: import-style `use ...;`
//! lines at the top, `Route::resource(...)` lines below. The invariant it
//! must keep across generator runs is "each import and each resource line
//! appears at most once". [`patch`] enforces that with an exists-check
//! before each insertion, so re-running the generator for the same
//! resource leaves the file byte-identical.

/// Outcome of one patch operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePatch {
    pub text: String,
    pub import_inserted: bool,
    pub route_inserted: bool,
}

/// Patch the registry text with an import line and a resource line.
///
/// - The import is inserted directly after the last existing import
///   statement, or prepended before all content when none exist.
/// - The resource line is appended at end of content with a trailing
///   newline.
/// - Either line already present (exact substring) is skipped, reported
///   through the corresponding flag.
pub fn patch(route_text: &str, import_line: &str, resource_line: &str) -> RoutePatch {
    let mut text = route_text.to_string();

    let import_inserted = if text.contains(import_line) {
        false
    } else {
        insert_import(&mut text, import_line);
        true
    };

    let route_inserted = if text.contains(resource_line) {
        false
    } else {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(resource_line);
        text.push('\n');
        true
    };

    RoutePatch {
        text,
        import_inserted,
        route_inserted,
    }
}

/// Insert `import_line` after the last line that is an import statement.
fn insert_import(text: &mut String, import_line: &str) {
    match last_import_end(text) {
        Some(end) => {
            text.insert_str(end, &format!("\n{import_line}"));
        }
        None => {
            text.insert_str(0, &format!("{import_line}\n"));
        }
    }
}

/// Byte offset just past the last import-statement line, if any.
///
/// A line counts as an import statement when it starts with `use ` at
/// column zero and ends with `;` (line-anchored, so an indented `use`
/// inside a closure body does not match).
fn last_import_end(text: &str) -> Option<usize> {
    let mut offset = 0;
    let mut last_end = None;

    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if content.starts_with("use ") && content.trim_end().ends_with(';') {
            last_end = Some(offset + content.len());
        }
        offset += line.len();
    }

    last_end
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\nuse App\\Http\\Controllers\\Auth\\AuthController;\n\nRoute::resource('users', UsersController::class);\n";

    #[test]
    fn inserts_import_after_last_use_statement() {
        let patched = patch(
            REGISTRY,
            "use App\\Http\\Controllers\\Project\\ProjectController;",
            "Route::resource('projects', ProjectController::class);",
        );
        assert!(patched.import_inserted);
        assert!(patched.route_inserted);

        let auth = patched
            .text
            .find("AuthController;")
            .expect("existing import kept");
        let new_import = patched
            .text
            .find("ProjectController;")
            .expect("import inserted");
        let route = patched
            .text
            .find("Route::resource('projects'")
            .expect("route appended");
        assert!(auth < new_import, "new import follows the last existing one");
        assert!(new_import < route, "route goes at the end");
        assert!(patched.text.ends_with(");\n"));
    }

    #[test]
    fn prepends_import_when_no_imports_exist() {
        let patched = patch(
            "Route::resource('users', UsersController::class);\n",
            "use App\\Http\\Controllers\\Project\\ProjectController;",
            "Route::resource('projects', ProjectController::class);",
        );
        assert!(patched
            .text
            .starts_with("use App\\Http\\Controllers\\Project\\ProjectController;\n"));
    }

    #[test]
    fn patching_twice_is_idempotent() {
        let import = "use App\\Http\\Controllers\\Project\\ProjectController;";
        let route = "Route::resource('projects', ProjectController::class);";

        let first = patch(REGISTRY, import, route);
        let second = patch(&first.text, import, route);

        assert!(!second.import_inserted);
        assert!(!second.route_inserted);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn existing_route_is_a_no_op() {
        let text = "use X;\nRoute::resource('projects', ProjectsController::class);\n";
        let patched = patch(
            text,
            "use X;",
            "Route::resource('projects', ProjectsController::class);",
        );
        assert!(!patched.import_inserted);
        assert!(!patched.route_inserted);
        assert_eq!(patched.text, text);
    }

    #[test]
    fn empty_registry_gets_both_lines() {
        let patched = patch("", "use A;", "Route::resource('a', AController::class);");
        assert_eq!(
            patched.text,
            "use A;\nRoute::resource('a', AController::class);\n"
        );
    }

    #[test]
    fn indented_use_inside_body_is_not_an_anchor() {
        let text = "Route::group(function () {\n    use Something;\n});\n";
        let patched = patch(text, "use A;", "Route::resource('a', AController::class);");
        assert!(patched.text.starts_with("use A;\n"), "{}", patched.text);
    }

    #[test]
    fn appends_newline_before_route_when_missing() {
        let patched = patch(
            "use A;",
            "use A;",
            "Route::resource('a', AController::class);",
        );
        assert_eq!(
            patched.text,
            "use A;\nRoute::resource('a', AController::class);\n"
        );
    }
}
