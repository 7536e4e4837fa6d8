//! End-to-end CLI tests via `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCHEMA: &str = r#"
[tables.projects]
columns = [
    { name = "id", type = "bigint" },
    { name = "title", type = "varchar", max_length = 255 },
    { name = "status", type = "enum", values = ["open", "closed"] },
    { name = "notes", type = "text", nullable = true },
    { name = "created_at", type = "timestamp", nullable = true },
]
"#;

fn crudgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("crudgen").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

fn write_schema(dir: &TempDir) {
    std::fs::write(dir.path().join("schema.toml"), SCHEMA).unwrap();
}

#[test]
fn help_and_version_succeed() {
    Command::cargo_bin("crudgen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("rules"));

    Command::cargo_bin("crudgen")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    Command::cargo_bin("crudgen")
        .unwrap()
        .assert()
        .failure()
        .code(2);
}

#[test]
fn make_generates_the_artifact_family() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    crudgen(&dir)
        .args(["make", "Project", "--schema", "schema.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ProjectController.php"));

    let controller = dir
        .path()
        .join("app/Http/Controllers/Project/ProjectController.php");
    assert!(controller.exists());
    let content = std::fs::read_to_string(&controller).unwrap();
    assert!(content.contains("namespace App\\Http\\Controllers\\Project;"));

    let create = std::fs::read_to_string(
        dir.path()
            .join("app/Http/Requests/Project/CreateProjectRequest.php"),
    )
    .unwrap();
    assert!(create.contains("'title' => 'required|string|max:255',"));
    assert!(create.contains("'status.in' => 'Status must be one of the following: open, closed.'"));

    let routes = std::fs::read_to_string(dir.path().join("routes/api.php")).unwrap();
    assert!(routes.contains("Route::resource('projects', ProjectController::class);"));
}

#[test]
fn make_twice_leaves_the_route_registry_unchanged() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    crudgen(&dir)
        .args(["make", "Project", "--schema", "schema.toml"])
        .assert()
        .success();
    let first = std::fs::read_to_string(dir.path().join("routes/api.php")).unwrap();

    crudgen(&dir)
        .args(["make", "Project", "--schema", "schema.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("route already registered"));
    let second = std::fs::read_to_string(dir.path().join("routes/api.php")).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first
            .matches("Route::resource('projects', ProjectController::class);")
            .count(),
        1
    );
}

#[test]
fn make_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    crudgen(&dir)
        .args(["make", "Project", "--schema", "schema.toml", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"));

    assert!(!dir.path().join("app").exists());
    assert!(!dir.path().join("routes/api.php").exists());
}

#[test]
fn make_without_schema_warns_and_generates_empty_validation() {
    let dir = TempDir::new().unwrap();

    crudgen(&dir)
        .args(["make", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation rules will be empty"));

    let create = std::fs::read_to_string(
        dir.path()
            .join("app/Http/Requests/Widget/CreateWidgetRequest.php"),
    )
    .unwrap();
    assert!(!create.contains("required"));
}

#[test]
fn no_color_env_counts_by_presence_not_value() {
    // no-color.org: any value, even one that is not a valid bool, means
    // "disable color" - it must never trip argument parsing
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    let mut cmd = Command::cargo_bin("crudgen").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "yes please");
    cmd.args(["make", "Project", "--schema", "schema.toml", "--dry-run"])
        .assert()
        .success();
}

#[test]
fn make_with_invalid_name_exits_2() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    crudgen(&dir)
        .args(["make", "9lives", "--schema", "schema.toml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid resource name"));
}

#[test]
fn make_with_missing_schema_file_exits_3() {
    let dir = TempDir::new().unwrap();

    crudgen(&dir)
        .args(["make", "Project", "--schema", "missing.toml"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn rules_prints_the_derived_maps() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    crudgen(&dir)
        .args(["rules", "projects", "--schema", "schema.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("required|string|max:255"))
        .stdout(predicate::str::contains("title.required"))
        .stdout(predicate::str::contains("Title is required."))
        // system columns carry no rules
        .stdout(predicate::str::contains("created_at").not());
}

#[test]
fn rules_with_unknown_table_warns_and_succeeds() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);

    crudgen(&dir)
        .args(["rules", "widgets", "--schema", "schema.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn config_file_overrides_the_layout() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir);
    std::fs::write(
        dir.path().join("crudgen.toml"),
        "[layout]\nbase_path = \"src\"\nroutes_file = \"routes/web.php\"\n",
    )
    .unwrap();

    crudgen(&dir)
        .args([
            "make", "Project", "--schema", "schema.toml", "--config", "crudgen.toml",
        ])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("src/Http/Controllers/Project/ProjectController.php")
        .exists());
    assert!(dir.path().join("routes/web.php").exists());
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("crudgen")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen"));
}
