use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn dsw_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dsw").expect("Failed to find dsw binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper function to extract the project id from command output
fn extract_id_from_output(output: &str) -> String {
    for line in output.lines() {
        if let Some(id) = line.trim().strip_prefix("**ID:** ") {
            return id.trim().to_string();
        }
    }
    panic!("Could not extract project id from output: {output}");
}

#[test]
fn test_cli_create_project_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "create",
            "Kundenabwanderung",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kundenabwanderung"))
        .stdout(predicate::str::contains("angelegt"))
        .stdout(predicate::str::contains("Business Understanding"));
}

#[test]
fn test_cli_create_project_with_options() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "create",
            "Mietpreise Berlin",
            "--description",
            "Vorhersage von Angebotsmieten",
            "--type",
            "regression",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mietpreise Berlin"))
        .stdout(predicate::str::contains("Vorhersage von Angebotsmieten"))
        .stdout(predicate::str::contains("regression"));
}

#[test]
fn test_cli_create_project_rejects_unknown_type() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "create",
            "Projekt",
            "--type",
            "zeitreihe",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_projects() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keine Projekte vorhanden."));
}

#[test]
fn test_cli_list_projects_after_create() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Listenprojekt"])
        .assert()
        .success();

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Projekte (1)"))
        .stdout(predicate::str::contains("Listenprojekt"));
}

#[test]
fn test_cli_list_examples() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "examples",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("example-iris"))
        .stdout(predicate::str::contains("example-titanic"));
}

#[test]
fn test_cli_show_example_project() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "show",
            "example-iris",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("**ID:** example-iris"))
        .stdout(predicate::str::contains("## Phasen"));
}

#[test]
fn test_cli_show_unknown_project() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "project",
            "show",
            "project-0-0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kein Projekt"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Wegwerfprojekt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let project_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "delete", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nicht bestätigt"));

    dsw_cmd()
        .args([
            "--database-file",
            db_arg,
            "project",
            "delete",
            &project_id,
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("gelöscht"));

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keine Projekte vorhanden."));
}

#[test]
fn test_cli_phase_complete_shows_progress() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Phasenprojekt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let project_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    dsw_cmd()
        .args(["--database-file", db_arg, "phase", "complete", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Abgeschlossen"))
        .stdout(predicate::str::contains("17%"));
}

#[test]
fn test_cli_phase_goto_rejects_unknown_phase() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Projekt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let project_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    dsw_cmd()
        .args([
            "--database-file",
            db_arg,
            "phase",
            "goto",
            &project_id,
            "datenphase",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_phase_guide() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dsw_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "phase",
            "guide",
            "example-iris",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Ziele"))
        .stdout(predicate::str::contains("## Nächste Schritte"));
}

#[test]
fn test_cli_feature_add_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Featureprojekt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let project_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    dsw_cmd()
        .args([
            "--database-file",
            db_arg,
            "feature",
            "add",
            &project_id,
            "Alter",
            "--type",
            "numerisch",
            "--description",
            "Alter in Jahren",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alter"));

    dsw_cmd()
        .args(["--database-file", db_arg, "feature", "list", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Features (1)"))
        .stdout(predicate::str::contains("Alter in Jahren"));
}

#[test]
fn test_cli_feature_add_to_example_materializes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    dsw_cmd()
        .args([
            "--database-file",
            db_arg,
            "feature",
            "add",
            "example-iris",
            "Blattbreite",
            "--type",
            "numerisch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("als eigenes Projekt übernommen"))
        .stdout(predicate::str::contains("Neue Projekt-ID"));

    // The materialized copy is now a stored project
    dsw_cmd()
        .args(["--database-file", db_arg, "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Projekte (1)"));
}

#[test]
fn test_cli_clone_example() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "clone", "example-titanic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kopie: "));

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Projekte (1)"));
}

#[test]
fn test_cli_export_and_import_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let export_path = temp_dir.path().join("projekt.mltutor");

    let output = dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Transferprojekt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let project_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    dsw_cmd()
        .args([
            "--database-file",
            db_arg,
            "project",
            "export",
            &project_id,
            "--output",
            export_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("exportiert"));

    dsw_cmd()
        .args([
            "--database-file",
            db_arg,
            "project",
            "import",
            export_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transferprojekt"));

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Projekte (2)"));
}

#[test]
fn test_cli_workspace_status_and_onboard() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    dsw_cmd()
        .args(["--database-file", db_arg, "workspace", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Workspace"))
        .stdout(predicate::str::contains("**Onboarding:** offen"));

    dsw_cmd()
        .args(["--database-file", db_arg, "workspace", "onboard"])
        .assert()
        .success();

    dsw_cmd()
        .args(["--database-file", db_arg, "workspace", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Onboarding:** abgeschlossen"));
}

#[test]
fn test_cli_workspace_reset_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "create", "Projekt"])
        .assert()
        .success();

    dsw_cmd()
        .args(["--database-file", db_arg, "workspace", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nicht bestätigt"));

    dsw_cmd()
        .args(["--database-file", db_arg, "workspace", "reset", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zurückgesetzt"));

    dsw_cmd()
        .args(["--database-file", db_arg, "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keine Projekte vorhanden."));
}

#[test]
fn test_cli_help_output() {
    dsw_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("phase"))
        .stdout(predicate::str::contains("feature"))
        .stdout(predicate::str::contains("workspace"));
}

#[test]
fn test_cli_project_help() {
    dsw_cmd()
        .args(["project", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage projects"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("examples"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_cli_version_output() {
    dsw_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dsw "));
}
