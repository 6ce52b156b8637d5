use ppa_cli::Console;
use ppa_core::{Phase, Session};
use ppa_dashboard::{ExportConfig, ExportKind};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn run_script(console: &mut Console, script: &str) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    console.run(Cursor::new(script), &mut out, true).unwrap();
    String::from_utf8(out).unwrap()
}

fn console_in(dir: &std::path::Path) -> Console {
    Console::new(Session::new(), ExportConfig::new().with_directory(dir))
}

#[test]
fn test_full_walkthrough_exports_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_in(dir.path());
    let script = "\
# phase 1
add Pass Accounting
add Walk the dog

# phase 2
select 1
rate difficulty 8
rate challenge 6
rate competence 4
rate importance 9
rate value-congruency 7
rate self_identity 5
rate progress 3
rate control 2
rate outcome 6
rate \"Time Adequacy\" 1

why 1 To feel secure
impact 1 2 -1
export csv
";
    let output = run_script(&mut console, script);

    assert!(output.contains("Added: Pass Accounting"));
    assert!(output.contains("> why 1 To feel secure"));
    assert!(output.contains("Wrote"));
    assert!(!output.contains("Error:"));
    assert_eq!(console.active_phase(), Phase::Dashboard);

    let path = ExportConfig::new()
        .with_directory(dir.path())
        .path_for(ExportKind::Csv);
    let csv = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        csv,
        "\
Name,Stress,Meaning,Efficacy,Structure,Community,Core Value
Pass Accounting,6.666666666666667,7.0,3.6666666666666665,1.5,5.0,To feel secure
Walk the dog,5.0,5.0,5.0,5.0,5.0,N/A
"
    );
}

#[test]
fn test_errors_do_not_stop_the_script() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_in(dir.path());
    let output = run_script(&mut console, "delete 9\nrate nonsense 4\nadd Garden\n");

    assert_eq!(output.matches("Error:").count(), 2);
    assert!(output.contains("Added: Garden"));
    assert_eq!(console.session().project_count(), 1);
}

#[test]
fn test_guidance_for_early_phases() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_in(dir.path());
    let output = run_script(&mut console, "phase 2\nphase 4\nexport dot\n");

    assert!(output.contains("Please add projects in Phase 1 first."));
    assert!(output.contains("Need at least 2 projects."));
    assert!(output.contains("No data."));
    assert!(!ExportConfig::new()
        .with_directory(dir.path())
        .path_for(ExportKind::Dot)
        .exists());
}

#[test]
fn test_reset_and_quit() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_in(dir.path());
    let output = run_script(&mut console, "add a\nadd b\nreset\nquit\nadd c\n");

    assert!(output.contains("Simulation reset."));
    assert!(!output.contains("Added: c"));
    assert_eq!(console.session().project_count(), 0);
    assert_eq!(console.selected(), None);
}

#[test]
fn test_export_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = console_in(dir.path());
    let target = dir.path().join("nested").join("map.dot");
    let script = format!(
        "add a\nadd b\nimpact 1 2 1\nexport dot \"{}\"\n",
        target.display()
    );
    run_script(&mut console, &script);

    let dot = std::fs::read_to_string(&target).unwrap();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("\"a\" -> \"b\""));
}
