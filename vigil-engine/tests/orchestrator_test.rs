//! Orchestrator behaviour: eligibility, caching, concurrency, isolation,
//! and the exit gate, against real files on disk.

use vigil_core::config::VigilConfig;
use vigil_core::errors::EngineError;
use vigil_core::types::{AuditEvent, ExitStatus};
use vigil_engine::Orchestrator;
use vigil_storage::CacheStore;

fn event(path: &std::path::Path) -> AuditEvent {
    AuditEvent {
        tool_name: "Edit".to_string(),
        file_path: path.display().to_string(),
    }
}

fn orchestrator(config: VigilConfig) -> Orchestrator {
    Orchestrator::new(config, CacheStore::open_in_memory().unwrap()).unwrap()
}

#[tokio::test]
async fn clean_file_passes_with_sorted_check_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("components").join("Widget.tsx");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "export const Widget = () => {\n  return null;\n};\n").unwrap();

    let report = orchestrator(VigilConfig::default())
        .run(&event(&file))
        .await
        .unwrap();

    assert_eq!(report.exit, ExitStatus::Success);
    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    // Prose never applies to a .tsx file: skipped entirely, not reported.
    assert!(!names.contains(&"prose"));
}

#[tokio::test]
async fn second_run_is_served_from_cache_with_identical_violations() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("components").join("myWidget.tsx");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "export const myWidget = () => {\n  return null;\n};\n").unwrap();

    let orchestrator = orchestrator(VigilConfig::default());

    let first = orchestrator.run(&event(&file)).await.unwrap();
    assert!(first.results.iter().all(|r| !r.from_cache));

    let second = orchestrator.run(&event(&file)).await.unwrap();
    assert!(second.results.iter().all(|r| r.from_cache));
    assert_eq!(first.exit, second.exit);
    for (a, b) in first.results.iter().zip(second.results.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.violations, b.violations);
    }
}

#[tokio::test]
async fn content_change_invalidates_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("utils").join("math.ts");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "export const add = (a, b) => a + b;\n").unwrap();

    let orchestrator = orchestrator(VigilConfig::default());
    orchestrator.run(&event(&file)).await.unwrap();

    std::fs::write(&file, "export const add = (a, b) => a + b + 0;\n").unwrap();
    let rerun = orchestrator.run(&event(&file)).await.unwrap();
    assert!(rerun.results.iter().all(|r| !r.from_cache));
}

#[tokio::test]
async fn error_violation_fails_the_gate() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("run.ts");
    std::fs::write(&file, "eval(payload);\n").unwrap();

    let report = orchestrator(VigilConfig::default())
        .run(&event(&file))
        .await
        .unwrap();
    assert_eq!(report.exit, ExitStatus::CheckFailure);
    assert!(report.counts.errors >= 1);
}

#[tokio::test]
async fn crashing_tool_does_not_abort_sibling_checks() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.ts");
    std::fs::write(&file, "export const app = () => {};\n").unwrap();

    let config = VigilConfig::from_toml(
        r#"
        [[tools]]
        name = "ghost"
        command = "vigil-no-such-binary-anywhere"
        "#,
    )
    .unwrap();

    let report = orchestrator(config).run(&event(&file)).await.unwrap();

    let ghost = report.results.iter().find(|r| r.name == "ghost").unwrap();
    assert!(!ghost.passed);
    assert!(ghost.error.is_some());

    // Scanner families all completed and are reported.
    assert!(report.results.iter().any(|r| r.name == "naming"));
    assert!(report.results.iter().any(|r| r.name == "security"));
    assert_eq!(report.exit, ExitStatus::CheckFailure);
}

#[tokio::test]
async fn faulted_results_are_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.ts");
    std::fs::write(&file, "export const app = () => {};\n").unwrap();

    let config = VigilConfig::from_toml(
        r#"
        [[tools]]
        name = "ghost"
        command = "vigil-no-such-binary-anywhere"
        "#,
    )
    .unwrap();
    let orchestrator = orchestrator(config);

    orchestrator.run(&event(&file)).await.unwrap();
    let second = orchestrator.run(&event(&file)).await.unwrap();

    let ghost = second.results.iter().find(|r| r.name == "ghost").unwrap();
    assert!(!ghost.from_cache);
    let naming = second.results.iter().find(|r| r.name == "naming").unwrap();
    assert!(naming.from_cache);
}

#[tokio::test]
async fn passing_and_failing_tools_map_to_verdicts() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.ts");
    std::fs::write(&file, "export const app = () => {};\n").unwrap();

    let config = VigilConfig::from_toml(
        r#"
        [[tools]]
        name = "always-green"
        command = "true"

        [[tools]]
        name = "always-red"
        command = "false"
        "#,
    )
    .unwrap();

    let report = orchestrator(config).run(&event(&file)).await.unwrap();

    let green = report.results.iter().find(|r| r.name == "always-green").unwrap();
    assert!(green.passed && green.error.is_none());
    let red = report.results.iter().find(|r| r.name == "always-red").unwrap();
    assert!(!red.passed && red.error.is_none());
    assert_eq!(report.exit, ExitStatus::CheckFailure);
}

#[tokio::test]
async fn unaudited_tool_event_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.ts");
    std::fs::write(&file, "eval(payload);\n").unwrap();

    let orchestrator = orchestrator(VigilConfig::default());
    let event = AuditEvent {
        tool_name: "Read".to_string(),
        file_path: file.display().to_string(),
    };
    let report = orchestrator.run(&event).await.unwrap();
    assert_eq!(report.exit, ExitStatus::Success);
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn unreadable_file_is_a_configuration_error() {
    let orchestrator = orchestrator(VigilConfig::default());
    let event = AuditEvent {
        tool_name: "Edit".to_string(),
        file_path: "/definitely/not/a/real/file.ts".to_string(),
    };
    let err = orchestrator.run(&event).await.unwrap_err();
    assert_eq!(err.exit_status(), ExitStatus::ConfigError);
    assert!(matches!(err, EngineError::Config(_)));
}

#[tokio::test]
async fn empty_file_path_is_a_configuration_error() {
    let orchestrator = orchestrator(VigilConfig::default());
    let event = AuditEvent {
        tool_name: "Edit".to_string(),
        file_path: String::new(),
    };
    let err = orchestrator.run(&event).await.unwrap_err();
    assert_eq!(err.exit_status(), ExitStatus::ConfigError);
}

#[tokio::test]
async fn timed_out_tool_is_recorded_not_hung() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.ts");
    std::fs::write(&file, "export const app = () => {};\n").unwrap();

    // `tail -f <file>` follows the audited file forever, so only the
    // timeout can end the check.
    let config = VigilConfig::from_toml(
        r#"
        [[tools]]
        name = "sleeper"
        command = "tail"
        args = ["-f"]
        timeout_secs = 1
        "#,
    )
    .unwrap();

    let start = std::time::Instant::now();
    let report = orchestrator(config).run(&event(&file)).await.unwrap();
    assert!(start.elapsed() < std::time::Duration::from_secs(10));

    let sleeper = report.results.iter().find(|r| r.name == "sleeper").unwrap();
    assert!(!sleeper.passed);
    assert!(sleeper.error.as_deref().unwrap().contains("timed out"));
}
