use super::batch::{EMPTY_OUTPUT, relay_output};
use super::install::install_args;
use super::*;

const MISSING_PROGRAM: &str = "opkg-test-no-such-winget-binary";

fn unavailable() -> Winget {
    Winget::with_probe(MISSING_PROGRAM, FixedProbe(false))
}

#[test]
fn unavailable_tool_is_reported_for_batch_runs() {
    let err = unavailable().run(&["search".to_string(), "git".to_string()]).unwrap_err();
    assert!(matches!(err, OpkgError::ToolUnavailable { .. }));
    assert_eq!(err.to_string(), "winget is not available on this system.");
}

#[test]
fn unavailable_tool_is_reported_for_installs_without_progress_output() {
    let mut sink = Vec::new();
    let err = unavailable()
        .install("Git.Git", &mut sink)
        .unwrap_err();
    assert_eq!(err.to_string(), "winget is not available on this system.");
    assert!(sink.is_empty());
}

#[test]
fn spawn_failure_is_reported_for_batch_runs() {
    let winget = Winget::with_probe(MISSING_PROGRAM, FixedProbe(true));
    let err = winget.run(&["source".to_string(), "update".to_string()]).unwrap_err();
    assert!(matches!(err, OpkgError::SpawnFailed { .. }));
    assert!(err.to_string().starts_with("Failed to run winget: "));
}

#[test]
fn spawn_failure_is_reported_for_installs() {
    let winget = Winget::with_probe(MISSING_PROGRAM, FixedProbe(true));
    let mut sink = Vec::new();
    let err = winget.install("Git.Git", &mut sink).unwrap_err();
    assert!(err.to_string().contains("Failed to run"));
    assert!(sink.is_empty());
}

#[test]
fn system_probe_rejects_missing_program() {
    assert!(!SystemProbe.is_available(MISSING_PROGRAM));
}

#[cfg(not(windows))]
#[test]
fn system_probe_rejects_non_windows_platforms() {
    assert!(!probe::platform_supported());
    assert!(!Winget::new().is_available());
}

#[test]
fn settings_choose_the_program() {
    let settings = Settings {
        winget_program: "C:\\bin\\winget.exe".to_string(),
        ..Settings::default()
    };
    assert_eq!(Winget::from_settings(&settings).program(), "C:\\bin\\winget.exe");
    assert_eq!(Winget::default().program(), "winget");
}

#[test]
fn relay_output_concatenates_stdout_then_stderr() {
    assert_eq!(relay_output(b"found 2\n", b"warning\n"), "found 2\nwarning");
}

#[test]
fn relay_output_trims_surrounding_whitespace() {
    assert_eq!(relay_output(b"\n\n  Name  Id\n", b""), "Name  Id");
}

#[test]
fn relay_output_uses_placeholder_when_empty() {
    assert_eq!(relay_output(b"", b""), EMPTY_OUTPUT);
    assert_eq!(relay_output(b" \r\n", b"\t"), "Done.");
}

#[test]
fn install_args_request_exact_unattended_install() {
    assert_eq!(
        install_args("Mozilla Firefox"),
        vec![
            "install",
            "--exact",
            "--id",
            "Mozilla Firefox",
            "--accept-source-agreements",
            "--accept-package-agreements",
        ]
    );
}
