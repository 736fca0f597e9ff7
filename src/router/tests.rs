use super::*;
use crate::winget::FixedProbe;
use serde_json::json;

const UNAVAILABLE: &str = "winget is not available on this system.";

fn offline() -> Winget {
    Winget::with_probe("opkg-test-no-such-winget-binary", FixedProbe(false))
}

fn broken() -> Winget {
    Winget::with_probe("opkg-test-no-such-winget-binary", FixedProbe(true))
}

fn run(args: impl Into<CommandArgs>) -> String {
    let mut sink = Vec::new();
    let reply = dispatch_with_sink(&offline(), args, &mut sink);
    assert!(sink.is_empty(), "no progress expected without winget");
    reply
}

#[test]
fn empty_args_show_usage() {
    for reply in [
        run(CommandArgs::Absent),
        run(None::<&str>),
        run(""),
        run(Vec::<String>::new()),
    ] {
        assert_eq!(reply, USAGE);
    }
}

#[test]
fn usage_lists_every_subcommand() {
    for name in ["search", "install", "update", "remove", "version"] {
        assert!(USAGE.contains(&format!("opkg {}", name)), "missing {}", name);
    }
}

#[test]
fn version_is_case_insensitive() {
    let expected = format!("OpenPack version {}", project_identity::VERSION);
    for token in ["version", "VERSION", "Version"] {
        assert_eq!(run([token]), expected);
    }
    assert!(run("VERSION").contains(project_identity::VERSION));
}

#[test]
fn version_ignores_trailing_args() {
    assert!(run("version extra").starts_with("OpenPack version "));
}

#[test]
fn missing_trailing_args_print_usage() {
    assert_eq!(run(["search"]), "Usage: opkg search <name>");
    assert_eq!(run(["install"]), "Usage: opkg install <id|name>");
    assert_eq!(run(["remove"]), "Usage: opkg remove <id|name>");
    assert_eq!(run("INSTALL"), "Usage: opkg install <id|name>");
}

#[test]
fn unknown_subcommand_gets_guidance() {
    assert_eq!(run(["frobnicate"]), "Unknown opkg command. Try: opkg");
    assert_eq!(run("list --all"), "Unknown opkg command. Try: opkg");
}

#[test]
fn delegating_subcommands_report_unavailable_tool() {
    assert_eq!(run("search git"), UNAVAILABLE);
    assert_eq!(run("install Git.Git"), UNAVAILABLE);
    assert_eq!(run("update"), UNAVAILABLE);
    assert_eq!(run("remove Git.Git"), UNAVAILABLE);
}

#[test]
fn json_payloads_route_like_strings() {
    assert_eq!(run(json!(["Search"])), "Usage: opkg search <name>");
    assert_eq!(run(json!("update")), UNAVAILABLE);
    assert_eq!(run(json!(null)), USAGE);
}

#[test]
fn spawn_failures_are_returned_as_text() {
    let winget = broken();
    for args in ["search git", "install Git.Git", "update", "remove Git.Git"] {
        let mut sink = Vec::new();
        let reply = dispatch_with_sink(&winget, args, &mut sink);
        assert!(reply.starts_with("Failed to run winget: "), "{}: {}", args, reply);
    }
}

#[test]
fn subcommand_parse_rejects_unknown_tokens() {
    assert_eq!("ReMoVe".parse::<Subcommand>().unwrap(), Subcommand::Remove);
    assert!(matches!(
        "frobnicate".parse::<Subcommand>(),
        Err(OpkgError::UnknownCommand(token)) if token == "frobnicate"
    ));
}

#[test]
fn prefixed_keeps_trailing_order() {
    let tail = vec!["Mozilla".to_string(), "Firefox".to_string()];
    assert_eq!(prefixed("uninstall", &tail), vec!["uninstall", "Mozilla", "Firefox"]);
}
