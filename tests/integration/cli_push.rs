#![cfg(unix)]

use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn force_pulls_tags_and_pushes() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .arg("--container-tool")
        .arg(&tool)
        .args(["-f", "-i", "dev.registry.io/team/app:1", "-d", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed prod.registry.io:5000/app:1"));

    assert_eq!(
        env.calls(),
        vec![
            "pull dev.registry.io/team/app:1",
            "tag dev.registry.io/team/app:1 prod.registry.io:5000/app:1",
            "push prod.registry.io:5000/app:1",
        ]
    );
}

#[test]
fn logs_container_tool_output() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["--force", "-i", "nginx", "-d", "dev"])
        .assert()
        .success()
        .stderr(predicate::str::contains("pulling image"))
        .stderr(predicate::str::contains("ok pull"))
        .stderr(predicate::str::contains("ok push"));
}

#[test]
fn container_tool_from_environment() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .env("REPUSH_CONTAINER_TOOL", &tool)
        .args(["-f", "-i", "nginx", "-d", "dev"])
        .assert()
        .success();

    assert_eq!(env.calls().len(), 3);
}

#[test]
fn confirmation_accepts_y() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["-i", "nginx", "-d", "dev"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Generated destination image: dev.registry.io/team/nginx",
        ));

    assert_eq!(env.calls().len(), 3);
}

#[test]
fn confirmation_declined_aborts() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["-i", "nginx", "-d", "dev"])
        .write_stdin("no\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("push aborted by user"));

    assert!(env.calls().is_empty());
}

#[test]
fn confirmation_eof_aborts() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["-i", "nginx", "-d", "dev"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("push aborted by user"));

    assert!(env.calls().is_empty());
}

#[test]
fn dry_run_does_not_invoke_tool() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(None);

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["-n", "-i", "nginx", "-d", "dev"])
        .assert()
        .success();

    assert!(env.calls().is_empty());
}

#[test]
fn pull_failure_stops_pipeline() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(Some("pull"));

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["-f", "-i", "nginx", "-d", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pull failed: denied: pull"));

    assert_eq!(env.calls(), vec!["pull nginx"]);
}

#[test]
fn push_failure_is_reported() {
    let env = TestEnv::with_sample_config();
    let tool = env.fake_tool(Some("push"));

    env.cmd()
        .arg("-c")
        .arg(&tool)
        .args(["-f", "-i", "nginx", "-d", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("push failed"));

    assert_eq!(env.calls().len(), 3);
}

#[test]
fn missing_container_tool_is_reported() {
    let env = TestEnv::with_sample_config();

    env.cmd()
        .args(["-c", "repush-no-such-tool", "-f", "-i", "nginx", "-d", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "container tool 'repush-no-such-tool' is not installed",
        ));
}
