//! End-to-end builds against a fake pkgbuild.
#![cfg(unix)]

mod common;

use common::{FakePkgbuild, payload_and_output};
use pkg_packager::packager::{
    BUILD_FAILURE_MESSAGE, LAUNCH_FAILURE_MESSAGE, LogAccumulator, PackageConfigBuilder, Packager,
};

#[test]
fn builds_package_and_logs_tool_output() {
    let fake = FakePkgbuild::install();
    let work = tempfile::tempdir().unwrap();
    let (source, output) = payload_and_output(work.path());

    let log = LogAccumulator::new();
    let packager = Packager::new(log.clone()).with_tool(fake.path());
    let config = PackageConfigBuilder::new()
        .source_path(&source)
        .output_path(&output)
        .package_identifier("com.example.tool")
        .package_version("1.2.3")
        .output_package_name("Tool")
        .build();

    let result = packager.build(&config);

    let expected = format!("{}/Tool.pkg", output.display());
    assert!(result.is_success(), "{}", log.contents());
    assert!(result.message().contains(&expected));
    assert!(output.join("Tool.pkg").exists());

    assert_eq!(
        fake.recorded_args(),
        vec![
            "--root".to_string(),
            source.display().to_string(),
            "--identifier".into(),
            "com.example.tool".into(),
            "--version".into(),
            "1.2.3".into(),
            "--install-location".into(),
            "/Applications".into(),
            expected.clone(),
        ]
    );

    let contents = log.contents();
    assert!(contents.contains("pkgbuild: Inferring bundle components"));
    assert!(contents.contains(&format!("pkgbuild: Wrote package to {expected}")));
}

#[test]
fn stages_postinstall_for_the_tool_and_removes_it() {
    let fake = FakePkgbuild::install();
    let work = tempfile::tempdir().unwrap();
    let staging_root = tempfile::tempdir().unwrap();
    let (source, output) = payload_and_output(work.path());

    let packager = Packager::new(LogAccumulator::new())
        .with_tool(fake.path())
        .with_temp_root(staging_root.path());
    let config = PackageConfigBuilder::new()
        .source_path(&source)
        .output_path(&output)
        .postinstall_script("#!/bin/bash\nlaunchctl load /Library/LaunchAgents/tool.plist\n")
        .build();

    assert!(packager.build(&config).is_success());

    let args = fake.recorded_args();
    let scripts = args
        .iter()
        .position(|arg| arg == "--scripts")
        .expect("--scripts passed");
    assert_eq!(scripts, args.len() - 3);
    assert!(args[scripts + 1].ends_with("/scripts"));

    assert_eq!(
        fake.staged_postinstall().as_deref(),
        Some("#!/bin/bash\nlaunchctl load /Library/LaunchAgents/tool.plist\n")
    );
    assert!(fake.staged_executable());

    // Nothing is left behind in the staging root.
    assert_eq!(std::fs::read_dir(staging_root.path()).unwrap().count(), 0);
}

#[test]
fn failing_tool_keeps_detail_in_the_log() {
    let fake = FakePkgbuild::install();
    fake.fail_runs();
    let work = tempfile::tempdir().unwrap();
    let staging_root = tempfile::tempdir().unwrap();
    let (source, output) = payload_and_output(work.path());

    let log = LogAccumulator::new();
    let packager = Packager::new(log.clone())
        .with_tool(fake.path())
        .with_temp_root(staging_root.path());
    let config = PackageConfigBuilder::new()
        .source_path(&source)
        .output_path(&output)
        .use_postinstall_script(true)
        .build();

    let result = packager.build(&config);

    assert!(!result.is_success());
    assert_eq!(result.message(), BUILD_FAILURE_MESSAGE);
    assert!(!result.message().contains("simulated failure"));
    assert!(log.contents().contains("pkgbuild: error: simulated failure"));
    assert_eq!(std::fs::read_dir(staging_root.path()).unwrap().count(), 0);
}

#[test]
fn missing_tool_is_a_launch_failure() {
    let work = tempfile::tempdir().unwrap();
    let (source, output) = payload_and_output(work.path());

    let log = LogAccumulator::new();
    let packager = Packager::new(log.clone()).with_tool(work.path().join("no-pkgbuild"));
    let config = PackageConfigBuilder::new()
        .source_path(&source)
        .output_path(&output)
        .build();

    let result = packager.build(&config);

    assert_eq!(result.message(), LAUNCH_FAILURE_MESSAGE);
    assert!(log.contents().contains("Error running pkgbuild:"));
}
