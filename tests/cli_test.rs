//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn hostdeps() -> Command {
    Command::cargo_bin("hostdeps").unwrap()
}

#[test]
fn help_lists_subcommands() {
    hostdeps()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("install-deps"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_works() {
    hostdeps()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostdeps"));
}

#[test]
fn unknown_group_is_rejected() {
    hostdeps()
        .args(["validate", "/tmp", "--group", "netscape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("netscape"));
}

#[test]
fn completions_generate_for_bash() {
    hostdeps()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hostdeps"));
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validating_an_empty_directory_succeeds() {
        let temp = TempDir::new().unwrap();
        hostdeps().arg("validate").arg(temp.path()).assert().success();
    }

    #[test]
    fn validating_a_missing_directory_fails() {
        hostdeps()
            .args(["validate", "/nonexistent/bundle-xyz"])
            .assert()
            .failure();
    }

    #[test]
    fn unprobeable_files_do_not_fail_validation() {
        // ldd exits non-zero on a file that is not a dynamic binary; the
        // probe degrades to an empty list instead of failing the run
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("libjunk.so.1"), b"not an elf").unwrap();

        hostdeps().arg("validate").arg(temp.path()).assert().success();
    }

    #[test]
    fn install_deps_dry_run_never_executes() {
        hostdeps()
            .args(["install-deps", "--dry-run"])
            .assert()
            .success();
    }

    #[test]
    fn install_deps_dry_run_prints_apt_commands_on_known_distros() {
        use hostdeps::catalog::Catalog;
        use hostdeps::host::distro;

        let known = distro::detect()
            .map(|info| {
                Catalog::load()
                    .unwrap()
                    .platform(&info.platform_id())
                    .is_some()
            })
            .unwrap_or(false);
        if !known {
            // nothing to assert on distributions outside the catalog
            return;
        }

        hostdeps()
            .args(["install-deps", "chromium", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("apt-get update"))
            .stdout(predicate::str::contains("--no-install-recommends"));
    }
}
