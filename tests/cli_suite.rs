use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn pacwise() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pacwise"))
}

const PACMAN_SCRIPT: &str = r#"#!/bin/sh
echo "pacman $*" >> "@LOG@"
if [ -n "$MOCK_FAIL" ] && [ "$1" = "$MOCK_FAIL" ]; then
  exit 1
fi
case "$1" in
  -Ss)
    case "$2" in
      zzzz*) exit 1 ;;
    esac
    echo "extra/firefox 130.0-1"
    echo "    Fast, Private & Safe Web Browser"
    echo "extra/chromium 130.0.6723.58-1"
    echo "    A web browser built for speed, simplicity, and security"
    ;;
  -Sl)
    echo "extra firefox 130.0-1"
    echo "extra chromium 130.0.6723.58-1"
    ;;
  -Q)
    echo "vlc 3.0.21-1"
    echo "firefox 130.0-1"
    ;;
  -Qq)
    echo "vlc"
    echo "firefox"
    ;;
  -Qmq|-Qtdq)
    exit 1
    ;;
esac
exit 0
"#;

const YAY_SCRIPT: &str = r#"#!/bin/sh
echo "yay $*" >> "@LOG@"
case "$1" in
  -Ss)
    echo "aur/google-chrome 130.0.6723.58-1 (+2104 12.50)"
    echo "    The popular web browser by Google (Stable Channel)"
    echo "aur/google-chrome-dev 131.0.6778.3-1 (+250 1.10)"
    echo "    The popular web browser by Google (Dev Channel)"
    ;;
esac
exit 0
"#;

const SUDO_SCRIPT: &str = "#!/bin/sh\nexec \"$@\"\n";

struct TestEnv {
    _tmp: TempDir,
    home_dir: PathBuf,
    xdg_config_home: PathBuf,
    xdg_cache_home: PathBuf,
    mock_bin_dir: PathBuf,
    calls_log: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();

        let home_dir = root.join("home");
        let xdg_config_home = root.join("config");
        let xdg_cache_home = root.join("cache");
        let mock_bin_dir = root.join("bin");
        let calls_log = root.join("calls.log");

        for dir in [&home_dir, &xdg_config_home, &xdg_cache_home, &mock_bin_dir] {
            fs::create_dir_all(dir).expect("mkdir");
        }

        // No network access from tests
        let config_dir = xdg_config_home.join("pacwise");
        fs::create_dir_all(&config_dir).expect("mkdir pacwise config");
        fs::write(config_dir.join("config.json"), r#"{ "aur-search": false }"#).expect("write config");

        let env = Self {
            _tmp: tmp,
            home_dir,
            xdg_config_home,
            xdg_cache_home,
            mock_bin_dir,
            calls_log,
        };
        env.install_script("pacman", PACMAN_SCRIPT);
        env.install_script("sudo", SUDO_SCRIPT);
        env
    }

    fn with_yay(self) -> Self {
        self.install_script("yay", YAY_SCRIPT);
        self
    }

    fn install_script(&self, name: &str, body: &str) {
        let path = self.mock_bin_dir.join(name);
        let body = body.replace("@LOG@", &self.calls_log.display().to_string());
        fs::write(&path, body).expect("write mock binary");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).expect("metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("chmod");
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = pacwise();
        // PATH holds only the mocks so host package managers are never reached
        cmd.env("HOME", &self.home_dir)
            .env("XDG_CONFIG_HOME", &self.xdg_config_home)
            .env("XDG_CACHE_HOME", &self.xdg_cache_home)
            .env("PATH", &self.mock_bin_dir)
            .env_remove("PACWISE_LOG")
            .env_remove("MOCK_FAIL");
        cmd
    }

    fn calls(&self) -> String {
        fs::read_to_string(&self.calls_log).unwrap_or_default()
    }

    fn backups_dir(&self) -> PathBuf {
        self.xdg_cache_home.join("pacwise").join("backups")
    }
}

fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

#[test]
fn test_help_command() {
    pacwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install, remove and purge Arch packages"));
}

#[test]
fn test_version_flag() {
    let expected = format!("pacwise {}", env!("CARGO_PKG_VERSION"));
    pacwise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_unknown_command() {
    pacwise()
        .arg("unknown-command-xyz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: pacwise"));
}

#[test]
fn search_ranks_aur_matches() {
    let env = TestEnv::new().with_yay();
    env.cmd()
        .args(["search", "google-ch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aur/google-chrome"))
        .stdout(predicate::str::contains("aur/google-chrome-dev"))
        .stdout(predicate::str::contains("firefox").not());

    let calls = env.calls();
    assert!(calls.contains("pacman -Ss google-ch"));
    assert!(calls.contains("yay -Ss --aur google-ch"));
}

#[test]
fn install_partial_name_through_helper() {
    let env = TestEnv::new().with_yay();
    env.cmd()
        .args(["install", "google-ch"])
        .write_stdin("1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter package number"))
        .stdout(predicate::str::contains("google-chrome installation completed"));

    let calls = env.calls();
    assert!(calls.contains("yay -S google-chrome\n"));
    assert_eq!(count_files(&env.backups_dir()), 1);
}

#[test]
fn declined_confirmation_runs_nothing() {
    let env = TestEnv::new().with_yay();
    env.cmd()
        .args(["install", "google-ch"])
        .write_stdin("2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(!env.calls().contains("yay -S google-chrome-dev"));
}

#[test]
fn unknown_package_is_no_match() {
    let env = TestEnv::new();
    env.cmd()
        .args(["install", "zzzznotapackage"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No package matching 'zzzznotapackage'"));

    // fell back to the full sync list before giving up
    assert!(env.calls().contains("pacman -Sl"));
    assert!(!env.calls().contains("pacman -S zzzz"));
}

#[test]
fn cancelled_selection_removes_nothing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["remove", "vl"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("vlc"));

    assert!(!env.calls().contains("pacman -R"));
}

#[test]
fn purge_exact_name_with_yes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--yes", "purge", "vlc"])
        .assert()
        .success();

    let calls = env.calls();
    assert!(calls.contains("pacman -Rns vlc --noconfirm"));
    assert!(calls.contains("pacman -Qtdq"));
    assert!(calls.contains("pacman -Sc --noconfirm"));
}

#[test]
fn failed_purge_stops_before_cleanup() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--yes", "purge", "vlc"])
        .env("MOCK_FAIL", "-Rns")
        .assert()
        .failure()
        .stderr(predicate::str::contains("remove failed"))
        .stderr(predicate::str::contains("backup available"));

    let calls = env.calls();
    assert!(calls.contains("pacman -Rns vlc --noconfirm"));
    assert!(!calls.contains("-Sc"));
    assert!(!calls.contains("-Qtdq"));
}

#[test]
fn invalid_name_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["install", "vlc;reboot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package name"));

    assert!(env.calls().is_empty());
}

#[test]
fn config_set_get_roundtrip() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "set", "preferred-helper", "paru"])
        .assert()
        .success();
    env.cmd()
        .args(["config", "get", "preferred-helper"])
        .assert()
        .success()
        .stdout(predicate::str::diff("paru\n"));
    env.cmd()
        .args(["config", "get", "aur-search"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn config_rejects_unknown_keys() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn config_path_points_into_xdg_config() {
    let env = TestEnv::new();
    let expected = env.xdg_config_home.join("pacwise").join("config.json");
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn info_reports_tools_and_package_count() {
    let env = TestEnv::new();
    env.cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed packages: 2"))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn update_runs_pacman_syu() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--yes", "update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("System update completed"));

    assert!(env.calls().contains("pacman -Syu --noconfirm"));
}

#[test]
fn operation_log_is_written() {
    let env = TestEnv::new();
    env.cmd().args(["--yes", "purge", "vlc"]).assert().success();

    let log = fs::read_to_string(env.xdg_cache_home.join("pacwise").join("pacwise.log")).expect("log");
    assert!(log.contains("dispatching"));
}

#[test]
fn menu_quits_on_end_of_input() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install package"));
}
