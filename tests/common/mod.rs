use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let project = tmp.path().join("project");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&project).expect("create project dir");

        Self {
            _tmp: tmp,
            home,
            project,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("firefix").expect("binary under test");
        cmd.current_dir(&self.project).env("HOME", &self.home);
        cmd
    }

    pub fn run(&self) -> String {
        let out = self.cmd().assert().success().get_output().stdout.clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn rules_path(&self) -> PathBuf {
        self.project.join("firestore.rules")
    }

    pub fn audit_path(&self) -> PathBuf {
        self.home.join(".config/firefix/audit.jsonl")
    }
}
