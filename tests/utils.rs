#![allow(dead_code)]

use helix::collaborator::Collaborator;
use helix::error::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;
use walkdir::WalkDir;

/// Path to a fixture under `tests/fixtures`.
pub fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(relative)
}

/// The templates directory shipped with the crate.
pub fn packaged_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Prints a diff of files and their contents between two directories.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |root: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read(dir1.join(file)).unwrap();
        let expected = fs::read(dir2.join(file)).unwrap();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&actual));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&expected));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing a diff otherwise.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// The output directory a generator was pointed at: its first argument under
/// `src/`.
pub fn output_dir(working_dir: &Path, args: &[String]) -> PathBuf {
    let relative = args
        .iter()
        .find(|arg| arg.starts_with("src/"))
        .expect("generator arguments name no output directory");
    working_dir.join(relative)
}

/// Shared, ordered record of collaborator calls.
pub type CallLog = Rc<RefCell<Vec<String>>>;

type Action = Box<dyn Fn(&Path, &[String])>;

/// In-process stand-in for an external tool.
pub struct FakeTool {
    name: String,
    exit_code: i32,
    log: CallLog,
    action: Action,
    pub args: RefCell<Vec<Vec<String>>>,
}

impl FakeTool {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            exit_code: 0,
            log: Rc::clone(log),
            action: Box::new(|_, _| {}),
            args: RefCell::new(Vec::new()),
        }
    }

    /// Runs `action` with the working directory and arguments on each call.
    pub fn with_action<F: Fn(&Path, &[String]) + 'static>(mut self, action: F) -> Self {
        self.action = Box::new(action);
        self
    }

    pub fn failing(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }
}

impl Collaborator for FakeTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, args: &[String], working_dir: &Path) -> Result<ExitStatus> {
        self.log.borrow_mut().push(self.name.clone());
        self.args.borrow_mut().push(args.to_vec());
        (self.action)(working_dir, args);
        Ok(exit_status(self.exit_code))
    }
}
