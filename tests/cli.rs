//! Binary-level checks: exit codes & which stream gets what.

use std::{
        ffi::OsStr,
        fs::{self, File},
        process::{Command, Output},
};

use tempfile::TempDir;

type Result<T> = core::result::Result<T, Error>;
type Error = Box<dyn std::error::Error>;

fn flatten_fixtures(args: &[&OsStr]) -> Result<Output> {
        let output = Command::new(env!("CARGO_BIN_EXE_flatten_fixtures")).args(args).env_remove("RUST_LOG").output()?;
        Ok(output)
}

/// `root/decs/array/1.in`
fn decs_array_tree() -> Result<TempDir> {
        let temp_dir = TempDir::new()?;
        let array = temp_dir.path().join("decs").join("array");
        fs::create_dir_all(&array)?;
        File::create(array.join("1.in"))?;
        Ok(temp_dir)
}

#[test]
fn missing_directory_argument_prints_usage_and_exits_1() -> Result<()> {
        let output = flatten_fixtures(&[])?;
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "stderr: {}", stderr);
        assert!(output.stdout.is_empty());
        Ok(())
}

#[test]
fn nonexistent_directory_exits_1() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("missing");
        let output = flatten_fixtures(&[missing.as_os_str()])?;
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("is not an existing directory"), "stderr: {}", stderr);
        Ok(())
}

#[test]
fn dry_run_reports_and_leaves_tree_alone() -> Result<()> {
        let temp_dir = decs_array_tree()?;
        let output = flatten_fixtures(&[temp_dir.path().as_os_str()])?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("decs/array/1.in -> decs/array/decs-array-1.in"), "stdout: {}", stdout);
        assert!(stdout.contains("DRY RUN"), "stdout: {}", stdout);
        assert!(temp_dir.path().join("decs/array/1.in").exists());
        assert!(!temp_dir.path().join("decs/array/decs-array-1.in").exists());
        Ok(())
}

#[test]
fn execute_flag_before_directory_renames() -> Result<()> {
        let temp_dir = decs_array_tree()?;
        let output = flatten_fixtures(&[OsStr::new("--execute"), temp_dir.path().as_os_str()])?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Completed! Renamed 1 of 1 files."), "stdout: {}", stdout);
        assert!(temp_dir.path().join("decs/array/decs-array-1.in").exists());
        assert!(!temp_dir.path().join("decs/array/1.in").exists());
        Ok(())
}

#[test]
fn help_exits_0() -> Result<()> {
        let output = flatten_fixtures(&[OsStr::new("--help")])?;
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("--execute"));
        Ok(())
}
