#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use keel_config::KeelConfig;
use keel_driver::ResourceEntry;
use serde_json::Value;
use tempfile::TempDir;

/// A directory tree written to a temp dir; removed on drop.
pub struct Fixture {
  _temp: TempDir,
  pub root: PathBuf,
}

impl Fixture {
  pub fn path(
    &self,
    relative: &str,
  ) -> PathBuf {
    relative.split('/').fold(self.root.clone(), |acc, part| acc.join(part))
  }

  pub fn write(
    &self,
    relative: &str,
    content: &str,
  ) {
    let path = self.path(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
  }
}

/// Write `tree` under a fresh temp dir.
///
/// Objects become directories, strings become file contents. The root is
/// canonicalized so expected paths compare equal to resolved ones.
pub fn fixture(tree: Value) -> Fixture {
  let temp = TempDir::new().unwrap();
  let root = temp.path().canonicalize().unwrap();
  write_tree(&root, &tree);
  Fixture { _temp: temp, root }
}

fn write_tree(
  dir: &Path,
  tree: &Value,
) {
  let Value::Object(entries) = tree else {
    panic!("fixture tree must be an object, got {tree}");
  };

  fs::create_dir_all(dir).unwrap();

  for (name, child) in entries {
    let path = dir.join(name);
    match child {
      Value::Object(_) => write_tree(&path, child),
      Value::String(content) => fs::write(&path, content).unwrap(),
      other => fs::write(&path, other.to_string()).unwrap(),
    }
  }
}

pub fn silent() -> Arc<KeelConfig> {
  Arc::new(KeelConfig::silent())
}

pub fn names(entries: &[ResourceEntry]) -> Vec<&str> {
  entries.iter().map(|e| e.name.as_str()).collect()
}
