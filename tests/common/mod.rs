#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the submit-guard binary.
#[macro_export]
macro_rules! submit_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("submit-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file with raw bytes (for unreadable-file cases).
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A class that satisfies every rule in the default profile.
pub const CLEAN_JAVA: &str = r#"/**
 * A tidy value holder.
 * @author Pat
 * @version 1
 */
public class Tidy {
    private int value;

    /**
     * Reads the value.
     * @return the stored value
     */
    public int value() {
        return value;
    }
}
"#;

/// A class with a tab, a static field, and no Javadoc.
pub const MESSY_JAVA: &str =
    "public class Messy {\n\tprivate static int count;\n}\n";

/// JUnit report with one failing case.
pub const FAILING_JUNIT: &str = r#"<testsuite name="StackTest">
  <testcase classname="StackTest" name="testPush"/>
  <testcase classname="StackTest" name="testPop">
    <failure message="expected 2 but was 1"/>
  </testcase>
</testsuite>
"#;

/// JUnit report with only passing cases.
pub const PASSING_JUNIT: &str = r#"<testsuite name="StackTest">
  <testcase classname="StackTest" name="testPush"/>
  <testcase classname="StackTest" name="testPop"/>
</testsuite>
"#;

/// JaCoCo report with full coverage everywhere.
pub const FULL_COVERAGE: &str = r#"<report name="project">
  <package name="com/example">
    <class name="com/example/Stack">
      <method name="push" desc="(I)V">
        <counter type="METHOD" missed="0" covered="1"/>
        <counter type="BRANCH" missed="0" covered="2"/>
        <counter type="LINE" missed="0" covered="4"/>
      </method>
    </class>
  </package>
  <counter type="METHOD" missed="0" covered="1"/>
  <counter type="BRANCH" missed="0" covered="2"/>
  <counter type="LINE" missed="0" covered="4"/>
</report>
"#;

/// JaCoCo report with a partially covered class.
pub const PARTIAL_COVERAGE: &str = r#"<report name="project">
  <package name="com/example">
    <class name="com/example/Stack">
      <method name="push" desc="(I)V">
        <counter type="METHOD" missed="0" covered="1"/>
        <counter type="LINE" missed="0" covered="5"/>
      </method>
    </class>
    <class name="com/example/Queue">
      <method name="offer" desc="(I)V">
        <counter type="METHOD" missed="1" covered="0"/>
        <counter type="LINE" missed="2" covered="3"/>
      </method>
    </class>
  </package>
  <counter type="METHOD" missed="1" covered="1"/>
  <counter type="BRANCH" missed="1" covered="3"/>
  <counter type="LINE" missed="2" covered="8"/>
</report>
"#;
