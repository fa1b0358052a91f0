use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta::internals::SettingsBindDropGuard;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod edit;
mod export;
mod init;
mod query;

const BIN_NAME: &str = "langsys";

/// Two languages, two keys, fully translated.
pub const CATALOG: &str = r#"<languages>
    <language value="english">
        <translated value="hello_world"><value>Hello World</value></translated>
        <translated value="presentation"><value>My name is $1</value></translated>
    </language>
    <language value="portuguese">
        <translated value="hello_world"><value>Olá Mundo</value></translated>
        <translated value="presentation"><value>Meu nome é $1</value></translated>
    </language>
</languages>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    _settings_scope: SettingsBindDropGuard,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;

        let mut settings = insta::Settings::clone_current();
        settings.add_filter(
            &regex::escape(&project_dir.display().to_string()),
            "[PROJECT]",
        );
        settings.add_filter(r"langsys \d+\.\d+\.\d+", "langsys [VERSION]");

        Ok(Self {
            _temp_dir: temp_dir,
            _settings_scope: settings.bind_to_scope(),
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with the default `languages.xml` catalog.
    pub fn with_catalog(content: &str) -> Result<Self> {
        Self::with_file("languages.xml", content)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) -> Result<()> {
        let file_path = self.project_dir.join(path);
        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("RUST_LOG", "off"); // Keep log lines out of stderr snapshots
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    /// Run with `args` and capture the output.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {} {:?}", BIN_NAME, args))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
