// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp project directories, manuscript YAML builders and a CLI runner

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use tokio::fs;

pub struct TestPaperBuilder {
    title: String,
    subtitle: String,
    date: Option<String>,
    authors: Vec<TestAuthor>,
    abstract_text: String,
    keywords: Vec<String>,
    sections: Vec<(String, String)>,
    statements: Vec<(String, String)>,
    references: Vec<String>,
}

pub struct TestAuthor {
    pub name: String,
    pub affiliation: String,
    pub email: String,
}

impl TestPaperBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: String::new(),
            date: None,
            authors: Vec::new(),
            abstract_text: format!("Abstract of {}", title),
            keywords: Vec::new(),
            sections: Vec::new(),
            statements: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = subtitle.to_string();
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn with_author(mut self, name: &str, affiliation: &str, email: &str) -> Self {
        self.authors.push(TestAuthor {
            name: name.to_string(),
            affiliation: affiliation.to_string(),
            email: email.to_string(),
        });
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_section(mut self, key: &str, text: &str) -> Self {
        self.sections.push((key.to_string(), text.to_string()));
        self
    }

    pub fn with_statement(mut self, key: &str, text: &str) -> Self {
        self.statements.push((key.to_string(), text.to_string()));
        self
    }

    /// Add a reference given as a YAML flow mapping, e.g. `{type: book, title: X}`
    pub fn with_reference(mut self, flow_yaml: &str) -> Self {
        self.references.push(flow_yaml.to_string());
        self
    }

    pub fn to_yaml(&self) -> String {
        let mut yaml = String::from("meta:\n");
        yaml.push_str(&format!("  title: \"{}\"\n", self.title));
        if !self.subtitle.is_empty() {
            yaml.push_str(&format!("  subtitle: \"{}\"\n", self.subtitle));
        }
        if let Some(date) = &self.date {
            yaml.push_str(&format!("  date: \"{}\"\n", date));
        }
        if !self.authors.is_empty() {
            yaml.push_str("  authors:\n");
            for author in &self.authors {
                yaml.push_str(&format!("    - name: \"{}\"\n", author.name));
                yaml.push_str(&format!("      affiliation: \"{}\"\n", author.affiliation));
                yaml.push_str(&format!("      email: \"{}\"\n", author.email));
            }
        }

        yaml.push_str("\nabstract:\n");
        yaml.push_str(&format!("  text: \"{}\"\n", self.abstract_text));
        if !self.keywords.is_empty() {
            yaml.push_str(&format!("  keywords: [{}]\n", self.keywords.join(", ")));
        }

        if !self.sections.is_empty() {
            yaml.push_str("\nsections:\n");
            for (key, text) in &self.sections {
                yaml.push_str(&format!("  {}: \"{}\"\n", key, text));
            }
        }

        for (key, text) in &self.statements {
            yaml.push_str(&format!("{}: \"{}\"\n", key, text));
        }

        if !self.references.is_empty() {
            yaml.push_str("\nreferences:\n");
            for reference in &self.references {
                yaml.push_str(&format!("  - {}\n", reference));
            }
        }

        yaml
    }

    pub async fn write_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.to_yaml()).await?;
        Ok(())
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    pub async fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, content)
            .await
            .expect("Failed to write test file");
        path
    }

    pub async fn create_paper_file(&self, name: &str, builder: &TestPaperBuilder) -> PathBuf {
        let path = self.file(name);
        builder
            .write_to_file(&path)
            .await
            .expect("Failed to write paper file");
        path
    }

    pub async fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.file(name))
            .await
            .expect("Failed to read output file")
    }

    /// Run the paperfill binary inside this environment
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_paperfill"))
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PAPERFILL_TEMPLATE")
            .env_remove("PAPERFILL_DATA")
            .env_remove("PAPERFILL_OUTPUT")
            .env_remove("PAPERFILL_STRICT")
            .env_remove("PAPERFILL_LOG_LEVEL")
            .env_remove("PAPERFILL_LOG_FORMAT")
            .output()
            .expect("Failed to execute paperfill")
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
