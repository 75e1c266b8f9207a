// ABOUTME: Command implementations for the paperfill CLI
// ABOUTME: Handles execution of render, fill, check, and init commands

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use super::args::CheckFormat;
use super::config::Config;
use super::report::CheckReport;
use super::scaffold::{DEFAULT_TEMPLATE, SAMPLE_PAPER};
use crate::manuscript::Manuscript;
use crate::output::{write_output, OutputDestination};
use crate::template::{RenderPolicy, Rendered, Template, TemplateValues};

/// Render a manuscript from its YAML data into the template
pub async fn render_manuscript(
    data: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<String>,
    strict: bool,
    config: &Config,
) -> Result<()> {
    let data_path = data.unwrap_or_else(|| config.data_path.clone());
    let template_path = template.unwrap_or_else(|| config.template_path.clone());
    let output = output.unwrap_or_else(|| config.output_path.clone());

    info!(
        "Rendering manuscript {} with template {}",
        data_path.display(),
        template_path.display()
    );

    ensure_exists(&data_path, "Manuscript data")?;
    let manuscript = Manuscript::from_file(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load manuscript: {}", e))?;
    info!("Loaded manuscript: {}", manuscript.meta.title);

    let mut values = manuscript.values();
    values.extend_variables(config.template_values().iter());

    let template = load_template(&template_path).await?;
    let rendered = render_with(&template, &values, strict)?;

    let destination = OutputDestination::parse(&output);
    write_output(&rendered.text, &destination).await?;

    if destination != OutputDestination::Stdout {
        println!("Generated {}", destination);
    }

    info!("Manuscript rendering completed");
    Ok(())
}

/// Fill an arbitrary template using only configured and command-line values
pub async fn fill_template(
    template_path: PathBuf,
    output: String,
    strict: bool,
    config: &Config,
) -> Result<()> {
    info!("Filling template: {}", template_path.display());

    let values = config.template_values();
    let template = load_template(&template_path).await?;
    let rendered = render_with(&template, &values, strict)?;

    let destination = OutputDestination::parse(&output);
    write_output(&rendered.text, &destination).await?;

    info!("Template written to {}", destination);
    Ok(())
}

/// Report which placeholders of a template have values
pub async fn check_template(
    template: Option<PathBuf>,
    data: Option<PathBuf>,
    format: CheckFormat,
    strict: bool,
    config: &Config,
) -> Result<()> {
    let template_path = template.unwrap_or_else(|| config.template_path.clone());
    info!("Checking template: {}", template_path.display());

    let mut values = match data {
        Some(data_path) => {
            ensure_exists(&data_path, "Manuscript data")?;
            load_values(&data_path).await?
        }
        None if config.data_path.exists() => load_values(&config.data_path).await?,
        None => {
            debug!("No manuscript data found, checking against configured values only");
            TemplateValues::new()
        }
    };
    values.extend_variables(config.template_values().iter());

    let template = load_template(&template_path).await?;
    let report = CheckReport::build(&template_path.display().to_string(), &template, &values);

    match format {
        CheckFormat::Text => print!("{}", report.to_text()),
        CheckFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if strict && !report.is_complete() {
        return Err(anyhow::anyhow!(
            "Template has unresolved placeholders: {}",
            report.unresolved.join(", ")
        ));
    }

    Ok(())
}

/// Write a starter template and manuscript file
pub async fn init_project(output_dir: PathBuf, force: bool, _config: &Config) -> Result<()> {
    info!("Initializing manuscript project in {}", output_dir.display());

    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).await?;
    }

    let files = [("TEMPLATE.md", DEFAULT_TEMPLATE), ("paper.yaml", SAMPLE_PAPER)];

    // Check every target up front so a refusal never leaves a partial project
    if !force {
        let existing: Vec<String> = files
            .iter()
            .map(|(name, _)| output_dir.join(name))
            .filter(|path| path.exists())
            .map(|path| path.display().to_string())
            .collect();
        if !existing.is_empty() {
            return Err(anyhow::anyhow!(
                "Refusing to overwrite existing file(s): {} (use --force)",
                existing.join(", ")
            ));
        }
    }

    for (name, content) in files {
        let path = output_dir.join(name);
        let mut destination = OutputDestination::file(&path);
        if !force {
            destination = destination.no_clobber();
        }
        write_output(content, &destination).await?;
        println!("Created {}", path.display());
    }

    Ok(())
}

fn ensure_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        return Err(anyhow::anyhow!("{} not found: {}", what, path.display()));
    }
    Ok(())
}

async fn load_template(path: &Path) -> Result<Template> {
    ensure_exists(path, "Template")?;
    let source = fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read template '{}': {}", path.display(), e))?;

    let template = Template::parse(source);
    debug!(
        "Template {} has {} placeholder(s)",
        path.display(),
        template.placeholders().len()
    );
    Ok(template)
}

async fn load_values(data_path: &Path) -> Result<TemplateValues> {
    let manuscript = Manuscript::from_file(data_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load manuscript: {}", e))?;
    Ok(manuscript.values())
}

fn render_with(template: &Template, values: &TemplateValues, strict: bool) -> Result<Rendered> {
    let rendered = template
        .render(values, RenderPolicy::from_strict(strict))
        .map_err(|e| anyhow::anyhow!("Template rendering failed: {}", e))?;

    if !rendered.unresolved.is_empty() {
        warn!(
            "Unresolved placeholders left in output: {}",
            rendered.unresolved.join(", ")
        );
    }
    Ok(rendered)
}
