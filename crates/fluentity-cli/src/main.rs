mod prompter;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use fluentity_core::config::{self, CONFIG_FILE_NAME, FluentityConfig};
use fluentity_core::dialogue::{ModelDialogue, Prompter};
use fluentity_core::error::PromptError;
use fluentity_core::ir::ModelRegistry;
use fluentity_core::transform::{self, TranslateOptions};
use fluentity_core::{CodeGenerator, GeneratedFile};
use fluentity_typescript::{TypescriptModelGenerator, emit_model, emitters};

use prompter::TerminalPrompter;

#[derive(Parser)]
#[command(
    name = "fluentity",
    about = "CLI tool for Fluentity model generation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new Fluentity model
    #[command(name = "generate:model")]
    GenerateModel {
        /// Name of the model to generate
        name: Option<String>,

        /// Path where the model should be generated
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite existing model file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Parse an OpenAPI schema file and generate models
    #[command(name = "parse:openapi")]
    ParseOpenapi {
        /// Path to the OpenAPI schema file
        schema: PathBuf,

        /// Path where the models should be generated
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Fail when a $ref names a schema the document does not declare
        #[arg(long)]
        strict_refs: bool,
    },

    /// Check that a schema file translates, without writing anything
    Validate {
        /// Path to the OpenAPI schema file
        schema: PathBuf,
    },

    /// Print the model definitions translated from a schema file
    Inspect {
        /// Path to the OpenAPI schema file
        schema: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new fluentity configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateModel { name, path, force } => cmd_generate_model(name, path, force),

        Commands::ParseOpenapi {
            schema,
            path,
            strict_refs,
        } => cmd_parse_openapi(schema, path, strict_refs),

        Commands::Validate { schema } => cmd_validate(schema),

        Commands::Inspect { schema, format } => cmd_inspect(schema, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "fluentity", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<FluentityConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn output_dir(path: Option<PathBuf>, cfg: &FluentityConfig) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(&cfg.output))
}

fn load_registry(schema: &Path, strict_refs: bool) -> Result<ModelRegistry> {
    let options = TranslateOptions { strict_refs };
    let registry = transform::translate_path(schema, &options)?;
    Ok(registry)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_parse_openapi(schema: PathBuf, path: Option<PathBuf>, strict_refs: bool) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let output_dir = output_dir(path, &cfg);

    // Everything is rendered before the first write so a bad document leaves no files behind.
    let files = load_registry(&schema, strict_refs || cfg.strict_refs)
        .and_then(|registry| Ok(TypescriptModelGenerator.generate(&registry)?))
        .context("Error parsing OpenAPI schema")?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    log::info!("generated {} models in {}", files.len(), output_dir.display());
    println!("Successfully parsed OpenAPI schema");
    Ok(())
}

fn cmd_generate_model(name: Option<String>, path: Option<PathBuf>, force: bool) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let output_dir = output_dir(path, &cfg);
    let mut prompter = TerminalPrompter;

    let model = match ModelDialogue::new(name).run(&mut prompter) {
        Ok(model) => model,
        Err(PromptError::Cancelled) => {
            println!("Model generation cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let content = emit_model(&model)?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    let file_path = output_dir.join(emitters::file_name(&model.name));

    if !write_model(&file_path, &content, resolve_force(force, &cfg), &mut prompter)? {
        println!("Model generation cancelled.");
        return Ok(());
    }
    println!(
        "✓ Model {} generated successfully at {}",
        model.name,
        file_path.display()
    );
    Ok(())
}

fn resolve_force(flag: bool, cfg: &FluentityConfig) -> bool {
    flag || cfg.force
}

/// Write a rendered model file. An existing file is only replaced when
/// `force` is set or the user confirms; returns whether the file was written.
fn write_model(
    file_path: &Path,
    content: &str,
    force: bool,
    prompter: &mut dyn Prompter,
) -> Result<bool> {
    if file_path.exists() && !force {
        let message = format!(
            "Model file {} already exists. Overwrite?",
            file_path.display()
        );
        let overwrite = match prompter.confirm(&message, false) {
            Ok(answer) => answer,
            Err(PromptError::Cancelled) => false,
            Err(err) => return Err(err.into()),
        };
        if !overwrite {
            log::debug!("kept existing {}", file_path.display());
            return Ok(false);
        }
    }

    fs::write(file_path, content)
        .with_context(|| format!("failed to write {}", file_path.display()))?;
    Ok(true)
}

fn cmd_validate(schema: PathBuf) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let registry = load_registry(&schema, cfg.strict_refs)
        .with_context(|| format!("failed to validate {}", schema.display()))?;

    let attributes: usize = registry.iter().map(|m| m.attributes.len()).sum();
    let relationships: usize = registry.iter().map(|m| m.relationships.len()).sum();

    eprintln!("Valid schema document: {}", schema.display());
    eprintln!("  Models: {}", registry.len());
    eprintln!("  Attributes: {attributes}");
    eprintln!("  Relationships: {relationships}");
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(schema: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let registry = load_registry(&schema, cfg.strict_refs)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&registry)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&registry)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
