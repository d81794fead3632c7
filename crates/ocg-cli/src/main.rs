mod client;
mod packaging;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use ocg_click::generator::OUTPUT_FILE_NAME;
use ocg_click::{ClickCliGenerator, ClickConfig};
use ocg_core::config::{self, CONFIG_FILE_NAME, OcgConfig};
use ocg_core::extract::ExtractOptions;
use ocg_core::model::Document;
use ocg_core::parse::SourceFormat;
use ocg_core::{CodeGenerator, GeneratedFile};

#[derive(Parser)]
#[command(
    name = "ocg",
    about = "Generate a Click CLI from an OpenAPI 3.x spec",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Python client and a Click CLI from an OpenAPI spec
    Generate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        input: Option<PathBuf>,

        /// Directory where the client and cli.py are written
        output: Option<PathBuf>,

        /// Directory containing a cli_template.jinja2 to render instead of the built-in template
        #[arg(long)]
        template_path: Option<PathBuf>,

        /// Importable name of the client package (detected from the output directory when omitted)
        #[arg(long)]
        client_module: Option<String>,

        /// Do not run the external client generator
        #[arg(long)]
        skip_client: bool,
    },

    /// Validate an OpenAPI spec
    Validate {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the operations extracted from an OpenAPI spec
    Inspect {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new ocg configuration
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

struct GenerateArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    template_path: Option<PathBuf>,
    client_module: Option<String>,
    skip_client: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            template_path,
            client_module,
            skip_client,
        } => cmd_generate(GenerateArgs {
            input,
            output,
            template_path,
            client_module,
            skip_client,
        }),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "ocg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OcgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_spec(path: &Path, cfg: &OcgConfig) -> Result<Document> {
    let format = SourceFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let options = ExtractOptions {
        collisions: cfg.naming.collisions,
    };

    let document = ocg_core::load(&content, format, &options)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok(document)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = args.input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = args.output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    // Reject bad input before anything touches the output directory
    SourceFormat::from_path(&input)?;
    anyhow::ensure!(
        input.is_file(),
        "input file {} does not exist",
        input.display()
    );

    fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;

    if cfg.client.enabled && !args.skip_client {
        eprintln!("Generating client with {}", cfg.client.command);
        client::generate_client(&cfg.client.command, &input, &output)?;
    }

    if packaging::add_click_dependency(&output, &cfg.packaging.click_requirement)? {
        eprintln!("  added click to pyproject.toml");
    }

    let document = load_spec(&input, &cfg)?;

    let client_module = match args.client_module {
        Some(module) => module,
        None => packaging::find_client_package(&output)?
            .unwrap_or_else(|| packaging::default_client_module(document.title())),
    };
    packaging::write_init_markers(&output, &client_module)?;

    let template_dir = args
        .template_path
        .or_else(|| cfg.template_path.as_ref().map(PathBuf::from));

    let generator_config = ClickConfig {
        client_module,
        template_dir,
    };
    let files = ClickCliGenerator.generate(&document, &generator_config)?;
    write_files(&output, &files)?;

    println!(
        "CLI generated at {}",
        output.join(OUTPUT_FILE_NAME).display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let document = load_spec(&input, &cfg)?;

    eprintln!(
        "Valid OpenAPI {} spec: {}",
        document.version(),
        document.title()
    );
    if let Some(version) = document.api_version() {
        eprintln!("  Version: {version}");
    }
    eprintln!("  Paths: {}", document.raw_paths().len());
    eprintln!("  Operations: {}", document.operations().len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let document = load_spec(&input, &cfg)?;

    let summary = build_inspect_summary(&document);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(document: &Document) -> serde_json::Value {
    serde_json::json!({
        "openapi": document.version(),
        "info": {
            "title": document.title(),
            "version": document.api_version(),
        },
        "operations": document.operations(),
    })
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
