//! Subcommand handlers

use std::fs;
use std::path::Path;

use mix_core::{calculate, ConcreteGrade, MixDesignForm, MixDesignInput};
use tracing::{debug, info};

use crate::cli::{Cli, Commands, ConfigAction, DesignArgs, OutputFormat};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{render_design, render_equations, render_tables, Sections};

pub fn execute(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Design(args) => cmd_design(&args, &config, format),
        Commands::Tables => {
            print!("{}", render_tables(format)?);
            Ok(())
        }
        Commands::Equations => {
            print!("{}", render_equations(format)?);
            Ok(())
        }
        Commands::Config { action } => cmd_config(action, &config, &config_path),
    }
}

fn cmd_design(args: &DesignArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let form = build_form(args, config)?;
    let input = MixDesignInput::try_from(form)?;
    info!(grade = %input.grade, exposure = %input.exposure, "designing mix");

    let result = calculate(&input)?;
    let sections = Sections::from_flags(args.summary_only, args.steps_only);
    let rendered = render_design(format, &input, &result, sections)?;
    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Merge design inputs: flags, then the input file, then config defaults.
///
/// A missing strength falls back to the grade's characteristic strength.
pub fn build_form(args: &DesignArgs, config: &Config) -> Result<MixDesignForm> {
    let file_form = match &args.input {
        Some(path) => read_form(path)?,
        None => MixDesignForm::default(),
    };

    let mut form = args
        .to_form()
        .or(file_form)
        .or(config.materials.to_form());

    if form.strength_mpa.is_none() {
        if let Some(label) = &form.grade {
            let grade = ConcreteGrade::from_str_flexible(label)?;
            debug!(grade = %grade, "strength not given, using grade strength");
            form.strength_mpa = Some(grade.characteristic_strength_mpa());
        }
    }
    Ok(form)
}

fn read_form(path: &Path) -> Result<MixDesignForm> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let form = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "read design inputs");
    Ok(form)
}

fn cmd_config(action: ConfigAction, config: &Config, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Config file: {}", path.display());
            println!();
            println!("{}", config);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}
