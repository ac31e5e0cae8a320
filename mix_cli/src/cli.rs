//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mix_core::MixDesignForm;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "mix-design")]
#[command(version)]
#[command(about = "Concrete mix design calculator (IS 10262 absolute-volume method)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text, markdown, json). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file path override
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Proportion a mix and print quantities and calculation steps
    Design(DesignArgs),

    /// Print the standard deviation and water-cement ratio tables
    Tables,

    /// Print the equation reference
    Equations,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Design inputs. Flags override values read from `--input`.
#[derive(Args, Debug, Default)]
pub struct DesignArgs {
    /// JSON file with design inputs (same field names as the flags, snake_case)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Concrete grade (e.g., M25)
    #[arg(long, short = 'g')]
    pub grade: Option<String>,

    /// Characteristic strength in MPa. Defaults to the grade's strength.
    #[arg(long, short = 's')]
    pub strength: Option<f64>,

    /// Exposure condition (mild, moderate, severe, "very severe", extreme)
    #[arg(long, short = 'e')]
    pub exposure: Option<String>,

    /// Slump in mm
    #[arg(long)]
    pub slump: Option<f64>,

    /// Maximum aggregate size in mm
    #[arg(long)]
    pub max_aggregate_size: Option<f64>,

    /// Fine aggregate zone (Zone I to Zone IV)
    #[arg(long)]
    pub zone: Option<String>,

    /// Cement type (OPC 33, OPC 43, OPC 53, PPC, PSC)
    #[arg(long)]
    pub cement_type: Option<String>,

    /// Specific gravity of cement
    #[arg(long)]
    pub cement_sg: Option<f64>,

    /// Specific gravity of water
    #[arg(long)]
    pub water_sg: Option<f64>,

    /// Specific gravity of coarse aggregate
    #[arg(long)]
    pub coarse_sg: Option<f64>,

    /// Specific gravity of fine aggregate
    #[arg(long)]
    pub fine_sg: Option<f64>,

    /// Specific gravity of admixture (omit for none)
    #[arg(long)]
    pub admixture_sg: Option<f64>,

    /// Print only the final quantities
    #[arg(long, conflicts_with = "steps_only")]
    pub summary_only: bool,

    /// Print only the calculation steps
    #[arg(long)]
    pub steps_only: bool,
}

impl DesignArgs {
    /// Flag values as a partial form
    pub fn to_form(&self) -> MixDesignForm {
        MixDesignForm {
            grade: self.grade.clone(),
            strength_mpa: self.strength,
            exposure: self.exposure.clone(),
            slump_mm: self.slump,
            max_aggregate_size_mm: self.max_aggregate_size,
            fine_aggregate_zone: self.zone.clone(),
            cement_type: self.cement_type.clone(),
            cement_sg: self.cement_sg,
            water_sg: self.water_sg,
            coarse_aggregate_sg: self.coarse_sg,
            fine_aggregate_sg: self.fine_sg,
            admixture_sg: self.admixture_sg,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path
    Path,
}
