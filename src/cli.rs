// src/cli.rs
// Command-line definition - separated to avoid polluting main.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::algorithms::VanishingCommand;
use crate::config::{OutputFormat, VanishingConfig};

/// Vanishing ideal of Z/m[x1, ..., xn]. Polynomials are written like 3*x1^2*x2 - x2 + 5.
#[derive(Parser, Debug)]
#[command(name = "vanishing-ideal", subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Characteristic m >= 2 of the coefficient ring (overrides the config file)
    #[arg(short = 'm', long)]
    pub modulus: Option<u64>,

    /// Number of ring variables (overrides the config file)
    #[arg(short = 'n', long)]
    pub variables: Option<usize>,

    /// Configuration file to load instead of vanishing.toml / vanishing.yaml
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Print results as JSON reports
    #[arg(long)]
    pub json: bool,

    /// Count and report the operations performed
    #[arg(long)]
    pub count: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    #[command(about = VanishingCommand::Direct.description())]
    Direct,

    #[command(about = VanishingCommand::Recursive.description())]
    Recursive,

    #[command(name = "normalForm", alias = "normalform", about = VanishingCommand::NormalForm.description())]
    NormalForm {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        polynomial: Vec<String>,
    },

    #[command(name = "isZeroFunction", alias = "iszerofunction", about = VanishingCommand::IsZeroFunction.description())]
    IsZeroFunction {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        polynomial: Vec<String>,
    },

    #[command(name = "nonZeroTuple", alias = "nonzerotuple", about = VanishingCommand::NonZeroTuple.description())]
    NonZeroTuple {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        polynomial: Vec<String>,
    },

    #[command(about = VanishingCommand::Smarandache.description())]
    Smarandache {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        k: u64,
    },
}

impl Command {
    /// The algorithm to run and its textual argument. Polynomial words are joined with
    /// spaces, so `normalForm x1^4 + 1` needs no quoting.
    pub fn invocation(&self) -> (VanishingCommand, Option<String>) {
        match self {
            Command::Direct => (VanishingCommand::Direct, None),
            Command::Recursive => (VanishingCommand::Recursive, None),
            Command::NormalForm { polynomial } => (VanishingCommand::NormalForm, Some(polynomial.join(" "))),
            Command::IsZeroFunction { polynomial } => (VanishingCommand::IsZeroFunction, Some(polynomial.join(" "))),
            Command::NonZeroTuple { polynomial } => (VanishingCommand::NonZeroTuple, Some(polynomial.join(" "))),
            Command::Smarandache { k } => (VanishingCommand::Smarandache, Some(k.to_string())),
        }
    }
}

impl Cli {
    /// Command-line values override the loaded configuration.
    pub fn apply(&self, config: &mut VanishingConfig) {
        if let Some(modulus) = self.modulus {
            config.modulus = modulus;
        }
        if let Some(variables) = self.variables {
            config.variables = variables;
        }
        if self.json {
            config.output_format = OutputFormat::Json;
        }
        if self.count {
            config.instrumentation = true;
        }
    }
}
