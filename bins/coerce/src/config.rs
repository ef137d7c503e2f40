use clap::{Args, Parser, Subcommand};

use dataschemes::{Kind, Profiles, TypeSet};

use crate::error::CoerceError;

#[derive(Parser)]
#[command(name = "coerce", about = "Convert scalar values to and from wire primitives")]
pub struct Cli {
    /// TOML file with extra `[[formats]]` profiles
    #[arg(long, global = true, env = "COERCE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Narrow a native value to a primitive
    Primitive(PrimitiveArgs),
    /// Widen a primitive back into a native value
    Native(NativeArgs),
    /// List known format profiles
    Formats,
}

#[derive(Args, Clone, Debug)]
pub struct PrimitiveArgs {
    /// Native kind of the value (string, boolean, integer, float)
    #[arg(long)]
    pub kind: Kind,

    /// Value as text, parsed into `--kind`
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    pub constraint: Constraint,
}

#[derive(Args, Clone, Debug)]
pub struct NativeArgs {
    /// Native kind to build
    #[arg(long)]
    pub target: Kind,

    /// Primitive kind the value arrived as
    #[arg(long)]
    pub kind: Kind,

    /// Value as text, parsed into `--kind`
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    pub constraint: Constraint,
}

/// Allowed primitive kinds: a named profile or an explicit list. Neither
/// means unconstrained.
#[derive(Args, Clone, Debug)]
pub struct Constraint {
    /// Format profile name (e.g. json, csv)
    #[arg(long, conflicts_with = "types")]
    pub format: Option<String>,

    /// Comma-separated primitive kinds (e.g. "float,str")
    #[arg(long)]
    pub types: Option<TypeSet>,
}

impl Constraint {
    pub fn resolve(&self, profiles: &Profiles) -> Result<Option<TypeSet>, CoerceError> {
        match (&self.format, self.types) {
            (Some(name), _) => Ok(Some(profiles.get(name)?.types)),
            (None, types) => Ok(types),
        }
    }
}

pub fn load_profiles(path: Option<&str>) -> Result<Profiles, CoerceError> {
    match path {
        Some(path) => Ok(Profiles::load(path)?),
        None => Ok(Profiles::builtin()),
    }
}
