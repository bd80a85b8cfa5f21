//! Command-line and environment configuration

use crate::error::LintError;
use crate::schema::SchemaKind;

/// Environment variable naming the schema when no argument is given
pub const SCHEMA_ENV: &str = "ANNOTATION_SCHEMA";

/// Resolved tool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Schema the payload is checked against
    pub schema: SchemaKind,

    /// Print the JSON Schema instead of reading a payload
    pub print_json_schema: bool,
}

impl Config {
    /// Build configuration from arguments (without the program name),
    /// falling back to `env_schema` when no schema argument is given
    pub fn from_args<I>(args: I, env_schema: Option<String>) -> Result<Self, LintError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut schema = None;
        let mut print_json_schema = false;

        for arg in args {
            match arg.as_str() {
                "--json-schema" => print_json_schema = true,
                flag if flag.starts_with("--") => {
                    return Err(LintError::InvalidConfig(format!("unknown flag {flag}")));
                }
                _ if schema.is_some() => {
                    return Err(LintError::InvalidConfig(format!("unexpected argument {arg}")));
                }
                _ => schema = Some(arg),
            }
        }

        let schema = schema.or(env_schema).ok_or_else(|| {
            LintError::InvalidConfig(format!(
                "schema name is required (argument or {SCHEMA_ENV} environment variable)"
            ))
        })?;

        Ok(Self {
            schema: schema.parse()?,
            print_json_schema,
        })
    }
}
