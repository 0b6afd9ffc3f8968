//! Tokenize command implementation

use anyhow::{Context as _, Result};
use clap::Args;
use std::process::ExitCode;
use unitext_fts::{register_builtins, Reason, TokenizeOptions, TokenizerRegistry};

use super::Context;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, Record};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Text to tokenize, joined with spaces
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob), tokenized one at a time
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Registered tokenizer to run
    #[arg(short, long, value_name = "NAME")]
    pub tokenizer: Option<String>,

    /// Argument passed to the tokenizer, repeat for several
    #[arg(short, long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Why the text is tokenized: document, query, query_prefix, aux
    #[arg(short, long, default_value = "document")]
    pub reason: String,

    /// Leave out token offsets
    #[arg(long)]
    pub no_offsets: bool,

    /// Leave out colocated tokens
    #[arg(long)]
    pub no_colocated: bool,

    /// List the registered tokenizers and exit
    #[arg(long)]
    pub list: bool,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self, ctx: &Context) -> Result<ExitCode> {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);

        if self.list {
            let names = registry.names();
            match ctx.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&names)?),
                OutputFormat::Text => names.iter().for_each(|name| println!("{name}")),
            }
            return Ok(ExitCode::SUCCESS);
        }

        let name = self.tokenizer.as_deref().unwrap_or(&ctx.config.tokenizer.name);
        let args = if self.tokenizer.is_some() || !self.args.is_empty() {
            &self.args
        } else {
            &ctx.config.tokenizer.args
        };
        let reason: Reason = self.reason.parse()?;
        let options = TokenizeOptions {
            include_offsets: !self.no_offsets,
            include_colocated: !self.no_colocated,
        };

        let mut handle = registry
            .tokenizer(name, args)
            .with_context(|| format!("Failed to create tokenizer '{name}' with {args:?}"))?;
        log::info!("Tokenizing with {name} for {reason}");

        let mut inputs = Vec::new();
        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                inputs.push((path.display().to_string(), FileReader::read_bytes(&path)?));
            }
        }
        if !self.text.is_empty() {
            inputs.push(("arguments".to_string(), self.text.join(" ").into_bytes()));
        }
        if inputs.is_empty() {
            return Err(crate::error::CliError::NoInput("tokenize").into());
        }

        let mut formatter = ctx.formatter();
        for (source, bytes) in &inputs {
            let tokens = handle
                .tokenize(bytes, reason, options)
                .with_context(|| format!("Failed to tokenize {source}"))?;
            log::debug!("{} tokens from {source}", tokens.len());
            for token in tokens {
                formatter.write_record(&Record::Token(token))?;
            }
        }
        formatter.finish()?;
        Ok(ExitCode::SUCCESS)
    }
}
