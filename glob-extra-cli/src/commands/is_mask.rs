//! Command to classify patterns as masks or literal paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use glob_extra::is_mask;

/// Report whether each pattern is a glob mask.
#[derive(Args)]
pub struct IsMaskCommand {
    /// Patterns to classify
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Skip the listing; exit 0 if every pattern is a mask, 1 otherwise
    /// (naming the first literal on stderr)
    #[arg(long)]
    pub quiet_exit: bool,
}

impl IsMaskCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.quiet_exit {
            return match self.patterns.iter().find(|p| !is_mask(p.as_str())) {
                None => Ok(()),
                Some(literal) => Err(CliError::SemanticFailure(format!(
                    "'{literal}' is not a mask"
                ))),
            };
        }

        for pattern in &self.patterns {
            let kind = if is_mask(pattern.as_str()) {
                "mask"
            } else {
                "literal"
            };
            println!("{pattern}\t{kind}");
        }
        Ok(())
    }
}
