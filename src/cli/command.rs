use clap::{Parser, Subcommand};
use color_eyre::Report;
use tracing::debug;

use text_rope::{util::outline, Rope, DEFAULT_LEAF_LEN};

/// Build ropes from the given text, run one operation and print the result.
///
/// Positions count chars and ranges are half-open: `START` is included, `END` is not.
#[derive(Parser, Debug)]
#[command(name = "text-rope", version)]
pub struct Cli {
    /// Largest number of chars kept in a single leaf
    #[arg(long, global = true, default_value_t = DEFAULT_LEAF_LEN)]
    leaf_len: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the length of TEXT
    Len { text: String },
    /// Print the char at INDEX
    Index { text: String, index: usize },
    /// Print LEFT followed by RIGHT
    Concat { left: String, right: String },
    /// Print the two halves of TEXT around AT
    Split { text: String, at: usize },
    /// Print TEXT with SOURCE inserted at AT
    Insert { text: String, at: usize, source: String },
    /// Print TEXT with START..END removed
    Delete { text: String, start: usize, end: usize },
    /// Print the START..END slice of TEXT
    Report { text: String, start: usize, end: usize },
    /// Print the tree built for TEXT
    Tree { text: String },
}

impl Cli {
    pub fn run(self) -> Result<String, Report> {
        debug!(leaf_len = self.leaf_len, command = ?self.command, "running");
        let rope = |text: &String| Rope::with_leaf_len(text, self.leaf_len);

        let output = match &self.command {
            Command::Len { text } => rope(text).len().to_string(),
            Command::Index { text, index } => rope(text).char_at(*index)?.to_string(),
            Command::Concat { left, right } => rope(left).concat(rope(right)).to_string(),
            Command::Split { text, at } => {
                let (left, right) = rope(text).split(*at)?;
                format!("{:?}\n{:?}", left.to_string(), right.to_string())
            }
            Command::Insert { text, at, source } => {
                let mut target = rope(text);
                target.insert(*at, rope(source))?;
                target.to_string()
            }
            Command::Delete { text, start, end } => {
                let mut target = rope(text);
                target.delete(*start..*end)?;
                target.to_string()
            }
            Command::Report { text, start, end } => rope(text).report(*start..*end)?,
            Command::Tree { text } => outline(&rope(text)).trim_end().to_string(),
        };

        Ok(output)
    }
}
