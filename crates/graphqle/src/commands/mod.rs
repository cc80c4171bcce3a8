mod check;
mod input_files;
mod lex;
mod parse;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use lex::LexCmd;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphqle")]
pub(crate) enum CommandEnum {
    /// Parse files and report syntax errors.
    Check(Box<CheckCmd>),

    /// Print the tokens of each file.
    Lex(Box<LexCmd>),

    /// Print the syntax tree of each file.
    Parse(Box<ParseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Lex(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
        }
    }
}
