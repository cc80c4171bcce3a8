use crate::commands::input_files;
use crate::commands::input_files::InputFiles;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphqle_parser::token::Token;

#[derive(Debug, clap::Args)]
pub(crate) struct LexCmd {
    #[command(flatten)]
    input: InputFiles,

    #[arg(
        help="Omit whitespace, comment and comma tokens.",
        long,
    )]
    skip_trivia: bool,
}

#[inherent::inherent]
impl RunnableCommand for LexCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = match self.input.scan() {
            Ok(scan) => scan,
            Err(e) => return CommandResult::from_error(e),
        };
        let skip_trivia = self.skip_trivia;
        let multiple_files = scan.file_paths.len() > 1;

        let listings = input_files::process_files(&scan.file_paths, move |path| {
            let source = input_files::read_file(path)?;
            let listing = graphqle_parser::lex_all(&source)
                .iter()
                .filter(|token| !(skip_trivia && token.is_trivia()))
                .map(format_token)
                .collect::<Vec<_>>()
                .join("\n");
            log::debug!("Lexed {path:#?}.");
            Ok(input_files::with_header(path, listing, multiple_files))
        })
        .await;

        match listings {
            Ok(listings) => CommandResult::stdout(format_args!("{}", listings.join("\n\n"))),
            Err(e) => CommandResult::from_error(e),
        }
    }
}

/// `start..end Kind "text"`
fn format_token(token: &Token<'_>) -> String {
    let span = format!("{}..{}", token.span.start, token.span.end);
    format!("{span:<12} {:<20} {:?}", format!("{:?}", token.kind), token.text)
}
