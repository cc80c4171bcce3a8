use crate::commands::input_files;
use crate::commands::input_files::ErrorFormat;
use crate::commands::input_files::InputFiles;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphqle_parser::ast;
use graphqle_parser::syntax;
use graphqle_parser::syntax::SyntaxNode;
use graphqle_parser::syntax::SyntaxVisitor;
use graphqle_parser::syntax::VisitFlow;
use graphqle_parser::token::Token;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[command(flatten)]
    input: InputFiles,

    #[arg(
        help="Also print the significant tokens of each node.",
        long,
    )]
    tokens: bool,

    #[arg(
        help="Also parse `#` comments as doc comments and print their tags.",
        long,
    )]
    doc_comments: bool,

    #[arg(
        default_value_t,
        help="How to render parse errors.",
        long,
        value_enum,
    )]
    format: ErrorFormat,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = match self.input.scan() {
            Ok(scan) => scan,
            Err(e) => return CommandResult::from_error(e),
        };
        let options = OutlineOptions {
            tokens: self.tokens,
            doc_comments: self.doc_comments,
            format: self.format,
        };
        let multiple_files = scan.file_paths.len() > 1;

        let outputs = input_files::process_files(&scan.file_paths, move |path| {
            let source = input_files::read_file(path)?;
            let result = graphqle_parser::parse(&source);

            let mut body = outline(result.tree(), options.tokens);
            if options.doc_comments {
                body.push_str(&doc_comment_tags(result.tree(), &source));
            }
            for error in &result.errors {
                body.push('\n');
                body.push_str(&options.format.render(error, &source, path));
            }
            log::debug!(
                "Parsed {path:#?} with {} errors.",
                result.errors.len(),
            );
            let body = input_files::with_header(path, body, multiple_files);
            Ok((body, result.has_errors()))
        })
        .await;

        match outputs {
            Ok(outputs) => {
                let failed = outputs.iter().any(|(_, has_errors)| *has_errors);
                let stdout = outputs
                    .into_iter()
                    .map(|(body, _)| body)
                    .collect::<Vec<_>>()
                    .join("\n\n");
                CommandResult::report(stdout, failed)
            },
            Err(e) => CommandResult::from_error(e),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct OutlineOptions {
    tokens: bool,
    doc_comments: bool,
    format: ErrorFormat,
}

/// Renders `tree` as an indented outline, one node per line.
fn outline(tree: &SyntaxNode<'_>, show_tokens: bool) -> String {
    let mut printer = OutlinePrinter {
        output: String::new(),
        depth: 0,
        show_tokens,
    };
    syntax::accept(tree, &mut printer);
    printer.output
}

struct OutlinePrinter {
    output: String,
    depth: usize,
    show_tokens: bool,
}

impl OutlinePrinter {
    fn push_line(&mut self, line: &str) {
        self.output.push_str(&"  ".repeat(self.depth));
        self.output.push_str(line);
        self.output.push('\n');
    }
}

impl<'src> SyntaxVisitor<'src> for OutlinePrinter {
    fn enter_node(&mut self, node: &SyntaxNode<'src>) -> VisitFlow {
        let malformed = if node.malformed { " (malformed)" } else { "" };
        self.push_line(&format!(
            "{:?}@{}..{}{malformed}",
            node.kind,
            node.span.start,
            node.span.end,
        ));
        self.depth += 1;
        VisitFlow::Continue
    }

    fn leave_node(&mut self, _node: &SyntaxNode<'src>) {
        self.depth -= 1;
    }

    fn visit_token(&mut self, token: &Token<'src>) {
        if self.show_tokens && !token.is_trivia() {
            self.push_line(&format!("{:?} {:?}", token.kind, token.text));
        }
    }
}

/// Lists the tags of every comment that has any.
fn doc_comment_tags<'src>(tree: &SyntaxNode<'src>, source: &'src str) -> String {
    let Some(document) = ast::Document::cast(tree) else {
        return String::new();
    };
    let mut output = String::new();
    for comment in document.comments() {
        let doc = comment.doc(source);
        let Some(doc_root) = ast::DocComment::cast(doc.tree()) else {
            continue;
        };
        for tag in doc_root.tags() {
            let name = tag.doc_name().unwrap_or("@?");
            let value = tag.doc_value().unwrap_or("");
            output.push_str(&format!(
                "{}..{} {name} {value}\n",
                tag.span().start,
                tag.span().end,
            ));
        }
    }
    output
}
