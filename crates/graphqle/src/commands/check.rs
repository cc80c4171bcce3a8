use crate::commands::input_files;
use crate::commands::input_files::ErrorFormat;
use crate::commands::input_files::InputFiles;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphqle_parser::ast;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[command(flatten)]
    input: InputFiles,

    #[arg(
        default_value_t,
        help="How to render parse errors.",
        long,
        value_enum,
    )]
    format: ErrorFormat,
}

/// What checking one file found.
#[derive(Debug)]
struct FileReport {
    num_definitions: usize,
    rendered_errors: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = match self.input.scan() {
            Ok(scan) => scan,
            Err(e) => return CommandResult::from_error(e),
        };
        let format = self.format;

        let reports = input_files::process_files(&scan.file_paths, move |path| {
            let source = input_files::read_file(path)?;
            let result = graphqle_parser::parse(&source);
            let num_definitions = ast::Document::cast(result.tree())
                .map_or(0, |document| document.definitions().count());
            let rendered_errors = result
                .errors
                .iter()
                .map(|error| format.render(error, &source, path))
                .collect();
            log::debug!(
                "Checked {path:#?}: {num_definitions} definitions, {} errors.",
                result.errors.len(),
            );
            Ok(FileReport {
                num_definitions,
                rendered_errors,
            })
        })
        .await;
        let reports = match reports {
            Ok(reports) => reports,
            Err(e) => return CommandResult::from_error(e),
        };

        let num_definitions: usize = reports.iter().map(|r| r.num_definitions).sum();
        let num_errors: usize = reports.iter().map(|r| r.rendered_errors.len()).sum();
        let num_failed_files = reports
            .iter()
            .filter(|r| !r.rendered_errors.is_empty())
            .count();

        if num_errors == 0 {
            return CommandResult::stdout(format_args!(
                concat!(
                    "{} All files parsed successfully:\n",
                    "  * Parsed {} files.\n",
                    "  * Skipped {} files with other extensions.\n",
                    "  * Found {} definitions.",
                ),
                output_utils::GREEN_CHECK,
                scan.file_paths.len(),
                scan.num_skipped_files,
                num_definitions,
            ));
        }

        let details = reports
            .iter()
            .flat_map(|r| r.rendered_errors.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::stderr(format_args!(
            "{details}\n{} Found {num_errors} syntax errors in {num_failed_files} of {} files.",
            output_utils::RED_X,
            scan.file_paths.len(),
        ))
    }
}
