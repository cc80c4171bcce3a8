use crate::Cli;
use crate::CommandResult;

/// A `graphqle` sub-command.
///
/// Commands never print directly; everything meant for the user goes into
/// the returned [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
