use std::io::Write;

use super::{
    CliError, Command, commands,
    types::{CommandContext, CommandMetadata, CommandResult},
};

/// Registry of player commands.
///
/// Commands keep their registration order, which is also the order of the
/// command catalogue.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in command.
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();
        registry.register_all_commands();
        registry
    }

    /// Registers a command.
    ///
    /// A command with the same name replaces the existing one in place.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        let name = command.metadata().name;

        match self
            .commands
            .iter()
            .position(|existing| existing.metadata().name == name)
        {
            Some(index) => self.commands[index] = command,
            None => self.commands.push(command),
        }
    }

    /// Looks up a command by its command word.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.metadata().name == name)
            .map(|command| &**command)
    }

    /// Executes a command by name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if no command has that name,
    /// `CliError::InvalidArguments` if the argument count doesn't match the
    /// command's metadata. Other errors come from the command itself.
    pub async fn execute(
        &self,
        command_name: &str,
        context: &CommandContext<'_>,
        args: &[String],
        out: &mut (dyn Write + Send),
    ) -> CommandResult {
        let found_command = self
            .find(command_name)
            .ok_or_else(|| CliError::CommandNotFound(command_name.to_string()))?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(context, args, out).await
    }

    /// Renders the list of supported commands.
    pub fn catalogue(&self) -> String {
        let mut output = String::from("The following commands are supported:");

        for command in &self.commands {
            let metadata = command.metadata();
            let usage = metadata
                .args
                .iter()
                .fold(metadata.name.clone(), |usage, arg| {
                    format!("{usage} {}", arg.name)
                });

            output.push_str(&format!("\n\t{usage}\t{}", metadata.description));
        }

        output
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "'{}' expects at least {} argument(s), got {}",
                metadata.name,
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "'{}' expects at most {} argument(s), got {}",
                metadata.name,
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all built-in player commands.
    pub fn register_all_commands(&mut self) {
        commands::register_commands(self);
    }
}
