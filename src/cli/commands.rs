use clap::Parser;

/// patodo takes no subcommands; running it opens the task list.
#[derive(Parser)]
#[command(
    name = "patodo",
    about = concat!("patodo v", env!("CARGO_PKG_VERSION"), " - a small terminal task tracker"),
    long_about = "Tasks are stored in ~/.config/patodo/tasks.json. \
                  Optional settings live in ~/.config/patodo/config.toml.",
    version
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rejects_arguments() {
        assert!(Cli::try_parse_from(["patodo"]).is_ok());
        assert!(Cli::try_parse_from(["patodo", "list"]).is_err());
        assert!(Cli::try_parse_from(["patodo", "--json"]).is_err());
    }
}
