use clap::{
    App,
    AppSettings::{
        ColoredHelp, SubcommandRequiredElseHelp, UnifiedHelpMessage, VersionlessSubcommands,
    },
    Arg, SubCommand,
};

// The program version
const VERSION: &str = env!("CARGO_PKG_VERSION");

// Command-line option and subcommand names
pub const COUNT_SUBCOMMAND: &str = "count";
pub const UNRANK_SUBCOMMAND: &str = "unrank";
pub const ENUMERATE_SUBCOMMAND: &str = "enumerate";
pub const SHELL_COMPLETION_SUBCOMMAND: &str = "shell-completion";
pub const SHELL_COMPLETION_SUBCOMMAND_SHELL_OPTION: &str = "shell";
pub const FREE_VARIABLES_OPTION: &str = "free-variables";
pub const SIZE_OPTION: &str = "size";
pub const RANK_OPTION: &str = "rank";
pub const BIG_OPTION: &str = "big";

// Set up the command-line interface.
pub fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new("BLC Enum")
        .version(VERSION)
        .version_short("v")
        .about("")
        .about(
            " \
             BLC Enum counts and unranks the terms of the binary lambda calculus by their \
             encoded size. \
             "
            .trim(),
        )
        .setting(ColoredHelp)
        .setting(SubcommandRequiredElseHelp) // [tag:subcommand-required]
        .setting(UnifiedHelpMessage)
        .setting(VersionlessSubcommands)
        .subcommand(
            SubCommand::with_name(COUNT_SUBCOMMAND)
                .about("Counts the terms of a given size")
                .arg(
                    Arg::with_name(FREE_VARIABLES_OPTION)
                        .value_name("M")
                        .short("m")
                        .long(FREE_VARIABLES_OPTION)
                        .help("Sets the maximum number of free variables")
                        .required(true) // [tag:count-options-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(SIZE_OPTION)
                        .value_name("N")
                        .short("n")
                        .long(SIZE_OPTION)
                        .help("Sets the binary size of the terms")
                        .required(true) // [ref:count-options-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(BIG_OPTION)
                        .long(BIG_OPTION)
                        .help("Counts with arbitrary precision"),
                ),
        )
        .subcommand(
            SubCommand::with_name(UNRANK_SUBCOMMAND)
                .about("Prints the term at a given rank")
                .arg(
                    Arg::with_name(FREE_VARIABLES_OPTION)
                        .value_name("M")
                        .short("m")
                        .long(FREE_VARIABLES_OPTION)
                        .help("Sets the maximum number of free variables")
                        .required(true) // [tag:unrank-options-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(SIZE_OPTION)
                        .value_name("N")
                        .short("n")
                        .long(SIZE_OPTION)
                        .help("Sets the binary size of the terms")
                        .required(true) // [ref:unrank-options-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(RANK_OPTION)
                        .value_name("K")
                        .short("k")
                        .long(RANK_OPTION)
                        .help("Sets the 1-based rank of the term")
                        .required(true) // [tag:unrank-rank-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(BIG_OPTION)
                        .long(BIG_OPTION)
                        .help("Counts with arbitrary precision"),
                ),
        )
        .subcommand(
            SubCommand::with_name(ENUMERATE_SUBCOMMAND)
                .about("Prints every term of a given size in rank order")
                .arg(
                    Arg::with_name(FREE_VARIABLES_OPTION)
                        .value_name("M")
                        .short("m")
                        .long(FREE_VARIABLES_OPTION)
                        .help("Sets the maximum number of free variables")
                        .required(true) // [tag:enumerate-options-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(SIZE_OPTION)
                        .value_name("N")
                        .short("n")
                        .long(SIZE_OPTION)
                        .help("Sets the binary size of the terms")
                        .required(true) // [ref:enumerate-options-required]
                        .takes_value(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name(BIG_OPTION)
                        .long(BIG_OPTION)
                        .help("Counts with arbitrary precision"),
                ),
        )
        .subcommand(
            SubCommand::with_name(SHELL_COMPLETION_SUBCOMMAND)
                .about(
                    " \
                     Prints a shell completion script. Supports Bash, Fish, Zsh, PowerShell, and \
                     Elvish. \
                     "
                    .trim(),
                )
                .arg(
                    Arg::with_name(SHELL_COMPLETION_SUBCOMMAND_SHELL_OPTION)
                        .value_name("SHELL")
                        .help("Bash, Fish, Zsh, PowerShell, or Elvish")
                        .required(true) // [tag:shell-completion-subcommand-shell-required]
                        .takes_value(true)
                        .number_of_values(1),
                ),
        )
}
