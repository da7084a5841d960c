mod cli;

use crate::cli::{
    cli, BIG_OPTION, COUNT_SUBCOMMAND, ENUMERATE_SUBCOMMAND, FREE_VARIABLES_OPTION, RANK_OPTION,
    SHELL_COMPLETION_SUBCOMMAND, SHELL_COMPLETION_SUBCOMMAND_SHELL_OPTION, SIZE_OPTION,
    UNRANK_SUBCOMMAND,
};
use atty::Stream;
use blc_enum::{
    count, count_big, enumerate_terms, enumerate_terms_big, unrank, unrank_big, CodeStr, Error,
};
use clap::{ArgMatches, Shell};
use num_bigint::BigUint;
use std::{io::stdout, process::exit};

// The name of the program binary
const BIN_NAME: &str = "blc-enum";

// Parse a numeric option of a subcommand.
fn integer_option(matches: &ArgMatches, option: &str) -> Result<i64, Error> {
    let value = matches.value_of(option).unwrap(); // Required by the CLI setup

    value.parse::<i64>().map_err(|error| {
        Error::InvalidArgument(format!(
            "Unable to parse {} as an integer. Reason: {}",
            value.code_str(),
            error,
        ))
    })
}

// Print the number of terms with at most `m` free variables and size `n`.
fn count_command(matches: &ArgMatches) -> Result<(), Error> {
    let m = integer_option(matches, FREE_VARIABLES_OPTION)?;
    let n = integer_option(matches, SIZE_OPTION)?;

    if matches.is_present(BIG_OPTION) {
        println!("{}", count_big(m, n)?);
    } else {
        println!("{}", count(m, n)?);
    }

    Ok(())
}

// Print the term at a given rank.
fn unrank_command(matches: &ArgMatches) -> Result<(), Error> {
    let m = integer_option(matches, FREE_VARIABLES_OPTION)?;
    let n = integer_option(matches, SIZE_OPTION)?;

    if matches.is_present(BIG_OPTION) {
        let value = matches.value_of(RANK_OPTION).unwrap(); // [ref:unrank-rank-required]
        let rank = value.parse::<BigUint>().map_err(|error| {
            Error::InvalidArgument(format!(
                "Unable to parse {} as an integer. Reason: {}",
                value.code_str(),
                error,
            ))
        })?;

        println!("{}", unrank_big(m, n, &rank)?);
    } else {
        let rank = integer_option(matches, RANK_OPTION)?;

        println!("{}", unrank(m, n, rank)?);
    }

    Ok(())
}

// Print every term of the class in ascending rank order.
fn enumerate_command(matches: &ArgMatches) -> Result<(), Error> {
    let m = integer_option(matches, FREE_VARIABLES_OPTION)?;
    let n = integer_option(matches, SIZE_OPTION)?;

    if matches.is_present(BIG_OPTION) {
        for term in &enumerate_terms_big(m, n)? {
            println!("{}", term);
        }
    } else {
        for term in &enumerate_terms(m, n)? {
            println!("{}", term);
        }
    }

    Ok(())
}

// Print a shell completion script to STDOUT.
fn shell_completion(shell: &str) -> Result<(), Error> {
    // Determine which shell the user wants the shell completion for.
    let shell_variant = match shell.trim().to_lowercase().as_ref() {
        "bash" => Shell::Bash,
        "fish" => Shell::Fish,
        "zsh" => Shell::Zsh,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            return Err(Error::InvalidArgument(format!(
                "Unknown shell {}. Must be one of Bash, Fish, Zsh, PowerShell, or Elvish.",
                shell.code_str(),
            )));
        }
    };

    // Write the script to STDOUT.
    cli().gen_completions_to(BIN_NAME, shell_variant, &mut stdout());

    // If we made it this far, nothing went wrong.
    Ok(())
}

// Program entrypoint
fn entry() -> Result<(), Error> {
    // Determine whether to print colored output based on whether STDOUT is connected to a
    // terminal.
    colored::control::set_override(atty::is(Stream::Stdout));

    // Parse command-line arguments.
    let matches = cli().get_matches();

    // Decide what to do based on the subcommand.
    match matches.subcommand_name() {
        // [tag:count-subcommand]
        Some(subcommand) if subcommand == COUNT_SUBCOMMAND => {
            count_command(
                matches.subcommand_matches(COUNT_SUBCOMMAND).unwrap(), // [ref:count-subcommand]
            )?;
        }

        // [tag:unrank-subcommand]
        Some(subcommand) if subcommand == UNRANK_SUBCOMMAND => {
            unrank_command(
                matches.subcommand_matches(UNRANK_SUBCOMMAND).unwrap(), // [ref:unrank-subcommand]
            )?;
        }

        // [tag:enumerate-subcommand]
        Some(subcommand) if subcommand == ENUMERATE_SUBCOMMAND => {
            enumerate_command(
                matches.subcommand_matches(ENUMERATE_SUBCOMMAND).unwrap(), // [ref:enumerate-subcommand]
            )?;
        }

        // [tag:shell-completion-subcommand]
        Some(subcommand) if subcommand == SHELL_COMPLETION_SUBCOMMAND => {
            shell_completion(
                matches
                    .subcommand_matches(SHELL_COMPLETION_SUBCOMMAND)
                    .unwrap() // [ref:shell-completion-subcommand]
                    .value_of(SHELL_COMPLETION_SUBCOMMAND_SHELL_OPTION)
                    .unwrap(), // [ref:shell-completion-subcommand-shell-required]
            )?;
        }

        // This branch should not be reachable due to [ref:subcommand-required].
        Some(_) | None => panic!(),
    }

    // If we made it this far, nothing went wrong.
    Ok(())
}

// Let the fun begin!
fn main() {
    // Jump to the entrypoint and report any resulting errors.
    if let Err(e) = entry() {
        eprintln!("{}", e);
        exit(1);
    }
}
