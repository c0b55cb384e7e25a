//! Command dispatch: each subcommand runs one recipe and prints its result

use std::io;
use std::path::Path;

use chrono::Days;
use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, EscapeCommands, MathCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::collections::{adult_names, average_age, drain_to_vec, filter_equal, group_by_age};
use crate::config::Settings;
use crate::domain::{
    name_or_unknown, parent_name_or_unknown, sample_person, sample_persons, ClosedRange,
};
use crate::escape::{html_escape, url_form_parameter_escape};
use crate::fsio::{copy_file, post_order_traversal, read_lines, render_tree};
use crate::math::{checked_pow, divide, RoundingMode};
use crate::ordering::{by_name_then_age, sorted_persons};
use crate::stopwatch::{do_something, time};
use crate::strings::{repeat, Joiner, Splitter};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Join {
            parts,
            separator,
            use_for_null,
        }) => _join(&settings, parts, separator.as_deref(), use_for_null.as_deref()),
        Some(Commands::Split {
            input,
            entry_sep,
            kv_sep,
        }) => _split(input, entry_sep, kv_sep),
        Some(Commands::Adults) => _adults(),
        Some(Commands::Group) => _group(),
        Some(Commands::Sort) => _sort(),
        Some(Commands::Range { first, last, probe }) => _range(*first, *last, *probe),
        Some(Commands::Escape { command }) => _escape(command),
        Some(Commands::Math { command }) => _math(command),
        Some(Commands::Lines { file }) => _lines(&settings.resolve(file)),
        Some(Commands::Copy { from, to }) => {
            _copy(&settings.resolve(from), &settings.resolve(to))
        }
        Some(Commands::Tree { dir, render }) => _tree(&settings.resolve(dir), *render),
        Some(Commands::Stopwatch { millis }) => _stopwatch(&settings, *millis),
        Some(Commands::Tour) => _tour(&settings),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(settings))]
fn _join(
    settings: &Settings,
    parts: &[String],
    separator: Option<&str>,
    use_for_null: Option<&str>,
) -> CliResult<()> {
    let separator = separator.unwrap_or(&settings.separator);
    let joiner = match use_for_null {
        Some(text) => Joiner::on(separator).use_for_null(text),
        None => Joiner::on(separator).skip_nulls(),
    };
    let parts = parts
        .iter()
        .map(|p| if *p == settings.null_text { None } else { Some(p) });
    output::info(&joiner.join(parts)?);
    Ok(())
}

#[instrument]
fn _split(input: &str, entry_sep: &str, kv_sep: &str) -> CliResult<()> {
    let pairs = Splitter::on(entry_sep)?
        .with_key_value_separator(kv_sep)?
        .split(input)?;
    for (k, v) in pairs {
        output::action(&k, &v);
    }
    Ok(())
}

#[instrument]
fn _adults() -> CliResult<()> {
    for name in adult_names(&sample_persons()) {
        output::info(&name);
    }
    Ok(())
}

#[instrument]
fn _group() -> CliResult<()> {
    let persons = sample_persons();
    for (age, group) in group_by_age(&persons) {
        let names: Vec<&str> = group.iter().map(|p| p.name()).collect();
        output::action(&age.to_string(), &names.join(", "));
    }
    output::detail(&format!("average age: {:.1}", average_age(&persons)));
    Ok(())
}

#[instrument]
fn _sort() -> CliResult<()> {
    for person in sorted_persons(&sample_persons(), by_name_then_age) {
        output::info(&person);
    }
    Ok(())
}

#[instrument]
fn _range(
    first: chrono::NaiveDate,
    last: chrono::NaiveDate,
    probe: Option<chrono::NaiveDate>,
) -> CliResult<()> {
    let range = ClosedRange::closed(first, last)?;
    let probe = match probe {
        Some(day) => day,
        None => last
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CliError::InvalidArgs(format!("no day after {}", last)))?,
    };
    output::action("range", &range);
    output::action("days", &range.len_days());
    output::action(&format!("contains {}", probe), &range.contains(&probe));
    Ok(())
}

#[instrument]
fn _escape(command: &EscapeCommands) -> CliResult<()> {
    match command {
        EscapeCommands::Html { text } => output::info(&html_escape(text)),
        EscapeCommands::Url { text } => output::info(&url_form_parameter_escape(text)),
    }
    Ok(())
}

#[instrument]
fn _math(command: &MathCommands) -> CliResult<()> {
    let result = match command {
        MathCommands::Pow { base, exp } => checked_pow(*base, *exp)?,
        MathCommands::Divide { p, q, mode } => divide(*p, *q, *mode)?,
    };
    output::info(&result);
    Ok(())
}

#[instrument]
fn _lines(file: &Path) -> CliResult<()> {
    for line in read_lines(file)? {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _copy(from: &Path, to: &Path) -> CliResult<()> {
    let bytes = copy_file(from, to)?;
    output::success(&format!(
        "copied {} bytes: {} -> {}",
        bytes,
        from.display(),
        to.display()
    ));
    Ok(())
}

#[instrument]
fn _tree(dir: &Path, render: bool) -> CliResult<()> {
    if render {
        output::info(&render_tree(dir)?);
    } else {
        for path in post_order_traversal(dir)? {
            output::info(&path.display());
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _stopwatch(settings: &Settings, millis: Option<u64>) -> CliResult<()> {
    let duration = millis
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| settings.sleep());
    let ((), stopwatch) = time("Do something", || do_something(duration));
    output::action("elapsed", &stopwatch);
    Ok(())
}

/// Run the in-memory recipes one after another, separated by a rule.
#[instrument(skip(settings))]
fn _tour(settings: &Settings) -> CliResult<()> {
    let rule = repeat("-", settings.rule_width);

    output::header("strings");
    let joined = Joiner::on(&settings.separator)
        .skip_nulls()
        .join([Some("a"), Some("b"), Some("c"), None])?;
    output::action("joined", &joined);
    let map = Splitter::on(" ")?
        .with_key_value_separator(":")?
        .split("a:1 b:2")?;
    output::action("split", &format!("{:?}", map));
    output::info(&rule);

    output::header("collections");
    let persons = sample_persons();
    output::action("adults", &adult_names(&persons).join(", "));
    output::action("average age", &average_age(&persons));
    output::action("sorted", &format!("{:?}", sorted_persons(&persons, by_name_then_age)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()));
    let letters = ["a", "b", "c"];
    output::action("equal to a", &format!("{:?}", filter_equal(&letters, &"a").collect::<Vec<_>>()));
    output::action("drained", &format!("{:?}", drain_to_vec(["a", "b"].into_iter())));
    output::info(&rule);

    output::header("optional");
    let person = sample_person();
    output::action("name", &name_or_unknown(person.as_ref()));
    output::action("parent", &parent_name_or_unknown(person.as_ref()));
    output::info(&rule);

    output::header("math");
    output::action("2^10", &checked_pow(2, 10)?);
    output::action("7/2 HALF_UP", &divide(7, 2, RoundingMode::HalfUp)?);
    output::action(
        "HALF_UP present",
        &RoundingMode::get_if_present("HALF_UP").is_some(),
    );
    output::info(&rule);

    output::header("escape");
    output::action("html", &html_escape("1 < 2"));
    output::action("url", &url_form_parameter_escape("hi\nthere"));
    Ok(())
}

#[instrument(skip(settings))]
fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
