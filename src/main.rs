mod config;
mod debug;
mod document;
mod error;

use std::{
    io::{self, IsTerminal as _},
    path::PathBuf,
};

use clap::{ArgMatches, Command, arg, command, value_parser};
use gridfrier::{RenderOptions, TableRenderer};

use crate::{
    config::{Config, UserConfig},
    document::Document,
    error::Error,
};

fn main() -> io::Result<()> {
    let mut cmd = cli();
    let matches = cmd.get_matches_mut();

    match main_with_args(&matches) {
        Err(Error::Usage(msg)) => {
            if let Some(msg) = msg {
                println!("Usage error: {msg}");
                println!();
            }
            cmd.write_help(&mut io::stdout())?;
        }
        Err(err) => {
            eprintln!("{err}");
            #[expect(clippy::exit)]
            std::process::exit(libc::EXIT_FAILURE);
        }
        Ok(()) => {}
    }
    Ok(())
}

fn cli() -> Command {
    command!() // requires `cargo` feature
        .arg(
            arg!(--"print-config" "Write out full config file example to stdout")
                .value_parser(value_parser!(bool)),
        )
        .arg(
            arg!(--"no-validate" "Skip checking that cells tile each table's grid")
                .value_parser(value_parser!(bool)),
        )
        .arg(
            arg!(--"max-depth" <DEPTH> "How deep tables may nest inside cells")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--"log" "log to gridfried_<timestamp>.log file in working directory")
                .value_parser(value_parser!(bool)),
        )
        .arg(
            arg!([path] "The TOML document path, or '-', or omit, for stdin")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn main_with_args(matches: &ArgMatches) -> Result<(), Error> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .display_location_section(true)
        .display_env_section(true)
        .into_hooks();
    eyre_hook.install()?;
    std::panic::set_hook(Box::new(move |panic_info| {
        let msg = format!("{}", panic_hook.panic_report(panic_info));
        log::error!("Panic: {}", msg);
        eprint!("{msg}");
        #[expect(clippy::exit)]
        std::process::exit(libc::EXIT_FAILURE);
    }));

    if *matches.get_one("print-config").unwrap_or(&false) {
        config::print_default()?;
        return Ok(());
    }

    let _logger = debug::cli_logger(*matches.get_one("log").unwrap_or(&false))?;

    let document = read_input(matches.get_one::<PathBuf>("path"))?;

    let options = render_options(config::load()?, matches);
    log::info!("rendering with {options:?}");

    let output = document.render(&TableRenderer::new(options))?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<Document, Error> {
    match path {
        Some(path) if path.as_os_str() != "-" => Document::load(path),
        Some(_) => Document::read(io::stdin().lock()),
        None => {
            if io::stdin().is_terminal() {
                return Err(Error::Usage(Some(
                    "no path nor '-', and stdin is a tty (not a pipe)",
                )));
            }
            Document::read(io::stdin().lock())
        }
    }
}

/// The config file, then command line flags on top.
fn render_options(user_config: UserConfig, matches: &ArgMatches) -> RenderOptions {
    let mut config = Config::from(user_config);
    if let Some(max_depth) = matches.get_one::<usize>("max-depth") {
        config.max_depth = *max_depth;
    }
    if *matches.get_one("no-validate").unwrap_or(&false) {
        config.validate = false;
    }
    RenderOptions::from(config)
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(args: &[&str], user_config: UserConfig) -> RenderOptions {
        let matches = cli()
            .try_get_matches_from(std::iter::once("gridfried").chain(args.iter().copied()))
            .unwrap();
        render_options(user_config, &matches)
    }

    #[test]
    fn defaults_without_flags_or_config() {
        assert_eq!(options(&[], UserConfig::default()), RenderOptions::default());
    }

    #[test]
    fn flags_override_the_config_file() {
        let user_config = UserConfig {
            max_depth: Some(4),
            validate: Some(true),
        };
        assert_eq!(
            options(&["--max-depth", "2", "--no-validate"], user_config.clone()),
            RenderOptions {
                max_depth: 2,
                validate: false,
            }
        );
        assert_eq!(
            options(&["table.toml"], user_config),
            RenderOptions {
                max_depth: 4,
                validate: true,
            }
        );
    }

    #[test]
    fn dash_path_parses() {
        let matches = cli().try_get_matches_from(["gridfried", "-"]).unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("path"),
            Some(&PathBuf::from("-"))
        );
    }
}
