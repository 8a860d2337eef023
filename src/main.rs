// SPDX-License-Identifier: MPL-2.0
use iced_swatch::app::{self, Flags};
use iced_swatch::ui::theming::ThemeMode;
use std::process::ExitCode;

const HELP: &str = "\
iced_swatch - pick a color from a fixed list

USAGE:
  iced_swatch [OPTIONS]

OPTIONS:
  --theme <MODE>        light, dark or system (overrides settings.toml)
  --config-dir <DIR>    directory holding settings.toml
  -h, --help            print this help

ENVIRONMENT:
  ICED_SWATCH_CONFIG_DIR  config directory when --config-dir is absent
  RUST_LOG                log filter (default: iced_swatch=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        theme_mode: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("iced_swatch=info"),
    )
    .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application exited with error: {err}");
            ExitCode::FAILURE
        }
    }
}
