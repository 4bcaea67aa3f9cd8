// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::logging;
use std::process::ExitCode;

const HELP: &str = "\
iced_gallery - Korea Tourism photo gallery viewer

USAGE:
    iced_gallery [OPTIONS]

OPTIONS:
    --lang <id>            UI language (e.g. en-US, ko)
    --config-dir <dir>     Directory holding settings.toml
    --service-key <key>    Gallery API service key
    --page-size <n>        Photos to request (1-100)
    --log-level <filter>   Tracing filter (e.g. debug, iced_gallery=trace)
    -h, --help             Print this help
";

struct Args {
    flags: Flags,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            service_key: args.opt_value_from_str("--service-key")?,
            page_size: args.opt_value_from_str("--page-size")?,
        },
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unused arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.log_level.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iced_gallery");

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application failed");
            ExitCode::FAILURE
        }
    }
}
