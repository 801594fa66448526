// SPDX-License-Identifier: MPL-2.0
use reid_lens::app::{self, paths, Flags};

const HELP: &str = "\
ReID Lens - image browser for person re-identification datasets

USAGE:
  reid_lens [OPTIONS] [PATH]

ARGS:
  PATH                  Dataset folder or image to open on startup

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, zh-CN)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid --lang value");
            None
        }
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid --config-dir value");
            None
        }
    };

    let root = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        root,
        config_dir,
    })
}
