// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_default(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_default(),
        initial_query: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
