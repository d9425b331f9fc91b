// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        carousels: args.opt_value_from_str("--carousels").unwrap_or(None),
        pages: args.opt_value_from_str("--pages").unwrap_or(None),
    };

    app::run(flags)
}
