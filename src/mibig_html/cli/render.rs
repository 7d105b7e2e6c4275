use colored::Colorize;
use mibig_html::api::{CmdMessage, MessageLevel};
use mibig_html::config::{RenderOptions, CONFIG_KEYS};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_config(config: &RenderOptions) {
    for line in config_lines(config) {
        println!("{}", line);
    }
}

fn config_lines(config: &RenderOptions) -> Vec<String> {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).ok().map(|value| format!("{} = {}", key, value)))
        .collect()
}
