pub mod output_format;
pub mod show_command;
