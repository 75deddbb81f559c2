pub mod export_command;
