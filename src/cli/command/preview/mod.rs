pub mod preview_command;
