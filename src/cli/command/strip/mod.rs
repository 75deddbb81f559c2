pub mod strip_command;
