pub mod compare_command;
