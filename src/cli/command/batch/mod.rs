pub mod batch_command;
