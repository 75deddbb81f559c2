pub mod gps_command;
