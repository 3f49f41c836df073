pub mod audio_file;
pub mod fan_out;
pub mod interface;
pub mod map_file;
pub mod text_report;
