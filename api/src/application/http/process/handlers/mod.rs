pub mod process_text;
