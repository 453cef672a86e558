pub mod csv_table;
pub mod discovery;

pub use csv_table::{read_csv_table, read_headerless_table};
pub use discovery::{find_file_recursive, list_matching_files};
