//! Table model and CSV input/output.

pub mod csv_io;
pub mod model;

pub use csv_io::{read_table, read_table_from, write_profile, write_profile_to};
pub use model::{Column, Profile, ProfiledColumn, Table};
