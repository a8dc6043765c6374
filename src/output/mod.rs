// Terminal output: stream handles and table rendering
pub mod io_streams;
pub mod table_printer;

pub use io_streams::*;
pub use table_printer::*;
