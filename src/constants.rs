//! Centralized constants for the coordgen crate
//!
//! Fixed strings shared between the writers and the CLI.

/// Output file format constants
pub mod output {
    /// Header row of the tabular output
    pub const CSV_HEADER: &str = "X,Y";

    /// Message printed once all three files have been written
    pub const SAVED_MESSAGE: &str = "Coordinates saved to JSON, CSV and TXT files.";
}

/// Console report constants
pub mod report {
    /// Decimal places used when printing coordinates
    pub const DECIMALS: usize = 16;
}
