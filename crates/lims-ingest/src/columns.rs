//! Column names of the LIMS sample export.
//!
//! Names are matched exactly (case-sensitive, after header normalisation).

pub const SAMPLE_NUMBER: &str = "Prøve id";
pub const INTERNAL_NUMBER: &str = "Internt nr.";
pub const CASE_NUMBER: &str = "Sags ID";
pub const MATERIAL: &str = "Materiale";
pub const HOST: &str = "Dyreart";
pub const RECEIVED_AT: &str = "Modtagelsestidspunkt";
pub const SAMPLE_DATE: &str = "Udtagelsesdato";

/// Columns a sample export must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    SAMPLE_NUMBER,
    INTERNAL_NUMBER,
    CASE_NUMBER,
    MATERIAL,
    HOST,
    RECEIVED_AT,
    SAMPLE_DATE,
];
