use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{CaseNumber, Host, InternalNumber, Material, SampleNumber};

/// One typed row of a LIMS sample export.
///
/// Only `material` and `sample_date` may be absent; every other field is
/// required by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub sample_number: SampleNumber,
    pub internal_number: InternalNumber,
    pub case_number: CaseNumber,
    pub sample_date: Option<NaiveDate>,
    pub material: Option<Material>,
    pub host: Host,
    pub received_at: NaiveDateTime,
}
