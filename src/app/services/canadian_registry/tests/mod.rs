//! Shared test utilities and fixtures for the Canadian adapter

use crate::app::models::StationRecord;

pub mod deduplication_tests;

/// Header of the current 7-column export
pub const CURRENT_HEADER_LINE: &str =
    "Channel Type,Frequency(MHz),Power(W),Call sign,Lat,Lon,Licensee";

/// Build a current-schema export from data rows
pub fn create_current_export(rows: &[&str]) -> String {
    let mut text = String::from(CURRENT_HEADER_LINE);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

/// A current-schema export covering the merge, suffix and rejection rules
pub fn create_test_current_export() -> String {
    create_current_export(&[
        "AM,0.54,50000,CBT,48.9486,-55.6564,Canadian Broadcasting Corporation",
        "AM,0.54,1000,CBT-1,48.95,-55.66,Canadian Broadcasting Corporation",
        "AM,0.69,50000,CBF,45.4981,-73.5978,",
        "AM,0.99,10000,CBW,49.8397,-97.2497,Canadian Broadcasting Corporation",
        "AM,0.99,50000,CBW-AX1,49.84,-97.25,Canadian Broadcasting Corporation",
        "AM,1.01,0,CFRB,0,0,Bell Media",
        "Channel Type,Frequency(MHz),Power(W),Call sign,Lat,Lon,Licensee",
        "AM,1.02,abc,CKXX,47.0,-53.0,Somebody",
        "AM,1.03,5000",
    ])
}

/// A legacy quoted export with an embedded comma and a duplicate row
pub fn create_test_legacy_export() -> String {
    [
        r#""Call Sign","Frequency","Power","City","Province","Latitude","Longitude","Licensee""#,
        r#""CBU","0.69","50000","Vancouver","BC","49.1372","-123.0697","Canadian Broadcasting Corporation""#,
        r#""CKNW","0.98","50000","New Westminster","BC","49.1569","-122.9947","Corus Radio, Inc.""#,
        r#""CKNW","0.98","100000","Vancouver","BC","49.15","-122.99","Someone Else""#,
        r#""CBU-1","0.69","40","","","49.5","-123.5","""#,
        r#""CFAX","1.07","x","Victoria","BC","48.4","-123.3","Bell Media""#,
    ]
    .join("\n")
}

/// Find a record by call sign
pub fn by_call_sign<'a>(records: &'a [StationRecord], call_sign: &str) -> Option<&'a StationRecord> {
    records.iter().find(|r| r.call_sign == call_sign)
}
