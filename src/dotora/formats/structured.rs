//! JSON and YAML dumps of the parameter model

use crate::dotora::document::DotOraDocument;

pub fn to_json_str(doc: &DotOraDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

pub fn to_yaml_str(doc: &DotOraDocument) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}
