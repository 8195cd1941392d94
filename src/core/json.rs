use crate::core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Parse the Azure Service Tags JSON document.
///
/// The parse runs in two stages so failures map onto distinct error kinds: a body that is
/// not JSON at all reports [Error::JsonDecode]; well-formed JSON that does not have the
/// service-tag dataset shape (missing `values`, wrong field types) reports
/// [Error::InvalidDataset].
pub fn parse(json: &str) -> Result<JsonServiceTags<'_>> {
    serde_json::from_str::<serde::de::IgnoredAny>(json).map_err(Error::JsonDecode)?;
    serde_json::from_str(json).map_err(|error| Error::InvalidDataset(error.to_string()))
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON Service Tags Dataset
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonServiceTags<'j> {
    #[serde(default)]
    pub change_number: Option<u64>,

    #[serde(default)]
    pub cloud: Option<&'j str>,

    pub values: Vec<JsonServiceTag<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON Service Tag
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonServiceTag<'j> {
    pub name: &'j str,

    #[serde(default)]
    pub id: Option<&'j str>,

    pub properties: JsonTagProperties<'j>,
}

/*--------------------------------------------------------------------------------------
  JSON Service Tag Properties
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTagProperties<'j> {
    #[serde(default)]
    pub change_number: Option<u64>,

    #[serde(default)]
    pub region: Option<&'j str>,

    #[serde(default)]
    pub platform: Option<&'j str>,

    #[serde(default)]
    pub system_service: Option<&'j str>,

    #[serde(default)]
    pub address_prefixes: Vec<&'j str>,

    #[serde(default)]
    pub network_features: Option<Vec<&'j str>>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
