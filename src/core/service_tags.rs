use crate::core::errors::{Error, Result};
use crate::core::json;
use crate::core::match_policy::MatchPolicy;
use ipnetwork::IpNetwork;
use log::{debug, warn};

/*-------------------------------------------------------------------------------------------------
  Service Tags
-------------------------------------------------------------------------------------------------*/

/// The parsed Azure Service Tags dataset: the published cloud/change-number metadata and
/// the service-tag records in dataset order.
#[derive(Debug)]
pub struct ServiceTags {
    cloud: Option<String>,
    change_number: Option<u64>,
    tags: Vec<ServiceTag>,
}

/// One service-tag record: a named set of address prefixes.
#[derive(Debug, Clone)]
pub struct ServiceTag {
    pub name: String,
    pub id: Option<String>,
    pub region: Option<String>,
    pub system_service: Option<String>,
    pub prefixes: Vec<IpNetwork>,
}

/*--------------------------------------------------------------------------------------
  Service Tags Implementation
--------------------------------------------------------------------------------------*/

impl ServiceTags {
    /// Parse the Azure Service Tags dataset from its JSON document.
    ///
    /// Every address prefix is parsed into an [IpNetwork]; a prefix that is not valid
    /// CIDR notation fails with [Error::InvalidDataset] naming the offending value.
    /// Rendering a parsed network's display form guarantees the generated policy
    /// document cannot be corrupted by unexpected characters in the dataset. A bare
    /// address without a mask length normalizes to a host network (`1.2.3.4` becomes
    /// `1.2.3.4/32`, `2603:1000::1` becomes `2603:1000::1/128`), so rendered values
    /// are always full CIDR notation rather than the dataset's verbatim text.
    pub fn from_json(json: &str) -> Result<ServiceTags> {
        let json_service_tags = json::parse(json)?;

        let tags = json_service_tags
            .values
            .iter()
            .map(|json_tag| {
                let prefixes: Result<Vec<IpNetwork>> = json_tag
                    .properties
                    .address_prefixes
                    .iter()
                    .map(|prefix| {
                        prefix.parse::<IpNetwork>().map_err(|error| {
                            Error::InvalidDataset(format!(
                                "bad address prefix {:?} in service tag {:?}: {}",
                                prefix, json_tag.name, error
                            ))
                        })
                    })
                    .collect();

                Ok(ServiceTag {
                    name: json_tag.name.to_string(),
                    id: json_tag.id.map(str::to_string),
                    region: json_tag.properties.region.map(str::to_string),
                    system_service: json_tag.properties.system_service.map(str::to_string),
                    prefixes: prefixes?,
                })
            })
            .collect::<Result<Vec<ServiceTag>>>()?;

        Ok(ServiceTags {
            cloud: json_service_tags.cloud.map(str::to_string),
            change_number: json_service_tags.change_number,
            tags,
        })
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Cloud name published with the dataset (e.g. `Public`).
    pub fn cloud(&self) -> Option<&str> {
        self.cloud.as_deref()
    }

    /// Dataset change number published with the dataset.
    pub fn change_number(&self) -> Option<u64> {
        self.change_number
    }

    /// All service-tag records, in dataset order.
    pub fn tags(&self) -> &[ServiceTag] {
        &self.tags
    }

    /// Service-tag names, in dataset order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.name.as_str())
    }

    /*-------------------------------------------------------------------------
      Filter
    -------------------------------------------------------------------------*/

    /// All service tags whose name exactly equals `name` (case-sensitive), in dataset
    /// order. An empty result is not an error.
    pub fn filter_by_name(&self, name: &str) -> Vec<&ServiceTag> {
        let matches: Vec<&ServiceTag> = self.tags.iter().filter(|tag| tag.name == name).collect();
        if matches.is_empty() {
            debug!("No service tag named {:?} in the dataset", name);
        }
        matches
    }

    /// The service tag whose name exactly equals `name`, applying `policy` when the
    /// dataset contains more than one match. Zero matches fail with [Error::NoMatch].
    pub fn tag_by_name(&self, name: &str, policy: MatchPolicy) -> Result<&ServiceTag> {
        let matches = self.filter_by_name(name);

        match (matches.len(), policy) {
            (0, _) => Err(Error::NoMatch(name.to_string())),
            (1, _) => Ok(matches[0]),
            (count, MatchPolicy::ErrorOnAmbiguity) => Err(Error::AmbiguousMatch {
                name: name.to_string(),
                count,
            }),
            (count, MatchPolicy::FirstMatch) => {
                warn!(
                    "{} service tags named {:?}; using the first match",
                    count, name
                );
                Ok(matches[0])
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
