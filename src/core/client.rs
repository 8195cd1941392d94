use crate::core::errors::{Error, Result};
use crate::core::link;
use crate::core::service_tags::ServiceTags;
use log::{info, warn};
use std::env;
use std::time;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ downloads and parses the Azure Service Tags dataset
/// using the default client configuration. Returns a [ServiceTags] object that allows
/// you to query ([filter_by_name](ServiceTags::filter_by_name),
/// [tag_by_name](ServiceTags::tag_by_name)) the published service tags.
pub fn get_service_tags() -> Result<ServiceTags> {
    Client::new().get_service_tags()
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client
/// configuration. The [ClientBuilder] struct provides setters for each configuration
/// value and a [ClientBuilder::build] method to create a [Client] instance.
///
/// ```
/// let client = aztagpolicy::ClientBuilder::new()
///     .source_url("https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519")
///     .timeout(10) // 10 seconds
///     .build();
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from
/// environment variables when set and uses default values when the environment
/// variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment
/// variables, use the [ClientBuilder::default] method to create a new [ClientBuilder]
/// instance.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    source_url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = aztagpolicy::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.source_url(), "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519");
    /// assert_eq!(client.timeout(), 30);
    /// ```
    fn default() -> Self {
        Self {
            source_url: "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519"
                .to_string(),
            timeout: 30, // seconds
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment variables
    /// are not set.
    ///
    /// The environment variables used to set the initial configuration values are:
    /// - `AZTAGPOLICY_URL`
    /// - `AZTAGPOLICY_TIMEOUT`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            source_url: get_env_var("AZTAGPOLICY_URL", default.source_url),
            timeout: get_env_var("AZTAGPOLICY_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the confirmation-page URL hosting the dataset download link; defaults to
    /// `https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519` - the
    /// Microsoft Download Center page for the Azure IP Ranges and Service Tags (Public
    /// Cloud) dataset.
    pub fn source_url<'s>(&'s mut self, source_url: &str) -> &'s mut Self {
        self.source_url = source_url.to_string();
        self
    }

    /// Set the HTTP request timeout (in seconds) applied to both the confirmation-page
    /// and dataset requests; defaults to `30` seconds. A hung connection fails the run
    /// instead of blocking it indefinitely.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            source_url: self.source_url.clone(),
            timeout: self.timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client that discovers the current dataset location from the Microsoft Download
/// Center confirmation page and retrieves the Azure Service Tags JSON document. The two
/// HTTP requests run sequentially with no retries; both carry an explicit request
/// timeout.
///
/// The [Client::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not
/// set.
///
/// If you want to use the default configuration values, ignoring any environment
/// variables, use the [Client::default] method to create a new [Client] instance.
#[derive(Debug, Clone)]
pub struct Client {
    source_url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the confirmation-page URL hosting the dataset download link.
    ///
    /// ```
    /// let client = aztagpolicy::Client::default();
    /// assert_eq!(client.source_url(), "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519");
    /// ```
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Get the HTTP request timeout in seconds. Defaults to 30 seconds.
    ///
    /// ```
    /// let client = aztagpolicy::Client::default();
    /// assert_eq!(client.timeout(), 30);
    /// ```
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Get Service Tags
    -------------------------------------------------------------------------*/

    /// Download and parse the Azure Service Tags dataset.
    ///
    /// Fetches the confirmation page, extracts the dataset download link, fetches the
    /// dataset JSON, and parses it into a [ServiceTags] object. Each stage failure
    /// propagates its own [Error](crate::Error) kind; nothing is retried.
    pub fn get_service_tags(&self) -> Result<ServiceTags> {
        let http = reqwest::blocking::Client::builder()
            .timeout(time::Duration::from_secs(self.timeout))
            .build()
            .map_err(Error::Network)?;

        info!("GET {}", self.source_url);
        let page = get_text(&http, &self.source_url)?;

        let dataset_url = link::extract_download_link(&page)?;
        info!("GET {}", dataset_url);
        let json = get_text(&http, dataset_url)?;

        ServiceTags::from_json(&json)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// GET a URL and return the response body, failing on transport errors and non-success
/// response statuses.
fn get_text(http: &reqwest::blocking::Client, url: &str) -> Result<String> {
    let response = http.get(url).send().map_err(Error::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    response.text().map_err(Error::Network)
}

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
