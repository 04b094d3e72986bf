//! Account status, finances, and access restriction operations.

use super::Client;
use crate::domain::{AllowedCountries, AllowedIps};
use crate::error::Error;
use crate::schemas::account::{
    AccessResponse, AddCountriesResponse, AddIpsResponse, CountriesResponse, FinancesResponse,
    RemoveCountriesResponse, RemoveIpsResponse, StatusResponse,
};
use crate::transport;

/// Account operations, reached via [`Client::account`].
pub struct Account<'a> {
    client: &'a Client,
}

impl Client {
    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }
}

impl Account<'_> {
    pub async fn status(&self) -> Result<StatusResponse, Error> {
        self.client.fetch(transport::account::status()).await
    }

    pub async fn finances(&self) -> Result<FinancesResponse, Error> {
        self.client.fetch(transport::account::finances()).await
    }

    /// Current login-restriction settings and the IP allow-list.
    pub async fn access_restrictions(&self) -> Result<AccessResponse, Error> {
        self.client
            .fetch(transport::account::access_restrictions())
            .await
    }

    /// Country codes currently allowed to log in, keyed by ISO code.
    pub async fn countries(&self) -> Result<CountriesResponse, Error> {
        self.client.fetch(transport::account::countries()).await
    }

    pub async fn toggle_country_restrictions(&self, enabled: bool) -> Result<(), Error> {
        self.client
            .execute(transport::account::toggle_country_restrictions(enabled))
            .await
    }

    pub async fn add_allowed_countries(
        &self,
        countries: &AllowedCountries,
    ) -> Result<AddCountriesResponse, Error> {
        self.client
            .fetch(transport::account::add_allowed_countries(countries))
            .await
    }

    pub async fn remove_allowed_countries(
        &self,
        countries: &AllowedCountries,
    ) -> Result<RemoveCountriesResponse, Error> {
        self.client
            .fetch(transport::account::remove_allowed_countries(countries))
            .await
    }

    pub async fn toggle_ip_restrictions(&self, enabled: bool) -> Result<(), Error> {
        self.client
            .execute(transport::account::toggle_ip_restrictions(enabled))
            .await
    }

    pub async fn add_allowed_ips(&self, ips: &AllowedIps) -> Result<AddIpsResponse, Error> {
        self.client
            .fetch(transport::account::add_allowed_ips(ips))
            .await
    }

    pub async fn remove_allowed_ips(&self, ips: &AllowedIps) -> Result<RemoveIpsResponse, Error> {
        self.client
            .fetch(transport::account::remove_allowed_ips(ips))
            .await
    }
}
