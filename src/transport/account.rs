//! Account and access-restriction endpoints.

use serde_json::json;

use super::RequestDescriptor;
use crate::domain::{AllowedCountries, AllowedIps};

pub(crate) fn status() -> RequestDescriptor {
    RequestDescriptor::get("account/status")
}

pub(crate) fn finances() -> RequestDescriptor {
    RequestDescriptor::get("account/finances")
}

pub(crate) fn access_restrictions() -> RequestDescriptor {
    RequestDescriptor::get("auth/access")
}

pub(crate) fn countries() -> RequestDescriptor {
    RequestDescriptor::get("auth/access/countries")
}

pub(crate) fn toggle_country_restrictions(enabled: bool) -> RequestDescriptor {
    RequestDescriptor::post("auth/access/countries/enabled").json(json!({"is_enabled": enabled}))
}

pub(crate) fn add_allowed_countries(countries: &AllowedCountries) -> RequestDescriptor {
    RequestDescriptor::post("auth/access/countries").json(json!({"countries": countries.countries}))
}

pub(crate) fn remove_allowed_countries(countries: &AllowedCountries) -> RequestDescriptor {
    RequestDescriptor::delete("auth/access/countries")
        .json(json!({"countries": countries.countries}))
}

pub(crate) fn toggle_ip_restrictions(enabled: bool) -> RequestDescriptor {
    RequestDescriptor::post("auth/access/ips/enabled").json(json!({"is_enabled": enabled}))
}

pub(crate) fn add_allowed_ips(ips: &AllowedIps) -> RequestDescriptor {
    RequestDescriptor::post("auth/access/ips").json(json!({"ips": ips.ips}))
}

pub(crate) fn remove_allowed_ips(ips: &AllowedIps) -> RequestDescriptor {
    RequestDescriptor::delete("auth/access/ips").json(json!({"ips": ips.ips}))
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use super::super::Method;
    use super::*;

    #[test]
    fn ip_allow_list_serializes_addresses_as_strings() {
        let ips = AllowedIps::new(vec![
            IpAddr::from([198, 51, 100, 1]),
            IpAddr::from([203, 0, 113, 9]),
        ])
        .unwrap();
        let descriptor = add_allowed_ips(&ips);
        assert_eq!(descriptor.method(), Method::Post);
        assert_eq!(descriptor.path(), "auth/access/ips");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"ips": ["198.51.100.1", "203.0.113.9"]})
        );
    }

    #[test]
    fn toggles_post_the_enabled_flag() {
        let descriptor = toggle_country_restrictions(true);
        assert_eq!(descriptor.path(), "auth/access/countries/enabled");
        assert_eq!(descriptor.body().unwrap(), &json!({"is_enabled": true}));
    }
}
