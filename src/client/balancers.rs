//! Load balancer operations.

use super::Client;
use crate::domain::{BalancerRuleSpec, CreateBalancer, UpdateBalancer};
use crate::error::Error;
use crate::schemas::balancers::{
    BalancerIpsResponse, BalancerResponse, BalancerRuleResponse, BalancerRulesResponse,
    BalancersResponse,
};
use crate::transport;

/// Load balancer operations, reached via [`Client::balancers`].
pub struct Balancers<'a> {
    client: &'a Client,
}

impl Client {
    pub fn balancers(&self) -> Balancers<'_> {
        Balancers { client: self }
    }
}

impl Balancers<'_> {
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<BalancersResponse, Error> {
        self.client
            .fetch(transport::balancers::list(limit, offset))
            .await
    }

    pub async fn get(&self, balancer_id: u64) -> Result<BalancerResponse, Error> {
        self.client
            .fetch(transport::balancers::get(balancer_id))
            .await
    }

    pub async fn create(&self, request: &CreateBalancer) -> Result<BalancerResponse, Error> {
        self.client
            .fetch(transport::balancers::create(request))
            .await
    }

    pub async fn update(
        &self,
        balancer_id: u64,
        request: &UpdateBalancer,
    ) -> Result<BalancerResponse, Error> {
        self.client
            .fetch(transport::balancers::update(balancer_id, request))
            .await
    }

    pub async fn delete(&self, balancer_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::balancers::delete(balancer_id))
            .await
    }

    /// IP addresses of the servers behind the balancer.
    pub async fn ips(&self, balancer_id: u64) -> Result<BalancerIpsResponse, Error> {
        self.client
            .fetch(transport::balancers::ips(balancer_id))
            .await
    }

    pub async fn rules(&self, balancer_id: u64) -> Result<BalancerRulesResponse, Error> {
        self.client
            .fetch(transport::balancers::rules(balancer_id))
            .await
    }

    pub async fn add_rule(
        &self,
        balancer_id: u64,
        rule: &BalancerRuleSpec,
    ) -> Result<BalancerRuleResponse, Error> {
        self.client
            .fetch(transport::balancers::add_rule(balancer_id, rule))
            .await
    }

    pub async fn update_rule(
        &self,
        balancer_id: u64,
        rule_id: u64,
        rule: &BalancerRuleSpec,
    ) -> Result<BalancerRuleResponse, Error> {
        self.client
            .fetch(transport::balancers::update_rule(balancer_id, rule_id, rule))
            .await
    }

    pub async fn delete_rule(&self, balancer_id: u64, rule_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::balancers::delete_rule(balancer_id, rule_id))
            .await
    }
}
