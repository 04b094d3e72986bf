//! Validated input types. Nothing here performs I/O; constructors check
//! every local constraint and collect all violations before failing.

pub mod period;
pub mod request;
pub mod validation;

pub use period::{PaymentPeriod, Period};
pub use request::{
    AllowedCountries, AllowedIps, BalancerRuleSpec, Configurator, CreateApiKey, CreateBalancer,
    CreateBucket, CreateCluster, CreateDatabase, CreateDedicatedServer, CreateImage,
    CreateMailbox, CreateProject, CreateServer, CreateSshKey, DbConfig, DnsRecordSpec,
    DnsRecordType, ProjectResourceKind, ServerAction, ServerHardware, UpdateBalancer,
    UpdateBucket, UpdateDatabase, UpdateMailbox, UpdateProject, UpdateServer, UpdateSshKey,
    WorkerGroup,
};
pub use validation::{ValidationError, Violation};
