//! Project operations.

use super::Client;
use crate::domain::{CreateProject, ProjectResourceKind, UpdateProject};
use crate::error::Error;
use crate::schemas::projects::{
    ProjectResourceResponse, ProjectResourcesResponse, ProjectResponse, ProjectsResponse,
};
use crate::transport;

/// Project operations, reached via [`Client::projects`].
pub struct Projects<'a> {
    client: &'a Client,
}

impl Client {
    pub fn projects(&self) -> Projects<'_> {
        Projects { client: self }
    }
}

impl Projects<'_> {
    pub async fn list(&self) -> Result<ProjectsResponse, Error> {
        self.client.fetch(transport::projects::list()).await
    }

    pub async fn get(&self, project_id: u64) -> Result<ProjectResponse, Error> {
        self.client.fetch(transport::projects::get(project_id)).await
    }

    pub async fn create(&self, request: &CreateProject) -> Result<ProjectResponse, Error> {
        self.client.fetch(transport::projects::create(request)).await
    }

    pub async fn update(
        &self,
        project_id: u64,
        request: &UpdateProject,
    ) -> Result<ProjectResponse, Error> {
        self.client
            .fetch(transport::projects::update(project_id, request))
            .await
    }

    /// Deletes the project; the resources in it are moved to the default
    /// project rather than destroyed.
    pub async fn delete(&self, project_id: u64) -> Result<(), Error> {
        self.client
            .execute(transport::projects::delete(project_id))
            .await
    }

    pub async fn resources(&self, project_id: u64) -> Result<ProjectResourcesResponse, Error> {
        self.client
            .fetch(transport::projects::resources(project_id))
            .await
    }

    /// Moves an existing resource into the project.
    pub async fn add_resource(
        &self,
        project_id: u64,
        kind: ProjectResourceKind,
        resource_id: u64,
    ) -> Result<ProjectResourceResponse, Error> {
        self.client
            .fetch(transport::projects::add_resource(project_id, kind, resource_id))
            .await
    }

    /// Transfers a resource to another project. `resource_type` is the
    /// type string the service reports for the resource, as seen in
    /// [`crate::schemas::projects::ProjectResource::resource_type`].
    pub async fn move_resource(
        &self,
        project_id: u64,
        to_project: u64,
        resource_id: u64,
        resource_type: &str,
    ) -> Result<ProjectResourceResponse, Error> {
        self.client
            .fetch(transport::projects::move_resource(
                project_id,
                to_project,
                resource_id,
                resource_type,
            ))
            .await
    }
}
