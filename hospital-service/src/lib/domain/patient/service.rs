use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::CreatePatientCommand;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientId;
use crate::domain::patient::ports::PatientRepository;
use crate::domain::patient::ports::PatientServicePort;

/// Domain service implementation for patient operations.
pub struct PatientService<PR>
where
    PR: PatientRepository,
{
    repository: Arc<PR>,
}

impl<PR> PatientService<PR>
where
    PR: PatientRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PatientServicePort for PatientService<PR>
where
    PR: PatientRepository,
{
    async fn create_patient(
        &self,
        command: CreatePatientCommand,
    ) -> Result<Patient, PatientError> {
        let patient = self.repository.create(command).await?;
        tracing::info!(patient_id = %patient.id, "Patient registered");
        Ok(patient)
    }

    async fn get_patient(&self, id: PatientId) -> Result<Patient, PatientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PatientError::NotFound(id))
    }
}
