use async_trait::async_trait;

use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::CreatePatientCommand;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientId;

/// Port for patient domain service operations.
#[async_trait]
pub trait PatientServicePort: Send + Sync + 'static {
    /// Register a new patient.
    ///
    /// # Returns
    /// Created patient with its allocated ID
    async fn create_patient(&self, command: CreatePatientCommand) -> Result<Patient, PatientError>;

    /// Retrieve a patient by ID.
    ///
    /// # Errors
    /// * `NotFound` - No patient with this ID
    async fn get_patient(&self, id: PatientId) -> Result<Patient, PatientError>;
}

/// Persistence operations for patients.
#[async_trait]
pub trait PatientRepository: Send + Sync + 'static {
    /// Insert a patient under the next free ID.
    async fn create(&self, command: CreatePatientCommand) -> Result<Patient, PatientError>;

    /// Retrieve a patient by ID.
    ///
    /// # Returns
    /// Optional patient (None if not found)
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, PatientError>;
}
