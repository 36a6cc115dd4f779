use async_trait::async_trait;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::CreateDoctorCommand;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;

/// Port for doctor domain service operations.
#[async_trait]
pub trait DoctorServicePort: Send + Sync + 'static {
    async fn create_doctor(&self, command: CreateDoctorCommand) -> Result<Doctor, DoctorError>;

    /// # Errors
    /// * `NotFound` - No doctor with this ID
    async fn get_doctor(&self, id: DoctorId) -> Result<Doctor, DoctorError>;
}

/// Persistence operations for doctors.
#[async_trait]
pub trait DoctorRepository: Send + Sync + 'static {
    /// Insert a doctor under the next free ID.
    async fn create(&self, command: CreateDoctorCommand) -> Result<Doctor, DoctorError>;

    async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, DoctorError>;
}
