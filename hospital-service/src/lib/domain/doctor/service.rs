use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::CreateDoctorCommand;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::doctor::ports::DoctorServicePort;

/// Domain service implementation for doctor operations.
pub struct DoctorService<DR>
where
    DR: DoctorRepository,
{
    repository: Arc<DR>,
}

impl<DR> DoctorService<DR>
where
    DR: DoctorRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<DR> DoctorServicePort for DoctorService<DR>
where
    DR: DoctorRepository,
{
    async fn create_doctor(&self, command: CreateDoctorCommand) -> Result<Doctor, DoctorError> {
        let doctor = self.repository.create(command).await?;
        tracing::info!(doctor_id = %doctor.id, crm = doctor.crm.as_str(), "Doctor registered");
        Ok(doctor)
    }

    async fn get_doctor(&self, id: DoctorId) -> Result<Doctor, DoctorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DoctorError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::doctor::models::Crm;

    mock! {
        pub TestDoctorRepository {}

        #[async_trait]
        impl DoctorRepository for TestDoctorRepository {
            async fn create(&self, command: CreateDoctorCommand) -> Result<Doctor, DoctorError>;
            async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, DoctorError>;
        }
    }

    #[tokio::test]
    async fn test_create_doctor_success() {
        let mut repository = MockTestDoctorRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|command| Ok(command.into_doctor(DoctorId(3))));

        let service = DoctorService::new(Arc::new(repository));

        let doctor = service
            .create_doctor(CreateDoctorCommand {
                name: "Dr. Rodrigo Santos".to_string(),
                specialty: "Ortopedia".to_string(),
                crm: Crm::new("11223-SP").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(doctor.id, DoctorId(3));
        assert_eq!(doctor.specialty, "Ortopedia");
    }

    #[tokio::test]
    async fn test_get_doctor_not_found() {
        let mut repository = MockTestDoctorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = DoctorService::new(Arc::new(repository));

        let result = service.get_doctor(DoctorId(42)).await;
        assert!(matches!(result, Err(DoctorError::NotFound(DoctorId(42)))));
    }
}
