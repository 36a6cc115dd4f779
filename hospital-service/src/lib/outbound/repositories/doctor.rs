use async_trait::async_trait;

use crate::domain::doctor::errors::DoctorError;
use crate::domain::doctor::models::CreateDoctorCommand;
use crate::domain::doctor::models::Crm;
use crate::domain::doctor::models::Doctor;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorRepository;
use crate::outbound::repositories::table::RecordTable;

/// (name, specialty, CRM)
const REFERENCE_DOCTORS: [(&str, &str, &str); 2] = [
    ("Dr. Bruno Alves", "Cardiologia", "12345-SP"),
    ("Dra. Fernanda Costa", "Dermatologia", "67890-RJ"),
];

pub struct InMemoryDoctorRepository {
    table: RecordTable<Doctor>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self {
            table: RecordTable::new(),
        }
    }

    /// Repository holding the two demo doctors under IDs 1 and 2.
    ///
    /// # Errors
    /// Propagates validation failures of the built-in records
    pub fn with_reference_data() -> Result<Self, DoctorError> {
        let commands = REFERENCE_DOCTORS
            .iter()
            .map(|(name, specialty, crm)| {
                Ok(CreateDoctorCommand {
                    name: name.to_string(),
                    specialty: specialty.to_string(),
                    crm: Crm::new(crm)?,
                })
            })
            .collect::<Result<Vec<_>, DoctorError>>()?;

        Ok(Self {
            table: RecordTable::seeded(commands, |id, command| {
                command.into_doctor(DoctorId(id))
            }),
        })
    }
}

impl Default for InMemoryDoctorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn create(&self, command: CreateDoctorCommand) -> Result<Doctor, DoctorError> {
        Ok(self
            .table
            .insert_with(|id| command.into_doctor(DoctorId(id)))
            .await)
    }

    async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, DoctorError> {
        Ok(self.table.get(id.0).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reference_data() {
        let repository = InMemoryDoctorRepository::with_reference_data().unwrap();

        let bruno = repository.find_by_id(DoctorId(1)).await.unwrap().unwrap();
        assert_eq!(bruno.name, "Dr. Bruno Alves");
        assert_eq!(bruno.specialty, "Cardiologia");

        let fernanda = repository.find_by_id(DoctorId(2)).await.unwrap().unwrap();
        assert_eq!(fernanda.crm.as_str(), "67890-RJ");
    }

    #[tokio::test]
    async fn test_empty_repository_allocates_from_one() {
        let repository = InMemoryDoctorRepository::new();

        let created = repository
            .create(CreateDoctorCommand {
                name: "Dr. Paulo Lima".to_string(),
                specialty: "Pediatria".to_string(),
                crm: Crm::new("54321-mg").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, DoctorId(1));
        assert_eq!(created.crm.as_str(), "54321-MG");
    }
}
