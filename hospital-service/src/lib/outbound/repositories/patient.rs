use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::patient::errors::PatientError;
use crate::domain::patient::models::parse_birth_date;
use crate::domain::patient::models::Cpf;
use crate::domain::patient::models::CreatePatientCommand;
use crate::domain::patient::models::Patient;
use crate::domain::patient::models::PatientId;
use crate::domain::patient::ports::PatientRepository;
use crate::outbound::repositories::table::RecordTable;

/// (name, birth date, CPF, address)
const REFERENCE_PATIENTS: [(&str, &str, &str, &str); 2] = [
    ("Jorge Ramos", "1990-05-20", "123.456.789-00", "Rua A, 123"),
    ("Maria Oliveira", "1985-10-15", "987.654.321-00", "Rua B, 456"),
];

pub struct InMemoryPatientRepository {
    table: RecordTable<Patient>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self {
            table: RecordTable::new(),
        }
    }

    /// Repository holding the two demo patients under IDs 1 and 2.
    ///
    /// # Errors
    /// Propagates validation failures of the built-in records
    pub fn with_reference_data() -> Result<Self, PatientError> {
        let commands = REFERENCE_PATIENTS
            .iter()
            .map(|(name, birth_date, cpf, address)| {
                Ok(CreatePatientCommand {
                    name: name.to_string(),
                    birth_date: parse_birth_date(birth_date, NaiveDate::MAX)?,
                    cpf: Cpf::new(cpf)?,
                    address: address.to_string(),
                })
            })
            .collect::<Result<Vec<_>, PatientError>>()?;

        Ok(Self {
            table: RecordTable::seeded(commands, |id, command| {
                command.into_patient(PatientId(id))
            }),
        })
    }
}

impl Default for InMemoryPatientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn create(&self, command: CreatePatientCommand) -> Result<Patient, PatientError> {
        Ok(self
            .table
            .insert_with(|id| command.into_patient(PatientId(id)))
            .await)
    }

    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, PatientError> {
        Ok(self.table.get(id.0).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reference_data() {
        let repository = InMemoryPatientRepository::with_reference_data().unwrap();

        let jorge = repository.find_by_id(PatientId(1)).await.unwrap().unwrap();
        assert_eq!(jorge.name, "Jorge Ramos");
        assert_eq!(jorge.cpf.as_str(), "123.456.789-00");
        assert_eq!(jorge.birth_date, NaiveDate::from_ymd_opt(1990, 5, 20).unwrap());

        let maria = repository.find_by_id(PatientId(2)).await.unwrap().unwrap();
        assert_eq!(maria.address, "Rua B, 456");

        assert!(repository.find_by_id(PatientId(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_after_reference_data() {
        let repository = InMemoryPatientRepository::with_reference_data().unwrap();

        let created = repository
            .create(CreatePatientCommand {
                name: "Ana Souza".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2001, 1, 9).unwrap(),
                cpf: Cpf::new("11122233344").unwrap(),
                address: "Rua C, 789".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, PatientId(3));
        assert_eq!(
            repository.find_by_id(PatientId(3)).await.unwrap(),
            Some(created)
        );
    }
}
