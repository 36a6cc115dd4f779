use async_trait::async_trait;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::parse_scheduled_at;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::CreateAppointmentCommand;
use crate::domain::appointment::ports::AppointmentRepository;
use crate::domain::doctor::models::DoctorId;
use crate::domain::patient::models::PatientId;
use crate::outbound::repositories::table::RecordTable;

/// (patient ID, doctor ID, scheduled at)
const REFERENCE_APPOINTMENTS: [(u64, u64, &str); 2] =
    [(1, 1, "2025-03-20 10:00"), (2, 2, "2025-03-21 15:30")];

/// Appointment storage. Referential checks against patients and doctors are
/// done by the domain service before `create` is called.
pub struct InMemoryAppointmentRepository {
    table: RecordTable<Appointment>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self {
            table: RecordTable::new(),
        }
    }

    /// Repository holding the two demo appointments, which reference the
    /// demo patients and doctors.
    ///
    /// # Errors
    /// Propagates validation failures of the built-in records
    pub fn with_reference_data() -> Result<Self, AppointmentError> {
        let commands = REFERENCE_APPOINTMENTS
            .iter()
            .map(|(patient_id, doctor_id, scheduled_at)| {
                Ok(CreateAppointmentCommand {
                    patient_id: PatientId(*patient_id),
                    doctor_id: DoctorId(*doctor_id),
                    scheduled_at: parse_scheduled_at(scheduled_at)?,
                })
            })
            .collect::<Result<Vec<_>, AppointmentError>>()?;

        Ok(Self {
            table: RecordTable::seeded(commands, |id, command| {
                command.into_appointment(AppointmentId(id))
            }),
        })
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(
        &self,
        command: CreateAppointmentCommand,
    ) -> Result<Appointment, AppointmentError> {
        Ok(self
            .table
            .insert_with(|id| command.into_appointment(AppointmentId(id)))
            .await)
    }

    async fn find_by_id(
        &self,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError> {
        Ok(self.table.get(id.0).await)
    }
}
