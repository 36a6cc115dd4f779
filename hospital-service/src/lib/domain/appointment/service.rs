use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::CreateAppointmentCommand;
use crate::domain::appointment::ports::AppointmentRepository;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::domain::doctor::ports::DoctorRepository;
use crate::domain::patient::ports::PatientRepository;

/// Domain service implementation for appointment operations.
///
/// Checks that both parties exist before booking.
pub struct AppointmentService<AR, PR, DR>
where
    AR: AppointmentRepository,
    PR: PatientRepository,
    DR: DoctorRepository,
{
    repository: Arc<AR>,
    patients: Arc<PR>,
    doctors: Arc<DR>,
}

impl<AR, PR, DR> AppointmentService<AR, PR, DR>
where
    AR: AppointmentRepository,
    PR: PatientRepository,
    DR: DoctorRepository,
{
    /// Create a new appointment service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Appointment persistence
    /// * `patients` - Patient lookup, used to validate bookings
    /// * `doctors` - Doctor lookup, used to validate bookings
    pub fn new(repository: Arc<AR>, patients: Arc<PR>, doctors: Arc<DR>) -> Self {
        Self {
            repository,
            patients,
            doctors,
        }
    }
}

#[async_trait]
impl<AR, PR, DR> AppointmentServicePort for AppointmentService<AR, PR, DR>
where
    AR: AppointmentRepository,
    PR: PatientRepository,
    DR: DoctorRepository,
{
    async fn create_appointment(
        &self,
        command: CreateAppointmentCommand,
    ) -> Result<Appointment, AppointmentError> {
        if self.patients.find_by_id(command.patient_id).await?.is_none() {
            return Err(AppointmentError::UnknownPatient(command.patient_id));
        }

        if self.doctors.find_by_id(command.doctor_id).await?.is_none() {
            return Err(AppointmentError::UnknownDoctor(command.doctor_id));
        }

        let appointment = self.repository.create(command).await?;
        tracing::info!(
            appointment_id = %appointment.id,
            patient_id = %appointment.patient_id,
            doctor_id = %appointment.doctor_id,
            "Appointment booked"
        );

        Ok(appointment)
    }

    async fn get_appointment(&self, id: AppointmentId) -> Result<Appointment, AppointmentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppointmentError::NotFound(id))
    }
}
