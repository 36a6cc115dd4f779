use async_trait::async_trait;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::CreateAppointmentCommand;

/// Port for appointment domain service operations.
#[async_trait]
pub trait AppointmentServicePort: Send + Sync + 'static {
    /// Book an appointment.
    ///
    /// # Errors
    /// * `UnknownPatient` - Patient ID is not registered
    /// * `UnknownDoctor` - Doctor ID is not registered
    async fn create_appointment(
        &self,
        command: CreateAppointmentCommand,
    ) -> Result<Appointment, AppointmentError>;

    /// # Errors
    /// * `NotFound` - No appointment with this ID
    async fn get_appointment(&self, id: AppointmentId) -> Result<Appointment, AppointmentError>;
}

/// Persistence operations for appointments.
#[async_trait]
pub trait AppointmentRepository: Send + Sync + 'static {
    /// Insert an appointment under the next free ID.
    async fn create(
        &self,
        command: CreateAppointmentCommand,
    ) -> Result<Appointment, AppointmentError>;

    async fn find_by_id(&self, id: AppointmentId)
        -> Result<Option<Appointment>, AppointmentError>;
}
