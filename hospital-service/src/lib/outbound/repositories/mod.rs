pub mod appointment;
pub mod credential;
pub mod doctor;
pub mod patient;
pub mod table;

pub use appointment::InMemoryAppointmentRepository;
pub use credential::InMemoryCredentialStore;
pub use doctor::InMemoryDoctorRepository;
pub use patient::InMemoryPatientRepository;
