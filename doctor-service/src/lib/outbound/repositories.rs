pub mod doctor;

pub use doctor::PostgresDoctorRepository;
