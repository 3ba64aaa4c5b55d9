//! Doctor catalog commands and queries. All of them are admin-gated.

mod manage_doctors;

pub use manage_doctors::{
    AddDoctorCommand, AddDoctorHandler, ListDoctorsHandler, RemoveDoctorCommand,
    RemoveDoctorHandler,
};
