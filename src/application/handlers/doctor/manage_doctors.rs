//! Doctor catalog management, gated by the admin rule.
//!
//! The dashboard pages backing these operations are admin-only, so every
//! handler verifies the caller's role before touching the catalog.

use std::sync::Arc;

use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::foundation::{require_admin, DoctorId, DomainError, Identity};
use crate::ports::{DoctorRepository, UserRepository};

pub struct ListDoctorsHandler {
    users: Arc<dyn UserRepository>,
    doctors: Arc<dyn DoctorRepository>,
}

impl ListDoctorsHandler {
    pub fn new(users: Arc<dyn UserRepository>, doctors: Arc<dyn DoctorRepository>) -> Self {
        Self { users, doctors }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<Vec<Doctor>, DomainError> {
        let caller = self.users.find_by_email(&identity.email).await?;
        require_admin(caller.as_ref())?;
        self.doctors.list().await
    }
}

#[derive(Debug, Clone)]
pub struct AddDoctorCommand {
    pub candidate: NewDoctor,
}

pub struct AddDoctorHandler {
    users: Arc<dyn UserRepository>,
    doctors: Arc<dyn DoctorRepository>,
}

impl AddDoctorHandler {
    pub fn new(users: Arc<dyn UserRepository>, doctors: Arc<dyn DoctorRepository>) -> Self {
        Self { users, doctors }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: AddDoctorCommand,
    ) -> Result<Doctor, DomainError> {
        let caller = self.users.find_by_email(&identity.email).await?;
        require_admin(caller.as_ref())?;

        let doctor = self.doctors.insert(cmd.candidate).await?;
        tracing::info!(doctor_id = %doctor.id, specialty = %doctor.specialty, "doctor added");
        Ok(doctor)
    }
}

#[derive(Debug, Clone)]
pub struct RemoveDoctorCommand {
    pub doctor_id: DoctorId,
}

pub struct RemoveDoctorHandler {
    users: Arc<dyn UserRepository>,
    doctors: Arc<dyn DoctorRepository>,
}

impl RemoveDoctorHandler {
    pub fn new(users: Arc<dyn UserRepository>, doctors: Arc<dyn DoctorRepository>) -> Self {
        Self { users, doctors }
    }

    /// Returns whether a record was actually deleted.
    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: RemoveDoctorCommand,
    ) -> Result<bool, DomainError> {
        let caller = self.users.find_by_email(&identity.email).await?;
        require_admin(caller.as_ref())?;

        let deleted = self.doctors.delete(&cmd.doctor_id).await?;
        if deleted {
            tracing::info!(doctor_id = %cmd.doctor_id, "doctor removed");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryDoctorRepository, InMemoryUserRepository};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::{NewUser, Role};

    async fn users_with_admin() -> Arc<InMemoryUserRepository> {
        let users = Arc::new(InMemoryUserRepository::new());
        let admin = users
            .insert(NewUser {
                name: "Admin".to_string(),
                email: "admin@x.com".to_string(),
            })
            .await
            .unwrap();
        users.set_role(&admin.id, Role::Admin).await.unwrap();
        users
            .insert(NewUser {
                name: "Patient".to_string(),
                email: "patient@x.com".to_string(),
            })
            .await
            .unwrap();
        users
    }

    fn candidate() -> NewDoctor {
        NewDoctor {
            name: "Dr. Rivera".to_string(),
            email: "rivera@clinic.test".to_string(),
            specialty: "Braces".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn admin_can_add_list_and_remove() {
        let users = users_with_admin().await;
        let doctors = Arc::new(InMemoryDoctorRepository::new());
        let identity = Identity::new("admin@x.com");

        let added = AddDoctorHandler::new(users.clone(), doctors.clone())
            .handle(&identity, AddDoctorCommand { candidate: candidate() })
            .await
            .unwrap();

        let listed = ListDoctorsHandler::new(users.clone(), doctors.clone())
            .handle(&identity)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        let removed = RemoveDoctorHandler::new(users.clone(), doctors.clone())
            .handle(&identity, RemoveDoctorCommand { doctor_id: added.id })
            .await
            .unwrap();
        assert!(removed);

        let listed = ListDoctorsHandler::new(users, doctors)
            .handle(&identity)
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn patient_is_denied_and_catalog_is_untouched() {
        let users = users_with_admin().await;
        let doctors = Arc::new(InMemoryDoctorRepository::new());
        let identity = Identity::new("patient@x.com");

        let err = AddDoctorHandler::new(users.clone(), doctors.clone())
            .handle(&identity, AddDoctorCommand { candidate: candidate() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        assert!(doctors.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn removing_an_unknown_doctor_reports_false() {
        let users = users_with_admin().await;
        let doctors = Arc::new(InMemoryDoctorRepository::new());

        let removed = RemoveDoctorHandler::new(users, doctors)
            .handle(
                &Identity::new("admin@x.com"),
                RemoveDoctorCommand {
                    doctor_id: DoctorId::new(),
                },
            )
            .await
            .unwrap();
        assert!(!removed);
    }
}
