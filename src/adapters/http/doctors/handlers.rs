//! HTTP handlers for the doctor catalog. Every route here is admin-gated.

use axum::extract::{Path, State};
use axum::Json;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::doctor::{
    AddDoctorCommand, AddDoctorHandler, ListDoctorsHandler, RemoveDoctorCommand,
    RemoveDoctorHandler,
};
use crate::domain::foundation::DoctorId;

use super::dto::{CreateDoctorRequest, DeleteDoctorResponse, DoctorResponse};

/// `GET /doctors` - the full doctor catalog.
pub async fn list_doctors(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<Vec<DoctorResponse>>, ApiError> {
    let handler = ListDoctorsHandler::new(state.users.clone(), state.doctors.clone());
    let doctors = handler.handle(&identity).await?;

    Ok(Json(doctors.into_iter().map(Into::into).collect()))
}

/// `POST /doctors` - add a doctor to the catalog.
pub async fn create_doctor(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<DoctorResponse>, ApiError> {
    let handler = AddDoctorHandler::new(state.users.clone(), state.doctors.clone());
    let doctor = handler
        .handle(
            &identity,
            AddDoctorCommand {
                candidate: request.into(),
            },
        )
        .await?;

    Ok(Json(doctor.into()))
}

/// `DELETE /doctors/:id` - remove a doctor from the catalog.
pub async fn delete_doctor(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<DoctorId>,
) -> Result<Json<DeleteDoctorResponse>, ApiError> {
    let handler = RemoveDoctorHandler::new(state.users.clone(), state.doctors.clone());
    let deleted = handler
        .handle(&identity, RemoveDoctorCommand { doctor_id: id })
        .await?;

    Ok(Json(DeleteDoctorResponse {
        acknowledged: true,
        deleted_count: if deleted { 1 } else { 0 },
    }))
}
