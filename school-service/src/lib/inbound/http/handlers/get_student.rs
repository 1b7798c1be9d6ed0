use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::student::models::StudentDetail;
use crate::domain::student::models::StudentId;
use crate::domain::student::ports::StudentServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_student<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    student_id: Result<Path<i32>, PathRejection>,
) -> Result<ApiSuccess<GetStudentResponseData>, ApiError> {
    let Path(student_id) =
        student_id.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;

    state
        .student_service
        .get_student(StudentId(student_id))
        .await
        .map_err(ApiError::from)
        .map(|ref student| {
            ApiSuccess::new(
                StatusCode::OK,
                GetStudentResponseData::new(student, &state.public_url),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetStudentResponseData {
    pub estudiante_id: i32,
    pub nombre: Option<String>,
    pub rut: Option<String>,
    pub curso_id: i32,
    pub curso_nombre: Option<String>,
    pub numlista: Option<i32>,
    pub activo: bool,
    pub href: String,
}

impl GetStudentResponseData {
    fn new(student: &StudentDetail, public_url: &str) -> Self {
        Self {
            estudiante_id: student.id.0,
            nombre: student.name.clone(),
            rut: student.national_id.clone(),
            curso_id: student.course_id.0,
            curso_nombre: student.course_name.clone(),
            numlista: student.list_number,
            activo: student.active,
            href: format!(
                "{}/estudiante/{}",
                public_url.trim_end_matches('/'),
                student.id
            ),
        }
    }
}
