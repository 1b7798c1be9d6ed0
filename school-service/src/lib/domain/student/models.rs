use std::fmt;

use chrono::NaiveDate;
use chrono::NaiveDateTime;

/// Student primary key (`estudiantes.estudiante_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudentId(pub i32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Course primary key (`cursos.curso_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(pub i32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Student record as stored, found by its unique email.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: Option<String>,
    /// National id (RUT), unique across students.
    pub national_id: Option<String>,
    pub course_id: Option<CourseId>,
    pub list_number: Option<i32>,
    pub email: String,
    pub email_password_hash: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub birth_date: Option<NaiveDate>,
    pub enrolled_on: Option<NaiveDate>,
    pub active: bool,
}

/// Student joined with the name of its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDetail {
    pub id: StudentId,
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub course_id: CourseId,
    pub course_name: Option<String>,
    pub list_number: Option<i32>,
    pub active: bool,
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Bearer token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
}

impl AccessToken {
    pub const BEARER: &'static str = "bearer";

    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: Self::BEARER,
        }
    }
}

/// Identity carried by a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedStudent {
    pub email: String,
    pub student_id: StudentId,
    pub name: Option<String>,
}
