use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use chrono::Duration;

use crate::domain::student::errors::StudentError;
use crate::domain::student::models::AccessToken;
use crate::domain::student::models::AuthenticatedStudent;
use crate::domain::student::models::LoginCommand;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentDetail;
use crate::domain::student::models::StudentId;
use crate::domain::student::ports::StudentRepository;
use crate::domain::student::ports::StudentServicePort;

/// Claim names embedded in access tokens.
pub mod claim {
    pub const STUDENT_ID: &str = "estudiante_id";
    pub const NAME: &str = "nombre";
    pub const COURSE: &str = "curso";
    pub const COURSE_NAME: &str = "curso_nombre";
}

/// Domain service implementation for student operations.
///
/// Concrete implementation of StudentServicePort with dependency injection.
pub struct StudentService<R>
where
    R: StudentRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<R> StudentService<R>
where
    R: StudentRepository,
{
    /// Create a new student service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Student persistence implementation
    /// * `authenticator` - Password verifier and token issuer
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl,
        }
    }

    async fn claims_for(&self, student: &Student) -> Result<Claims, StudentError> {
        // A dangling course reference degrades to a null course name.
        let course_name = match student.course_id {
            Some(course_id) => self.repository.find_course_name(course_id).await?,
            None => None,
        };

        Ok(Claims::new()
            .with_subject(&student.email)
            .with_extra(claim::STUDENT_ID, student.id.0)
            .with_extra(claim::NAME, &student.name)
            .with_extra(claim::COURSE, student.course_id.map(|id| id.0))
            .with_extra(claim::COURSE_NAME, course_name))
    }
}

#[async_trait]
impl<R> StudentServicePort for StudentService<R>
where
    R: StudentRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, StudentError> {
        let Some(student) = self.repository.find_by_email(&command.email).await? else {
            // Unknown emails pay for one verification, same as a wrong password.
            self.authenticator.verify_password(&command.password, None);
            return Err(StudentError::InvalidCredentials);
        };

        if !self
            .authenticator
            .verify_password(&command.password, student.password_hash.as_deref())
        {
            tracing::debug!(student_id = %student.id, "Password verification failed");
            return Err(StudentError::InvalidCredentials);
        }

        let claims = self.claims_for(&student).await?;
        let access_token = self
            .authenticator
            .issue_token(claims, self.token_ttl)
            .map_err(|e| StudentError::TokenIssuance(e.to_string()))?;

        tracing::info!(student_id = %student.id, "Access token issued");

        Ok(AccessToken::bearer(access_token))
    }

    async fn get_student(&self, id: StudentId) -> Result<StudentDetail, StudentError> {
        self.repository
            .find_with_course(id)
            .await?
            .ok_or(StudentError::NotFound(id))
    }

    fn authenticate_token(&self, token: &str) -> Result<AuthenticatedStudent, StudentError> {
        let claims = self.authenticator.validate_token(token)?;

        let email = claims
            .sub
            .clone()
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))?;

        let student_id = claims
            .extra_i64(claim::STUDENT_ID)
            .and_then(|id| i32::try_from(id).ok())
            .map(StudentId)
            .ok_or_else(|| JwtError::MissingClaim(claim::STUDENT_ID.to_string()))?;

        if !claims.extra.contains_key(claim::NAME) {
            return Err(JwtError::MissingClaim(claim::NAME.to_string()).into());
        }

        Ok(AuthenticatedStudent {
            email,
            student_id,
            name: claims.extra_str(claim::NAME).map(str::to_string),
        })
    }
}
