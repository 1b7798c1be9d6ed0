use async_trait::async_trait;

use crate::domain::student::errors::StudentError;
use crate::domain::student::models::AccessToken;
use crate::domain::student::models::AuthenticatedStudent;
use crate::domain::student::models::CourseId;
use crate::domain::student::models::LoginCommand;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentDetail;
use crate::domain::student::models::StudentId;

/// Port for student domain service operations.
#[async_trait]
pub trait StudentServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Submitted email and plaintext password
    ///
    /// # Returns
    /// Bearer access token embedding identity and course claims
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, StudentError>;

    /// Retrieve a student joined with its course name.
    ///
    /// # Errors
    /// * `NotFound` - Student does not exist (or has no course)
    /// * `DatabaseError` - Database operation failed
    async fn get_student(&self, id: StudentId) -> Result<StudentDetail, StudentError>;

    /// Validate a bearer token and extract the student identity from its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, expired, malformed, or missing claims
    fn authenticate_token(&self, token: &str) -> Result<AuthenticatedStudent, StudentError>;
}

/// Read-only persistence operations over students and courses.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    /// Retrieve student by unique email (exact match).
    ///
    /// # Returns
    /// Optional student entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentError>;

    /// Retrieve a course name by course id.
    ///
    /// # Returns
    /// Course name, None if the course does not exist or has no name
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_course_name(&self, id: CourseId) -> Result<Option<String>, StudentError>;

    /// Retrieve a student inner-joined with its course.
    ///
    /// # Returns
    /// None if the student does not exist or its course reference does not resolve
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_with_course(&self, id: StudentId)
        -> Result<Option<StudentDetail>, StudentError>;
}
