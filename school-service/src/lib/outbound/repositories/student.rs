use async_trait::async_trait;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::student::errors::StudentError;
use crate::domain::student::models::CourseId;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentDetail;
use crate::domain::student::models::StudentId;
use crate::domain::student::ports::StudentRepository;

/// `activo` is nullable in storage; NULL reads as the column default.
const ACTIVE_DEFAULT: bool = true;

pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StudentRow {
    estudiante_id: i32,
    nombre: Option<String>,
    rut: Option<String>,
    curso_id: Option<i32>,
    numlista: Option<i32>,
    email: String,
    clave_email: Option<String>,
    clave: Option<String>,
    fecha_creacion: Option<NaiveDateTime>,
    fecha_actualizacion: Option<NaiveDateTime>,
    fecha_nacimiento: Option<NaiveDate>,
    fecha_ingreso: Option<NaiveDate>,
    activo: Option<bool>,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student {
            id: StudentId(r.estudiante_id),
            name: r.nombre,
            national_id: r.rut,
            course_id: r.curso_id.map(CourseId),
            list_number: r.numlista,
            email: r.email,
            email_password_hash: r.clave_email,
            password_hash: r.clave,
            created_at: r.fecha_creacion,
            updated_at: r.fecha_actualizacion,
            birth_date: r.fecha_nacimiento,
            enrolled_on: r.fecha_ingreso,
            active: r.activo.unwrap_or(ACTIVE_DEFAULT),
        }
    }
}

#[derive(Debug, FromRow)]
struct StudentDetailRow {
    estudiante_id: i32,
    nombre: Option<String>,
    rut: Option<String>,
    curso_id: i32,
    curso_nombre: Option<String>,
    numlista: Option<i32>,
    activo: Option<bool>,
}

impl From<StudentDetailRow> for StudentDetail {
    fn from(r: StudentDetailRow) -> Self {
        StudentDetail {
            id: StudentId(r.estudiante_id),
            name: r.nombre,
            national_id: r.rut,
            course_id: CourseId(r.curso_id),
            course_name: r.curso_nombre,
            list_number: r.numlista,
            active: r.activo.unwrap_or(ACTIVE_DEFAULT),
        }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT estudiante_id, nombre, rut, curso_id, numlista, email,
                   clave_email, clave, fecha_creacion, fecha_actualizacion,
                   fecha_nacimiento, fecha_ingreso, activo
            FROM estudiantes
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Student::from))
    }

    async fn find_course_name(&self, id: CourseId) -> Result<Option<String>, StudentError> {
        let name = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT nombre
            FROM cursos
            WHERE curso_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(name.flatten())
    }

    async fn find_with_course(
        &self,
        id: StudentId,
    ) -> Result<Option<StudentDetail>, StudentError> {
        let row = sqlx::query_as::<_, StudentDetailRow>(
            r#"
            SELECT e.estudiante_id, e.nombre, e.rut, e.curso_id,
                   c.nombre AS curso_nombre, e.numlista, e.activo
            FROM estudiantes e
            INNER JOIN cursos c ON e.curso_id = c.curso_id
            WHERE e.estudiante_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentDetail::from))
    }
}
