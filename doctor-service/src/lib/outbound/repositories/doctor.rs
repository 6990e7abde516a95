use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::doctor::errors::DoctorError;
use crate::doctor::models::Doctor;
use crate::doctor::models::DoctorId;
use crate::doctor::models::EmailAddress;
use crate::doctor::models::PersonName;
use crate::doctor::ports::DoctorRepository;

pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> DoctorError {
    DoctorError::DatabaseError(e.to_string())
}

fn doctor_from_row(row: &PgRow) -> Result<Doctor, DoctorError> {
    Ok(Doctor {
        id: DoctorId(row.try_get::<Uuid, _>("id").map_err(database_error)?),
        first_name: PersonName::new(row.try_get::<String, _>("first_name").map_err(database_error)?)?,
        last_name: PersonName::new(row.try_get::<String, _>("last_name").map_err(database_error)?)?,
        email: EmailAddress::new(row.try_get::<String, _>("email").map_err(database_error)?)?,
        password_hash: row
            .try_get::<String, _>("password_hash")
            .map_err(database_error)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(database_error)?,
    })
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        sqlx::query(
            r#"
            INSERT INTO doctors (id, first_name, last_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(doctor.id.0)
        .bind(doctor.first_name.as_str())
        .bind(doctor.last_name.as_str())
        .bind(doctor.email.as_str())
        .bind(&doctor.password_hash)
        .bind(doctor.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DoctorError::EmailAlreadyExists(doctor.email.as_str().to_string());
                }
            }
            DoctorError::DatabaseError(e.to_string())
        })?;

        Ok(doctor)
    }

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, created_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(doctor_from_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DoctorError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, created_at
            FROM doctors
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(doctor_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Doctor>, DoctorError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, created_at
            FROM doctors
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(doctor_from_row).collect()
    }
}
