use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::StoreError;

/// Opaque student identifier. Minted from a time-ordered UUID so ids sort in
/// creation order and are never handed out twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// `None` when `raw` is not a well-formed id.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::try_parse(raw).ok().map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for StudentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// A persisted student. This is also the projection returned by every read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Caller-supplied, kept verbatim (`YYYY-MM-DD` by convention).
    pub date_of_birth: String,
    pub class_name: String,
    pub session: String,
    /// Set once at creation; serialized as `YYYY-MM-DD`.
    pub created_date: NaiveDate,
}

impl StudentRecord {
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.first_name.to_lowercase().contains(needle) || self.last_name.to_lowercase().contains(needle)
    }
}

impl From<models::student::Model> for StudentRecord {
    fn from(m: models::student::Model) -> Self {
        Self {
            id: StudentId(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            date_of_birth: m.date_of_birth,
            class_name: m.class_name,
            session: m.session,
            created_date: m.created_date,
        }
    }
}

impl From<StudentRecord> for models::student::Model {
    fn from(r: StudentRecord) -> Self {
        Self {
            id: r.id.as_uuid(),
            first_name: r.first_name,
            last_name: r.last_name,
            date_of_birth: r.date_of_birth,
            class_name: r.class_name,
            session: r.session,
            created_date: r.created_date,
        }
    }
}

/// Create request as decoded from the caller. Every field is optional here;
/// presence is checked by [`NewStudentInput::validate`]. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudentInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub class_name: Option<String>,
    pub session: Option<String>,
}

/// A create request with every required field present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub class_name: String,
    pub session: String,
}

impl NewStudentInput {
    pub const REQUIRED_FIELDS: [&'static str; 5] = ["firstName", "lastName", "dateOfBirth", "className", "session"];

    /// Names of required fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.first_name.is_some(),
            self.last_name.is_some(),
            self.date_of_birth.is_some(),
            self.class_name.is_some(),
            self.session.is_some(),
        ];
        Self::REQUIRED_FIELDS
            .into_iter()
            .zip(present)
            .filter_map(|(name, ok)| (!ok).then_some(name))
            .collect()
    }

    /// Presence check only: an empty string counts as present.
    pub fn validate(self) -> Result<NewStudent, StoreError> {
        let missing = self.missing_fields();
        let NewStudentInput {
            first_name: Some(first_name),
            last_name: Some(last_name),
            date_of_birth: Some(date_of_birth),
            class_name: Some(class_name),
            session: Some(session),
        } = self
        else {
            return Err(StoreError::missing_fields(&missing));
        };
        Ok(NewStudent { first_name, last_name, date_of_birth, class_name, session })
    }
}

impl NewStudent {
    pub fn into_record(self, id: StudentId, created_date: NaiveDate) -> StudentRecord {
        StudentRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            class_name: self.class_name,
            session: self.session,
            created_date,
        }
    }
}
