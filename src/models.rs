use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::Error;

// --- Closed Vocabulary Enums (Wire-Compatible) ---

/// Role
///
/// The closed set of account roles. Transmitted as the literal strings
/// "Admin" | "Manager" | "User", which the variant names match exactly.
/// Role is the primary input to every navigation and content visibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Department
///
/// The ten fixed organizational units. The wire representation is the literal
/// Russian unit name (the directory is Russian-language), so each variant carries
/// an explicit serde rename. Department scopes content visibility for User-role
/// accounts only; Admin and Manager accounts are department-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Department {
    #[serde(rename = "Бухгалтерия")]
    Accounting,
    #[serde(rename = "Отдел маркетинга")]
    Marketing,
    #[serde(rename = "Отдел кадров")]
    HumanResources,
    #[serde(rename = "Отдел технического контроля")]
    QualityControl,
    #[serde(rename = "Отдел сбыта")]
    Sales,
    #[serde(rename = "Отдел IT")]
    It,
    #[serde(rename = "Отдел логистики и транспорта")]
    Logistics,
    #[serde(rename = "Отдел клиентской поддержки")]
    CustomerSupport,
    #[serde(rename = "Отдел разработки и исследований")]
    ResearchDevelopment,
    #[serde(rename = "Отдел закупок")]
    Procurement,
}

impl Department {
    /// The full directory, in the order the registration and post forms render it.
    pub const ALL: [Department; 10] = [
        Department::Accounting,
        Department::Marketing,
        Department::HumanResources,
        Department::QualityControl,
        Department::Sales,
        Department::It,
        Department::Logistics,
        Department::CustomerSupport,
        Department::ResearchDevelopment,
        Department::Procurement,
    ];

    /// Returns the canonical (wire) name of the department.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Accounting => "Бухгалтерия",
            Department::Marketing => "Отдел маркетинга",
            Department::HumanResources => "Отдел кадров",
            Department::QualityControl => "Отдел технического контроля",
            Department::Sales => "Отдел сбыта",
            Department::It => "Отдел IT",
            Department::Logistics => "Отдел логистики и транспорта",
            Department::CustomerSupport => "Отдел клиентской поддержки",
            Department::ResearchDevelopment => "Отдел разработки и исследований",
            Department::Procurement => "Отдел закупок",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender
///
/// Transmitted as lowercase "male" | "female".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// PostAudience
///
/// The target of a post: either the sentinel "all" (visible to every
/// authenticated user) or a single department. On the wire this is a plain
/// string ("all" or one of the ten department names), so the `Department`
/// variant is untagged and reuses the department's own string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostAudience {
    #[default]
    All,
    #[serde(untagged)]
    Department(Department),
}

impl fmt::Display for PostAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostAudience::All => f.write_str("all"),
            PostAudience::Department(dept) => f.write_str(dept.as_str()),
        }
    }
}

// --- Core Records ---

/// User
///
/// The canonical identity record as returned by the collaborator after login or
/// registration. The `id` is assigned by the collaborator (an opaque hex string).
///
/// Invariant: `role` and `department` together determine this account's
/// visibility scope. A User-role account is always created with a department
/// (enforced client-side in `RegisterRequest::validate`), but the field stays
/// optional here because Admin and Manager accounts legitimately omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    // The login key; unique within the collaborator's directory.
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub gender: Gender,
    #[ts(type = "string")]
    pub birth_date: NaiveDate,
}

/// Post
///
/// A bulletin entry. `author` is a snapshot of the creating user taken by the
/// collaborator at creation time; author and department are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub content: String,
    #[ts(type = "string")]
    pub department: PostAudience,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub author: User,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Credentials payload for POST /api/login. The password is passed through to
/// the collaborator and never persisted or logged by this client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// RegisterRequest
///
/// Full profile payload for POST /api/register: every `User` field except `id`
/// (assigned by the collaborator), plus the password.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub gender: Gender,
    #[ts(type = "string")]
    pub birth_date: NaiveDate,
}

impl RegisterRequest {
    /// validate
    ///
    /// Client-side checks performed before any network call. A rejection here
    /// must never reach the collaborator.
    ///
    /// Rules:
    /// - email, password and name are required (non-blank);
    /// - a User-role profile must name a department. Admin and Manager
    ///   profiles may omit it (they are not department-scoped).
    pub fn validate(&self) -> Result<(), Error> {
        if self.email.trim().is_empty()
            || self.password.trim().is_empty()
            || self.name.trim().is_empty()
        {
            return Err(Error::Validation(
                "email, password and name are required".to_string(),
            ));
        }
        if self.role == Role::User && self.department.is_none() {
            return Err(Error::Validation(
                "User-role accounts must specify a department".to_string(),
            ));
        }
        Ok(())
    }
}

/// CreatePostRequest
///
/// Payload for POST /api/posts. The author is resolved by the collaborator
/// from the submitting account, never supplied by the client.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct CreatePostRequest {
    pub content: String,
    #[ts(type = "string")]
    pub department: PostAudience,
}

impl CreatePostRequest {
    /// Rejects blank content before the collaborator is contacted.
    pub fn validate(&self) -> Result<(), Error> {
        if self.content.trim().is_empty() {
            return Err(Error::Validation(
                "post content must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
