//! In-memory document store behind the mock API.
//!
//! Collections hold loosely typed JSON documents, the same way the real
//! backend stores them: the store only assigns `_id` and `createdAt` and
//! otherwise keeps whatever fields it was sent. Every request is also
//! recorded so tests can assert on exactly what a client sent.

use payloads::{
    AboutUs, Achievement, Blog, ContactInfo, ContactSubmission, GrowthStep,
    PrivacyPolicyDocument, Product, RefundPolicyDocument, Resource, Service,
    Singleton, TeamMember, TermsDocument, requests,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use uuid::Uuid;

pub const COLLECTIONS: [&str; 7] = [
    Product::ENDPOINT,
    Service::ENDPOINT,
    TeamMember::ENDPOINT,
    Achievement::ENDPOINT,
    GrowthStep::ENDPOINT,
    Blog::ENDPOINT,
    ContactSubmission::ENDPOINT,
];

pub const SINGLETONS: [&str; 6] = [
    payloads::Stats::ENDPOINT,
    AboutUs::ENDPOINT,
    ContactInfo::ENDPOINT,
    PrivacyPolicyDocument::ENDPOINT,
    RefundPolicyDocument::ENDPOINT,
    TermsDocument::ENDPOINT,
];

/// Collections the public may add to without a session.
pub const PUBLIC_WRITABLE: [&str; 1] = [ContactSubmission::ENDPOINT];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
    #[error("Document not found")]
    DocumentNotFound,
    #[error("Expected a JSON object")]
    NotAnObject,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing or invalid token")]
    InvalidToken,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Account already exists")]
    AccountExists,
    #[error("Invalid or expired code")]
    InvalidOtp,
    #[error("Code has not been verified")]
    OtpNotVerified,
}

/// One request as seen by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedRequest {
    pub method: String,
    /// Path below `/api/`, without the query string.
    pub path: String,
    pub query: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    /// Parsed JSON body, or the text fields of a multipart body.
    pub body: Option<Value>,
    /// Names of file parts in a multipart body.
    pub files: Vec<String>,
}

impl RecordedRequest {
    pub fn is_multipart(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
struct Admin {
    name: String,
    password: String,
}

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Value>>,
    singletons: HashMap<String, Value>,
    admins: HashMap<String, Admin>,
    tokens: HashSet<String>,
    otps: HashMap<String, String>,
    verified_resets: HashSet<String>,
    uploads: HashMap<String, StoredUpload>,
    visits: u64,
    requests: Vec<RecordedRequest>,
    failures: HashMap<String, u16>,
    delays: HashMap<String, Duration>,
}

impl State {
    fn collection_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut Vec<Value>, StoreError> {
        if !COLLECTIONS.contains(&name) {
            return Err(StoreError::UnknownEndpoint(name.to_string()));
        }
        Ok(self.collections.entry(name.to_string()).or_default())
    }
}

#[derive(Default)]
pub struct MockStore {
    state: Mutex<State>,
}

fn id_of(document: &Value) -> Option<&str> {
    document.get("_id").and_then(Value::as_str)
}

fn into_object(document: Value) -> Result<Map<String, Value>, StoreError> {
    match document {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

pub fn is_singleton(name: &str) -> bool {
    SINGLETONS.contains(&name)
}

/// Request log and failure injection
impl MockStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, request: RecordedRequest) {
        self.lock().requests.push(request);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Make every request to `path` fail with `status` until cleared.
    pub fn fail_endpoint(&self, path: &str, status: u16) {
        self.lock().failures.insert(path.to_string(), status);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    pub fn injected_failure(&self, path: &str) -> Option<u16> {
        self.lock().failures.get(path).copied()
    }

    /// Hold every response for `path` back by `delay`.
    pub fn delay_endpoint(&self, path: &str, delay: Duration) {
        self.lock().delays.insert(path.to_string(), delay);
    }

    pub fn injected_delay(&self, path: &str) -> Option<Duration> {
        self.lock().delays.get(path).copied()
    }
}

/// Accounts and sessions
impl MockStore {
    pub fn add_admin(&self, name: &str, email: &str, password: &str) {
        self.lock().admins.insert(
            email.to_string(),
            Admin {
                name: name.to_string(),
                password: password.to_string(),
            },
        );
    }

    pub fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<String, StoreError> {
        let mut state = self.lock();
        let admin = state
            .admins
            .get(&credentials.email)
            .ok_or(StoreError::InvalidCredentials)?;
        if admin.password != credentials.password {
            return Err(StoreError::InvalidCredentials);
        }
        tracing::debug!(name = %admin.name, "admin logged in");
        let token = Uuid::new_v4().simple().to_string();
        state.tokens.insert(token.clone());
        Ok(token)
    }

    pub fn check_token(&self, token: &str) -> Result<(), StoreError> {
        if self.lock().tokens.contains(token) {
            Ok(())
        } else {
            Err(StoreError::InvalidToken)
        }
    }

    pub fn register(
        &self,
        details: &requests::RegisterAdmin,
    ) -> Result<(), StoreError> {
        let mut state = self.lock();
        if state.admins.contains_key(&details.email) {
            return Err(StoreError::AccountExists);
        }
        state.admins.insert(
            details.email.clone(),
            Admin {
                name: details.name.clone(),
                password: details.password.clone(),
            },
        );
        Ok(())
    }

    /// Issue a six digit one-time code for `email`.
    pub fn request_otp(&self, email: &str) -> Result<String, StoreError> {
        let mut state = self.lock();
        if !state.admins.contains_key(email) {
            return Err(StoreError::AccountNotFound);
        }
        let otp = format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000);
        state.otps.insert(email.to_string(), otp.clone());
        state.verified_resets.remove(email);
        Ok(otp)
    }

    /// The code most recently issued for `email`, standing in for the
    /// email the real backend would send.
    pub fn otp_for(&self, email: &str) -> Option<String> {
        self.lock().otps.get(email).cloned()
    }

    pub fn verify_otp(&self, email: &str, otp: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        let matches = state.otps.get(email).is_some_and(|code| code == otp);
        if !matches {
            return Err(StoreError::InvalidOtp);
        }
        state.otps.remove(email);
        state.verified_resets.insert(email.to_string());
        Ok(())
    }

    pub fn reset_password(
        &self,
        details: &requests::ResetPassword,
    ) -> Result<(), StoreError> {
        let mut state = self.lock();
        if !state.verified_resets.remove(&details.email) {
            return Err(StoreError::OtpNotVerified);
        }
        let admin = state
            .admins
            .get_mut(&details.email)
            .ok_or(StoreError::AccountNotFound)?;
        admin.password = details.password.clone();
        Ok(())
    }
}

/// Collections and singleton documents
impl MockStore {
    pub fn list(&self, name: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self.lock().collection_mut(name)?.clone())
    }

    pub fn get(&self, name: &str, id: &str) -> Result<Value, StoreError> {
        self.lock()
            .collection_mut(name)?
            .iter()
            .find(|document| id_of(document) == Some(id))
            .cloned()
            .ok_or(StoreError::DocumentNotFound)
    }

    /// First document whose string `field` equals `value`.
    pub fn find_by(
        &self,
        name: &str,
        field: &str,
        value: &str,
    ) -> Result<Value, StoreError> {
        self.lock()
            .collection_mut(name)?
            .iter()
            .find(|document| {
                document.get(field).and_then(Value::as_str) == Some(value)
            })
            .cloned()
            .ok_or(StoreError::DocumentNotFound)
    }

    pub fn create(
        &self,
        name: &str,
        document: Value,
    ) -> Result<Value, StoreError> {
        let mut fields = into_object(document)?;
        fields.insert("_id".into(), Uuid::new_v4().to_string().into());
        fields
            .entry("createdAt")
            .or_insert_with(|| jiff::Timestamp::now().to_string().into());
        let document = Value::Object(fields);
        self.lock().collection_mut(name)?.push(document.clone());
        Ok(document)
    }

    /// Merge `changes` into an existing document. `_id` cannot change.
    pub fn update(
        &self,
        name: &str,
        id: &str,
        changes: Value,
    ) -> Result<Value, StoreError> {
        let changes = into_object(changes)?;
        let mut state = self.lock();
        let document = state
            .collection_mut(name)?
            .iter_mut()
            .find(|document| id_of(document) == Some(id))
            .ok_or(StoreError::DocumentNotFound)?;
        if let Value::Object(fields) = &mut *document {
            for (key, value) in changes {
                if key != "_id" {
                    fields.insert(key, value);
                }
            }
        }
        Ok(document.clone())
    }

    pub fn delete(&self, name: &str, id: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        let collection = state.collection_mut(name)?;
        let before = collection.len();
        collection.retain(|document| id_of(document) != Some(id));
        if collection.len() == before {
            return Err(StoreError::DocumentNotFound);
        }
        Ok(())
    }

    pub fn singleton(&self, name: &str) -> Result<Option<Value>, StoreError> {
        if !is_singleton(name) {
            return Err(StoreError::UnknownEndpoint(name.to_string()));
        }
        Ok(self.lock().singletons.get(name).cloned())
    }

    /// Create the document, or merge `changes` into the existing one.
    pub fn put_singleton(
        &self,
        name: &str,
        changes: Value,
    ) -> Result<Value, StoreError> {
        if !is_singleton(name) {
            return Err(StoreError::UnknownEndpoint(name.to_string()));
        }
        let changes = into_object(changes)?;
        let mut state = self.lock();
        let document = state
            .singletons
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(fields) = &mut *document {
            fields.extend(changes);
        }
        Ok(document.clone())
    }
}

/// Uploads and visitor counter
impl MockStore {
    /// Keep an uploaded file and return the name it is served under.
    pub fn save_upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> String {
        let safe_name: String = file_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '-' })
            .collect();
        let stored = format!("{}-{safe_name}", Uuid::new_v4().simple());
        self.lock().uploads.insert(
            stored.clone(),
            StoredUpload {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        stored
    }

    pub fn upload(&self, name: &str) -> Option<StoredUpload> {
        self.lock().uploads.get(name).cloned()
    }

    pub fn record_visit(&self) -> u64 {
        let mut state = self.lock();
        state.visits += 1;
        state.visits
    }

    pub fn visits(&self) -> u64 {
        self.lock().visits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_assigns_id_and_timestamp() {
        let store = MockStore::default();
        let created = store
            .create("product", json!({"name": "Widget"}))
            .unwrap();
        assert!(id_of(&created).is_some());
        assert!(created.get("createdAt").is_some());
        assert_eq!(store.list("product").unwrap().len(), 1);
    }

    #[test]
    fn update_merges_fields_and_keeps_id() {
        let store = MockStore::default();
        let created = store
            .create("service", json!({"name": "A", "description": "x"}))
            .unwrap();
        let id = id_of(&created).unwrap().to_string();
        let updated = store
            .update("service", &id, json!({"name": "B", "_id": "other"}))
            .unwrap();
        assert_eq!(updated["name"], "B");
        assert_eq!(updated["description"], "x");
        assert_eq!(id_of(&updated), Some(id.as_str()));
    }

    #[test]
    fn delete_removes_only_that_document() {
        let store = MockStore::default();
        let a = store.create("team", json!({"role": "a"})).unwrap();
        store.create("team", json!({"role": "b"})).unwrap();
        store.delete("team", id_of(&a).unwrap()).unwrap();
        let remaining = store.list("team").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0]["role"], "b");
        assert!(matches!(
            store.delete("team", "missing"),
            Err(StoreError::DocumentNotFound)
        ));
    }

    #[test]
    fn unknown_collections_are_rejected() {
        let store = MockStore::default();
        assert!(matches!(
            store.list("widgets"),
            Err(StoreError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn singletons_start_empty_and_merge() {
        let store = MockStore::default();
        assert_eq!(store.singleton("stats").unwrap(), None);
        store
            .put_singleton("stats", json!({"happyClients": 3}))
            .unwrap();
        let merged = store
            .put_singleton("stats", json!({"teamMembers": 4}))
            .unwrap();
        assert_eq!(merged, json!({"happyClients": 3, "teamMembers": 4}));
    }

    #[test]
    fn password_reset_requires_verified_code() {
        let store = MockStore::default();
        store.add_admin("Admin", "admin@example.com", "old");
        let otp = store.request_otp("admin@example.com").unwrap();
        assert_eq!(otp.len(), 6);

        let reset = requests::ResetPassword {
            email: "admin@example.com".into(),
            password: "new".into(),
        };
        assert!(matches!(
            store.reset_password(&reset),
            Err(StoreError::OtpNotVerified)
        ));
        assert!(store.verify_otp("admin@example.com", "nope").is_err());
        store.verify_otp("admin@example.com", &otp).unwrap();
        store.reset_password(&reset).unwrap();

        let login = requests::LoginCredentials {
            email: "admin@example.com".into(),
            password: "new".into(),
        };
        let token = store.login(&login).unwrap();
        store.check_token(&token).unwrap();
    }

    #[test]
    fn upload_names_are_sanitized() {
        let store = MockStore::default();
        let name = store.save_upload("my photo?.png", "image/png", vec![1]);
        assert!(name.ends_with("-my-photo-.png"));
        assert_eq!(store.upload(&name).unwrap().bytes, vec![1]);
    }
}
