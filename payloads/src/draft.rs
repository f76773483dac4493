//! Form drafts: the editable, string-backed mirror of an entity.
//!
//! Every admin form is rendered from a draft's static field table, so a
//! single generic form component can edit any entity. Validation is limited
//! to required-field checks.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Input widget used for a draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Tel,
    Number,
    Date,
    Password,
    TextArea,
    /// Markdown/HTML source rendered to HTML before submit.
    RichText,
    /// Comma separated list.
    Tags,
    /// Fixed choices as `(value, label)` pairs.
    Select(&'static [(&'static str, &'static str)]),
    /// File picker; the key doubles as the multipart part name.
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(
        key: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(
        key: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }
}

/// Field key to message map produced by validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, key: &'static str, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, message)| (*key, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join(". "))
    }
}

/// A file chosen in the browser, held until the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// `data:` URL used for the immediate preview.
    pub preview_url: String,
}

/// State of an image field: the filename already stored on the server
/// and/or a newly picked file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageField {
    pub existing: Option<String>,
    pub upload: Option<ImageUpload>,
}

impl ImageField {
    pub fn from_existing(existing: Option<&str>) -> Self {
        Self {
            existing: existing
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            upload: None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.existing.is_some() || self.upload.is_some()
    }

    /// Name shown next to the picker.
    pub fn display_name(&self) -> Option<&str> {
        self.upload
            .as_ref()
            .map(|upload| upload.file_name.as_str())
            .or(self.existing.as_deref())
    }
}

pub trait Draft: Clone + PartialEq + Default + Serialize + 'static {
    fn fields() -> &'static [FieldSpec];

    /// Current value of a field as shown in its input.
    fn get(&self, key: &str) -> String;

    /// Store an input value. Unknown keys are ignored.
    fn set(&mut self, key: &str, value: String);

    fn image(&self) -> Option<&ImageField> {
        None
    }

    fn image_mut(&mut self) -> Option<&mut ImageField> {
        None
    }

    /// Normalization applied right before submit.
    fn prepare(&mut self) {}

    /// Multipart part name for the image, taken from the field table.
    fn image_key() -> Option<&'static str> {
        Self::fields()
            .iter()
            .find(|field| field.kind == FieldKind::Image)
            .map(|field| field.key)
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Self::fields().iter().filter(|field| field.required) {
            let present = match field.kind {
                FieldKind::Image => self.image().is_some_and(ImageField::is_set),
                _ => !self.get(field.key).trim().is_empty(),
            };
            if !present {
                errors.insert(field.key, format!("{} is required", field.label));
            }
        }
        errors.into_result()
    }
}

/// Flatten a draft into multipart text fields. Strings are sent as-is,
/// other JSON values (numbers, tag lists, nested objects) as JSON text.
pub fn form_fields<D: Draft>(
    draft: &D,
) -> Result<Vec<(String, String)>, serde_json::Error> {
    let value = serde_json::to_value(draft)?;
    let serde_json::Value::Object(map) = value else {
        return Ok(Vec::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

/// Serialize a numeric input as a JSON number when it parses as one.
pub fn number_or_string<S: Serializer>(
    value: &str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<i64>() {
        serializer.serialize_i64(number)
    } else if let Ok(number) = trimmed.parse::<f64>() {
        serializer.serialize_f64(number)
    } else {
        serializer.serialize_str(value)
    }
}

/// Serialize a comma separated input as a list of trimmed entries.
pub fn comma_list<S: Serializer>(
    value: &str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    split_tags(value).serialize(serializer)
}

pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase, hyphen separated form of a title, used for blog URLs.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Default, Serialize)]
    struct NoteDraft {
        title: String,
        #[serde(serialize_with = "number_or_string")]
        rank: String,
        #[serde(serialize_with = "comma_list")]
        tags: String,
        #[serde(skip)]
        image: ImageField,
    }

    impl Draft for NoteDraft {
        fn fields() -> &'static [FieldSpec] {
            const FIELDS: &[FieldSpec] = &[
                FieldSpec::required("title", "Title", FieldKind::Text),
                FieldSpec::optional("rank", "Rank", FieldKind::Number),
                FieldSpec::optional("tags", "Tags", FieldKind::Tags),
                FieldSpec::required("image", "Image", FieldKind::Image),
            ];
            FIELDS
        }

        fn get(&self, key: &str) -> String {
            match key {
                "title" => self.title.clone(),
                "rank" => self.rank.clone(),
                "tags" => self.tags.clone(),
                _ => String::new(),
            }
        }

        fn set(&mut self, key: &str, value: String) {
            match key {
                "title" => self.title = value,
                "rank" => self.rank = value,
                "tags" => self.tags = value,
                _ => {}
            }
        }

        fn image(&self) -> Option<&ImageField> {
            Some(&self.image)
        }

        fn image_mut(&mut self) -> Option<&mut ImageField> {
            Some(&mut self.image)
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = NoteDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("image"), Some("Image is required"));
        assert!(!errors.contains("rank"));
    }

    #[test]
    fn whitespace_does_not_satisfy_required() {
        let mut draft = NoteDraft::default();
        draft.set("title", "   ".into());
        draft.image.existing = Some("note.png".into());
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains("title"));
        assert!(!errors.contains("image"));
    }

    #[test]
    fn existing_image_satisfies_required_image() {
        let mut draft = NoteDraft::default();
        draft.set("title", "Hello".into());
        draft.image = ImageField::from_existing(Some("hello.png"));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn empty_existing_image_is_not_an_image() {
        assert!(!ImageField::from_existing(Some("")).is_set());
    }

    #[test]
    fn image_key_comes_from_field_table() {
        assert_eq!(NoteDraft::image_key(), Some("image"));
    }

    #[test]
    fn form_fields_flatten_typed_values() {
        let draft = NoteDraft {
            title: "Hello".into(),
            rank: "3".into(),
            tags: "rust, web,,".into(),
            image: ImageField::default(),
        };
        let mut fields = form_fields(&draft).unwrap();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("rank".to_string(), "3".to_string()),
                ("tags".to_string(), r#"["rust","web"]"#.to_string()),
                ("title".to_string(), "Hello".to_string()),
            ]
        );
    }

    #[test]
    fn non_numeric_number_input_stays_a_string() {
        let draft = NoteDraft {
            rank: "n/a".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["rank"], "n/a");
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & WASM: 2025 "), "rust-wasm-2025");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn field_errors_display_joins_messages() {
        let mut errors = FieldErrors::default();
        errors.insert("b", "B is required");
        errors.insert("a", "A is required");
        assert_eq!(errors.to_string(), "A is required. B is required");
    }
}
