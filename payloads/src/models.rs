//! Entities and singleton documents served by the content API, together
//! with their form drafts.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use std::marker::PhantomData;
use std::time::Duration;

use crate::draft::{comma_list, number_or_string, slugify, split_tags};
use crate::{
    Draft, FieldKind, FieldSpec, ImageField, Resource, ResourceId, Singleton,
};

/// Accept either a JSON string or a number for free-text fields the API is
/// inconsistent about (phone numbers, headline statistics).
fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Accept a count sent either as a JSON number or as numeric text, the way
/// multipart form fields arrive.
fn lenient_u32<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u32, D::Error> {
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid count {number}"))),
        serde_json::Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid count {text:?}"))),
        other => Err(D::Error::custom(format!("invalid count {other}"))),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push('…');
    }
    out
}

// ===== Product =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub link: String,
    #[serde(skip)]
    pub image: ImageField,
}

impl Draft for ProductDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", "Name", FieldKind::Text),
            FieldSpec::required("description", "Description", FieldKind::TextArea),
            FieldSpec::optional("link", "Link", FieldKind::Url),
            FieldSpec::required("image", "Image", FieldKind::Image),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "link" => self.link.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "description" => self.description = value,
            "link" => self.link = value,
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

impl Resource for Product {
    type Draft = ProductDraft;
    const ENDPOINT: &'static str = "product";
    const LABEL: &'static str = "Product";
    const PLURAL: &'static str = "Products";

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn summary(&self) -> Option<String> {
        Some(excerpt(&self.description, 120))
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            link: self.link.clone().unwrap_or_default(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }
}

// ===== Service =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    #[serde(skip)]
    pub image: ImageField,
}

impl Draft for ServiceDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", "Name", FieldKind::Text),
            FieldSpec::required("description", "Description", FieldKind::TextArea),
            FieldSpec::required("image", "Image", FieldKind::Image),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "description" => self.description = value,
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

impl Resource for Service {
    type Draft = ServiceDraft;
    const ENDPOINT: &'static str = "service";
    const LABEL: &'static str = "Service";
    const PLURAL: &'static str = "Services";

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn summary(&self) -> Option<String> {
        Some(excerpt(&self.description, 120))
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    fn to_draft(&self) -> ServiceDraft {
        ServiceDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }
}

// ===== Team member =====

pub const GENDERS: &[(&str, &str)] =
    &[("male", "Male"), ("female", "Female"), ("other", "Other")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Older records carry a single combined name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        let joined = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if joined.is_empty() {
            self.name.clone().unwrap_or_default()
        } else {
            joined
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    pub gender: String,
    pub description: String,
    #[serde(skip)]
    pub image: ImageField,
}

impl Draft for TeamMemberDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("firstName", "First name", FieldKind::Text),
            FieldSpec::required("lastName", "Last name", FieldKind::Text),
            FieldSpec::required("role", "Role", FieldKind::Text),
            FieldSpec::optional("email", "Email", FieldKind::Email),
            FieldSpec::optional("gender", "Gender", FieldKind::Select(GENDERS)),
            FieldSpec::optional("description", "Description", FieldKind::TextArea),
            FieldSpec::required("image", "Photo", FieldKind::Image),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "firstName" => self.first_name.clone(),
            "lastName" => self.last_name.clone(),
            "role" => self.role.clone(),
            "email" => self.email.clone(),
            "gender" => self.gender.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "role" => self.role = value,
            "email" => self.email = value,
            "gender" => self.gender = value,
            "description" => self.description = value,
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

impl Resource for TeamMember {
    type Draft = TeamMemberDraft;
    const ENDPOINT: &'static str = "team";
    const LABEL: &'static str = "Team member";
    const PLURAL: &'static str = "Team";
    const REQUEST_TIMEOUT: Option<Duration> = Some(Duration::from_secs(30));

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        self.full_name()
    }

    fn summary(&self) -> Option<String> {
        Some(self.role.clone())
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    fn to_draft(&self) -> TeamMemberDraft {
        // Legacy single-name records are split on the first space.
        let (first_name, last_name) = if self.first_name.is_empty()
            && self.last_name.is_empty()
        {
            let name = self.name.clone().unwrap_or_default();
            match name.split_once(' ') {
                Some((first, last)) => (first.to_string(), last.to_string()),
                None => (name, String::new()),
            }
        } else {
            (self.first_name.clone(), self.last_name.clone())
        };
        TeamMemberDraft {
            first_name,
            last_name,
            role: self.role.clone(),
            email: self.email.clone(),
            gender: self.gender.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }
}

// ===== Achievement =====

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatistics {
    #[serde(default, deserialize_with = "string_or_number")]
    pub projects_completed: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year_on_year_growth: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub funded: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub downloads: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub statistics: AchievementStatistics,
    /// Either a calendar date or a full timestamp, depending on the record.
    #[serde(default)]
    pub date: Option<String>,
}

impl Achievement {
    /// The achievement date as `YYYY-MM-DD`, when it can be parsed.
    pub fn calendar_date(&self) -> Option<jiff::civil::Date> {
        let raw = self.date.as_deref()?.trim();
        if let Ok(timestamp) = raw.parse::<Timestamp>() {
            return Some(timestamp.to_zoned(jiff::tz::TimeZone::UTC).date());
        }
        raw.parse::<jiff::civil::Date>().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub statistics: AchievementStatistics,
    pub date: String,
}

impl Draft for AchievementDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::required("description", "Description", FieldKind::TextArea),
            FieldSpec::optional(
                "projectsCompleted",
                "Projects completed",
                FieldKind::Text,
            ),
            FieldSpec::optional(
                "yearOnYearGrowth",
                "Year on year growth",
                FieldKind::Text,
            ),
            FieldSpec::optional("funded", "Funded", FieldKind::Text),
            FieldSpec::optional("downloads", "Downloads", FieldKind::Text),
            FieldSpec::required("date", "Date", FieldKind::Date),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "projectsCompleted" => self.statistics.projects_completed.clone(),
            "yearOnYearGrowth" => self.statistics.year_on_year_growth.clone(),
            "funded" => self.statistics.funded.clone(),
            "downloads" => self.statistics.downloads.clone(),
            "date" => self.date.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "description" => self.description = value,
            "projectsCompleted" => self.statistics.projects_completed = value,
            "yearOnYearGrowth" => self.statistics.year_on_year_growth = value,
            "funded" => self.statistics.funded = value,
            "downloads" => self.statistics.downloads = value,
            "date" => self.date = value,
            _ => {}
        }
    }
}

impl Resource for Achievement {
    type Draft = AchievementDraft;
    const ENDPOINT: &'static str = "achievement";
    const LABEL: &'static str = "Achievement";
    const PLURAL: &'static str = "Achievements";

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn summary(&self) -> Option<String> {
        self.calendar_date().map(|date| date.strftime("%B %Y").to_string())
    }

    fn to_draft(&self) -> AchievementDraft {
        AchievementDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            statistics: self.statistics.clone(),
            date: self
                .calendar_date()
                .map(|date| date.to_string())
                .unwrap_or_default(),
        }
    }
}

// ===== Growth step =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStep {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStepDraft {
    #[serde(serialize_with = "number_or_string")]
    pub number: String,
    pub title: String,
    pub description: String,
    #[serde(skip)]
    pub image: ImageField,
}

impl Draft for GrowthStepDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("number", "Step number", FieldKind::Number),
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::required("description", "Description", FieldKind::TextArea),
            FieldSpec::optional("image", "Image", FieldKind::Image),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "number" => self.number.clone(),
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "number" => self.number = value,
            "title" => self.title = value,
            "description" => self.description = value,
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

impl Resource for GrowthStep {
    type Draft = GrowthStepDraft;
    const ENDPOINT: &'static str = "growthsteps";
    const LABEL: &'static str = "Growth step";
    const PLURAL: &'static str = "Growth Steps";

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    fn summary(&self) -> Option<String> {
        Some(excerpt(&self.description, 120))
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    fn to_draft(&self) -> GrowthStepDraft {
        GrowthStepDraft {
            number: self.number.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }

    fn sort(items: &mut [Self]) {
        items.sort_by_key(|step| step.number);
    }
}

// ===== Blog =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

pub const BLOG_STATUSES: &[(&str, &str)] =
    &[("draft", "Draft"), ("published", "Published")];

pub const BLOG_CATEGORIES: &[(&str, &str)] = &[
    ("Technology", "Technology"),
    ("Development", "Development"),
    ("Design", "Design"),
    ("Business", "Business"),
    ("Marketing", "Marketing"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    /// Rendered HTML.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Reading time, e.g. "5 min read".
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub content: String,
    #[serde(serialize_with = "comma_list")]
    pub tags: String,
    pub status: String,
    pub author: String,
    pub duration: String,
    #[serde(skip)]
    pub featured_image: ImageField,
}

impl Draft for BlogDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::optional("slug", "Slug", FieldKind::Text),
            FieldSpec::required(
                "category",
                "Category",
                FieldKind::Select(BLOG_CATEGORIES),
            ),
            FieldSpec::required("content", "Content", FieldKind::RichText),
            FieldSpec::optional("tags", "Tags", FieldKind::Tags),
            FieldSpec::required(
                "status",
                "Status",
                FieldKind::Select(BLOG_STATUSES),
            ),
            FieldSpec::optional("author", "Author", FieldKind::Text),
            FieldSpec::optional("duration", "Reading time", FieldKind::Text),
            FieldSpec::required(
                "featuredImage",
                "Featured image",
                FieldKind::Image,
            ),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "slug" => self.slug.clone(),
            "category" => self.category.clone(),
            "content" => self.content.clone(),
            "tags" => self.tags.clone(),
            "status" => self.status.clone(),
            "author" => self.author.clone(),
            "duration" => self.duration.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "slug" => self.slug = value,
            "category" => self.category = value,
            "content" => self.content = value,
            "tags" => self.tags = value,
            "status" => self.status = value,
            "author" => self.author = value,
            "duration" => self.duration = value,
            _ => {}
        }
    }

    fn image(&self) -> Option<&ImageField> {
        Some(&self.featured_image)
    }

    fn image_mut(&mut self) -> Option<&mut ImageField> {
        Some(&mut self.featured_image)
    }

    fn prepare(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        } else {
            self.slug = slugify(&self.slug);
        }
        if self.status.is_empty() {
            self.status = BlogStatus::Draft.as_str().to_string();
        }
    }
}

impl Resource for Blog {
    type Draft = BlogDraft;
    const ENDPOINT: &'static str = "blog";
    const LABEL: &'static str = "Blog post";
    const PLURAL: &'static str = "Blog";

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{} · {}", self.category, self.status.as_str()))
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.featured_image)
    }

    fn to_draft(&self) -> BlogDraft {
        BlogDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            category: self.category.clone(),
            content: self.content.clone(),
            tags: self.tags.join(", "),
            status: self.status.as_str().to_string(),
            author: self.author.clone().unwrap_or_default(),
            duration: self.duration.clone().unwrap_or_default(),
            featured_image: ImageField::from_existing(
                self.featured_image.as_deref(),
            ),
        }
    }

    /// Newest first; undated posts last.
    fn sort(items: &mut [Self]) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

impl Blog {
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .iter()
            .flat_map(|tag| split_tags(tag))
            .collect()
    }
}

// ===== Contact submission =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id", alias = "id")]
    pub id: ResourceId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    pub message: String,
}

impl Draft for ContactSubmissionDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("firstName", "First name", FieldKind::Text),
            FieldSpec::required("lastName", "Last name", FieldKind::Text),
            FieldSpec::required("email", "Email", FieldKind::Email),
            FieldSpec::optional("number", "Phone number", FieldKind::Tel),
            FieldSpec::required("message", "Message", FieldKind::TextArea),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "firstName" => self.first_name.clone(),
            "lastName" => self.last_name.clone(),
            "email" => self.email.clone(),
            "number" => self.number.clone(),
            "message" => self.message.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "email" => self.email = value,
            "number" => self.number = value,
            "message" => self.message = value,
            _ => {}
        }
    }
}

impl Resource for ContactSubmission {
    type Draft = ContactSubmissionDraft;
    const ENDPOINT: &'static str = "contact";
    const LABEL: &'static str = "Contact submission";
    const PLURAL: &'static str = "Contact Submissions";
    const EDITABLE: bool = false;

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{} · {}", self.email, excerpt(&self.message, 80)))
    }

    fn to_draft(&self) -> ContactSubmissionDraft {
        ContactSubmissionDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            number: self.number.clone(),
            message: self.message.clone(),
        }
    }
}

// ===== Singleton documents =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub projects_completed: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub happy_clients: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub team_members: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub years_of_experience: u32,
}

impl Default for Stats {
    /// Figures shown when the stats document is missing or unreachable.
    fn default() -> Self {
        Self {
            projects_completed: 150,
            happy_clients: 120,
            team_members: 25,
            years_of_experience: 8,
        }
    }
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.projects_completed == 0
            && self.happy_clients == 0
            && self.team_members == 0
            && self.years_of_experience == 0
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("Projects Completed", self.projects_completed),
            ("Happy Clients", self.happy_clients),
            ("Team Members", self.team_members),
            ("Years of Experience", self.years_of_experience),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDraft {
    #[serde(serialize_with = "number_or_string")]
    pub projects_completed: String,
    #[serde(serialize_with = "number_or_string")]
    pub happy_clients: String,
    #[serde(serialize_with = "number_or_string")]
    pub team_members: String,
    #[serde(serialize_with = "number_or_string")]
    pub years_of_experience: String,
}

impl Draft for StatsDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required(
                "projectsCompleted",
                "Projects completed",
                FieldKind::Number,
            ),
            FieldSpec::required("happyClients", "Happy clients", FieldKind::Number),
            FieldSpec::required("teamMembers", "Team members", FieldKind::Number),
            FieldSpec::required(
                "yearsOfExperience",
                "Years of experience",
                FieldKind::Number,
            ),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "projectsCompleted" => self.projects_completed.clone(),
            "happyClients" => self.happy_clients.clone(),
            "teamMembers" => self.team_members.clone(),
            "yearsOfExperience" => self.years_of_experience.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "projectsCompleted" => self.projects_completed = value,
            "happyClients" => self.happy_clients = value,
            "teamMembers" => self.team_members = value,
            "yearsOfExperience" => self.years_of_experience = value,
            _ => {}
        }
    }
}

impl Singleton for Stats {
    type Draft = StatsDraft;
    const ENDPOINT: &'static str = "stats";
    const LABEL: &'static str = "Stats";

    fn to_draft(&self) -> StatsDraft {
        StatsDraft {
            projects_completed: self.projects_completed.to_string(),
            happy_clients: self.happy_clients.to_string(),
            team_members: self.team_members.to_string(),
            years_of_experience: self.years_of_experience.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUs {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub vision: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsDraft {
    pub title: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
}

impl Draft for AboutUsDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::required("description", "Description", FieldKind::TextArea),
            FieldSpec::optional("mission", "Mission", FieldKind::TextArea),
            FieldSpec::optional("vision", "Vision", FieldKind::TextArea),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "mission" => self.mission.clone(),
            "vision" => self.vision.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "description" => self.description = value,
            "mission" => self.mission = value,
            "vision" => self.vision = value,
            _ => {}
        }
    }
}

impl Singleton for AboutUs {
    type Draft = AboutUsDraft;
    const ENDPOINT: &'static str = "aboutus";
    const LABEL: &'static str = "About Us";

    fn to_draft(&self) -> AboutUsDraft {
        AboutUsDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            mission: self.mission.clone(),
            vision: self.vision.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub working_hours: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoDraft {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub working_hours: String,
}

impl Draft for ContactInfoDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("email", "Email", FieldKind::Email),
            FieldSpec::required("phone", "Phone", FieldKind::Tel),
            FieldSpec::required("address", "Address", FieldKind::TextArea),
            FieldSpec::optional("workingHours", "Working hours", FieldKind::Text),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "address" => self.address.clone(),
            "workingHours" => self.working_hours.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "email" => self.email = value,
            "phone" => self.phone = value,
            "address" => self.address = value,
            "workingHours" => self.working_hours = value,
            _ => {}
        }
    }
}

impl Singleton for ContactInfo {
    type Draft = ContactInfoDraft;
    const ENDPOINT: &'static str = "contact-info";
    const LABEL: &'static str = "Contact Info";

    fn to_draft(&self) -> ContactInfoDraft {
        ContactInfoDraft {
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            working_hours: self.working_hours.clone(),
        }
    }
}

/// Marker for which policy document a [`PolicyDocument`] holds.
pub trait PolicyKind:
    std::fmt::Debug + Clone + Copy + PartialEq + Default + 'static
{
    const ENDPOINT: &'static str;
    const LABEL: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrivacyPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefundPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermsOfService;

impl PolicyKind for PrivacyPolicy {
    const ENDPOINT: &'static str = "privacypolicy";
    const LABEL: &'static str = "Privacy Policy";
}

impl PolicyKind for RefundPolicy {
    const ENDPOINT: &'static str = "refund";
    const LABEL: &'static str = "Refund Policy";
}

impl PolicyKind for TermsOfService {
    const ENDPOINT: &'static str = "terms";
    const LABEL: &'static str = "Terms & Conditions";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyDocument<K: PolicyKind> {
    #[serde(default)]
    pub title: String,
    /// Rendered HTML.
    #[serde(default)]
    pub content: String,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: PolicyKind> PolicyDocument<K> {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind: PhantomData,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PolicyDraft {
    pub title: String,
    pub content: String,
}

impl Draft for PolicyDraft {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::required("content", "Content", FieldKind::RichText),
        ];
        FIELDS
    }

    fn get(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "content" => self.content.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "content" => self.content = value,
            _ => {}
        }
    }
}

impl<K: PolicyKind> Singleton for PolicyDocument<K> {
    type Draft = PolicyDraft;
    const ENDPOINT: &'static str = K::ENDPOINT;
    const LABEL: &'static str = K::LABEL;

    fn to_draft(&self) -> PolicyDraft {
        PolicyDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

pub type PrivacyPolicyDocument = PolicyDocument<PrivacyPolicy>;
pub type RefundPolicyDocument = PolicyDocument<RefundPolicy>;
pub type TermsDocument = PolicyDocument<TermsOfService>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_accepts_mongo_style_id() {
        let product: Product = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "name": "Launchpad",
            "description": "Landing pages",
            "image": "launchpad.png",
            "link": "https://example.com"
        }))
        .unwrap();
        assert_eq!(product.id, ResourceId::from("65f0c0ffee"));
        assert_eq!(Resource::image(&product), Some("launchpad.png"));
    }

    #[test]
    fn plain_id_is_accepted_too() {
        let service: Service = serde_json::from_value(json!({
            "id": "s1",
            "name": "Consulting"
        }))
        .unwrap();
        assert_eq!(service.id.0, "s1");
        assert_eq!(Resource::image(&service), None);
    }

    #[test]
    fn team_member_falls_back_to_legacy_name() {
        let member: TeamMember = serde_json::from_value(json!({
            "_id": "t1",
            "name": "Ada Lovelace",
            "role": "CTO"
        }))
        .unwrap();
        assert_eq!(member.full_name(), "Ada Lovelace");
        let draft = member.to_draft();
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.last_name, "Lovelace");
    }

    #[test]
    fn step_number_sent_as_form_text_is_read_back() {
        let step: GrowthStep = serde_json::from_value(json!({
            "_id": "g1",
            "number": "3",
            "title": "Scale"
        }))
        .unwrap();
        assert_eq!(step.number, 3);

        let bad = serde_json::from_value::<GrowthStep>(json!({
            "_id": "g2",
            "number": "three",
            "title": "Scale"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn statistics_accept_numbers_and_strings() {
        let achievement: Achievement = serde_json::from_value(json!({
            "_id": "a1",
            "title": "Series A",
            "statistics": {
                "projectsCompleted": 40,
                "yearOnYearGrowth": "120%",
                "funded": "$2M",
                "downloads": null
            },
            "date": "2024-05-01T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(achievement.statistics.projects_completed, "40");
        assert_eq!(achievement.statistics.year_on_year_growth, "120%");
        assert_eq!(achievement.statistics.downloads, "");
        assert_eq!(achievement.to_draft().date, "2024-05-01");
    }

    #[test]
    fn achievement_date_accepts_plain_dates() {
        let achievement: Achievement = serde_json::from_value(json!({
            "_id": "a2",
            "title": "Award",
            "date": "2023-11-20"
        }))
        .unwrap();
        assert_eq!(
            achievement.calendar_date(),
            Some(jiff::civil::date(2023, 11, 20))
        );
    }

    #[test]
    fn achievement_draft_nests_statistics() {
        let mut draft = AchievementDraft::default();
        draft.set("title", "Growth".into());
        draft.set("funded", "$1M".into());
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["statistics"]["funded"], "$1M");
        assert_eq!(draft.get("funded"), "$1M");
    }

    #[test]
    fn growth_steps_sort_by_number() {
        let mut steps: Vec<GrowthStep> = serde_json::from_value(json!([
            {"_id": "b", "number": 2, "title": "Build"},
            {"_id": "c", "number": 3, "title": "Launch"},
            {"_id": "a", "number": 1, "title": "Plan"}
        ]))
        .unwrap();
        GrowthStep::sort(&mut steps);
        let numbers: Vec<u32> = steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn growth_step_number_is_sent_as_a_number() {
        let draft = GrowthStepDraft {
            number: "4".into(),
            title: "Scale".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["number"], 4);
    }

    #[test]
    fn blog_draft_derives_slug_and_status() {
        let mut draft = BlogDraft {
            title: "Why We Ship Weekly".into(),
            ..Default::default()
        };
        draft.prepare();
        assert_eq!(draft.slug, "why-we-ship-weekly");
        assert_eq!(draft.status, "draft");
    }

    #[test]
    fn blog_draft_sends_tags_as_list() {
        let draft = BlogDraft {
            tags: "rust, wasm".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["tags"], json!(["rust", "wasm"]));
        assert!(value.get("featuredImage").is_none());
    }

    #[test]
    fn blogs_sort_newest_first() {
        let mut posts: Vec<Blog> = serde_json::from_value(json!([
            {"_id": "old", "title": "Old", "createdAt": "2024-01-01T00:00:00Z"},
            {"_id": "none", "title": "Undated"},
            {"_id": "new", "title": "New", "createdAt": "2025-01-01T00:00:00Z"}
        ]))
        .unwrap();
        Blog::sort(&mut posts);
        let ids: Vec<&str> = posts.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "none"]);
    }

    #[test]
    fn contact_number_may_be_numeric() {
        let submission: ContactSubmission = serde_json::from_value(json!({
            "_id": "c1",
            "firstName": "Sam",
            "lastName": "Lee",
            "email": "sam@example.com",
            "number": 3001234567u64,
            "message": "Hi"
        }))
        .unwrap();
        assert_eq!(submission.number, "3001234567");
    }

    #[test]
    fn stats_default_is_the_fallback() {
        let stats = Stats::default();
        assert!(!stats.is_empty());
        let empty: Stats = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn policy_documents_use_their_own_endpoints() {
        assert_eq!(PrivacyPolicyDocument::ENDPOINT, "privacypolicy");
        assert_eq!(RefundPolicyDocument::ENDPOINT, "refund");
        assert_eq!(TermsDocument::ENDPOINT, "terms");
        let terms: TermsDocument =
            serde_json::from_value(json!({"title": "Terms", "content": "<p>x</p>"}))
                .unwrap();
        assert_eq!(terms.to_draft().content, "<p>x</p>");
    }
}
