use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A person who writes books. Identity is assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub family_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, empty when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            String::new()
        } else {
            format!("{}, {}", self.family_name, self.first_name)
        }
    }

    /// Canonical detail-page path.
    pub fn url(&self) -> String {
        match self.id {
            Some(id) => format!("/catalog/author/{}", id.to_hex()),
            None => String::new(),
        }
    }

    pub fn lifespan(&self) -> String {
        let birth = self.date_of_birth.map(|d| d.to_string()).unwrap_or_default();
        let death = self.date_of_death.map(|d| d.to_string()).unwrap_or_default();
        if birth.is_empty() && death.is_empty() {
            String::new()
        } else {
            format!("{} - {}", birth, death)
        }
    }
}

/// Flattened author for template contexts: plain strings only.
#[derive(Debug, Serialize)]
pub struct AuthorView {
    pub id: String,
    pub first_name: String,
    pub family_name: String,
    pub name: String,
    pub date_of_birth: Option<String>,
    pub date_of_death: Option<String>,
    pub lifespan: String,
    pub url: String,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            name: author.name(),
            date_of_birth: author.date_of_birth.map(|d| d.to_string()),
            date_of_death: author.date_of_death.map(|d| d.to_string()),
            lifespan: author.lifespan(),
            url: author.url(),
        }
    }
}
