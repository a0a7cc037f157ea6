//! Resource Models
//!
//! Data structures matching the backend's todo/tag schemas.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::FieldDetail;
use crate::messages::Messages;

pub const TAG_NAME_MAX: usize = 50;
pub const TODO_CONTENT_MAX: usize = 500;

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    pub deadline: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

impl NewTag {
    /// Same constraints the server enforces, reported per field.
    pub fn validate(&self, messages: &Messages) -> Vec<FieldDetail> {
        let mut details = Vec::new();
        check_length(&mut details, "name", &self.name, TAG_NAME_MAX, messages);
        if !is_hex_color(&self.color) {
            details.push(FieldDetail::new("color", messages.invalid_color()));
        }
        details
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTodo {
    pub content: String,
    pub deadline: Option<NaiveDateTime>,
    pub tag_ids: Vec<u32>,
}

impl NewTodo {
    pub fn validate(&self, messages: &Messages) -> Vec<FieldDetail> {
        let mut details = Vec::new();
        check_length(&mut details, "content", &self.content, TODO_CONTENT_MAX, messages);
        details
    }
}

/// Partial update; unset fields are left alone by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u32>>,
}

fn check_length(details: &mut Vec<FieldDetail>, field: &str, value: &str, max: usize, messages: &Messages) {
    let len = value.trim().chars().count();
    if len == 0 {
        details.push(FieldDetail::new(field, messages.required()));
    } else if value.chars().count() > max {
        details.push(FieldDetail::new(field, messages.too_long(max)));
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
