//! Course DTOs
//!
//! `GET courses/all` -> `{ success, data: [course] }`. Modules arrive either
//! as an object keyed by module id or as a plain array.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::{decode_each, truthy, ApiEnvelope};
use crate::domain::{ContentItem, ContentType, Course, CourseModule, CourseOption, DomainResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CourseDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub is_published: Option<Value>,
    #[serde(default)]
    pub modules: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_items: Option<Vec<ContentItemDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentItemDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_url: Option<String>,
}

impl CourseDto {
    pub fn into_domain(self) -> Course {
        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => Course::UNTITLED.to_string(),
        };
        let price = match self.price {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let modules = match self.modules {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => {
                let values = map.into_iter().map(|(_, module)| module).collect();
                Some(decode_modules(Value::Array(values)))
            }
            Some(list) => Some(decode_modules(list)),
        };
        Course {
            id: self.id,
            name,
            price,
            is_published: self.is_published.as_ref().map(truthy).unwrap_or(false),
            modules,
        }
    }
}

fn decode_modules(list: Value) -> Vec<CourseModule> {
    decode_each::<ModuleDto>(Some(list), "course module")
        .into_iter()
        .map(ModuleDto::into_domain)
        .collect()
}

impl ModuleDto {
    pub fn into_domain(self) -> CourseModule {
        CourseModule {
            id: self.id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            content_items: self
                .content_items
                .unwrap_or_default()
                .into_iter()
                .map(ContentItemDto::into_domain)
                .collect(),
        }
    }
}

impl ContentItemDto {
    pub fn into_domain(self) -> ContentItem {
        ContentItem {
            id: self.id,
            name: self.name.unwrap_or_default(),
            content_type: ContentType::from_str(self.content_type.as_deref().unwrap_or_default()),
            content_url: self.content_url.unwrap_or_default(),
        }
    }
}

fn course_dtos(body: &str) -> DomainResult<Vec<CourseDto>> {
    let envelope = ApiEnvelope::parse(body)?;
    if !envelope.success {
        debug!("[API] courses response reported failure: {:?}", envelope.message);
        return Ok(Vec::new());
    }
    Ok(decode_each(envelope.data, "course"))
}

/// Decode the courses list for the course explorer
pub fn decode_courses(body: &str) -> DomainResult<Vec<Course>> {
    Ok(course_dtos(body)?.into_iter().map(CourseDto::into_domain).collect())
}

/// Decode the courses list as assignment options
pub fn decode_course_options(body: &str) -> DomainResult<Vec<CourseOption>> {
    Ok(course_dtos(body)?
        .into_iter()
        .map(|dto| CourseOption::from_course(dto.id, dto.name.as_deref()))
        .collect())
}
