//! Person service. Placeholder responses only; nothing is stored.

use blog_core::PersonInput;

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonService;

impl PersonService {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, _input: &PersonInput) -> String {
        "This action adds a new person".to_string()
    }

    pub fn find_all(&self) -> String {
        "This action returns all person".to_string()
    }

    pub fn find_one(&self, id: i64) -> String {
        format!("This action returns a #{} person", id)
    }

    pub fn update(&self, id: i64, _input: &PersonInput) -> String {
        format!("This action updates a #{} person", id)
    }

    pub fn remove(&self, id: i64) -> String {
        format!("This action removes a #{} person", id)
    }
}
