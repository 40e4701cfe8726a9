use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Patient attached to an RFID card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub disease: String,
    pub symptoms: String,
    pub doctor: String,
    pub contact: String,
}

/// Profile form payload. The card identifier is not editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub disease: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub contact: String,
}

impl UserProfile {
    pub fn apply(&mut self, input: ProfileInput) {
        self.name = input.name;
        self.age = input.age;
        self.gender = input.gender;
        self.disease = input.disease;
        self.symptoms = input.symptoms;
        self.doctor = input.doctor;
        self.contact = input.contact;
    }
}
