//! Employee record shape.
//!
//! Declared for the HR module; field names serialize camelCase to match the
//! document layout other services exchange.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Probation,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub marital_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// Reference to an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department_id: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
    pub status: EmployeeStatus,
    pub personal_info: PersonalInfo,
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_document() {
        let employee: Employee = serde_json::from_str(
            r#"{
                "id": "emp-001",
                "name": "Dana Reyes",
                "email": "dana@example.com",
                "phone": "+1 555 0100",
                "departmentId": "dept-ops",
                "designation": "Operations Lead",
                "dateOfJoining": "2023-04-03",
                "status": "Probation",
                "personalInfo": {
                    "dateOfBirth": "1990-11-20",
                    "gender": null,
                    "address": "4 Elm St",
                    "maritalStatus": null
                },
                "emergencyContact": {
                    "name": "Sam Reyes",
                    "relationship": "Sibling",
                    "phone": "+1 555 0199"
                },
                "documents": [{ "type": "contract", "url": "https://files.example.com/c.pdf" }]
            }"#,
        )
        .unwrap();

        assert_eq!(employee.status, EmployeeStatus::Probation);
        assert_eq!(employee.date_of_joining, NaiveDate::from_ymd_opt(2023, 4, 3).unwrap());
        assert_eq!(employee.documents[0].kind, "contract");
        assert_eq!(employee.personal_info.gender, None);
    }

    #[test]
    fn test_documents_default_to_empty() {
        let json = serde_json::json!({
            "id": "emp-002",
            "name": "Lee",
            "email": "lee@example.com",
            "phone": "",
            "departmentId": "dept-hr",
            "designation": "Recruiter",
            "dateOfJoining": "2024-01-15",
            "status": "Active",
            "personalInfo": { "dateOfBirth": null, "gender": null, "address": null, "maritalStatus": null },
            "emergencyContact": { "name": "", "relationship": "", "phone": "" }
        });
        let employee: Employee = serde_json::from_value(json).unwrap();
        assert!(employee.documents.is_empty());
    }
}
