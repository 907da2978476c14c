//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    /// Externally assigned employee number
    pub emp_id: String,
    /// Account reference (Account ID)
    pub user_id: String,
    /// Department reference (Department ID)
    pub dept_id: String,
    pub position: String,
    /// `YYYY-MM-DD` when written here; stored text is kept as-is, even blank
    #[serde(default)]
    pub hire_date: String,
}

/// Create / update employee payload
///
/// The account is addressed by email, the department by ID.
/// `hire_date` is a `YYYY-MM-DD` string as entered in the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub emp_id: String,
    pub user_email: String,
    pub dept_id: String,
    pub position: String,
    pub hire_date: String,
}

/// Employee with its references resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub employee: Employee,
    /// None when the account no longer exists
    pub account_email: Option<String>,
    /// None when the department no longer exists
    pub department_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_blob_shape() {
        let emp = Employee {
            id: "e1".into(),
            emp_id: "EMP-001".into(),
            user_id: "a1".into(),
            dept_id: "d1".into(),
            position: "Engineer".into(),
            hire_date: "2024-03-01".into(),
        };
        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(json["empId"], "EMP-001");
        assert_eq!(json["userId"], "a1");
        assert_eq!(json["deptId"], "d1");
        assert_eq!(json["hireDate"], "2024-03-01");
    }

    #[test]
    fn test_employee_blank_hire_date() {
        let json = r#"{"id":"e1","empId":"EMP-1","userId":"a1","deptId":"d1",
            "position":"","hireDate":""}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.hire_date, "");
    }
}
