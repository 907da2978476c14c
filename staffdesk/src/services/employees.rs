//! Employee service (admin only)
//!
//! An employee links an account (by email at write time) to a department.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Account, Employee, EmployeeInput, EmployeeRow};
use shared::util::new_id;

use super::filter::TextFilter;
use crate::auth::require_admin;
use crate::db::Collections;
use crate::utils::time::{format_date, parse_date};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// Validated form of [`EmployeeInput`] with references resolved
struct Resolved {
    emp_id: String,
    user_id: String,
    dept_id: String,
    position: String,
    hire_date: String,
}

fn resolve(db: &Collections, input: &EmployeeInput, except_id: Option<&str>) -> AppResult<Resolved> {
    let emp_id = validate_required_text(
        &input.emp_id,
        "empId",
        MAX_SHORT_TEXT_LEN,
        "Employee ID is required.",
    )?;
    if db
        .employees
        .iter()
        .any(|e| e.emp_id == emp_id && Some(e.id.as_str()) != except_id)
    {
        return Err(AppError::new(ErrorCode::EmployeeIdExists).with_detail("empId", emp_id));
    }

    let user_id = db
        .account_by_email(&input.user_email)
        .map(|a| a.id.clone())
        .ok_or_else(|| {
            AppError::new(ErrorCode::EmployeeAccountMissing)
                .with_detail("userEmail", input.user_email.trim())
        })?;

    let dept_id = input.dept_id.trim();
    if db.department(dept_id).is_none() {
        return Err(AppError::new(ErrorCode::DepartmentNotFound).with_detail("deptId", dept_id));
    }

    let position = input.position.trim();
    if position.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "position is too long (max {MAX_NAME_LEN})"
        )));
    }

    Ok(Resolved {
        emp_id,
        user_id,
        dept_id: dept_id.to_string(),
        position: position.to_string(),
        hire_date: format_date(parse_date(&input.hire_date)?),
    })
}

/// Employee rows (with account email and department name) matching `filter`
///
/// Searched fields: empId, account email, position, department name, hire date.
pub fn list(db: &Collections, actor: Option<&Account>, filter: &str) -> AppResult<Vec<EmployeeRow>> {
    require_admin(actor)?;
    let filter = TextFilter::new(filter);
    Ok(db
        .employees
        .iter()
        .map(|e| EmployeeRow {
            employee: e.clone(),
            account_email: db.account(&e.user_id).map(|a| a.email.clone()),
            department_name: db.department(&e.dept_id).map(|d| d.name.clone()),
        })
        .filter(|row| {
            filter.matches_joined(&[
                row.employee.emp_id.as_str(),
                row.account_email.as_deref().unwrap_or(""),
                row.employee.position.as_str(),
                row.department_name.as_deref().unwrap_or(""),
                row.employee.hire_date.as_str(),
            ])
        })
        .collect())
}

pub fn create(
    db: &mut Collections,
    actor: Option<&Account>,
    input: EmployeeInput,
) -> AppResult<Employee> {
    require_admin(actor)?;
    let r = resolve(db, &input, None)?;
    let employee = Employee {
        id: new_id(),
        emp_id: r.emp_id,
        user_id: r.user_id,
        dept_id: r.dept_id,
        position: r.position,
        hire_date: r.hire_date,
    };
    db.employees.push(employee.clone());
    Ok(employee)
}

pub fn update(
    db: &mut Collections,
    actor: Option<&Account>,
    id: &str,
    input: EmployeeInput,
) -> AppResult<Employee> {
    require_admin(actor)?;
    if db.employee(id).is_none() {
        return Err(AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id));
    }
    let r = resolve(db, &input, Some(id))?;
    let employee = db
        .employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    employee.emp_id = r.emp_id;
    employee.user_id = r.user_id;
    employee.dept_id = r.dept_id;
    employee.position = r.position;
    employee.hire_date = r.hire_date;
    Ok(employee.clone())
}

pub fn delete(db: &mut Collections, actor: Option<&Account>, id: &str) -> AppResult<Employee> {
    require_admin(actor)?;
    let index = db
        .employees
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id))?;
    Ok(db.employees.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{SeedConfig, seed};

    fn fixture() -> (Collections, Account) {
        let db = seed::seeded(&SeedConfig::default());
        let admin = db.accounts[0].clone();
        (db, admin)
    }

    fn input(db: &Collections, emp_id: &str, email: &str) -> EmployeeInput {
        EmployeeInput {
            emp_id: emp_id.into(),
            user_email: email.into(),
            dept_id: db.departments[0].id.clone(),
            position: " Engineer ".into(),
            hire_date: "2024-03-01".into(),
        }
    }

    #[test]
    fn test_create_resolves_account() {
        let (mut db, admin) = fixture();
        let form = input(&db, " EMP-1 ", "ADMIN@example.com");
        let emp = create(&mut db, Some(&admin), form).unwrap();
        assert_eq!(emp.emp_id, "EMP-1");
        assert_eq!(emp.user_id, admin.id);
        assert_eq!(emp.position, "Engineer");
        assert_eq!(emp.hire_date, "2024-03-01");
    }

    #[test]
    fn test_create_rejections() {
        let (mut db, admin) = fixture();
        let form = input(&db, "EMP-1", "ghost@x.com");
        let err = create(&mut db, Some(&admin), form).unwrap_err();
        assert_eq!(err.message, "User Email must match an existing account.");

        let form = input(&db, "EMP-1", "admin@example.com");
        create(&mut db, Some(&admin), form).unwrap();
        let form = input(&db, "EMP-1", "admin@example.com");
        let err = create(&mut db, Some(&admin), form).unwrap_err();
        assert_eq!(err.message, "Employee ID already exists.");

        let mut form = input(&db, "EMP-2", "admin@example.com");
        form.dept_id = "nope".into();
        let err = create(&mut db, Some(&admin), form).unwrap_err();
        assert_eq!(err.message, "Department not found.");

        let mut form = input(&db, "EMP-2", "admin@example.com");
        form.hire_date = "01/03/2024".into();
        assert_eq!(
            create(&mut db, Some(&admin), form).unwrap_err().code,
            ErrorCode::InvalidFormat
        );
        assert_eq!(db.employees.len(), 1);
    }

    #[test]
    fn test_update_keeps_own_emp_id() {
        let (mut db, admin) = fixture();
        let form = input(&db, "EMP-1", "admin@example.com");
        let emp = create(&mut db, Some(&admin), form).unwrap();

        let mut form = input(&db, "EMP-1", "admin@example.com");
        form.position = "Manager".into();
        let updated = update(&mut db, Some(&admin), &emp.id, form).unwrap();
        assert_eq!(updated.position, "Manager");

        let form = input(&db, "EMP-1", "admin@example.com");
        assert_eq!(
            update(&mut db, Some(&admin), "missing", form).unwrap_err().code,
            ErrorCode::EmployeeNotFound
        );
    }

    #[test]
    fn test_list_rows_and_filter() {
        let (mut db, admin) = fixture();
        let form = input(&db, "EMP-1", "admin@example.com");
        let emp = create(&mut db, Some(&admin), form).unwrap();

        let rows = list(&db, Some(&admin), "").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_email.as_deref(), Some("admin@example.com"));
        assert_eq!(rows[0].department_name.as_deref(), Some("Engineering"));

        assert_eq!(list(&db, Some(&admin), "engineering").unwrap().len(), 1);
        assert_eq!(list(&db, Some(&admin), "2024-03").unwrap().len(), 1);
        assert!(list(&db, Some(&admin), "hr").unwrap().is_empty());

        delete(&mut db, Some(&admin), &emp.id).unwrap();
        assert!(list(&db, Some(&admin), "").unwrap().is_empty());
    }
}
