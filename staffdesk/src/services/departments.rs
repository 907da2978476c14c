//! Department service (admin only)

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Account, Department, DepartmentInput};
use shared::util::new_id;

use super::filter::TextFilter;
use crate::auth::require_admin;
use crate::db::Collections;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};

fn validated(
    db: &Collections,
    input: DepartmentInput,
    except_id: Option<&str>,
) -> AppResult<(String, Option<String>)> {
    let name = validate_required_text(
        &input.name,
        "name",
        MAX_NAME_LEN,
        "Department name is required.",
    )?;
    let lowered = name.to_lowercase();
    let taken = db
        .departments
        .iter()
        .any(|d| d.name.to_lowercase() == lowered && Some(d.id.as_str()) != except_id);
    if taken {
        return Err(AppError::new(ErrorCode::DepartmentNameExists).with_detail("name", name));
    }
    let description = validate_optional_text(input.description.as_deref(), "description", MAX_NOTE_LEN)?;
    Ok((name, description))
}

/// Departments matching `filter` on name or description
pub fn list(db: &Collections, actor: Option<&Account>, filter: &str) -> AppResult<Vec<Department>> {
    require_admin(actor)?;
    let filter = TextFilter::new(filter);
    Ok(db
        .departments
        .iter()
        .filter(|d| filter.matches_any(&[d.name.as_str(), d.description.as_deref().unwrap_or("")]))
        .cloned()
        .collect())
}

pub fn create(
    db: &mut Collections,
    actor: Option<&Account>,
    input: DepartmentInput,
) -> AppResult<Department> {
    require_admin(actor)?;
    let (name, description) = validated(db, input, None)?;
    let dept = Department {
        id: new_id(),
        name,
        description,
    };
    db.departments.push(dept.clone());
    Ok(dept)
}

pub fn update(
    db: &mut Collections,
    actor: Option<&Account>,
    id: &str,
    input: DepartmentInput,
) -> AppResult<Department> {
    require_admin(actor)?;
    if db.department(id).is_none() {
        return Err(AppError::new(ErrorCode::DepartmentNotFound).with_detail("id", id));
    }
    let (name, description) = validated(db, input, Some(id))?;
    let dept = db
        .departments
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::DepartmentNotFound))?;
    dept.name = name;
    dept.description = description;
    Ok(dept.clone())
}

/// Refused while any employee is assigned to the department
pub fn delete(db: &mut Collections, actor: Option<&Account>, id: &str) -> AppResult<Department> {
    require_admin(actor)?;
    if db.employees.iter().any(|e| e.dept_id == id) {
        return Err(AppError::new(ErrorCode::DepartmentInUse).with_detail("id", id));
    }
    let index = db
        .departments
        .iter()
        .position(|d| d.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::DepartmentNotFound).with_detail("id", id))?;
    Ok(db.departments.remove(index))
}
