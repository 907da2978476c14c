mod common;

use common::*;
use shared::intent::CrudAction;
use shared::models::{
    AccountCreate, AccountUpdate, DepartmentInput, EmployeeInput, LoginInput, ProfileUpdate,
    RegisterInput, RequestItem, RequestStatus, RequestSubmit, RequestType, Role,
};
use staffdesk::{ErrorCode, Intent, PageData, Route, Severity};

fn register(app: &mut staffdesk::App<RecordingView>, email: &str) -> shared::IntentOutcome {
    app.submit_intent(Intent::Register(RegisterInput {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: email.into(),
        password: "secret1".into(),
    }))
}

fn add_user(app: &mut staffdesk::App<RecordingView>, email: &str) -> String {
    let outcome = app.submit_intent(Intent::Account(CrudAction::Create(AccountCreate {
        first_name: "Bob".into(),
        last_name: "Smith".into(),
        email: email.into(),
        password: "secret1".into(),
        role: Role::User,
        verified: true,
    })));
    assert!(outcome.success, "{}", outcome.message);
    outcome.id.unwrap()
}

#[test]
fn test_register_verify_login() {
    let mut app = app();

    let outcome = register(&mut app, " Jane@X.com ");
    assert!(outcome.success);
    assert_eq!(outcome.message, "Account created! Please verify email.");
    assert_eq!(app.current_route(), Route::VerifyEmail);
    assert_eq!(
        app.view().last_page().1,
        PageData::VerifyEmail {
            pending_email: Some("jane@x.com".into())
        }
    );

    // not verified yet
    assert!(!login(&mut app, "jane@x.com", "secret1"));
    assert_eq!(
        app.view().last_result(),
        &("Invalid login OR not verified.".to_string(), Severity::Danger)
    );

    let outcome = app.submit_intent(Intent::VerifyEmail);
    assert!(outcome.success);
    assert_eq!(outcome.message, "Email verified! You can now login.");
    assert_eq!(app.current_route(), Route::Login);

    // slot is consumed
    let outcome = app.submit_intent(Intent::VerifyEmail);
    assert_eq!(outcome.code, ErrorCode::NothingToVerify);
    assert_eq!(outcome.message, "No account found to verify.");

    assert!(login(&mut app, "JANE@x.com", "secret1"));
    assert_eq!(app.current_route(), Route::Profile);
    match &app.view().last_page().1 {
        PageData::Profile(acc) => assert_eq!(acc.email, "jane@x.com"),
        other => panic!("unexpected page {other:?}"),
    }
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut app = app();
    assert!(register(&mut app, "jane@x.com").success);
    let outcome = register(&mut app, "JANE@X.COM");
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Email already exists.");
}

#[test]
fn test_department_in_use_cannot_be_deleted() {
    let mut app = app();
    login_admin(&mut app);

    let ops = app.submit_intent(Intent::Department(CrudAction::Create(DepartmentInput {
        name: "Ops".into(),
        description: Some("Operations".into()),
    })));
    assert!(ops.success);
    let ops_id = ops.id.unwrap();

    let emp = app.submit_intent(Intent::Employee(CrudAction::Create(EmployeeInput {
        emp_id: "EMP-100".into(),
        user_email: "admin@example.com".into(),
        dept_id: ops_id.clone(),
        position: "Operator".into(),
        hire_date: "2024-05-01".into(),
    })));
    assert!(emp.success, "{}", emp.message);

    let outcome = app.submit_intent(Intent::Department(CrudAction::Delete { id: ops_id.clone() }));
    assert!(!outcome.success);
    assert_eq!(outcome.code, ErrorCode::DepartmentInUse);
    assert!(outcome.message.contains("used by an employee"));
    assert!(app.state().store.collections().department(&ops_id).is_some());

    let outcome = app.submit_intent(Intent::Employee(CrudAction::Delete { id: emp.id.unwrap() }));
    assert_eq!(outcome.message, "Employee deleted.");
    let outcome = app.submit_intent(Intent::Department(CrudAction::Delete { id: ops_id }));
    assert!(outcome.success);
    assert_eq!(app.view().last_result().1, Severity::Secondary);
}

#[test]
fn test_request_approval_flow() {
    let mut app = app();
    login_admin(&mut app);
    add_user(&mut app, "bob@x.com");
    app.submit_intent(Intent::Logout);

    assert!(login(&mut app, "bob@x.com", "secret1"));
    let outcome = app.submit_intent(Intent::SubmitRequest(RequestSubmit {
        kind: RequestType::Equipment,
        items: vec![RequestItem {
            name: "Laptop".into(),
            qty: 2,
        }],
    }));
    assert!(outcome.success);
    assert_eq!(app.current_route(), Route::Requests);
    let request_id = outcome.id.unwrap();

    match &app.view().last_page().1 {
        PageData::Requests(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].status, RequestStatus::Pending);
            assert_eq!(list[0].employee_email, "bob@x.com");
        }
        other => panic!("unexpected page {other:?}"),
    }

    // users cannot review
    let outcome = app.submit_intent(Intent::ApproveRequest {
        id: request_id.clone(),
    });
    assert_eq!(outcome.code, ErrorCode::AdminRequired);

    app.submit_intent(Intent::Logout);
    login_admin(&mut app);
    let outcome = app.submit_intent(Intent::ApproveRequest {
        id: request_id.clone(),
    });
    assert!(outcome.success);

    app.submit_intent(Intent::Logout);
    assert!(login(&mut app, "bob@x.com", "secret1"));
    app.submit_intent(Intent::Navigate {
        route: Route::Requests,
    });
    match &app.view().last_page().1 {
        PageData::Requests(list) => assert_eq!(list[0].status, RequestStatus::Approved),
        other => panic!("unexpected page {other:?}"),
    }
}

#[test]
fn test_user_sees_only_own_requests() {
    let mut app = app();
    login_admin(&mut app);
    add_user(&mut app, "bob@x.com");
    let day_off = || {
        Intent::SubmitRequest(RequestSubmit {
            kind: RequestType::Leave,
            items: vec![RequestItem {
                name: "Day off".into(),
                qty: 1,
            }],
        })
    };
    assert!(app.submit_intent(day_off()).success);

    app.submit_intent(Intent::Logout);
    login(&mut app, "bob@x.com", "secret1");
    assert!(app.submit_intent(day_off()).success);
    match &app.view().last_page().1 {
        PageData::Requests(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].employee_email, "bob@x.com");
        }
        other => panic!("unexpected page {other:?}"),
    }

    app.submit_intent(Intent::Logout);
    login_admin(&mut app);
    app.submit_intent(Intent::Navigate {
        route: Route::Requests,
    });
    match &app.view().last_page().1 {
        PageData::Requests(list) => assert_eq!(list.len(), 2),
        other => panic!("unexpected page {other:?}"),
    }
}

#[test]
fn test_empty_request_rejected() {
    let mut app = app();
    login_admin(&mut app);
    let outcome = app.submit_intent(Intent::SubmitRequest(RequestSubmit {
        kind: RequestType::Equipment,
        items: vec![],
    }));
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Please add at least one item.");
    assert!(app.state().store.collections().requests.is_empty());
}

#[test]
fn test_guard_redirects() {
    let mut app = app();
    assert_eq!(app.navigate(Route::Accounts), Route::Login);
    assert_eq!(app.open("#/profile"), Route::Login);
    assert_eq!(app.open("#/nowhere"), Route::Home);
    assert_eq!(app.open(""), Route::Home);

    login_admin(&mut app);
    add_user(&mut app, "bob@x.com");
    app.submit_intent(Intent::Logout);
    login(&mut app, "bob@x.com", "secret1");

    assert_eq!(app.navigate(Route::Departments), Route::Home);
    assert_eq!(app.navigate(Route::Requests), Route::Requests);
    assert_eq!(app.view().navigations.last(), Some(&Route::Requests));
}

#[test]
fn test_cannot_delete_own_account() {
    let mut app = app();
    login_admin(&mut app);
    let admin_id = app.state().session.current().unwrap().id.clone();
    let outcome = app.submit_intent(Intent::Account(CrudAction::Delete { id: admin_id }));
    assert!(!outcome.success);
    assert_eq!(outcome.message, "You cannot delete your own account.");
    assert_eq!(app.state().store.collections().accounts.len(), 1);
}

#[test]
fn test_self_demotion_reapplies_guard() {
    let mut app = app();
    login_admin(&mut app);
    app.navigate(Route::Accounts);
    let me = app.state().session.current().unwrap().clone();

    let outcome = app.submit_intent(Intent::Account(CrudAction::Update {
        id: me.id.clone(),
        data: AccountUpdate {
            first_name: me.first_name.clone(),
            last_name: me.last_name.clone(),
            email: "boss@example.com".into(),
            password: None,
            role: Role::User,
            verified: true,
        },
    }));
    assert!(outcome.success);
    assert!(!app.state().session.is_admin());
    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(
        app.state().session.current().unwrap().email,
        "boss@example.com"
    );
}

#[test]
fn test_search_filters_current_page() {
    let mut app = app();
    login_admin(&mut app);
    app.navigate(Route::Departments);

    app.submit_intent(Intent::SearchChanged {
        route: Route::Departments,
        text: "eng".into(),
    });
    match &app.view().last_page().1 {
        PageData::Departments(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].name, "Engineering");
        }
        other => panic!("unexpected page {other:?}"),
    }
}

#[test]
fn test_profile_update_and_logout() {
    let mut app = app();
    login_admin(&mut app);

    let outcome = app.submit_intent(Intent::UpdateProfile(ProfileUpdate {
        first_name: " ".into(),
        last_name: "X".into(),
    }));
    assert_eq!(outcome.message, "Please fill in your name.");

    let outcome = app.submit_intent(Intent::UpdateProfile(ProfileUpdate {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
    }));
    assert!(outcome.success);
    assert_eq!(app.state().session.current().unwrap().full_name(), "Ada Lovelace");

    let outcome = app.submit_intent(Intent::Logout);
    assert_eq!(outcome.message, "Logged out.");
    assert_eq!(app.current_route(), Route::Home);
    assert!(!app.state().session.is_authenticated());
    assert_eq!(app.view().last_result().1, Severity::Secondary);

    // wrong password
    let outcome = app.submit_intent(Intent::Login(LoginInput {
        email: "admin@example.com".into(),
        password: "wrong".into(),
    }));
    assert_eq!(outcome.code, ErrorCode::InvalidCredentials);
}

#[test]
fn test_account_pages_omit_passwords() {
    let mut app = app();
    login_admin(&mut app);
    add_user(&mut app, "bob@x.com");

    app.navigate(Route::Accounts);
    let json = serde_json::to_string(&app.view().last_page().1).unwrap();
    assert!(json.contains("bob@x.com"));
    assert!(!json.contains("password"));
    assert!(!json.contains("secret1"));

    app.navigate(Route::Profile);
    let json = serde_json::to_string(&app.view().last_page().1).unwrap();
    assert!(!json.contains("Password123!"));
}
