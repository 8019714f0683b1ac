use pretty_assertions::assert_eq;
use shared_types::{LoginForm, Role, Shell, ShellView, DEMO_PASSWORD, DEMO_USERNAME};

fn sign_in(shell: &mut Shell, form: &LoginForm) -> bool {
    match form.submit() {
        Some(role) => {
            shell.login(role);
            true
        }
        None => false,
    }
}

fn demo_form(role: Role) -> LoginForm {
    let mut form = LoginForm {
        username: DEMO_USERNAME.to_string(),
        password: DEMO_PASSWORD.to_string(),
        ..LoginForm::default()
    };
    form.select_role(role);
    form
}

#[test]
fn teacher_login_then_logout_returns_to_login() {
    let mut shell = Shell::new();
    assert!(sign_in(&mut shell, &demo_form(Role::Teacher)));
    assert_eq!(shell.view(), ShellView::Dashboard(Role::Teacher));

    shell.logout();
    assert_eq!(shell.view(), ShellView::Login);
    assert_eq!(shell.role(), None);
    assert_eq!(shell, Shell::new());
}

#[test]
fn every_role_reaches_its_own_dashboard() {
    for role in [Role::Admin, Role::Teacher, Role::Student] {
        let mut shell = Shell::new();
        assert!(sign_in(&mut shell, &demo_form(role)));
        assert_eq!(shell.view(), ShellView::Dashboard(role));
    }
}

#[test]
fn any_non_empty_credentials_are_accepted() {
    let mut form = LoginForm {
        username: "x".into(),
        password: "y".into(),
        ..LoginForm::default()
    };
    form.select_role(Role::Student);

    let mut shell = Shell::new();
    assert!(sign_in(&mut shell, &form));
    assert_eq!(shell.role(), Some(Role::Student));
}

#[test]
fn submit_without_role_or_password_stays_on_login() {
    let mut shell = Shell::new();

    let no_role = LoginForm {
        username: DEMO_USERNAME.into(),
        password: DEMO_PASSWORD.into(),
        role: None,
    };
    assert!(!no_role.can_submit());
    assert!(!sign_in(&mut shell, &no_role));

    let mut no_password = demo_form(Role::Admin);
    no_password.password.clear();
    assert!(no_password.can_submit());
    assert!(!sign_in(&mut shell, &no_password));

    assert_eq!(shell.view(), ShellView::Login);
}

#[test]
fn last_selected_role_wins() {
    let mut form = demo_form(Role::Admin);
    form.select_role(Role::Student);
    assert_eq!(form.heading(), "Login as Student");
    assert_eq!(form.submit_label(), "Sign In as Student");

    let mut shell = Shell::new();
    sign_in(&mut shell, &form);
    assert_eq!(shell.view(), ShellView::Dashboard(Role::Student));
}

#[test]
fn switching_users_leaves_no_residual_role() {
    let mut shell = Shell::new();
    sign_in(&mut shell, &demo_form(Role::Admin));
    shell.logout();
    sign_in(&mut shell, &demo_form(Role::Student));
    assert_eq!(shell.role(), Some(Role::Student));
}
