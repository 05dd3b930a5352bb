// HTML rendering for the UI pages. Every interpolated value goes through `escape`.

use crate::models::UserResponse;
use crate::ui::forms::UserDraft;
use crate::ui::notification::Notification;
use crate::utils::error::FieldErrors;
use crate::utils::validation::Field;
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f5f7fb; color: #1a202c; margin: 0; }
.container { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.btn { display: inline-flex; align-items: center; gap: .4rem; padding: .45rem .9rem; border-radius: 6px; border: 1px solid #cbd5e0; background: #fff; color: #1a202c; text-decoration: none; cursor: pointer; font-size: .95rem; }
.btn-primary { background: #3b5bdb; border-color: #3b5bdb; color: #fff; }
.btn-warning { background: #f59f00; border-color: #f59f00; color: #fff; }
.btn-danger { background: #e03131; border-color: #e03131; color: #fff; }
.btn:disabled { opacity: .6; cursor: progress; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: .6rem .8rem; border-bottom: 1px solid #e2e8f0; text-align: left; }
td.actions { display: flex; gap: .4rem; }
td.actions form { margin: 0; }
.header-section { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.panel { background: #fff; border-radius: 8px; padding: 2rem; text-align: center; }
.addUserForm { display: flex; flex-direction: column; gap: 1rem; background: #fff; padding: 1.5rem; border-radius: 8px; }
.inputGroup { display: flex; flex-direction: column; gap: .3rem; }
.inputGroup input { padding: .5rem; border: 1px solid #cbd5e0; border-radius: 6px; }
.inputGroup input.error { border-color: #e03131; }
.required, .error-message { color: #e03131; }
.error-message { font-size: .85rem; min-height: 1em; }
.toast { position: fixed; top: 1rem; right: 1rem; padding: .75rem 1rem; border-radius: 6px; color: #fff; animation: fade 4s forwards; }
.toast-success { background: #2f9e44; }
.toast-error { background: #e03131; }
.spinner { width: .9rem; height: .9rem; border: 2px solid rgba(255,255,255,.4); border-top-color: #fff; border-radius: 50%; display: inline-block; animation: spin .8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes fade { 0%, 80% { opacity: 1; } 100% { opacity: 0; visibility: hidden; } }
"#;

// Busy indicators, delete confirmation and live field validation.
// The rules match crate::utils::validation.
const SCRIPT: &str = r#"
var rules = {
  name: function (v) {
    if (!v) return 'Name is required';
    if (Array.from(v).length < 2) return 'Name must be at least 2 characters long';
    if (!/^[A-Za-z\s]+$/.test(v)) return 'Name can only contain letters and spaces';
    return '';
  },
  email: function (v) {
    if (!v) return 'Email is required';
    if (!/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(v)) return 'Please enter a valid email address';
    return '';
  },
  address: function (v) {
    if (!v) return 'Address is required';
    if (Array.from(v).length < 5) return 'Address must be at least 5 characters long';
    return '';
  }
};
document.querySelectorAll('form[data-busy]').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    if (form.dataset.confirm && !window.confirm(form.dataset.confirm)) {
      event.preventDefault();
      return;
    }
    var button = form.querySelector('button[type=submit]');
    if (button) {
      button.disabled = true;
      button.innerHTML = '<span class="spinner"></span> ' + form.dataset.busy;
    }
    form.querySelectorAll('input').forEach(function (input) { input.readOnly = true; });
  });
});
document.querySelectorAll('form[data-validate] input').forEach(function (input) {
  var check = function () {
    var message = rules[input.name](input.value.trim());
    document.getElementById(input.name + '-error').textContent = message;
    input.classList.toggle('error', message !== '');
  };
  input.addEventListener('input', check);
  input.addEventListener('blur', check);
});
"#;

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn layout(title: &str, notification: Option<&Notification>, body: &str) -> String {
    let toast = notification
        .map(|n| {
            format!(
                r#"<div class="toast toast-{}" role="status">{}</div>"#,
                n.level.as_str(),
                escape(&n.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
{toast}
{body}
</div>
<script>{SCRIPT}</script>
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn user_list(users: &[UserResponse]) -> String {
    let mut html = String::from(
        r#"<div class="header-section">
<div><h1 class="page-title">User Management System</h1><p class="page-subtitle">Manage your users with ease</p></div>
<a href="/add" class="btn btn-primary add-user-btn">Add User</a>
</div>"#,
    );

    if users.is_empty() {
        html.push_str(
            r#"<div class="panel noData"><h3>No Records To Display</h3><p>Please Add New User to get started</p></div>"#,
        );
        return html;
    }

    html.push_str(
        r#"<table class="modern-table"><thead><tr><th>Serial No.</th><th>Name</th><th>Email</th><th>Address</th><th>Actions</th></tr></thead><tbody>"#,
    );

    for (index, user) in users.iter().enumerate() {
        let id = urlencoding::encode(&user.id);
        let confirm = format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            user.name
        );
        // Writing into a String cannot fail
        let _ = write!(
            html,
            r#"<tr><td>{serial}</td><td>{name}</td><td>{email}</td><td>{address}</td><td class="actions"><a href="/update/{id}" class="btn btn-warning" title="Edit User">Edit</a><form method="post" action="/delete/{id}" data-busy="" data-confirm="{confirm}"><button type="submit" class="btn btn-danger" title="Delete User">Delete</button></form></td></tr>"#,
            serial = index + 1,
            name = escape(&user.name),
            email = escape(&user.email),
            address = escape(&user.address),
            id = escape(&id),
            confirm = escape(&confirm),
        );
    }

    html.push_str("</tbody></table>");
    html
}

/// Retryable error state for the list view
pub fn list_error(reason: &str) -> String {
    format!(
        r#"<div class="panel error-container"><h3>Oops! Something went wrong</h3><p>{}</p><a href="/" class="btn btn-primary retry-btn">Try Again</a></div>"#,
        escape(reason)
    )
}

/// Everything needed to draw the create or edit form
pub struct FormView<'a> {
    pub heading: &'a str,
    pub action: &'a str,
    pub submit_label: &'a str,
    pub busy_label: &'a str,
    pub draft: &'a UserDraft,
    pub errors: &'a FieldErrors,
    /// Validate fields in the browser on change and blur
    pub live_validation: bool,
}

pub fn user_form(view: &FormView<'_>) -> String {
    let fields = [
        (Field::Name, "Name:", "text", "Enter your Name", view.draft.name.as_str()),
        (Field::Email, "E-mail:", "email", "Enter your Email", view.draft.email.as_str()),
        (Field::Address, "Address:", "text", "Enter your Address", view.draft.address.as_str()),
    ];

    let mut inputs = String::new();
    for (field, label, input_type, placeholder, value) in fields {
        let name = field.as_str();
        let error = view.errors.get(name).map(String::as_str).unwrap_or("");
        let required = if view.live_validation { r#" <span class="required">*</span>"# } else { "" };
        let _ = write!(
            inputs,
            r#"<div class="inputGroup"><label for="{name}">{label}{required}</label><input type="{input_type}" id="{name}" name="{name}" value="{value}" autocomplete="off" placeholder="{placeholder}" class="{class}"><span class="error-message" id="{name}-error">{error}</span></div>"#,
            value = escape(value),
            class = if error.is_empty() { "" } else { "error" },
            error = escape(error),
        );
    }

    format!(
        r#"<div class="addUser">
<a href="/" class="btn">&larr; Back</a>
<h3>{heading}</h3>
<form class="addUserForm" method="post" action="{action}" data-busy="{busy}"{validate} novalidate>
{inputs}
<div class="inputGroup"><button type="submit" class="btn btn-primary">{submit}</button></div>
</form>
</div>"#,
        heading = escape(view.heading),
        action = escape(view.action),
        busy = escape(view.busy_label),
        validate = if view.live_validation { " data-validate" } else { "" },
        submit = escape(view.submit_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserResponse {
        UserResponse {
            id: "64b7f0c2a1b2c3d4e5f60718".into(),
            name: name.into(),
            email: "ann@example.com".into(),
            address: "12 Main Street".into(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"A&B's"</b>"#), "&lt;b&gt;&quot;A&amp;B&#x27;s&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_list_rows_are_numbered_and_escaped() {
        let html = user_list(&[user("Ann Lee"), user("<script>")]);

        assert!(html.contains("<td>1</td><td>Ann Lee</td>"));
        assert!(html.contains("<td>2</td><td>&lt;script&gt;</td>"));
        assert!(html.contains(r#"href="/update/64b7f0c2a1b2c3d4e5f60718""#));
        assert!(html.contains("Are you sure you want to delete &quot;Ann Lee&quot;?"));
        assert!(!html.contains("<td><script>"));
    }

    #[test]
    fn test_empty_list_panel() {
        assert!(user_list(&[]).contains("No Records To Display"));
    }

    #[test]
    fn test_form_shows_field_errors() {
        let draft = UserDraft {
            name: "A1".into(),
            email: "ann@example.com".into(),
            address: "12 Main Street".into(),
        };
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name can only contain letters and spaces".to_string());

        let html = user_form(&FormView {
            heading: "Update User",
            action: "/update/1",
            submit_label: "Update User",
            busy_label: "Updating User...",
            draft: &draft,
            errors: &errors,
            live_validation: true,
        });

        assert!(html.contains(r#"id="name-error">Name can only contain letters and spaces</span>"#));
        assert!(html.contains(r#"id="email-error"></span>"#));
        assert!(html.contains("data-validate"));
        assert!(html.contains(r#"value="ann@example.com""#));
    }

    #[test]
    fn test_layout_renders_notification() {
        let html = layout("Users", Some(&Notification::error("User not found")), "");

        assert!(html.contains(r#"<div class="toast toast-error" role="status">User not found</div>"#));
    }

    #[test]
    fn test_script_counts_characters_not_code_units() {
        assert!(!SCRIPT.contains("v.length"));
        assert!(SCRIPT.contains("Array.from(v).length < 2"));
        assert!(SCRIPT.contains("Array.from(v).length < 5"));
    }
}
