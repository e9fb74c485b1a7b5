use crate::error::CredentialError;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Static style table applied to every rendered page.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub window_width: u32,
    pub window_height: u32,
    pub font_family: &'static str,
    pub heading_size: u32,
    pub label_size: u32,
    pub button_size: u32,
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: ButtonStyle,
    pub success: ButtonStyle,
}

#[derive(Debug)]
pub struct ButtonStyle {
    pub foreground: &'static str,
    pub background: &'static str,
    pub hover: &'static str,
}

impl Theme {
    pub const ARC: Theme = Theme {
        name: "arc",
        window_width: 450,
        window_height: 550,
        font_family: "Helvetica, Arial, sans-serif",
        heading_size: 28,
        label_size: 12,
        button_size: 14,
        background: "#f5f6f7",
        foreground: "#5c616c",
        accent: ButtonStyle {
            foreground: "white",
            background: "#3498db",
            hover: "#2980b9",
        },
        success: ButtonStyle {
            foreground: "white",
            background: "#2ecc71",
            hover: "#27ae60",
        },
    };

    fn stylesheet(&self) -> String {
        format!(
            r#"
        body {{
            margin: 0;
            background-color: #d3dae3;
            font-family: {font};
        }}
        .window {{
            width: {w}px;
            height: {h}px;
            margin: 40px auto;
            background-color: {bg};
            color: {fg};
            box-sizing: border-box;
            padding: 0 20px;
        }}
        h1 {{
            font-size: {heading}px;
            font-weight: bold;
            text-align: center;
            margin: 0;
            padding: 40px 0 20px;
        }}
        label {{ font-size: {label}px; }}
        .row {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin: 10px 0;
        }}
        input {{ font-size: {label}px; }}
        .actions {{ text-align: center; margin: 20px 0; }}
        .btn {{
            display: inline-block;
            font-size: {button}px;
            padding: 5px 10px;
            border: none;
            text-decoration: none;
            cursor: pointer;
        }}
        .btn-accent {{ color: {a_fg}; background: {a_bg}; }}
        .btn-accent:hover {{ background: {a_hover}; }}
        .btn-success {{ color: {s_fg}; background: {s_bg}; }}
        .btn-success:hover {{ background: {s_hover}; }}
        .notice {{ padding: 10px; margin-top: 10px; border-left: 4px solid; }}
        .notice-info {{ border-color: {s_bg}; }}
        .notice-warning {{ border-color: #f39c12; }}
        .notice-error {{ border-color: #e74c3c; }}
        .notice strong {{ display: block; }}
        "#,
            font = self.font_family,
            w = self.window_width,
            h = self.window_height,
            bg = self.background,
            fg = self.foreground,
            heading = self.heading_size,
            label = self.label_size,
            button = self.button_size,
            a_fg = self.accent.foreground,
            a_bg = self.accent.background,
            a_hover = self.accent.hover,
            s_fg = self.success.foreground,
            s_bg = self.success.background,
            s_hover = self.success.hover,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
}

impl View {
    fn title(self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Register => "Register",
        }
    }

    fn action(self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Register => "/register",
        }
    }

    /// The navigation link to the other view.
    fn switch(self) -> (&'static str, &'static str) {
        match self {
            View::Login => ("/register", "Don't have an account? Register"),
            View::Register => ("/login", "Already have an account? Login"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// The dialog shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn registered() -> Self {
        Self {
            severity: Severity::Info,
            title: "Success".into(),
            message: "Registration successful!".into(),
        }
    }

    pub fn welcome(username: &str) -> Self {
        Self {
            severity: Severity::Info,
            title: "Login Success".into(),
            message: format!("Welcome, {username}!"),
        }
    }
}

impl From<&CredentialError> for Notice {
    fn from(err: &CredentialError) -> Self {
        let (severity, title, message) = match err {
            CredentialError::Validation => {
                (Severity::Warning, "Input Error", err.to_string())
            }
            CredentialError::DuplicateUsername(_) => (
                Severity::Error,
                "Error",
                "Username already exists. Please choose another.".to_string(),
            ),
            CredentialError::InvalidCredentials => {
                (Severity::Error, "Login Failed", err.to_string())
            }
            CredentialError::Connection(_) => {
                (Severity::Error, "Database Error", format!("Error: {err}"))
            }
            CredentialError::Storage(_) | CredentialError::WorkerUnavailable => {
                (Severity::Error, "Error", format!("Error: {err}"))
            }
        };
        Self {
            severity,
            title: title.to_string(),
            message,
        }
    }
}

/// Values to pre-fill into the form fields.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub username: String,
    pub password: String,
}

pub fn render_page(theme: &Theme, view: View, notice: Option<&Notice>, values: &FormValues) -> String {
    let notice_html = notice
        .map(|n| {
            format!(
                r#"<div class="notice notice-{sev}" role="alertdialog"><strong>{title}</strong>{message}</div>"#,
                sev = n.severity.as_str(),
                title = encode_text(&n.title),
                message = encode_text(&n.message),
            )
        })
        .unwrap_or_default();
    let (switch_href, switch_text) = view.switch();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Login &amp; Registration</title>
    <style>{style}</style>
</head>
<body class="theme-{theme}">
    <div class="window">
        {notice}
        <h1>{title}</h1>
        <form method="post" action="{action}">
            <div class="row">
                <label for="username">Username</label>
                <input id="username" name="username" type="text" value="{username}">
            </div>
            <div class="row">
                <label for="password">Password</label>
                <input id="password" name="password" type="password" value="{password}">
            </div>
            <div class="actions">
                <button class="btn btn-accent" type="submit">{title}</button>
            </div>
        </form>
        <div class="actions">
            <a class="btn btn-success" href="{switch_href}">{switch_text}</a>
        </div>
    </div>
</body>
</html>
"#,
        style = theme.stylesheet(),
        theme = theme.name,
        notice = notice_html,
        title = view.title(),
        action = view.action(),
        username = encode_double_quoted_attribute(&values.username),
        password = encode_double_quoted_attribute(&values.password),
        switch_href = switch_href,
        switch_text = encode_text(switch_text),
    )
}
