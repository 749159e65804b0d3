/// Render the signup form. `message`, when present, is shown under the
/// form as an inline error.
pub fn render(message: Option<&str>) -> String {
    let message = message
        .map(|m| format!(r#"<p class="error-message">{}</p>"#, html_escape(m)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Sign Up</title>
    <style>
        .content {{ display: flex; justify-content: center; padding: 2rem; }}
        .signup-form {{ display: flex; flex-direction: column; gap: 1rem; min-width: 18rem; }}
        .signup-form label {{ display: flex; flex-direction: column; gap: 0.25rem; }}
        .error-message {{ color: #d32f2f; margin: 0; }}
    </style>
</head>
<body>
    <div class="content">
        <form class="signup-form" method="POST" action="/signup">
            <label for="email">
                Email
                <input type="email" id="email" name="email" placeholder="you@example.com" required>
            </label>
            <label for="password">
                Password
                <input type="password" id="password" name="password" placeholder="••••••••" required>
            </label>
            <button type="submit">Sign Up</button>
            {message}
        </form>
    </div>
</body>
</html>
"#
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
