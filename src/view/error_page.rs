use maud::{Markup, PreEscaped, html};

const ERROR_CSS: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Cairo', sans-serif;
            background: linear-gradient(135deg, #FDFBF7 0%, #F5EBD9 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }
        .container {
            max-width: 500px;
            width: 100%;
            background: white;
            border-radius: 24px;
            box-shadow: 0 10px 40px rgba(203, 107, 4, 0.15);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(135deg, #CB6B04 0%, #946A3D 100%);
            padding: 30px 20px;
            text-align: center;
            color: white;
        }
        .header-icon { font-size: 48px; margin-bottom: 10px; }
        .header h1 { font-family: 'Cairo', serif; font-size: 28px; font-weight: 700; }
        .error {
            text-align: center;
            padding: 40px 20px;
            color: #EF4444;
        }
        .error-icon { font-size: 64px; margin-bottom: 20px; }
        .error h3 { margin-bottom: 10px; color: #64462E; }
"#;

/// Error document shown for every failed request. The message is escaped
/// by maud, so exception text containing markup renders inert.
#[must_use]
pub fn render_error_template(message: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="ar" dir="rtl" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "خطأ - نظام مناسك الحج" }
                link href="https://fonts.googleapis.com/css2?family=Cairo:wght@400;600;700&display=swap" rel="stylesheet";
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                div class="container" {
                    div class="header" {
                        div class="header-icon" { "🕋" }
                        h1 { "نظام مناسك الحج" }
                    }
                    div class="error" {
                        div class="error-icon" { "⚠️" }
                        h3 { "حدث خطأ" }
                        p { (message) }
                    }
                }
            }
        }
    }
}
