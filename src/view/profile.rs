use maud::{Markup, PreEscaped, html};

use crate::MAP_URL_BASE;
use crate::model::{NOT_AVAILABLE, PilgrimProfile};

const PAGE_CSS: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Cairo', sans-serif;
            background: linear-gradient(135deg, #FDFBF7 0%, #F5EBD9 100%);
            min-height: 100vh;
            padding: 20px;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .container {
            max-width: 500px;
            width: 100%;
            background: white;
            border-radius: 24px;
            box-shadow: 0 10px 40px rgba(203, 107, 4, 0.15);
            overflow: hidden;
            animation: slideUp 0.5s ease-out;
        }
        @keyframes slideUp {
            from { opacity: 0; transform: translateY(30px); }
            to { opacity: 1; transform: translateY(0); }
        }
        .header {
            background: linear-gradient(135deg, #CB6B04 0%, #946A3D 100%);
            padding: 30px 20px;
            text-align: center;
            color: white;
        }
        .header-icon { font-size: 48px; margin-bottom: 10px; }
        .header h1 { font-family: 'Amiri', serif; font-size: 28px; font-weight: 700; margin-bottom: 5px; }
        .header p { font-size: 14px; opacity: 0.9; }
        .content { padding: 30px 20px; }
        .pilgrim-name {
            font-family: 'Amiri', serif;
            font-size: 32px;
            font-weight: 700;
            color: #64462E;
            text-align: center;
            margin-bottom: 10px;
        }
        .pilgrim-name-en { font-size: 18px; color: #B88B4D; text-align: center; margin-bottom: 20px; }
        .status-badge {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 8px;
            width: fit-content;
            margin: 0 auto 30px;
            padding: 8px 16px;
            border-radius: 20px;
            font-size: 14px;
            font-weight: 600;
        }
        .status-healthy { background: #C5D9C5; color: #568256; }
        .status-sick { background: #FFE4CC; color: #F97316; }
        .status-emergency { background: #FFE4E6; color: #EF4444; }
        .info-section { margin-bottom: 25px; }
        .section-title {
            display: flex;
            align-items: center;
            gap: 10px;
            font-size: 16px;
            font-weight: 700;
            color: #64462E;
            margin-bottom: 15px;
            padding-bottom: 10px;
            border-bottom: 2px solid #F5EBD9;
        }
        .section-icon { font-size: 20px; color: #CB6B04; }
        .info-row {
            display: flex;
            justify-content: space-between;
            padding: 12px 0;
            border-bottom: 1px solid #FDFBF7;
        }
        .info-row:last-child { border-bottom: none; }
        .info-label { color: #9CA3AF; font-size: 14px; }
        .info-value { color: #64462E; font-size: 14px; font-weight: 600; text-align: left; }
        .map-link { color: #CB6B04; text-decoration: underline; font-weight: 600; }
        .action-buttons { display: flex; gap: 12px; margin-top: 30px; }
        .btn {
            flex: 1;
            padding: 16px;
            border: none;
            border-radius: 12px;
            font-family: 'Cairo', sans-serif;
            font-size: 16px;
            font-weight: 700;
            cursor: pointer;
            transition: all 0.3s ease;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 8px;
            text-decoration: none;
        }
        .btn-emergency { background: #EF4444; color: white; box-shadow: 0 4px 12px rgba(239, 68, 68, 0.3); }
        .btn-emergency:hover { background: #DC2626; transform: translateY(-2px); box-shadow: 0 6px 16px rgba(239, 68, 68, 0.4); }
        .btn-call { background: #568256; color: white; box-shadow: 0 4px 12px rgba(86, 130, 86, 0.3); }
        .btn-call:hover { background: #4A6F4A; transform: translateY(-2px); box-shadow: 0 6px 16px rgba(86, 130, 86, 0.4); }
        .footer {
            text-align: center;
            padding: 20px;
            background: #FDFBF7;
            color: #B88B4D;
            font-size: 12px;
        }
        .footer-icon { font-size: 24px; margin-bottom: 8px; }
        @media (max-width: 480px) {
            .container { border-radius: 16px; }
            .pilgrim-name { font-size: 26px; }
            .action-buttons { flex-direction: column; }
        }
"#;

fn info_row(label: &str, value: Markup) -> Markup {
    html! {
        div class="info-row" {
            span class="info-label" { (label) }
            span class="info-value" { (value) }
        }
    }
}

fn text_row(label: &str, value: &str) -> Markup {
    info_row(label, html! { (value) })
}

fn camp_location_value(profile: &PilgrimProfile, location_name: &str) -> Markup {
    match profile.camp_coordinates() {
        Some((lat, lng)) => html! {
            a href=(format!("{MAP_URL_BASE}{lat},{lng}")) target="_blank" class="map-link" {
                "📍 " (location_name)
            }
        },
        None => html! { (location_name) },
    }
}

/// Full profile document for one pilgrim. Pure: same profile in, same
/// markup out. Every interpolated value goes through maud's escaping.
#[must_use]
pub fn render_profile_template(profile: &PilgrimProfile) -> Markup {
    let status = profile.health_status().display();
    let name_arabic = profile.full_name_arabic.as_deref().unwrap_or(NOT_AVAILABLE);

    html! {
        (maud::DOCTYPE)
        html lang="ar" dir="rtl" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "معلومات الحاج - نظام مناسك الحج" }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Cairo:wght@400;600;700;800&family=Amiri:wght@400;700&display=swap" rel="stylesheet";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div class="container" {
                    div class="header" {
                        div class="header-icon" { "🕋" }
                        h1 { "نظام مناسك الحج" }
                        p { "معلومات الحاج" }
                    }

                    div class="content" {
                        div class="pilgrim-name" { (name_arabic) }
                        @if let Some(name_english) = &profile.full_name_english {
                            div class="pilgrim-name-en" { (name_english) }
                        }

                        div class=(format!("status-badge {}", status.class)) {
                            span { (status.icon) }
                            span { (status.label) }
                        }

                        div class="info-section" {
                            div class="section-title" {
                                span class="section-icon" { "👤" }
                                span { "المعلومات الأساسية" }
                            }
                            (text_row("الرقم الوطني", &profile.masked_national_id()))
                            @if let Some(blood_type) = &profile.blood_type {
                                (text_row("فصيلة الدم", blood_type))
                            }
                        }

                        div class="info-section" {
                            div class="section-title" {
                                span class="section-icon" { "⛺" }
                                span { "معلومات الرحلة" }
                            }
                            @if let Some(group_number) = &profile.group_number {
                                (text_row("رقم المجموعة", group_number))
                            }
                            @if let Some(bus_number) = &profile.bus_number {
                                (text_row("رقم الباص", bus_number))
                            }
                            @if let Some(camp_name) = &profile.camp_name {
                                (text_row("المخيم", camp_name))
                            }
                            @if let Some(location_name) = &profile.camp_location_name {
                                (info_row("موقع المخيم", camp_location_value(profile, location_name)))
                            }
                        }

                        div class="info-section" {
                            div class="section-title" {
                                span class="section-icon" { "📞" }
                                span { "جهة الاتصال للطوارئ" }
                            }
                            @if let Some(contact_name) = &profile.emergency_contact_name {
                                (text_row("الاسم", contact_name))
                            }
                            @if let Some(contact_phone) = &profile.emergency_contact_phone {
                                (text_row("رقم الهاتف", contact_phone))
                            }
                        }

                        div class="action-buttons" {
                            @if let Some(contact_phone) = &profile.emergency_contact_phone {
                                a href=(format!("tel:{contact_phone}")) class="btn btn-emergency" {
                                    span { "📞" }
                                    span { "اتصال طوارئ" }
                                }
                            }
                            @if let Some(phone) = &profile.phone {
                                a href=(format!("tel:{phone}")) class="btn btn-call" {
                                    span { "📱" }
                                    span { "اتصال بالحاج" }
                                }
                            }
                        }
                    }

                    div class="footer" {
                        div class="footer-icon" { "📱" }
                        p { "نظام إدارة ومتابعة الحجاج" }
                        p style="margin-top: 5px; opacity: 0.7;" { "© 2024 مناسك الحج" }
                    }
                }
            }
        }
    }
}
