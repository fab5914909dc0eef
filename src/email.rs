use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::{info, warn};

use crate::config::CONFIG;
use crate::report::{build_info_text, CaptureRecord};
use crate::utils::http::get_http_client;

const DEFAULT_MESSAGE: &str = "Check out this photo I created with GeoPhoto!";

pub struct EmailRequest<'a> {
    pub to_email: &'a str,
    pub message: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub record: &'a CaptureRecord<'a>,
}

pub fn is_configured() -> bool {
    !CONFIG.emailjs_public_key.trim().is_empty()
        && !CONFIG.emailjs_service_id.trim().is_empty()
        && !CONFIG.emailjs_template_id.trim().is_empty()
}

fn recipient_name(to_email: &str) -> String {
    let name = to_email.split('@').next().unwrap_or_default().trim();
    if name.is_empty() {
        "Friend".to_string()
    } else {
        name.to_string()
    }
}

pub async fn send_email(request: &EmailRequest<'_>) -> Result<()> {
    if !is_configured() {
        return Err(anyhow!(
            "EmailJS is not configured. Set EMAILJS_PUBLIC_KEY, EMAILJS_SERVICE_ID and EMAILJS_TEMPLATE_ID."
        ));
    }

    let record = request.record;
    let message = request.message.unwrap_or(DEFAULT_MESSAGE);
    let template_params = json!({
        "to_email": request.to_email,
        "to_name": recipient_name(request.to_email),
        "message": message,
        "image_url": request.image_url.unwrap_or_default(),
        "photo_data": build_info_text(record),
        "location": format!("{}, {}", record.location.city, record.location.country),
        "weather": format!("{}, {}\u{b0}C", record.weather.condition, record.weather.temperature_c),
        "film": record.params.film.map(|film| film.display_name()).unwrap_or("analog film"),
        "date": record.captured_at.format("%Y-%m-%d").to_string(),
    });

    let payload = json!({
        "service_id": CONFIG.emailjs_service_id,
        "template_id": CONFIG.emailjs_template_id,
        "user_id": CONFIG.emailjs_public_key,
        "template_params": template_params,
    });

    let client = get_http_client();
    let url = format!(
        "{}/api/v1.0/email/send",
        CONFIG.emailjs_base_url.trim_end_matches('/')
    );
    let response = client.post(&url).json(&payload).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("EmailJS send failed: status={status}, body={body}");
        return Err(anyhow!(
            "Failed to send email. Please check your EmailJS configuration."
        ));
    }

    info!("Email sent to {}", request.to_email);
    Ok(())
}

pub async fn send_emails(request: &EmailRequest<'_>, copy_email: Option<&str>) -> Result<usize> {
    send_email(request).await?;
    let mut sent = 1;

    if let Some(copy_email) = copy_email {
        let copy_message = format!(
            "[Copy] {}",
            request.message.unwrap_or("Your GeoPhoto capture")
        );
        let copy_request = EmailRequest {
            to_email: copy_email,
            message: Some(&copy_message),
            image_url: request.image_url,
            record: request.record,
        };
        send_email(&copy_request).await?;
        sent += 1;
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geolocation::Location;
    use crate::prompt::PhotoParameters;
    use crate::weather::Weather;
    use chrono::{Local, TimeZone};

    #[test]
    fn recipient_name_derives_from_the_mailbox() {
        assert_eq!(recipient_name("ada@example.com"), "ada");
        assert_eq!(recipient_name("@example.com"), "Friend");
    }

    #[tokio::test]
    async fn unconfigured_credentials_reject_before_any_network_call() {
        if is_configured() {
            // The environment carries real EmailJS credentials; nothing to
            // assert without sending mail.
            return;
        }

        let location = Location {
            latitude: 0.0,
            longitude: 0.0,
            city: "Rome".to_string(),
            country: "Italy".to_string(),
        };
        let weather = Weather {
            temperature_c: 20,
            condition: "Clear sky",
            humidity_pct: 50,
            wind_speed_kmh: 5,
            wind_direction_deg: 0.0,
            is_day: true,
            emoji: "\u{2600}\u{fe0f}",
        };
        let params = PhotoParameters::default();
        let record = CaptureRecord {
            location: &location,
            weather: &weather,
            params: &params,
            service: "pollinations",
            prompt: "test prompt",
            captured_at: Local.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap(),
        };

        let err = send_email(&EmailRequest {
            to_email: "ada@example.com",
            message: None,
            image_url: None,
            record: &record,
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("EmailJS is not configured"));
    }
}
