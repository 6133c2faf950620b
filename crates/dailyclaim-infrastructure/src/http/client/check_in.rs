use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use dailyclaim_domain::check_in::{CheckInGateway, ClaimResponse};
use dailyclaim_domain::game::Game;
use dailyclaim_domain::shared::DomainError;

use super::types::{SignRequest, SignResponse, ACT_ORIGIN, LOCALE, SEC_CH_UA};

/// Endpoint of `game` with the locale appended
pub(super) fn sign_url(game: Game) -> Result<Url, DomainError> {
    let mut url = Url::parse(game.endpoint()).map_err(|e| {
        DomainError::InvalidConfiguration(format!("Bad endpoint for {}: {}", game.id(), e))
    })?;
    url.query_pairs_mut().append_pair("lang", LOCALE);
    Ok(url)
}

/// Browser-like headers expected by the sign endpoints
pub(super) fn sign_headers(cookie: &str, game: Game) -> Result<HeaderMap, DomainError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.6"),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::ORIGIN, HeaderValue::from_static(ACT_ORIGIN));
    headers.insert(header::REFERER, HeaderValue::from_static(ACT_ORIGIN));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json;charset=UTF-8"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(SEC_CH_UA),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?0"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static("\"Linux\""),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-site"),
    );
    headers.insert(HeaderName::from_static("sec-gpc"), HeaderValue::from_static("1"));
    headers.insert(
        HeaderName::from_static("x-rpc-signgame"),
        HeaderValue::from_static(game.id()),
    );

    let cookie = HeaderValue::from_str(cookie).map_err(|_| {
        DomainError::Transport("Cookie contains characters not allowed in a header".to_string())
    })?;
    headers.insert(header::COOKIE, cookie);

    Ok(headers)
}

impl super::HoyolabClient {
    /// Send one sign request
    pub async fn sign(&self, cookie: &str, game: Game) -> Result<ClaimResponse, DomainError> {
        let url = sign_url(game)?;
        let body = SignRequest {
            lang: LOCALE,
            act_id: game.activity_id()?,
        };

        let response = self
            .client
            .post(url)
            .headers(sign_headers(cookie, game)?)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to send sign request: {}", e)))?;

        let status = response.status();
        let response_headers = format!("{:?}", response.headers());
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to read sign response: {}", e)))?;

        log::debug!(
            "{} sign response status {}: {}",
            game.id(),
            status,
            text.chars().take(500).collect::<String>()
        );

        let parsed = SignResponse::parse(&text)?;
        if parsed.retcode != "0" && parsed.retcode != "-5003" {
            log::debug!("{} headers: {}", game.id(), response_headers);
        }

        Ok(parsed)
    }
}

#[async_trait]
impl CheckInGateway for super::HoyolabClient {
    async fn claim(&self, cookie: &str, game: Game) -> Result<ClaimResponse, DomainError> {
        self.sign(cookie, game).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_url_appends_locale() {
        let url = sign_url(Game::Gi).unwrap();
        assert_eq!(
            url.as_str(),
            "https://sg-hk4e-api.hoyolab.com/event/sol/sign?act_id=e202102251931481&lang=en-us"
        );
    }

    #[test]
    fn test_sign_headers_carry_cookie_and_game() {
        let headers = sign_headers("ltoken_v2=abc; ltuid_v2=42", Game::Hsr).unwrap();

        assert_eq!(headers[header::COOKIE], "ltoken_v2=abc; ltuid_v2=42");
        assert_eq!(headers["x-rpc-signgame"], "hsr");
        assert_eq!(headers[header::ORIGIN], "https://act.hoyolab.com");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json;charset=UTF-8");
    }

    #[test]
    fn test_cookie_with_newline_is_rejected() {
        let err = sign_headers("bad\ncookie", Game::Gi).unwrap_err();
        assert!(matches!(err, DomainError::Transport(_)));
    }
}
